use business::domain::notifier::Notifier;

/// Prints cart notifications to the terminal, errors on stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("ok: {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// User-visible notification port (toasts in a graphical storefront,
/// terminal lines in the CLI).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

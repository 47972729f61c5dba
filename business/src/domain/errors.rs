/// Errors raised by remote service ports (cart and catalog APIs).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("remote.transport")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("remote.rejected")]
    Rejected { status: u16, message: Option<String> },
    /// The server answered 2xx but the body could not be decoded.
    #[error("remote.invalid_response")]
    InvalidResponse,
}

impl RemoteError {
    pub fn transport(detail: impl Into<String>) -> Self {
        RemoteError::Transport(detail.into())
    }
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        RemoteError::Rejected { status, message }
    }
    pub fn invalid_response() -> Self {
        RemoteError::InvalidResponse
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RemoteError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

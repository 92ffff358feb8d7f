//! Error types for the Parley client library.

use std::error::Error;
use std::hash::{Hash, Hasher};

/// Result type for client operations that fail with a business error.
pub type Result<T> = std::result::Result<T, BusinessError>;

/// Capability contract for inbound notifications that can carry a
/// business error.
///
/// `BusinessError` only needs a numeric code and a presence-aware reason;
/// it never depends on the concrete wire record. Implement this trait to
/// derive errors from alternative notification representations.
pub trait ErrorNotification {
    /// Server-defined error code.
    fn code(&self) -> i32;

    /// Human-readable reason, if the server provided one.
    ///
    /// `None` means the field was absent on the wire, which is distinct
    /// from an empty string.
    fn reason(&self) -> Option<&str>;
}

/// A business-level failure reported by the server.
///
/// Carries a server-defined error code and an optional explanation.
/// The meaning of individual codes is a contract between client and
/// server and is not interpreted here.
///
/// Two errors are equal iff their code and reason are equal; the chained
/// [`caused_by`](BusinessError::caused_by) error is diagnostic-only and
/// excluded from equality and hashing.
#[derive(Debug, thiserror::Error)]
#[error("{display_message}")]
pub struct BusinessError {
    code: i32,
    reason: Option<String>,
    display_message: String,
    #[source]
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl BusinessError {
    /// Create an error with a code and no reason.
    pub fn new(code: i32) -> Self {
        Self::build(code, None)
    }

    /// Create an error with a code and a reason.
    pub fn with_reason(code: i32, reason: impl Into<String>) -> Self {
        Self::build(code, Some(reason.into()))
    }

    /// Derive an error from an inbound notification.
    ///
    /// Reads the code unconditionally; the reason is mapped only when the
    /// notification reports it as present.
    pub fn from_notification(notification: &impl ErrorNotification) -> Self {
        match notification.reason() {
            Some(reason) => Self::with_reason(notification.code(), reason),
            None => Self::new(notification.code()),
        }
    }

    /// Attach the lower-level error that triggered this one.
    ///
    /// The cause is kept for diagnostics (exposed via
    /// [`Error::source`]) and does not affect equality or display text.
    pub fn caused_by(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    fn build(code: i32, reason: Option<String>) -> Self {
        let display_message = match &reason {
            Some(reason) => format!("code: {}, reason: {}", code, reason),
            None => format!("code: {}", code),
        };
        Self {
            code,
            reason,
            display_message,
            cause: None,
        }
    }

    /// Returns the server-defined error code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the reason, if the server provided one.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the human-readable message for this error.
    pub fn display_message(&self) -> &str {
        &self.display_message
    }
}

// Equality and hash cover (code, reason) only; the cause is a side
// channel and Box<dyn Error> is not comparable anyway.
impl PartialEq for BusinessError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.reason == other.reason
    }
}

impl Eq for BusinessError {}

impl Hash for BusinessError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.reason.hash(state);
    }
}

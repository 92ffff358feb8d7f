//! Wire-level notification record.
//!
//! Inbound notifications report the outcome of a previously sent request.
//! Only the fields relevant to error derivation are modeled here; the
//! presence semantics of the optional fields mirror the wire encoding,
//! so an absent reason stays distinguishable from an empty one.

use crate::error::ErrorNotification;

/// Server notification carrying the outcome of a request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Notification {
    /// Identifier of the request this notification responds to.
    #[prost(int64, optional, tag = "1")]
    pub request_id: Option<i64>,
    /// Outcome code; a missing field reads as the wire default.
    #[prost(int32, optional, tag = "2")]
    pub code: Option<i32>,
    /// Optional human-readable explanation for a rejection.
    #[prost(string, optional, tag = "3")]
    pub reason: Option<String>,
}

impl ErrorNotification for Notification {
    fn code(&self) -> i32 {
        self.code()
    }

    fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

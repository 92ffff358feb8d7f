//! Core error types for the Parley messaging client SDK.
//!
//! This crate provides the business-level failure value shared by the
//! Parley clients: a server-defined error code plus an optional reason,
//! derived from inbound notifications and propagated as the error payload
//! of client operations.
//!
//! # Quick Start
//!
//! ```rust
//! use parley_client_core::{BusinessError, Notification};
//!
//! // Derived from a server notification.
//! let notification = Notification {
//!     request_id: Some(42),
//!     code: Some(404),
//!     reason: Some("not found".to_string()),
//! };
//! let err = BusinessError::from_notification(&notification);
//! assert_eq!(err.to_string(), "code: 404, reason: not found");
//!
//! // Or constructed directly.
//! assert_eq!(err, BusinessError::with_reason(404, "not found"));
//! ```
//!
//! # Mocking for Tests
//!
//! Implement the `ErrorNotification` trait to derive errors from a mock
//! notification type:
//!
//! ```rust
//! use parley_client_core::{BusinessError, ErrorNotification};
//!
//! struct MockNotification;
//!
//! impl ErrorNotification for MockNotification {
//!     fn code(&self) -> i32 {
//!         7
//!     }
//!
//!     fn reason(&self) -> Option<&str> {
//!         None
//!     }
//! }
//!
//! let err = BusinessError::from_notification(&MockNotification);
//! assert_eq!(err.to_string(), "code: 7");
//! ```

pub mod error;
pub mod notification;

// Re-export main types at crate root
pub use error::{BusinessError, ErrorNotification, Result};
pub use notification::Notification;

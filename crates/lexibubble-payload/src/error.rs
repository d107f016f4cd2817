//! Diagnostics for provider payloads.
//!
//! Decoding and validation report structured [`Diagnostic`]s that carry an
//! [`ErrorCode`], labeled [`Span`](crate::Span)s into the raw payload, and
//! optional help text. Failures are wrapped in a [`PayloadError`].

mod diagnostic;
mod error_code;
mod label;
mod payload_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use payload_error::PayloadError;
pub use severity::Severity;

//! Severity levels and the error code record used by the catalogue

mod error_code;
mod severity;

pub use error_code::{ErrorCode, ErrorType};
pub use severity::Severity;

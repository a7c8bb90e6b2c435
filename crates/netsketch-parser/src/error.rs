//! Error and diagnostic system for the import parser.
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, labeled source
//! locations, and help text. Multiple diagnostics are wrapped in
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use netsketch_parser::error::{Diagnostic, ErrorCode};
//! # use netsketch_parser::Span;
//!
//! let diag = Diagnostic::error("connection has no source label")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(0..2), "expected a label before `->`")
//!     .with_help("write lines as `<label> -> <label>`");
//! assert_eq!(diag.to_string(), "error[E100]: connection has no source label");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;

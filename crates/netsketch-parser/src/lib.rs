//! # Netsketch Parser
//!
//! Parser for the Netsketch bulk import format: one `<label> -> <label>`
//! connection per line.
//!
//! ## Usage
//!
//! ```
//! # use netsketch_parser::{parse_script, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let script = "gateway -> core\ncore -> web\ncore -> db";
//!
//!     let relations = parse_script(script)?;
//!     assert_eq!(relations.len(), 3);
//!     assert_eq!(relations[1].from, "core");
//!     Ok(())
//! }
//! ```
//!
//! Callers that apply relations as they are read, stopping at the first
//! malformed line, use the [`relations`] iterator instead.

pub mod error;
mod script;
mod span;

pub use script::{DELIMITER, Relation, Relations, parse_script, relations};
pub use span::Span;

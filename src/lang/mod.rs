/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language.
A line of text becomes a `Line`: an optional line number and its tokens,
already divided into colon-separated statements.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::split_statements;
pub use line::Line;

/// `None` marks a direct (immediate) line.
pub type LineNumber = Option<u16>;

pub const MAX_LINE_NUMBER: u16 = 65529;

/*!
## Rust Machine Module

This Rust module stores and executes BASIC programs. Lines are kept
sorted in a `Listing`; the `Runtime` dispatches one statement at a time
and talks to the outside world only through a `Host`.

*/

mod config;
mod control;
mod data;
mod expression;
mod host;
mod listing;
mod operation;
mod runtime;
mod stack;
mod statement;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use config::Settings;
pub use control::Address;
pub use control::Cursor;
pub use control::LoopFrame;
pub use data::Data;
pub use expression::evaluate;
pub use expression::operand;
pub use expression::string_value;
pub use host::Host;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::format_number;
pub use val::Val;
pub use var::Var;

/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::{lex, scan, BasicLexer};
pub use line::Line;

pub type Column = std::ops::Range<usize>;

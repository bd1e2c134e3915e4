//! Terrapin lexer: converts raw script text into a classified token stream.
//!
//! Two stages: [`clean`] strips comment lines and splits on whitespace;
//! [`Classifier`] turns each word into a typed [`Token`] using ordered
//! pattern rules and a per-language keyword translation table.

mod classifier;
mod clean;
pub mod language;
pub mod token;

pub use classifier::Classifier;
pub use clean::clean;
pub use language::Language;
pub use token::{Token, TokenKind};

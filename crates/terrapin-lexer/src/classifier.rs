//! The token classifier.
//!
//! Converts cleaned words into typed tokens by trying an ordered list of
//! pattern rules — numeric literal, variable reference, list start, list
//! end, localized keyword, bare identifier — first match wins.

use terrapin_types::ScriptError;
use tracing::trace;

use crate::language::Language;
use crate::token::Token;

/// Classifies a cleaned word sequence against one language's keyword table.
///
/// Localized keywords translate to canonical command names. Any other
/// identifier-shaped word also classifies as a command, keeping its own
/// spelling — that is how user-defined procedure names flow through, and
/// why a genuinely unknown command fails at dispatch (`UnknownCommand`)
/// rather than here. Only words no rule accepts are `UnrecognizedToken`.
pub struct Classifier<'a> {
    language: &'a Language,
}

impl<'a> Classifier<'a> {
    pub fn new(language: &'a Language) -> Self {
        Self { language }
    }

    /// Classify every word, 1:1 and order-preserving.
    pub fn classify(&self, words: &[String]) -> terrapin_types::Result<Vec<Token>> {
        let mut tokens = Vec::with_capacity(words.len());
        for word in words {
            let token = self.classify_word(word)?;
            trace!(word = word.as_str(), kind = ?token.kind, "classified");
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn classify_word(&self, word: &str) -> terrapin_types::Result<Token> {
        if let Some(value) = parse_numeric(word) {
            return Ok(Token::constant(word, value));
        }
        if is_variable(word) {
            return Ok(Token::variable(word));
        }
        if word == "[" {
            return Ok(Token::list_start());
        }
        if word == "]" {
            return Ok(Token::list_end());
        }
        if let Some(canonical) = self.language.translate(word) {
            return Ok(Token::command(canonical));
        }
        if is_identifier(word) {
            return Ok(Token::command(word));
        }
        Err(ScriptError::UnrecognizedToken(word.to_owned()))
    }
}

/// Parse a numeric literal: optional sign, digits, optional fraction.
///
/// Stricter than `f64::from_str`: `inf`, `nan`, and exponent forms are not
/// part of the command grammar.
fn parse_numeric(word: &str) -> Option<f64> {
    let digits = word.strip_prefix('-').unwrap_or(word);
    if digits.is_empty() {
        return None;
    }
    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return None;
    }
    word.parse().ok()
}

fn is_variable(word: &str) -> bool {
    word.strip_prefix(':').is_some_and(is_identifier)
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_alphabetic())
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '?')
}

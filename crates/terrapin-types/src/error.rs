use serde::{Deserialize, Serialize};
use std::fmt;

/// An interpreter error.
///
/// Every error carries a stable [`ErrorKind`] identifier; the payload is the
/// offending source text, for display only. The embedding layer localizes by
/// kind — it must not parse the messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ScriptError {
    /// A word matched no classification rule and is not a known procedure.
    #[error("unrecognized token '{0}'")]
    UnrecognizedToken(String),
    /// Unbalanced command blocks: a stray `]` or an unclosed `[`.
    #[error("malformed command block")]
    MalformedBlock,
    /// Wrong child count or child kind for a command, detected while the
    /// tree is built — before anything runs.
    #[error("wrong arguments to '{0}'")]
    ArityMismatch(String),
    /// A dispatched name with no builtin behavior and no matching procedure.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    /// A variable read before any `make` bound it.
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
}

impl ScriptError {
    /// The stable kind identifier for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedToken(_) => ErrorKind::UnrecognizedToken,
            Self::MalformedBlock => ErrorKind::MalformedBlock,
            Self::ArityMismatch(_) => ErrorKind::ArityMismatch,
            Self::UnknownCommand(_) => ErrorKind::UnknownCommand,
            Self::UndefinedVariable(_) => ErrorKind::UndefinedVariable,
        }
    }

    /// Returns `true` if this error can only arise during evaluation.
    ///
    /// Structural errors abort before anything runs; evaluation errors leave
    /// the mutations of earlier statements in place.
    pub fn is_runtime(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand(_) | Self::UndefinedVariable(_)
        )
    }
}

/// The payload-free error identifier surfaced to the embedding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UnrecognizedToken,
    MalformedBlock,
    ArityMismatch,
    UnknownCommand,
    UndefinedVariable,
}

impl ErrorKind {
    /// All kinds, in a stable order.
    pub const ALL: &'static [ErrorKind] = &[
        ErrorKind::UnrecognizedToken,
        ErrorKind::MalformedBlock,
        ErrorKind::ArityMismatch,
        ErrorKind::UnknownCommand,
        ErrorKind::UndefinedVariable,
    ];

    /// The stable identifier string, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnrecognizedToken => "UnrecognizedToken",
            Self::MalformedBlock => "MalformedBlock",
            Self::ArityMismatch => "ArityMismatch",
            Self::UnknownCommand => "UnknownCommand",
            Self::UndefinedVariable => "UndefinedVariable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Shared types for the Terrapin interpreter.
//!
//! This crate defines the parse tree, the error taxonomy, the canonical
//! command signature table, and the outbound turtle-update payload used
//! across all interpreter stages.

mod error;
mod update;
pub mod commands;
pub mod tree;

pub use commands::{CommandSig, Slot, BUILTIN_COMMANDS, COMMAND_BLOCK_PREFIX, MAKE_USER_INSTRUCTION};
pub use error::{ErrorKind, ScriptError};
pub use tree::{NodeKind, ParseNode};
pub use update::TurtleUpdate;

/// Result type used throughout the Terrapin interpreter.
pub type Result<T> = std::result::Result<T, ScriptError>;

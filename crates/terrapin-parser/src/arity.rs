//! The command-arity table.

use std::collections::HashMap;

use terrapin_types::{Slot, BUILTIN_COMMANDS};

/// Maps canonical command names to their declared argument slots.
///
/// Seeded from the static builtin table, extended with user-defined
/// procedures before a submission's tree is built, and extended again per
/// command-block occurrence by the block resolver. The table is threaded
/// explicitly through the resolver and tree builder; it is never global.
#[derive(Debug, Clone)]
pub struct CommandArityTable {
    entries: HashMap<String, Vec<Slot>>,
}

impl CommandArityTable {
    /// A table holding every builtin command.
    pub fn with_builtins() -> Self {
        let entries = BUILTIN_COMMANDS
            .iter()
            .map(|sig| (sig.name.to_owned(), sig.slots.to_vec()))
            .collect();
        Self { entries }
    }

    /// Register a user-defined procedure taking `parameter_count` numeric
    /// arguments. Later registrations overwrite.
    pub fn register_user_defined(&mut self, name: &str, parameter_count: usize) {
        self.entries
            .insert(name.to_owned(), vec![Slot::Num; parameter_count]);
    }

    /// Register one command-block occurrence under its synthetic name, with
    /// one numeric slot per immediate child.
    pub fn register_block_occurrence(&mut self, name: &str, child_count: usize) {
        self.entries
            .insert(name.to_owned(), vec![Slot::Num; child_count]);
    }

    /// The declared slots for `name`.
    ///
    /// An unknown name yields the empty slice — unknowns are treated as
    /// argument-less, letting numeric literals and zero-arity commands
    /// share one lookup path; a structurally wrong use is the tree
    /// builder's to reject.
    pub fn slots(&self, name: &str) -> &[Slot] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The resolved arity for `name` (0 for unknowns).
    pub fn arity(&self, name: &str) -> usize {
        self.slots(name).len()
    }
}

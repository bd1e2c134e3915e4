//! Terrapin parser: turns a classified token stream into a validated parse
//! tree.
//!
//! Two stages over the lexer's output: [`BlockResolver`] rewrites bracketed
//! command blocks into synthetic arity-bearing commands in a single pass,
//! then [`TreeBuilder`] grows the prefix-notation n-ary tree, pulling
//! exactly arity-many subtrees per command and validating child kinds
//! against declared slots. The whole tree exists — fully validated — before
//! anything evaluates.

mod arity;
mod blocks;
mod tree_builder;

pub use arity::CommandArityTable;
pub use blocks::BlockResolver;
pub use tree_builder::TreeBuilder;

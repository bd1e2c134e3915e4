//! The n-ary parse tree.
//!
//! Statements are prefix-notation subtrees: a command node owns exactly as
//! many children as its resolved arity, each child a fully grown subtree.
//! The root is the only node without a name; its children are the script's
//! top-level statements.

use crate::COMMAND_BLOCK_PREFIX;

/// What a parse-tree node denotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// A builtin or user-defined command, dispatched by canonical name.
    Command,
    /// A numeric literal, carrying its parsed value.
    Constant(f64),
    /// A `:name` variable reference.
    Variable,
    /// A command-block occurrence — evaluated as a statement sequence, not
    /// as a single expression.
    Block,
}

/// A node of the parse tree.
///
/// Invariant: for every non-root node, `children.len()` equals the arity
/// resolved for `name` at parse time. The tree builder enforces this before
/// any evaluation begins.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    /// Canonical name; `None` only at the root.
    pub name: Option<String>,
    pub kind: NodeKind,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// The empty root node.
    pub fn root() -> Self {
        Self {
            name: None,
            kind: NodeKind::Command,
            children: Vec::new(),
        }
    }

    /// A command node, re-tagged as a block if the name is a synthetic
    /// command-block identifier.
    pub fn command(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = if name.starts_with(COMMAND_BLOCK_PREFIX) {
            NodeKind::Block
        } else {
            NodeKind::Command
        };
        Self {
            name: Some(name),
            kind,
            children: Vec::new(),
        }
    }

    /// A numeric-literal leaf.
    pub fn constant(text: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(text.into()),
            kind: NodeKind::Constant(value),
            children: Vec::new(),
        }
    }

    /// A variable-reference leaf.
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: NodeKind::Variable,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    /// The node's name, empty only at the root.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Preorder traversal of node names, root's `None` included.
    pub fn preorder(&self) -> Vec<Option<&str>> {
        let mut out = Vec::new();
        self.preorder_into(&mut out);
        out
    }

    fn preorder_into<'a>(&'a self, out: &mut Vec<Option<&'a str>>) {
        out.push(self.name.as_deref());
        for child in &self.children {
            child.preorder_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_name() {
        let root = ParseNode::root();
        assert!(root.is_root());
        assert_eq!(root.name(), "");
    }

    #[test]
    fn test_command_block_retag() {
        let node = ParseNode::command("CommandBlock_3");
        assert_eq!(node.kind, NodeKind::Block);
        let node = ParseNode::command("Forward");
        assert_eq!(node.kind, NodeKind::Command);
    }

    #[test]
    fn test_preorder_matches_input_order() {
        // fd sum 1 2
        let mut root = ParseNode::root();
        let mut fd = ParseNode::command("Forward");
        let mut sum = ParseNode::command("Sum");
        sum.children.push(ParseNode::constant("1", 1.0));
        sum.children.push(ParseNode::constant("2", 2.0));
        fd.children.push(sum);
        root.children.push(fd);

        assert_eq!(
            root.preorder(),
            vec![None, Some("Forward"), Some("Sum"), Some("1"), Some("2")]
        );
    }

    #[test]
    fn test_constant_carries_value() {
        let node = ParseNode::constant("50", 50.0);
        assert_eq!(node.kind, NodeKind::Constant(50.0));
        assert_eq!(node.name(), "50");
    }
}

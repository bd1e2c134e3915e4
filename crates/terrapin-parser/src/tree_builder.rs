//! Prefix-notation parse-tree construction.

use std::collections::VecDeque;

use terrapin_types::{
    NodeKind, ParseNode, ScriptError, Slot, MAKE_USER_INSTRUCTION,
};
use tracing::debug;

use terrapin_lexer::{Token, TokenKind};

use crate::arity::CommandArityTable;

/// Builds the n-ary parse tree from a block-resolved token stream.
///
/// Commands are prefix-notation: a node's children are the next arity-many
/// fully grown subtrees, each of which pulls its own children first. The
/// tree is complete — and therefore fully arity-validated — before any
/// evaluation begins.
pub struct TreeBuilder<'a> {
    table: &'a CommandArityTable,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(table: &'a CommandArityTable) -> Self {
        Self { table }
    }

    /// Build the tree. The root's children are the top-level statements.
    pub fn build(&self, tokens: Vec<Token>) -> terrapin_types::Result<ParseNode> {
        let mut queue: VecDeque<Token> = tokens.into();
        let mut root = ParseNode::root();
        while let Some(token) = queue.pop_front() {
            let statement = self.grow(node_for(&token)?, &mut queue, false)?;
            // A dangling literal or variable is not a statement; this is
            // what rejects trailing tokens nothing consumed.
            if !matches!(statement.kind, NodeKind::Command | NodeKind::Block) {
                return Err(ScriptError::ArityMismatch(statement.name().to_owned()));
            }
            root.children.push(statement);
        }
        debug!(statements = root.children.len(), "built parse tree");
        Ok(root)
    }

    /// Attach exactly arity-many children to `node`, recursively.
    ///
    /// Inside a procedure definition, non-block children consume nothing:
    /// the procedure's name token must not swallow the parameter block even
    /// though the name already has a registered arity.
    fn grow(
        &self,
        mut node: ParseNode,
        queue: &mut VecDeque<Token>,
        in_definition: bool,
    ) -> terrapin_types::Result<ParseNode> {
        let slots: &[Slot] = if in_definition && node.kind != NodeKind::Block {
            &[]
        } else {
            self.table.slots(node.name())
        };
        let defining = node.name() == MAKE_USER_INSTRUCTION;

        for _ in 0..slots.len() {
            let token = queue
                .pop_front()
                .ok_or_else(|| ScriptError::ArityMismatch(node.name().to_owned()))?;
            let child = self.grow(node_for(&token)?, queue, defining)?;
            node.children.push(child);
        }

        if !slots_match(&node.children, slots) {
            return Err(ScriptError::ArityMismatch(node.name().to_owned()));
        }
        // The loop header `[ :var limit ]` is structural: check it here so
        // evaluation never sees a malformed one.
        if node.name() == "DoTimes"
            && node.children.len() == 2
            && node.children[0].children.len() != 2
        {
            return Err(ScriptError::ArityMismatch(node.name().to_owned()));
        }
        Ok(node)
    }
}

fn node_for(token: &Token) -> terrapin_types::Result<ParseNode> {
    match token.kind {
        TokenKind::Command => Ok(ParseNode::command(token.text.as_str())),
        TokenKind::Constant(value) => Ok(ParseNode::constant(token.text.as_str(), value)),
        TokenKind::Variable => Ok(ParseNode::variable(token.text.as_str())),
        // Brackets never survive block resolution.
        TokenKind::ListStart | TokenKind::ListEnd => Err(ScriptError::MalformedBlock),
    }
}

/// Check each child's kind against its declared slot tag.
fn slots_match(children: &[ParseNode], slots: &[Slot]) -> bool {
    children.len() == slots.len()
        && children.iter().zip(slots).all(|(child, slot)| match slot {
            Slot::Num => child.kind != NodeKind::Block,
            Slot::List => child.kind == NodeKind::Block,
        })
}

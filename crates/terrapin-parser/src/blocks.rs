//! The block-arity resolver.
//!
//! A single left-to-right pass over the classified token stream that turns
//! every bracketed command block into a synthetic command. Each `[` becomes
//! a `CommandBlock_<n>` token (numbered in the order blocks close) whose
//! arity is the number of immediate children the block holds; each `]` is
//! dropped. Children are counted, not token span: a nested command's
//! arguments are consumed by that command and do not count at the enclosing
//! level.
//!
//! The same pass watches for procedure definitions: when a parameter block
//! follows `to <name>`, the procedure's parameter count is registered before
//! the tree is built, so calls later in the submission resolve.

use terrapin_types::{ScriptError, COMMAND_BLOCK_PREFIX, MAKE_USER_INSTRUCTION};
use tracing::debug;

use terrapin_lexer::{Token, TokenKind};

use crate::arity::CommandArityTable;

/// One still-open `[` during the scan.
struct OpenFrame {
    /// Index in the output stream of the token to rename when this closes.
    placeholder: usize,
    /// Immediate children counted so far.
    children: usize,
    /// Remaining-argument counts of commands opened inside this frame.
    /// Invariant: the top entry is never zero between tokens.
    pending: Vec<usize>,
    /// Set when this block is the parameter list of `to <name>`.
    defines: Option<String>,
}

/// Progress through a `to <name> [ params ]` prefix.
enum DefinitionScan {
    Idle,
    AwaitName,
    AwaitParams(String),
}

/// Rewrites command blocks and registers their arities.
pub struct BlockResolver<'a> {
    table: &'a mut CommandArityTable,
}

impl<'a> BlockResolver<'a> {
    pub fn new(table: &'a mut CommandArityTable) -> Self {
        Self { table }
    }

    /// Resolve every block in `tokens`, returning the rewritten stream.
    ///
    /// Fails with [`ScriptError::MalformedBlock`] on a `]` with no matching
    /// `[`, or on frames still open at end of input.
    pub fn resolve(mut self, tokens: Vec<Token>) -> terrapin_types::Result<Vec<Token>> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut frames: Vec<OpenFrame> = Vec::new();
        let mut closed = 0usize;
        let mut scan = DefinitionScan::Idle;

        for token in tokens {
            match token.kind {
                TokenKind::ListStart => {
                    // The block fills one slot of the enclosing frame; its
                    // own contents are counted in the frame pushed here.
                    if let Some(frame) = frames.last_mut() {
                        place(frame, 0);
                    }
                    let defines = match std::mem::replace(&mut scan, DefinitionScan::Idle) {
                        DefinitionScan::AwaitParams(name) => Some(name),
                        _ => None,
                    };
                    frames.push(OpenFrame {
                        placeholder: out.len(),
                        children: 0,
                        pending: Vec::new(),
                        defines,
                    });
                    out.push(token);
                }
                TokenKind::ListEnd => {
                    let frame = frames.pop().ok_or(ScriptError::MalformedBlock)?;
                    closed += 1;
                    let name = format!("{COMMAND_BLOCK_PREFIX}{closed}");
                    self.table.register_block_occurrence(&name, frame.children);
                    if let Some(procedure) = frame.defines {
                        debug!(
                            procedure = procedure.as_str(),
                            parameters = frame.children,
                            "registered procedure arity"
                        );
                        self.table.register_user_defined(&procedure, frame.children);
                    }
                    out[frame.placeholder] = Token::command(name);
                    scan = DefinitionScan::Idle;
                }
                _ => {
                    let arity = if token.is_command() {
                        self.table.arity(&token.text)
                    } else {
                        0
                    };
                    if let Some(frame) = frames.last_mut() {
                        place(frame, arity);
                    }
                    scan = advance_scan(scan, &token);
                    out.push(token);
                }
            }
        }

        if !frames.is_empty() {
            return Err(ScriptError::MalformedBlock);
        }
        debug!(tokens = out.len(), blocks = closed, "resolved command blocks");
        Ok(out)
    }
}

/// Account for one item appearing in `frame`.
///
/// The item either starts a new immediate child or fills an argument slot of
/// the innermost open command; if it takes arguments itself, they are owed
/// by the tokens that follow.
fn place(frame: &mut OpenFrame, arity: usize) {
    match frame.pending.last_mut() {
        Some(remaining) => *remaining -= 1,
        None => frame.children += 1,
    }
    if arity > 0 {
        frame.pending.push(arity);
    } else {
        while frame.pending.last() == Some(&0) {
            frame.pending.pop();
        }
    }
}

fn advance_scan(scan: DefinitionScan, token: &Token) -> DefinitionScan {
    if token.is_command() && token.text == MAKE_USER_INSTRUCTION {
        return DefinitionScan::AwaitName;
    }
    match scan {
        DefinitionScan::AwaitName if token.is_command() => {
            DefinitionScan::AwaitParams(token.text.clone())
        }
        _ => DefinitionScan::Idle,
    }
}

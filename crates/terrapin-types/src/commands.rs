//! Canonical command signatures.
//!
//! Every builtin command's locale-independent name and per-slot argument
//! tags live in one static table. The arity table seeds from it, the lexer's
//! language tables translate into it, and the behavior registry keys off it
//! — a cross-crate test keeps the latter two honest.

/// The type tag a command declares for one argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A numeric child: constant, variable, or command subtree.
    Num,
    /// A command-block child.
    List,
}

/// One builtin command: canonical name plus declared argument slots.
#[derive(Debug, Clone, Copy)]
pub struct CommandSig {
    pub name: &'static str,
    pub slots: &'static [Slot],
}

/// Prefix of the synthetic per-occurrence command-block names
/// (`CommandBlock_1`, `CommandBlock_2`, ...).
pub const COMMAND_BLOCK_PREFIX: &str = "CommandBlock_";

/// The canonical name of the procedure-definition command (`to`).
pub const MAKE_USER_INSTRUCTION: &str = "MakeUserInstruction";

const NONE: &[Slot] = &[];
const NUM: &[Slot] = &[Slot::Num];
const NUM_NUM: &[Slot] = &[Slot::Num, Slot::Num];
const NUM_LIST: &[Slot] = &[Slot::Num, Slot::List];
const NUM_LIST_LIST: &[Slot] = &[Slot::Num, Slot::List, Slot::List];
const LIST: &[Slot] = &[Slot::List];
const LIST_LIST: &[Slot] = &[Slot::List, Slot::List];

/// Every builtin command.
pub const BUILTIN_COMMANDS: &[CommandSig] = &[
    // ── Turtle motion ─────────────────────────────────────────
    CommandSig { name: "Forward", slots: NUM },
    CommandSig { name: "Backward", slots: NUM },
    CommandSig { name: "Left", slots: NUM },
    CommandSig { name: "Right", slots: NUM },
    CommandSig { name: "SetHeading", slots: NUM },
    CommandSig { name: "SetPosition", slots: NUM_NUM },
    CommandSig { name: "Home", slots: NONE },
    CommandSig { name: "ClearScreen", slots: NONE },
    CommandSig { name: "PenUp", slots: NONE },
    CommandSig { name: "PenDown", slots: NONE },
    CommandSig { name: "ShowTurtle", slots: NONE },
    CommandSig { name: "HideTurtle", slots: NONE },
    // ── Turtle queries ────────────────────────────────────────
    CommandSig { name: "XCoordinate", slots: NONE },
    CommandSig { name: "YCoordinate", slots: NONE },
    CommandSig { name: "Heading", slots: NONE },
    CommandSig { name: "IsPenDown", slots: NONE },
    CommandSig { name: "IsShowing", slots: NONE },
    CommandSig { name: "ID", slots: NONE },
    // ── Math ──────────────────────────────────────────────────
    CommandSig { name: "Sum", slots: NUM_NUM },
    CommandSig { name: "Difference", slots: NUM_NUM },
    CommandSig { name: "Product", slots: NUM_NUM },
    CommandSig { name: "Quotient", slots: NUM_NUM },
    CommandSig { name: "Remainder", slots: NUM_NUM },
    CommandSig { name: "Power", slots: NUM_NUM },
    CommandSig { name: "Minus", slots: NUM },
    CommandSig { name: "SquareRoot", slots: NUM },
    CommandSig { name: "Sine", slots: NUM },
    CommandSig { name: "Cosine", slots: NUM },
    CommandSig { name: "Tangent", slots: NUM },
    CommandSig { name: "ArcTangent", slots: NUM },
    CommandSig { name: "NaturalLog", slots: NUM },
    CommandSig { name: "Random", slots: NUM },
    CommandSig { name: "Pi", slots: NONE },
    // ── Logic ─────────────────────────────────────────────────
    CommandSig { name: "LessThan", slots: NUM_NUM },
    CommandSig { name: "GreaterThan", slots: NUM_NUM },
    CommandSig { name: "Equal", slots: NUM_NUM },
    CommandSig { name: "NotEqual", slots: NUM_NUM },
    CommandSig { name: "And", slots: NUM_NUM },
    CommandSig { name: "Or", slots: NUM_NUM },
    CommandSig { name: "Not", slots: NUM },
    // ── Variables & control ───────────────────────────────────
    CommandSig { name: "Make", slots: NUM_NUM },
    CommandSig { name: "Repeat", slots: NUM_LIST },
    CommandSig { name: "DoTimes", slots: LIST_LIST },
    CommandSig { name: "If", slots: NUM_LIST },
    CommandSig { name: "IfElse", slots: NUM_LIST_LIST },
    CommandSig { name: "Tell", slots: LIST },
    CommandSig { name: "Ask", slots: LIST_LIST },
    CommandSig { name: "AskWith", slots: LIST_LIST },
    CommandSig { name: MAKE_USER_INSTRUCTION, slots: NUM_LIST_LIST },
];

/// Look up a builtin signature by canonical name.
pub fn builtin(name: &str) -> Option<&'static CommandSig> {
    BUILTIN_COMMANDS.iter().find(|sig| sig.name == name)
}

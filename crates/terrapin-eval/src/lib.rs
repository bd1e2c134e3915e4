//! Terrapin tree-walking evaluator and interpreter session.
//!
//! ```text
//! raw text → clean → classify → resolve blocks → build tree → evaluate
//! ```
//!
//! [`Interpreter`] runs the whole pipeline per submission against a
//! long-lived [`ExecutionContext`]; turtle mutations stream out through the
//! [`TurtleSink`] the session was created with.

mod behavior;
mod context;
mod evaluator;
mod interpreter;
mod sink;
mod turtle;

pub use behavior::{Behavior, CommandRegistry, ControlOp};
pub use context::{ExecutionContext, ProcedureDefinition, ScopeFrame};
pub use evaluator::Evaluator;
pub use interpreter::Interpreter;
pub use sink::{NullSink, RecordingSink, TurtleSink};
pub use turtle::TurtleState;

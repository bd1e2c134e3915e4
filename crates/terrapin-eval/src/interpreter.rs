//! The interpreter session facade.

use terrapin_lexer::{clean, Classifier, Language};
use terrapin_parser::{BlockResolver, CommandArityTable, TreeBuilder};
use tracing::debug;

use crate::behavior::CommandRegistry;
use crate::context::ExecutionContext;
use crate::evaluator::Evaluator;
use crate::sink::TurtleSink;
use crate::turtle::TurtleState;

/// One interpreter session.
///
/// Owns the execution context and the behavior registry. Context state —
/// turtles, variables, procedures — persists across [`Self::execute`] calls
/// until the session is dropped; a restart is a new `Interpreter`.
pub struct Interpreter {
    context: ExecutionContext,
    registry: CommandRegistry,
}

impl Interpreter {
    pub fn new(sink: Box<dyn TurtleSink>) -> Self {
        Self {
            context: ExecutionContext::new(sink),
            registry: CommandRegistry::new(),
        }
    }

    /// Run one submission: clean → classify → resolve blocks → build tree →
    /// evaluate each top-level statement.
    ///
    /// Structural errors abort before anything runs. Evaluation errors
    /// abort the remaining statements but keep every mutation already
    /// applied. Either way the sink is notified and the error returned.
    pub fn execute(&mut self, raw: &str, language: &str) -> terrapin_types::Result<()> {
        match self.run(raw, language) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.context.notify_error(&error);
                Err(error)
            }
        }
    }

    fn run(&mut self, raw: &str, language: &str) -> terrapin_types::Result<()> {
        let words = clean(raw);
        let language = Language::named(language);

        let tokens = Classifier::new(language).classify(&words)?;

        let mut table = CommandArityTable::with_builtins();
        for (name, parameter_count) in self.context.procedure_arities() {
            table.register_user_defined(name, parameter_count);
        }
        let resolved = BlockResolver::new(&mut table).resolve(tokens)?;
        let tree = TreeBuilder::new(&table).build(resolved)?;

        debug!(statements = tree.children.len(), "executing submission");
        let mut evaluator = Evaluator::new(&mut self.context, &self.registry);
        for statement in &tree.children {
            evaluator.eval(statement)?;
        }
        Ok(())
    }

    /// The session's execution context.
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// The turtle with the given id, if it exists yet.
    pub fn turtle(&self, id: u32) -> Option<&TurtleState> {
        self.context.turtle(id)
    }

    /// The current value of a variable (`":name"` spelling).
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.context.peek_variable(name)
    }
}

//! The execution context: all mutable interpreter state.
//!
//! Owns the turtle registry, the turtle-selection scope stack, the variable
//! bindings, and the procedure registry. Nothing outside the evaluator
//! mutates any of it directly — command behaviors go through the operations
//! here, and every turtle mutation flows out through the sink.

use std::collections::HashMap;

use terrapin_types::{ParseNode, ScriptError};
use tracing::trace;

use crate::sink::TurtleSink;
use crate::turtle::TurtleState;

/// The turtle ids active for the commands in one nesting level, plus the
/// cursor selecting "the current turtle" during per-turtle application.
#[derive(Debug, Clone)]
pub struct ScopeFrame {
    ids: Vec<u32>,
    cursor: usize,
}

impl ScopeFrame {
    fn new(ids: Vec<u32>) -> Self {
        Self { ids, cursor: 0 }
    }
}

/// A user-defined procedure: name, parameters, and the body subtree it
/// re-evaluates per call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDefinition {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: ParseNode,
}

/// The mutable state one session of script execution runs against.
pub struct ExecutionContext {
    turtles: Vec<TurtleState>,
    /// Invariant: never empty; the bottom frame is the session-level
    /// selection.
    scopes: Vec<ScopeFrame>,
    variables: HashMap<String, f64>,
    procedures: HashMap<String, ProcedureDefinition>,
    sink: Box<dyn TurtleSink>,
}

impl ExecutionContext {
    /// A fresh context: turtle 1 exists and is selected.
    pub fn new(sink: Box<dyn TurtleSink>) -> Self {
        Self {
            turtles: vec![TurtleState::new(1)],
            scopes: vec![ScopeFrame::new(vec![1])],
            variables: HashMap::new(),
            procedures: HashMap::new(),
            sink,
        }
    }

    // ── Turtle access ─────────────────────────────────────────────────────

    /// The turtle at the current frame's cursor.
    ///
    /// Falls back to turtle 1 under an empty selection.
    pub fn active_turtle(&self) -> &TurtleState {
        &self.turtles[self.active_index()]
    }

    pub fn active_turtle_mut(&mut self) -> &mut TurtleState {
        let index = self.active_index();
        &mut self.turtles[index]
    }

    fn active_index(&self) -> usize {
        let frame = self.current_frame();
        frame
            .ids
            .get(frame.cursor)
            .map(|&id| id as usize - 1)
            .unwrap_or(0)
    }

    /// Number of turtles in the current selection.
    pub fn selection_len(&self) -> usize {
        self.current_frame().ids.len()
    }

    /// The ids in the current selection, in order.
    pub fn selection(&self) -> &[u32] {
        &self.current_frame().ids
    }

    /// Point the cursor at the `position`-th turtle of the selection.
    pub fn select(&mut self, position: usize) {
        if let Some(frame) = self.scopes.last_mut() {
            frame.cursor = position.min(frame.ids.len().saturating_sub(1));
        }
    }

    /// Every existing turtle, in id order.
    pub fn turtles(&self) -> &[TurtleState] {
        &self.turtles
    }

    /// The turtle with the given id, if it has been materialized.
    pub fn turtle(&self, id: u32) -> Option<&TurtleState> {
        id.checked_sub(1).and_then(|i| self.turtles.get(i as usize))
    }

    /// Materialize turtles up to `id`, notifying the sink of each new one.
    fn materialize(&mut self, id: u32) {
        while (self.turtles.len() as u32) < id {
            let turtle = TurtleState::new(self.turtles.len() as u32 + 1);
            self.sink.turtle_updated(&turtle.update());
            self.turtles.push(turtle);
        }
    }

    /// Notify the sink of the active turtle's pose, after a mutation.
    pub fn notify_active(&mut self) {
        let update = self.active_turtle().update();
        self.sink.turtle_updated(&update);
    }

    pub fn notify_error(&mut self, error: &ScriptError) {
        self.sink.script_error(error);
    }

    // ── Scope frames ──────────────────────────────────────────────────────

    fn current_frame(&self) -> &ScopeFrame {
        self.scopes.last().expect("scope stack is never empty")
    }

    /// Enter a multi-turtle block: the given ids become the selection.
    pub fn push_scope(&mut self, ids: Vec<u32>) {
        let ids = self.admit(ids);
        trace!(?ids, depth = self.scopes.len() + 1, "push scope");
        self.scopes.push(ScopeFrame::new(ids));
    }

    /// Enter a statement block: the selection carries over unchanged.
    pub fn push_scope_clone(&mut self) {
        let ids = self.current_frame().ids.clone();
        self.scopes.push(ScopeFrame::new(ids));
    }

    /// Replace the current selection in place (`tell`).
    pub fn replace_scope(&mut self, ids: Vec<u32>) {
        let ids = self.admit(ids);
        trace!(?ids, "replace scope");
        if let Some(frame) = self.scopes.last_mut() {
            *frame = ScopeFrame::new(ids);
        }
    }

    /// Leave a block, restoring the exact prior selection.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Drop id 0 (ids start at 1) and materialize the rest.
    fn admit(&mut self, mut ids: Vec<u32>) -> Vec<u32> {
        ids.retain(|&id| id >= 1);
        for &id in &ids {
            self.materialize(id);
        }
        ids
    }

    // ── Variables ─────────────────────────────────────────────────────────

    pub fn variable(&self, name: &str) -> terrapin_types::Result<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| ScriptError::UndefinedVariable(name.to_owned()))
    }

    /// Bind a variable, creating it on first write.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_owned(), value);
    }

    /// The current binding, if any — used for shadow-and-restore.
    pub fn peek_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Restore a binding saved by [`Self::peek_variable`].
    pub fn restore_variable(&mut self, name: &str, saved: Option<f64>) {
        match saved {
            Some(value) => self.variables.insert(name.to_owned(), value),
            None => self.variables.remove(name),
        };
    }

    // ── Procedures ────────────────────────────────────────────────────────

    pub fn define_procedure(&mut self, definition: ProcedureDefinition) {
        self.procedures
            .insert(definition.name.clone(), definition);
    }

    pub fn procedure(&self, name: &str) -> Option<&ProcedureDefinition> {
        self.procedures.get(name)
    }

    /// Name → parameter count for every registered procedure; seeds the
    /// arity table at the start of each submission.
    pub fn procedure_arities(&self) -> impl Iterator<Item = (&str, usize)> {
        self.procedures
            .values()
            .map(|def| (def.name.as_str(), def.parameters.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;
    use terrapin_types::ParseNode;

    fn context() -> ExecutionContext {
        ExecutionContext::new(Box::new(NullSink))
    }

    #[test]
    fn test_initial_state() {
        let ctx = context();
        assert_eq!(ctx.turtles().len(), 1);
        assert_eq!(ctx.active_turtle().id, 1);
        assert_eq!(ctx.selection(), &[1]);
    }

    #[test]
    fn test_push_scope_materializes() {
        let mut ctx = context();
        ctx.push_scope(vec![3]);
        assert_eq!(ctx.turtles().len(), 3);
        assert_eq!(ctx.active_turtle().id, 3);
        ctx.pop_scope();
        assert_eq!(ctx.active_turtle().id, 1);
    }

    #[test]
    fn test_replace_scope_keeps_depth() {
        let mut ctx = context();
        ctx.push_scope(vec![1, 2]);
        ctx.replace_scope(vec![4]);
        assert_eq!(ctx.selection(), &[4]);
        ctx.pop_scope();
        assert_eq!(ctx.selection(), &[1], "outer frame untouched");
    }

    #[test]
    fn test_cursor_selects_within_frame() {
        let mut ctx = context();
        ctx.push_scope(vec![2, 5]);
        assert_eq!(ctx.active_turtle().id, 2);
        ctx.select(1);
        assert_eq!(ctx.active_turtle().id, 5);
    }

    #[test]
    fn test_bottom_frame_never_pops() {
        let mut ctx = context();
        ctx.pop_scope();
        ctx.pop_scope();
        assert_eq!(ctx.selection(), &[1]);
    }

    #[test]
    fn test_empty_selection_falls_back_to_turtle_one() {
        let mut ctx = context();
        ctx.push_scope(Vec::new());
        assert_eq!(ctx.selection_len(), 0);
        assert_eq!(ctx.active_turtle().id, 1);
    }

    #[test]
    fn test_variable_lifecycle() {
        let mut ctx = context();
        assert_eq!(
            ctx.variable(":x"),
            Err(ScriptError::UndefinedVariable(":x".into()))
        );
        ctx.set_variable(":x", 7.0);
        assert_eq!(ctx.variable(":x"), Ok(7.0));

        let saved = ctx.peek_variable(":x");
        ctx.set_variable(":x", 99.0);
        ctx.restore_variable(":x", saved);
        assert_eq!(ctx.variable(":x"), Ok(7.0));

        let saved = ctx.peek_variable(":fresh");
        ctx.set_variable(":fresh", 1.0);
        ctx.restore_variable(":fresh", saved);
        assert!(ctx.variable(":fresh").is_err(), "unbound after restore");
    }

    #[test]
    fn test_procedure_registry() {
        let mut ctx = context();
        ctx.define_procedure(ProcedureDefinition {
            name: "move".into(),
            parameters: vec![":num".into()],
            body: ParseNode::root(),
        });
        assert_eq!(ctx.procedure("move").unwrap().parameters.len(), 1);
        assert!(ctx.procedure("other").is_none());
        let arities: Vec<_> = ctx.procedure_arities().collect();
        assert_eq!(arities, vec![("move", 1)]);
    }
}

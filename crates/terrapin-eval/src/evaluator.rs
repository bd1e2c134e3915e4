//! The tree-walking evaluator.
//!
//! Every node evaluates to a number. Math and logic evaluate their children
//! eagerly; motion commands apply once per turtle in the current selection;
//! control structures re-evaluate their body subtrees zero or more times.
//! Block nodes push a copy of the current selection and pop it on exit,
//! which is what scopes a `tell` inside any block to that block.

use terrapin_types::{NodeKind, ParseNode, ScriptError};
use tracing::trace;

use crate::behavior::{Behavior, CommandRegistry, ControlOp};
use crate::context::{ExecutionContext, ProcedureDefinition};
use crate::turtle::TurtleState;

/// The loop counter `repeat` exposes to its body.
const REPCOUNT: &str = ":repcount";

/// Walks a parse tree against an execution context.
///
/// Expects trees produced by the tree builder: child counts and kinds are
/// already validated, so only `UnknownCommand` and `UndefinedVariable` can
/// arise here.
pub struct Evaluator<'a> {
    ctx: &'a mut ExecutionContext,
    registry: &'a CommandRegistry,
}

impl<'a> Evaluator<'a> {
    pub fn new(ctx: &'a mut ExecutionContext, registry: &'a CommandRegistry) -> Self {
        Self { ctx, registry }
    }

    /// Evaluate one node to its numeric result.
    pub fn eval(&mut self, node: &ParseNode) -> terrapin_types::Result<f64> {
        match node.kind {
            NodeKind::Constant(value) => Ok(value),
            NodeKind::Variable => self.ctx.variable(node.name()),
            NodeKind::Block => self.eval_block(node),
            NodeKind::Command => self.eval_command(node),
        }
    }

    /// A block runs as a statement sequence under a copied selection frame,
    /// yielding the last statement's result (0 when empty).
    fn eval_block(&mut self, node: &ParseNode) -> terrapin_types::Result<f64> {
        self.ctx.push_scope_clone();
        let result = self.eval_statements(&node.children);
        self.ctx.pop_scope();
        result
    }

    fn eval_statements(&mut self, statements: &[ParseNode]) -> terrapin_types::Result<f64> {
        let mut last = 0.0;
        for statement in statements {
            last = self.eval(statement)?;
        }
        Ok(last)
    }

    fn eval_command(&mut self, node: &ParseNode) -> terrapin_types::Result<f64> {
        trace!(command = node.name(), "dispatch");
        match self.registry.get(node.name()) {
            Some(Behavior::Math(combine)) => {
                let args = self.eval_args(node)?;
                Ok(combine(&args))
            }
            Some(Behavior::Query(read)) => Ok(read(self.ctx.active_turtle())),
            Some(Behavior::Motion(apply)) => self.apply_motion(node, apply),
            Some(Behavior::Control(op)) => self.eval_control(op, node),
            None => self.call_procedure(node),
        }
    }

    fn eval_args(&mut self, node: &ParseNode) -> terrapin_types::Result<Vec<f64>> {
        node.children.iter().map(|child| self.eval(child)).collect()
    }

    /// Run a motion command once per selected turtle, cursor advancing, the
    /// arguments re-evaluated for each so queries inside them read the
    /// turtle being moved. Returns the last application's magnitude.
    fn apply_motion(
        &mut self,
        node: &ParseNode,
        apply: fn(&mut TurtleState, &[f64]) -> f64,
    ) -> terrapin_types::Result<f64> {
        let mut result = 0.0;
        let mut position = 0;
        while position < self.ctx.selection_len() {
            self.ctx.select(position);
            let args = match self.eval_args(node) {
                Ok(args) => args,
                Err(err) => {
                    self.ctx.select(0);
                    return Err(err);
                }
            };
            result = apply(self.ctx.active_turtle_mut(), &args);
            self.ctx.notify_active();
            position += 1;
        }
        self.ctx.select(0);
        Ok(result)
    }

    fn eval_control(&mut self, op: ControlOp, node: &ParseNode) -> terrapin_types::Result<f64> {
        match op {
            ControlOp::Make => {
                let name = node.children[0].name().to_owned();
                let value = self.eval(&node.children[1])?;
                self.ctx.set_variable(&name, value);
                Ok(value)
            }
            ControlOp::Repeat => {
                let count = self.eval(&node.children[0])? as i64;
                self.counted_loop(REPCOUNT, count, &node.children[1])
            }
            ControlOp::DoTimes => {
                let header = &node.children[0];
                let variable = header.children[0].name().to_owned();
                let limit = self.eval(&header.children[1])? as i64;
                self.counted_loop(&variable, limit, &node.children[1])
            }
            ControlOp::If => {
                if self.eval(&node.children[0])? != 0.0 {
                    self.eval(&node.children[1])
                } else {
                    Ok(0.0)
                }
            }
            ControlOp::IfElse => {
                if self.eval(&node.children[0])? != 0.0 {
                    self.eval(&node.children[1])
                } else {
                    self.eval(&node.children[2])
                }
            }
            ControlOp::Tell => {
                let ids = self.eval_ids(&node.children[0])?;
                let last = ids.last().map(|&id| f64::from(id)).unwrap_or(0.0);
                self.ctx.replace_scope(ids);
                Ok(last)
            }
            ControlOp::Ask => {
                let ids = self.eval_ids(&node.children[0])?;
                self.ctx.push_scope(ids);
                let result = self.eval(&node.children[1]);
                self.ctx.pop_scope();
                result
            }
            ControlOp::AskWith => {
                let candidates = self.ctx.selection().to_vec();
                let mut kept = Vec::new();
                for id in candidates {
                    self.ctx.push_scope(vec![id]);
                    let verdict = self.eval(&node.children[0]);
                    self.ctx.pop_scope();
                    if verdict? != 0.0 {
                        kept.push(id);
                    }
                }
                self.ctx.push_scope(kept);
                let result = self.eval(&node.children[1]);
                self.ctx.pop_scope();
                result
            }
            ControlOp::Define => {
                let name = node.children[0].name().to_owned();
                let parameters = node.children[1]
                    .children
                    .iter()
                    .map(|param| param.name().to_owned())
                    .collect();
                trace!(procedure = name.as_str(), "define");
                self.ctx.define_procedure(ProcedureDefinition {
                    name,
                    parameters,
                    body: node.children[2].clone(),
                });
                Ok(1.0)
            }
        }
    }

    /// Bind `variable` to 1..=count, re-evaluating `body` each pass; the
    /// prior binding (if any) is restored afterward, also on error.
    fn counted_loop(
        &mut self,
        variable: &str,
        count: i64,
        body: &ParseNode,
    ) -> terrapin_types::Result<f64> {
        let saved = self.ctx.peek_variable(variable);
        let mut result = Ok(0.0);
        for i in 1..=count {
            self.ctx.set_variable(variable, i as f64);
            result = self.eval(body);
            if result.is_err() {
                break;
            }
        }
        self.ctx.restore_variable(variable, saved);
        result
    }

    /// Evaluate an id-list block: each child yields one turtle id. Ids may
    /// be computed; results round to the nearest whole id, and ids below 1
    /// are dropped.
    fn eval_ids(&mut self, block: &ParseNode) -> terrapin_types::Result<Vec<u32>> {
        let mut ids = Vec::with_capacity(block.children.len());
        for child in &block.children {
            let id = self.eval(child)?.round();
            if id >= 1.0 && id <= f64::from(u32::MAX) {
                ids.push(id as u32);
            }
        }
        Ok(ids)
    }

    /// Dispatch a name with no builtin behavior: a user-defined procedure,
    /// or nothing at all.
    fn call_procedure(&mut self, node: &ParseNode) -> terrapin_types::Result<f64> {
        let definition = self
            .ctx
            .procedure(node.name())
            .cloned()
            .ok_or_else(|| ScriptError::UnknownCommand(node.name().to_owned()))?;
        let args = self.eval_args(node)?;

        let saved: Vec<(String, Option<f64>)> = definition
            .parameters
            .iter()
            .map(|param| (param.clone(), self.ctx.peek_variable(param)))
            .collect();
        for (param, value) in definition.parameters.iter().zip(&args) {
            self.ctx.set_variable(param, *value);
        }

        let result = self.eval(&definition.body);

        for (param, prior) in saved {
            self.ctx.restore_variable(&param, prior);
        }
        result
    }
}

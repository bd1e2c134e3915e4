//! The command behavior registry.
//!
//! Built once at interpreter startup: a map from canonical command name to
//! the behavior the evaluator dispatches. One tagged type covers the whole
//! command library; the variants differ only where evaluation semantics
//! differ — eager argument evaluation for math and logic, per-turtle
//! application for motion, deferred subtrees for control structures.

use std::collections::HashMap;

use rand::Rng;

use crate::turtle::TurtleState;

/// How one command evaluates.
#[derive(Clone, Copy)]
pub enum Behavior {
    /// Children evaluate eagerly; the function combines the values.
    Math(fn(&[f64]) -> f64),
    /// Applied to each turtle in the current selection, arguments
    /// re-evaluated per turtle; returns the magnitude of change.
    Motion(fn(&mut TurtleState, &[f64]) -> f64),
    /// Reads the active turtle.
    Query(fn(&TurtleState) -> f64),
    /// Evaluates its subtrees itself, zero or more times.
    Control(ControlOp),
}

/// The control structures the evaluator implements directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOp {
    Make,
    Repeat,
    DoTimes,
    If,
    IfElse,
    Tell,
    Ask,
    AskWith,
    Define,
}

/// Canonical name → behavior for every builtin command.
pub struct CommandRegistry {
    behaviors: HashMap<&'static str, Behavior>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut behaviors = HashMap::new();
        for sig in terrapin_types::BUILTIN_COMMANDS {
            if let Some(behavior) = behavior_for(sig.name) {
                behaviors.insert(sig.name, behavior);
            }
        }
        Self { behaviors }
    }

    pub fn get(&self, name: &str) -> Option<Behavior> {
        self.behaviors.get(name).copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn behavior_for(name: &str) -> Option<Behavior> {
    use Behavior::*;
    let behavior = match name {
        // ── Turtle motion ─────────────────────────────────────
        "Forward" => Motion(|t, args| t.move_forward(args[0])),
        "Backward" => Motion(|t, args| {
            t.move_forward(-args[0]);
            args[0]
        }),
        "Left" => Motion(|t, args| t.rotate(args[0])),
        "Right" => Motion(|t, args| t.rotate(-args[0])),
        "SetHeading" => Motion(|t, args| t.set_heading(args[0])),
        "SetPosition" => Motion(|t, args| t.set_position(args[0], args[1])),
        "Home" => Motion(|t, _| t.home()),
        "ClearScreen" => Motion(|t, _| t.home()),
        "PenUp" => Motion(|t, _| {
            t.pen_down = false;
            0.0
        }),
        "PenDown" => Motion(|t, _| {
            t.pen_down = true;
            0.0
        }),
        "ShowTurtle" => Motion(|t, _| {
            t.visible = true;
            0.0
        }),
        "HideTurtle" => Motion(|t, _| {
            t.visible = false;
            0.0
        }),
        // ── Turtle queries ────────────────────────────────────
        "XCoordinate" => Query(|t| t.x),
        "YCoordinate" => Query(|t| t.y),
        "Heading" => Query(|t| t.heading),
        "IsPenDown" => Query(|t| t.pen_down.into()),
        "IsShowing" => Query(|t| t.visible.into()),
        "ID" => Query(|t| t.id.into()),
        // ── Math ──────────────────────────────────────────────
        "Sum" => Math(|args| args[0] + args[1]),
        "Difference" => Math(|args| args[0] - args[1]),
        "Product" => Math(|args| args[0] * args[1]),
        "Quotient" => Math(|args| args[0] / args[1]),
        "Remainder" => Math(|args| args[0] % args[1]),
        "Power" => Math(|args| args[0].powf(args[1])),
        "Minus" => Math(|args| -args[0]),
        "SquareRoot" => Math(|args| args[0].sqrt()),
        "Sine" => Math(|args| args[0].to_radians().sin()),
        "Cosine" => Math(|args| args[0].to_radians().cos()),
        "Tangent" => Math(|args| args[0].to_radians().tan()),
        "ArcTangent" => Math(|args| args[0].atan().to_degrees()),
        "NaturalLog" => Math(|args| args[0].ln()),
        "Random" => Math(|args| {
            let bound = args[0];
            if bound <= 0.0 {
                0.0
            } else {
                rand::thread_rng().gen_range(0.0..bound).floor()
            }
        }),
        "Pi" => Math(|_| std::f64::consts::PI),
        // ── Logic ─────────────────────────────────────────────
        "LessThan" => Math(|args| (args[0] < args[1]).into()),
        "GreaterThan" => Math(|args| (args[0] > args[1]).into()),
        "Equal" => Math(|args| (args[0] == args[1]).into()),
        "NotEqual" => Math(|args| (args[0] != args[1]).into()),
        "And" => Math(|args| (args[0] != 0.0 && args[1] != 0.0).into()),
        "Or" => Math(|args| (args[0] != 0.0 || args[1] != 0.0).into()),
        "Not" => Math(|args| (args[0] == 0.0).into()),
        // ── Variables & control ───────────────────────────────
        "Make" => Control(ControlOp::Make),
        "Repeat" => Control(ControlOp::Repeat),
        "DoTimes" => Control(ControlOp::DoTimes),
        "If" => Control(ControlOp::If),
        "IfElse" => Control(ControlOp::IfElse),
        "Tell" => Control(ControlOp::Tell),
        "Ask" => Control(ControlOp::Ask),
        "AskWith" => Control(ControlOp::AskWith),
        terrapin_types::MAKE_USER_INSTRUCTION => Control(ControlOp::Define),
        _ => return None,
    };
    Some(behavior)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_signature_has_a_behavior() {
        for sig in terrapin_types::BUILTIN_COMMANDS {
            assert!(
                behavior_for(sig.name).is_some(),
                "no behavior for '{}'",
                sig.name
            );
        }
    }

    #[test]
    fn test_registry_covers_the_command_table() {
        let registry = CommandRegistry::new();
        for sig in terrapin_types::BUILTIN_COMMANDS {
            assert!(registry.get(sig.name).is_some(), "missing '{}'", sig.name);
        }
        assert!(registry.get("CommandBlock_1").is_none());
        assert!(registry.get("nonesuch").is_none());
    }

    #[test]
    fn test_math_behaviors() {
        let eval = |name: &str, args: &[f64]| match behavior_for(name) {
            Some(Behavior::Math(f)) => f(args),
            _ => panic!("{name} is not a math behavior"),
        };
        assert_eq!(eval("Sum", &[2.0, 3.0]), 5.0);
        assert_eq!(eval("Difference", &[2.0, 3.0]), -1.0);
        assert_eq!(eval("Product", &[4.0, 2.5]), 10.0);
        assert_eq!(eval("Quotient", &[9.0, 3.0]), 3.0);
        assert_eq!(eval("Remainder", &[9.0, 4.0]), 1.0);
        assert_eq!(eval("Power", &[2.0, 10.0]), 1024.0);
        assert_eq!(eval("Minus", &[5.0]), -5.0);
        assert!((eval("Sine", &[90.0]) - 1.0).abs() < 1e-9);
        assert!((eval("Cosine", &[0.0]) - 1.0).abs() < 1e-9);
        assert_eq!(eval("GreaterThan", &[120.0, 110.0]), 1.0);
        assert_eq!(eval("LessThan", &[120.0, 110.0]), 0.0);
        assert_eq!(eval("Equal", &[3.0, 3.0]), 1.0);
        assert_eq!(eval("And", &[1.0, 0.0]), 0.0);
        assert_eq!(eval("Or", &[1.0, 0.0]), 1.0);
        assert_eq!(eval("Not", &[0.0]), 1.0);
    }

    #[test]
    fn test_random_range() {
        let f = match behavior_for("Random") {
            Some(Behavior::Math(f)) => f,
            _ => unreachable!(),
        };
        for _ in 0..100 {
            let v = f(&[10.0]);
            assert!((0.0..10.0).contains(&v));
            assert_eq!(v, v.floor(), "random yields whole numbers");
        }
        assert_eq!(f(&[0.0]), 0.0);
        assert_eq!(f(&[-5.0]), 0.0);
    }

    #[test]
    fn test_motion_behaviors_report_magnitude() {
        let apply = |name: &str, turtle: &mut TurtleState, args: &[f64]| match behavior_for(name) {
            Some(Behavior::Motion(f)) => f(turtle, args),
            _ => panic!("{name} is not a motion behavior"),
        };
        let mut turtle = TurtleState::new(1);
        assert_eq!(apply("Forward", &mut turtle, &[50.0]), 50.0);
        assert_eq!(apply("Backward", &mut turtle, &[20.0]), 20.0);
        assert_eq!(apply("Right", &mut turtle, &[90.0]), 90.0);
        assert_eq!(apply("PenUp", &mut turtle, &[]), 0.0);
        assert!(!turtle.pen_down);
        assert_eq!(apply("HideTurtle", &mut turtle, &[]), 0.0);
        assert!(!turtle.visible);
    }

    #[test]
    fn test_query_behaviors() {
        let query = |name: &str, turtle: &TurtleState| match behavior_for(name) {
            Some(Behavior::Query(f)) => f(turtle),
            _ => panic!("{name} is not a query behavior"),
        };
        let mut turtle = TurtleState::new(3);
        turtle.set_position(10.0, -4.0);
        assert_eq!(query("XCoordinate", &turtle), 10.0);
        assert_eq!(query("YCoordinate", &turtle), -4.0);
        assert_eq!(query("Heading", &turtle), 90.0);
        assert_eq!(query("IsPenDown", &turtle), 1.0);
        assert_eq!(query("IsShowing", &turtle), 1.0);
        assert_eq!(query("ID", &turtle), 3.0);
    }
}

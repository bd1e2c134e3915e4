//! The outbound notification port.

use terrapin_types::{ScriptError, TurtleUpdate};

/// Receives one-way notifications from the interpreter.
///
/// The interpreter never waits on the sink; buffering and animation pacing
/// are the consumer's concern.
pub trait TurtleSink {
    /// A turtle was mutated (or materialized); `update` is its new pose.
    fn turtle_updated(&mut self, update: &TurtleUpdate);

    /// A submission failed; the kind identifies the failure for display.
    fn script_error(&mut self, error: &ScriptError) {
        let _ = error;
    }
}

/// Shared sinks: lets a caller keep a handle on a sink it hands to the
/// interpreter.
impl<S: TurtleSink> TurtleSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn turtle_updated(&mut self, update: &TurtleUpdate) {
        self.borrow_mut().turtle_updated(update);
    }

    fn script_error(&mut self, error: &ScriptError) {
        self.borrow_mut().script_error(error);
    }
}

/// A sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl TurtleSink for NullSink {
    fn turtle_updated(&mut self, _update: &TurtleUpdate) {}
}

/// A sink that records every notification, for tests and polling embedders.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub updates: Vec<TurtleUpdate>,
    pub errors: Vec<ScriptError>,
}

impl TurtleSink for RecordingSink {
    fn turtle_updated(&mut self, update: &TurtleUpdate) {
        self.updates.push(*update);
    }

    fn script_error(&mut self, error: &ScriptError) {
        self.errors.push(error.clone());
    }
}

use serde::{Deserialize, Serialize};

/// The payload of a turtle-state notification.
///
/// Sent to the embedding layer after every turtle mutation, carrying the
/// post-mutation pose. One-way: the interpreter never waits on the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurtleUpdate {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Heading in degrees; 90 is north, the starting pose.
    pub heading: f64,
    pub pen_down: bool,
    pub visible: bool,
}

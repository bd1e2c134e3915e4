//! Turtle state and movement math.

use terrapin_types::TurtleUpdate;

/// One turtle: position, heading, pen, visibility.
///
/// Headings are degrees with the mathematical convention — 0 points along
/// +x and 90 (the starting pose) points north along +y. Rotating right is
/// clockwise, so it subtracts.
#[derive(Debug, Clone, PartialEq)]
pub struct TurtleState {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub pen_down: bool,
    pub visible: bool,
}

impl TurtleState {
    /// A turtle in the default pose: origin, facing north, pen down,
    /// visible.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            heading: 90.0,
            pen_down: true,
            visible: true,
        }
    }

    /// Move `distance` along the current heading. Returns the distance.
    pub fn move_forward(&mut self, distance: f64) -> f64 {
        let radians = self.heading.to_radians();
        self.x += radians.cos() * distance;
        self.y += radians.sin() * distance;
        distance
    }

    /// Rotate counterclockwise by `degrees` (negative for clockwise).
    /// Returns the magnitude of the turn.
    pub fn rotate(&mut self, degrees: f64) -> f64 {
        self.heading = normalize(self.heading + degrees);
        degrees.abs()
    }

    /// Face an absolute heading. Returns the degrees turned.
    pub fn set_heading(&mut self, heading: f64) -> f64 {
        let target = normalize(heading);
        let turned = (target - self.heading).abs();
        self.heading = target;
        turned.min(360.0 - turned)
    }

    /// Jump to an absolute position. Returns the distance moved.
    pub fn set_position(&mut self, x: f64, y: f64) -> f64 {
        let moved = ((x - self.x).powi(2) + (y - self.y).powi(2)).sqrt();
        self.x = x;
        self.y = y;
        moved
    }

    /// Return to the origin facing north. Returns the distance moved.
    pub fn home(&mut self) -> f64 {
        let moved = self.set_position(0.0, 0.0);
        self.heading = 90.0;
        moved
    }

    /// The notification payload for the current pose.
    pub fn update(&self) -> TurtleUpdate {
        TurtleUpdate {
            id: self.id,
            x: self.x,
            y: self.y,
            heading: self.heading,
            pen_down: self.pen_down,
            visible: self.visible,
        }
    }
}

fn normalize(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

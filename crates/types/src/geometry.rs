use serde::{Deserialize, Serialize};

/// A 2D coordinate in project space.
///
/// Shape vertices and paint positions are expressed in these units; the
/// renderer decides how they map onto output pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

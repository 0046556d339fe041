//! Collision shapes for 2D physics
//!
//! The only shape is an axis-aligned rectangle, used both for the moving
//! body and for the static tiles it collides with.

use tilefall_math::Vec2;

/// A 2D axis-aligned rectangle
///
/// `x, y` is the top-left corner in a Y-down coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    /// Width, never negative
    pub width: f64,
    /// Height, never negative
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size
    ///
    /// Negative extents are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a rectangle whose horizontal center and bottom edge sit on `anchor`
    pub fn from_bottom_center(anchor: Vec2, size: Vec2) -> Self {
        Self::new(anchor.x - size.x / 2.0, anchor.y - size.y, size.x, size.y)
    }

    /// Left edge (low x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge (high x)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge (low y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge (high y)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) / 2.0
    }

    /// Translate the rectangle by a delta
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }
}

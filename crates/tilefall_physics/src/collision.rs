//! Collision detection for 2D rectangles
//!
//! Computes whether two rectangles overlap and the per-axis displacement
//! that would move the first one out of the second.

use crate::shapes::Rect;
use tilefall_math::Vec2;

/// Result of testing a moving rectangle against a fixed one
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    /// Whether the rectangles overlap on both axes
    pub overlaps: bool,
    /// Signed displacement per axis that separates `moving` from `fixed`
    ///
    /// Both components are computed; applying either one alone is enough to
    /// separate the rectangles. Zero when there is no overlap.
    pub correction: Vec2,
}

impl Overlap {
    /// An empty result (no overlap, zero correction)
    pub const NONE: Self = Self {
        overlaps: false,
        correction: Vec2::ZERO,
    };
}

/// Signed correction along one axis
///
/// Pushes toward low coordinates when `moving` starts before `fixed`,
/// toward high coordinates otherwise.
#[inline]
fn axis_correction(moving_low: f64, moving_high: f64, fixed_low: f64, fixed_high: f64) -> f64 {
    if moving_low < fixed_low {
        fixed_low - moving_high
    } else {
        fixed_high - moving_low
    }
}

/// Test `moving` against `fixed`
///
/// Overlap is strict on both axes: rectangles that only share an edge do not
/// overlap.
pub fn resolve(moving: &Rect, fixed: &Rect) -> Overlap {
    let overlaps_x = moving.left() < fixed.right() && moving.right() > fixed.left();
    let overlaps_y = moving.top() < fixed.bottom() && moving.bottom() > fixed.top();

    if !(overlaps_x && overlaps_y) {
        return Overlap::NONE;
    }

    let correction = Vec2::new(
        axis_correction(moving.left(), moving.right(), fixed.left(), fixed.right()),
        axis_correction(moving.top(), moving.bottom(), fixed.top(), fixed.bottom()),
    );

    Overlap {
        overlaps: true,
        correction,
    }
}

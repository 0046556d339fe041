//! Kinematic body for the platformer player
//!
//! Fixed-step integration: one call to [`KinematicBody::step`] per tick, no
//! delta time.

use crate::shapes::Rect;
use crate::world::PhysicsConfig;
use tilefall_math::Vec2;

/// Horizontal movement input for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveAxis {
    Left,
    #[default]
    None,
    Right,
}

impl MoveAxis {
    /// -1, 0 or +1
    pub fn sign(self) -> f64 {
        match self {
            MoveAxis::Left => -1.0,
            MoveAxis::None => 0.0,
            MoveAxis::Right => 1.0,
        }
    }
}

/// A moving box with position history
///
/// `position` is the bottom-center of the box. `previous_position` is only
/// used to tell whether the body is rising.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicBody {
    pub position: Vec2,
    pub previous_position: Vec2,
    pub velocity: Vec2,
    /// Width and height of the bounding box
    pub size: Vec2,
}

impl KinematicBody {
    /// Create a body at rest
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: Vec2::ZERO,
            size,
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Bounding rectangle at the current position
    pub fn bounds(&self) -> Rect {
        Rect::from_bottom_center(self.position, self.size)
    }

    /// Whether the body moved up (toward lower y) during the last tick
    pub fn is_rising(&self) -> bool {
        self.position.y < self.previous_position.y
    }

    /// Whether a jump request would be honored right now
    pub fn can_jump(&self) -> bool {
        !self.is_rising()
    }

    /// Advance one tick
    ///
    /// Order matters: input, jump gate (checked against the position history
    /// from the previous tick), gravity, damping, then integration.
    pub fn step(&mut self, axis: MoveAxis, jump: bool, config: &PhysicsConfig) {
        if axis != MoveAxis::None {
            self.velocity.x = axis.sign() * config.move_speed;
        }

        if jump && self.can_jump() {
            self.velocity.y = -config.move_speed * config.jump_factor;
        }

        self.velocity.y += config.gravity;
        self.velocity = self.velocity.component_mul(config.damping);

        self.previous_position = self.position;
        self.position += self.velocity;
    }

    /// Apply a positional correction (e.g., from collision resolution)
    pub fn apply_correction(&mut self, correction: Vec2) {
        self.position += correction;
    }
}

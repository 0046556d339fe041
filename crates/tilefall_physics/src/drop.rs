//! Single-axis drop animation
//!
//! A piece falls under constant per-tick gravity until it reaches a stop
//! height known in advance. There is no collision; the caller computes
//! `stop_y` from the target cell.

/// Phase of a drop animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPhase {
    Falling,
    Landed,
}

/// One falling piece
#[derive(Clone, Debug, PartialEq)]
pub struct DropAnimator {
    current_y: f64,
    velocity_y: f64,
    stop_y: f64,
    gravity: f64,
    landed: bool,
}

impl DropAnimator {
    /// Start a fall at `spawn_y` with zero velocity
    pub fn new(spawn_y: f64, stop_y: f64, gravity: f64) -> Self {
        Self {
            current_y: spawn_y,
            velocity_y: 0.0,
            stop_y,
            gravity,
            landed: false,
        }
    }

    /// Current height in pixels
    ///
    /// After landing this may be past `stop_y` by up to one tick of travel.
    pub fn current_y(&self) -> f64 {
        self.current_y
    }

    pub fn velocity_y(&self) -> f64 {
        self.velocity_y
    }

    pub fn stop_y(&self) -> f64 {
        self.stop_y
    }

    pub fn is_landed(&self) -> bool {
        self.landed
    }

    pub fn phase(&self) -> DropPhase {
        if self.landed {
            DropPhase::Landed
        } else {
            DropPhase::Falling
        }
    }

    /// Height to draw at: `current_y` while falling, snapped to `stop_y` once landed
    pub fn resting_y(&self) -> f64 {
        if self.landed {
            self.stop_y
        } else {
            self.current_y
        }
    }

    /// Advance one tick
    ///
    /// Landing is terminal: further calls leave the piece where it is.
    pub fn step(&mut self) -> DropPhase {
        if self.landed {
            return DropPhase::Landed;
        }

        self.velocity_y += self.gravity;
        self.current_y += self.velocity_y;
        if self.current_y >= self.stop_y {
            self.landed = true;
        }

        self.phase()
    }

    /// Tick on which a fall from `spawn_y` reaches `stop_y`
    ///
    /// Closed form of `y(t) = spawn_y + gravity * t(t+1)/2`, the smallest
    /// `t >= 1` with `y(t) >= stop_y`.
    pub fn ticks_to_land(spawn_y: f64, stop_y: f64, gravity: f64) -> u32 {
        let distance = stop_y - spawn_y;
        if distance <= 0.0 || gravity <= 0.0 {
            return 1;
        }
        let estimate = ((-1.0 + (1.0 + 8.0 * distance / gravity).sqrt()) / 2.0).ceil();
        let mut t = (estimate as u32).max(1);
        // Guard against rounding in the square root
        while t > 1 && gravity * f64::from(t - 1) * f64::from(t) / 2.0 >= distance {
            t -= 1;
        }
        while gravity * f64::from(t) * f64::from(t + 1) / 2.0 < distance {
            t += 1;
        }
        t
    }
}

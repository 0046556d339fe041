//! Platformer session
//!
//! One body in a tile world, advanced once per frame by the host loop.

use tilefall_math::Vec2;
use tilefall_physics::{KinematicBody, MoveAxis, PhysicsConfig, ResolveReport, TileGrid, TileWorld};

/// Input sampled by the host for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_axis: MoveAxis,
    pub jump_requested: bool,
}

impl TickInput {
    /// Input from held keys
    ///
    /// Right is applied after left, so holding both moves right.
    pub fn from_keys(left: bool, right: bool, jump: bool) -> Self {
        let move_axis = if right {
            MoveAxis::Right
        } else if left {
            MoveAxis::Left
        } else {
            MoveAxis::None
        };
        Self {
            move_axis,
            jump_requested: jump,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_requested = true;
        self
    }
}

/// The platformer's world and player body
#[derive(Clone, Debug)]
pub struct PlatformerSession {
    world: TileWorld,
    body: KinematicBody,
    ticks: u64,
    last_report: ResolveReport,
}

impl PlatformerSession {
    /// Place a body of `body_size` at `spawn` (bottom-center) in `grid`
    pub fn new(grid: TileGrid, config: PhysicsConfig, spawn: Vec2, body_size: Vec2) -> Self {
        Self {
            world: TileWorld::with_config(grid, config),
            body: KinematicBody::new(spawn, body_size),
            ticks: 0,
            last_report: ResolveReport::default(),
        }
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn world(&self) -> &TileWorld {
        &self.world
    }

    /// Ticks advanced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Resolution summary from the most recent tick
    pub fn last_report(&self) -> ResolveReport {
        self.last_report
    }

    /// Integrate and collide for one frame; returns the position to draw
    pub fn advance_tick(&mut self, input: TickInput) -> Vec2 {
        self.last_report = self
            .world
            .step(&mut self.body, input.move_axis, input.jump_requested);
        self.ticks += 1;
        if self.last_report.unresolved_ties > 0 {
            log::trace!(
                "Tick {}: {} tile overlap(s) left unresolved",
                self.ticks,
                self.last_report.unresolved_ties
            );
        }
        self.body.position
    }

    /// Add or remove a solid tile; out-of-range cells are ignored
    pub fn edit_tile(&mut self, col: i32, row: i32, solid: bool) -> bool {
        self.world.edit_tile(col, row, solid)
    }

    /// Edit the tile under a pixel position, for mouse-driven map editing
    pub fn edit_tile_at(&mut self, point: Vec2, solid: bool) -> bool {
        let (col, row) = self.world.grid().cell_at(point);
        self.edit_tile(col, row, solid)
    }
}

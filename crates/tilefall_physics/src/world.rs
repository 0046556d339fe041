//! Tile collision world

use serde::{Deserialize, Serialize};

use crate::body::{KinematicBody, MoveAxis};
use crate::collision::resolve;
use crate::grid::TileGrid;
use tilefall_math::Vec2;

/// What to do when both axes need the same correction magnitude
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Apply neither axis; the body stays overlapping for this tick
    #[default]
    None,
    /// Resolve along y
    PreferVertical,
    /// Resolve along x
    PreferHorizontal,
}

/// Configuration for the physics simulation
///
/// All values are per tick; there is no delta time.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Added to `velocity.y` every tick (Y-down, so positive pulls down)
    pub gravity: f64,
    /// Per-axis velocity multiplier applied every tick
    pub damping: Vec2,
    /// Horizontal speed set by movement input
    pub move_speed: f64,
    /// Jump impulse as a multiple of `move_speed`
    pub jump_factor: f64,
    /// Gravity used by the board drop animation
    pub drop_gravity: f64,
    /// Axis choice on equal-magnitude corrections
    pub tie_break: TieBreak,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            damping: Vec2::new(0.7, 0.97),
            move_speed: 4.0,
            jump_factor: 2.5,
            drop_gravity: 1.0,
            tie_break: TieBreak::None,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Set the tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Summary of one resolution pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Tiles the body was pushed out of
    pub corrections: usize,
    /// Overlaps left in place because both axes tied
    pub unresolved_ties: usize,
}

/// A static tile grid that bodies collide against
#[derive(Clone, Debug)]
pub struct TileWorld {
    grid: TileGrid,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl TileWorld {
    /// Create a world with default configuration
    pub fn new(grid: TileGrid) -> Self {
        Self::with_config(grid, PhysicsConfig::default())
    }

    /// Create a world with custom configuration
    pub fn with_config(grid: TileGrid, config: PhysicsConfig) -> Self {
        Self { grid, config }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Set or clear a tile, ignoring out-of-bounds cells
    pub fn edit_tile(&mut self, col: i32, row: i32, solid: bool) -> bool {
        let applied = self.grid.set_solid(col, row, solid);
        if applied {
            log::debug!("Tile ({}, {}) solid={}", col, row, solid);
        } else {
            log::debug!("Ignored edit outside grid at ({}, {})", col, row);
        }
        applied
    }

    /// Integrate the body one tick, then resolve it against the grid
    pub fn step(&self, body: &mut KinematicBody, axis: MoveAxis, jump: bool) -> ResolveReport {
        body.step(axis, jump, &self.config);
        self.resolve(body)
    }

    fn choose_axis(&self, correction: Vec2) -> Option<Axis> {
        let (cx, cy) = (correction.x.abs(), correction.y.abs());
        if cx < cy {
            Some(Axis::X)
        } else if cy < cx {
            Some(Axis::Y)
        } else {
            match self.config.tie_break {
                TieBreak::None => None,
                TieBreak::PreferVertical => Some(Axis::Y),
                TieBreak::PreferHorizontal => Some(Axis::X),
            }
        }
    }

    /// Push the body out of every solid tile it overlaps
    ///
    /// Tiles are visited rows first, then columns, and the body rectangle is
    /// rebuilt after every correction, so later tiles see earlier fixes.
    /// Only the axis needing the smaller push is applied. The matching
    /// velocity component is zeroed only when it points into the tile.
    pub fn resolve(&self, body: &mut KinematicBody) -> ResolveReport {
        let mut report = ResolveReport::default();

        for (col, row) in self.grid.solid_cells() {
            let tile = self.grid.tile_rect(col, row);
            let overlap = resolve(&body.bounds(), &tile);
            if !overlap.overlaps {
                continue;
            }

            let correction = overlap.correction;
            match self.choose_axis(correction) {
                Some(Axis::X) => {
                    body.apply_correction(Vec2::new(correction.x, 0.0));
                    if body.velocity.x * correction.x < 0.0 {
                        body.velocity.x = 0.0;
                    }
                    report.corrections += 1;
                    log::trace!("Tile ({}, {}) pushed body x by {}", col, row, correction.x);
                }
                Some(Axis::Y) => {
                    body.apply_correction(Vec2::new(0.0, correction.y));
                    if body.velocity.y * correction.y < 0.0 {
                        body.velocity.y = 0.0;
                    }
                    report.corrections += 1;
                    log::trace!("Tile ({}, {}) pushed body y by {}", col, row, correction.y);
                }
                None => {
                    report.unresolved_ties += 1;
                    log::trace!("Tile ({}, {}) overlap tied at {:?}, left unresolved", col, row, correction);
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision;

    const TILE: f64 = 16.0;

    fn body_size() -> Vec2 {
        Vec2::new(12.0, 24.0)
    }

    /// 16x16 world with a solid floor on the last row
    fn floor_world() -> TileWorld {
        TileWorld::new(TileGrid::new(16, 16, TILE).with_solid_row(15))
    }

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.damping, Vec2::new(0.7, 0.97));
        assert_eq!(config.jump_factor, 2.5);
        assert_eq!(config.tie_break, TieBreak::None);
    }

    #[test]
    fn test_physics_config_custom() {
        let config = PhysicsConfig::new(1.5).with_tie_break(TieBreak::PreferVertical);
        assert_eq!(config.gravity, 1.5);
        assert_eq!(config.tie_break, TieBreak::PreferVertical);
    }

    #[test]
    fn test_falls_and_rests_on_floor() {
        let world = floor_world();
        let mut body = KinematicBody::new(Vec2::new(128.0, 50.0), body_size());

        for _ in 0..200 {
            world.step(&mut body, MoveAxis::None, false);
        }

        assert_eq!(body.position.y, 15.0 * TILE);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position.x, 128.0);
    }

    #[test]
    fn test_resting_contact_needs_no_correction() {
        let world = floor_world();
        let mut body = KinematicBody::new(Vec2::new(128.0, 240.0), body_size());

        let report = world.resolve(&mut body);

        assert_eq!(report, ResolveReport::default());
        assert_eq!(body.position, Vec2::new(128.0, 240.0));
    }

    #[test]
    fn test_velocity_zeroed_only_when_moving_into_tile() {
        let world = floor_world();

        // Sunk 2px into the floor while moving down
        let mut falling = KinematicBody::new(Vec2::new(128.0, 242.0), body_size())
            .with_velocity(Vec2::new(1.0, 3.0));
        world.resolve(&mut falling);
        assert_eq!(falling.position.y, 240.0);
        assert_eq!(falling.velocity, Vec2::new(1.0, 0.0));

        // Same overlap while already moving up keeps its velocity
        let mut rising = KinematicBody::new(Vec2::new(128.0, 242.0), body_size())
            .with_velocity(Vec2::new(0.0, -3.0));
        world.resolve(&mut rising);
        assert_eq!(rising.position.y, 240.0);
        assert_eq!(rising.velocity.y, -3.0);
    }

    #[test]
    fn test_walks_into_wall_and_stops() {
        let mut grid = TileGrid::new(16, 16, TILE).with_solid_row(15);
        for row in 0..15 {
            grid.set_solid(10, row, true);
        }
        let world = TileWorld::new(grid);
        let mut body = KinematicBody::new(Vec2::new(128.0, 240.0), body_size());

        for _ in 0..80 {
            world.step(&mut body, MoveAxis::Right, false);
        }

        // Right edge flush with the wall's left side at x = 160
        assert_eq!(body.bounds().right(), 160.0);
        assert_eq!(body.velocity.x, 0.0);
        assert_eq!(body.position.y, 240.0);
    }

    #[test]
    fn test_seam_between_tiles_resolved_once() {
        // Body straddles two floor tiles; fixing the first clears the second
        let world = floor_world();
        let mut body = KinematicBody::new(Vec2::new(128.0, 243.0), body_size())
            .with_velocity(Vec2::new(0.0, 5.0));

        let report = world.resolve(&mut body);

        assert_eq!(report.corrections, 1);
        assert_eq!(body.position, Vec2::new(128.0, 240.0));
    }

    #[test]
    fn test_corner_overlap_follows_row_major_order() {
        // Body (8..20, 20..44) sunk into the wall at (0, 1) and the floor row.
        // The wall is visited first and pushes right, which leaves only the
        // floor tile at (1, 2) to push up. Floor-first order would instead
        // push left and then stall on two tied overlaps.
        let grid = TileGrid::from_rows(&["...", "#..", "###"], TILE);
        let world = TileWorld::new(grid);
        let mut body = KinematicBody::new(Vec2::new(14.0, 44.0), body_size())
            .with_velocity(Vec2::new(-3.0, 4.0));

        let report = world.resolve(&mut body);

        assert_eq!(report.corrections, 2);
        assert_eq!(report.unresolved_ties, 0);
        assert_eq!(body.position, Vec2::new(22.0, 32.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_tie_left_unresolved_by_default() {
        let grid = TileGrid::from_rows(&["..", ".#"], TILE);
        let world = TileWorld::new(grid);
        // 16x16 body covering (8..24, 8..24); tile covers (16..32, 16..32)
        let mut body = KinematicBody::new(Vec2::new(16.0, 24.0), Vec2::new(16.0, 16.0))
            .with_velocity(Vec2::new(2.0, 2.0));

        let report = world.resolve(&mut body);

        assert_eq!(report.unresolved_ties, 1);
        assert_eq!(report.corrections, 0);
        assert_eq!(body.position, Vec2::new(16.0, 24.0));
        assert_eq!(body.velocity, Vec2::new(2.0, 2.0));
        assert!(collision::resolve(&body.bounds(), &world.grid().tile_rect(1, 1)).overlaps);
    }

    #[test]
    fn test_tie_prefer_vertical() {
        let grid = TileGrid::from_rows(&["..", ".#"], TILE);
        let config = PhysicsConfig::default().with_tie_break(TieBreak::PreferVertical);
        let world = TileWorld::with_config(grid, config);
        let mut body = KinematicBody::new(Vec2::new(16.0, 24.0), Vec2::new(16.0, 16.0))
            .with_velocity(Vec2::new(2.0, 2.0));

        let report = world.resolve(&mut body);

        assert_eq!(report.corrections, 1);
        assert_eq!(body.position, Vec2::new(16.0, 16.0));
        assert_eq!(body.velocity, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_tie_prefer_horizontal() {
        let grid = TileGrid::from_rows(&["..", ".#"], TILE);
        let config = PhysicsConfig::default().with_tie_break(TieBreak::PreferHorizontal);
        let world = TileWorld::with_config(grid, config);
        let mut body = KinematicBody::new(Vec2::new(16.0, 24.0), Vec2::new(16.0, 16.0))
            .with_velocity(Vec2::new(2.0, 2.0));

        world.resolve(&mut body);

        assert_eq!(body.position, Vec2::new(8.0, 24.0));
        assert_eq!(body.velocity, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_edit_tile() {
        let mut world = floor_world();
        assert!(world.edit_tile(5, 5, true));
        assert!(world.grid().is_solid(5, 5));
        assert!(world.edit_tile(5, 5, false));
        assert!(!world.grid().is_solid(5, 5));
        assert!(!world.edit_tile(-3, 40, true));
    }
}

//! Game simulation system
//!
//! Runs one frame of both demos from host-polled input:
//! - Input → platformer body movement
//! - Mouse edits → tile grid
//! - Clicks → board drops
//! - Drop animation stepping

use tilefall_game::{
    BoardSession, DropError, DropState, PlatformerSession, TickInput, Vec2,
};

use crate::config::AppConfig;

/// Input polled by the host for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Jump key held
    pub jump: bool,
    /// Cursor position in pixels
    pub cursor: Vec2,
    /// Primary button went down this frame
    pub primary_pressed: bool,
    /// Secondary button went down this frame
    pub secondary_pressed: bool,
}

/// Result of a simulation update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    /// Where to draw the platformer body
    pub player_position: Vec2,
    /// Board drop state after this frame
    pub drop: DropState,
    /// Whether the hover piece should be drawn
    pub show_hover_piece: bool,
}

/// Which demo receives mouse clicks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Clicks add (primary) or remove (secondary) tiles
    TileEditor,
    /// Clicks drop a piece into the column under the cursor
    Board,
}

/// Owns both demo sessions and advances them once per frame
pub struct SimulationSystem {
    pub platformer: PlatformerSession,
    pub board: BoardSession,
    pub click_target: ClickTarget,
    frames: u64,
}

impl SimulationSystem {
    /// Build both sessions from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let physics = config.physics.to_physics_config();
        let drop_gravity = physics.drop_gravity;
        let platformer = PlatformerSession::new(
            config.platformer.build_grid(),
            physics,
            config.platformer.spawn_point(),
            config.platformer.body_extent(),
        );
        let board = BoardSession::new(config.board.to_layout(), drop_gravity);

        Self {
            platformer,
            board,
            click_target: ClickTarget::Board,
            frames: 0,
        }
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one simulation frame
    pub fn update(&mut self, input: &FrameInput) -> SimulationResult {
        self.frames += 1;

        // 1. Platformer: integrate and collide
        let tick = TickInput::from_keys(input.left, input.right, input.jump);
        let player_position = self.platformer.advance_tick(tick);

        // 2. Route clicks
        match self.click_target {
            ClickTarget::TileEditor => {
                if input.primary_pressed {
                    self.platformer.edit_tile_at(input.cursor, true);
                } else if input.secondary_pressed {
                    self.platformer.edit_tile_at(input.cursor, false);
                }
            }
            ClickTarget::Board => {
                if input.primary_pressed {
                    let column = self.board.layout().column_at(input.cursor.x as i32);
                    match self.board.begin_drop(column) {
                        Ok(()) => {}
                        // Clicks during a fall are ignored
                        Err(DropError::DropInProgress) => {}
                        Err(e) => log::info!("{}", e),
                    }
                }
            }
        }

        // 3. Board: step the falling piece
        let drop = self.board.advance_drop();
        if let DropState::Landed { column, row, piece } = drop {
            log::info!("{:?} piece landed in column {}, row {}", piece, column, row);
        }

        SimulationResult {
            player_position,
            drop,
            show_hover_piece: self.board.show_hover_piece(),
        }
    }
}

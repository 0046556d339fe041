//! Game sessions for the Tilefall demos
//!
//! This crate wraps the physics core in session objects owned by the host
//! frame loop:
//!
//! - [`Board`] - Four-in-a-row slot grid
//! - [`BoardLayout`] - Pixel geometry of the board and cursor mapping
//! - [`BoardSession`] - Turn order and the animated falling piece
//! - [`PlatformerSession`] - Player body in a tile world
//! - [`TickInput`] - Per-frame input for the platformer

mod board;
mod board_session;
mod layout;
mod platformer;

pub use board::{Board, Piece};
pub use board_session::{BoardSession, DropError, DropState};
pub use layout::BoardLayout;
pub use platformer::{PlatformerSession, TickInput};

// Re-export commonly used types from the lower crates for convenience
pub use tilefall_math::Vec2;
pub use tilefall_physics::{MoveAxis, PhysicsConfig, TieBreak, TileGrid};

//! 2D tile physics for Tilefall
//!
//! This crate provides the simulation core shared by the demos:
//! - Axis-aligned rectangles and overlap/correction tests
//! - A kinematic body with gravity, damping and a jump gate
//! - A static tile grid that resolves a body against solid cells
//! - A single-axis drop animation for falling board pieces

pub mod body;
pub mod collision;
pub mod drop;
pub mod grid;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{KinematicBody, MoveAxis};
pub use collision::{resolve, Overlap};
pub use drop::{DropAnimator, DropPhase};
pub use grid::{TileFlags, TileGrid};
pub use shapes::Rect;
pub use world::{PhysicsConfig, ResolveReport, TieBreak, TileWorld};

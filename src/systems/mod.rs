//! Application systems
//!
//! Host-side systems that sit between the frame loop and the game sessions.

mod simulation;

pub use simulation::{ClickTarget, FrameInput, SimulationResult, SimulationSystem};

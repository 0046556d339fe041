//! 2D Mathematics Library
//!
//! This crate provides the vector type shared by the Tilefall physics and
//! game crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (Y-down screen space)

mod vec2;

pub use vec2::Vec2;

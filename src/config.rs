//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TILEFALL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tilefall_game::{BoardLayout, PhysicsConfig, TieBreak, TileGrid, Vec2};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Physics tuning
    #[serde(default)]
    pub physics: PhysicsSection,
    /// Platformer level setup
    #[serde(default)]
    pub platformer: PlatformerConfig,
    /// Board game layout
    #[serde(default)]
    pub board: BoardConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TILEFALL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TILEFALL_PHYSICS__GRAVITY=0.8 -> physics.gravity = 0.8
        figment = figment.merge(Env::prefixed("TILEFALL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSection {
    /// Added to vertical velocity each tick (positive = down)
    pub gravity: f64,
    /// Horizontal velocity multiplier per tick
    pub damping_x: f64,
    /// Vertical velocity multiplier per tick
    pub damping_y: f64,
    /// Horizontal speed from movement input
    pub move_speed: f64,
    /// Jump impulse as a multiple of move speed
    pub jump_factor: f64,
    /// Gravity for the falling board piece
    pub drop_gravity: f64,
    /// Axis choice when both corrections are equal: "none", "prefer_vertical", "prefer_horizontal"
    pub tie_break: TieBreak,
}

impl Default for PhysicsSection {
    fn default() -> Self {
        let defaults = PhysicsConfig::default();
        Self {
            gravity: defaults.gravity,
            damping_x: defaults.damping.x,
            damping_y: defaults.damping.y,
            move_speed: defaults.move_speed,
            jump_factor: defaults.jump_factor,
            drop_gravity: defaults.drop_gravity,
            tie_break: defaults.tie_break,
        }
    }
}

impl PhysicsSection {
    /// Convert to the physics engine's config type
    pub fn to_physics_config(&self) -> PhysicsConfig {
        PhysicsConfig {
            gravity: self.gravity,
            damping: Vec2::new(self.damping_x, self.damping_y),
            move_speed: self.move_speed,
            jump_factor: self.jump_factor,
            drop_gravity: self.drop_gravity,
            tie_break: self.tie_break,
        }
    }
}

/// Platformer level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    /// Grid width in tiles
    pub columns: usize,
    /// Grid height in tiles
    pub rows: usize,
    /// Tile edge length in pixels
    pub tile_size: f64,
    /// Row filled with solid tiles at startup (none if out of range)
    pub floor_row: usize,
    /// Player box [width, height]
    pub body_size: [f64; 2],
    /// Player start, bottom-center [x, y]
    pub spawn: [f64; 2],
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            columns: 16,
            rows: 16,
            tile_size: 16.0,
            floor_row: 15,
            body_size: [12.0, 24.0],
            spawn: [128.0, 50.0],
        }
    }
}

impl PlatformerConfig {
    /// Build the starting tile grid
    pub fn build_grid(&self) -> TileGrid {
        TileGrid::new(self.columns, self.rows, self.tile_size).with_solid_row(self.floor_row)
    }

    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn[0], self.spawn[1])
    }

    pub fn body_extent(&self) -> Vec2 {
        Vec2::new(self.body_size[0], self.body_size[1])
    }
}

/// Board game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board width in slots
    pub columns: usize,
    /// Board height in slots
    pub rows: usize,
    /// Padding around the board in pixels
    pub board_padding: i32,
    /// Padding between slots in pixels
    pub slot_padding: i32,
    /// Slot diameter in pixels
    pub slot_size: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let layout = BoardLayout::default();
        Self {
            columns: layout.columns,
            rows: layout.rows,
            board_padding: layout.board_padding,
            slot_padding: layout.slot_padding,
            slot_size: layout.slot_size,
        }
    }
}

impl BoardConfig {
    pub fn to_layout(&self) -> BoardLayout {
        BoardLayout {
            columns: self.columns,
            rows: self.rows,
            board_padding: self.board_padding,
            slot_padding: self.slot_padding,
            slot_size: self.slot_size,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

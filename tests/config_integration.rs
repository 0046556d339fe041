//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use tilefall::config::AppConfig;
use tilefall_game::TieBreak;

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("TILEFALL_PHYSICS__GRAVITY");

    let config = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(config.physics.to_physics_config(), builtin.physics.to_physics_config());
    assert_eq!(config.board.to_layout(), builtin.board.to_layout());
    assert_eq!(config.platformer.floor_row, builtin.platformer.floor_row);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TILEFALL_PHYSICS__GRAVITY", "0.8");
    std::env::set_var("TILEFALL_PHYSICS__TIE_BREAK", "prefer_vertical");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("TILEFALL_PHYSICS__GRAVITY");
    std::env::remove_var("TILEFALL_PHYSICS__TIE_BREAK");

    assert_eq!(config.physics.gravity, 0.8);
    assert_eq!(config.physics.tie_break, TieBreak::PreferVertical);
    // Untouched keys still come from the file
    assert_eq!(config.physics.damping_x, 0.7);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.board.columns, 7);
    assert_eq!(config.debug.log_level, "info");
}

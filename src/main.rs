//! Tilefall - headless demo runner
//!
//! Stands in for the windowed frame loop: feeds scripted input to the
//! simulation system one frame at a time and logs what happens.

use tilefall::config::AppConfig;
use tilefall::systems::{FrameInput, SimulationSystem};
use tilefall_game::{Board, DropState, Piece, Vec2};

/// Frames allowed for a single piece to land before giving up
const MAX_DROP_FRAMES: u32 = 600;

fn run_platformer(sim: &mut SimulationSystem) {
    let idle = FrameInput::default();
    let walk_right = FrameInput { right: true, ..idle };
    let jump = FrameInput { jump: true, ..idle };

    let script: Vec<(&str, FrameInput, u32)> = vec![
        ("fall", idle, 60),
        ("walk right", walk_right, 20),
        ("jump", jump, 1),
        ("airborne", idle, 60),
    ];

    for (label, input, frames) in script {
        let mut result = None;
        for _ in 0..frames {
            result = Some(sim.update(&input));
        }
        if let Some(result) = result {
            let body = sim.platformer.body();
            log::info!(
                "[{}] position=({:.2}, {:.2}) velocity=({:.2}, {:.2})",
                label,
                result.player_position.x,
                result.player_position.y,
                body.velocity.x,
                body.velocity.y
            );
        }
    }
}

fn drop_into(sim: &mut SimulationSystem, column: usize) {
    let layout = *sim.board.layout();
    let click = FrameInput {
        cursor: Vec2::new(f64::from(layout.column_center_x(column)), 0.0),
        primary_pressed: true,
        ..FrameInput::default()
    };

    let mut result = sim.update(&click);
    if result.drop == DropState::Idle {
        // Rejected (full column); the simulation system already logged why
        return;
    }

    let mut frames = 1;
    while !matches!(result.drop, DropState::Landed { .. }) && frames < MAX_DROP_FRAMES {
        result = sim.update(&FrameInput::default());
        frames += 1;
    }
    log::debug!("Drop into column {} took {} frames", column, frames);
}

fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..board.rows()).rev() {
        for column in 0..board.columns() {
            out.push(match board.get(column, row) {
                Some(Piece::Yellow) => 'Y',
                Some(Piece::Red) => 'R',
                None => '.',
            });
        }
        out.push('\n');
    }
    out
}

fn run_board(sim: &mut SimulationSystem) {
    for column in [3, 3, 4, 2, 3, 3, 3, 3, 3] {
        if sim.board.board().is_full() {
            log::info!("Board is full");
            break;
        }
        drop_into(sim, column);
    }
    log::info!("Board after {} pieces:\n{}", sim.board.board().piece_count(), render_board(sim.board.board()));
}

fn main() {
    // Load config before logging so the configured level applies
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Tilefall");

    let mut sim = SimulationSystem::from_config(&config);
    let (width, height) = sim.board.layout().screen_size();
    log::info!(
        "Platformer grid {}x{} tiles, board {}x{} slots ({}x{} px)",
        config.platformer.columns,
        config.platformer.rows,
        config.board.columns,
        config.board.rows,
        width,
        height
    );

    run_platformer(&mut sim);
    run_board(&mut sim);

    log::info!("Simulated {} frames", sim.frames());
}

//! Board game session
//!
//! Owns the slot grid, whose turn it is, and at most one falling piece.
//!
//! # Example
//! ```ignore
//! let mut session = BoardSession::new(BoardLayout::default(), 1.0);
//! session.begin_drop(session.layout().column_at(cursor_x))?;
//! while !matches!(session.advance_drop(), DropState::Landed { .. }) {}
//! ```

use crate::board::{Board, Piece};
use crate::layout::BoardLayout;
use tilefall_physics::{DropAnimator, DropPhase};

/// Error starting a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    /// The chosen column has no free slot
    ColumnFull { column: usize },
    /// A piece is still falling
    DropInProgress,
}

impl std::fmt::Display for DropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropError::ColumnFull { column } => write!(f, "Column {} is full", column),
            DropError::DropInProgress => write!(f, "A piece is already falling"),
        }
    }
}

impl std::error::Error for DropError {}

/// What the falling piece is doing this tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropState {
    /// Nothing is falling
    Idle,
    /// Still in the air at pixel height `y`
    Falling { column: usize, y: f64 },
    /// Reached its slot and was committed to the board this tick
    Landed { column: usize, row: usize, piece: Piece },
}

/// A drop in flight
#[derive(Clone, Debug)]
struct ActiveDrop {
    animator: DropAnimator,
    column: usize,
    row: usize,
    piece: Piece,
}

/// Four-in-a-row session state
#[derive(Clone, Debug)]
pub struct BoardSession {
    board: Board,
    layout: BoardLayout,
    /// Player whose piece is shown hovering (the next to drop)
    current_player: Piece,
    drop_gravity: f64,
    active: Option<ActiveDrop>,
}

impl BoardSession {
    /// New empty board; yellow moves first
    pub fn new(layout: BoardLayout, drop_gravity: f64) -> Self {
        Self {
            board: Board::new(layout.columns, layout.rows),
            layout,
            current_player: Piece::Yellow,
            drop_gravity,
            active: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Player whose turn is next
    pub fn current_player(&self) -> Piece {
        self.current_player
    }

    pub fn is_falling(&self) -> bool {
        self.active.is_some()
    }

    /// Pixel position of the falling piece, if any
    pub fn falling_position(&self) -> Option<(f64, f64)> {
        self.active.as_ref().map(|drop| {
            (
                f64::from(self.layout.column_center_x(drop.column)),
                drop.animator.current_y(),
            )
        })
    }

    /// Whether the renderer should draw the next player's piece over the cursor
    ///
    /// Hidden while a falling piece still occupies the spawn row.
    pub fn show_hover_piece(&self) -> bool {
        match &self.active {
            None => true,
            Some(drop) => drop.animator.current_y() > self.layout.hover_clear_y(),
        }
    }

    /// Start dropping the current player's piece into `column`
    ///
    /// Out-of-range columns are clamped. On success the turn passes to the
    /// other player; on error nothing changes.
    pub fn begin_drop(&mut self, column: usize) -> Result<(), DropError> {
        if self.active.is_some() {
            return Err(DropError::DropInProgress);
        }

        let column = column.min(self.board.columns().saturating_sub(1));
        let row = self
            .board
            .lowest_free_row(column)
            .ok_or(DropError::ColumnFull { column })?;

        let piece = self.current_player;
        let animator = DropAnimator::new(
            f64::from(self.layout.spawn_y()),
            f64::from(self.layout.row_center_y(row)),
            self.drop_gravity,
        );
        log::debug!("{:?} drops into column {} targeting row {}", piece, column, row);

        self.active = Some(ActiveDrop {
            animator,
            column,
            row,
            piece,
        });
        self.current_player = piece.other();
        Ok(())
    }

    /// Advance the falling piece one tick
    ///
    /// The landing tick commits the piece to the board and returns
    /// [`DropState::Landed`]; the session is idle again afterwards.
    pub fn advance_drop(&mut self) -> DropState {
        let Some(drop) = self.active.as_mut() else {
            return DropState::Idle;
        };

        if drop.animator.step() == DropPhase::Falling {
            return DropState::Falling {
                column: drop.column,
                y: drop.animator.current_y(),
            };
        }

        // Taking the drop out guarantees a single commit
        let Some(drop) = self.active.take() else {
            return DropState::Idle;
        };
        if !self.board.place(drop.column, drop.row, drop.piece) {
            log::warn!("Slot ({}, {}) already occupied, drop discarded", drop.column, drop.row);
        }
        log::debug!(
            "{:?} landed at ({}, {}) after overshooting to y={}",
            drop.piece,
            drop.column,
            drop.row,
            drop.animator.current_y()
        );

        DropState::Landed {
            column: drop.column,
            row: drop.row,
            piece: drop.piece,
        }
    }
}

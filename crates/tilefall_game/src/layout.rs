//! Board pixel layout
//!
//! Maps slots to pixel centers and cursor positions to columns. The layout
//! reserves one extra slot row above the board for the piece waiting to
//! drop.

use serde::{Deserialize, Serialize};

/// Pixel geometry of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Margin around the whole board
    pub board_padding: i32,
    /// Gap between neighboring slots
    pub slot_padding: i32,
    /// Diameter of a slot
    pub slot_size: i32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 6,
            board_padding: 40,
            slot_padding: 20,
            slot_size: 100,
        }
    }
}

impl BoardLayout {
    /// Distance between the centers of neighboring slots
    ///
    /// Never less than one pixel, so cursor mapping cannot divide by zero.
    pub fn pitch(&self) -> i32 {
        self.slot_size.saturating_add(self.slot_padding).max(1)
    }

    /// Column under a cursor x position, clamped to the board
    pub fn column_at(&self, cursor_x: i32) -> usize {
        // Truncating division, then clamp, so the left margin maps to column 0
        let column = cursor_x.saturating_sub(self.board_padding) / self.pitch();
        column.clamp(0, self.columns.saturating_sub(1) as i32) as usize
    }

    /// Horizontal pixel center of a column
    pub fn column_center_x(&self, column: usize) -> i32 {
        self.board_padding + column as i32 * self.pitch() + self.slot_size / 2
    }

    /// Vertical pixel center of a row (row 0 is the bottom)
    pub fn row_center_y(&self, row: usize) -> i32 {
        self.board_padding + (self.rows as i32 - row as i32) * self.pitch() + self.slot_size / 2
    }

    /// Height at which a new piece appears, in the spare row above the board
    pub fn spawn_y(&self) -> i32 {
        self.board_padding + self.slot_size / 2
    }

    /// Below this height the falling piece has cleared the spawn row
    pub fn hover_clear_y(&self) -> f64 {
        f64::from(self.board_padding) + f64::from(self.slot_size) * 1.5
    }

    /// Window size in pixels needed to show the board and the spawn row
    pub fn screen_size(&self) -> (i32, i32) {
        let width = self.board_padding * 2 + self.columns as i32 * self.pitch() - self.slot_padding;
        let height = self.board_padding * 2 + (self.rows as i32 + 1) * self.pitch() - self.slot_padding;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_size() {
        let layout = BoardLayout::default();
        assert_eq!(layout.screen_size(), (900, 900));
    }

    #[test]
    fn test_column_at_clamps() {
        let layout = BoardLayout::default();
        assert_eq!(layout.column_at(-500), 0);
        assert_eq!(layout.column_at(0), 0);
        assert_eq!(layout.column_at(40), 0);
        assert_eq!(layout.column_at(159), 0);
        assert_eq!(layout.column_at(160), 1);
        assert_eq!(layout.column_at(400), 3);
        assert_eq!(layout.column_at(5000), 6);
    }

    #[test]
    fn test_column_at_extreme_cursor() {
        let layout = BoardLayout::default();
        assert_eq!(layout.column_at(i32::MIN), 0);
        assert_eq!(layout.column_at(i32::MAX), 6);
    }

    #[test]
    fn test_column_at_zero_pitch() {
        let layout = BoardLayout {
            slot_size: 0,
            slot_padding: 0,
            ..BoardLayout::default()
        };
        assert_eq!(layout.pitch(), 1);
        assert_eq!(layout.column_at(43), 3);
        assert_eq!(layout.column_at(-10), 0);
        assert_eq!(layout.column_at(1000), 6);
    }

    #[test]
    fn test_slot_centers() {
        let layout = BoardLayout::default();
        assert_eq!(layout.column_center_x(0), 90);
        assert_eq!(layout.column_center_x(3), 450);
        assert_eq!(layout.row_center_y(0), 810);
        assert_eq!(layout.row_center_y(5), 210);
        assert_eq!(layout.spawn_y(), 90);
    }

    #[test]
    fn test_hover_clear_line() {
        assert_eq!(BoardLayout::default().hover_clear_y(), 190.0);
    }
}

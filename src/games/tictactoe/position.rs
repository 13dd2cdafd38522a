//! Cell coordinates on the tic-tac-toe board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position, 0 at the top.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position, 0 at the left.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from a (row, column) pair.
    ///
    /// Returns `None` if either coordinate is outside `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Parse from label or number (1-9, as printed by `Board::display`).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_all() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_out_of_bounds() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("nowhere"), None);
    }
}

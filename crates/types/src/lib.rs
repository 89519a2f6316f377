//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the JSON adapter, or any presentation layer.
//!
//! # Default Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIDE` | 8 | Grid side length (8x8 = 64 cells) |
//! | `DEFAULT_NEXT_BLOCK_LEN` | 3 | Pieces dropped after a non-scoring move |
//! | `DEFAULT_PALETTE_SIZE` | 6 | Non-empty colors in play |
//! | `DEFAULT_LINE_GOAL` | 5 | Minimum run (pivot included) that clears |
//! | `MAX_NEXT_BLOCK_LEN` | 8 | Upper bound for the next-block queue |
//! | `MAX_SIDE` | 64 | Largest accepted grid side |
//!
//! Cells are addressed by a zero-based linear index: `index = row * side + column`.
//!
//! # Examples
//!
//! ```
//! use color_lines_types::{Color, Phase, DEFAULT_LINE_GOAL, DEFAULT_SIDE};
//!
//! // Colors have a stable numeric code and a one-char text form
//! assert_eq!(Color::from_code(1), Some(Color::Yellow));
//! assert_eq!(Color::Yellow.as_char(), '1');
//! assert!(Color::Empty.is_empty());
//!
//! // Phases
//! assert!(Phase::PieceSelected.is_started());
//! assert!(!Phase::GameOver.is_started());
//!
//! assert_eq!(DEFAULT_SIDE, 8);
//! assert_eq!(DEFAULT_LINE_GOAL, 5);
//! ```

/// Default grid side length (N)
pub const DEFAULT_SIDE: usize = 8;

/// Default number of pieces queued for the next drop (M)
pub const DEFAULT_NEXT_BLOCK_LEN: usize = 3;

/// Default number of non-empty colors (K)
pub const DEFAULT_PALETTE_SIZE: usize = 6;

/// Default minimum line length, pivot included (G)
pub const DEFAULT_LINE_GOAL: usize = 5;

/// Capacity of the next-block queue; configs may not exceed it.
pub const MAX_NEXT_BLOCK_LEN: usize = 8;

/// Largest grid side a config may ask for
pub const MAX_SIDE: usize = 64;

/// Content of one grid cell.
///
/// `Empty` marks an unoccupied cell; the six other variants are the piece
/// palette, numbered 1..=6 in the order they are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Empty,
    Yellow,
    Peach,
    Pink,
    Violet,
    Blue,
    Green,
}

impl Color {
    /// The full non-empty palette, in code order (1..=6).
    pub const PALETTE: [Color; 6] = [
        Color::Yellow,
        Color::Peach,
        Color::Pink,
        Color::Violet,
        Color::Blue,
        Color::Green,
    ];

    /// Numeric code: 0 for empty, 1..=6 for the palette
    pub fn code(&self) -> u8 {
        match self {
            Color::Empty => 0,
            Color::Yellow => 1,
            Color::Peach => 2,
            Color::Pink => 3,
            Color::Violet => 4,
            Color::Blue => 5,
            Color::Green => 6,
        }
    }

    /// Inverse of [`Color::code`]
    ///
    /// # Examples
    ///
    /// ```
    /// use color_lines_types::Color;
    ///
    /// assert_eq!(Color::from_code(0), Some(Color::Empty));
    /// assert_eq!(Color::from_code(6), Some(Color::Green));
    /// assert_eq!(Color::from_code(7), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Color::Empty),
            1..=6 => Some(Self::PALETTE[code as usize - 1]),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Color::Empty)
    }

    /// One-char text form: `.` for empty, `1`..`6` for the palette
    pub fn as_char(&self) -> char {
        match self {
            Color::Empty => '.',
            other => char::from(b'0' + other.code()),
        }
    }

    /// Parse the one-char text form (`_` and `0` are accepted for empty too)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '0' => Some(Color::Empty),
            '1'..='6' => Self::from_code(c as u8 - b'0'),
            _ => None,
        }
    }

    /// Parse color from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use color_lines_types::Color;
    ///
    /// assert_eq!(Color::from_str("violet"), Some(Color::Violet));
    /// assert_eq!(Color::from_str("EMPTY"), Some(Color::Empty));
    /// assert_eq!(Color::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" => Some(Color::Empty),
            "yellow" => Some(Color::Yellow),
            "peach" => Some(Color::Peach),
            "pink" => Some(Color::Pink),
            "violet" => Some(Color::Violet),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Empty => "empty",
            Color::Yellow => "yellow",
            Color::Peach => "peach",
            Color::Pink => "pink",
            Color::Violet => "violet",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

/// Life-cycle phase of a game.
///
/// `NotStarted` → `AwaitingSelection` ⇄ `PieceSelected` → `GameOver`;
/// `start()` re-enters `AwaitingSelection` from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    AwaitingSelection,
    PieceSelected,
    GameOver,
}

impl Phase {
    /// True while a game is in progress
    pub fn is_started(&self) -> bool {
        matches!(self, Phase::AwaitingSelection | Phase::PieceSelected)
    }

    /// Convert to snake_case string (adapter protocol)
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::AwaitingSelection => "awaiting_selection",
            Phase::PieceSelected => "piece_selected",
            Phase::GameOver => "game_over",
        }
    }
}

/// Result of an inbound engine call.
///
/// Every legal-but-unproductive player action is one of these values; none of
/// them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A new game began.
    Started,
    /// No game is running; the tap was dropped.
    NotStarted,
    /// Nothing to do (empty cell with nothing selected, or wrong phase).
    Ignored,
    /// The tapped piece is now selected.
    Selected { index: usize },
    /// The selected cell was tapped again.
    Cancelled,
    /// An occupied cell was tapped while another piece was selected.
    SelectionChanged,
    /// No empty path leads from the selection to the target.
    Rejected,
    /// The move completed at least one line; nothing was dropped.
    Scored { lines: u32, points: u32 },
    /// The move cleared nothing; the next block was dropped.
    ///
    /// `cascade_lines`/`cascade_points` count lines completed by the drops.
    Moved {
        dropped: usize,
        cascade_lines: u32,
        cascade_points: u32,
    },
    /// The drops filled the grid.
    GameOver { score: u32 },
}

impl TapOutcome {
    /// Points this outcome added to the score
    pub fn points(&self) -> u32 {
        match self {
            TapOutcome::Scored { points, .. } => *points,
            TapOutcome::Moved { cascade_points, .. } => *cascade_points,
            _ => 0,
        }
    }

    /// True if a piece actually moved on the grid
    pub fn is_move(&self) -> bool {
        matches!(
            self,
            TapOutcome::Scored { .. } | TapOutcome::Moved { .. } | TapOutcome::GameOver { .. }
        )
    }

    /// Convert to snake_case kind string (adapter protocol)
    pub fn as_str(&self) -> &'static str {
        match self {
            TapOutcome::Started => "started",
            TapOutcome::NotStarted => "not_started",
            TapOutcome::Ignored => "ignored",
            TapOutcome::Selected { .. } => "selected",
            TapOutcome::Cancelled => "cancelled",
            TapOutcome::SelectionChanged => "selection_changed",
            TapOutcome::Rejected => "rejected",
            TapOutcome::Scored { .. } => "scored",
            TapOutcome::Moved { .. } => "moved",
            TapOutcome::GameOver { .. } => "game_over",
        }
    }
}

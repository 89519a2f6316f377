use crate::spawner::NextBlock;
use crate::types::{Color, Phase, TapOutcome};

/// Owned, read-only copy of everything a presentation layer needs after a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub side: usize,
    /// Row-major cells
    pub cells: Vec<Color>,
    pub selection: Option<usize>,
    pub next_block: NextBlock,
    pub score: u32,
    pub phase: Phase,
    pub episode_id: u32,
    pub last_outcome: Option<TapOutcome>,
    pub status: String,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.side = 0;
        self.cells.clear();
        self.selection = None;
        self.next_block.clear();
        self.score = 0;
        self.phase = Phase::NotStarted;
        self.episode_id = 0;
        self.last_outcome = None;
        self.status.clear();
    }

    pub fn started(&self) -> bool {
        self.phase.is_started()
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Cells as numeric color codes (0 = empty)
    pub fn cell_codes(&self) -> Vec<u8> {
        self.cells.iter().map(Color::code).collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            side: 0,
            cells: Vec::new(),
            selection: None,
            next_block: NextBlock::new(),
            score: 0,
            phase: Phase::NotStarted,
            episode_id: 0,
            last_outcome: None,
            status: String::new(),
        }
    }
}

//! Engine configuration

use anyhow::{ensure, Result};

use crate::{DEFAULT_DEPTH, HEIGHT, MAX_DEPTH, WIDTH, WIN_LENGTH};

/// How the search picks its fallback column before any branch is explored
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TieBreak {
    /// A uniformly random open column
    Random,
    /// The lowest-indexed open column
    FirstOpen,
}

/// Board dimensions and search settings shared by every part of the engine
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    pub depth: usize,
    pub tie_break: TieBreak,
}

impl Config {
    pub fn new() -> Self {
        Self {
            rows: HEIGHT,
            columns: WIDTH,
            win_length: WIN_LENGTH,
            depth: DEFAULT_DEPTH,
            tie_break: TieBreak::Random,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Checks that the board can hold a winning line and the search looks at least one ply ahead
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows > 0 && self.columns > 0,
            "board must have at least one row and column, got {}x{}",
            self.rows,
            self.columns
        );
        ensure!(
            self.win_length >= 2,
            "win length must be at least 2, got {}",
            self.win_length
        );
        ensure!(
            self.win_length <= self.rows.min(self.columns),
            "win length {} does not fit on a {}x{} board",
            self.win_length,
            self.rows,
            self.columns
        );
        ensure!(
            self.depth > 0 && self.depth <= MAX_DEPTH,
            "search depth must be between 1 and {}, got {}",
            MAX_DEPTH,
            self.depth
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

//! A depth-limited computer opponent for the board game 'Connect 4'
//!
//! The agent searches the game tree a fixed number of plies ahead with
//! alpha-beta pruned minimax and scores the positions it cannot see past
//! with a windowed heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::*, search::Searcher, Config};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let config = Config::default().with_depth(1);
//! let board = Board::new(&config);
//! let mut searcher = Searcher::new(config);
//! let (best_move, _score) = searcher.best_move(&board);
//!
//! assert_eq!(best_move, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod config;
pub use config::{Config, TieBreak};

pub mod board;

pub mod terminal;

pub mod evaluator;

pub mod search;


/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The default number of tiles in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// The default number of plies searched by the computer
pub const DEFAULT_DEPTH: usize = 3;

/// The deepest search a configuration may ask for
pub const MAX_DEPTH: usize = 8;

// a winning line has to fit on the default board in every orientation
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
const_assert!(DEFAULT_DEPTH > 0 && DEFAULT_DEPTH <= MAX_DEPTH);

//! A depth-limited minimax agent for Connect 4

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rayon::prelude::*;

use std::time::Instant;

use crate::{
    board::{Board, Piece},
    evaluator,
    terminal::{has_four, is_draw, is_terminal},
    Config, TieBreak,
};

/// Desirability of a position from the computer's point of view
pub type Score = i64;

/// Score of a position the computer has won
pub const COMPUTER_WIN: Score = 100_000_000_000_000;
/// Score of a position the human has won
pub const HUMAN_WIN: Score = -10_000_000_000_000;
/// Score of a full board with no winner
pub const DRAW: Score = 0;

/// Scores a position at the bottom of the search
pub fn leaf_score(board: &Board) -> Score {
    if has_four(board, Piece::Computer) {
        COMPUTER_WIN
    } else if has_four(board, Piece::Human) {
        HUMAN_WIN
    } else if is_draw(board) {
        DRAW
    } else {
        evaluator::score(board, Piece::Computer)
    }
}

/// An agent choosing the computer's moves
///
/// # Notes
/// The computer is always the maximising side. Every explored move is played on
/// a fresh copy of the board, so sibling branches never share state.
pub struct Searcher {
    config: Config,
    rng: StdRng,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` with an entropy-seeded tie-break
    pub fn new(config: Config) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
            node_count: 0,
        }
    }

    /// Creates a new `Searcher` whose random tie-break is reproducible
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // the column reported if no branch beats the initial bound
    fn fallback_column(&mut self, open_columns: &[usize]) -> Option<usize> {
        match self.config.tie_break {
            TieBreak::Random => open_columns.choose(&mut self.rng).copied(),
            TieBreak::FirstOpen => open_columns.first().copied(),
        }
    }

    /// Performs alpha-beta pruned minimax search
    ///
    /// Returns the best column for the side to move (`None` at a leaf) and the
    /// score of the position
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<usize>, Score) {
        self.node_count += 1;

        let open_columns = board.open_columns();
        if depth == 0 || is_terminal(board) {
            return (None, leaf_score(board));
        }
        assert!(
            !open_columns.is_empty(),
            "non-terminal board has no open columns"
        );

        let piece = if maximizing {
            Piece::Computer
        } else {
            Piece::Human
        };
        let mut best_column = self.fallback_column(&open_columns);
        let mut best_value = if maximizing {
            Score::MIN
        } else {
            Score::MAX
        };

        for &column in open_columns.iter() {
            let mut next = board.clone();
            next.drop_piece(next.next_open_row(column), column, piece);
            let (_, value) = self.minimax(&next, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_column = Some(column);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_column = Some(column);
                }
                beta = beta.min(best_value);
            }
            // neither side will let the game reach the remaining columns
            if alpha >= beta {
                break;
            }
        }

        (best_column, best_value)
    }

    /// Calculates the computer's best column and its score at the configured depth
    ///
    /// # Panics
    /// If the game on `board` is already over
    pub fn best_move(&mut self, board: &Board) -> (usize, Score) {
        assert!(!is_terminal(board), "cannot search a finished game");
        match self.minimax(board, self.config.depth, Score::MIN, Score::MAX, true) {
            (Some(column), score) => (column, score),
            (None, _) => unreachable!("a search of depth {} returned no move", self.config.depth),
        }
    }

    /// Calculates the best column, logging the search statistics to stdout
    pub fn best_move_verbose(&mut self, board: &Board) -> (usize, Score) {
        let start_nodes = self.node_count;
        let start_time = Instant::now();
        let (column, score) = self.best_move(board);
        let elapsed = start_time.elapsed();

        println!(
            "Search depth: {}, positions: {}, time: {:.3}ms, score: {}",
            self.config.depth,
            self.node_count - start_nodes,
            elapsed.as_secs_f64() * 1000.0,
            score
        );
        (column, score)
    }

    /// Calculates the best column by searching each top-level move on its own thread
    ///
    /// Every root child gets the full search window, so the result matches
    /// [`Searcher::best_move`] at the cost of less pruning near the root
    pub fn best_move_parallel(&mut self, board: &Board) -> (usize, Score) {
        assert!(!is_terminal(board), "cannot search a finished game");
        let config = self.config;

        // each task gets its own tie-break stream drawn from this searcher's
        let tasks: Vec<(usize, u64)> = board
            .open_columns()
            .into_iter()
            .map(|column| (column, self.rng.gen()))
            .collect();

        let results: Vec<(usize, Score, usize)> = tasks
            .into_par_iter()
            .map(|(column, seed)| {
                let mut next = board.clone();
                next.drop_piece(next.next_open_row(column), column, Piece::Computer);

                let mut searcher = Searcher::with_seed(config, seed);
                let (_, value) =
                    searcher.minimax(&next, config.depth - 1, Score::MIN, Score::MAX, false);
                (column, value, searcher.node_count)
            })
            .collect();

        self.node_count += 1;
        let mut best: Option<(usize, Score)> = None;
        for (column, value, nodes) in results {
            self.node_count += nodes;
            // strictly better only, so ties go to the lowest column as in the sequential search
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((column, value));
            }
        }
        match best {
            Some(best) => best,
            None => unreachable!("non-terminal board has no open columns"),
        }
    }
}

//! Heuristic scoring of positions the search cannot see past

use crate::board::{Board, Piece};

/// Bonus for a window entirely filled by the scoring side
pub const FULL_WINDOW: i64 = 100;
/// Bonus for a window one tile short of full, with the gap empty
pub const NEAR_WINDOW: i64 = 5;
/// Bonus for a window two tiles short of full, with both gaps empty
pub const OPEN_WINDOW: i64 = 2;
/// Penalty for an opponent window one tile short of full
pub const THREAT_PENALTY: i64 = -4;
/// Bonus per tile in the centre column
pub const CENTRE_WEIGHT: i64 = 3;

/// Scores a single window of cells for `piece`
pub fn evaluate_window(window: &[Piece], piece: Piece) -> i64 {
    let len = window.len();
    let opponent = piece.opponent();
    let own = window.iter().filter(|&&cell| cell == piece).count();
    let theirs = window.iter().filter(|&&cell| cell == opponent).count();
    let empty = window.iter().filter(|cell| cell.is_empty()).count();

    let mut score = 0;
    if own == len {
        score += FULL_WINDOW;
    } else if own + 1 == len && empty == 1 {
        score += NEAR_WINDOW;
    } else if own > 0 && own + 2 == len && empty == 2 {
        score += OPEN_WINDOW;
    }

    if theirs + 1 == len && empty == 1 {
        score += THREAT_PENALTY;
    }
    score
}

/// Scores the whole board from `piece`'s point of view
///
/// Windows overlap, so a tile counts once for every line it could be part of.
pub fn score(board: &Board, piece: Piece) -> i64 {
    let centre = board.columns() / 2;
    let centre_count = (0..board.rows())
        .filter(|&row| board.get(row, centre) == piece)
        .count() as i64;
    let mut score = centre_count * CENTRE_WEIGHT;

    let mut cells = Vec::with_capacity(board.win_length());
    for window in board.windows(board.win_length()) {
        cells.clear();
        cells.extend(board.window_cells(window));
        score += evaluate_window(&cells, piece);
    }
    score
}

//! Detection of finished games

use crate::board::{Board, Piece};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    HumanWin,
    ComputerWin,
    Draw,
}

/// Returns true if `piece` has a full line of `win_length` tiles anywhere on the board
pub fn has_four(board: &Board, piece: Piece) -> bool {
    if piece.is_empty() {
        return false;
    }
    board
        .windows(board.win_length())
        .any(|window| board.window_cells(window).all(|cell| cell == piece))
}

/// A draw is a board with every column filled to the top
pub fn is_draw(board: &Board) -> bool {
    (0..board.columns()).all(|column| !board.is_column_open(column))
}

pub fn is_terminal(board: &Board) -> bool {
    has_four(board, Piece::Computer) || has_four(board, Piece::Human) || is_draw(board)
}

/// Classifies the board for the game loop, a completed line takes precedence over a full board
pub fn game_state(board: &Board) -> GameState {
    if has_four(board, Piece::Computer) {
        GameState::ComputerWin
    } else if has_four(board, Piece::Human) {
        GameState::HumanWin
    } else if is_draw(board) {
        GameState::Draw
    } else {
        GameState::Playing
    }
}

use anyhow::{anyhow, Result};

use crate::{terminal, Config};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Piece {
    Empty,
    Human,
    Computer,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// The other side; `Empty` has no opponent and maps to itself
    pub fn opponent(&self) -> Self {
        match self {
            Piece::Human => Piece::Computer,
            Piece::Computer => Piece::Human,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// The four orientations a line of tiles can run in
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// ↘
    DiagonalDownRight,
    /// ↙
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    // (row step, column step), rows count downwards from the top
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// A run of `len` cells starting at (`row`, `column`) and extending in `direction`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Window {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub len: usize,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: Vec<Piece>, // cells are stored left-to-right, top-to-bottom
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl Board {
    /// Creates an empty board with the dimensions given in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            cells: vec![Piece::Empty; config.rows * config.columns],
            rows: config.rows,
            columns: config.columns,
            win_length: config.win_length,
        }
    }

    /// Builds a board from a string of 0-indexed column digits, the sides
    /// alternating from `first`
    pub fn from_moves<S: AsRef<str>>(config: &Config, moves: S, first: Piece) -> Result<Self> {
        if first.is_empty() {
            return Err(anyhow!("the first move must belong to a player"));
        }
        let mut board = Self::new(config);
        let mut piece = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    // abort if the position is won at any point
                    if terminal::has_four(&board, Piece::Human)
                        || terminal::has_four(&board, Piece::Computer)
                    {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.play_checked(column as usize, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) is outside the {}x{} board",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[self.index(row, column)]
    }

    /// A column is open while its top cell is empty
    pub fn is_column_open(&self, column: usize) -> bool {
        self.get(0, column).is_empty()
    }

    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.is_column_open(column))
            .collect()
    }

    /// The lowest empty row in `column`
    ///
    /// # Panics
    /// If the column is full; check [`Board::is_column_open`] first
    pub fn next_open_row(&self, column: usize) -> usize {
        match (0..self.rows)
            .rev()
            .find(|&row| self.get(row, column).is_empty())
        {
            Some(row) => row,
            None => panic!("column {} is full", column),
        }
    }

    /// Places `piece` at (`row`, `column`) without any legality checks
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        let idx = self.index(row, column);
        self.cells[idx] = piece;
    }

    /// Drops `piece` into `column` after validating the move, returning the row it landed in
    pub fn play_checked(&mut self, column: usize, piece: Piece) -> Result<usize> {
        if column >= self.columns {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                self.columns - 1
            ));
        }
        if !self.is_column_open(column) {
            return Err(anyhow!("Invalid move, column {} full", column));
        }
        let row = self.next_open_row(column);
        self.drop_piece(row, column, piece);
        Ok(row)
    }

    /// Every `len`-cell window on the board, in all four orientations
    pub fn windows(&self, len: usize) -> impl Iterator<Item = Window> {
        assert!(len > 0, "windows must contain at least one cell");
        let (rows, columns) = (self.rows, self.columns);
        // number of starting rows/columns that leave room for a full window
        let row_starts = (rows + 1).saturating_sub(len);
        let column_starts = (columns + 1).saturating_sub(len);

        Direction::ALL.iter().copied().flat_map(move |direction| {
            let (row_range, column_range) = match direction {
                Direction::Horizontal => (0..rows, 0..column_starts),
                Direction::Vertical => (0..row_starts, 0..columns),
                Direction::DiagonalDownRight => (0..row_starts, 0..column_starts),
                Direction::DiagonalDownLeft => (0..row_starts, (len - 1)..columns),
            };
            row_range.flat_map(move |row| {
                column_range.clone().map(move |column| Window {
                    row,
                    column,
                    direction,
                    len,
                })
            })
        })
    }

    /// The pieces covered by `window`, in order along its direction
    pub fn window_cells(&self, window: Window) -> impl Iterator<Item = Piece> + '_ {
        let (row_step, column_step) = window.direction.step();
        (0..window.len as isize).map(move |i| {
            let row = window.row as isize + row_step * i;
            let column = window.column as isize + column_step * i;
            self.get(row as usize, column as usize)
        })
    }
}

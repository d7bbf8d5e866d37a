//! Tic-Tac-Toe board + heuristic opponent.

use serde::{Deserialize, Serialize};

pub const CELLS: usize = 9;

/// Every winning line on a 3×3 board: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Fallback order for the opponent: center, corners, edges.
pub const PREFERENCE: [usize; CELLS] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    InProgress,
    Won(Mark),
    Draw,
}

/// Result of an attempted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Terminal board, occupied cell or out of range. Nothing changed.
    Ignored,
    /// Mark placed, turn passes to `next`.
    Continue { next: Mark },
    Won(Mark),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<Mark>; CELLS],
    current: Mark,
    state: BoardState,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; CELLS],
            current: Mark::X,
            state: BoardState::InProgress,
        }
    }

    /// Rebuild a board from raw cells; the state is derived from the marks.
    pub fn from_cells(cells: [Option<Mark>; CELLS], current: Mark) -> Self {
        let mut board = Self {
            cells,
            current,
            state: BoardState::InProgress,
        };
        board.state = if board.check_win(Mark::X) {
            BoardState::Won(Mark::X)
        } else if board.check_win(Mark::O) {
            BoardState::Won(Mark::O)
        } else if board.is_full() {
            BoardState::Draw
        } else {
            BoardState::InProgress
        };
        board
    }

    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    pub fn current(&self) -> Mark {
        self.current
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state != BoardState::InProgress
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Place the current player's mark at `cell`.
    pub fn place(&mut self, cell: usize) -> Placement {
        if self.is_terminal() || cell >= CELLS || self.cells[cell].is_some() {
            return Placement::Ignored;
        }

        let mover = self.current;
        self.cells[cell] = Some(mover);

        if self.check_win(mover) {
            self.state = BoardState::Won(mover);
            Placement::Won(mover)
        } else if self.is_full() {
            self.state = BoardState::Draw;
            Placement::Draw
        } else {
            self.current = mover.other();
            Placement::Continue { next: self.current }
        }
    }

    /// True if `mark` owns a complete line.
    pub fn check_win(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.state {
            BoardState::Won(m) => Some(m),
            _ => None,
        }
    }

    /// The empty cell that would complete a line of two `mark`s, if any.
    pub fn winning_cell(&self, mark: Mark) -> Option<usize> {
        LINES.iter().find_map(|line| {
            let owned = line.iter().filter(|&&i| self.cells[i] == Some(mark)).count();
            let empty: Vec<usize> = line
                .iter()
                .copied()
                .filter(|&i| self.cells[i].is_none())
                .collect();
            (owned == 2 && empty.len() == 1).then(|| empty[0])
        })
    }

    /// Heuristic opponent: win, else block, else first free preferred cell.
    pub fn suggest_move(&self, me: Mark) -> Option<usize> {
        if self.is_terminal() {
            return None;
        }
        self.winning_cell(me)
            .or_else(|| self.winning_cell(me.other()))
            .or_else(|| PREFERENCE.iter().copied().find(|&i| self.cells[i].is_none()))
    }
}

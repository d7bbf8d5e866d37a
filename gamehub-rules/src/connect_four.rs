//! Connect Four drop mechanics. No win detection: completion is undefined
//! for this game, so the board only fills up.

use serde::{Deserialize, Serialize};

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
pub const DROP_POINTS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    pub fn other(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFour {
    /// Row-major, row 0 at the top.
    cells: Vec<Option<Disc>>,
    current: Disc,
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            cells: vec![None; COLUMNS * ROWS],
            current: Disc::Red,
        }
    }

    pub fn cells(&self) -> &[Option<Disc>] {
        &self.cells
    }

    pub fn current(&self) -> Disc {
        self.current
    }

    /// Drop the current disc into `column`, returning the landing row.
    /// A full or out-of-range column is ignored.
    pub fn drop_disc(&mut self, column: usize) -> Option<usize> {
        if column >= COLUMNS {
            return None;
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row * COLUMNS + column].is_none())?;
        self.cells[row * COLUMNS + column] = Some(self.current);
        self.current = self.current.other();
        Some(row)
    }

    /// Column a clicked cell index belongs to.
    pub fn column_of(cell: usize) -> usize {
        cell % COLUMNS
    }
}

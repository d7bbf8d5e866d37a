//! 2048-style tile grid.
//!
//! A move compresses every line toward the pressed edge. Per line:
//! - drop empty cells
//! - walk from the target edge, merging the first equal adjacent pair
//! - a merged tile is final for this move (`[2,2,2,2]` → `[4,4,0,0]`)
//! - re-pad with empties
//!
//! A move that changes nothing spawns nothing and scores nothing.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Direction;

pub const SIZE: usize = 4;
pub const GOAL_TILE: u32 = 2048;
/// Largest tile `from_rows` accepts.
pub const MAX_TILE: u32 = 1 << 17;

type Line = [u32; SIZE];

/// What a single move did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    pub changed: bool,
    /// Sum of all tiles produced by merges in this move.
    pub gained: u64,
    /// True exactly once per game: the move that first produced the goal tile.
    pub reached_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    cells: [[u32; SIZE]; SIZE],
    score: u64,
    won: bool,
}

impl TileGrid {
    /// A fresh game: empty grid seeded with two random tiles.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut grid = Self::empty();
        grid.spawn_tile(rng);
        grid.spawn_tile(rng);
        grid
    }

    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
            score: 0,
            won: false,
        }
    }

    /// Build a grid from explicit rows. Non power-of-two values and tiles
    /// above [`MAX_TILE`] are cleared.
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Self {
        let mut cells = rows;
        for row in cells.iter_mut() {
            for v in row.iter_mut() {
                if *v == 1 || !v.is_power_of_two() || *v > MAX_TILE {
                    *v = 0;
                }
            }
        }
        let won = cells.iter().flatten().any(|&v| v >= GOAL_TILE);
        Self {
            cells,
            score: 0,
            won,
        }
    }

    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Slide and merge without spawning. Merged values go into the score.
    pub fn slide(&mut self, dir: Direction) -> MoveReport {
        let mut report = MoveReport::default();

        for k in 0..SIZE {
            let coords = line_coords(dir, k);
            let mut line: Line = [0; SIZE];
            for (i, &(r, c)) in coords.iter().enumerate() {
                line[i] = self.cells[r][c];
            }

            let (merged, gained) = slide_line(line);
            if merged != line {
                report.changed = true;
            }
            report.gained += gained;

            for (i, &(r, c)) in coords.iter().enumerate() {
                self.cells[r][c] = merged[i];
            }
        }

        self.score += report.gained;
        report
    }

    /// Full player move: slide, then spawn one tile if anything changed.
    pub fn apply_move<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> MoveReport {
        let mut report = self.slide(dir);
        if report.changed {
            self.spawn_tile(rng);
            report.reached_goal = self.check_goal();
        }
        report
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly random empty cell.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (r, c) = empty[rng.gen_range(0..empty.len())];
        self.cells[r][c] = if rng.gen_range(0..10) < 9 { 2 } else { 4 };
        Some((r, c))
    }

    /// Latches `won` the first time the goal tile is on the grid.
    fn check_goal(&mut self) -> bool {
        if self.won {
            return false;
        }
        if self.highest_tile() >= GOAL_TILE {
            self.won = true;
            return true;
        }
        false
    }

    /// No direction changes the grid (which implies the grid is full).
    pub fn is_stuck(&self) -> bool {
        Direction::ALL.iter().all(|&dir| {
            let mut probe = self.clone();
            !probe.slide(dir).changed
        })
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "-----------------------")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>5}", "")
                    } else {
                        format!("{:>5}", v)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

/// Coordinates of line `k`, ordered from the edge tiles move toward.
fn line_coords(dir: Direction, k: usize) -> [(usize, usize); SIZE] {
    let mut out = [(0, 0); SIZE];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = match dir {
            Direction::Left => (k, i),
            Direction::Right => (k, SIZE - 1 - i),
            Direction::Up => (i, k),
            Direction::Down => (SIZE - 1 - i, k),
        };
    }
    out
}

/// Compress one line toward index 0. Returns the new line and points gained.
fn slide_line(line: Line) -> (Line, u64) {
    let mut out: Line = [0; SIZE];
    let mut gained = 0u64;
    let mut write = 0;
    let mut pending: Option<u32> = None;

    for v in line.into_iter().filter(|&v| v != 0) {
        match pending {
            Some(p) if p == v => match p.checked_mul(2) {
                Some(merged) => {
                    out[write] = merged;
                    write += 1;
                    gained += u64::from(merged);
                    pending = None;
                }
                // the largest u32 power of two stays put
                None => {
                    out[write] = p;
                    write += 1;
                    pending = Some(v);
                }
            },
            Some(p) => {
                out[write] = p;
                write += 1;
                pending = Some(v);
            }
            None => pending = Some(v),
        }
    }
    if let Some(p) = pending {
        out[write] = p;
    }

    (out, gained)
}

//! Snake on a 20×20 field.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Direction;

pub const FIELD: i32 = 20;
pub const FOOD_POINTS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn shifted(self, dir: Direction) -> Self {
        match dir {
            Direction::Up => Point::new(self.x, self.y - 1),
            Direction::Down => Point::new(self.x, self.y + 1),
            Direction::Left => Point::new(self.x - 1, self.y),
            Direction::Right => Point::new(self.x + 1, self.y),
        }
    }

    fn in_field(self) -> bool {
        (0..FIELD).contains(&self.x) && (0..FIELD).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No heading yet, or already dead.
    Idle,
    Moved,
    Ate,
    Crashed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Point>,
    heading: Option<Direction>,
    food: Point,
    alive: bool,
}

impl Snake {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut snake = Self::from_parts(vec![Point::new(10, 10)], Point::new(5, 5));
        snake.respawn_food(rng);
        snake
    }

    /// Head first.
    pub fn from_parts(body: Vec<Point>, food: Point) -> Self {
        Self {
            body: body.into(),
            heading: None,
            food,
            alive: true,
        }
    }

    pub fn body(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Change heading. Turning along the current axis (incl. reversing) is ignored.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if !self.alive {
            return false;
        }
        match self.heading {
            Some(h) if h.is_vertical() == dir.is_vertical() => false,
            _ => {
                self.heading = Some(dir);
                true
            }
        }
    }

    /// Advance one cell along the heading.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Step {
        let (Some(dir), Some(head)) = (self.heading, self.head()) else {
            return Step::Idle;
        };
        if !self.alive {
            return Step::Idle;
        }

        let next = head.shifted(dir);
        if !next.in_field() || self.body.contains(&next) {
            self.alive = false;
            return Step::Crashed;
        }

        self.body.push_front(next);
        if next == self.food {
            self.respawn_food(rng);
            Step::Ate
        } else {
            self.body.pop_back();
            Step::Moved
        }
    }

    /// Put food on a random cell not covered by the body.
    pub fn respawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let free: Vec<Point> = (0..FIELD)
            .flat_map(|y| (0..FIELD).map(move |x| Point::new(x, y)))
            .filter(|p| !self.body.contains(p))
            .collect();
        if !free.is_empty() {
            self.food = free[rng.gen_range(0..free.len())];
        }
    }
}

use std::fmt;

/// A grid coordinate, 1-indexed: `row` and `col` live in `[1, n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    pub fn in_grid(&self, n: usize) -> bool {
        self.row >= 1 && self.row <= n && self.col >= 1 && self.col <= n
    }

    /// Row-major linear index in `[0, n²)`. Caller checks `in_grid` first.
    pub fn index(&self, n: usize) -> usize {
        n * (self.row - 1) + (self.col - 1)
    }

    // None when the step would leave the grid
    pub fn step_toward(&self, d: Direction, n: usize) -> Option<Site> {
        let next = match d {
            Direction::North if self.row > 1 => Site::new(self.row - 1, self.col),
            Direction::South if self.row < n => Site::new(self.row + 1, self.col),
            Direction::West if self.col > 1 => Site::new(self.row, self.col - 1),
            Direction::East if self.col < n => Site::new(self.row, self.col + 1),
            _ => return None,
        };
        Some(next)
    }

    /// The in-grid orthogonal neighbours, at most four.
    pub fn neighbors(&self, n: usize) -> Vec<Site> {
        Direction::adjacent_directions()
            .iter()
            .filter_map(|&d| self.step_toward(d, n))
            .collect()
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}

use crate::error::{LifeError, Result};
use rand::Rng;
use regex::Regex;

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    fn from_char(value: char) -> Option<Cell> {
        match value {
            '.' => Some(Cell::Dead),
            '#' => Some(Cell::Alive),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// The largest number of cells a universe may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Returns the number of cells in a `rows` x `cols` universe, or `None` if it is empty,
/// overflows or exceeds [`MAX_CELLS`].
pub fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
        .filter(|&cells| cells > 0 && cells <= MAX_CELLS)
}

/// One generation of the Game of Life.
///
/// The grid wraps around at both edges, so every cell has exactly 8 neighbours.
/// A `Universe` is never advanced in place: [`Universe::next_generation`] returns a new one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Universe {
    rows: usize,
    cols: usize,
    content: Vec<Cell>,
}

impl Universe {
    /// Creates a universe where every cell is dead.
    ///
    /// # Arguments
    /// * `rows` - The number of rows. Must be positive.
    /// * `cols` - The number of columns. Must be positive.
    ///
    /// Together they may not hold more than [`MAX_CELLS`] cells.
    pub fn new(rows: usize, cols: usize) -> Universe {
        if rows == 0 || cols == 0 {
            panic!("Universe dimensions must be positive, got {}x{}", rows, cols);
        }

        let cells = match cell_count(rows, cols) {
            Some(cells) => cells,
            None => panic!(
                "Universe of {}x{} exceeds the limit of {} cells",
                rows, cols, MAX_CELLS
            ),
        };

        Universe {
            rows,
            cols,
            content: vec![Cell::Dead; cells],
        }
    }

    /// Creates a universe from its text representation.
    ///
    /// The header declares the dimensions and each `m` line holds one row, where `.` is a dead
    /// cell and `#` is a live one. A bare `m` line is an all-dead row. Trailing rows or columns
    /// left out are dead.
    ///
    /// ```text
    /// rows 3
    /// cols 3
    /// m .#.
    /// m .#.
    /// ```
    pub fn parse(pattern: &str) -> Result<Universe> {
        let metadata = Regex::new(r"rows (\d+)\s+cols (\d+)")
            .unwrap()
            .captures(pattern)
            .ok_or_else(|| LifeError::InvalidPattern("missing `rows` and `cols` header".into()))?;

        let rows = parse_dimension(metadata.get(1).map_or("", |m| m.as_str()))?;
        let cols = parse_dimension(metadata.get(2).map_or("", |m| m.as_str()))?;
        if cell_count(rows, cols).is_none() {
            return Err(LifeError::InvalidPattern(format!(
                "{}x{} exceeds the limit of {} cells",
                rows, cols, MAX_CELLS
            )));
        }

        let mut universe = Universe::new(rows, cols);

        let lines = Regex::new(r"(?m)^\s*m(?: (.*))?$").unwrap();
        for (row, captures) in lines.captures_iter(pattern).enumerate() {
            if row >= rows {
                return Err(LifeError::InvalidPattern(format!(
                    "found more than {} rows",
                    rows
                )));
            }

            let line = captures.get(1).map_or("", |m| m.as_str()).trim();
            for (col, value) in line.chars().enumerate() {
                if col >= cols {
                    return Err(LifeError::InvalidPattern(format!(
                        "row {} is longer than {} columns",
                        row, cols
                    )));
                }

                let cell = Cell::from_char(value).ok_or_else(|| {
                    LifeError::InvalidPattern(format!(
                        "invalid cell '{}' at ({}, {})",
                        value, row, col
                    ))
                })?;
                universe.set(row, col, cell);
            }
        }

        Ok(universe)
    }

    /// Returns the cell at row `i` and column `j`.
    ///
    /// Indices are not wrapped; they must be within the grid.
    pub fn get(&self, i: usize, j: usize) -> Cell {
        self.content[self.index(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: Cell) {
        let index = self.index(i, j);
        self.content[index] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn alive_count(&self) -> usize {
        self.content.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of all live cells in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.content
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                if cell.is_alive() {
                    return Some((index / self.cols, index % self.cols));
                }
                None
            })
            .collect()
    }

    /// Randomly brings cells to life.
    ///
    /// Each cell independently draws an integer in `[0, 100)` and is alive if the draw exceeds
    /// `threshold`, so higher thresholds give sparser universes.
    ///
    /// # Arguments
    /// * `threshold` - A value in `[0, 100]`.
    /// * `rng` - The random number generator to draw from.
    pub fn populate<R: Rng + ?Sized>(&mut self, threshold: u8, rng: &mut R) {
        for cell in self.content.iter_mut() {
            let draw: u8 = rng.gen_range(0..100);
            *cell = Cell::from(draw > threshold);
        }
    }

    /// Counts the live cells among the 8 neighbours of (`i`, `j`), wrapping at the edges.
    ///
    /// On grids narrower than 3 several offsets wrap onto the same cell; each is still counted.
    pub fn count_live_neighbours(&self, i: usize, j: usize) -> usize {
        self.index(i, j);
        let mut count = 0;

        // Offsets are shifted by one so `rows - 1` stands in for -1 without signed arithmetic
        for di in 0..3 {
            for dj in 0..3 {
                if di == 1 && dj == 1 {
                    continue;
                }

                let row = (i + self.rows + di - 1) % self.rows;
                let col = (j + self.cols + dj - 1) % self.cols;
                count += self.get(row, col) as usize;
            }
        }

        count
    }

    /// Whether the cell at (`i`, `j`) is alive in the next generation.
    ///
    /// Live cells with 2 or 3 live neighbours survive and dead cells with exactly 3 are born.
    pub fn will_live(&self, i: usize, j: usize) -> bool {
        let neighbours = self.count_live_neighbours(i, j);
        matches!(
            (self.get(i, j), neighbours),
            (_, 3) | (Cell::Alive, 2)
        )
    }

    /// Computes the next generation as a new universe, leaving this one untouched.
    pub fn next_generation(&self) -> Universe {
        let mut next = Universe::new(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                next.set(i, j, Cell::from(self.will_live(i, j)));
            }
        }

        next
    }

    fn index(&self, i: usize, j: usize) -> usize {
        if i >= self.rows || j >= self.cols {
            panic!(
                "Cell ({}, {}) is outside of the {}x{} universe",
                i, j, self.rows, self.cols
            );
        }

        i * self.cols + j
    }
}

fn parse_dimension(value: &str) -> Result<usize> {
    match value.parse() {
        Ok(0) | Err(_) => Err(LifeError::InvalidPattern(format!(
            "dimensions must be positive integers, got '{}'",
            value
        ))),
        Ok(dimension) => Ok(dimension),
    }
}

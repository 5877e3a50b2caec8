//! Randomized maze generation.
//!
//! Every cell is opened independently with a fixed probability, then the
//! first column and the last row are carved open. Start `(0, 0)` lies on the
//! carved column and end `(rows-1, cols-1)` on the carved row, and the two
//! meet at `(rows-1, 0)`, so every generated maze is solvable.

use std::fmt;

use log::info;
use mazer_core::{Cell, Grid, Point};
use rand::Rng;

/// Rows used when a caller does not specify any.
pub const DEFAULT_ROWS: i32 = 15;
/// Columns used when a caller does not specify any.
pub const DEFAULT_COLS: i32 = 15;
/// Probability that a cell is opened by the random fill.
pub const DEFAULT_OPEN_PCT: f64 = 0.7;
/// Largest maze, in cells, a generator builds unless told otherwise.
pub const DEFAULT_MAX_CELLS: usize = 1_000_000;

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// Rows or columns below 1.
    InvalidSize { rows: i32, cols: i32 },
    /// More cells than the generator's limit.
    TooLarge {
        rows: i32,
        cols: i32,
        max_cells: usize,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, cols } => {
                write!(f, "maze must be at least 1x1, got {rows}x{cols}")
            }
            Self::TooLarge {
                rows,
                cols,
                max_cells,
            } => write!(
                f,
                "maze of {rows}x{cols} exceeds the limit of {max_cells} cells"
            ),
        }
    }
}

impl std::error::Error for GenError {}

/// Maze generator owning its random source.
///
/// Pass a seeded generator (e.g. `StdRng::seed_from_u64`) for reproducible
/// mazes.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    open_pct: f64,
    max_cells: usize,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator with the default fill probability.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            open_pct: DEFAULT_OPEN_PCT,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    /// Override the fill probability. Clamped to `[0, 1]`.
    pub fn with_open_pct(mut self, pct: f64) -> Self {
        self.open_pct = if pct.is_nan() {
            DEFAULT_OPEN_PCT
        } else {
            pct.clamp(0.0, 1.0)
        };
        self
    }

    /// Override the largest accepted maze, in cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// The probability used to open each cell.
    pub fn open_pct(&self) -> f64 {
        self.open_pct
    }

    /// Generate a `rows x cols` maze.
    ///
    /// The size is checked against the cell limit before anything is
    /// allocated.
    pub fn generate(&mut self, rows: i32, cols: i32) -> Result<Grid, GenError> {
        if rows < 1 || cols < 1 {
            return Err(GenError::InvalidSize { rows, cols });
        }
        let cells = (rows as usize).checked_mul(cols as usize);
        if cells.is_none_or(|n| n > self.max_cells) {
            return Err(GenError::TooLarge {
                rows,
                cols,
                max_cells: self.max_cells,
            });
        }
        info!("generating maze of size {rows}x{cols}");
        let mut grid = Grid::filled(rows, cols, Cell::Wall)
            .map_err(|_| GenError::InvalidSize { rows, cols })?;
        self.carve(&mut grid);
        Ok(grid)
    }

    /// Open cells of an all-wall grid in place.
    fn carve(&mut self, grid: &mut Grid) {
        let (rows, cols) = (grid.rows(), grid.cols());
        grid.set(grid.start(), Cell::Open);
        grid.set(grid.end(), Cell::Open);

        // Random fill: never closes a cell that is already open.
        for row in 0..rows {
            for col in 0..cols {
                let r: f64 = self.rng.random();
                if r < self.open_pct {
                    grid.set(Point::new(row, col), Cell::Open);
                }
            }
        }

        // Corridor: first column, then last row.
        for row in 0..rows {
            grid.set(Point::new(row, 0), Cell::Open);
        }
        for col in 0..cols {
            grid.set(Point::new(rows - 1, col), Cell::Open);
        }
    }
}

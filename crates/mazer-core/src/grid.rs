//! The maze grid.
//!
//! [`Cell`] is either open or a wall. [`Grid`] is a rectangular, row-major
//! matrix of cells with at least one row and one column. Search code takes
//! `&Grid`, so a grid can be read by any number of concurrent solves.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// A maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    /// Wire value: `0` for open, `1` for a wall.
    pub const fn value(self) -> u8 {
        match self {
            Cell::Open => 0,
            Cell::Wall => 1,
        }
    }

    /// Inverse of [`Cell::value`]. Any other number is rejected.
    pub const fn from_value(v: i64) -> Option<Self> {
        match v {
            0 => Some(Cell::Open),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a first row without columns.
    Empty,
    /// Requested dimensions below 1x1.
    InvalidSize { rows: i32, cols: i32 },
    /// A row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A numeric cell other than 0 or 1.
    InvalidCell { pos: Point, value: i64 },
    /// A character other than `#` or `.` in a textual grid.
    InvalidChar { pos: Point, ch: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid is empty"),
            Self::InvalidSize { rows, cols } => {
                write!(f, "grid dimensions must be at least 1x1, got {rows}x{cols}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCell { pos, value } => {
                write!(f, "invalid cell value {value} at {pos}, expected 0 or 1")
            }
            Self::InvalidChar { pos, ch } => {
                write!(f, "invalid grid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular maze of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create an all-open grid.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        Self::filled(rows, cols, Cell::Open)
    }

    /// Create a grid with every cell set to `cell`.
    pub fn filled(rows: i32, cols: i32, cell: Cell) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidSize { rows, cols });
        }
        let len = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or(GridError::InvalidSize { rows, cols })?;
        Ok(Self {
            cells: vec![cell; len],
            rows,
            cols,
        })
    }

    /// Build a grid from nested rows of wire values (0 = open, 1 = wall).
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = match rows.first() {
            Some(r) if !r.as_ref().is_empty() => r.as_ref().len(),
            _ => return Err(GridError::Empty),
        };
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (ri, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: ri,
                    expected: width,
                    found: row.len(),
                });
            }
            for (ci, &value) in row.iter().enumerate() {
                let cell = Cell::from_value(value).ok_or(GridError::InvalidCell {
                    pos: Point::new(ri as i32, ci as i32),
                    value,
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            rows: rows.len() as i32,
            cols: width as i32,
        })
    }

    /// Nested rows of wire values, the inverse of [`Grid::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The top-left cell, where every solve begins.
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The bottom-right cell, where every solve ends.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.rows - 1, self.cols - 1)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Convert a point to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cell) {
        for i in 0..self.cells.len() {
            let p = self.point(i);
            self.cells[i] = f(p);
        }
    }

    /// Open, in-bounds orthogonal neighbours of `p` (right, down, left, up).
    pub fn open_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_open(n))
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.point(i), c))
    }
}

/// Textual form: `#` for walls, `.` for open cells, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ri, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if ri > 0 {
                writeln!(f)?;
            }
            for c in row {
                f.write_str(if c.is_open() { "." } else { "#" })?;
            }
        }
        Ok(())
    }
}

/// Parse the textual form written by `Display`. Surrounding whitespace on
/// each line is ignored, blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<i64>> = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let ri = rows.len() as i32;
            let row = line
                .chars()
                .enumerate()
                .map(|(ci, ch)| match ch {
                    '.' => Ok(0),
                    '#' => Ok(1),
                    _ => Err(GridError::InvalidChar {
                        pos: Point::new(ri, ci as i32),
                        ch,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}

/// Render `grid` as text with `path` overlaid as `*`.
pub fn render_path(grid: &Grid, path: &[Point]) -> String {
    let mut canvas: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    for &p in path {
        if grid.contains(p) {
            canvas[p.row as usize][p.col as usize] = '*';
        }
    }
    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let v = i64::deserialize(deserializer)?;
        Cell::from_value(v).ok_or_else(|| D::Error::custom(format!("invalid cell value {v}")))
    }
}

/// A grid is written as its nested rows of 0/1 values.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        let rows = Vec::<Vec<i64>>::deserialize(deserializer)?;
        Grid::from_rows(&rows).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(3, 5).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.len(), 15);
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.end(), Point::new(2, 4));
        assert_eq!(g.count(Cell::Open), 15);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidSize { rows: 0, cols: 4 })
        );
        assert!(Grid::filled(3, -1, Cell::Wall).is_err());
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = Point::new(2, 3);
        g.set(p, Cell::Wall);
        assert_eq!(g.at(p), Some(Cell::Wall));
        assert!(!g.is_open(p));
        assert!(g.is_open(Point::new(0, 0)));
        assert_eq!(g.at(Point::new(4, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
        // Out of bounds writes are ignored.
        g.set(Point::new(10, 10), Cell::Wall);
        assert_eq!(g.count(Cell::Wall), 1);
    }

    #[test]
    fn idx_point_inverse() {
        let g = Grid::new(3, 7).unwrap();
        for (p, _) in g.iter() {
            let i = g.idx(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.idx(Point::new(1, 2)), Some(9));
    }

    #[test]
    fn from_rows_validates() {
        let g = Grid::from_rows(&[vec![0i64, 1], vec![1, 0]]).unwrap();
        assert_eq!(g.at(Point::new(0, 1)), Some(Cell::Wall));
        assert_eq!(g.to_rows(), vec![vec![0, 1], vec![1, 0]]);

        let empty: [Vec<i64>; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[Vec::<i64>::new()]), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&[vec![0i64, 0], vec![0]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_rows(&[vec![0i64, 2]]),
            Err(GridError::InvalidCell {
                pos: Point::new(0, 1),
                value: 2
            })
        );
    }

    #[test]
    fn parse_and_display() {
        let text = "\
            ..#
            #..";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Point::new(0, 2)), Some(Cell::Wall));
        assert_eq!(g.to_string(), "..#\n#..");
        assert!(matches!(
            "..x".parse::<Grid>(),
            Err(GridError::InvalidChar { ch: 'x', .. })
        ));
    }

    #[test]
    fn open_neighbors_skip_walls_and_edges() {
        let g: Grid = "\
            .#.
            ...
            ..."
        .parse()
        .unwrap();
        let n: Vec<_> = g.open_neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![Point::new(1, 2), Point::new(2, 1), Point::new(1, 0)]
        );
        let corner: Vec<_> = g.open_neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0)]);
    }

    #[test]
    fn render_path_overlay() {
        let g: Grid = "..\n#.".parse().unwrap();
        let out = render_path(&g, &[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert_eq!(out, "**\n#*");
    }
}

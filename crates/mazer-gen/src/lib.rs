//! Maze generation for mazer.

pub mod mazegen;

pub use mazegen::{
    DEFAULT_COLS, DEFAULT_MAX_CELLS, DEFAULT_OPEN_PCT, DEFAULT_ROWS, GenError, MazeGen,
};

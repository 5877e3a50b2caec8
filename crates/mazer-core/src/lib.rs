//! **mazer-core**: the grid model shared by the maze generator and solvers.
//!
//! This crate provides [`Point`] coordinates in `(row, col)` order, the
//! fixed [`Direction`] expansion order, the rectangular [`Grid`] of open and
//! wall [`Cell`]s, and the [`Context`] cancellation token.

pub mod context;
pub mod geom;
pub mod grid;

pub use context::Context;
pub use geom::{Direction, Point, manhattan};
pub use grid::{Cell, Grid, GridError, render_path};

//! Pieces shared by every engine: the outcome, the error type, endpoint
//! validation and path reconstruction.

use std::fmt;

use mazer_core::{Grid, Point};

use crate::emit::{Aborted, Emitter, Pacer, StepKind, StepSink};

/// Parent sentinel for the start cell and undiscovered cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Terminal result of a completed solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A path from start to end, both inclusive.
    Solved(Vec<Point>),
    /// The frontier ran dry before reaching the end.
    NoSolution,
}

impl Outcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Outcome::Solved(path) => Some(path),
            Outcome::NoSolution => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    /// Number of moves along the path (one less than its length).
    pub fn steps(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

/// Errors that can occur when running a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The algorithm name did not match any engine.
    UnknownAlgorithm(String),
    /// An endpoint lies outside the grid.
    OutOfBounds(Point),
    /// The solve was cancelled or its listener went away.
    Aborted,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm(name) => write!(
                f,
                "unknown algorithm \u{201c}{name}\u{201d}, expected bfs, dfs or astar"
            ),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::Aborted => write!(f, "{Aborted}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<Aborted> for SolveError {
    fn from(_: Aborted) -> Self {
        SolveError::Aborted
    }
}

/// Validate the endpoints and announce the start.
///
/// Returns the flat indices of `from` and `to`, or `None` when the start is
/// a wall and nothing can be reached.
pub(crate) fn begin<S: StepSink, P: Pacer>(
    grid: &Grid,
    from: Point,
    to: Point,
    em: &mut Emitter<S, P>,
) -> Result<Option<(usize, usize)>, SolveError> {
    let si = grid.idx(from).ok_or(SolveError::OutOfBounds(from))?;
    let gi = grid.idx(to).ok_or(SolveError::OutOfBounds(to))?;
    em.emit(StepKind::Start, from)?;
    if !grid.is_open(from) {
        return Ok(None);
    }
    Ok(Some((si, gi)))
}

/// Walk `parents` back from `goal`, then announce the path start to end.
pub(crate) fn finish<S: StepSink, P: Pacer>(
    grid: &Grid,
    parents: &[usize],
    goal: usize,
    em: &mut Emitter<S, P>,
) -> Result<Outcome, SolveError> {
    let mut path = Vec::new();
    let mut ci = goal;
    while ci != NO_PARENT {
        path.push(grid.point(ci));
        ci = parents[ci];
    }
    path.reverse();
    em.emit_path(&path)?;
    Ok(Outcome::Solved(path))
}

//! Engine selection by name.

use std::fmt;
use std::str::FromStr;

use mazer_core::{Grid, Point};

use crate::astar::astar;
use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::emit::{Emitter, Pacer, StepSink};
use crate::search::{Outcome, SolveError};

/// One of the available search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Astar];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Astar => "astar",
        }
    }

    /// Run this engine between explicit endpoints.
    pub fn run<S: StepSink, P: Pacer>(
        self,
        grid: &Grid,
        from: Point,
        to: Point,
        em: &mut Emitter<S, P>,
    ) -> Result<Outcome, SolveError> {
        match self {
            Algorithm::Bfs => bfs(grid, from, to, em),
            Algorithm::Dfs => dfs(grid, from, to, em),
            Algorithm::Astar => astar(grid, from, to, em),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(SolveError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solve `grid` from its top-left to its bottom-right cell.
pub fn solve<S: StepSink, P: Pacer>(
    grid: &Grid,
    algorithm: Algorithm,
    em: &mut Emitter<S, P>,
) -> Result<Outcome, SolveError> {
    algorithm.run(grid, grid.start(), grid.end(), em)
}

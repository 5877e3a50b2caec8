//! Step-emitting maze solvers.
//!
//! Three engines search a [`Grid`](mazer_core::Grid) from start to end and
//! report every step through an [`Emitter`]:
//!
//! - **BFS** ([`bfs`]): FIFO frontier, shortest path.
//! - **DFS** ([`dfs`]): LIFO frontier, any path.
//! - **A\*** ([`astar`]): Manhattan-guided, shortest path, ties broken by
//!   insertion order.
//!
//! Every engine emits one `Start` event, a `Visiting` event per expansion,
//! a `Frontier` event per newly discovered cell and, on success, one
//! `Solution` event per path cell. All traversal state lives on the
//! engine's stack frame; nothing is shared between calls.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
pub mod emit;
mod frontier;
mod search;
#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, solve};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use emit::{
    Aborted, Emitter, FnSink, NoDelay, Pacer, SleepPacer, Speed, Stats, StepEvent, StepKind,
    StepSink,
};
pub use search::{Outcome, SolveError};

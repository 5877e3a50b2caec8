//! Checks shared by the engine tests.

use std::collections::{HashSet, VecDeque};

use mazer_core::{Cell, Context, Grid, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::emit::{Pacer, StepEvent, StepKind};
use crate::search::Outcome;

/// Cancels the context on its `n`th pause.
pub struct CancelOnPause {
    n: usize,
    seen: usize,
}

impl CancelOnPause {
    pub fn new(n: usize) -> Self {
        Self { n, seen: 0 }
    }
}

impl Pacer for CancelOnPause {
    fn pause(&mut self, ctx: &Context) {
        self.seen += 1;
        if self.seen == self.n {
            ctx.cancel();
        }
    }
}

/// Shortest start-to-end distance by a plain distance-map BFS.
pub fn reference_distance(grid: &Grid) -> Option<usize> {
    if !grid.is_open(grid.start()) {
        return None;
    }
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.idx(grid.start())?] = 0;
    queue.push_back(grid.start());
    while let Some(p) = queue.pop_front() {
        let d = dist[grid.idx(p)?];
        if p == grid.end() {
            return Some(d);
        }
        for n in grid.open_neighbors(p) {
            let ni = grid.idx(n)?;
            if dist[ni] == usize::MAX {
                dist[ni] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

/// A grid with walls sprinkled at `wall_pct`, endpoints kept open.
pub fn random_grid(seed: u64, rows: i32, cols: i32, wall_pct: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).unwrap();
    grid.fill_fn(|_| {
        if rng.random_bool(wall_pct) {
            Cell::Wall
        } else {
            Cell::Open
        }
    });
    grid.set(grid.start(), Cell::Open);
    grid.set(grid.end(), Cell::Open);
    grid
}

/// Endpoints, unit orthogonal steps through open cells, no repeats.
pub fn assert_valid_path(grid: &Grid, path: &[Point]) {
    assert_eq!(path.first(), Some(&grid.start()), "path must begin at start");
    assert_eq!(path.last(), Some(&grid.end()), "path must finish at end");
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a unit step", w[0], w[1]);
    }
    for &p in path {
        assert!(grid.is_open(p), "{p} is not open");
    }
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path repeats a position");
}

/// Protocol ordering rules for one complete solve.
pub fn assert_event_order(grid: &Grid, events: &[StepEvent], outcome: &Outcome) {
    assert_eq!(
        events.first(),
        Some(&StepEvent::new(StepKind::Start, grid.start())),
        "first event must be Start at the start"
    );
    assert_eq!(
        events.iter().filter(|e| e.kind == StepKind::Start).count(),
        1
    );

    let mut announced: HashSet<Point> = HashSet::new();
    announced.insert(grid.start());
    let mut frontier_seen: HashSet<Point> = HashSet::new();
    for e in events {
        match e.kind {
            StepKind::Visiting => {
                assert!(announced.contains(&e.pos), "visited {} unannounced", e.pos)
            }
            StepKind::Frontier => {
                assert!(frontier_seen.insert(e.pos), "{} admitted twice", e.pos);
                announced.insert(e.pos);
            }
            _ => {}
        }
    }

    let solution: Vec<Point> = events
        .iter()
        .skip_while(|e| e.kind != StepKind::Solution)
        .map(|e| {
            assert_eq!(e.kind, StepKind::Solution, "solution events must be last");
            e.pos
        })
        .collect();
    match outcome {
        Outcome::Solved(path) => assert_eq!(&solution, path),
        Outcome::NoSolution => assert!(solution.is_empty()),
    }
}

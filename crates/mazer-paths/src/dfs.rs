use mazer_core::{Grid, Point};

use crate::bfs::{Fringe, traverse};
use crate::emit::{Emitter, Pacer, StepSink};
use crate::search::{Outcome, SolveError};

impl Fringe for Vec<usize> {
    #[inline]
    fn put(&mut self, idx: usize) {
        self.push(idx);
    }

    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// Depth-first search from `from` to `to`.
///
/// Neighbours are marked visited when pushed, like [`bfs`](crate::bfs), so
/// the returned path is whatever the stack order reaches first and need not
/// be the shortest.
pub fn dfs<S: StepSink, P: Pacer>(
    grid: &Grid,
    from: Point,
    to: Point,
    em: &mut Emitter<S, P>,
) -> Result<Outcome, SolveError> {
    traverse::<Vec<usize>, S, P>(grid, from, to, em)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{StepEvent, StepKind};
    use crate::testutil::*;

    fn run(grid: &Grid) -> (Outcome, Vec<StepEvent>) {
        let mut em = Emitter::capture();
        let out = dfs(grid, grid.start(), grid.end(), &mut em).unwrap();
        (out, em.into_sink())
    }

    #[test]
    fn open_3x3_expands_last_pushed_first() {
        let grid = Grid::new(3, 3).unwrap();
        let (out, events) = run(&grid);
        // Up is pushed last, so after (0,0) the lower neighbour (1,0) is
        // expanded before (0,1).
        assert_eq!(events[4], StepEvent::new(StepKind::Visiting, Point::new(1, 0)));
        assert_eq!(
            out.path().unwrap(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_event_order(&grid, &events, &out);
    }

    #[test]
    fn isolated_start_has_no_solution() {
        let grid: Grid = ".#\n#.".parse().unwrap();
        let (out, _) = run(&grid);
        assert_eq!(out, Outcome::NoSolution);
    }

    #[test]
    fn single_cell() {
        let grid = Grid::new(1, 1).unwrap();
        let (out, events) = run(&grid);
        assert_eq!(out, Outcome::Solved(vec![Point::ZERO]));
        assert!(events.iter().all(|e| e.kind != StepKind::Frontier));
    }

    #[test]
    fn may_find_a_longer_path() {
        // DFS follows the stack, not distance; on an open grid its path is
        // valid but only bounded below by the shortest one.
        let grid = Grid::new(4, 4).unwrap();
        let (out, _) = run(&grid);
        let path = out.path().unwrap();
        assert_valid_path(&grid, path);
        assert!(out.steps() >= reference_distance(&grid));
    }

    #[test]
    fn valid_on_random_grids() {
        for seed in 0..150 {
            let grid = random_grid(seed, 11, 9, 0.3);
            let (out, events) = run(&grid);
            assert_eq!(
                out.is_solved(),
                reference_distance(&grid).is_some(),
                "seed {seed}"
            );
            if let Some(path) = out.path() {
                assert_valid_path(&grid, path);
            }
            assert_event_order(&grid, &events, &out);
        }
    }
}

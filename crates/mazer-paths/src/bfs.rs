use std::collections::VecDeque;

use mazer_core::{Grid, Point};

use crate::emit::{Emitter, Pacer, StepKind, StepSink};
use crate::search::{NO_PARENT, Outcome, SolveError, begin, finish};

/// Container of discovered-but-unexpanded cells for the uninformed searches.
pub(crate) trait Fringe: Default {
    fn put(&mut self, idx: usize);
    fn take(&mut self) -> Option<usize>;
}

impl Fringe for VecDeque<usize> {
    #[inline]
    fn put(&mut self, idx: usize) {
        self.push_back(idx);
    }

    #[inline]
    fn take(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// Breadth-first search from `from` to `to`.
///
/// Cells are marked visited when discovered, so each is expanded at most
/// once and the first path found is a shortest one.
pub fn bfs<S: StepSink, P: Pacer>(
    grid: &Grid,
    from: Point,
    to: Point,
    em: &mut Emitter<S, P>,
) -> Result<Outcome, SolveError> {
    traverse::<VecDeque<usize>, S, P>(grid, from, to, em)
}

/// Uninformed search; the fringe decides the expansion order.
pub(crate) fn traverse<F: Fringe, S: StepSink, P: Pacer>(
    grid: &Grid,
    from: Point,
    to: Point,
    em: &mut Emitter<S, P>,
) -> Result<Outcome, SolveError> {
    let Some((si, gi)) = begin(grid, from, to, em)? else {
        return Ok(Outcome::NoSolution);
    };

    let mut visited = vec![false; grid.len()];
    let mut parents = vec![NO_PARENT; grid.len()];
    let mut fringe = F::default();
    visited[si] = true;
    fringe.put(si);

    while let Some(ci) = fringe.take() {
        let cp = grid.point(ci);
        em.emit(StepKind::Visiting, cp)?;

        if ci == gi {
            return finish(grid, &parents, gi, em);
        }

        for np in grid.open_neighbors(cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            parents[ni] = ci;
            fringe.put(ni);
            em.emit(StepKind::Frontier, np)?;
        }
    }

    Ok(Outcome::NoSolution)
}

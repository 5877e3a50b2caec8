use mazer_core::{Grid, Point, manhattan};

use crate::emit::{Emitter, Pacer, StepKind, StepSink};
use crate::frontier::OpenSet;
use crate::search::{NO_PARENT, Outcome, SolveError, begin, finish};

/// Sentinel for "no known cost yet".
const UNREACHABLE: i32 = i32::MAX;

/// A* search from `from` to `to` with a Manhattan heuristic.
///
/// Every move costs 1, so the heuristic is consistent and the path is a
/// shortest one. Equal priorities are popped in push order.
///
/// A neighbour that already has a live open entry gets its cost and parent
/// updated in place but is neither pushed again nor re-announced. Entries
/// whose cell was closed in the meantime are dropped when popped.
pub fn astar<S: StepSink, P: Pacer>(
    grid: &Grid,
    from: Point,
    to: Point,
    em: &mut Emitter<S, P>,
) -> Result<Outcome, SolveError> {
    let Some((si, gi)) = begin(grid, from, to, em)? else {
        return Ok(Outcome::NoSolution);
    };

    let n = grid.len();
    let mut g = vec![UNREACHABLE; n];
    let mut f = vec![UNREACHABLE; n];
    let mut parents = vec![NO_PARENT; n];
    let mut live = vec![false; n];
    let mut closed = vec![false; n];
    let mut open = OpenSet::new();

    g[si] = 0;
    f[si] = manhattan(from, to);
    open.push(si, f[si]);
    live[si] = true;

    while let Some(ci) = open.pop() {
        live[ci] = false;
        if closed[ci] {
            continue;
        }

        let cp = grid.point(ci);
        em.emit(StepKind::Visiting, cp)?;

        if ci == gi {
            return finish(grid, &parents, gi, em);
        }

        closed[ci] = true;

        for np in grid.open_neighbors(cp) {
            let Some(ni) = grid.idx(np) else {
                continue;
            };
            if closed[ni] {
                continue;
            }

            let tentative_g = g[ci] + 1;
            if g[ni] != UNREACHABLE && tentative_g >= g[ni] {
                continue;
            }

            parents[ni] = ci;
            g[ni] = tentative_g;
            f[ni] = tentative_g + manhattan(np, to);

            if !live[ni] {
                open.push(ni, f[ni]);
                live[ni] = true;
                em.emit(StepKind::Frontier, np)?;
            }
        }
    }

    Ok(Outcome::NoSolution)
}

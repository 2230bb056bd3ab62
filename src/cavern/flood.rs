use super::{coords, idx, validate, Dir, RiskMap};
use crate::error::SearchError;
use rayon::prelude::*;
use std::convert::identity as ident;
use tracing::{debug, trace};

/// Calculates new score of single field basing on its neighbours.
///
/// input - previous iteration output
/// field - index of calculated field
fn update_field(
    map: &impl RiskMap,
    input: &[Option<usize>],
    field: usize,
    size: (usize, usize),
) -> Option<usize> {
    let pos = coords(field, size.0);
    let risk = map.risk(pos.0, pos.1)?;

    Dir::ALL
        .iter()
        .filter_map(|dir| dir.step(pos, size))
        .filter_map(|next| input[idx(next, size.0)])
        .min()
        .map(|score| score + risk)
}

/// Single iteration of loop, basically frame update.
///
/// input - previous iteration output (front buffer)
/// output - next iteration output (back buffer)
/// updates - additional buffer marking which fields changed to better score; If there was no
/// changes at all, nothing more can be done for finding better way (if there is no path to exit
/// yet, there is none at all). Additionally if the current score of exit is lower or equal to
/// any updated field, it is also impossible to find better solution.
fn iteration<M>(
    map: &M,
    size: (usize, usize),
    input: &[Option<usize>],
    output: &mut [Option<usize>],
    updates: &mut [Option<usize>],
) where
    M: RiskMap + Sync,
{
    output
        .par_iter_mut()
        .zip(updates.par_iter_mut())
        .enumerate()
        .for_each(|(idx, (output, update))| {
            let (updated, change) = match (update_field(map, input, idx, size), input[idx]) {
                // Better path is found to this field
                (Some(score), Some(previous)) if score < previous => (Some(score), Some(score)),
                // Field reached for the first time
                (Some(score), None) => (Some(score), Some(score)),
                // Nothing better, leave it as it was
                (_, previous) => (previous, None),
            };

            *output = updated;
            *update = change;
        })
}

/// Predicate calulating, if algorithm should stop. It happens in two cases:
/// 1. There was no updates on last iteration
/// 2. All changes in last iteration updated their fields to score higher or equal than current
///    exit score
fn is_done(exit: Option<usize>, updates: &[Option<usize>]) -> bool {
    let best = updates.par_iter().copied().filter_map(ident).min();
    match (best, exit) {
        (None, _) => true,
        (Some(best), Some(exit)) if best >= exit => true,
        _ => false,
    }
}

/// Finds the lowest total risk of getting from `start` to `end` by flooding the whole map.
///
/// Every iteration recalculates every field basing entirely on the previous iteration, so it
/// parallelizes perfectly (with rayon here), but every iteration costs as much as the whole map.
pub fn flood<M>(map: &M, start: (usize, usize), end: (usize, usize)) -> Result<usize, SearchError>
where
    M: RiskMap + Sync,
{
    let size = validate(map, start, end)?;
    if start == end {
        return Ok(0);
    }

    let (w, h) = size;
    let end_idx = idx(end, w);

    let mut scores = vec![None; w * h].into_boxed_slice();
    scores[idx(start, w)] = Some(0);
    let mut backbuffer = scores.clone();

    // Updates is initialized to anything which is not fully `None` - this is to ensure, that the
    // iteration would not end before it starts.
    let mut updates = vec![Some(0); w * h].into_boxed_slice();
    let mut iterations = 0;
    while !is_done(scores[end_idx], &updates) {
        iteration(map, size, &scores, &mut backbuffer, &mut updates);
        std::mem::swap(&mut scores, &mut backbuffer);
        iterations += 1;
        trace!(iterations, exit = ?scores[end_idx], "flood iteration");
    }

    debug!(?start, ?end, risk = ?scores[end_idx], iterations, "flood finished");
    scores[end_idx].ok_or(SearchError::Exhausted { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn example() {
        let grid: Grid = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581"
            .parse()
            .unwrap();
        assert_eq!(flood(&grid, (0, 0), (9, 9)), Ok(40));
    }

    #[test]
    fn uniform() {
        let grid = Grid::uniform(6, 4, 2);
        assert_eq!(flood(&grid, (0, 0), (5, 3)), Ok(16));
        assert_eq!(flood(&grid, (5, 3), (0, 0)), Ok(16));
    }

    #[test]
    fn single_field() {
        assert_eq!(flood(&Grid::uniform(1, 1, 3), (0, 0), (0, 0)), Ok(0));
    }

    #[test]
    fn start_never_rescored() {
        // Going back through the start is never cheaper than 0, so start keeps its score
        let grid: Grid = "00\n00\n".parse().unwrap();
        assert_eq!(flood(&grid, (0, 0), (1, 1)), Ok(0));
    }

    #[test]
    fn done() {
        assert!(is_done(None, &[None, None]));
        assert!(!is_done(None, &[None, Some(3)]));
        assert!(is_done(Some(3), &[Some(4), Some(3), None]));
        assert!(!is_done(Some(3), &[Some(4), Some(2)]));
    }
}

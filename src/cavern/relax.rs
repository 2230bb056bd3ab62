use super::{coords, idx, validate, Dir, Node, OpenSet, RiskMap};
use crate::error::SearchError;
use tracing::debug;

/// Finds the lowest total risk of getting from `start` to `end`.
///
/// Uniform cost search, which returns as soon as `end` is discovered (so when it is inserted into
/// the open set, not when it is taken out of it). Every field gets its score only once, when it
/// is discovered from the closed field with the lowest score. With non negative risks this first
/// score is already the best one.
///
/// Risk of `start` itself is never counted, so for `start == end` it is always 0.
pub fn find_lowest_cost_path(
    map: &impl RiskMap,
    start: (usize, usize),
    end: (usize, usize),
) -> Result<usize, SearchError> {
    let size = validate(map, start, end)?;
    if start == end {
        return Ok(0);
    }

    let (w, h) = size;
    let mut nodes = vec![Node::default(); w * h];
    let mut open = OpenSet::new();

    let start_idx = idx(start, w);
    nodes[start_idx].open = true;
    open.push(start_idx, 0);

    while let Some((current, score)) = open.pop() {
        nodes[current].closed = true;
        let pos = coords(current, w);

        for dir in Dir::ALL.iter() {
            let next = match dir.step(pos, size) {
                Some(next) => next,
                None => continue,
            };

            let node = &mut nodes[idx(next, w)];
            if node.closed || node.open {
                continue;
            }

            let risk = match map.risk(next.0, next.1) {
                Some(risk) => risk,
                None => continue,
            };

            let candidate = score + risk;
            node.open = true;
            node.score = candidate;
            open.push(idx(next, w), candidate);

            if next == end {
                debug!(
                    ?start,
                    ?end,
                    risk = candidate,
                    open = open.len(),
                    "exit discovered"
                );
                return Ok(candidate);
            }
        }
    }

    Err(SearchError::Exhausted { start, end })
}

use super::{coords, idx, validate, Dir, Node, OpenSet, RiskMap};
use crate::error::SearchError;
use tracing::debug;

/// Finds the lowest total risk of getting from `start` to `end` with textbook Dijkstra.
///
/// Opened field score may still be lowered - then the field is just pushed to the open set once
/// again, and the stale entry is skipped when it is taken out. Returns when `end` is taken out of
/// the open set, so its score cannot change anymore.
pub fn settle(
    map: &impl RiskMap,
    start: (usize, usize),
    end: (usize, usize),
) -> Result<usize, SearchError> {
    let size = validate(map, start, end)?;
    let (w, h) = size;
    let mut nodes = vec![Node::default(); w * h];
    let mut open = OpenSet::new();

    let start_idx = idx(start, w);
    let end_idx = idx(end, w);
    nodes[start_idx].open = true;
    open.push(start_idx, 0);

    let mut closed = 0;
    while let Some((current, score)) = open.pop() {
        if nodes[current].closed {
            continue;
        }
        nodes[current].closed = true;
        closed += 1;

        if current == end_idx {
            debug!(?start, ?end, risk = score, closed, "exit settled");
            return Ok(score);
        }

        let pos = coords(current, w);
        for dir in Dir::ALL.iter() {
            let next = match dir.step(pos, size) {
                Some(next) => next,
                None => continue,
            };

            let node = &mut nodes[idx(next, w)];
            if node.closed {
                continue;
            }

            let risk = match map.risk(next.0, next.1) {
                Some(risk) => risk,
                None => continue,
            };

            let candidate = score + risk;
            if !node.open || candidate < node.score {
                node.open = true;
                node.score = candidate;
                open.push(idx(next, w), candidate);
            }
        }
    }

    Err(SearchError::Exhausted { start, end })
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
        assert_eq!(settle(&grid, (0, 0), (9, 9)), Ok(40));
    }

    #[test]
    fn single_field() {
        assert_eq!(settle(&Grid::uniform(1, 1, 7), (0, 0), (0, 0)), Ok(0));
    }

    #[test]
    fn cheap_detour() {
        let grid: Grid = "\
090
111"
        .parse()
        .unwrap();
        assert_eq!(settle(&grid, (0, 0), (2, 0)), Ok(3));
        assert_eq!(settle(&grid, (1, 0), (2, 0)), Ok(0));
    }

    #[test]
    fn reverse_differs() {
        let grid: Grid = "12\n34\n".parse().unwrap();
        assert_eq!(settle(&grid, (0, 0), (1, 1)), Ok(6));
        assert_eq!(settle(&grid, (1, 1), (0, 0)), Ok(3));
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            settle(&Grid::uniform(2, 2, 1), (0, 0), (2, 2)),
            Err(SearchError::OutOfBounds {
                pos: (2, 2),
                size: (2, 2)
            })
        );
    }
}

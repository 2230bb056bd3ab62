//! Cavern representation and lowest total risk search through it.
//!
//! Cavern is a rectangle of fields, every field having its risk level. Moving is possible only in
//! four axis aligned directions, and entering a field costs its risk level (the field where we
//! start is never entered, so it is never counted).
//!
//! There are three approaches to find the cheapest way through:
//!
//! `relax` is the main one - uniform cost search (Dijkstra) which returns as soon as the exit is
//! discovered for the first time, without waiting for it to be taken from the open set. It is
//! correct only because risks are never negative and the open set always gives its true minimum
//! next, so the first score given to a field is already its best one. Changing any of those two
//! breaks it.
//!
//! `settle` is a textbook Dijkstra, which allows lowering score of already opened field and
//! returns only when the exit is taken from the open set. It is slower, but it doesn't depend on
//! the above, so it is the reference for `relax`.
//!
//! `flood` relaxes all fields at once on every iteration, in parallel. Very suboptimal on single
//! core, but completely independent of any ordering, so it is another cross check.
//!
//! All of them work on any [`RiskMap`], so the five times bigger cavern is never materialized -
//! [`Tiled`] computes its risks on the fly.

use crate::error::{ParseError, SearchError};
use std::io::BufRead;
use std::str::FromStr;

mod open_set;
use open_set::OpenSet;

mod relax;
pub use relax::find_lowest_cost_path;

mod settle;
pub use settle::settle;

mod flood;
pub use flood::flood;

mod tiled;
pub use tiled::Tiled;

/// Anything what can be searched through.
///
/// Coordinates are `(x, y)`, `x` being a column, `y` being a row. Every coordinate in
/// `[0, width) x [0, height)` has to be accepted by `risk`.
pub trait RiskMap {
    /// Returns `(width, height)` of map
    fn size(&self) -> (usize, usize);

    /// Cost of entering given field, `None` if the field cannot be entered at all
    fn risk(&self, x: usize, y: usize) -> Option<usize>;
}

/// Direction of single step
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    /// Order in which neighbours are visited
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    /// Coords of field in this direction, `None` if it is outside of the `(w, h)` rectangle
    pub fn step(self, (x, y): (usize, usize), (w, h): (usize, usize)) -> Option<(usize, usize)> {
        let (x, y) = match self {
            Dir::Left => (x.checked_sub(1)?, y),
            Dir::Right => (x + 1, y),
            Dir::Up => (x, y.checked_sub(1)?),
            Dir::Down => (x, y + 1),
        };

        if x < w && y < h {
            Some((x, y))
        } else {
            None
        }
    }
}

/// Maps coords to flat index in row-major buffer of width `w`
pub(crate) fn idx((x, y): (usize, usize), w: usize) -> usize {
    y * w + x
}

/// Maps flat index to coords
pub(crate) fn coords(idx: usize, w: usize) -> (usize, usize) {
    (idx % w, idx / w)
}

/// Checks the search can be done at all, returns size of the map
pub(crate) fn validate(
    map: &impl RiskMap,
    start: (usize, usize),
    end: (usize, usize),
) -> Result<(usize, usize), SearchError> {
    let size = map.size();
    let (w, h) = size;
    if w == 0 || h == 0 {
        return Err(SearchError::EmptyGrid);
    }

    for &pos in [start, end].iter() {
        if pos.0 >= w || pos.1 >= h {
            return Err(SearchError::OutOfBounds { pos, size });
        }
    }

    Ok(size)
}

/// Per field bookkeeping of single search
#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct Node {
    /// Score is final, field would never be considered again
    pub closed: bool,
    /// Field is (or was) in the open set
    pub open: bool,
    /// Best known cost of reaching this field
    pub score: usize,
}

/// Whole cavern
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    /// All risk levels flattened, row by row
    cells: Box<[u8]>,
    w: usize,
    h: usize,
}

impl Grid {
    /// Creates grid of given size, taking risk level of every field from `f(x, y)`
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let cells = (0..w * h)
            .map(|idx| {
                let (x, y) = coords(idx, w);
                f(x, y)
            })
            .collect();

        Grid { cells, w, h }
    }

    /// Grid with the same risk level everywhere
    pub fn uniform(w: usize, h: usize, risk: u8) -> Self {
        Self::from_fn(w, h, |_, _| risk)
    }

    /// Reads grid from input, one row per line, one digit per field. Blank lines are skipped,
    /// whitespace around rows is ignored.
    pub fn from_input(input: impl BufRead) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut w = None;
        let mut h = 0;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let found = line.chars().count();
            match w {
                None => w = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::RaggedRow {
                        row: h,
                        expected,
                        found,
                    })
                }
                Some(_) => (),
            }

            for (x, ch) in line.chars().enumerate() {
                let risk = ch
                    .to_digit(10)
                    .ok_or(ParseError::InvalidDigit { x, y: h, ch })?;
                cells.push(risk as u8);
            }

            h += 1;
        }

        let w = w.ok_or(ParseError::Empty)?;
        Ok(Grid {
            cells: cells.into_boxed_slice(),
            w,
            h,
        })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Risk level of given field, `None` outside of the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.w && y < self.h {
            Some(self.cells[idx((x, y), self.w)])
        } else {
            None
        }
    }

    /// The same cavern repeated `factor` times in both directions, with risk growing on every
    /// repetition
    pub fn tiled(&self, factor: usize) -> Tiled<'_> {
        Tiled::new(self, factor)
    }
}

impl RiskMap for Grid {
    fn size(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    fn risk(&self, x: usize, y: usize) -> Option<usize> {
        self.get(x, y).map(usize::from)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_input(s.as_bytes())
    }
}

#[cfg(feature = "text_visualize")]
impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.cells.chunks(self.w.max(1)) {
            let line: String = line
                .iter()
                .map(|risk| risk.to_string())
                .chain(std::iter::once("\n".to_owned()))
                .collect();

            f.write_str(&line)?;
        }

        Ok(())
    }
}

/// Which pathfinder to use
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// [`find_lowest_cost_path`]
    Relax,
    /// [`settle`]
    Settle,
    /// [`flood`]
    Flood,
}

impl Strategy {
    pub fn solve<M>(
        self,
        map: &M,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<usize, SearchError>
    where
        M: RiskMap + Sync,
    {
        match self {
            Strategy::Relax => find_lowest_cost_path(map, start, end),
            Strategy::Settle => settle(map, start, end),
            Strategy::Flood => flood(map, start, end),
        }
    }

    /// Lowest total risk from the top left to the bottom right corner
    pub fn corner_to_corner<M>(self, map: &M) -> Result<usize, SearchError>
    where
        M: RiskMap + Sync,
    {
        let (w, h) = map.size();
        if w == 0 || h == 0 {
            return Err(SearchError::EmptyGrid);
        }

        self.solve(map, (0, 0), (w - 1, h - 1))
    }
}

//! Errors of reading a cavern and of searching through it

/// Error for [`Grid::from_input`](crate::Grid::from_input) and parsing a grid from string
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No non-blank line in input
    #[error("input contains no rows")]
    Empty,
    /// Row with different length than the first one. Rows are counted from 0, blank lines are
    /// not counted.
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Field which is not a decimal digit
    #[error("invalid risk level {ch:?} at ({x}, {y})")]
    InvalidDigit { x: usize, y: usize, ch: char },
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Error returned by every pathfinder in [`cavern`](crate::cavern)
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Map has no fields at all
    #[error("cavern is empty")]
    EmptyGrid,
    /// Start or end does not lie on the map
    #[error("{pos:?} lies outside of the {size:?} cavern")]
    OutOfBounds {
        pos: (usize, usize),
        size: (usize, usize),
    },
    /// Every field reachable from start was visited and end was not among them
    #[error("search exhausted before reaching {end:?} from {start:?}")]
    Exhausted {
        start: (usize, usize),
        end: (usize, usize),
    },
}

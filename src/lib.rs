//! Looking for the least risky way through a cavern full of chitons.
//!
//! Input is a rectangle of digits, every digit being risk level of single field. The way starts
//! in the top left corner, ends in the bottom right one, and its total risk is the sum of risk
//! levels of every entered field (so not the first one). Part 1 is the lowest total risk of the
//! cavern as it is, part 2 is the same for the cavern repeated 5 times in both directions (see
//! [`Tiled`]).
//!
//! Cavern part is in the `cavern` module, errors are in `error`. Reading input, timing and
//! printing is done by the binary.

pub mod cavern;
pub mod error;

pub use cavern::{find_lowest_cost_path, Grid, RiskMap, Strategy, Tiled};
pub use error::{ParseError, SearchError};

/// How many times cavern is repeated in part 2
pub const TILES: usize = 5;

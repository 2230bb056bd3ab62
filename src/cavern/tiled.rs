use super::{Grid, RiskMap};

/// The cavern repeated `factor` times to the right and downwards.
///
/// Every tile is the original grid with risk levels raised by its distance (in tiles) from the top
/// left one, and risk levels above 9 wrap back to 1. Nothing is materialized, risks are calculated
/// when asked for.
#[derive(Clone, Copy, Debug)]
pub struct Tiled<'a> {
    grid: &'a Grid,
    factor: usize,
}

impl<'a> Tiled<'a> {
    pub fn new(grid: &'a Grid, factor: usize) -> Self {
        Tiled { grid, factor }
    }
}

/// Wraps raised risk level back into `1..=9`
fn wrap(risk: usize) -> usize {
    match risk {
        0 => 0,
        risk => (risk - 1) % 9 + 1,
    }
}

impl RiskMap for Tiled<'_> {
    fn size(&self) -> (usize, usize) {
        (
            self.grid.width() * self.factor,
            self.grid.height() * self.factor,
        )
    }

    fn risk(&self, x: usize, y: usize) -> Option<usize> {
        let (w, h) = self.grid.size();
        if w == 0 || h == 0 {
            return None;
        }

        let (tile_x, tile_y) = (x / w, y / h);
        if tile_x >= self.factor || tile_y >= self.factor {
            return None;
        }

        let risk = self.grid.risk(x % w, y % h)?;
        Some(wrap(risk + tile_x + tile_y))
    }
}

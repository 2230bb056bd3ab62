//! Random caverns, checking that all pathfinders agree and that the results behave as lowest
//! total risks should.

use chiton::{Grid, RiskMap, Strategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STRATEGIES: [Strategy; 3] = [Strategy::Relax, Strategy::Settle, Strategy::Flood];

fn random_grid(rng: &mut StdRng) -> Grid {
    let w = rng.gen_range(1..=24);
    let h = rng.gen_range(1..=24);
    Grid::from_fn(w, h, |_, _| rng.gen_range(0..=9))
}

fn random_pos(rng: &mut StdRng, grid: &Grid) -> (usize, usize) {
    (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()))
}

/// Grid with random fields which cannot be entered
struct Holes {
    grid: Grid,
    holes: Vec<bool>,
}

impl RiskMap for Holes {
    fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    fn risk(&self, x: usize, y: usize) -> Option<usize> {
        if self.holes[y * self.grid.width() + x] {
            None
        } else {
            self.grid.risk(x, y)
        }
    }
}

#[test]
fn strategies_agree() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        let start = random_pos(&mut rng, &grid);
        let end = random_pos(&mut rng, &grid);

        let expected = Strategy::Settle.solve(&grid, start, end);
        assert!(expected.is_ok());
        for strategy in STRATEGIES.iter() {
            assert_eq!(
                strategy.solve(&grid, start, end),
                expected,
                "{:?} from {:?} to {:?} in\n{:?}",
                strategy,
                start,
                end,
                grid
            );
        }
    }
}

#[test]
fn strategies_agree_with_holes() {
    let mut rng = StdRng::seed_from_u64(2021);
    for _ in 0..200 {
        let grid = random_grid(&mut rng);
        let holes = (0..grid.width() * grid.height())
            .map(|_| rng.gen_bool(0.3))
            .collect();
        let map = Holes { grid, holes };
        let start = random_pos(&mut rng, &map.grid);
        let end = random_pos(&mut rng, &map.grid);

        let expected = Strategy::Settle.solve(&map, start, end);
        for strategy in STRATEGIES.iter() {
            assert_eq!(strategy.solve(&map, start, end), expected, "{:?}", strategy);
        }
    }
}

#[test]
fn tiled_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let grid = random_grid(&mut rng);
        let tiled = grid.tiled(rng.gen_range(1..=5));

        let expected = Strategy::Settle.corner_to_corner(&tiled);
        assert!(expected.is_ok());
        for strategy in STRATEGIES.iter() {
            assert_eq!(strategy.corner_to_corner(&tiled), expected, "{:?}", strategy);
        }
    }
}

#[test]
fn raising_risk_never_lowers_total() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let grid = random_grid(&mut rng);
        let (rx, ry) = random_pos(&mut rng, &grid);
        let raise = rng.gen_range(1..=9);
        let raised = Grid::from_fn(grid.width(), grid.height(), |x, y| {
            let risk = grid.get(x, y).unwrap();
            if (x, y) == (rx, ry) {
                risk + raise
            } else {
                risk
            }
        });

        for strategy in STRATEGIES.iter() {
            let before = strategy.corner_to_corner(&grid).unwrap();
            let after = strategy.corner_to_corner(&raised).unwrap();
            assert!(after >= before, "{:?}: {} < {}", strategy, after, before);
        }
    }
}

#[test]
fn reverse_differs_by_endpoints() {
    // Forward path pays for its end but not its start, reverse one the other way around
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let grid = random_grid(&mut rng);
        let a = random_pos(&mut rng, &grid);
        let b = random_pos(&mut rng, &grid);

        for strategy in STRATEGIES.iter() {
            let forward = strategy.solve(&grid, a, b).unwrap() as isize;
            let reverse = strategy.solve(&grid, b, a).unwrap() as isize;
            let risk_a = grid.get(a.0, a.1).unwrap() as isize;
            let risk_b = grid.get(b.0, b.1).unwrap() as isize;
            if a != b {
                assert_eq!(forward - reverse, risk_b - risk_a, "{:?}", strategy);
            } else {
                assert_eq!((forward, reverse), (0, 0));
            }
        }
    }
}

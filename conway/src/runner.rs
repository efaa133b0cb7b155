//! Drives a board through a configured number of generations.

use crate::config::Config;
use crate::engine::GameOfLife;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::CycleDetector;
use crate::loader;
use crate::patterns::{self, Pattern};

/// Builds the first generation from the seed section of `config`.
pub fn initial_grid(config: &Config) -> Result<Grid> {
    config.validate()?;
    let seed = &config.seed;
    if let Some(path) = &seed.input {
        return loader::load_grid(path);
    }
    if let Some(name) = &seed.pattern {
        let pattern = Pattern::by_name(name)?;
        let mut grid = Grid::new(config.grid.rows, config.grid.cols);
        let (height, width) = pattern.bounds();
        if height > grid.rows() || width > grid.cols() {
            log::warn!(
                "{} ({}x{}) does not fit a {}x{} grid and will wrap onto itself",
                pattern.name,
                height,
                width,
                grid.rows(),
                grid.cols()
            );
        }
        pattern.place(&mut grid, seed.origin_row, seed.origin_col);
        return Ok(grid);
    }
    if let Some(value) = seed.random_seed {
        return Ok(patterns::random_grid(config.grid.rows, config.grid.cols, value));
    }
    Ok(patterns::default_grid())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Completed,
    Extinct,
    Cycle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub alive: usize,
    pub communities: usize,
    pub stop_reason: StopReason,
}

/// Advances `game` up to `config.simulation.generations` times, stopping
/// early when every cell is dead or, if enabled, when a board repeats.
pub fn run(game: &mut GameOfLife, config: &Config) -> RunSummary {
    let sim = &config.simulation;
    let report_interval = config.logging.report_interval.max(1);
    let mut detector = CycleDetector::new(sim.cycle_history.max(1));
    detector.observe(game.grid());

    let mut stop_reason = StopReason::Completed;
    for _ in 0..sim.generations {
        game.next_generation();

        if game.generation() % report_interval as u64 == 0 {
            log::info!(
                "generation {}: alive={} communities={}",
                game.generation(),
                game.total_alive_cells(),
                game.communities()
            );
        }

        if !game.is_alive() {
            log::info!("Population extinct at generation {}", game.generation());
            stop_reason = StopReason::Extinct;
            break;
        }
        if sim.stop_on_cycle && detector.observe(game.grid()) {
            log::info!("Board repeated at generation {}", game.generation());
            stop_reason = StopReason::Cycle;
            break;
        }
    }

    RunSummary {
        generations: game.generation(),
        alive: game.total_alive_cells(),
        communities: game.communities(),
        stop_reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_seed_when_nothing_configured() {
        let grid = initial_grid(&Config::default()).unwrap();
        assert_eq!(grid, patterns::default_grid());
    }

    #[test]
    fn pattern_seed_uses_configured_size() {
        let mut config = Config::default();
        config.grid.rows = 10;
        config.grid.cols = 12;
        config.seed.pattern = Some("glider".to_string());
        config.seed.origin_row = 2;
        config.seed.origin_col = 3;
        let grid = initial_grid(&config).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (10, 12));
        assert_eq!(grid.alive_count(), 5);
        assert!(grid.get(2, 4));
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocating() {
        let mut config = Config::default();
        config.grid.rows = usize::MAX / 2;
        config.grid.cols = 3;
        config.seed.random_seed = Some(1);
        assert!(matches!(initial_grid(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn pattern_override_wins_over_configured_input() {
        let mut config = Config::default();
        config.grid.rows = 8;
        config.grid.cols = 8;
        config.seed.input = Some("missing-board.txt".into());
        config.seed.use_pattern("Blinker".to_string());
        let grid = initial_grid(&config).unwrap();
        assert_eq!(grid.alive_count(), 3);
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let mut config = Config::default();
        config.seed.pattern = Some("nope".to_string());
        assert!(initial_grid(&config).is_err());
    }

    #[test]
    fn default_board_runs_to_extinction() {
        let mut game = GameOfLife::default();
        let summary = run(&mut game, &Config::default());
        assert_eq!(summary.stop_reason, StopReason::Extinct);
        assert_eq!(summary.generations, 4);
        assert_eq!(summary.alive, 0);
        assert_eq!(summary.communities, 0);
    }

    #[test]
    fn blinker_stops_on_cycle() {
        let mut config = Config::default();
        config.grid.rows = 5;
        config.grid.cols = 5;
        config.seed.pattern = Some("Blinker".to_string());
        config.seed.origin_row = 2;
        config.seed.origin_col = 1;
        let mut game = GameOfLife::from_grid(initial_grid(&config).unwrap());
        let summary = run(&mut game, &config);
        assert_eq!(summary.stop_reason, StopReason::Cycle);
        assert_eq!(summary.generations, 2);
        assert_eq!(summary.communities, 1);
    }

    #[test]
    fn runs_full_length_without_cycle_check() {
        let mut config = Config::default();
        config.grid.rows = 5;
        config.grid.cols = 5;
        config.seed.pattern = Some("Blinker".to_string());
        config.seed.origin_row = 2;
        config.simulation.generations = 7;
        config.simulation.stop_on_cycle = false;
        let mut game = GameOfLife::from_grid(initial_grid(&config).unwrap());
        let summary = run(&mut game, &config);
        assert_eq!(summary.stop_reason, StopReason::Completed);
        assert_eq!(summary.generations, 7);
        assert_eq!(summary.alive, 3);
    }
}

//! Command-line driver for the toroidal Game of Life.

use clap::{Parser, Subcommand};
use conway::patterns::PATTERNS;
use conway::runner::{self, StopReason};
use conway::{loader, Config, GameOfLife};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conway")]
#[command(version)]
#[command(about = "Conway's Game of Life on a wrap-around board, with community counting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Starting board in the plain-text format
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Named starting pattern
        #[arg(short, long)]
        pattern: Option<String>,

        /// Number of generations to advance
        #[arg(short, long)]
        generations: Option<usize>,

        /// Write the final board here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the final board
        #[arg(long)]
        print: bool,

        /// Quiet mode (summary only)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "conway.yaml")]
        output: PathBuf,
    },

    /// List the built-in patterns
    Patterns,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            input,
            pattern,
            generations,
            output,
            print,
            quiet,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)?,
                None => Config::default(),
            };
            if let Some(path) = input {
                config.seed.use_input(path);
            }
            if let Some(name) = pattern {
                config.seed.use_pattern(name);
            }
            if let Some(n) = generations {
                config.simulation.generations = n;
            }
            if quiet {
                config.logging.log_level = "warn".to_string();
            }
            config.validate()?;
            init_logging(&config);
            run_simulation(&config, output, print)
        }

        Commands::Init { output } => {
            init_logging(&Config::default());
            Config::default().save(&output)?;
            println!("Default configuration written to {}", output.display());
            Ok(())
        }

        Commands::Patterns => {
            for pattern in PATTERNS {
                let (height, width) = pattern.bounds();
                println!("{:<20} {:>3}x{:<3} {} cells", pattern.name, height, width, pattern.cells.len());
            }
            Ok(())
        }
    }
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();
}

fn run_simulation(
    config: &Config,
    output: Option<PathBuf>,
    print: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = runner::initial_grid(config)?;
    let mut game = GameOfLife::from_grid(grid);

    log::info!(
        "Starting {}x{} board: alive={} communities={}",
        game.grid().rows(),
        game.grid().cols(),
        game.total_alive_cells(),
        game.communities()
    );

    let summary = runner::run(&mut game, config);

    println!("=== Simulation Complete ===");
    println!("Generations: {}", summary.generations);
    println!("Alive cells: {}", summary.alive);
    println!("Communities: {}", summary.communities);
    match summary.stop_reason {
        StopReason::Completed => {}
        StopReason::Extinct => println!("Stopped: population extinct"),
        StopReason::Cycle => println!("Stopped: board repeated"),
    }

    if print {
        print!("{}", game.grid());
    }
    if let Some(path) = output {
        loader::write_grid(game.grid(), &path)?;
        println!("Final board written to {}", path.display());
    }

    Ok(())
}

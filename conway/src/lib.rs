//! # conway
//!
//! Conway's Game of Life on a wrap-around (toroidal) board, plus a count of
//! "communities": groups of live cells joined through any of the eight
//! neighbouring directions.
//!
//! ```rust
//! use conway::GameOfLife;
//!
//! let mut game = GameOfLife::default();
//! assert_eq!(game.total_alive_cells(), 5);
//! assert_eq!(game.communities(), 1);
//!
//! game.next_generations(4);
//! assert!(!game.is_alive());
//! ```
//!
//! Boards can also be read from a plain-text file:
//!
//! ```rust
//! let grid = conway::loader::parse_grid("3 3\nfalse true false\nfalse true false\nfalse true false").unwrap();
//! let game = conway::GameOfLife::from_grid(grid);
//! assert_eq!(game.alive_neighbors(1, 0), 3);
//! ```

pub mod community;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod loader;
pub mod patterns;
pub mod runner;
pub mod union_find;

pub use community::count_communities;
pub use config::Config;
pub use engine::GameOfLife;
pub use error::{Error, Result};
pub use grid::{Grid, ALIVE, DEAD};
pub use union_find::WeightedQuickUnion;

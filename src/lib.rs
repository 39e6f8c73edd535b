//! Greedy gnomes: maximum-gold monotone paths through a rocky grid.
//!
//! A gnome starts in the top-left cell of a rectangular [`Grid`] and may only
//! step right or down. Some cells are blocked by rocks, the others hold a
//! non-negative amount of gold. The task is to find the [`Path`] that reaches
//! the bottom row while collecting as much gold as possible.
//!
//! ## Solvers
//! Two algorithms answer the same question:
//! 1. [`solve_exhaustive`] enumerates every step sequence up to the longest
//!    possible path. It is exponential and limited to grids with
//!    `rows + columns - 1 < 64`, and serves as the reference answer.
//! 2. [`solve_dynamic_programming`] fills a table of the best path into each
//!    cell; the table has one entry per cell and each entry stores its path.
//!
//! Both are also available behind the [`GnomesSolver`] trait.
//!
//! ## Quick start
//! ```
//! use greedy_gnomes::{solve_dynamic_programming, solve_exhaustive, GridBuilder};
//!
//! let grid = GridBuilder::new(2, 2)
//!     .with_row(0, [1, 2])
//!     .with_row(1, [3, 4])
//!     .build()
//!     .unwrap();
//! let best = solve_dynamic_programming(&grid);
//! assert_eq!(best.total_gold(), 8);
//! assert_eq!(best.final_row(), 1);
//! assert_eq!(solve_exhaustive(&grid).total_gold(), 8);
//! ```
//!
//! ## Features
//! - `parallel`: spread exhaustive enumeration over a rayon thread pool.
//! - `tracing`: emit spans around solver runs and their inner phases.
//! - `heavy`: enable long-running stress tests.

pub mod builder;
pub mod error;
pub mod grid;
pub mod path;
pub mod solvers;
pub mod traits;
pub mod utils;

pub use crate::builder::GridBuilder;
pub use crate::error::GnomesError;
pub use crate::grid::{Cell, Grid};
pub use crate::path::{Path, Step};
pub use crate::solvers::dyn_prog::{solve_dynamic_programming, DynamicProgramming};
pub use crate::solvers::exhaustive::{check_exhaustive_fits, solve_exhaustive, Exhaustive};
pub use crate::traits::GnomesSolver;

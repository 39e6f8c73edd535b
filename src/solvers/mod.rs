//! The two greedy-gnomes solvers.
//!
//! - [`exhaustive`] : tries every step sequence; exponential, used as the
//!   reference answer for small grids.
//! - [`dyn_prog`]   : fills a table of best paths per cell, one entry per cell.
//!
//! Both implement [`GnomesSolver`](crate::traits::GnomesSolver).

pub mod dyn_prog;
pub mod exhaustive;

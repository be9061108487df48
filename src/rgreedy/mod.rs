//! Randomized greedy construction (rgreedy).
//!
//! Builds a median set one element at a time. Each round scores every
//! remaining candidate by the total cost the solution would have if that
//! candidate were added next, keeps the `k_rcl` best in a restricted
//! candidate list (RCL), and draws the next median uniformly from it.
//!
//! `k_rcl = 1` is pure greedy; `k_rcl >= n` is uniform random selection.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive
//!   search procedures", *Journal of Global Optimization* 6, 109-133.
//! - Resende, M. G. C. & Werneck, R. F. (2004). "A hybrid heuristic for the
//!   p-median problem", *Journal of Heuristics* 10, 59-88.

mod config;
mod runner;

pub use config::RgreedyConfig;
pub use runner::{RgreedyResult, RgreedyRunner};

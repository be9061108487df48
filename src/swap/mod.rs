//! Swap-based local search.
//!
//! First-improvement descent over the swap neighborhood: replace one
//! median `m_out` by one non-median `m_in`. Each candidate swap is priced
//! in `O(n)` from per-point nearest / second-nearest median bookkeeping
//! ([`Assignment`]); after an accepted swap the bookkeeping is rebuilt from
//! scratch and the scan restarts from the first median.
//!
//! # References
//!
//! - Teitz, M. B. & Bart, P. (1968). "Heuristic methods for estimating the
//!   generalized vertex median of a weighted graph", *Operations Research*
//!   16(5), 955-961.
//! - Whitaker, R. (1983). "A fast algorithm for the greedy interchange for
//!   large-scale clustering and median location problems", *INFOR* 21(2),
//!   95-108.

mod config;
mod runner;
mod types;

pub use config::SwapConfig;
pub use runner::{SwapResult, SwapRunner};
pub use types::{Assignment, SearchState};

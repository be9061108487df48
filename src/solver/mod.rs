//! End-to-end p-median pipeline.
//!
//! Runs the randomized greedy constructor, then hands its median set to
//! the swap local search. Construction always completes before the
//! descent starts.

mod config;
mod runner;

pub use config::PMedianConfig;
pub use runner::{PMedianResult, PMedianSolver};

//! p-median facility location.
//!
//! Given `n` points with pairwise distances and a target count `p`, choose
//! `p` points ("medians") minimizing the sum, over all points, of the
//! distance to the nearest chosen median.
//!
//! The crate provides:
//!
//! - **Instance**: validated, immutable problem data, plus a plain-text
//!   reader/writer and a random instance generator.
//! - **Cost evaluation**: the ground-truth objective for any median set.
//! - **Randomized greedy (rgreedy)**: a constructive heuristic that adds
//!   one median at a time, drawing uniformly from a restricted candidate
//!   list (RCL) of the best prospective choices.
//! - **Swap local search**: first-improvement descent over
//!   (median, non-median) exchanges, evaluated in linear time through
//!   nearest / second-nearest bookkeeping.
//! - **Solver**: the end-to-end pipeline, construction then descent.
//!
//! # Example
//!
//! ```
//! use u_pmedian::instance::Instance;
//! use u_pmedian::solver::{PMedianConfig, PMedianSolver};
//!
//! let instance = Instance::new(
//!     2,
//!     vec![
//!         vec![0.0, 1.0, 4.0, 5.0],
//!         vec![1.0, 0.0, 3.0, 4.0],
//!         vec![4.0, 3.0, 0.0, 1.0],
//!         vec![5.0, 4.0, 1.0, 0.0],
//!     ],
//! )
//! .unwrap();
//!
//! let config = PMedianConfig::default().with_seed(7);
//! let result = PMedianSolver::run(&instance, &config).unwrap();
//! assert_eq!(result.solution.len(), 2);
//! assert!((result.cost - 2.0).abs() < 1e-9);
//! ```

pub mod cost;
pub mod instance;
pub mod rgreedy;
pub mod solver;
pub mod swap;

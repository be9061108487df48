//! p-median problem instances.
//!
//! An [`Instance`] holds the point count `n`, the number of medians to
//! select `p`, and a complete `n x n` matrix of non-negative distances.
//! The matrix need not be symmetric or satisfy the triangle inequality.
//!
//! Instances are validated once at construction; every algorithm in this
//! crate assumes a well-formed instance afterwards.
//!
//! # Text format
//!
//! ```text
//! n
//! p
//! d(0,0) d(0,1) ... d(0,n-1)
//! ...
//! d(n-1,0) ...      d(n-1,n-1)
//! ```

pub mod generator;
pub mod io;
mod types;

pub use types::Instance;

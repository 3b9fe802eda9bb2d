//! Memoization cache for dynamic programming problems.
//!
//! A [`DpProblem`] says which indices an index depends on and how to combine
//! their values; [`DpCache`] evaluates it lazily, computing each index once
//! and keeping every result in its [`Backend`].
//!
//! Dependencies must form a DAG; the cache does not detect cycles.
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Ways to tile a 1×n strip with 1×1 and 1×2 pieces.
//! struct Strip;
//!
//! impl DpProblem<usize, u64> for Strip {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n < 2 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), Strip);
//! assert_eq!(cache.get(&10), 89);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

//! Grid puzzle solutions with automatic registration
//!
//! `utils` holds the reusable kernel: a 2-D grid with direction algebra,
//! beam and pipe traversals, a generic DP cache and the memoized
//! spring-arrangement counter built on it.
//!
//! Solutions are organized by year. Each one derives `AutoRegisterSolver`,
//! so linking this crate is enough to make them visible to
//! `RegistryBuilder::register_all_plugins`.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

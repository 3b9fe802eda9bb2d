//! Trait-based DP problem definition.

/// Dependency structure and combine step of a dynamic programming problem.
///
/// # Example
///
/// ```rust
/// use puzzle_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
///
/// /// Monotone lattice paths from (0, 0) to (row, col).
/// struct LatticePaths;
///
/// impl DpProblem<(usize, usize), u64> for LatticePaths {
///     fn deps(&self, &(row, col): &(usize, usize)) -> Vec<(usize, usize)> {
///         match (row, col) {
///             (0, _) | (_, 0) => vec![],
///             _ => vec![(row - 1, col), (row, col - 1)],
///         }
///     }
///
///     fn compute(&self, _index: &(usize, usize), deps: Vec<u64>) -> u64 {
///         if deps.is_empty() { 1 } else { deps.iter().sum() }
///     }
/// }
///
/// let cache = DpCache::with_problem(HashMapBackend::new(), LatticePaths);
/// assert_eq!(cache.get(&(4, 4)), 70);
/// ```
pub trait DpProblem<I, K> {
    /// Indices this index depends on. Base cases return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Combine the resolved dependency values, given in `deps()` order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

//! Rayon-based parallel executor.
//!
//! Uses rayon's work-stealing thread pool. Documents are independent, so each
//! one is planned on whichever worker picks it up.

use super::Executor;
use rayon::prelude::*;

/// A parallel executor using rayon's global thread pool.
///
/// # Thread Pool Configuration
///
/// To configure the number of threads, use `rayon::ThreadPoolBuilder` before
/// creating any `RayonExecutor`:
///
/// ```ignore
/// rayon::ThreadPoolBuilder::new()
///     .num_threads(4)
///     .build_global()
///     .unwrap();
///
/// let executor = RayonExecutor::new();
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Cached thread count for reporting via `parallelism()`.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        // Indexed parallel iterators collect in input order.
        items.par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rayon_preserves_order() {
        let items: Vec<usize> = (0..1000).collect();
        let out = RayonExecutor::new().map_ordered(&items, |x| x * 2);
        assert_eq!(out[999], 1998);
        assert!(out.windows(2).all(|w| w[0] < w[1]));
        assert!(RayonExecutor::new().parallelism() >= 1);
    }
}

//! Executors for batch generation.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: Sequential execution, no threading
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon-executor`)
//!
//! Every executor returns results in input order.

#[cfg(feature = "rayon-executor")]
mod rayon;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::RayonExecutor;

/// Runs one closure over many independent items.
pub trait Executor {
    fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync;

    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Runs everything on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl Executor for SyncExecutor {
    fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        items.iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}

/// A concrete executor choice. `Executor` has generic methods and cannot be
/// a trait object, so callers hold this enum instead.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// Sequential executor (no parallelism)
    Sync(SyncExecutor),

    /// Rayon work-stealing thread pool executor
    #[cfg(feature = "rayon-executor")]
    Rayon(RayonExecutor),
}

impl Default for ExecutorImpl {
    /// The parallel executor when compiled in, otherwise sequential.
    fn default() -> Self {
        #[cfg(feature = "rayon-executor")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon-executor"))]
        {
            ExecutorImpl::Sync(SyncExecutor)
        }
    }
}

impl Executor for ExecutorImpl {
    fn map_ordered<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.map_ordered(items, f),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.map_ordered(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon-executor")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_preserves_order() {
        let out = SyncExecutor.map_ordered(&[3, 1, 2], |x| x * 10);
        assert_eq!(out, vec![30, 10, 20]);
        assert_eq!(SyncExecutor.parallelism(), 1);
    }

    #[test]
    fn test_default_executor_preserves_order() {
        let items: Vec<u32> = (0..500).collect();
        let out = ExecutorImpl::default().map_ordered(&items, |x| x + 1);
        assert_eq!(out, (1..501).collect::<Vec<_>>());
    }
}

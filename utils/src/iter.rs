#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Traversal helpers on iterators.
pub trait IteratorExt: Iterator + Sized {
    /// Runs `action` on every item in order and collects the items.
    fn tap_each(self, action: impl FnMut(&Self::Item)) -> Vec<Self::Item>;

    /// Maps each item through `f` and keeps the present results,
    /// preserving order.
    fn map_present<R>(self, f: impl FnMut(Self::Item) -> Option<R>) -> Vec<R>;
}

impl<I: Iterator> IteratorExt for I {
    fn tap_each(self, action: impl FnMut(&Self::Item)) -> Vec<Self::Item> {
        self.inspect(action).collect()
    }

    fn map_present<R>(self, f: impl FnMut(Self::Item) -> Option<R>) -> Vec<R> {
        self.filter_map(f).collect()
    }
}

/// Data-parallel traversal over slices.
#[cfg(feature = "parallel")]
pub trait ParallelSliceExt<T: Sync> {
    fn parallel_for_each(&self, action: impl Fn(&T) + Send + Sync);

    /// Like `iter().map(f).collect()`, computed in parallel. The output
    /// order matches the input order.
    fn parallel_map<R: Send>(&self, f: impl Fn(&T) -> R + Send + Sync) -> Vec<R>;

    fn parallel_flat_map<R, I>(&self, f: impl Fn(&T) -> I + Send + Sync) -> Vec<R>
    where
        R: Send,
        I: IntoIterator<Item = R>;
}

#[cfg(feature = "parallel")]
impl<T: Sync> ParallelSliceExt<T> for [T] {
    fn parallel_for_each(&self, action: impl Fn(&T) + Send + Sync) {
        self.par_iter().for_each(action);
    }

    fn parallel_map<R: Send>(&self, f: impl Fn(&T) -> R + Send + Sync) -> Vec<R> {
        self.par_iter().map(f).collect()
    }

    fn parallel_flat_map<R, I>(&self, f: impl Fn(&T) -> I + Send + Sync) -> Vec<R>
    where
        R: Send,
        I: IntoIterator<Item = R>,
    {
        self.par_iter().flat_map_iter(f).collect()
    }
}

//! Result caching for pure functions of up to three arguments.
//!
//! [`MemoCache`] is the shared primitive: an insert-only map guarded by a
//! read-write lock, populated with a double-checked write path so that a
//! value is computed at most once per key. The `Memoized*` wrappers bundle
//! a function with such a cache, one wrapper per arity.
//!
//! Caches never evict. A long-lived wrapper over a function with an
//! unbounded key domain grows without bound.

use std::collections::HashMap;
use std::hash::Hash;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;

/// An insert-only cache of computed values.
///
/// Lookups of present keys take the shared read lock. A miss upgrades to
/// the exclusive write lock, re-checks the key in case another thread
/// populated it in the meantime, and only then runs the computation. Once
/// stored, a value is never overwritten.
pub struct MemoCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> MemoCache<K, V> {
    pub fn new() -> Self {
        MemoCache {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Clone> MemoCache<K, V> {
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns the cached value for `key`, computing and storing it first
    /// if absent. The computation runs under the write lock, so concurrent
    /// callers racing on the same key observe a single computation.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some(value) = self.entries.read().get(&key) {
            return value.clone();
        }
        let mut entries = self.entries.write();
        if let Some(value) = entries.get(&key) {
            return value.clone();
        }
        let value = compute(&key);
        entries.insert(key, value.clone());
        value
    }

    /// Fallible form of [`get_or_compute`](Self::get_or_compute). Only
    /// `Ok` results are stored; an `Err` is handed back uncached, so the
    /// next call with the same key runs the computation again.
    pub fn get_or_try_compute<E>(
        &self,
        key: K,
        compute: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.entries.read().get(&key) {
            return Ok(value.clone());
        }
        let mut entries = self.entries.write();
        if let Some(value) = entries.get(&key) {
            return Ok(value.clone());
        }
        let value = compute(&key)?;
        entries.insert(key, value.clone());
        Ok(value)
    }
}

/// A zero-argument function evaluated at most once.
pub struct Memoized0<F, R> {
    f: F,
    value: OnceCell<R>,
}

impl<F, R> Memoized0<F, R> {
    pub fn new(f: F) -> Self {
        Memoized0 {
            f,
            value: OnceCell::new(),
        }
    }
}

impl<F, R> Memoized0<F, R>
where
    R: Clone,
{
    pub fn call(&self) -> R
    where
        F: Fn() -> R,
    {
        self.value.get_or_init(|| (self.f)()).clone()
    }

    pub fn try_call<E>(&self) -> Result<R, E>
    where
        F: Fn() -> Result<R, E>,
    {
        self.value.get_or_try_init(|| (self.f)()).cloned()
    }
}

/// A one-argument function with cached results.
pub struct Memoized1<F, K, V> {
    f: F,
    cache: MemoCache<K, V>,
}

impl<F, K, V> Memoized1<F, K, V> {
    pub fn new(f: F) -> Self {
        Memoized1 {
            f,
            cache: MemoCache::new(),
        }
    }
}

impl<F, K, V> Memoized1<F, K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn call(&self, key: K) -> V
    where
        F: Fn(&K) -> V,
    {
        self.cache.get_or_compute(key, |key| (self.f)(key))
    }

    pub fn try_call<E>(&self, key: K) -> Result<V, E>
    where
        F: Fn(&K) -> Result<V, E>,
    {
        self.cache.get_or_try_compute(key, |key| (self.f)(key))
    }
}

/// A two-argument function with results cached by the argument pair.
pub struct Memoized2<F, A, B, V> {
    f: F,
    cache: MemoCache<(A, B), V>,
}

impl<F, A, B, V> Memoized2<F, A, B, V> {
    pub fn new(f: F) -> Self {
        Memoized2 {
            f,
            cache: MemoCache::new(),
        }
    }
}

impl<F, A, B, V> Memoized2<F, A, B, V>
where
    A: Eq + Hash,
    B: Eq + Hash,
    V: Clone,
{
    pub fn call(&self, a: A, b: B) -> V
    where
        F: Fn(&A, &B) -> V,
    {
        self.cache.get_or_compute((a, b), |(a, b)| (self.f)(a, b))
    }

    pub fn try_call<E>(&self, a: A, b: B) -> Result<V, E>
    where
        F: Fn(&A, &B) -> Result<V, E>,
    {
        self.cache.get_or_try_compute((a, b), |(a, b)| (self.f)(a, b))
    }
}

/// A three-argument function with results cached by the argument triple.
pub struct Memoized3<F, A, B, C, V> {
    f: F,
    cache: MemoCache<(A, B, C), V>,
}

impl<F, A, B, C, V> Memoized3<F, A, B, C, V> {
    pub fn new(f: F) -> Self {
        Memoized3 {
            f,
            cache: MemoCache::new(),
        }
    }
}

impl<F, A, B, C, V> Memoized3<F, A, B, C, V>
where
    A: Eq + Hash,
    B: Eq + Hash,
    C: Eq + Hash,
    V: Clone,
{
    pub fn call(&self, a: A, b: B, c: C) -> V
    where
        F: Fn(&A, &B, &C) -> V,
    {
        self.cache
            .get_or_compute((a, b, c), |(a, b, c)| (self.f)(a, b, c))
    }

    pub fn try_call<E>(&self, a: A, b: B, c: C) -> Result<V, E>
    where
        F: Fn(&A, &B, &C) -> Result<V, E>,
    {
        self.cache
            .get_or_try_compute((a, b, c), |(a, b, c)| (self.f)(a, b, c))
    }
}

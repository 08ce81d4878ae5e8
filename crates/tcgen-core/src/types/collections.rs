//! Hash collection aliases used throughout the workspace.

/// FxHashMap — fast, deterministic-enough hashing for internal maps.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// FxHashSet — set counterpart of [`FxHashMap`].
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;

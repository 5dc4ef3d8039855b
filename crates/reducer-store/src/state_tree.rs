//! Keyed state tree produced by combined reducers
//!
//! Each slice is owned by exactly one named reducer; its concrete type is
//! erased here and recovered with [`StateTree::slice`].

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A value that can live in a [`StateTree`]
pub trait Slice: Any + fmt::Debug + Send + Sync {
    /// Upcast for downcasting back to the concrete slice type
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + fmt::Debug + Send + Sync> Slice for T {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Type-erased slice as stored in the tree
pub type SliceRef = Arc<dyn Slice>;

/// Top-level state of a store driven by a `CombinedReducer`
#[derive(Clone, Default)]
pub struct StateTree {
    slices: BTreeMap<String, SliceRef>,
}

impl StateTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a slice, returning the updated tree
    ///
    /// Used to build preloaded state.
    pub fn with_slice<T: Slice>(mut self, key: impl Into<String>, value: T) -> Self {
        self.slices.insert(key.into(), Arc::new(value));
        self
    }

    /// Typed access to a slice
    ///
    /// Returns `None` when the key is absent or holds a different type.
    pub fn slice<T: Slice>(&self, key: &str) -> Option<Arc<T>> {
        let slice = Arc::clone(self.slices.get(key)?);
        slice.into_any().downcast::<T>().ok()
    }

    /// Type-erased access to a slice
    pub fn get(&self, key: &str) -> Option<&SliceRef> {
        self.slices.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slices.contains_key(key)
    }

    /// Slice keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub(crate) fn from_slices(slices: BTreeMap<String, SliceRef>) -> Self {
        Self { slices }
    }
}

impl fmt::Debug for StateTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slices.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counter {
        counter: i64,
    }

    #[test]
    fn test_typed_slice_access() {
        let tree = StateTree::new().with_slice("counter", Counter { counter: 3 });
        let counter = tree.slice::<Counter>("counter").unwrap();
        assert_eq!(counter.counter, 3);
    }

    #[test]
    fn test_wrong_type_is_none() {
        let tree = StateTree::new().with_slice("counter", Counter { counter: 3 });
        assert!(tree.slice::<String>("counter").is_none());
        assert!(tree.slice::<Counter>("results").is_none());
    }

    #[test]
    fn test_slice_access_shares_allocation() {
        let tree = StateTree::new().with_slice("counter", Counter { counter: 1 });
        let first = tree.slice::<Counter>("counter").unwrap();
        let second = tree.slice::<Counter>("counter").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_debug_lists_slices() {
        let tree = StateTree::new()
            .with_slice("counter", Counter { counter: 1 })
            .with_slice("label", "hello".to_string());
        assert_eq!(
            format!("{:?}", tree),
            r#"{"counter": Counter { counter: 1 }, "label": "hello"}"#
        );
        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["counter", "label"]);
    }
}

//! Reducer combinator
//!
//! Folds a set of named slice reducers into one reducer over a [`StateTree`].
//! Every slice reducer sees only its own slice, and the next tree always holds
//! every registered key. When no slice changed, the previous tree is handed
//! back as-is so identity checks downstream still work.

use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::StoreError;
use crate::reducer::Reducer;
use crate::state_tree::{Slice, SliceRef, StateTree};

/// Start composing slice reducers
pub fn combine_reducers<A>() -> CombineReducers<A> {
    CombineReducers::new()
}

/// Builder for a [`CombinedReducer`]
pub struct CombineReducers<A> {
    slices: Vec<SliceEntry<A>>,
}

impl<A> CombineReducers<A> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Register the reducer owning the slice stored under `key`
    pub fn slice<S, R>(mut self, key: impl Into<String>, reducer: R) -> Self
    where
        S: Slice,
        R: Reducer<S, A> + 'static,
    {
        self.slices.push(SliceEntry {
            key: key.into(),
            reducer: Box::new(TypedSlice {
                reducer,
                _state: PhantomData,
            }),
        });
        self
    }

    /// Finish the composition
    ///
    /// Fails with `InvalidReducer` when a key was registered twice.
    pub fn build(self) -> Result<CombinedReducer<A>, StoreError> {
        let mut seen = BTreeSet::new();
        for entry in &self.slices {
            if !seen.insert(entry.key.as_str()) {
                return Err(StoreError::invalid_reducer(format!(
                    "slice \"{}\" registered more than once",
                    entry.key
                )));
            }
        }

        Ok(CombinedReducer {
            slices: self.slices,
        })
    }
}

impl<A> Default for CombineReducers<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// One reducer over a keyed state tree, built by [`combine_reducers`]
pub struct CombinedReducer<A> {
    slices: Vec<SliceEntry<A>>,
}

impl<A> CombinedReducer<A> {
    /// Registered slice keys, in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|entry| entry.key.as_str())
    }
}

impl<A> Reducer<StateTree, A> for CombinedReducer<A> {
    fn reduce(
        &self,
        state: Option<&Arc<StateTree>>,
        action: &A,
    ) -> Result<Arc<StateTree>, StoreError> {
        let mut next = BTreeMap::new();
        let mut changed = false;

        for entry in &self.slices {
            let prev = state.and_then(|tree| tree.get(&entry.key));
            let slice = entry
                .reducer
                .reduce_erased(&entry.key, prev, action)
                .map_err(|err| match err {
                    StoreError::ReducerContract { slice: None } => StoreError::ReducerContract {
                        slice: Some(entry.key.clone()),
                    },
                    other => other,
                })?;

            changed |= prev.map_or(true, |prev| !Arc::ptr_eq(prev, &slice));
            next.insert(entry.key.clone(), slice);
        }

        if let Some(state) = state {
            let unexpected: Vec<&str> = state
                .keys()
                .filter(|key| !next.contains_key(*key))
                .collect();
            if !unexpected.is_empty() {
                log::warn!(
                    "Unexpected keys {:?} in state; they are dropped, expected one of {:?}",
                    unexpected,
                    self.keys().collect::<Vec<_>>()
                );
                changed = true;
            }

            if !changed {
                return Ok(Arc::clone(state));
            }
        }

        Ok(Arc::new(StateTree::from_slices(next)))
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.slices.is_empty() {
            return Err(StoreError::invalid_reducer(
                "combined reducer has no slice reducers registered",
            ));
        }
        Ok(())
    }
}

struct SliceEntry<A> {
    key: String,
    reducer: Box<dyn ErasedSlice<A>>,
}

/// Object-safe view of a slice reducer with the slice type erased
trait ErasedSlice<A> {
    fn reduce_erased(
        &self,
        key: &str,
        prev: Option<&SliceRef>,
        action: &A,
    ) -> Result<SliceRef, StoreError>;
}

struct TypedSlice<S, R> {
    reducer: R,
    _state: PhantomData<fn() -> S>,
}

impl<S, A, R> ErasedSlice<A> for TypedSlice<S, R>
where
    S: Slice,
    R: Reducer<S, A>,
{
    fn reduce_erased(
        &self,
        key: &str,
        prev: Option<&SliceRef>,
        action: &A,
    ) -> Result<SliceRef, StoreError> {
        let prev = match prev {
            Some(prev) => match Arc::clone(prev).into_any().downcast::<S>() {
                Ok(typed) => Some(typed),
                Err(_) => {
                    log::warn!(
                        "Slice \"{}\" holds a value of an unexpected type; resetting to default",
                        key
                    );
                    None
                }
            },
            None => None,
        };

        let next = self.reducer.reduce(prev.as_ref(), action)?;
        Ok(next)
    }
}

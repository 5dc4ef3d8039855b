//! Reducer contract
//!
//! A reducer is a pure function from the current state and an action to the
//! next state. It receives the state behind an `Arc` and must not mutate it;
//! when the action does not affect the state it hands back the very same `Arc`
//! so that `Arc::ptr_eq` downstream can tell nothing changed.
//!
//! `state` is `None` only while the store initializes, at which point the
//! reducer supplies its default.

use std::sync::Arc;

use crate::error::StoreError;

/// Pure state transition `(state, action) -> next state`
pub trait Reducer<S, A> {
    /// Compute the next state
    fn reduce(&self, state: Option<&Arc<S>>, action: &A) -> Result<Arc<S>, StoreError>;

    /// Check that the reducer can drive a store
    fn check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Plain functions and closures are reducers.
///
/// Returning `None` means the function produced no state, which breaks the
/// reducer contract and surfaces as [`StoreError::ReducerContract`].
impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<&Arc<S>>, &A) -> Option<Arc<S>>,
{
    fn reduce(&self, state: Option<&Arc<S>>, action: &A) -> Result<Arc<S>, StoreError> {
        self(state, action).ok_or(StoreError::ReducerContract { slice: None })
    }
}

/// Current state, or `default` when the reducer runs for the first time
///
/// Slice reducers use this to supply their initial value.
pub fn or_default<S: Default>(state: Option<&Arc<S>>) -> Arc<S> {
    state.cloned().unwrap_or_default()
}

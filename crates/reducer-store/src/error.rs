//! Error taxonomy of the store
//!
//! All variants are programmer errors: they are returned to the caller of
//! `Store::new`/`Store::dispatch` immediately and never retried internally.

use thiserror::Error;

/// Errors raised by the store, the reducer contract and the combinator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The dispatched action has no usable discriminant
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },

    /// The reducer cannot drive a store
    #[error("Invalid reducer: {reason}")]
    InvalidReducer { reason: String },

    /// A reducer produced no next state
    #[error("{}", contract_message(.slice))]
    ReducerContract { slice: Option<String> },

    /// `dispatch` was called while a reducer of the same store was running
    #[error("Reducers may not dispatch actions")]
    ReentrantDispatch,
}

impl StoreError {
    pub(crate) fn invalid_action(reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_reducer(reason: impl Into<String>) -> Self {
        Self::InvalidReducer {
            reason: reason.into(),
        }
    }
}

fn contract_message(slice: &Option<String>) -> String {
    match slice {
        Some(key) => format!("Reducer for slice \"{}\" returned no state", key),
        None => "Reducer returned no state".to_string(),
    }
}

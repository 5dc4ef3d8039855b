//! Reducer Store
//!
//! A small, single-threaded Redux-style state container:
//! - one authoritative state value per [`Store`], replaced only by `dispatch`
//! - pure [`Reducer`]s computing the next state from the current one and an [`Action`]
//! - [`combine_reducers`] to compose named slice reducers into one over a [`StateTree`]
//! - synchronous, ordered listener notification via [`Store::subscribe`]
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use reducer_store::{combine_reducers, or_default, Action, RecordAction, StateTree, Store};
//!
//! #[derive(Debug, Default)]
//! struct Counter {
//!     counter: i64,
//! }
//!
//! fn counter(state: Option<&Arc<Counter>>, action: &RecordAction) -> Option<Arc<Counter>> {
//!     let state = or_default(state);
//!     match action.action_type()? {
//!         "INC_COUNTER" => Some(Arc::new(Counter { counter: state.counter + 1 })),
//!         _ => Some(state),
//!     }
//! }
//!
//! let reducer = combine_reducers().slice("counter", counter).build()?;
//! let store: Store<StateTree, RecordAction> = Store::new(reducer)?;
//!
//! let subscription = store.subscribe(|| println!("state changed"));
//! store.dispatch(RecordAction::of_type("INC_COUNTER"))?;
//! subscription.unsubscribe();
//!
//! assert_eq!(store.state().slice::<Counter>("counter").unwrap().counter, 1);
//! # Ok::<(), reducer_store::StoreError>(())
//! ```

mod action;
mod combine;
mod error;
mod listener;
mod reducer;
mod state_tree;
mod store;

pub use action::{Action, RecordAction, INIT_ACTION_TYPE, TYPE_FIELD};
pub use combine::{combine_reducers, CombineReducers, CombinedReducer};
pub use error::StoreError;
pub use listener::{ListenerId, Subscription};
pub use reducer::{or_default, Reducer};
pub use state_tree::{Slice, SliceRef, StateTree};
pub use store::Store;

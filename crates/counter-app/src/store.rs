use reducer_store::{combine_reducers, CombinedReducer, StateTree, Store, StoreError};

use crate::actions::AppAction;
use crate::reducers::{reduce_counter, reduce_results};
use crate::state::{CounterState, COUNTER_SLICE, RESULTS_SLICE};

/// The application store: a combined `counter` + `results` state tree
pub type AppStore = Store<StateTree, AppAction>;

/// Root reducer composing every slice reducer of the application
pub fn root_reducer() -> Result<CombinedReducer<AppAction>, StoreError> {
    combine_reducers()
        .slice(COUNTER_SLICE, reduce_counter)
        .slice(RESULTS_SLICE, reduce_results)
        .build()
}

/// Create the application store
///
/// With `initial_counter` set, only the `counter` slice is preloaded; the
/// initialization pass fills in the `results` slice.
pub fn create_store(initial_counter: Option<i64>) -> Result<AppStore, StoreError> {
    let reducer = root_reducer()?;
    match initial_counter {
        Some(counter) => {
            let preloaded = StateTree::new().with_slice(COUNTER_SLICE, CounterState { counter });
            Store::with_state(reducer, preloaded)
        }
        None => Store::new(reducer),
    }
}

//! Counter Reducer
//!
//! Owns the `counter` slice.

use std::sync::Arc;

use reducer_store::or_default;

use crate::actions::AppAction;
use crate::state::CounterState;

/// Reduce counter state
///
/// Actions that do not touch the counter hand back the same `Arc`. An
/// arithmetic overflow yields no state, which the store reports as a
/// contract violation of the `counter` slice.
pub fn reduce_counter(
    state: Option<&Arc<CounterState>>,
    action: &AppAction,
) -> Option<Arc<CounterState>> {
    let state = or_default(state);
    let counter = match action {
        AppAction::IncCounter => state.counter.checked_add(1),
        AppAction::DecCounter => state.counter.checked_sub(1),
        AppAction::AddCounter { value } => state.counter.checked_add(*value),
        AppAction::SubCounter { value } => state.counter.checked_sub(*value),
        AppAction::Init
        | AppAction::StoreResult { .. }
        | AppAction::DeleteResult { .. }
        | AppAction::Unrecognized => return Some(state),
    };

    match counter {
        Some(counter) => Some(Arc::new(CounterState { counter })),
        None => {
            log::warn!("Counter overflow on {:?} at {}", action, state.counter);
            None
        }
    }
}

//! Results Reducer
//!
//! Owns the `results` slice: an ordered list of stored counter values, each
//! with an id assigned from the slice's own sequence.

use std::sync::Arc;

use reducer_store::or_default;

use crate::actions::AppAction;
use crate::state::{ResultsState, StoredResult};

/// Reduce result list state
pub fn reduce_results(
    state: Option<&Arc<ResultsState>>,
    action: &AppAction,
) -> Option<Arc<ResultsState>> {
    let state = or_default(state);
    match action {
        AppAction::StoreResult { result } => {
            let mut results = state.results.clone();
            results.push(StoredResult {
                id: state.next_id,
                value: *result,
            });
            Some(Arc::new(ResultsState {
                results,
                next_id: state.next_id + 1,
            }))
        }

        AppAction::DeleteResult { id } => {
            if !state.results.iter().any(|entry| entry.id == *id) {
                log::debug!("No stored result with id {}", id);
                return Some(state);
            }
            let results = state
                .results
                .iter()
                .filter(|entry| entry.id != *id)
                .cloned()
                .collect();
            Some(Arc::new(ResultsState {
                results,
                next_id: state.next_id,
            }))
        }

        AppAction::Init
        | AppAction::IncCounter
        | AppAction::DecCounter
        | AppAction::AddCounter { .. }
        | AppAction::SubCounter { .. }
        | AppAction::Unrecognized => Some(state),
    }
}

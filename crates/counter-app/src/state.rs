use reducer_store::StateTree;
use serde::Serialize;

/// Key of the counter slice in the combined state
pub const COUNTER_SLICE: &str = "counter";

/// Key of the result list slice in the combined state
pub const RESULTS_SLICE: &str = "results";

/// Counter slice state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CounterState {
    pub counter: i64,
}

/// One stored counter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredResult {
    pub id: u64,
    pub value: i64,
}

/// Result list slice state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultsState {
    pub results: Vec<StoredResult>,
    /// Id handed to the next stored result; never reused
    #[serde(skip)]
    pub next_id: u64,
}

/// Serializable view of the combined state
///
/// A missing slice (which the combined reducer never produces) shows up as
/// its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppSnapshot {
    pub counter: i64,
    pub results: Vec<StoredResult>,
}

impl AppSnapshot {
    pub fn of(state: &StateTree) -> Self {
        let counter = state
            .slice::<CounterState>(COUNTER_SLICE)
            .map(|slice| slice.counter)
            .unwrap_or_default();
        let results = state
            .slice::<ResultsState>(RESULTS_SLICE)
            .map(|slice| slice.results.clone())
            .unwrap_or_default();
        Self { counter, results }
    }
}

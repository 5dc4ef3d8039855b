use reducer_store::Action;
use serde::{Deserialize, Serialize};

/// Actions represent all possible state changes in the application.
///
/// The JSON form is a record tagged by `type`, e.g.
/// `{"type": "ADD_COUNTER", "value": 10}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AppAction {
    /// Dispatched once when the store is created
    #[serde(rename = "@@store/INIT")]
    #[strum(serialize = "@@store/INIT")]
    Init,

    /// ## Counter actions
    IncCounter,
    DecCounter,
    AddCounter { value: i64 },
    SubCounter { value: i64 },

    /// ## Result list actions
    /// Store a value in the result list; the slice assigns its id
    StoreResult { result: i64 },
    /// Delete the stored result with the given id
    DeleteResult { id: u64 },

    /// Any action type no reducer knows about
    #[serde(other)]
    Unrecognized,
}

impl Action for AppAction {
    fn action_type(&self) -> Option<&str> {
        Some(<&'static str>::from(self))
    }

    fn init() -> Self {
        AppAction::Init
    }
}

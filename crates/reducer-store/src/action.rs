//! Action contract
//!
//! An action is an immutable value describing a requested state transition.
//! The discriminant (`action_type`) identifies the transition kind; payload is
//! whatever else the value carries.
//!
//! Typed enums are the usual way to define actions. [`RecordAction`] covers
//! loosely shaped `{ "type": ..., ...payload }` records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Discriminant of the action the store dispatches once at creation
pub const INIT_ACTION_TYPE: &str = "@@store/INIT";

/// Field holding the discriminant of a record action
pub const TYPE_FIELD: &str = "type";

/// A value that can be dispatched to a store
pub trait Action {
    /// The transition kind, or `None` when the action has no usable discriminant
    fn action_type(&self) -> Option<&str>;

    /// The action dispatched while the store initializes.
    ///
    /// Reducers must treat it as unrecognized and fall back to their defaults.
    fn init() -> Self
    where
        Self: Sized;
}

/// Validate the discriminant of an action before it reaches a reducer
pub(crate) fn validate<A: Action>(action: &A) -> Result<(), StoreError> {
    match action.action_type() {
        None => Err(StoreError::invalid_action(
            "actions must carry a string \"type\" discriminant",
        )),
        Some("") => Err(StoreError::invalid_action(
            "action \"type\" must not be empty",
        )),
        Some(_) => Ok(()),
    }
}

/// A record-shaped action backed by a JSON value
///
/// Only a JSON object with a string `type` field is a valid action; anything
/// else is rejected by `Store::dispatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordAction(Value);

impl RecordAction {
    /// Wrap an arbitrary JSON value without validating it
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build a record with the given discriminant and no payload
    pub fn of_type(action_type: impl Into<String>) -> Self {
        let mut record = Map::new();
        record.insert(TYPE_FIELD.to_string(), Value::String(action_type.into()));
        Self(Value::Object(record))
    }

    /// Add a payload field, returning the updated record
    ///
    /// Has no effect when the record is not a JSON object.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Value::Object(record) = &mut self.0 {
            record.insert(field.into(), value.into());
        }
        self
    }

    /// Parse a record from its JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// Borrow a payload field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object()?.get(name)
    }

    /// Read a payload field as a typed value
    pub fn payload<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.field(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Convert the whole record into a typed action
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Action for RecordAction {
    fn action_type(&self) -> Option<&str> {
        self.field(TYPE_FIELD)?.as_str()
    }

    fn init() -> Self {
        Self::of_type(INIT_ACTION_TYPE)
    }
}

impl From<Value> for RecordAction {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

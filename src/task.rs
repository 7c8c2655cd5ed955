// Task record and typed field mutation

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Unique task identifier, allocated by [`crate::IdSequence`]
pub type TaskId = u64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    #[serde(default)]
    pub is_done: bool,
    /// UI mode flag, not business state
    #[serde(default)]
    pub is_editing: bool,
    /// Elapsed timer seconds, only ever incremented
    #[serde(default)]
    pub seconds: u64,
}

/// Mutable fields of a [`Task`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    IsDone,
    IsEditing,
    Seconds,
}

/// Value held by a task field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Int(u64),
}

/// How a field is rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Negate a boolean field
    Toggle,
    /// Add one to an integer field
    Increment,
    /// Replace the field outright
    Value(FieldValue),
}

impl Task {
    /// Build a task with every flag and counter at its default
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            is_done: false,
            is_editing: false,
            seconds: 0,
        }
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Description => FieldValue::Text(self.description.clone()),
            Field::IsDone => FieldValue::Bool(self.is_done),
            Field::IsEditing => FieldValue::Bool(self.is_editing),
            Field::Seconds => FieldValue::Int(self.seconds),
        }
    }

    /// Apply a change to a field.
    ///
    /// Returns false, leaving the task untouched, when the change does not fit
    /// the field's type (toggling text, incrementing a flag, assigning a value
    /// of the wrong kind).
    pub fn apply(&mut self, field: Field, change: &Change) -> bool {
        match (field, change) {
            (Field::IsDone, Change::Toggle) => self.is_done = !self.is_done,
            (Field::IsEditing, Change::Toggle) => self.is_editing = !self.is_editing,
            (Field::Seconds, Change::Increment) => self.seconds = self.seconds.saturating_add(1),
            (Field::Description, Change::Value(FieldValue::Text(text))) => self.description = text.clone(),
            (Field::IsDone, Change::Value(FieldValue::Bool(b))) => self.is_done = *b,
            (Field::IsEditing, Change::Value(FieldValue::Bool(b))) => self.is_editing = *b,
            (Field::Seconds, Change::Value(FieldValue::Int(n))) if *n >= self.seconds => self.seconds = *n,
            _ => {
                warn!(id = self.id, ?field, ?change, "Change does not apply to field, skipping");
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Description => write!(f, "description"),
            Field::IsDone => write!(f, "is_done"),
            Field::IsEditing => write!(f, "is_editing"),
            Field::Seconds => write!(f, "seconds"),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A mapping of field names to their validation error message
pub type ValidationErrors = BTreeMap<String, String>;

/// A failed validation pass, carrying one message per offending field
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", join_messages(.errors))]
pub struct ValidationError {
    pub errors: ValidationErrors,
}

impl ValidationError {
    /// Create a new validation error with a single field and message
    pub fn new(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(field.to_string(), message.to_string());
        Self { errors }
    }

    /// Combine two validation errors. A field already present in `self`
    /// keeps its message.
    pub fn combine(mut self, other: ValidationError) -> Self {
        for (field, message) in other.errors {
            self.errors.entry(field).or_insert(message);
        }
        self
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        join_messages(&self.errors)
    }
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        Self { errors }
    }
}

fn join_messages(errors: &ValidationErrors) -> String {
    errors
        .values()
        .cloned()
        .collect::<Vec<String>>()
        .join(", ")
}

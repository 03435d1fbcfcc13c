use serde::Serialize;

use super::error::{ValidationError, ValidationErrors};

/// Collects named validation failures for a single validation pass.
///
/// Each field keeps the first message recorded for it; later failures for
/// the same field are ignored. Entries iterate in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no error has been recorded
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` for `key` unless `key` already has an error.
    pub fn add_error(&mut self, key: &str, message: &str) {
        if self.errors.contains_key(key) {
            tracing::trace!(field = %key, message = %message, "field already failed, keeping first message");
            return;
        }

        tracing::debug!(field = %key, message = %message, "validation error recorded");
        self.errors.insert(key.to_string(), message.to_string());
    }

    /// Record `message` for `key` when `ok` is false.
    pub fn check(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_error(key, message);
        }
    }

    /// Fold another validator's errors into this one.
    pub fn merge(&mut self, other: Validator) {
        for (key, message) in other.errors {
            self.add_error(&key, &message);
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// Turn the collected errors into a `Result` so callers can bail out with `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.valid() {
            return Ok(());
        }

        tracing::debug!(error_count = self.errors.len(), "validation failed");
        Err(ValidationError::from(self.errors))
    }
}

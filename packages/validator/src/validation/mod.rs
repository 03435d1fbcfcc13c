pub mod error;
pub mod field_validators;
pub mod input_validator;
pub mod predicates;
pub mod validator;

// Re-export common types and functions
pub use error::{ValidationError, ValidationErrors};
pub use field_validators::{max_chars, min_chars, not_blank, FieldValidator};
pub use input_validator::InputValidator;
pub use predicates::{matches, permitted_value, unique, unique_hashed, EMAIL_RX};
pub use validator::Validator;

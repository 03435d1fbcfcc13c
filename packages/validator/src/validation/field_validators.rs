use super::predicates::{matches, EMAIL_RX};
use super::validator::Validator;

/// Returns true if `value` has any non-whitespace content.
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns true if `value` has at least `n` characters.
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// Returns true if `value` has at most `n` characters.
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_email(v: &mut Validator, email: &str) {
        if !not_blank(email) {
            v.add_error("email", "Email cannot be empty");
            return;
        }

        v.check(matches(email, &EMAIL_RX), "email", "Email format is invalid");
    }

    pub fn validate_required_string(v: &mut Validator, value: &str, field_name: &str) {
        if !not_blank(value) {
            v.add_error(field_name, &format!("{} cannot be empty", field_name));
        }
    }
}

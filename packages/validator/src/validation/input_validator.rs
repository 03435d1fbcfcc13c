use super::error::ValidationError;
use super::validator::Validator;

/// Implemented by input records that validate their own fields.
pub trait InputValidator {
    /// Record a failure on `v` for every field that does not pass.
    fn check_fields(&self, v: &mut Validator);

    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        self.check_fields(&mut v);
        v.into_result()
    }

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

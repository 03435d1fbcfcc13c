use tracing_subscriber::EnvFilter;

use crate::validation::{
    max_chars, permitted_value, unique, FieldValidator, InputValidator, Validator,
};

pub const PERMITTED_ROLES: [&str; 3] = ["admin", "editor", "viewer"];

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct RegistrationInput {
    pub email: String,
    pub name: String,
    pub role: String,
    pub tags: Vec<String>,
}

impl InputValidator for RegistrationInput {
    fn check_fields(&self, v: &mut Validator) {
        FieldValidator::validate_email(v, &self.email);
        FieldValidator::validate_required_string(v, &self.name, "name");
        v.check(
            max_chars(&self.name, 100),
            "name",
            "name must not be more than 100 characters",
        );
        v.check(
            permitted_value(&self.role.as_str(), &PERMITTED_ROLES),
            "role",
            "Role is not permitted",
        );
        v.check(unique(&self.tags), "tags", "Values must be unique");
    }
}

pub fn valid_registration() -> RegistrationInput {
    RegistrationInput {
        email: "test@example.com".to_string(),
        name: "Alice".to_string(),
        role: "editor".to_string(),
        tags: vec!["rust".to_string(), "go".to_string()],
    }
}

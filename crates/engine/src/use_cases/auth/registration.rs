//! Sign-up form checks that run before anything reaches the identity service.

use sportsched_domain::Role;

use crate::use_cases::validation::{require_min_length, require_non_empty, ValidationError};

/// Minimum password length accepted by `register`.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Raw sign-up form input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub role: Role,
}

impl RegistrationForm {
    /// Check required fields, password length and confirmation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_registration(&self.email, &self.password, &self.name)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::Invalid {
                field_name: "Confirm password",
                reason: "Passwords do not match".to_string(),
            });
        }
        Ok(())
    }
}

/// Field rules shared by the form and the service.
pub(crate) fn validate_registration(
    email: &str,
    password: &str,
    name: &str,
) -> Result<(), ValidationError> {
    require_non_empty(name, "Name")?;
    require_non_empty(email, "Email")?;
    require_min_length(password, MIN_PASSWORD_LENGTH, "Password")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            email: "jane@x.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            name: "Jane".to_string(),
            role: Role::Player,
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn mismatched_confirmation_fails() {
        let mut f = form();
        f.confirm_password = "secret2".to_string();
        let err = f.validate().unwrap_err();
        assert!(err.to_string().contains("Passwords do not match"));
    }

    #[test]
    fn short_password_fails_before_confirmation() {
        let mut f = form();
        f.password = "abc".to_string();
        f.confirm_password = "xyz".to_string();
        assert_eq!(
            f.validate(),
            Err(ValidationError::TooShort {
                field_name: "Password",
                min: MIN_PASSWORD_LENGTH
            })
        );
    }

    #[test]
    fn blank_name_fails() {
        let mut f = form();
        f.name = " ".to_string();
        assert!(matches!(f.validate(), Err(ValidationError::Empty { field_name: "Name" })));
    }
}

//! Advisory checks run before the auth forms are posted.

use crate::config::MIN_PASSWORD_LENGTH;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LENGTH
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }
}

impl SignupForm {
    /// Reports the first failing check only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let email = self.email.trim();

        if self.username.trim().is_empty()
            || email.is_empty()
            || self.full_name.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if password_too_short(&self.password) {
            return Err(ValidationError::PasswordTooShort);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    pub fn password_match(&self) -> PasswordMatch {
        PasswordMatch::check(&self.password, &self.confirm_password)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    Pending,
    Match,
    Mismatch,
}

impl PasswordMatch {
    pub fn check(password: &str, confirm: &str) -> Self {
        if confirm.is_empty() {
            PasswordMatch::Pending
        } else if password == confirm {
            PasswordMatch::Match
        } else {
            PasswordMatch::Mismatch
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PasswordMatch::Pending => "Both passwords must match",
            PasswordMatch::Match => "Passwords match",
            PasswordMatch::Mismatch => "Passwords do not match",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            PasswordMatch::Pending => "text-xs text-gray-500",
            PasswordMatch::Match => "text-xs text-green-600",
            PasswordMatch::Mismatch => "text-xs text-red-600",
        }
    }
}

/// Live hint shown under the signup password while it is too short.
pub fn password_length_flagged(password: &str) -> bool {
    !password.is_empty() && password_too_short(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            username: "maya".to_string(),
            email: "maya@example.com".to_string(),
            full_name: "Maya Ortiz".to_string(),
            password: "correcthorse".to_string(),
            confirm_password: "correcthorse".to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            username: "   ".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let form = LoginForm {
            username: "maya".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let form = LoginForm {
            username: "maya".to_string(),
            password: " ".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_valid_signup_passes() {
        assert_eq!(valid_signup().validate(), Ok(()));
    }

    #[test]
    fn test_signup_missing_fields() {
        let mut form = valid_signup();
        form.full_name = "  ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let mut form = valid_signup();
        form.confirm_password.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_signup_checks_run_in_order() {
        let mut form = valid_signup();
        form.password = "short".to_string();
        form.confirm_password = "other".to_string();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));

        form.password = "longenough".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        form.confirm_password = "longenough".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_password_match_status() {
        assert_eq!(PasswordMatch::check("abc", ""), PasswordMatch::Pending);
        assert_eq!(PasswordMatch::check("abc", "abc"), PasswordMatch::Match);
        assert_eq!(PasswordMatch::check("abc", "abd"), PasswordMatch::Mismatch);
        assert_eq!(PasswordMatch::Mismatch.message(), "Passwords do not match");
    }

    #[test]
    fn test_password_length_hint() {
        assert!(!password_length_flagged(""));
        assert!(password_length_flagged("1234567"));
        assert!(!password_length_flagged("12345678"));
    }
}

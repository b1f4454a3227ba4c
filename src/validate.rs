//! Form validation for the auth screens.
//!
//! Field rules and messages match the registration form: names required, a
//! plausible email shape, and a password with a minimum of structure.

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// One field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

const PASSWORD_STRUCTURE_MESSAGE: &str = "Password must contain at least one uppercase letter, \
     one lowercase letter, one number, and one special character";

/// Validates the registration form. An empty result means the form is good.
pub fn registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if first_name.trim().is_empty() {
        errors.push(err(Field::FirstName, "First name is required"));
    }
    if last_name.trim().is_empty() {
        errors.push(err(Field::LastName, "Last name is required"));
    }
    errors.extend(email_field(email));
    if password.is_empty() {
        errors.push(err(Field::Password, "Password is required"));
    } else if password.len() < 8 {
        errors.push(err(Field::Password, "Password must be at least 8 characters"));
    } else if !has_structure(password) {
        errors.push(err(Field::Password, PASSWORD_STRUCTURE_MESSAGE));
    }
    if confirm_password.is_empty() {
        errors.push(err(Field::ConfirmPassword, "Confirm password is required"));
    } else if confirm_password != password {
        errors.push(err(Field::ConfirmPassword, "Passwords must match"));
    }
    errors
}

/// Validates the login form: both fields present, email well-shaped.
pub fn login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = email_field(email);
    if password.is_empty() {
        errors.push(err(Field::Password, "Password is required"));
    }
    errors
}

/// Validates a lone email field (forgot password).
pub fn email_field(email: &str) -> Vec<FieldError> {
    if email.trim().is_empty() {
        vec![err(Field::Email, "Email is required")]
    } else if looks_like_email(email) {
        Vec::new()
    } else {
        vec![err(Field::Email, "Invalid email address")]
    }
}

/// The message for a given field, if that field failed.
pub fn message_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn err(field: Field, message: &'static str) -> FieldError {
    FieldError { field, message }
}

/// `local@domain.tld`, nothing fancier.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// At least one lowercase, one uppercase, one digit, and one of `@$!%*?&`.
fn has_structure(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| "@$!%*?&".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_registration_passes() {
        let errors = registration("Alex", "Johnson", "alex@example.com", "Passw0rd!", "Passw0rd!");
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_names_are_reported() {
        let errors = registration("", "  ", "alex@example.com", "Passw0rd!", "Passw0rd!");
        assert_eq!(
            message_for(&errors, Field::FirstName),
            Some("First name is required")
        );
        assert_eq!(
            message_for(&errors, Field::LastName),
            Some("Last name is required")
        );
    }

    #[test]
    fn empty_email_beats_shape_check() {
        let errors = email_field("");
        assert_eq!(message_for(&errors, Field::Email), Some("Email is required"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["alex", "alex@", "@example.com", "alex@example", "alex@x.", "a@b@c.com"] {
            let errors = email_field(email);
            assert_eq!(
                message_for(&errors, Field::Email),
                Some("Invalid email address"),
                "{email} should be rejected"
            );
        }
        assert!(email_field("alex@example.com").is_empty());
    }

    #[test]
    fn short_password_is_rejected_before_structure() {
        let errors = registration("A", "J", "a@b.com", "aB1!", "aB1!");
        assert_eq!(
            message_for(&errors, Field::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn unstructured_password_is_rejected() {
        let errors = registration("A", "J", "a@b.com", "password123", "password123");
        assert_eq!(
            message_for(&errors, Field::Password),
            Some(PASSWORD_STRUCTURE_MESSAGE)
        );
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let errors = registration("A", "J", "a@b.com", "Passw0rd!", "Passw0rd?");
        assert_eq!(
            message_for(&errors, Field::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = login("", "");
        assert_eq!(message_for(&errors, Field::Email), Some("Email is required"));
        assert_eq!(
            message_for(&errors, Field::Password),
            Some("Password is required")
        );
        assert!(login("alex@example.com", "hunter2").is_empty());
    }
}

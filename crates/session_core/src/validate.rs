//! Synchronous format checks run before any credential check is attempted.

use shared::error::{EmailError, PasswordError, ValidationReport};

const PASSWORD_MIN_CHARS: usize = 6;

pub fn validate(email: &str, password: &str) -> ValidationReport {
    ValidationReport {
        email: validate_email(email),
        password: validate_password(password),
    }
}

fn validate_email(email: &str) -> Option<EmailError> {
    if email.is_empty() {
        return Some(EmailError::Missing);
    }
    if !email_has_valid_shape(email) {
        return Some(EmailError::InvalidFormat);
    }
    None
}

fn email_has_valid_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

fn validate_password(password: &str) -> Option<PasswordError> {
    if password.is_empty() {
        return Some(PasswordError::Missing);
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Some(PasswordError::TooShort);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_required() {
        let report = validate("", "longenough");
        assert_eq!(report.email, Some(EmailError::Missing));
        assert_eq!(report.email.unwrap().to_string(), "Email is required");
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let report = validate("adminskyline.com", "longenough");
        assert_eq!(report.email, Some(EmailError::InvalidFormat));
    }

    #[test]
    fn email_without_domain_dot_is_invalid() {
        assert_eq!(
            validate("admin@skyline", "longenough").email,
            Some(EmailError::InvalidFormat)
        );
        assert_eq!(
            validate("admin@skyline.", "longenough").email,
            Some(EmailError::InvalidFormat)
        );
        assert_eq!(
            validate("admin@.com", "longenough").email,
            Some(EmailError::InvalidFormat)
        );
    }

    #[test]
    fn email_with_whitespace_or_extra_at_is_invalid() {
        assert_eq!(
            validate("admin @skyline.com", "longenough").email,
            Some(EmailError::InvalidFormat)
        );
        assert_eq!(
            validate("admin@@skyline.com", "longenough").email,
            Some(EmailError::InvalidFormat)
        );
        assert_eq!(
            validate("@skyline.com", "longenough").email,
            Some(EmailError::InvalidFormat)
        );
    }

    #[test]
    fn plausible_emails_pass() {
        for email in ["admin@skyline.com", "a@b.c", "first.last@sub.example.org"] {
            assert_eq!(validate(email, "longenough").email, None, "{email}");
        }
    }

    #[test]
    fn empty_password_is_required() {
        let report = validate("admin@skyline.com", "");
        assert_eq!(report.password, Some(PasswordError::Missing));
        assert_eq!(report.password.unwrap().to_string(), "Password is required");
    }

    #[test]
    fn short_passwords_are_rejected() {
        for password in ["1", "12345"] {
            let report = validate("admin@skyline.com", password);
            assert_eq!(report.password, Some(PasswordError::TooShort), "{password}");
        }
        assert_eq!(
            validate("admin@skyline.com", "12345")
                .password
                .unwrap()
                .to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn six_character_password_passes() {
        assert_eq!(validate("admin@skyline.com", "123456").password, None);
    }

    #[test]
    fn report_is_clean_iff_both_fields_pass() {
        assert!(validate("admin@skyline.com", "admin123").is_clean());
        assert!(!validate("", "").is_clean());
        assert!(!validate("admin@skyline.com", "12345").is_clean());
        assert!(!validate("admin@skyline", "admin123").is_clean());
    }
}

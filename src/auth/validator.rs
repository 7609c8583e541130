//! Form Validation
//!
//! Stateless validation of the auth form. Every applicable rule is
//! evaluated; all failures are returned together rather than first-wins.

use super::models::{AuthMode, FieldErrors, SignupForm};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates the form for the given mode and returns one message per
/// failing field. An empty map means the form is valid.
pub fn validate(form: &SignupForm, mode: AuthMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email".to_string());
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }

    if mode == AuthMode::SignUp {
        if form.first_name.is_empty() {
            errors.insert("firstName", "First name is required".to_string());
        }
        if form.last_name.is_empty() {
            errors.insert("lastName", "Last name is required".to_string());
        }
        if form.confirm_password.is_empty() {
            errors.insert("confirmPassword", "Please confirm your password".to_string());
        } else if form.password != form.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match".to_string());
        }
        if !form.accept_terms {
            errors.insert(
                "acceptTerms",
                "You must accept the terms and conditions".to_string(),
            );
        }
    }

    errors
}

/// Checks the `local@domain.tld` shape: non-empty local and domain parts
/// with no whitespace or extra `@`, and a dot inside the domain.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };

    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');

    let (host, tld) = match domain.rsplit_once('.') {
        Some(split) => split,
        None => return false,
    };

    clean(local) && clean(host) && clean(tld)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup_form() -> SignupForm {
        SignupForm {
            email: "john@example.com".to_string(),
            password: "hunter42".to_string(),
            confirm_password: "hunter42".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn valid_forms_produce_no_errors() {
        assert!(validate(&valid_signup_form(), AuthMode::SignUp).is_empty());

        let login = SignupForm {
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(validate(&login, AuthMode::SignIn).is_empty());
    }

    #[test]
    fn empty_form_collects_all_signup_errors() {
        let errors = validate(&SignupForm::default(), AuthMode::SignUp);
        for field in [
            "email",
            "password",
            "firstName",
            "lastName",
            "confirmPassword",
            "acceptTerms",
        ] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn signin_skips_signup_only_fields() {
        let errors = validate(&SignupForm::default(), AuthMode::SignIn);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for bad in ["plainaddress", "a@b", "a b@c.d", "@example.com", "a@.com", "a@@b.com"] {
            let form = SignupForm {
                email: bad.to_string(),
                ..valid_signup_form()
            };
            let errors = validate(&form, AuthMode::SignUp);
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Please enter a valid email"),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn short_password_gets_length_error() {
        let form = SignupForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid_signup_form()
        };
        let errors = validate(&form, AuthMode::SignUp);
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_confirm_password_flags_only_that_field() {
        let form = SignupForm {
            confirm_password: String::new(),
            ..valid_signup_form()
        };
        let errors = validate(&form, AuthMode::SignUp);
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Please confirm your password")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn mismatched_passwords_produce_no_spurious_errors() {
        let form = SignupForm {
            confirm_password: "different".to_string(),
            ..valid_signup_form()
        };
        let errors = validate(&form, AuthMode::SignUp);
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords do not match")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unaccepted_terms_are_flagged_in_signup_only() {
        let form = SignupForm {
            accept_terms: false,
            ..valid_signup_form()
        };
        assert!(validate(&form, AuthMode::SignUp).contains_key("acceptTerms"));
        assert!(validate(&form, AuthMode::SignIn).is_empty());
    }

    #[test]
    fn email_shape_accepts_subdomains() {
        let form = SignupForm {
            email: "dev@mail.example.co.uk".to_string(),
            ..valid_signup_form()
        };
        assert!(validate(&form, AuthMode::SignUp).is_empty());
    }
}

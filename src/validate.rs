//! Client-side field validation.
//!
//! Pure checks, surfaced inline or as toasts; a submission that fails here
//! never reaches the network.

pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const FIRST_NAME_REQUIRED: &str = "First name is required.";
pub const LAST_NAME_REQUIRED: &str = "Last name is required.";

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, no
/// whitespace, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Which login field a validation error belongs to, so the form can show it
/// next to the right input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// First failing login check, if any. Checks run in field order and stop at
/// the first failure.
pub fn validate_login(email: &str, password: &str) -> Result<(), (LoginField, &'static str)> {
    if !is_valid_email(email) {
        return Err((LoginField::Email, EMAIL_INVALID));
    }
    if password.trim().is_empty() {
        return Err((LoginField::Password, PASSWORD_REQUIRED));
    }
    Ok(())
}

/// First failing signup check, if any.
pub fn validate_signup(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), &'static str> {
    if first_name.trim().is_empty() {
        return Err(FIRST_NAME_REQUIRED);
    }
    if last_name.trim().is_empty() {
        return Err(LAST_NAME_REQUIRED);
    }
    if !is_valid_email(email) {
        return Err(EMAIL_INVALID);
    }
    if password.trim().is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(())
}

/// Validation utilities for form input
///
/// Client-side checks only cover what a browser form would enforce (required
/// fields, email shape) plus password confirmation. Everything else is the
/// server's call.

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// First failure in `checks`, in order
pub fn first_error(checks: impl IntoIterator<Item = ValidationResult>) -> Option<String> {
    checks.into_iter().find_map(|check| check.error)
}

/// Validate that a field was filled in
pub fn validate_required(label: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", label));
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Invalid email format");
    }

    if parts[1].is_empty() || parts[1].starts_with('.') || parts[1].ends_with('.') {
        return ValidationResult::err("Invalid email domain");
    }

    if email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Invalid email format");
    }

    ValidationResult::ok()
}

/// Validate that the password and its confirmation agree
pub fn validate_password_match(password: &str, confirm: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password != confirm {
        return ValidationResult::err("Passwords do not match");
    }

    ValidationResult::ok()
}

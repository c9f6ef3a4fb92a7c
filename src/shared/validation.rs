//! Field normalization shared by the submission forms.
//!
//! Required fields are stored trimmed. Optional fields are trimmed and
//! collapse to `None` when nothing is left, so the store never holds `""`
//! for a field the visitor left blank.

use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError};

/// Trim a required text field.
pub fn normalize_required(value: &str) -> String {
    value.trim().to_string()
}

/// Trim an optional text field; blank or missing becomes `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// True when the value has no visible characters.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Email syntax check on the trimmed value.
///
/// The domain must contain a dot, so `ana@localhost` is rejected.
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    let email = value.trim();
    let dotted_domain = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));

    if dotted_domain && email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed("Invalid email format")))
    }
}

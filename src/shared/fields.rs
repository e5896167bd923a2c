//! Normalisation shared by the per-entity `*Fields` constructors.

/// Trimmed value, or `None` when blank.
pub fn required_text(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// Optional strings are stored as absent when omitted, null or blank.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.and_then(required_text)
}

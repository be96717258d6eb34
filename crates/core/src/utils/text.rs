//! Free-text input sanitizers shared by the services.

/// Trims optional free-text input, mapping whitespace-only values to None.
pub fn sanitize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims a required text field, erroring when nothing remains.
pub fn sanitize_required_text(value: &str, field_label: &str) -> crate::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::Error::Validation(
            crate::errors::ValidationError::InvalidInput(format!("{} is required", field_label)),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_optional_text() {
        assert_eq!(
            sanitize_optional_text(Some(" hi ".to_string())),
            Some("hi".to_string())
        );
        assert_eq!(sanitize_optional_text(Some("   ".to_string())), None);
        assert_eq!(sanitize_optional_text(None), None);
    }

    #[test]
    fn test_sanitize_required_text() {
        assert_eq!(
            sanitize_required_text(" Vendor ", "Vendor name").unwrap(),
            "Vendor"
        );
        assert!(sanitize_required_text("  ", "Vendor name").is_err());
    }
}

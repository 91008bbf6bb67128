use crate::error::AppError;

// \x0b is vertical tab, \x0c is form feed.
const INVALID_VERSION_CHARS: [char; 5] = ['\n', '\r', '\t', '\x0b', '\x0c'];

/// Version strings must be non-empty, carry no leading or trailing
/// whitespace, and contain no control characters. Internal single spaces
/// are fine ("1.2.1 (123)" is a valid iOS-style version).
pub fn validate_version(version: &str) -> Result<(), AppError> {
    if version.is_empty() {
        return Err(AppError::validation("Release version is required"));
    }
    if version != version.trim() {
        return Err(AppError::validation(
            "Release version must not have leading or trailing whitespace",
        ));
    }
    if version
        .chars()
        .any(|c| INVALID_VERSION_CHARS.contains(&c))
    {
        return Err(AppError::validation(
            "Release version must not contain control characters",
        ));
    }
    Ok(())
}

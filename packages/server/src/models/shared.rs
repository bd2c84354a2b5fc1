use crate::error::AppError;

/// Validate a required text field (non-empty after trimming).
pub fn validate_required(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate a like count (must be >= 0).
pub fn validate_likes(likes: i64) -> Result<(), AppError> {
    if likes < 0 {
        return Err(AppError::Validation("likes must be >= 0".into()));
    }
    Ok(())
}

/// Validate a minimum length in Unicode characters.
pub fn validate_min_len(value: &str, field: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min} characters long"
        )));
    }
    Ok(())
}

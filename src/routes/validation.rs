use crate::constants::{
    ERR_COLOR_TOO_LONG, ERR_SESSION_ID_REQUIRED, ERR_SESSION_ID_TOO_LONG, MAX_COLOR_LEN,
};
use crate::error::{AppError, Result};
use crate::models::SettingsRecord;

/// Unwrap a field the client must send, naming it by its external name
pub fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AppError::InvalidInput(format!("{field} is required")))
}

/// Session IDs must be present, non-blank and within the length limit
pub fn require_session_id(value: Option<String>) -> Result<String> {
    let id = value.ok_or_else(|| AppError::InvalidInput(ERR_SESSION_ID_REQUIRED.to_string()))?;

    if id.trim().is_empty() {
        return Err(AppError::InvalidInput(ERR_SESSION_ID_REQUIRED.to_string()));
    }
    if !SettingsRecord::validate_session_id(&id) {
        return Err(AppError::InvalidInput(ERR_SESSION_ID_TOO_LONG.to_string()));
    }

    Ok(id)
}

/// Counts (balls, obstacles) can be zero but never negative
pub fn check_count(value: i64, field: &str) -> Result<i64> {
    if value < 0 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be zero or greater"
        )));
    }
    Ok(value)
}

/// Sizes must be finite and strictly positive
pub fn check_positive(value: f64, field: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(value)
}

/// Speeds and forces must be finite and not negative
pub fn check_non_negative(value: f64, field: &str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be zero or greater"
        )));
    }
    Ok(value)
}

/// Colour names are free-form but bounded
pub fn check_color(value: String) -> Result<String> {
    if value.chars().count() > MAX_COLOR_LEN {
        return Err(AppError::InvalidInput(ERR_COLOR_TOO_LONG.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::InvalidInput(msg) => msg,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "ballCount").unwrap(), 3);
        assert_eq!(
            message(require::<i64>(None, "ballCount").unwrap_err()),
            "ballCount is required"
        );
    }

    #[test]
    fn test_require_session_id() {
        assert_eq!(
            require_session_id(Some("abc".to_string())).unwrap(),
            "abc"
        );
        assert_eq!(
            message(require_session_id(None).unwrap_err()),
            ERR_SESSION_ID_REQUIRED
        );
        assert_eq!(
            message(require_session_id(Some("  ".to_string())).unwrap_err()),
            ERR_SESSION_ID_REQUIRED
        );
        assert_eq!(
            message(require_session_id(Some("a".repeat(129))).unwrap_err()),
            ERR_SESSION_ID_TOO_LONG
        );
    }

    #[test]
    fn test_numeric_bounds() {
        assert_eq!(check_count(0, "ballCount").unwrap(), 0);
        assert!(check_count(-1, "ballCount").is_err());

        assert_eq!(check_positive(0.5, "ballRadius").unwrap(), 0.5);
        assert!(check_positive(0.0, "ballRadius").is_err());
        assert!(check_positive(f64::INFINITY, "ballRadius").is_err());

        assert_eq!(check_non_negative(0.0, "jumpForce").unwrap(), 0.0);
        assert!(check_non_negative(-0.1, "jumpForce").is_err());
        assert!(check_non_negative(f64::NAN, "jumpForce").is_err());
    }

    #[test]
    fn test_check_color() {
        assert_eq!(check_color("red".to_string()).unwrap(), "red");
        assert!(check_color("x".repeat(MAX_COLOR_LEN + 1)).is_err());
    }
}

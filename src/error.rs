//! Error types for sampling and tessellation

use thiserror::Error;

/// Errors that can occur during sampling, tessellation or diagram queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoronoiError {
    /// An input failed validation before any work was done
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Requested cell index does not exist
    #[error("cell not found: {0}")]
    CellNotFound(usize),
}

/// Result type alias for sampling and tessellation operations
pub type Result<T> = std::result::Result<T, VoronoiError>;

/// Fail with `InvalidArgument` unless `value` is finite and strictly positive
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(VoronoiError::InvalidArgument(format!(
            "{} must be positive and finite (got {})",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("width", 1.5).is_ok());
        assert!(ensure_positive("width", 0.0).is_err());
        assert!(ensure_positive("width", -2.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
        assert!(ensure_positive("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = VoronoiError::InvalidArgument("min_dist must be positive".into());
        assert_eq!(err.to_string(), "invalid argument: min_dist must be positive");
        assert_eq!(VoronoiError::CellNotFound(7).to_string(), "cell not found: 7");
    }
}

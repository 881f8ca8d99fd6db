//! Result type alias for Privlens
//!
//! Provides a convenient Result type alias that uses [`PrivlensError`]
//! as the error type.

use super::errors::PrivlensError;

/// Result type alias for Privlens operations
///
/// # Examples
///
/// ```
/// use privlens::domain::result::Result;
/// use privlens::domain::errors::PrivlensError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PrivlensError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PrivlensError>;

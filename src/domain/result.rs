//! Result type alias for partex
//!
//! This module provides a convenient Result type alias that uses PartexError
//! as the error type.

use super::errors::PartexError;

/// Result type alias for partex operations
///
/// This is a convenience type alias that uses `PartexError` as the error
/// type. Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use partex::domain::result::Result;
/// use partex::domain::errors::PartexError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PartexError::Other("failed".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PartexError>;

//! Pass-through validators
//!
//! Each validator returns its input unchanged when it is acceptable, so it
//! can sit inline in an iterator chain or a `?` expression.

use std::path::Path;

use crate::error::{HelperError, Result};

/// Ensures a number is usable in arithmetic
///
/// # Arguments
/// - `value` - The number to check
///
/// # Returns
/// `Ok(value)` for any finite number, `Err(HelperError::InvalidNumber)` for
/// NaN and positive or negative infinity
pub fn check_for_valid_number(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HelperError::InvalidNumber(value.to_string()))
    }
}

/// Ensures something exists at a filesystem path
///
/// Performs a synchronous stat. Directories count as existing.
///
/// # Returns
/// The same path reference, or `Err(HelperError::NotFound)`
pub fn check_file_exists<P>(path: &P) -> Result<&P>
where
    P: AsRef<Path> + ?Sized,
{
    if path.as_ref().exists() {
        Ok(path)
    } else {
        Err(HelperError::NotFound(path.as_ref().to_path_buf()))
    }
}

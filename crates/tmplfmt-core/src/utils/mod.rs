//! Typed helpers for string formatting, validation and record handling.

pub mod collections;
pub mod format;
pub mod validation;

// Re-export commonly used functions at module level
pub use collections::{drain_into_chunks, get_total, split_array_into_chunks};
pub use format::{
    capital_case, format_number, format_number_with, slice_string, DEFAULT_DECIMAL_PLACES,
    ELLIPSIS,
};
pub use validation::{check_file_exists, check_for_valid_number};

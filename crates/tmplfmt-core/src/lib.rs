//! tmplfmt core - shared helpers for template formatting.
//!
//! Small, stateless functions for truncating and title-casing text,
//! rendering numbers with grouping separators, validating numbers and paths,
//! summing record fields and chunking lists.
//!
//! - [`utils`]: typed helpers taking plain Rust values
//! - [`values`]: the same operations over `serde_json::Value` template data,
//!   with runtime type checks
//! - [`PropertyPath`]: dotted/bracketed paths into nested JSON
//! - [`FormatConfig`]: default decimal places and number locale

pub mod config;
pub mod error;
pub mod path;
pub mod utils;
pub mod values;

pub use config::{FormatConfig, NumberLocale};
pub use error::{ErrorKind, HelperError, Result};
pub use path::PropertyPath;
pub use utils::{
    capital_case, check_file_exists, check_for_valid_number, drain_into_chunks, format_number,
    format_number_with, get_total, slice_string, split_array_into_chunks,
};
pub use values::ValueType;

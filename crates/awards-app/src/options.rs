// Rust guideline compliant 2026-10-19

//! Parsing helpers for view options supplied on the command line.

use crate::error::{AppError, Result};
use awards_core::{FilterType, SortBy, SortOrder};

/// Parses a filter name into a `FilterType`.
///
/// # Errors
///
/// Returns an error if the name is not `all`, `funny` or `serious`.
pub fn parse_filter_type(value: &str) -> Result<FilterType> {
    FilterType::from_name(value)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid filter: {}", value)))
}

/// Parses a sort field name into a `SortBy`.
///
/// # Errors
///
/// Returns an error if the name is not `probability`, `date` or `votes`.
pub fn parse_sort_by(value: &str) -> Result<SortBy> {
    SortBy::from_name(value)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid sort field: {}", value)))
}

/// Parses a sort direction into a `SortOrder`.
///
/// # Errors
///
/// Returns an error if the name is not `asc` or `desc`.
pub fn parse_sort_order(value: &str) -> Result<SortOrder> {
    SortOrder::from_name(value)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid sort order: {}", value)))
}

//! Validation helper functions for the MCP tool boundary
//!
//! This module contains validation logic for required text fields, date and
//! recurrence parsing, and list-reference validation.

use crate::model::{GroupMode, LifeData, Recurrence};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Validate that a required text field is non-empty after trimming
///
/// # Arguments
/// * `value` - The raw field value
/// * `field` - Field name used in the error message ("name", "title")
///
/// # Returns
/// The trimmed value, or an error when nothing remains.
pub fn require_text<'a>(value: &'a str, field: &str) -> McpResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                format!("Validation failed: {} must not be empty", field),
                true,
            ),
        );
    }
    Ok(trimmed)
}

/// Parse and validate a deadline parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing the parsed NaiveDate or error
pub fn parse_deadline(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ),
            true,
        )
    })
}

/// Parse and validate a recurrence parameter
pub fn parse_recurrence(recurrence_str: &str) -> McpResult<Recurrence> {
    recurrence_str.parse::<Recurrence>().map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid recurrence '{}'. Valid options: daily, weekly, monthly",
                recurrence_str
            ),
            true,
        )
    })
}

/// Parse and validate a group-by mode parameter
pub fn parse_group_mode(mode_str: &str) -> McpResult<GroupMode> {
    mode_str.parse::<GroupMode>().map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!("Invalid group mode '{}'. Valid options: frequency", mode_str),
            true,
        )
    })
}

/// Format an error message for an unknown list reference
///
/// # Arguments
/// * `list_id` - The unknown list ID that was provided
/// * `data` - Reference to the store to enumerate available lists
///
/// # Returns
/// A formatted error message including the available list paths
pub fn format_unknown_list_error(list_id: &str, data: &LifeData) -> String {
    if data.lists().is_empty() {
        format!(
            "List '{}' does not exist. No lists have been created yet. Create one first with add_list().",
            list_id
        )
    } else {
        let paths: Vec<String> = data
            .lists()
            .iter()
            .map(|l| format!("{} ({})", data.path(&l.id), l.id))
            .collect();
        format!(
            "List '{}' does not exist.\nAvailable lists: {}",
            list_id,
            paths.join(", ")
        )
    }
}

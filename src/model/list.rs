use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display grouping mode for a list's tasks
///
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupMode {
    /// Group the list's pending tasks by recurrence frequency
    frequency,
}

impl FromStr for GroupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frequency" => Ok(GroupMode::frequency),
            _ => Err(format!(
                "Invalid group mode '{}'. Valid options are: frequency",
                s
            )),
        }
    }
}

/// A named node in the list hierarchy
///
/// Lists form a forest: `parent_id` is `None` for roots and otherwise refers
/// to another list. A list can only be created with a pre-existing (or no)
/// parent, so the structure never contains a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    /// Unique identifier, assigned at creation, immutable
    pub id: String,
    /// Display name, user-editable
    pub name: String,
    /// Parent list ID; `None` marks a root list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Whether the list's children are shown expanded in tree views
    pub expanded: bool,
    /// Optional display grouping for this list's tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupMode>,
    /// When the list was created
    pub created_at: DateTime<Utc>,
}

impl Default for List {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            parent_id: None,
            expanded: true,
            group_by: None,
            created_at: Utc::now(),
        }
    }
}

impl List {
    /// Check if this list is a root (has no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

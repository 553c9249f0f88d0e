//! Life MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a personal
//! task/list manager: tasks organized into a hierarchy of named lists, with
//! optional deadlines and recurrence, viewed grouped by urgency or frequency.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `LifeServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `model` module - List/task stores, recurrence
//!   arithmetic, and the read-only aggregation queries
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! Every successful mutation persists the full store snapshot before the
//! caller re-derives a view; save failures are logged and swallowed rather
//! than surfaced.
//!
//! # Example
//!
//! ```no_run
//! use life_mcp::LifeServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = LifeServerHandler::new("life.toml");
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod formatting;
mod handlers;
pub mod model;
mod storage;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;
use tracing::{debug, warn};

// Re-export commonly used types
pub use model::{
    CascadeOutcome, GroupMode, LifeData, List, Recurrence, Task, ToggleOutcome, advance,
};
pub use storage::Storage;

/// MCP Server handler for the list/task manager
///
/// Provides an MCP interface over the store: list-tree management, the task
/// lifecycle (creation, completion, recurrence-driven respawning), and the
/// derived views. All changes are automatically persisted to a TOML file.
pub struct LifeServerHandler {
    pub(crate) data: Mutex<LifeData>,
    pub(crate) storage: Storage,
}

impl LifeServerHandler {
    /// Create a new server handler
    ///
    /// Loads prior state from `storage_path`; a missing or corrupt file
    /// starts an empty store.
    ///
    /// # Example
    /// ```no_run
    /// # use life_mcp::LifeServerHandler;
    /// let handler = LifeServerHandler::new("life.toml");
    /// ```
    pub fn new(storage_path: &str) -> Self {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load());
        Self { data, storage }
    }

    /// A read-only snapshot of the current store
    ///
    /// Clones the state so callers can inspect it without holding the lock.
    pub fn data_snapshot(&self) -> LifeData {
        self.data.lock().unwrap().clone()
    }

    /// Persist the current store snapshot
    ///
    /// Called after every successful mutation. Failures are logged and
    /// swallowed: persistence is fire-and-forget by design.
    pub(crate) fn persist(&self) {
        let data = self.data.lock().unwrap();
        match self.storage.save(&data) {
            Ok(()) => debug!("state persisted"),
            Err(e) => warn!(error = %e, "failed to persist state"),
        }
    }
}

/// Personal task/list manager: organize tasks into a hierarchy of named
/// lists, give them deadlines and recurrence, and view them grouped by
/// urgency or frequency.
///
/// Key concepts:
/// - **List**: a named node in a hierarchy; may nest arbitrarily deep.
///   Deleting a list cascades to all its sub-lists and their tasks.
/// - **Task**: a unit of work in exactly one list, optionally with a
///   deadline (YYYY-MM-DD) and a recurrence (daily/weekly/monthly).
/// - **Recurrence**: completing a recurring task with a deadline spawns the
///   next instance one period later; the completed one stays completed.
/// - **Views**: upcoming() groups dated tasks by urgency, completed() lists
///   finished tasks by recency, list_view() shows one list's own tasks.
///
/// IDs are opaque strings assigned at creation; take them from tool output.
#[mcp_server]
impl McpServer for LifeServerHandler {
    /// **Overview**: Show the full list tree with recursive pending-task counts.
    /// **Workflow**: Start here to find list IDs for the other tools.
    #[tool]
    async fn lists(&self) -> McpResult<String> {
        self.handle_lists().await
    }

    /// **Organize**: Create a list, optionally nested under a parent list.
    #[tool]
    async fn add_list(
        &self,
        /// Parent list ID; omit for a root list (optional)
        parent_id: Option<String>,
        /// Display name, must be non-empty
        name: String,
    ) -> McpResult<String> {
        self.handle_add_list(parent_id, name).await
    }

    /// **Organize**: Rename a list.
    #[tool]
    async fn rename_list(
        &self,
        /// List ID
        id: String,
        /// New display name, must be non-empty
        new_name: String,
    ) -> McpResult<String> {
        self.handle_rename_list(id, new_name).await
    }

    /// **Organize**: Expand or collapse a list in the tree overview.
    #[tool]
    async fn set_expanded(
        &self,
        /// List ID
        id: String,
        /// true to expand, false to collapse
        expanded: bool,
    ) -> McpResult<String> {
        self.handle_set_expanded(id, expanded).await
    }

    /// **Organize**: Choose how a list's tasks are grouped in list_view().
    #[tool]
    async fn set_group_by(
        &self,
        /// List ID
        id: String,
        /// Group mode: "frequency", ""=clear (optional)
        mode: Option<String>,
    ) -> McpResult<String> {
        self.handle_set_group_by(id, mode).await
    }

    /// **Organize**: Delete a list and, cascading, all its sub-lists and
    /// their tasks. This cannot be undone.
    #[tool]
    async fn delete_list(
        &self,
        /// List ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_list(id).await
    }

    /// **Capture**: Create a pending task in a list.
    /// **Workflow**: 1) add_task → 2) update_task to add deadline/recurrence/notes.
    #[tool]
    async fn add_task(
        &self,
        /// Owning list ID (must exist)
        list_id: String,
        /// Task title, must be non-empty
        title: String,
    ) -> McpResult<String> {
        self.handle_add_task(list_id, title).await
    }

    /// **Clarify**: Edit a task's fields. Omitted fields stay unchanged.
    /// **Tip**: Use ""(empty string) to clear deadline, recurrence, or notes.
    #[tool]
    async fn update_task(
        &self,
        /// Task ID
        id: String,
        /// New title, must be non-empty if provided (optional)
        title: Option<String>,
        /// Deadline YYYY-MM-DD, ""=clear (optional)
        deadline: Option<String>,
        /// Recurrence: daily/weekly/monthly, ""=clear (optional)
        recurrence: Option<String>,
        /// Free-text notes, ""=clear (optional)
        notes: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_task(id, title, deadline, recurrence, notes)
            .await
    }

    /// **Discard**: Delete a task permanently.
    #[tool]
    async fn delete_task(
        &self,
        /// Task ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Do**: Toggle a task between pending and completed.
    /// A recurring task with a deadline spawns its next instance on completion.
    #[tool]
    async fn toggle_task(
        &self,
        /// Task ID
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle_task(id).await
    }

    /// **Review**: All pending tasks with deadlines, grouped into
    /// Overdue / Today / per-date sections, soonest first.
    #[tool]
    async fn upcoming(&self) -> McpResult<String> {
        self.handle_upcoming().await
    }

    /// **Review**: All completed tasks, most recently completed first.
    #[tool]
    async fn completed(&self) -> McpResult<String> {
        self.handle_completed().await
    }

    /// **Review**: One list's own pending tasks (sub-list tasks appear in
    /// their own lists) plus its direct sub-lists with counts.
    #[tool]
    async fn list_view(
        &self,
        /// List ID
        list_id: String,
    ) -> McpResult<String> {
        self.handle_list_view(list_id).await
    }
}

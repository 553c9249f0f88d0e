//! List tool handlers

use crate::LifeServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl LifeServerHandler {
    /// Create a list, optionally nested under a parent.
    ///
    /// The parent is not checked for existence; passing an unknown ID leaves
    /// the new list orphaned outside every tree view, so callers should pass
    /// IDs taken from `lists()`.
    pub async fn handle_add_list(
        &self,
        parent_id: Option<String>,
        name: String,
    ) -> McpResult<String> {
        let name = validation::require_text(&name, "name")?;

        let mut data = self.data.lock().unwrap();
        let id = match data.add_list(parent_id, name) {
            Some(list) => list.id.clone(),
            None => {
                drop(data);
                bail_public!(_, "Validation failed: name must not be empty");
            }
        };
        let path = data.path(&id);
        drop(data);

        self.persist();
        Ok(format!("List created with ID: {} (path: {})", id, path))
    }

    /// Rename a list in place.
    pub async fn handle_rename_list(&self, id: String, new_name: String) -> McpResult<String> {
        let new_name = validation::require_text(&new_name, "name")?;

        let mut data = self.data.lock().unwrap();
        if !data.rename_list(&id, new_name) {
            drop(data);
            bail_public!(
                _,
                "List '{}' not found. Use lists() to see available lists.",
                id
            );
        }
        drop(data);

        self.persist();
        Ok(format!("List {} renamed to \"{}\"", id, new_name))
    }

    /// Expand or collapse a list in tree views.
    pub async fn handle_set_expanded(&self, id: String, expanded: bool) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if !data.set_expanded(&id, expanded) {
            drop(data);
            bail_public!(
                _,
                "List '{}' not found. Use lists() to see available lists.",
                id
            );
        }
        drop(data);

        self.persist();
        Ok(format!(
            "List {} {}",
            id,
            if expanded { "expanded" } else { "collapsed" }
        ))
    }

    /// Set or clear how a list's tasks are grouped in its view.
    pub async fn handle_set_group_by(&self, id: String, mode: Option<String>) -> McpResult<String> {
        // Empty string clears the mode, same as omitting it
        let parsed = match mode.as_deref() {
            None | Some("") => None,
            Some(mode_str) => Some(validation::parse_group_mode(mode_str)?),
        };

        let mut data = self.data.lock().unwrap();
        if !data.set_group_by(&id, parsed) {
            drop(data);
            bail_public!(
                _,
                "List '{}' not found. Use lists() to see available lists.",
                id
            );
        }
        drop(data);

        self.persist();
        Ok(match parsed {
            Some(mode) => format!("List {} group mode set to {:?}", id, mode),
            None => format!("List {} group mode cleared", id),
        })
    }

    /// Delete a list, cascading to all descendant lists and their tasks.
    pub async fn handle_delete_list(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        let name = match data.find_list(&id) {
            Some(list) => list.name.clone(),
            None => {
                drop(data);
                bail_public!(
                    _,
                    "List '{}' not found. Use lists() to see available lists.",
                    id
                );
            }
        };
        let outcome = match data.delete_list(&id) {
            Some(outcome) => outcome,
            None => {
                drop(data);
                bail_public!(_, "List '{}' not found", id);
            }
        };
        drop(data);

        self.persist();
        Ok(format!(
            "Deleted list \"{}\": {} sub-list(s) and {} task(s) removed",
            name,
            outcome.lists_removed - 1,
            outcome.tasks_removed
        ))
    }

    /// Render the full list tree with pending counts.
    pub async fn handle_lists(&self) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        Ok(formatting::format_tree(&data))
    }
}

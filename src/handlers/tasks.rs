//! Task tool handlers

use crate::LifeServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl LifeServerHandler {
    /// Create a pending task in a list.
    pub async fn handle_add_task(&self, list_id: String, title: String) -> McpResult<String> {
        let title = validation::require_text(&title, "title")?;

        let mut data = self.data.lock().unwrap();
        // Unlike add_list's parent, the owning list is validated: every task
        // must belong to a list that exists.
        if data.find_list(&list_id).is_none() {
            let error_msg = validation::format_unknown_list_error(&list_id, &data);
            drop(data);
            bail_public!(_, "{}", error_msg);
        }

        let id = match data.add_task(&list_id, title) {
            Some(task) => task.id.clone(),
            None => {
                drop(data);
                bail_public!(_, "Validation failed: title must not be empty");
            }
        };
        let path = data.path(&list_id);
        drop(data);

        self.persist();
        Ok(format!("Task created with ID: {} (list: {})", id, path))
    }

    /// Edit a task's fields; omitted fields stay unchanged.
    pub async fn handle_update_task(
        &self,
        id: String,
        title: Option<String>,
        deadline: Option<String>,
        recurrence: Option<String>,
        notes: Option<String>,
    ) -> McpResult<String> {
        // Validate everything before touching the store so a bad field can
        // never leave a partial edit behind.
        let title = match title {
            Some(t) => Some(validation::require_text(&t, "title")?.to_string()),
            None => None,
        };
        let deadline = match deadline.as_deref() {
            None => None,
            Some("") => Some(None),
            Some(date_str) => Some(Some(validation::parse_deadline(date_str)?)),
        };
        let recurrence = match recurrence.as_deref() {
            None => None,
            Some("") => Some(None),
            Some(rec_str) => Some(Some(validation::parse_recurrence(rec_str)?)),
        };

        let mut data = self.data.lock().unwrap();
        let mut task = match data.find_task(&id) {
            Some(task) => task.clone(),
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Task '{}' not found. Use list_view() or upcoming() to see tasks.",
                    id
                );
            }
        };

        if let Some(new_title) = title {
            task.title = new_title;
        }
        if let Some(new_deadline) = deadline {
            task.deadline = new_deadline;
        }
        if let Some(new_recurrence) = recurrence {
            task.recurrence = new_recurrence;
        }
        // Empty string clears the notes
        if let Some(n) = notes {
            task.notes = if n.is_empty() { None } else { Some(n) };
        }

        if data.update_task(&id, task).is_none() {
            drop(data);
            bail_public!(_, "Failed to update task '{}'", id);
        }
        drop(data);

        self.persist();
        Ok(format!("Task {} updated successfully", id))
    }

    /// Delete a task.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if !data.delete_task(&id) {
            drop(data);
            bail_public!(_, "Task '{}' not found", id);
        }
        drop(data);

        self.persist();
        Ok(format!("Task {} deleted", id))
    }
}

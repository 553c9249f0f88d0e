//! Completion toggle handler

use crate::LifeServerHandler;
use crate::model::ToggleOutcome;
use mcp_attr::{Result as McpResult, bail_public};

impl LifeServerHandler {
    /// Toggle a task between pending and completed.
    ///
    /// Completing a task that has both a recurrence and a deadline spawns the
    /// next instance, one period later. Toggling back to pending never
    /// retracts an already-spawned instance.
    pub async fn handle_toggle_task(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        let outcome = match data.toggle_task(&id) {
            Some(outcome) => outcome,
            None => {
                drop(data);
                bail_public!(
                    _,
                    "Task '{}' not found. Use list_view() or upcoming() to see tasks.",
                    id
                );
            }
        };
        let spawned_deadline = match &outcome {
            ToggleOutcome::Completed {
                spawned: Some(spawned_id),
            } => data.find_task(spawned_id).and_then(|t| t.deadline),
            _ => None,
        };
        drop(data);

        self.persist();
        Ok(match outcome {
            ToggleOutcome::Completed { spawned: None } => format!("Task {} completed", id),
            ToggleOutcome::Completed {
                spawned: Some(spawned_id),
            } => match spawned_deadline {
                Some(deadline) => format!(
                    "Task {} completed\nNext occurrence created: {} (due {})",
                    id, spawned_id, deadline
                ),
                None => format!(
                    "Task {} completed\nNext occurrence created: {}",
                    id, spawned_id
                ),
            },
            ToggleOutcome::Reopened => format!("Task {} reopened", id),
        })
    }
}

//! Derived-view tool handlers
//!
//! Each view locks the store, derives, renders, and returns; nothing here
//! mutates state.

use crate::LifeServerHandler;
use crate::formatting;
use crate::model::{GroupMode, group_by_deadline, group_by_frequency, local_date_today};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl LifeServerHandler {
    /// All pending tasks with deadlines, grouped into overdue / today /
    /// per-date buckets.
    pub async fn handle_upcoming(&self) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        let today = local_date_today();
        let upcoming = data.upcoming_tasks();
        let groups = group_by_deadline(&upcoming, today);
        Ok(formatting::format_deadline_groups(&data, &groups, today))
    }

    /// All completed tasks, most recently completed first.
    pub async fn handle_completed(&self) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        let today = local_date_today();
        let completed = data.completed_tasks();
        if completed.is_empty() {
            return Ok("No completed tasks".to_string());
        }

        let mut result = format!("Completed tasks ({}):\n", completed.len());
        for task in completed {
            result.push_str(&formatting::format_task_line(&data, task, today, true));
            result.push('\n');
        }
        Ok(result.trim_end().to_string())
    }

    /// A single list's own pending tasks and direct sub-lists.
    ///
    /// When the list's group mode is `frequency`, tasks are grouped into
    /// daily / weekly / monthly / one-time sections.
    pub async fn handle_list_view(&self, list_id: String) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        let list = match data.find_list(&list_id) {
            Some(list) => list,
            None => {
                let error_msg = validation::format_unknown_list_error(&list_id, &data);
                drop(data);
                bail_public!(_, "{}", error_msg);
            }
        };

        let today = local_date_today();
        let mut result = format!("# {}\n", data.path(&list_id));

        let children = data.children(&list_id);
        if !children.is_empty() {
            let chips: Vec<String> = children
                .iter()
                .map(|child| {
                    let count = data.pending_count(&child.id);
                    if count > 0 {
                        format!("{} ({})", child.name, count)
                    } else {
                        child.name.clone()
                    }
                })
                .collect();
            result.push_str(&format!("Sub-lists: {}\n", chips.join(", ")));
        }

        let tasks = data.tasks_for_list(&list_id);
        if tasks.is_empty() {
            result.push_str("No pending tasks in this list");
            return Ok(result.trim_end().to_string());
        }

        result.push('\n');
        if list.group_by == Some(GroupMode::frequency) {
            let groups = group_by_frequency(&tasks);
            result.push_str(&formatting::format_frequency_groups(&data, &groups, today));
        } else {
            for task in &tasks {
                result.push_str(&formatting::format_task_line(&data, task, today, false));
                result.push('\n');
            }
        }
        Ok(result.trim_end().to_string())
    }
}

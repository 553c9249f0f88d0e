use crate::model::list::{GroupMode, List};
use crate::model::task::Task;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh opaque identifier
fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Result of toggling a task's completion state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The task was marked completed; `spawned` holds the ID of the next
    /// instance when the task was recurring
    Completed { spawned: Option<String> },
    /// The task was marked pending again
    Reopened,
}

/// Result of a cascade list deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Number of lists removed (the list itself plus descendants)
    pub lists_removed: usize,
    /// Number of tasks removed along with those lists
    pub tasks_removed: usize,
}

/// The combined list/task store
///
/// Two Vecs are the primary storage:
/// 1. Maintains insertion order, which every derived view builds on
/// 2. Serializes to a stable, diff-friendly TOML document
/// 3. Simple ownership model - the Vecs own all data directly
///
/// Tree relationships are not indexed persistently; the child-index map is
/// rebuilt per traversal (see `descendant_ids` in `queries`), which is cheap
/// at personal-organizer scales and keeps the serialized form down to exactly
/// the two record arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeData {
    /// All lists, in creation order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) lists: Vec<List>,

    /// All tasks, in creation order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) tasks: Vec<Task>,
}

impl LifeData {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists in creation order
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// All tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a list by its ID
    pub fn find_list(&self, id: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Find a list by its ID and return a mutable reference
    fn find_list_mut(&mut self, id: &str) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    /// Find a task by its ID
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // ----- list mutations -----

    /// Create a new list and append it to the store
    ///
    /// The parent is not validated: passing an unknown `parent_id` creates an
    /// orphan the tree views never reach. Callers are expected to pass either
    /// `None` or a known ID.
    ///
    /// # Returns
    /// The created list, or `None` if `name` trims to empty (the store is
    /// left unchanged).
    pub fn add_list(&mut self, parent_id: Option<String>, name: &str) -> Option<&List> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.lists.push(List {
            id: new_id(),
            name: name.to_string(),
            parent_id,
            expanded: true,
            group_by: None,
            created_at: Utc::now(),
        });
        self.lists.last()
    }

    /// Rename a list in place
    ///
    /// No-op when the ID is unknown or the new name trims to empty.
    ///
    /// # Returns
    /// Whether a rename actually happened.
    pub fn rename_list(&mut self, id: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        match self.find_list_mut(id) {
            Some(list) => {
                list.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Set a list's expanded/collapsed tree-view hint; no-op on unknown ID
    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> bool {
        match self.find_list_mut(id) {
            Some(list) => {
                list.expanded = expanded;
                true
            }
            None => false,
        }
    }

    /// Set or clear a list's display grouping; no-op on unknown ID
    pub fn set_group_by(&mut self, id: &str, mode: Option<GroupMode>) -> bool {
        match self.find_list_mut(id) {
            Some(list) => {
                list.group_by = mode;
                true
            }
            None => false,
        }
    }

    /// Delete a list together with all descendant lists and their tasks
    ///
    /// Removes every list in the descendant set (the list itself plus all
    /// transitive children) and every task owned by any of them, in one
    /// operation. No-op when the ID is unknown.
    ///
    /// # Returns
    /// How many lists and tasks were removed, or `None` for an unknown ID.
    pub fn delete_list(&mut self, id: &str) -> Option<CascadeOutcome> {
        if self.find_list(id).is_none() {
            return None;
        }
        let doomed = self.descendant_ids(id);
        let lists_before = self.lists.len();
        let tasks_before = self.tasks.len();
        self.lists.retain(|l| !doomed.contains(&l.id));
        self.tasks.retain(|t| !doomed.contains(&t.list_id));
        Some(CascadeOutcome {
            lists_removed: lists_before - self.lists.len(),
            tasks_removed: tasks_before - self.tasks.len(),
        })
    }

    // ----- task mutations -----

    /// Create a new pending task bound to a list
    ///
    /// The task starts with no notes, deadline, or recurrence.
    ///
    /// # Returns
    /// The created task, or `None` if `title` trims to empty (the store is
    /// left unchanged).
    pub fn add_task(&mut self, list_id: &str, title: &str) -> Option<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.tasks.push(Task {
            id: new_id(),
            list_id: list_id.to_string(),
            title: title.to_string(),
            notes: None,
            deadline: None,
            recurrence: None,
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
        });
        self.tasks.last()
    }

    /// Replace a task's record in place, keeping its position
    ///
    /// # Returns
    /// The previous record, or `None` for an unknown ID.
    pub fn update_task(&mut self, id: &str, task: Task) -> Option<Task> {
        let slot = self.tasks.iter_mut().find(|t| t.id == id)?;
        Some(std::mem::replace(slot, task))
    }

    /// Remove a task; no-op on unknown ID
    pub fn delete_task(&mut self, id: &str) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Toggle a task between pending and completed
    ///
    /// Completing sets `completed_at`, and, when the task carries both a
    /// recurrence and a deadline, appends a fresh pending clone whose deadline
    /// is advanced by one period. The completed instance and the spawned one
    /// are independent from then on. Un-completing clears `completed_at` and
    /// has no recurrence side effect: an already-spawned successor stays.
    ///
    /// # Returns
    /// What happened, or `None` for an unknown ID.
    pub fn toggle_task(&mut self, id: &str) -> Option<ToggleOutcome> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        if !self.tasks[pos].completed {
            self.tasks[pos].completed = true;
            self.tasks[pos].completed_at = Some(Utc::now());
            let next = self.tasks[pos].next_deadline().map(|next_deadline| {
                let done = &self.tasks[pos];
                Task {
                    id: new_id(),
                    list_id: done.list_id.clone(),
                    title: done.title.clone(),
                    notes: done.notes.clone(),
                    deadline: Some(next_deadline),
                    recurrence: done.recurrence,
                    completed: false,
                    completed_at: None,
                    created_at: Utc::now(),
                }
            });
            let spawned = next.map(|task| {
                let spawned_id = task.id.clone();
                self.tasks.push(task);
                spawned_id
            });
            Some(ToggleOutcome::Completed { spawned })
        } else {
            self.tasks[pos].completed = false;
            self.tasks[pos].completed_at = None;
            Some(ToggleOutcome::Reopened)
        }
    }
}

//! Formatting helper functions for tool output
//!
//! This module renders derived views (upcoming, completed, per-list) as plain
//! text. It reads the store but never mutates it.

use crate::model::{
    DateBucket, DeadlineGroup, FrequencyGroup, LifeData, List, Recurrence, Task,
};
use chrono::{Duration, NaiveDate};

/// Short date form, e.g. "Jun 9, 2024"
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Header label for a specific date: "Today", "Tomorrow", or weekday + date
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%A, %B %-d").to_string()
    }
}

/// Header label for a deadline bucket
pub fn bucket_label(bucket: DateBucket, today: NaiveDate) -> String {
    match bucket {
        DateBucket::Overdue => "Overdue".to_string(),
        DateBucket::Today => "Today".to_string(),
        DateBucket::Future(date) => format_date_label(date, today),
    }
}

/// Header label for a frequency bucket
pub fn frequency_label(recurrence: Option<Recurrence>) -> &'static str {
    match recurrence {
        Some(Recurrence::daily) => "Daily",
        Some(Recurrence::weekly) => "Weekly",
        Some(Recurrence::monthly) => "Monthly",
        None => "One-time",
    }
}

/// Deadline annotation for a pending task line
///
/// Overdue and due-today deadlines are called out; deadlines within the next
/// three days get a countdown.
fn deadline_annotation(deadline: NaiveDate, today: NaiveDate) -> String {
    if deadline < today {
        format!("Overdue — {}", format_date_short(deadline))
    } else if deadline == today {
        "Today".to_string()
    } else {
        let days = (deadline - today).num_days();
        if days <= 3 {
            format!(
                "{} (in {} day{})",
                format_date_short(deadline),
                days,
                if days == 1 { "" } else { "s" }
            )
        } else {
            format_date_short(deadline)
        }
    }
}

/// Format a single task line
///
/// # Arguments
/// * `data` - The store, used to resolve the owning list's path
/// * `task` - The task to format
/// * `today` - Reference date for deadline annotations
/// * `show_path` - Include the owning list's path (for cross-list views)
pub fn format_task_line(data: &LifeData, task: &Task, today: NaiveDate, show_path: bool) -> String {
    let mut line = format!("- {} (ID: {})", task.title, task.id);

    if let Some(deadline) = task.deadline {
        if task.completed {
            line.push_str(&format!(" — {}", format_date_short(deadline)));
        } else {
            line.push_str(&format!(" — {}", deadline_annotation(deadline, today)));
        }
    }
    if let Some(recurrence) = task.recurrence {
        line.push_str(&format!(" [recurs {:?}]", recurrence));
    }
    if task.notes.is_some() {
        line.push_str(" [notes]");
    }
    if show_path {
        line.push_str(&format!(" ({})", data.path(&task.list_id)));
    }
    line
}

/// Render deadline groups with their headers
pub fn format_deadline_groups(
    data: &LifeData,
    groups: &[DeadlineGroup<'_>],
    today: NaiveDate,
) -> String {
    if groups.is_empty() {
        return "No upcoming tasks".to_string();
    }

    let mut result = String::new();
    for group in groups {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&format!("## {}\n", bucket_label(group.bucket, today)));
        for task in &group.tasks {
            result.push_str(&format_task_line(data, task, today, true));
            result.push('\n');
        }
    }
    result.trim_end().to_string()
}

/// Render frequency groups with their headers
pub fn format_frequency_groups(
    data: &LifeData,
    groups: &[FrequencyGroup<'_>],
    today: NaiveDate,
) -> String {
    if groups.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = String::new();
    for group in groups {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&format!("## {}\n", frequency_label(group.recurrence)));
        for task in &group.tasks {
            result.push_str(&format_task_line(data, task, today, false));
            result.push('\n');
        }
    }
    result.trim_end().to_string()
}

/// Render the list forest as an indented tree with pending-count badges
///
/// Counts are recursive (a parent's badge includes sub-list tasks). Collapsed
/// lists are marked but still rendered with their children, since the tool
/// output is the only window a client has into the tree.
pub fn format_tree(data: &LifeData) -> String {
    let roots = data.roots();
    if roots.is_empty() {
        return "No lists yet. Create one with add_list().".to_string();
    }

    let mut result = String::new();
    for root in roots {
        format_tree_node(data, root, 0, &mut result);
    }
    result.trim_end().to_string()
}

fn format_tree_node(data: &LifeData, list: &List, depth: usize, out: &mut String) {
    let count = data.pending_count(&list.id);
    out.push_str(&"  ".repeat(depth));
    out.push_str(&format!("- {}", list.name));
    if count > 0 {
        out.push_str(&format!(" ({})", count));
    }
    if !list.expanded {
        out.push_str(" [collapsed]");
    }
    out.push_str(&format!(" (ID: {})\n", list.id));
    for child in data.children(&list.id) {
        format_tree_node(data, child, depth + 1, out);
    }
}

//! Read-only derivations over the store
//!
//! This module contains the aggregation queries: tree traversal, recursive
//! task counts, and the sorted/grouped views the caller renders. These are
//! separated from the main life_data.rs to improve modularity. Nothing in
//! here mutates the store, so queries can be interleaved freely with the
//! mutation operations.

use super::life_data::LifeData;
use super::list::List;
use super::task::{Recurrence, Task};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

/// Separator used when joining a list path into a display string
const PATH_SEPARATOR: &str = " / ";

impl LifeData {
    /// Get all root lists (lists with no parent), in creation order
    pub fn roots(&self) -> Vec<&List> {
        self.lists.iter().filter(|l| l.is_root()).collect()
    }

    /// Get the direct children of a list, in creation order
    pub fn children(&self, parent_id: &str) -> Vec<&List> {
        self.lists
            .iter()
            .filter(|l| l.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    /// Ordered root-to-leaf name chain for a list, joined with " / "
    ///
    /// Returns an empty string for an unknown ID.
    pub fn path(&self, id: &str) -> String {
        let mut parts = Vec::new();
        let mut current = self.find_list(id);
        while let Some(list) = current {
            parts.push(list.name.as_str());
            current = list.parent_id.as_deref().and_then(|p| self.find_list(p));
        }
        parts.reverse();
        parts.join(PATH_SEPARATOR)
    }

    /// The descendant set of a list: itself plus all transitive children
    ///
    /// Iterates with an explicit stack over a child-index map built once per
    /// call, so arbitrarily deep nesting cannot overflow the call stack. The
    /// set always contains `list_id` itself.
    pub fn descendant_ids(&self, list_id: &str) -> HashSet<String> {
        let mut children_of: HashMap<&str, Vec<&str>> = HashMap::new();
        for list in &self.lists {
            if let Some(ref parent) = list.parent_id {
                children_of.entry(parent).or_default().push(&list.id);
            }
        }

        let mut ids = HashSet::new();
        let mut stack = vec![list_id];
        while let Some(id) = stack.pop() {
            if ids.insert(id.to_string())
                && let Some(kids) = children_of.get(id)
            {
                stack.extend(kids);
            }
        }
        ids
    }

    /// Count pending tasks in a list and all its sub-lists
    pub fn pending_count(&self, list_id: &str) -> usize {
        let ids = self.descendant_ids(list_id);
        self.tasks
            .iter()
            .filter(|t| t.is_pending() && ids.contains(&t.list_id))
            .count()
    }

    /// Pending tasks owned directly by a list (sub-list tasks excluded)
    ///
    /// A list's own view shows only its own tasks; sub-list tasks surface
    /// through `pending_count` badges instead.
    pub fn tasks_for_list(&self, list_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_pending() && t.list_id == list_id)
            .collect()
    }

    /// All pending tasks with a deadline, ascending by deadline
    ///
    /// The sort is stable, so tasks sharing a deadline keep creation order.
    pub fn upcoming_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.is_pending() && t.deadline.is_some())
            .collect();
        tasks.sort_by_key(|t| t.deadline);
        tasks
    }

    /// All completed tasks, most recently completed first
    ///
    /// The sort is stable, so ties on `completed_at` keep creation order.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| t.completed).collect();
        tasks.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        tasks
    }
}

/// Which deadline bucket a group of tasks falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    /// Deadline strictly before today
    Overdue,
    /// Deadline equal to today
    Today,
    /// Deadline on a specific future date
    Future(NaiveDate),
}

/// A deadline bucket together with its tasks, in input order
#[derive(Debug)]
pub struct DeadlineGroup<'a> {
    pub bucket: DateBucket,
    pub tasks: Vec<&'a Task>,
}

/// Partition tasks into overdue / today / per-future-date buckets
///
/// Buckets are emitted as: overdue, today, then one bucket per distinct
/// future date in the order the dates are first encountered in the input.
/// Tasks without a deadline are skipped. Empty buckets are omitted.
pub fn group_by_deadline<'a>(tasks: &[&'a Task], today: NaiveDate) -> Vec<DeadlineGroup<'a>> {
    let mut overdue = Vec::new();
    let mut due_today = Vec::new();
    let mut future: Vec<(NaiveDate, Vec<&Task>)> = Vec::new();

    for task in tasks {
        let Some(deadline) = task.deadline else {
            continue;
        };
        if deadline < today {
            overdue.push(*task);
        } else if deadline == today {
            due_today.push(*task);
        } else {
            match future.iter_mut().find(|(date, _)| *date == deadline) {
                Some((_, bucket)) => bucket.push(*task),
                None => future.push((deadline, vec![*task])),
            }
        }
    }

    let mut groups = Vec::new();
    if !overdue.is_empty() {
        groups.push(DeadlineGroup {
            bucket: DateBucket::Overdue,
            tasks: overdue,
        });
    }
    if !due_today.is_empty() {
        groups.push(DeadlineGroup {
            bucket: DateBucket::Today,
            tasks: due_today,
        });
    }
    for (date, tasks) in future {
        groups.push(DeadlineGroup {
            bucket: DateBucket::Future(date),
            tasks,
        });
    }
    groups
}

/// A recurrence-frequency bucket together with its tasks, in input order
///
/// `recurrence` is `None` for the one-time bucket.
#[derive(Debug)]
pub struct FrequencyGroup<'a> {
    pub recurrence: Option<Recurrence>,
    pub tasks: Vec<&'a Task>,
}

/// Partition tasks into daily / weekly / monthly / one-time buckets
///
/// Buckets are emitted in that fixed order; empty buckets are omitted.
pub fn group_by_frequency<'a>(tasks: &[&'a Task]) -> Vec<FrequencyGroup<'a>> {
    const ORDER: [Option<Recurrence>; 4] = [
        Some(Recurrence::daily),
        Some(Recurrence::weekly),
        Some(Recurrence::monthly),
        None,
    ];

    ORDER
        .iter()
        .filter_map(|frequency| {
            let bucket: Vec<&Task> = tasks
                .iter()
                .copied()
                .filter(|t| t.recurrence == *frequency)
                .collect();
            if bucket.is_empty() {
                None
            } else {
                Some(FrequencyGroup {
                    recurrence: *frequency,
                    tasks: bucket,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Build the nested fixture used by the tree tests:
    /// Home > Garden > Shed, plus a sibling root Work.
    fn tree_fixture() -> (LifeData, String, String, String, String) {
        let mut data = LifeData::new();
        let home = data.add_list(None, "Home").unwrap().id.clone();
        let garden = data.add_list(Some(home.clone()), "Garden").unwrap().id.clone();
        let shed = data.add_list(Some(garden.clone()), "Shed").unwrap().id.clone();
        let work = data.add_list(None, "Work").unwrap().id.clone();
        (data, home, garden, shed, work)
    }

    #[test]
    fn test_roots_and_children() {
        let (data, home, garden, shed, work) = tree_fixture();

        let roots: Vec<&str> = data.roots().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(roots, vec![home.as_str(), work.as_str()]);

        let kids: Vec<&str> = data.children(&home).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(kids, vec![garden.as_str()]);
        let kids: Vec<&str> = data.children(&garden).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(kids, vec![shed.as_str()]);
        assert!(data.children(&shed).is_empty());
    }

    #[test]
    fn test_path_joins_root_to_leaf() {
        let (data, home, _, shed, _) = tree_fixture();
        assert_eq!(data.path(&shed), "Home / Garden / Shed");
        assert_eq!(data.path(&home), "Home");
        assert_eq!(data.path("missing"), "");
    }

    #[test]
    fn test_descendant_ids_includes_self_and_is_closed() {
        let (data, home, garden, shed, work) = tree_fixture();

        let ids = data.descendant_ids(&home);
        assert!(ids.contains(&home));
        assert!(ids.contains(&garden));
        assert!(ids.contains(&shed));
        assert!(!ids.contains(&work));
        assert_eq!(ids.len(), 3);

        // A leaf's descendant set is just itself
        assert_eq!(data.descendant_ids(&shed).len(), 1);
    }

    #[test]
    fn test_descendant_ids_survives_deep_nesting() {
        let mut data = LifeData::new();
        let root = data.add_list(None, "depth 0").unwrap().id.clone();
        let mut parent = root.clone();
        for depth in 1..=2_000 {
            parent = data
                .add_list(Some(parent), &format!("depth {}", depth))
                .unwrap()
                .id
                .clone();
        }
        assert_eq!(data.descendant_ids(&root).len(), 2_001);
    }

    #[test]
    fn test_pending_count_recurses_and_skips_completed() {
        let (mut data, home, garden, shed, work) = tree_fixture();
        data.add_task(&home, "Vacuum");
        data.add_task(&garden, "Weed beds");
        let done = data.add_task(&shed, "Oil hinges").unwrap().id.clone();
        data.add_task(&work, "File report");
        data.toggle_task(&done);

        assert_eq!(data.pending_count(&home), 2);
        assert_eq!(data.pending_count(&garden), 1);
        assert_eq!(data.pending_count(&shed), 0);
        assert_eq!(data.pending_count(&work), 1);
    }

    #[test]
    fn test_tasks_for_list_is_exact_match_only() {
        let (mut data, home, garden, _, _) = tree_fixture();
        let own = data.add_task(&home, "Vacuum").unwrap().id.clone();
        data.add_task(&garden, "Weed beds");

        let tasks = data.tasks_for_list(&home);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, own);
    }

    #[test]
    fn test_upcoming_sorted_ascending_without_undated() {
        let mut data = LifeData::new();
        let inbox = data.add_list(None, "Inbox").unwrap().id.clone();

        for (title, deadline) in [
            ("later", Some(date(2024, 6, 20))),
            ("undated", None),
            ("soonest", Some(date(2024, 6, 1))),
            ("middle", Some(date(2024, 6, 10))),
        ] {
            let id = data.add_task(&inbox, title).unwrap().id.clone();
            if let Some(d) = deadline {
                let mut edited = data.find_task(&id).unwrap().clone();
                edited.deadline = Some(d);
                data.update_task(&id, edited);
            }
        }

        let titles: Vec<&str> = data.upcoming_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["soonest", "middle", "later"]);
    }

    #[test]
    fn test_completed_sorted_by_recency() {
        let mut data = LifeData::new();
        let inbox = data.add_list(None, "Inbox").unwrap().id.clone();

        for (title, hour) in [("first", 9), ("last", 17), ("middle", 12)] {
            let id = data.add_task(&inbox, title).unwrap().id.clone();
            let mut edited = data.find_task(&id).unwrap().clone();
            edited.completed = true;
            edited.completed_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap());
            data.update_task(&id, edited);
        }

        let titles: Vec<&str> = data.completed_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["last", "middle", "first"]);
    }

    fn dated_task(title: &str, deadline: NaiveDate) -> Task {
        Task {
            id: title.to_string(),
            list_id: "inbox".to_string(),
            title: title.to_string(),
            deadline: Some(deadline),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_by_deadline_buckets() {
        let yesterday = dated_task("yesterday", date(2024, 6, 9));
        let today_task = dated_task("today", date(2024, 6, 10));
        let next_week = dated_task("next week", date(2024, 6, 15));
        let tasks = vec![&yesterday, &today_task, &next_week];

        let groups = group_by_deadline(&tasks, date(2024, 6, 10));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].bucket, DateBucket::Overdue);
        assert_eq!(groups[0].tasks[0].title, "yesterday");
        assert_eq!(groups[1].bucket, DateBucket::Today);
        assert_eq!(groups[1].tasks[0].title, "today");
        assert_eq!(groups[2].bucket, DateBucket::Future(date(2024, 6, 15)));
        assert_eq!(groups[2].tasks[0].title, "next week");
    }

    #[test]
    fn test_group_by_deadline_omits_empty_buckets() {
        let only = dated_task("only", date(2024, 6, 15));
        let tasks = vec![&only];
        let groups = group_by_deadline(&tasks, date(2024, 6, 10));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].bucket, DateBucket::Future(date(2024, 6, 15)));
    }

    #[test]
    fn test_group_by_deadline_future_buckets_in_first_encounter_order() {
        let a = dated_task("a", date(2024, 7, 2));
        let b = dated_task("b", date(2024, 7, 1));
        let c = dated_task("c", date(2024, 7, 2));
        let tasks = vec![&a, &b, &c];

        let groups = group_by_deadline(&tasks, date(2024, 6, 10));
        assert_eq!(groups.len(), 2);
        // 07-02 was seen first, so its bucket comes first
        assert_eq!(groups[0].bucket, DateBucket::Future(date(2024, 7, 2)));
        let titles: Vec<&str> = groups[0].tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(groups[1].bucket, DateBucket::Future(date(2024, 7, 1)));
    }

    fn recurring_task(title: &str, recurrence: Option<Recurrence>) -> Task {
        Task {
            id: title.to_string(),
            list_id: "chores".to_string(),
            title: title.to_string(),
            recurrence,
            ..Default::default()
        }
    }

    #[test]
    fn test_group_by_frequency_fixed_order() {
        let one_time = recurring_task("one-time", None);
        let monthly = recurring_task("monthly", Some(Recurrence::monthly));
        let daily = recurring_task("daily", Some(Recurrence::daily));
        let weekly = recurring_task("weekly", Some(Recurrence::weekly));
        let tasks = vec![&one_time, &monthly, &daily, &weekly];

        let groups = group_by_frequency(&tasks);
        let order: Vec<Option<Recurrence>> = groups.iter().map(|g| g.recurrence).collect();
        assert_eq!(
            order,
            vec![
                Some(Recurrence::daily),
                Some(Recurrence::weekly),
                Some(Recurrence::monthly),
                None
            ]
        );
    }

    #[test]
    fn test_group_by_frequency_omits_empty_buckets() {
        let daily_a = recurring_task("a", Some(Recurrence::daily));
        let daily_b = recurring_task("b", Some(Recurrence::daily));
        let tasks = vec![&daily_a, &daily_b];

        let groups = group_by_frequency(&tasks);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].recurrence, Some(Recurrence::daily));
        assert_eq!(groups[0].tasks.len(), 2);
    }
}

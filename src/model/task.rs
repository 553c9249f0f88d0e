use chrono::{DateTime, Duration, Local, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Recurrence frequency for repeating tasks
///
/// Defines how far the deadline moves when a recurring task is completed.
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    /// Repeats every day
    daily,
    /// Repeats every 7 days
    weekly,
    /// Repeats on the same day of the next month
    monthly,
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Recurrence::daily),
            "weekly" => Ok(Recurrence::weekly),
            "monthly" => Ok(Recurrence::monthly),
            _ => Err(format!(
                "Invalid recurrence '{}'. Valid options are: daily, weekly, monthly",
                s
            )),
        }
    }
}

/// Compute the next deadline for a recurring task
///
/// # Arguments
/// * `deadline` - The deadline the completed instance carried
/// * `recurrence` - How the task repeats
///
/// # Returns
/// The deadline for the spawned next instance.
///
/// Monthly recurrence keeps the day-of-month and clamps to the last day of
/// the target month when it is shorter (2024-01-31 advances to 2024-02-29).
pub fn advance(deadline: NaiveDate, recurrence: Recurrence) -> NaiveDate {
    match recurrence {
        Recurrence::daily => deadline + Duration::days(1),
        Recurrence::weekly => deadline + Duration::days(7),
        Recurrence::monthly => deadline + Months::new(1),
    }
}

/// A unit of work belonging to exactly one list
///
/// Tasks are optionally time-boxed by a calendar-date deadline and optionally
/// recurring. A recurring task only respawns on completion when it also has a
/// deadline; recurrence without a deadline has no effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// ID of the owning list (exactly one owner)
    pub list_id: String,
    /// Title describing the task
    pub title: String,
    /// Optional free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Optional deadline (calendar date, no time component)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Optional recurrence frequency (meaningful only with a deadline)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    /// Whether the task has been completed
    pub completed: bool,
    /// When the task was completed; set iff `completed` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: String::new(),
            list_id: String::new(),
            title: String::new(),
            notes: None,
            deadline: None,
            recurrence: None,
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
        }
    }
}

impl Task {
    /// Check if this task is still pending
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Check if completing this task spawns a next instance
    ///
    /// Both a recurrence and a deadline are required; recurrence on its own
    /// never respawns.
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some() && self.deadline.is_some()
    }

    /// The deadline a spawned next instance would carry, if any
    pub fn next_deadline(&self) -> Option<NaiveDate> {
        Some(advance(self.deadline?, self.recurrence?))
    }
}

//! Domain models and business logic
//!
//! This module contains the core data structures and their implementations.
//! It is split into submodules for better organization:
//! - `list`: List node in the hierarchy
//! - `task`: Task structure and recurrence arithmetic
//! - `life_data`: Main data container with all mutating operations
//! - `queries`: Read-only aggregation over the store

mod life_data;
mod list;
mod queries;
mod task;

// Re-export all public types
pub use life_data::{CascadeOutcome, LifeData, ToggleOutcome};
pub use list::{GroupMode, List};
pub use queries::{
    DateBucket, DeadlineGroup, FrequencyGroup, group_by_deadline, group_by_frequency,
};
pub use task::{Recurrence, Task, advance, local_date_today};

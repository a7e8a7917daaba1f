//! Plan types for the scheduler

use serde::Serialize;

use crate::domain::{PetId, Task};

/// Sort key for tasks with no usable scheduled time; sorts after every
/// valid clock value
pub const UNSCHEDULED: u32 = u32::MAX;

/// One pet's share of a generated daily plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    /// Surrogate key of the pet this entry belongs to
    pub pet: PetId,

    /// Pet name, carried for report rendering
    pub pet_name: String,

    /// Species label, carried for report rendering
    pub species: String,

    /// Tasks selected within the budget, in selection order
    pub tasks: Vec<Task>,

    /// Summed duration of the selected tasks
    pub total_minutes: f64,
}

/// Parse an "HH:MM" clock string into minutes since midnight
///
/// Returns `None` for anything that is not a valid 24-hour clock time;
/// malformed input is treated as "no time", never an error.
pub fn clock_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Sort key for a task's scheduled time: parsed clock minutes, or
/// [`UNSCHEDULED`] when the time is unset or malformed
pub fn time_sort_key(task: &Task) -> u32 {
    task.scheduled_time
        .as_deref()
        .and_then(clock_minutes)
        .unwrap_or(UNSCHEDULED)
}

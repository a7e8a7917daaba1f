//! Daily plan generation
//!
//! The scheduler consumes an [`Owner`](crate::domain::Owner) and its pets,
//! selects due tasks within the daily budget, and detects scheduling
//! conflicts across pets.

mod core;
mod plan;

pub use self::core::Scheduler;
pub use plan::{PlanEntry, clock_minutes, time_sort_key};

//! PawPal - daily care-task scheduling for multi-pet households
//!
//! PawPal decides which recurring care tasks are due, greedily selects the
//! ones that fit an owner's daily time budget, flags tasks scheduled at the
//! same clock time, and explains the resulting plan.
//!
//! # Core Concepts
//!
//! - **Due-ness is derived**: a task's recurrence frequency and the date it
//!   was last completed decide whether it needs attention on a given date
//! - **Completion spawns occurrences**: finishing a daily or weekly task
//!   produces a fresh successor rather than mutating the old one in place
//! - **Plans are transient**: the scheduler rebuilds its plan from the owner
//!   graph on every call and holds derived state only
//!
//! # Modules
//!
//! - [`domain`] - Task, Pet, and Owner types
//! - [`scheduler`] - Budget-constrained selection and conflict detection
//! - [`roster`] - YAML roster loading for the CLI
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod roster;
pub mod scheduler;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Frequency, Owner, Pet, PetId, Task, TaskError};
pub use roster::Roster;
pub use scheduler::{PlanEntry, Scheduler};

//! Roster loading
//!
//! A roster is a YAML document describing an owner, their pets, and each
//! pet's recurring tasks. It feeds the CLI; the engine itself never touches
//! the filesystem.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, Owner, Pet, Task};

/// Top-level roster document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Owner name
    pub owner: String,

    /// Daily time budget in minutes; falls back to the configured default
    /// when omitted
    #[serde(rename = "daily-minutes", default)]
    pub daily_minutes: Option<f64>,

    /// Pets in roster order
    #[serde(default)]
    pub pets: Vec<PetSpec>,
}

/// One pet in the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetSpec {
    pub name: String,
    pub species: String,

    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

/// One task in the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,

    /// Duration in minutes
    pub duration: f64,

    /// Priority 1-5, 5 highest
    pub priority: u8,

    /// Free-form category
    #[serde(rename = "type")]
    pub task_type: String,

    pub frequency: Frequency,

    /// Optional "HH:MM" time-of-day
    #[serde(rename = "scheduled-time", default)]
    pub scheduled_time: Option<String>,

    /// Date the task was last completed
    #[serde(rename = "last-completed", default)]
    pub last_completed: Option<NaiveDate>,
}

impl Roster {
    /// Load a roster from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .context(format!("Failed to read roster from {}", path.as_ref().display()))?;
        let roster: Self = serde_yaml::from_str(&content)
            .context(format!("Failed to parse roster {}", path.as_ref().display()))?;
        Ok(roster)
    }

    /// Assemble the owner aggregate, using `default_budget` when the roster
    /// does not set one
    pub fn into_owner(self, default_budget: f64) -> Owner {
        let mut owner = Owner::new(self.owner, self.daily_minutes.unwrap_or(default_budget));
        for spec in self.pets {
            let mut pet = Pet::new(spec.name, spec.species);
            for task in spec.tasks {
                pet.add_task(task.into_task());
            }
            owner.add_pet(pet);
        }
        owner
    }
}

impl TaskSpec {
    fn into_task(self) -> Task {
        let mut task = Task::new(self.name, self.duration, self.priority, self.task_type, self.frequency);
        task.scheduled_time = self.scheduled_time;
        task.last_completed = self.last_completed;
        task
    }
}

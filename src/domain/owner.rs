//! Owner domain type
//!
//! The Owner is the aggregation root: every cross-pet query routes through
//! it. Owns the pet list and the single daily time budget the scheduler
//! allocates against.

use chrono::NaiveDate;
use serde::Serialize;

use super::pet::Pet;
use super::task::Task;

/// A pet owner with a daily time budget
#[derive(Debug, Clone, Serialize)]
pub struct Owner {
    /// Owner name
    pub name: String,

    /// Minutes available per planning cycle
    pub daily_minutes: f64,

    /// Pets in addition order
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Create an owner with no pets
    pub fn new(name: impl Into<String>, daily_minutes: f64) -> Self {
        Self {
            name: name.into(),
            daily_minutes,
            pets: Vec::new(),
        }
    }

    /// Append a pet
    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// All pets in addition order
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Replace the daily time budget
    pub fn set_daily_minutes(&mut self, minutes: f64) {
        self.daily_minutes = minutes;
    }

    /// Every task across all pets: pets in addition order, tasks in
    /// per-pet append order
    pub fn all_tasks(&self) -> Vec<&Task> {
        self.pets.iter().flat_map(|p| p.tasks().iter()).collect()
    }

    /// Ordered `(pet, due-tasks)` pairs for the given date
    ///
    /// Pets with nothing due are omitted entirely; the scheduler relies on
    /// this to shape the plan.
    pub fn tasks_due_on(&self, as_of: NaiveDate) -> Vec<(&Pet, Vec<&Task>)> {
        self.pets
            .iter()
            .map(|p| (p, p.tasks_due_on(as_of)))
            .filter(|(_, due)| !due.is_empty())
            .collect()
    }

    /// Tasks filtered by completion flag, across all pets
    pub fn tasks_by_completion(&self, completed: bool) -> Vec<&Task> {
        self.all_tasks().into_iter().filter(|t| t.completed == completed).collect()
    }

    /// Tasks of the first pet matching `name` (linear scan); empty when no
    /// pet matches
    pub fn tasks_by_pet_name(&self, name: &str) -> &[Task] {
        self.pets
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.tasks())
            .unwrap_or(&[])
    }
}

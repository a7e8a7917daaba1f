//! Pet domain type
//!
//! A Pet owns an ordered list of tasks. Tasks append in insertion order;
//! duplicates by name are allowed and never deduplicated.

use chrono::NaiveDate;
use serde::Serialize;

use super::id::PetId;
use super::task::Task;

/// A pet with its care tasks
#[derive(Debug, Clone, Serialize)]
pub struct Pet {
    /// Surrogate key for schedule maps
    pub id: PetId,

    /// Pet name (not unique across an owner)
    pub name: String,

    /// Species or breed label
    pub species: String,

    /// Tasks in append order
    pub tasks: Vec<Task>,
}

impl Pet {
    /// Create a pet with no tasks and a freshly generated ID
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: PetId::new(&name),
            name,
            species: species.into(),
            tasks: Vec::new(),
        }
    }

    /// Append a task; no capacity limit, no duplicate check
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// All tasks in append order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching a category, order preserved
    pub fn tasks_by_type(&self, task_type: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.task_type == task_type).collect()
    }

    /// Tasks due on the given date, order preserved
    pub fn tasks_due_on(&self, as_of: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_due_on(as_of)).collect()
    }

    /// Complete the task at `index` on the given date
    ///
    /// Replaces the stored task with its completed form; if the frequency
    /// recurs, appends the successor occurrence and returns a clone of it.
    /// Out-of-range indices are a no-op returning `None`.
    pub fn complete_task(&mut self, index: usize, on: NaiveDate) -> Option<Task> {
        let task = self.tasks.get(index)?;
        let (done, successor) = task.complete(on);
        self.tasks[index] = done;
        if let Some(next) = successor.clone() {
            self.add_task(next);
        }
        successor
    }
}

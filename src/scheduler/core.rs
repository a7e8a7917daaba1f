//! Scheduler implementation
//!
//! The scheduler borrows the owner graph and rebuilds its plan from scratch
//! on every planning call; it holds derived state only. Each pet's selection
//! is evaluated against the owner's full daily budget independently, not a
//! running total shared across pets.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Owner, Pet, PetId, Task};

use super::plan::{PlanEntry, time_sort_key};

/// Plans a day of care tasks for one owner's pets
pub struct Scheduler<'a> {
    owner: &'a Owner,
    plan: Vec<PlanEntry>,
    warnings: Vec<String>,
}

impl<'a> Scheduler<'a> {
    /// Create a scheduler for the given owner with no plan yet
    pub fn new(owner: &'a Owner) -> Self {
        Self {
            owner,
            plan: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Generate the plan for `as_of`, replacing any prior plan
    ///
    /// Returns the pre-prioritization `(pet, due-tasks)` pairs; pets with
    /// nothing due are absent. The budget-filtered selection is cached and
    /// read through [`Scheduler::plan`] and the other accessors.
    pub fn generate_daily_plan(&mut self, as_of: NaiveDate) -> Vec<(&'a Pet, Vec<Task>)> {
        debug!(%as_of, "Scheduler::generate_daily_plan: called");
        let owner = self.owner;
        let due = owner.tasks_due_on(as_of);
        debug!(pets = due.len(), "Scheduler::generate_daily_plan: pets with due tasks");

        self.plan = due
            .iter()
            .map(|(pet, tasks)| {
                let candidates: Vec<Task> = tasks.iter().map(|t| (*t).clone()).collect();
                let selected = self.prioritize_tasks(&candidates);
                let total_minutes = selected.iter().map(|t| t.duration).sum();
                debug!(
                    pet = %pet.id,
                    due = candidates.len(),
                    selected = selected.len(),
                    total_minutes,
                    "Scheduler::generate_daily_plan: pet selection"
                );
                PlanEntry {
                    pet: pet.id.clone(),
                    pet_name: pet.name.clone(),
                    species: pet.species.clone(),
                    tasks: selected,
                    total_minutes,
                }
            })
            .collect();

        self.warnings = self.detect_schedule_conflicts();

        due.into_iter()
            .map(|(pet, tasks)| (pet, tasks.into_iter().cloned().collect()))
            .collect()
    }

    /// Greedily select tasks within the owner's daily budget
    ///
    /// Tasks are ranked by priority descending, then duration ascending;
    /// ties keep their original input order. The walk commits a task iff
    /// the running total plus its duration still fits the budget (exact
    /// fits included). A task skipped for exceeding the budget is never
    /// revisited, so this is an approximation rather than an optimal
    /// knapsack.
    pub fn prioritize_tasks(&self, tasks: &[Task]) -> Vec<Task> {
        let budget = self.owner.daily_minutes;
        debug!(candidates = tasks.len(), budget, "Scheduler::prioritize_tasks: called");

        let mut ranked = tasks.to_vec();
        // sort_by is stable, which is what keeps ties in input order
        ranked.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.duration.total_cmp(&b.duration))
        });

        let mut committed = 0.0;
        let mut selected = Vec::new();
        for task in ranked {
            if committed + task.duration <= budget {
                committed += task.duration;
                selected.push(task);
            } else {
                debug!(task = %task.name, committed, "Scheduler::prioritize_tasks: over budget, skipping");
            }
        }
        selected
    }

    /// Order tasks chronologically by their "HH:MM" scheduled time
    ///
    /// Unset or malformed times sort after every valid time; relative order
    /// among equal keys (including all the displaced tasks) is preserved.
    pub fn sort_by_time(&self, tasks: &[Task]) -> Vec<Task> {
        let mut ordered = tasks.to_vec();
        ordered.sort_by_key(time_sort_key);
        ordered
    }

    /// Scan the current plan for tasks sharing an exact scheduled time
    ///
    /// Only tasks actually selected into the plan are checked; tasks dropped
    /// for exceeding the budget cannot conflict. Grouping is by the raw time
    /// string in encounter order, one warning per conflicting time naming
    /// every pet and task involved.
    pub fn detect_schedule_conflicts(&self) -> Vec<String> {
        debug!("Scheduler::detect_schedule_conflicts: called");
        let mut by_time: Vec<(&str, Vec<(&str, &str)>)> = Vec::new();

        for entry in &self.plan {
            for task in &entry.tasks {
                let Some(time) = task.scheduled_time.as_deref() else {
                    continue;
                };
                let involved = (entry.pet_name.as_str(), task.name.as_str());
                match by_time.iter_mut().find(|(t, _)| *t == time) {
                    Some((_, names)) => names.push(involved),
                    None => by_time.push((time, vec![involved])),
                }
            }
        }

        by_time
            .into_iter()
            .filter(|(_, names)| names.len() >= 2)
            .map(|(time, names)| {
                let involved = names
                    .iter()
                    .map(|(pet, task)| format!("{} ({})", pet, task))
                    .collect::<Vec<_>>()
                    .join(", ");
                debug!(time, involved = %involved, "Scheduler::detect_schedule_conflicts: conflict");
                format!("Conflict at {}: {}", time, involved)
            })
            .collect()
    }

    /// Render the current plan as a multi-line report
    ///
    /// Header with owner name and budget, one block per pet with its
    /// selected tasks in chronological order, a total line, and the cached
    /// conflict warnings when any exist. An absent or empty plan renders a
    /// fixed placeholder instead.
    pub fn explain_plan(&self) -> String {
        if self.plan.iter().all(|e| e.tasks.is_empty()) {
            return "No tasks scheduled for today.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "Daily plan for {} (budget: {} min)\n",
            self.owner.name, self.owner.daily_minutes
        ));

        for entry in &self.plan {
            if entry.tasks.is_empty() {
                continue;
            }
            out.push('\n');
            out.push_str(&format!("{} ({}):\n", entry.pet_name, entry.species));
            for task in self.sort_by_time(&entry.tasks) {
                out.push_str(&format!(
                    "  - {} ({} min) [Priority: {}]",
                    task.name, task.duration, task.priority
                ));
                if let Some(time) = &task.scheduled_time {
                    out.push_str(&format!(" @ {}", time));
                }
                out.push('\n');
            }
            out.push_str(&format!("  Subtotal: {} min\n", entry.total_minutes));
        }

        let total: f64 = self.plan.iter().map(|e| e.total_minutes).sum();
        out.push_str(&format!("\nTotal scheduled: {} min\n", total));

        if !self.warnings.is_empty() {
            out.push_str("\nWARNING: schedule conflicts detected:\n");
            for warning in &self.warnings {
                out.push_str(&format!("  - {}\n", warning));
            }
        }

        out
    }

    /// The last generated plan, one entry per pet with due tasks
    pub fn plan(&self) -> &[PlanEntry] {
        &self.plan
    }

    /// Conflict warnings cached by the last planning call
    pub fn conflict_warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Selected tasks for one pet; empty when the pet has no plan entry
    pub fn scheduled_tasks_for(&self, pet: &PetId) -> &[Task] {
        self.plan
            .iter()
            .find(|e| &e.pet == pet)
            .map(|e| e.tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Scheduled tasks filtered by completion flag
    pub fn scheduled_tasks_by_completion(&self, completed: bool) -> Vec<&Task> {
        self.plan
            .iter()
            .flat_map(|e| e.tasks.iter())
            .filter(|t| t.completed == completed)
            .collect()
    }
}

//! Task domain type
//!
//! A Task is a recurring unit of care work for a pet. Due-ness is derived
//! from its frequency and the date it was last completed; completing a
//! recurring task produces a fresh successor occurrence.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::frequency::Frequency;

/// Validation errors for strict task construction
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("priority {priority} out of range (expected 1-5)")]
    PriorityOutOfRange { priority: u8 },

    #[error("duration {duration} must be non-negative")]
    NegativeDuration { duration: f64 },
}

/// A recurring unit of care work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task name (e.g., "Morning Walk")
    pub name: String,

    /// Duration in minutes
    pub duration: f64,

    /// Priority 1-5, 5 highest
    pub priority: u8,

    /// Free-form category (e.g., "Exercise", "Feeding")
    #[serde(rename = "type")]
    pub task_type: String,

    /// How often the task recurs
    pub frequency: Frequency,

    /// Whether this occurrence has been completed
    #[serde(default)]
    pub completed: bool,

    /// Date this task was last completed, if ever
    #[serde(default)]
    pub last_completed: Option<NaiveDate>,

    /// Optional "HH:MM" time-of-day, unvalidated
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

impl Task {
    /// Create a new pending task
    ///
    /// Accepts any priority and duration; use [`Task::validated`] for strict
    /// range checks at construction time.
    pub fn new(
        name: impl Into<String>,
        duration: f64,
        priority: u8,
        task_type: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            priority,
            task_type: task_type.into(),
            frequency,
            completed: false,
            last_completed: None,
            scheduled_time: None,
        }
    }

    /// Create a task, rejecting out-of-range priorities and negative durations
    pub fn validated(
        name: impl Into<String>,
        duration: f64,
        priority: u8,
        task_type: impl Into<String>,
        frequency: Frequency,
    ) -> Result<Self, TaskError> {
        if !(1..=5).contains(&priority) {
            return Err(TaskError::PriorityOutOfRange { priority });
        }
        if duration < 0.0 {
            return Err(TaskError::NegativeDuration { duration });
        }
        Ok(Self::new(name, duration, priority, task_type, frequency))
    }

    /// Set a scheduled time-of-day (builder style)
    pub fn with_scheduled_time(mut self, time: impl Into<String>) -> Self {
        self.scheduled_time = Some(time.into());
        self
    }

    /// Set the last-completed date (builder style)
    pub fn with_last_completed(mut self, date: NaiveDate) -> Self {
        self.last_completed = Some(date);
        self
    }

    /// Check whether the task requires attention on the given date
    ///
    /// Pure function of (frequency, last_completed, as_of):
    /// - Daily: never completed, or completed on a different date
    /// - Weekly: never completed, or completed at least 7 days before `as_of`
    /// - Monthly: never completed, or completed in a different calendar month
    ///   (the year is not compared)
    /// - AsNeeded: always due
    pub fn is_due_on(&self, as_of: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily => self.last_completed.is_none_or(|d| d != as_of),
            Frequency::Weekly => self.last_completed.is_none_or(|d| (as_of - d).num_days() >= 7),
            Frequency::Monthly => self.last_completed.is_none_or(|d| d.month() != as_of.month()),
            Frequency::AsNeeded => true,
        }
    }

    /// Complete this occurrence on the given date
    ///
    /// Returns the completed occurrence and, for recurring frequencies
    /// (daily/weekly), a fresh successor occurrence as two independent
    /// values; the caller decides what to store. The successor copies every
    /// field except `completed` and `last_completed`, which reset, so it is
    /// due again immediately rather than after the interval.
    pub fn complete(&self, on: NaiveDate) -> (Task, Option<Task>) {
        let mut done = self.clone();
        done.completed = true;
        done.last_completed = Some(on);

        let successor = self.frequency.recurs().then(|| {
            let mut next = self.clone();
            next.completed = false;
            next.last_completed = None;
            next
        });

        (done, successor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("Feed", 10.0, 5, "Feeding", Frequency::Daily);
        assert_eq!(task.name, "Feed");
        assert!(!task.completed);
        assert!(task.last_completed.is_none());
        assert!(task.scheduled_time.is_none());
    }

    #[test]
    fn test_validated_rejects_priority_out_of_range() {
        assert!(matches!(
            Task::validated("Feed", 10.0, 0, "Feeding", Frequency::Daily),
            Err(TaskError::PriorityOutOfRange { priority: 0 })
        ));
        assert!(matches!(
            Task::validated("Feed", 10.0, 6, "Feeding", Frequency::Daily),
            Err(TaskError::PriorityOutOfRange { priority: 6 })
        ));
    }

    #[test]
    fn test_validated_rejects_negative_duration() {
        assert!(matches!(
            Task::validated("Feed", -1.0, 3, "Feeding", Frequency::Daily),
            Err(TaskError::NegativeDuration { .. })
        ));
    }

    #[test]
    fn test_validated_accepts_documented_range() {
        assert!(Task::validated("Feed", 0.0, 1, "Feeding", Frequency::Daily).is_ok());
        assert!(Task::validated("Walk", 45.0, 5, "Exercise", Frequency::Weekly).is_ok());
    }

    #[test]
    fn test_daily_due_when_never_completed() {
        let task = Task::new("Feed", 10.0, 5, "Feeding", Frequency::Daily);
        assert!(task.is_due_on(date(2026, 8, 7)));
    }

    #[test]
    fn test_daily_not_due_when_completed_today() {
        let today = date(2026, 8, 7);
        let task = Task::new("Feed", 10.0, 5, "Feeding", Frequency::Daily).with_last_completed(today);
        assert!(!task.is_due_on(today));
    }

    #[test]
    fn test_daily_due_when_completed_yesterday() {
        let task =
            Task::new("Feed", 10.0, 5, "Feeding", Frequency::Daily).with_last_completed(date(2026, 8, 6));
        assert!(task.is_due_on(date(2026, 8, 7)));
    }

    #[test]
    fn test_weekly_due_at_seven_days_not_six() {
        let task =
            Task::new("Bath", 30.0, 2, "Grooming", Frequency::Weekly).with_last_completed(date(2026, 8, 1));
        assert!(!task.is_due_on(date(2026, 8, 7))); // 6 days
        assert!(task.is_due_on(date(2026, 8, 8))); // 7 days
    }

    #[test]
    fn test_weekly_due_when_never_completed() {
        let task = Task::new("Bath", 30.0, 2, "Grooming", Frequency::Weekly);
        assert!(task.is_due_on(date(2026, 8, 7)));
    }

    #[test]
    fn test_monthly_due_on_month_change_only() {
        let task = Task::new("Flea meds", 5.0, 4, "Health", Frequency::Monthly)
            .with_last_completed(date(2026, 7, 31));
        assert!(task.is_due_on(date(2026, 8, 1)));

        let same_month = Task::new("Flea meds", 5.0, 4, "Health", Frequency::Monthly)
            .with_last_completed(date(2026, 8, 1));
        assert!(!same_month.is_due_on(date(2026, 8, 31)));
    }

    #[test]
    fn test_monthly_ignores_year() {
        // Completed in August of a previous year still counts as "this month"
        let task = Task::new("Flea meds", 5.0, 4, "Health", Frequency::Monthly)
            .with_last_completed(date(2025, 8, 15));
        assert!(!task.is_due_on(date(2026, 8, 7)));
    }

    #[test]
    fn test_as_needed_always_due() {
        let today = date(2026, 8, 7);
        let task =
            Task::new("Nail trim", 15.0, 1, "Grooming", Frequency::AsNeeded).with_last_completed(today);
        assert!(task.is_due_on(today));
    }

    #[test]
    fn test_complete_marks_receiver_only() {
        let today = date(2026, 8, 7);
        let task = Task::new("Feed", 10.0, 5, "Feeding", Frequency::Daily).with_scheduled_time("08:00");
        let (done, _) = task.complete(today);

        assert!(done.completed);
        assert_eq!(done.last_completed, Some(today));
        // Every other field is untouched
        assert_eq!(done.name, task.name);
        assert_eq!(done.duration, task.duration);
        assert_eq!(done.priority, task.priority);
        assert_eq!(done.task_type, task.task_type);
        assert_eq!(done.frequency, task.frequency);
        assert_eq!(done.scheduled_time, task.scheduled_time);
    }

    #[test]
    fn test_complete_daily_spawns_fresh_successor() {
        let today = date(2026, 8, 7);
        let task = Task::new("Feed", 10.0, 5, "Feeding", Frequency::Daily).with_scheduled_time("08:00");
        let (_, successor) = task.complete(today);

        let next = successor.expect("daily task should spawn a successor");
        assert!(!next.completed);
        assert!(next.last_completed.is_none());
        assert_eq!(next.name, task.name);
        assert_eq!(next.scheduled_time, task.scheduled_time);
        // Reset last_completed means the successor is due again right away
        assert!(next.is_due_on(today));
    }

    #[test]
    fn test_complete_weekly_spawns_successor() {
        let (_, successor) =
            Task::new("Bath", 30.0, 2, "Grooming", Frequency::Weekly).complete(date(2026, 8, 7));
        assert!(successor.is_some());
    }

    #[test]
    fn test_complete_monthly_and_as_needed_no_successor() {
        let today = date(2026, 8, 7);
        let (_, monthly) = Task::new("Flea meds", 5.0, 4, "Health", Frequency::Monthly).complete(today);
        assert!(monthly.is_none());

        let (_, as_needed) =
            Task::new("Nail trim", 15.0, 1, "Grooming", Frequency::AsNeeded).complete(today);
        assert!(as_needed.is_none());
    }

    #[test]
    fn test_task_serde_roundtrip() {
        let task = Task::new("Walk", 45.0, 5, "Exercise", Frequency::Daily)
            .with_scheduled_time("09:00")
            .with_last_completed(date(2026, 8, 6));

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, task.name);
        assert_eq!(back.frequency, task.frequency);
        assert_eq!(back.last_completed, task.last_completed);
        assert_eq!(back.scheduled_time, task.scheduled_time);
    }
}

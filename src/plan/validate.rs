// src/plan/validate.rs

use std::collections::HashSet;

use thiserror::Error;

use crate::config::model::{Task, Worker};

/// Reason a worker/task batch was rejected before any planning happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// Human-readable reason for the rejection.
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// Run basic semantic validation against a worker/task batch.
///
/// This checks:
/// - every worker has a non-empty, unique name
/// - every worker's `max_hours` is finite and non-negative
/// - every task has a non-empty, unique name
/// - every task's `hours_required` is finite and non-negative
///
/// It does **not** check that `depends_on` names refer to tasks in the batch:
/// an unresolvable dependency makes the task land in the unassigned list,
/// which is an expected planning outcome rather than an input error.
///
/// Fails on the first violation found; no partial recovery.
pub fn validate_input(workers: &[Worker], tasks: &[Task]) -> Result<(), ValidationError> {
    validate_workers(workers)?;
    validate_tasks(tasks)?;
    Ok(())
}

fn validate_workers(workers: &[Worker]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for worker in workers {
        if worker.name.is_empty() {
            return Err(ValidationError::new(
                "invalid worker data: each worker must have a non-empty name",
            ));
        }
        if !seen.insert(worker.name.as_str()) {
            return Err(ValidationError::new(format!(
                "invalid worker data: duplicate worker name '{}'",
                worker.name
            )));
        }
        if !worker.max_hours.is_finite() || worker.max_hours < 0.0 {
            return Err(ValidationError::new(format!(
                "invalid worker data: worker '{}' has max_hours {}, expected a finite value >= 0",
                worker.name, worker.max_hours
            )));
        }
    }

    Ok(())
}

fn validate_tasks(tasks: &[Task]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();

    for task in tasks {
        if task.name.is_empty() {
            return Err(ValidationError::new(
                "invalid task data: each task must have a non-empty name",
            ));
        }
        if !seen.insert(task.name.as_str()) {
            return Err(ValidationError::new(format!(
                "invalid task data: duplicate task name '{}'",
                task.name
            )));
        }
        if !task.hours_required.is_finite() || task.hours_required < 0.0 {
            return Err(ValidationError::new(format!(
                "invalid task data: task '{}' has hours_required {}, expected a finite value >= 0",
                task.name, task.hours_required
            )));
        }
    }

    Ok(())
}

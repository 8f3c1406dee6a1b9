// src/plan/engine.rs

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::model::{Task, Worker};
use crate::plan::ledger::{Ledger, WorkerLedger};
use crate::plan::matcher::{CategoryMode, find_worker};
use crate::plan::order::order_by_priority;
use crate::plan::validate::{ValidationError, validate_input};

/// Result of one engine run.
///
/// A populated `error` means no plan was computed: `assignments` and
/// `unassigned` are both empty and must not be read as a degenerate plan.
/// Otherwise every input task name appears in exactly one place, either in
/// some worker's `tasks` list or in `unassigned`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentPlan {
    /// Worker name -> assigned tasks and committed hours.
    pub assignments: BTreeMap<String, WorkerLedger>,

    /// Tasks that could not be placed, in processing order
    /// (priority-descending, stable ties).
    pub unassigned: Vec<String>,

    /// Present only when input validation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssignmentPlan {
    /// Plan returned when the input batch was rejected outright.
    pub fn rejected(err: &ValidationError) -> Self {
        Self {
            assignments: BTreeMap::new(),
            unassigned: Vec::new(),
            error: Some(err.reason().to_string()),
        }
    }
}

/// Assign `tasks` to `workers` in a single forward pass, failing on invalid
/// input.
///
/// Tasks are visited in priority-descending order with stable ties. Each task
/// is considered exactly once:
///
/// - If any `depends_on` name is not yet in the completed set, the task goes
///   to `unassigned` for good. There is no second pass, so a dependency
///   scheduled *later* in the same run cannot rescue it.
/// - Otherwise the matcher runs in strict category mode first, then relaxed.
///   The first qualifying worker (in input order) gets the task: its ledger
///   entry grows and the task name joins the completed set.
/// - If both passes find nobody, the task goes to `unassigned`.
///
/// Identical inputs always produce an identical plan.
pub fn try_assign(workers: &[Worker], tasks: &[Task]) -> Result<AssignmentPlan, ValidationError> {
    validate_input(workers, tasks)?;

    let mut ledger = Ledger::for_workers(workers);
    let mut completed: HashSet<String> = HashSet::new();
    let mut unassigned: Vec<String> = Vec::new();

    for task in order_by_priority(tasks) {
        if !dependencies_met(task, &completed) {
            debug!(task = %task.name, deps = ?task.depends_on, "dependencies unmet; task is unassignable this run");
            unassigned.push(task.name.clone());
            continue;
        }

        let mut matched = find_worker(task, workers, &ledger, CategoryMode::Strict);
        if matched.is_none() {
            matched = find_worker(task, workers, &ledger, CategoryMode::Relaxed);
            if matched.is_some() {
                debug!(task = %task.name, "no preferred-type worker available; category constraint relaxed");
            }
        }

        match matched {
            Some(worker) => {
                debug!(
                    task = %task.name,
                    worker = %worker.name,
                    hours = task.hours_required,
                    "task assigned"
                );
                ledger.record(&worker.name, &task.name, task.hours_required);
                completed.insert(task.name.clone());
            }
            None => {
                debug!(task = %task.name, "no worker with enough skill and capacity; task unassigned");
                unassigned.push(task.name.clone());
            }
        }
    }

    info!(
        assigned = completed.len(),
        unassigned = unassigned.len(),
        "assignment pass complete"
    );

    Ok(AssignmentPlan {
        assignments: ledger.into_entries(),
        unassigned,
        error: None,
    })
}

/// Convenience wrapper over [`try_assign`] that folds a validation failure
/// into the plan's `error` field instead of returning `Err`.
///
/// Callers that want to branch on the failure should use [`try_assign`];
/// callers that only ever serialize the plan as-is can use this.
pub fn assign(workers: &[Worker], tasks: &[Task]) -> AssignmentPlan {
    match try_assign(workers, tasks) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(reason = %err.reason(), "input rejected; no plan computed");
            AssignmentPlan::rejected(&err)
        }
    }
}

/// A task is eligible only once every name in `depends_on` has been assigned
/// earlier in this run. Empty dependency lists always pass.
fn dependencies_met(task: &Task, completed: &HashSet<String>) -> bool {
    task.depends_on.iter().all(|dep| completed.contains(dep))
}

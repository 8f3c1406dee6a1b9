// src/plan/ledger.rs

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::config::model::Worker;

/// One worker's share of the plan: assigned task names in assignment order,
/// plus the hours committed so far.
///
/// Serialized field names match the plan output format (`tasks`,
/// `totalHours`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerLedger {
    pub tasks: Vec<String>,
    pub total_hours: f64,
}

/// Per-run record of what each worker has been given.
///
/// Built fresh for every engine run with one zeroed entry per worker, mutated
/// in place as tasks are placed, and handed back to the caller inside the
/// final plan. Nothing survives across runs.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: BTreeMap<String, WorkerLedger>,
}

impl Ledger {
    /// Create a ledger with a zeroed entry for each worker.
    pub fn for_workers(workers: &[Worker]) -> Self {
        let entries = workers
            .iter()
            .map(|w| (w.name.clone(), WorkerLedger::default()))
            .collect();
        Self { entries }
    }

    /// Hours already committed to the named worker.
    ///
    /// Unknown names report zero; the matcher only asks about workers the
    /// ledger was built from.
    pub fn total_hours(&self, worker: &str) -> f64 {
        self.entries.get(worker).map(|e| e.total_hours).unwrap_or(0.0)
    }

    /// Record an assignment against the named worker.
    pub fn record(&mut self, worker: &str, task: &str, hours: f64) {
        match self.entries.get_mut(worker) {
            Some(entry) => {
                entry.tasks.push(task.to_string());
                entry.total_hours += hours;
            }
            None => {
                warn!(%worker, %task, "assignment recorded for unknown worker; ignoring");
            }
        }
    }

    /// Read-only view of one worker's entry.
    pub fn get(&self, worker: &str) -> Option<&WorkerLedger> {
        self.entries.get(worker)
    }

    /// Consume the ledger into the name-keyed map used in the plan output.
    pub fn into_entries(self) -> BTreeMap<String, WorkerLedger> {
        self.entries
    }
}

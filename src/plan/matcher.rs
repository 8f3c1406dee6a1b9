// src/plan/matcher.rs

use crate::config::model::{Task, Worker};
use crate::plan::ledger::Ledger;

/// Category constraint applied by [`find_worker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryMode {
    /// The worker's preferred task type must admit the task's type.
    Strict,
    /// Category preference is ignored; skill and capacity still apply.
    Relaxed,
}

/// Find the first worker, in input order, able to take `task` given the
/// hours already committed in `ledger`.
///
/// A worker qualifies when:
/// - `skill_level >= task.difficulty`
/// - committed hours plus `task.hours_required` fit within `max_hours`
/// - in [`CategoryMode::Strict`], the worker prefers the task's type
///   (or prefers `"any"`)
///
/// Worker order is a semantic input: the *first* qualifying worker wins, so
/// two orderings of the identical pool can produce different valid plans.
/// That is documented behaviour, not nondeterminism to fix, which is why this
/// is a plain linear scan over the input slice.
///
/// Pure lookup; the ledger is not modified. `None` means "no match", which is
/// an expected outcome rather than an error.
pub fn find_worker<'a>(
    task: &Task,
    workers: &'a [Worker],
    ledger: &Ledger,
    mode: CategoryMode,
) -> Option<&'a Worker> {
    workers.iter().find(|worker| {
        worker.skill_level >= task.difficulty
            && ledger.total_hours(&worker.name) + task.hours_required <= worker.max_hours
            && match mode {
                CategoryMode::Strict => worker.prefers(&task.task_type),
                CategoryMode::Relaxed => true,
            }
    })
}

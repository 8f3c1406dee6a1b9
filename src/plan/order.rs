// src/plan/order.rs

use crate::config::model::Task;

/// Produce a priority-descending view of `tasks`.
///
/// The sort must be stable: tasks with equal priority keep their relative
/// input order, and dependency gating downstream is sensitive to that order
/// when priorities tie. `slice::sort_by` guarantees stability.
///
/// The caller's slice is never reordered; this returns a new borrowed view.
pub fn order_by_priority(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
    ordered
}

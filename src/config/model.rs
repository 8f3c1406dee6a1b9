// src/config/model.rs

use serde::Deserialize;

/// Preference value meaning "this worker takes tasks of any type".
pub const ANY_TASK_TYPE: &str = "any";

/// Top-level plan file as read from TOML.
///
/// This is a direct mapping of the input format:
///
/// ```toml
/// [[worker]]
/// name = "Alice"
/// skill_level = 7
/// max_hours = 40
/// preferred_task_type = "feature"
///
/// [[task]]
/// name = "Feature A"
/// difficulty = 7
/// hours_required = 15
/// task_type = "feature"
/// priority = 4
/// depends_on = []
/// ```
///
/// Both collections are ordered, and order matters: workers are searched
/// first-to-last when placing a task, and task input order breaks priority
/// ties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFile {
    /// All workers from `[[worker]]` entries, in file order.
    #[serde(default)]
    pub worker: Vec<Worker>,

    /// All tasks from `[[task]]` entries, in file order.
    #[serde(default)]
    pub task: Vec<Task>,
}

/// A `[[worker]]` entry: someone tasks can be assigned to.
#[derive(Debug, Clone, Deserialize)]
pub struct Worker {
    /// Unique worker name.
    pub name: String,

    /// Skill level; the worker can take a task only if this is at least the
    /// task's difficulty.
    pub skill_level: i64,

    /// Upper bound on the total hours this worker can commit in one plan.
    pub max_hours: f64,

    /// Preferred task type tag, honoured during the strict matching pass.
    ///
    /// The sentinel `"any"` (the default) means no restriction.
    #[serde(default = "default_preferred_task_type")]
    pub preferred_task_type: String,
}

fn default_preferred_task_type() -> String {
    ANY_TASK_TYPE.to_string()
}

impl Worker {
    /// Whether this worker's preference admits the given task type.
    pub fn prefers(&self, task_type: &str) -> bool {
        self.preferred_task_type == ANY_TASK_TYPE || self.preferred_task_type == task_type
    }
}

/// A `[[task]]` entry: one unit of work to place.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    /// Unique task name; also the key used in `depends_on` lists.
    pub name: String,

    /// Difficulty rating, compared against worker skill.
    pub difficulty: i64,

    /// Effort this task consumes from the assigned worker's `max_hours`.
    pub hours_required: f64,

    /// Type tag, compared against worker preference in the strict pass.
    #[serde(default)]
    pub task_type: String,

    /// Higher priority is scheduled first; equal priorities keep input order.
    #[serde(default)]
    pub priority: i64,

    /// Names of tasks that must already be assigned before this one is
    /// eligible. Names that match no task in the batch make this task
    /// permanently unassignable, which is an expected outcome rather than an
    /// input error.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

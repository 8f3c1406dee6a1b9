// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::PlanFile;
use crate::errors::Result;

/// Load a plan file from a given path and return the raw `PlanFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation of the workers and tasks. The engine validates every batch it
/// is handed, whether it came from a file or was built in code, so the
/// loader stays a pure parsing step.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<PlanFile> {
    let path = path.as_ref();
    debug!(?path, "loading plan file");

    let contents = fs::read_to_string(path)?;
    let plan: PlanFile = toml::from_str(&contents)?;

    Ok(plan)
}

/// Helper to resolve a default plan path.
///
/// Currently this just returns `Taskplan.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `TASKPLAN_CONFIG`).
/// - Look for multiple default locations.
pub fn default_plan_path() -> PathBuf {
    PathBuf::from("Taskplan.toml")
}

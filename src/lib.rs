// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod plan;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_from_path;
use crate::config::model::PlanFile;
use crate::errors::Result;
use crate::plan::AssignmentPlan;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan-file loading
/// - the assignment engine
/// - JSON rendering of the resulting plan on stdout
///
/// A validation failure still prints the (empty) plan with its `error` field
/// populated, then exits nonzero. Unplaceable tasks are ordinary output and
/// never affect the exit code.
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let file = load_from_path(&config_path)?;

    if args.dry_run {
        print_dry_run(&file);
        return Ok(());
    }

    match plan::try_assign(&file.worker, &file.task) {
        Ok(plan) => {
            println!("{}", render_plan(&plan, args.compact)?);
            Ok(())
        }
        Err(err) => {
            warn!(reason = %err.reason(), "input rejected; no plan computed");
            let plan = AssignmentPlan::rejected(&err);
            println!("{}", render_plan(&plan, args.compact)?);
            Err(err.into())
        }
    }
}

fn render_plan(plan: &AssignmentPlan, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(plan)?
    } else {
        serde_json::to_string_pretty(plan)?
    };
    Ok(rendered)
}

/// Simple dry-run output: print workers and tasks without planning anything.
fn print_dry_run(file: &PlanFile) {
    println!("taskplan dry-run");
    println!();

    println!("workers ({}):", file.worker.len());
    for worker in file.worker.iter() {
        println!("  - {}", worker.name);
        println!("      skill_level: {}", worker.skill_level);
        println!("      max_hours: {}", worker.max_hours);
        println!("      preferred_task_type: {}", worker.preferred_task_type);
    }
    println!();

    println!("tasks ({}):", file.task.len());
    for task in file.task.iter() {
        println!("  - {}", task.name);
        println!("      difficulty: {}", task.difficulty);
        println!("      hours_required: {}", task.hours_required);
        if !task.task_type.is_empty() {
            println!("      task_type: {}", task.task_type);
        }
        println!("      priority: {}", task.priority);
        if !task.depends_on.is_empty() {
            println!("      depends_on: {:?}", task.depends_on);
        }
    }

    debug!("dry-run complete (no planning)");
}

// src/config/mod.rs

//! Plan-file loading for taskplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//!
//! Semantic validation of the worker/task collections lives in
//! [`crate::plan::validate`], because it applies to every caller of the
//! engine, not only to plans that arrived via a file.

pub mod loader;
pub mod model;

pub use loader::{default_plan_path, load_from_path};
pub use model::{PlanFile, Task, Worker};

// src/plan/mod.rs

//! Assignment planning.
//!
//! - [`validate`] rejects malformed worker/task batches up front.
//! - [`order`] produces the priority-descending processing order.
//! - [`matcher`] is the pure "find a worker for this task" query.
//! - [`ledger`] tracks per-worker commitments during a run.
//! - [`engine`] drives the single forward pass and builds the final plan.

pub mod engine;
pub mod ledger;
pub mod matcher;
pub mod order;
pub mod validate;

pub use engine::{AssignmentPlan, assign, try_assign};
pub use ledger::{Ledger, WorkerLedger};
pub use matcher::{CategoryMode, find_worker};
pub use order::order_by_priority;
pub use validate::{ValidationError, validate_input};

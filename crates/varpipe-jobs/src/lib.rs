//! Pipeline-variant validator assemblies, the step restart policy, and a
//! minimal step runner with persisted completion state.
//!
//! Validation gates execution: a [`varpipe_core::ValidationReport`] with any
//! failure prevents a [`runner::JobRunner`] from being constructed for the
//! invocation.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

pub mod restart;
pub mod runner;
pub mod validators;

pub use restart::RestartPolicy;
pub use runner::{ExecutionState, JobRunner, StepStatus};
pub use validators::{Pipeline, jobs, steps};

//! Execution state persisted between job launches.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use varpipe_core::{Error, Result};

/// Completion state of a single step within a job execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step has not completed in this or any previous execution.
    NotStarted,
    /// The step completed in this or a previous execution.
    Completed,
}

/// Persisted execution state for one job, carried across relaunches.
///
/// The state file records which steps have completed so that a relaunch
/// after partial completion can skip them (unless the restart policy says
/// otherwise).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionState {
    /// Name of the job this state belongs to.
    pub job: String,
    /// Identifier of the execution that first created the state.
    pub execution_id: Uuid,
    /// When the execution was first started.
    pub started_at: DateTime<Utc>,
    completed_steps: Vec<String>,
}

impl ExecutionState {
    /// Creates fresh state for a job with no completed steps.
    #[must_use]
    pub fn new(job: impl Into<String>) -> Self {
        Self {
            job: job.into(),
            execution_id: Uuid::new_v4(),
            started_at: Utc::now(),
            completed_steps: Vec::new(),
        }
    }

    /// Loads state from `path`, or creates fresh state when no file exists
    /// yet.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if it
    /// belongs to a different job.
    pub fn load_or_new(path: &Path, job: &str) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(job));
        }
        let contents = fs::read_to_string(path)?;
        let state: Self = serde_json::from_str(&contents)?;
        if state.job == job {
            Ok(state)
        } else {
            Err(Error::State(format!(
                "state file {} belongs to job '{}', not '{job}'",
                path.display(),
                state.job
            )))
        }
    }

    /// Writes the state to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// The completion status of a step.
    #[must_use]
    pub fn status(&self, step: &str) -> StepStatus {
        if self.completed_steps.iter().any(|name| name == step) {
            StepStatus::Completed
        } else {
            StepStatus::NotStarted
        }
    }

    /// Records a step as completed. Recording the same step twice is a
    /// no-op.
    pub fn mark_completed(&mut self, step: &str) {
        if self.status(step) == StepStatus::NotStarted {
            self.completed_steps.push(step.to_owned());
        }
    }

    /// Names of completed steps, in completion order.
    #[must_use]
    pub fn completed_steps(&self) -> &[String] {
        &self.completed_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn state_round_trips_through_the_file_system() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("state").join("aggregated-vcf.json");

        let mut state = ExecutionState::new("aggregated-vcf");
        state.mark_completed("load-variants");
        state.save(&path).expect("Failed to save state");

        let reloaded =
            ExecutionState::load_or_new(&path, "aggregated-vcf").expect("Failed to load state");
        assert_eq!(reloaded.execution_id, state.execution_id);
        assert_eq!(reloaded.status("load-variants"), StepStatus::Completed);
        assert_eq!(reloaded.status("annotate"), StepStatus::NotStarted);
    }

    #[test]
    fn missing_file_yields_fresh_state() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("absent.json");
        let state = ExecutionState::load_or_new(&path, "load-only").expect("Failed to create");
        assert!(state.completed_steps().is_empty());
    }

    #[test]
    fn job_name_mismatch_is_rejected() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("state.json");
        ExecutionState::new("load-only")
            .save(&path)
            .expect("Failed to save state");

        let result = ExecutionState::load_or_new(&path, "genotyped-vcf");
        assert!(matches!(result, Err(Error::State(_))));
    }

    #[test]
    fn marking_a_step_twice_is_a_no_op() {
        let mut state = ExecutionState::new("load-only");
        state.mark_completed("load-variants");
        state.mark_completed("load-variants");
        assert_eq!(state.completed_steps().len(), 1);
    }
}

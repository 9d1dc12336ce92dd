//! Minimal step runner realizing the stage-registration contract.
//!
//! Steps run in registration order. A step recorded as completed by a
//! previous execution is skipped unless it was registered with
//! `allow_start_if_complete`, which comes from
//! [`crate::RestartPolicy`]. The first step failure aborts the run with
//! state preserved, so a relaunch resumes from the failing step.

pub mod state;

use std::path::{Path, PathBuf};

use varpipe_core::{Error, ParameterBag, Result};

pub use state::{ExecutionState, StepStatus};

type StepWork = Box<dyn Fn(&ParameterBag) -> Result<()> + Send + Sync>;

struct Step {
    name: String,
    allow_start_if_complete: bool,
    work: StepWork,
}

/// Sequences registered steps for one job, persisting completion state
/// between executions.
pub struct JobRunner {
    job: String,
    state_path: PathBuf,
    steps: Vec<Step>,
}

impl JobRunner {
    /// Creates a runner for `job`, keeping its state file under
    /// `state_dir`.
    #[must_use]
    pub fn new(job: impl Into<String>, state_dir: &Path) -> Self {
        let job = job.into();
        let state_path = state_dir.join(format!("{job}.state.json"));
        Self {
            job,
            state_path,
            steps: Vec::new(),
        }
    }

    /// Registers a step. `allow_start_if_complete` is decided once here,
    /// at registration time, not re-evaluated mid-run.
    pub fn register_step(
        &mut self,
        name: impl Into<String>,
        allow_start_if_complete: bool,
        work: impl Fn(&ParameterBag) -> Result<()> + Send + Sync + 'static,
    ) {
        self.steps.push(Step {
            name: name.into(),
            allow_start_if_complete,
            work: Box::new(work),
        });
    }

    /// Names of the registered steps, in execution order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }

    /// Runs every registered step against `bag`.
    ///
    /// # Errors
    /// Returns [`Error::StepFailed`] for the first failing step; state for
    /// the steps completed so far is preserved on disk.
    pub fn run(&self, bag: &ParameterBag) -> Result<()> {
        let mut state = ExecutionState::load_or_new(&self.state_path, &self.job)?;
        tracing::info!(
            job = %self.job,
            execution_id = %state.execution_id,
            steps = self.steps.len(),
            "starting job"
        );

        for step in &self.steps {
            if state.status(&step.name) == StepStatus::Completed && !step.allow_start_if_complete
            {
                tracing::info!(step = %step.name, "step already completed, skipping");
                continue;
            }

            tracing::info!(step = %step.name, "running step");
            (step.work)(bag).map_err(|error| Error::StepFailed {
                step: step.name.clone(),
                message: error.to_string(),
            })?;

            state.mark_completed(&step.name);
            state.save(&self.state_path)?;
        }

        tracing::info!(job = %self.job, "job finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn counting_step(counter: &Arc<AtomicUsize>) -> impl Fn(&ParameterBag) -> Result<()> + use<> {
        let counter = Arc::clone(counter);
        move |_bag| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn completed_steps_are_skipped_on_relaunch() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let runs = Arc::new(AtomicUsize::new(0));
        let bag = ParameterBag::new();

        let mut runner = JobRunner::new("load-only", temp.path());
        runner.register_step("load-variants", false, counting_step(&runs));
        runner.run(&bag).expect("first run");
        runner.run(&bag).expect("second run");

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn allow_start_if_complete_forces_re_execution() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let runs = Arc::new(AtomicUsize::new(0));
        let bag = ParameterBag::new();

        let mut runner = JobRunner::new("load-only", temp.path());
        runner.register_step("load-variants", true, counting_step(&runs));
        runner.run(&bag).expect("first run");
        runner.run(&bag).expect("second run");

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failing_step_preserves_earlier_completions() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let first_runs = Arc::new(AtomicUsize::new(0));
        let bag = ParameterBag::new();

        let mut runner = JobRunner::new("aggregated-vcf", temp.path());
        runner.register_step("load-variants", false, counting_step(&first_runs));
        runner.register_step("annotate", false, |_bag| {
            Err(Error::State("annotation backend unavailable".to_owned()))
        });

        let error = runner.run(&bag).unwrap_err();
        assert!(matches!(error, Error::StepFailed { .. }));

        // Relaunch: the completed first step is skipped, the failing one
        // retried.
        let second = runner.run(&bag).unwrap_err();
        assert!(matches!(second, Error::StepFailed { .. }));
        assert_eq!(first_runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn step_names_follow_registration_order() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut runner = JobRunner::new("genotyped-vcf", temp.path());
        runner.register_step("load-variants", false, |_bag| Ok(()));
        runner.register_step("statistics", false, |_bag| Ok(()));
        assert_eq!(runner.step_names(), vec!["load-variants", "statistics"]);
    }
}

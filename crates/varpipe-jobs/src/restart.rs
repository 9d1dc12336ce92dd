//! Restart-skip decision for completed steps.

use varpipe_core::{ParameterBag, ParameterName};

/// Decides whether a step already completed in a previous execution is
/// re-run on relaunch.
///
/// The decision derives solely from `config.restartability.allow` and is
/// read once per step registration, not re-evaluated mid-run. Validation
/// catches malformed values before the policy is consulted, so a malformed
/// flag here falls back to the documented default (false).
pub struct RestartPolicy;

impl RestartPolicy {
    /// True when completed steps must be re-executed on relaunch.
    #[must_use]
    pub fn allow_start_if_complete(bag: &ParameterBag) -> bool {
        matches!(
            bag.bool_or(ParameterName::ConfigRestartabilityAllow, false),
            Ok(true)
        )
    }
}

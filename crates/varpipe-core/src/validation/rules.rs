//! The atomic rules and the combinators that compose them.
//!
//! A [`RuleSet`] runs every member regardless of earlier failures, so one
//! validation pass reports every problem. Rule order is declaration order,
//! which keeps aggregated reports reproducible across runs.

use crate::parameters::{ParameterBag, ParameterName};
use crate::report::{ValidationFailure, ValidationReport};
use crate::validation::paths;

/// The atomic validation unit: a predicate over the bag that either passes
/// or records attributed failures.
///
/// Rules are stateless and hold no reference to any particular bag between
/// calls; a rule whose [`Rule::applies`] returns false is skipped and
/// counts as passed.
pub trait Rule: Send + Sync {
    /// Whether this rule is applicable to the given bag. Defaults to
    /// always.
    fn applies(&self, _bag: &ParameterBag) -> bool {
        true
    }

    /// Runs the check, recording any failures. Never aborts the pass.
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>);

    /// Applicability gate plus check, as one call.
    fn evaluate(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        if self.applies(bag) {
            self.check(bag, failures);
        }
    }
}

/// Requires a parameter to be present and non-blank.
pub struct Required {
    parameter: ParameterName,
}

impl Required {
    /// Creates the rule for `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName) -> Self {
        Self { parameter }
    }
}

impl Rule for Required {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        if let Err(failure) = bag.required_str(self.parameter) {
            failures.push(failure);
        }
    }
}

/// Requires a parameter to be a case-sensitive member of a fixed
/// enumeration.
pub struct OneOf {
    parameter: ParameterName,
    allowed: &'static [&'static str],
}

impl OneOf {
    /// Creates the rule for `parameter` over `allowed`.
    #[must_use]
    pub fn new(parameter: ParameterName, allowed: &'static [&'static str]) -> Self {
        Self { parameter, allowed }
    }
}

impl Rule for OneOf {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        if let Err(failure) = bag.enum_member(self.parameter, self.allowed) {
            failures.push(failure);
        }
    }
}

/// Requires a parameter to be present and parseable as an integer.
pub struct TypedInteger {
    parameter: ParameterName,
}

impl TypedInteger {
    /// Creates the rule for `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName) -> Self {
        Self { parameter }
    }
}

impl Rule for TypedInteger {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        if let Err(failure) = bag.integer(self.parameter) {
            failures.push(failure);
        }
    }
}

/// Format-only check for an optional integer parameter: absence passes,
/// non-numeric content fails.
pub struct OptionalInteger {
    parameter: ParameterName,
}

impl OptionalInteger {
    /// Creates the rule for `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName) -> Self {
        Self { parameter }
    }
}

impl Rule for OptionalInteger {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        if let Err(failure) = bag.optional_integer(self.parameter) {
            failures.push(failure);
        }
    }
}

/// Format-only check for an optional boolean parameter: absence passes,
/// unrecognized literals fail.
pub struct TypedBool {
    parameter: ParameterName,
}

impl TypedBool {
    /// Creates the rule for `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName) -> Self {
        Self { parameter }
    }
}

impl Rule for TypedBool {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        if let Err(failure) = bag.bool_or(self.parameter, false) {
            failures.push(failure);
        }
    }
}

/// Requires a path-valued parameter to name an existing, readable file.
///
/// Absence is reported as missing; a present path is probed for existence
/// first and readability second, reporting only the first probe that
/// fails.
pub struct ReadableFile {
    parameter: ParameterName,
}

impl ReadableFile {
    /// Creates the rule for `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName) -> Self {
        Self { parameter }
    }
}

impl Rule for ReadableFile {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        let path = match bag.required_str(self.parameter) {
            Ok(path) => path,
            Err(failure) => {
                failures.push(failure);
                return;
            }
        };
        if let Err(failure) = paths::check_file_exists(path, self.parameter)
            .and_then(|()| paths::check_file_readable(path, self.parameter))
        {
            failures.push(failure);
        }
    }
}

/// Requires a path-valued parameter to name an existing directory.
pub struct ExistingDirectory {
    parameter: ParameterName,
}

impl ExistingDirectory {
    /// Creates the rule for `parameter`.
    #[must_use]
    pub fn new(parameter: ParameterName) -> Self {
        Self { parameter }
    }
}

impl Rule for ExistingDirectory {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        let path = match bag.required_str(self.parameter) {
            Ok(path) => path,
            Err(failure) => {
                failures.push(failure);
                return;
            }
        };
        if let Err(failure) = paths::check_directory_exists(path, self.parameter) {
            failures.push(failure);
        }
    }
}

/// Ordered conjunction of rules; the exhaustive combinator.
///
/// Every member is evaluated against the bag regardless of earlier
/// failures, and a `RuleSet` is itself a [`Rule`], so conditional groups
/// nest.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule; evaluation order is append order.
    #[must_use]
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends every rule of another set, preserving order.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.rules.extend(other.rules);
        self
    }

    /// Number of directly held rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the full set against `bag` and aggregates every failure into a
    /// fresh report.
    #[must_use]
    pub fn validate(&self, bag: &ParameterBag) -> ValidationReport {
        let mut failures = Vec::new();
        self.evaluate(bag, &mut failures);
        tracing::debug!(
            rules = self.rules.len(),
            failures = failures.len(),
            "parameter validation pass finished"
        );
        ValidationReport::from(failures)
    }
}

impl Rule for RuleSet {
    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        for rule in &self.rules {
            rule.evaluate(bag, failures);
        }
    }
}

/// Condition on another parameter that decides whether a guarded group
/// applies.
pub enum Guard {
    /// Applies while the boolean guard parameter is false, absent, or
    /// malformed. A malformed guard keeps the group required (fail-safe);
    /// its format error is reported by a separate [`TypedBool`] rule on
    /// the guard itself.
    IsFalse(ParameterName),
    /// Applies when the guard parameter is present and equal to the
    /// literal.
    Equals(ParameterName, &'static str),
    /// Applies when the guard parameter is present and a member of the
    /// listed literals. An absent guard leaves the group inapplicable, as
    /// does a value outside the list; the guard's own presence or
    /// enumeration rule reports those.
    AnyOf(ParameterName, &'static [&'static str]),
}

impl Guard {
    /// Whether the guarded group applies to the given bag.
    #[must_use]
    pub fn is_active(&self, bag: &ParameterBag) -> bool {
        match self {
            Self::IsFalse(parameter) => !matches!(bag.bool_or(*parameter, false), Ok(true)),
            Self::Equals(parameter, literal) => bag.get(*parameter) == Some(literal),
            Self::AnyOf(parameter, literals) => bag
                .get(*parameter)
                .is_some_and(|value| literals.contains(&value)),
        }
    }
}

/// A rule group whose applicability is conditional on another parameter's
/// value.
///
/// A single guard toggles the whole sub-report on or off atomically: a
/// skipped group contributes zero failures.
pub struct Guarded {
    guard: Guard,
    rules: RuleSet,
}

impl Guarded {
    /// Creates a group applying `rules` while `guard` is active.
    #[must_use]
    pub fn new(guard: Guard, rules: RuleSet) -> Self {
        Self { guard, rules }
    }
}

impl Rule for Guarded {
    fn applies(&self, bag: &ParameterBag) -> bool {
        self.guard.is_active(bag)
    }

    fn check(&self, bag: &ParameterBag, failures: &mut Vec<ValidationFailure>) {
        self.rules.check(bag, failures);
    }
}

//! Core parameter and validation engine for the variant-loading pipeline.
//!
//! A pipeline invocation is described by a flat [`ParameterBag`]. Before any
//! step runs, a composed [`validation::RuleSet`] checks that the bag is
//! sufficient and consistent for the requested pipeline variant and reports
//! every problem in one pass.
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

pub mod error;
pub mod parameters;
pub mod report;
pub mod validation;

pub use error::{Error, Result};
pub use parameters::{ParameterBag, ParameterName};
pub use report::{FailureKind, ValidationFailure, ValidationReport};
pub use validation::{
    ExistingDirectory, Guard, Guarded, OneOf, OptionalInteger, ReadableFile, Required, Rule,
    RuleSet, TypedBool, TypedInteger,
};

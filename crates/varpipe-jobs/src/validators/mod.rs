//! Concrete rule assemblies for each pipeline variant.
//!
//! Validators are plain factory functions returning composed
//! [`varpipe_core::RuleSet`]s; there is no registry and no runtime wiring.
//! Job validators are built from the shared step groups so that a guard
//! toggles an entire sub-report on or off atomically.

pub mod jobs;
pub mod steps;

pub use jobs::Pipeline;

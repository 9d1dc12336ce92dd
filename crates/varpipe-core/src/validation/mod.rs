//! Composable validation rules over a [`crate::ParameterBag`].

pub mod paths;
pub mod rules;

pub use rules::{
    ExistingDirectory, Guard, Guarded, OneOf, OptionalInteger, ReadableFile, Required, Rule,
    RuleSet, TypedBool, TypedInteger,
};

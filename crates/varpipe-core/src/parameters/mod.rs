//! Parameter catalogue and the per-invocation parameter bag.

pub mod bag;
pub mod names;

pub use bag::ParameterBag;
pub use names::ParameterName;

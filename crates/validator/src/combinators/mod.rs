//! Validator combinators.

pub mod or;

pub use or::Or;

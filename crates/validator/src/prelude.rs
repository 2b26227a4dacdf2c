//! Prelude module for convenient imports.
//!
//! `use digitguard_validator::prelude::*;` brings in the traits, the error
//! type, every built-in validator and the rule configuration types.

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::Or;

pub use crate::config::{ConfigError, FieldRule, RuleSet};

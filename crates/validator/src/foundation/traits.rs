//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Validators are generic over their input type. All of them return
/// `Result<(), ValidationError>`; [`Validate::is_valid`] collapses that to the
/// plain accept/reject verdict hosts act on.
///
/// # Examples
///
/// ```
/// use digitguard_validator::foundation::{Validate, ValidationError};
///
/// struct DigitsOnly;
///
/// impl Validate for DigitsOnly {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("digits_only", "Only digits are allowed"))
///         }
///     }
/// }
///
/// assert!(DigitsOnly.is_valid("0123"));
/// assert!(!DigitsOnly.is_valid("01a3"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so validators can take `str` directly.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if `input` passes validation.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods, implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical OR.
    ///
    /// At least one validator must pass. Short-circuits on the first success.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitguard_validator::prelude::*;
    ///
    /// let document = cpf().or(cnpj());
    /// assert!(document.is_valid("11144477735"));
    /// assert!(document.is_valid("11222333000181"));
    /// assert!(!document.is_valid("11144477736"));
    /// ```
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::or::Or;

// ============================================================================
// TESTS
// ============================================================================

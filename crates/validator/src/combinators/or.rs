//! OR combinator - logical disjunction of validators
//!
//! Hosts that accept "CPF or CNPJ" in one field (a Brazilian taxpayer number
//! of either kind) build it as `cpf().or(cnpj())`.

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass. When both fail the error is `or_failed`
/// and carries the codes of both alternatives as `left` / `right` params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::new(
                    "or_failed",
                    "All alternatives failed",
                )
                .with_param("left", left_error.code)
                .with_param("right", right_error.code)),
            },
        }
    }
}

impl<L, R> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    /// Chains another validator with OR logic.
    pub fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = L::Input>,
    {
        Or::new(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{cnpj, cpf, vin};

    #[test]
    fn test_or_left_passes() {
        let validator = Or::new(cpf(), cnpj());
        assert!(validator.validate("52998224725").is_ok());
    }

    #[test]
    fn test_or_right_passes() {
        let validator = Or::new(cpf(), cnpj());
        assert!(validator.validate("00000000000191").is_ok());
    }

    #[test]
    fn test_or_both_fail_reports_both_codes() {
        let validator = Or::new(cpf(), cnpj());
        let err = validator.validate("123").unwrap_err();
        assert_eq!(err.code, "or_failed");
        assert_eq!(err.param("left"), Some("invalid_cpf"));
        assert_eq!(err.param("right"), Some("invalid_cnpj"));
    }

    #[test]
    fn test_or_chain() {
        let validator = cpf().or(cnpj()).or(vin());
        assert!(validator.validate("11144477735").is_ok());
        assert!(validator.validate("1HGCM82633A004352").is_ok());

        let err = validator.validate("hello").unwrap_err();
        assert_eq!(err.param("left"), Some("or_failed"));
        assert_eq!(err.param("right"), Some("invalid_vin"));
    }
}

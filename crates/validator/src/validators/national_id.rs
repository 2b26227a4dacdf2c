//! CPF / CNPJ validators.
//!
//! Thin [`Validate`](crate::foundation::Validate) adapters over
//! [`ChecksumScheme::verify`]. Input is the unmasked digit string; the
//! punctuation of `999.999.999-99` / `99.999.999/9999-99` is the host's
//! concern.

use crate::combinators::Or;
use crate::foundation::ValidationError;
use crate::validators::checksum::ChecksumScheme;

// ============================================================================
// CPF
// ============================================================================

crate::validator! {
    /// Validates an 11-digit CPF.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitguard_validator::validators::cpf;
    /// use digitguard_validator::foundation::Validate;
    ///
    /// assert!(cpf().validate("11144477735").is_ok());
    /// assert_eq!(cpf().validate("11144477734").unwrap_err().code, "invalid_cpf");
    /// ```
    pub Cpf for str;
    rule(input) { ChecksumScheme::Cpf.verify(input) }
    error(input) {
        ValidationError::new("invalid_cpf", "Not a valid CPF").with_param("scheme", "cpf")
    }
    fn cpf();
}

// ============================================================================
// CNPJ
// ============================================================================

crate::validator! {
    /// Validates a 14-digit CNPJ.
    pub Cnpj for str;
    rule(input) { ChecksumScheme::Cnpj.verify(input) }
    error(input) {
        ValidationError::new("invalid_cnpj", "Not a valid CNPJ").with_param("scheme", "cnpj")
    }
    fn cnpj();
}

// ============================================================================
// EITHER
// ============================================================================

/// Accepts a CPF or a CNPJ.
pub type TaxpayerId = Or<Cpf, Cnpj>;

/// Creates a validator accepting either a CPF or a CNPJ.
#[must_use]
pub fn taxpayer_id() -> TaxpayerId {
    Or::new(cpf(), cnpj())
}

// ============================================================================
// TESTS
// ============================================================================

//! Built-in validators
//!
//! # Categories
//!
//! - **Checksum**: CPF, CNPJ ([`ChecksumScheme`], [`Cpf`], [`Cnpj`], [`TaxpayerId`])
//! - **Network**: per-keystroke octet window, whole IPv4 address
//! - **Format**: single-character classes, MAC address, VIN, CSS length units
//!
//! # Examples
//!
//! ```
//! use digitguard_validator::validators::{ChecksumScheme, checksum_validate, octet_validate};
//!
//! // On completion of a CPF field
//! assert!(checksum_validate("11144477735", ChecksumScheme::Cpf));
//!
//! // Before committing a keystroke in an IP field
//! let typed: Vec<char> = "192.25".chars().collect();
//! assert!(octet_validate(&typed, typed.len(), '5', '.'));
//! assert!(!octet_validate(&typed, typed.len(), '6', '.'));
//! ```

// Checksum validators
pub mod checksum;
pub mod national_id;

// Network validators
pub mod ipv4;
pub mod octet;

// Format validators
pub mod definitions;
pub mod format;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use checksum::{ChecksumScheme, SchemeParams, UnknownScheme, WeightRule, checksum_validate};
pub use national_id::{Cnpj, Cpf, TaxpayerId, cnpj, cpf, taxpayer_id};

pub use ipv4::{Ipv4Address, ipv4, ipv4_with_separator};
pub use octet::{DEFAULT_SEPARATOR, OctetWindow, octet_validate};

pub use definitions::Definition;
pub use format::{CssUnit, MacAddress, Vin, css_unit, mac_address, vin};

//! # digitguard-validator
//!
//! Validators for numeric identifiers typed into masked input fields.
//!
//! Two pure entry points back the masked-input host:
//!
//! - [`checksum_validate`](validators::checksum_validate) runs once a CPF or
//!   CNPJ field is complete and checks its weighted mod-11 check digits.
//! - [`octet_validate`](validators::octet_validate) runs before each keystroke
//!   of an IPv4 field and refuses digits that would push an octet past 255.
//!
//! Both are total: malformed input is rejected with `false`, never a panic.
//!
//! ## Quick Start
//!
//! ```
//! use digitguard_validator::prelude::*;
//!
//! assert!(checksum_validate("11222333000181", ChecksumScheme::Cnpj));
//! assert!(!octet_validate(&['2', '5'], 2, '6', '.'));
//!
//! let document = cpf().or(cnpj());
//! assert!(document.validate("11144477735").is_ok());
//! ```
//!
//! ## Built-in Validators
//!
//! - **Checksum**: [`Cpf`](validators::Cpf), [`Cnpj`](validators::Cnpj),
//!   [`TaxpayerId`](validators::TaxpayerId)
//! - **Network**: [`OctetWindow`](validators::OctetWindow),
//!   [`Ipv4Address`](validators::Ipv4Address)
//! - **Format**: [`Definition`](validators::Definition),
//!   [`MacAddress`](validators::MacAddress), [`Vin`](validators::Vin),
//!   [`CssUnit`](validators::CssUnit)
//!
//! Field rules can be loaded from JSON through [`config::RuleSet`].

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

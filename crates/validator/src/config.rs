//! Declarative field rules.
//!
//! Hosts describe which validator guards which field in JSON and load it
//! through [`FieldRule`] / [`RuleSet`]:
//!
//! ```
//! use digitguard_validator::config::RuleSet;
//!
//! let rules = RuleSet::from_json(r#"{
//!     "document": { "kind": "checksum", "scheme": "cpf" },
//!     "gateway":  { "kind": "ipv4" }
//! }"#).unwrap();
//!
//! assert!(rules.validate_field("document", "11144477735").is_ok());
//! assert!(rules.validate_field("gateway", "10.0.0.256").is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};
use crate::validators::{
    ChecksumScheme, DEFAULT_SEPARATOR, cnpj, cpf, css_unit, ipv4_with_separator, mac_address,
    taxpayer_id, vin,
};

/// Errors raised while loading rules.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not describe a rule.
    #[error("invalid rule definition: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// The validator guarding one field.
///
/// Tagged by `kind`:
///
/// | `kind`        | Extra keys                      |
/// |---------------|---------------------------------|
/// | `checksum`    | `scheme`: `"cpf"` or `"cnpj"`   |
/// | `taxpayer_id` |                                 |
/// | `ipv4`        | `separator` (default `"."`)     |
/// | `mac`         |                                 |
/// | `vin`         |                                 |
/// | `css_unit`    |                                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldRule {
    /// A CPF or CNPJ, depending on `scheme`.
    Checksum { scheme: ChecksumScheme },
    /// Either a CPF or a CNPJ.
    TaxpayerId,
    /// A dotted-quad IPv4 address.
    Ipv4 {
        #[serde(default = "default_separator")]
        separator: char,
    },
    /// A colon-separated MAC address.
    Mac,
    /// A vehicle identification number.
    Vin,
    /// A CSS length.
    CssUnit,
}

const fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl FieldRule {
    /// Decodes a single rule from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The rule's `kind` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Checksum { .. } => "checksum",
            Self::TaxpayerId => "taxpayer_id",
            Self::Ipv4 { .. } => "ipv4",
            Self::Mac => "mac",
            Self::Vin => "vin",
            Self::CssUnit => "css_unit",
        }
    }
}

impl Validate for FieldRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match *self {
            Self::Checksum {
                scheme: ChecksumScheme::Cpf,
            } => cpf().validate(input),
            Self::Checksum {
                scheme: ChecksumScheme::Cnpj,
            } => cnpj().validate(input),
            Self::TaxpayerId => taxpayer_id().validate(input),
            Self::Ipv4 { separator } => ipv4_with_separator(separator).validate(input),
            Self::Mac => mac_address().validate(input),
            Self::Vin => vin().validate(input),
            Self::CssUnit => css_unit().validate(input),
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Field name to rule mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: BTreeMap<String, FieldRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a `{ "field": { "kind": ... }, ... }` document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds or replaces the rule for `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.insert(field.into(), rule);
        self
    }

    /// The rule for `field`, if any.
    #[must_use]
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Validates `value` against the rule registered for `field`.
    ///
    /// The returned error carries `field` as its field path. A field with no
    /// rule fails with `unknown_field`.
    pub fn validate_field(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        let Some(rule) = self.rules.get(field) else {
            return Err(
                ValidationError::new("unknown_field", "No rule registered for field")
                    .with_field(field.to_string()),
            );
        };

        rule.validate(value).map_err(|error| {
            tracing::debug!(field, kind = rule.kind(), code = %error.code, "field rejected");
            error.with_field(field.to_string())
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

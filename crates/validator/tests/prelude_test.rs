//! Integration tests for the prelude module.
//!
//! Verifies that `use digitguard_validator::prelude::*` brings in everything
//! a masked-input host needs.

use digitguard_validator::prelude::*;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_provides_entry_points() {
    assert!(checksum_validate("52998224725", ChecksumScheme::Cpf));
    assert!(octet_validate(&['1'], 1, '0', DEFAULT_SEPARATOR));
}

#[test]
fn prelude_provides_composition() {
    let v: Or<Cpf, Cnpj> = cpf().or(cnpj());
    assert!(v.validate("11222333000181").is_ok());
    assert!(v.validate("11222333000180").is_err());

    let with_vin = taxpayer_id().or(vin());
    assert!(with_vin.is_valid("1HGCM82633A004352"));

    let hardware = vin().or(mac_address());
    assert!(hardware.is_valid("00:1A:2B:3C:4D:5E"));
}

// ============================================================================
// MASK DEFINITIONS VIA PRELUDE
// ============================================================================

#[test]
fn mask_symbols_round_trip() {
    for definition in Definition::ALL {
        assert_eq!(Definition::from_symbol(definition.symbol()), Some(definition));
    }
    assert_eq!(Definition::from_symbol('9'), None);
}

#[test]
fn typed_plate_is_upper_cased() {
    let typed: Option<String> = "1hgcm82633a00435"
        .chars()
        .map(|c| Definition::Vin.apply(c))
        .collect();
    assert_eq!(typed.as_deref(), Some("1HGCM82633A00435"));
}

// ============================================================================
// ERRORS VIA PRELUDE
// ============================================================================

#[test]
fn validation_error_is_std_error() {
    fn as_std(e: &ValidationError) -> &dyn std::error::Error {
        e
    }

    let err = ipv4().validate("1.2.3").unwrap_err();
    assert_eq!(
        as_std(&err).to_string(),
        "invalid_ipv4: Not a valid IPv4 address (params: [separator=.])"
    );
}

#[test]
fn config_error_from_prelude() {
    let err: ConfigError = RuleSet::from_json("[]").unwrap_err();
    assert!(err.to_string().starts_with("invalid rule definition"));
}

//! Case tables for the two host-facing entry points.

use digitguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::known_cpf("11144477735", true)]
#[case::another_cpf("52998224725", true)]
#[case::wrong_second_digit("11144477736", false)]
#[case::wrong_first_digit("11144477745", false)]
#[case::all_ones("11111111111", false)]
#[case::all_zeros("00000000000", false)]
#[case::empty("", false)]
#[case::too_short("1114447773", false)]
#[case::too_long("111444777350", false)]
#[case::letter("1114447773a", false)]
#[case::punctuated("111.444.777-35", false)]
fn cpf_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(checksum_validate(input, ChecksumScheme::Cpf), expected);
    assert_eq!(cpf().is_valid(input), expected);
}

#[rstest]
#[case::known_cnpj("11222333000181", true)]
#[case::leading_zeros("00000000000191", true)]
#[case::wrong_check_digit("11222333000182", false)]
#[case::all_zeros("00000000000000", false)]
#[case::cpf_length("11144477735", false)]
#[case::punctuated("11.222.333/0001-81", false)]
fn cnpj_cases(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(checksum_validate(input, ChecksumScheme::Cnpj), expected);
    assert_eq!(cnpj().is_valid(input), expected);
}

#[rstest]
#[case(12, 0, 5)]
#[case(12, 3, 2)]
#[case(12, 4, 9)]
#[case(12, 11, 2)]
#[case(13, 0, 6)]
#[case(13, 5, 9)]
fn wrapping_weights(#[case] payload_len: usize, #[case] index: usize, #[case] weight: u32) {
    assert_eq!(WeightRule::Wrapping.weight(payload_len, index), weight);
}

#[rstest]
#[case(9, 0, 10)]
#[case(9, 8, 2)]
#[case(10, 0, 11)]
fn descending_weights(#[case] payload_len: usize, #[case] index: usize, #[case] weight: u32) {
    assert_eq!(WeightRule::Descending.weight(payload_len, index), weight);
}

#[rstest]
#[case::would_exceed_255("25", 2, '6', false)]
#[case::reaches_255("25", 2, '5', true)]
#[case::single_digit_start("1", 1, '9', true)]
#[case::after_separator(".", 1, '3', true)]
#[case::hundreds_over("192.3", 5, '0', true)]
#[case::third_digit_over("192.30", 6, '0', false)]
#[case::empty_buffer("", 0, '7', true)]
#[case::letter_rejected("19", 2, 'x', false)]
fn octet_cases(
    #[case] typed: &str,
    #[case] position: usize,
    #[case] incoming: char,
    #[case] expected: bool,
) {
    let buffer: Vec<char> = typed.chars().collect();
    assert_eq!(octet_validate(&buffer, position, incoming, '.'), expected);
}

#[rstest]
#[case("cpf", ChecksumScheme::Cpf)]
#[case("CNPJ", ChecksumScheme::Cnpj)]
#[case("Cpf", ChecksumScheme::Cpf)]
fn scheme_names(#[case] name: &str, #[case] scheme: ChecksumScheme) {
    assert_eq!(name.parse::<ChecksumScheme>().unwrap(), scheme);
}

#[test]
fn unknown_scheme_names_the_input() {
    let err = "rg".parse::<ChecksumScheme>().unwrap_err();
    assert_eq!(err.0, "rg");
    assert!(err.to_string().contains("'rg'"));
}

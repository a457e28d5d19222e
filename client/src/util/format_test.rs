use super::*;

#[test]
fn thousands_groups_digits() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(420), "420");
    assert_eq!(thousands(1450), "1,450");
    assert_eq!(thousands(3072), "3,072");
    assert_eq!(thousands(1_234_567), "1,234,567");
}

#[test]
fn signed_decimal_prefixes_positive_values() {
    assert_eq!(signed_decimal(0.3), "+0.3");
    assert_eq!(signed_decimal(-0.8), "-0.8");
    assert_eq!(signed_decimal(0.0), "0.0");
}

#[test]
fn signed_count_prefixes_positive_values() {
    assert_eq!(signed_count(23), "+23");
    assert_eq!(signed_count(-5), "-5");
    assert_eq!(signed_count(0), "0");
}

#[test]
fn percent_and_compact_decimal() {
    assert_eq!(percent_one_decimal(40.592), "40.6%");
    assert_eq!(compact_decimal(8.0), "8");
    assert_eq!(compact_decimal(15.3), "15.3");
}

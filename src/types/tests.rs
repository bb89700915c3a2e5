use super::{Amount, QuarterKey};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid test date"))
}

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1,234.56", "1234.56"),
        ("-4.71", "-4.71"),
        ("500,000.00", "500000.00"),
        ("  2,551.71  ", "2551.71"),
        ("100000", "100000"),
        ("+6,000", "6000"),
        ("1,000,000.5", "1000000.5"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Decimal::from(Amount::from_str(input_string)?), Decimal::from_str(expected_output)?);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(Amount::from_str("").is_err());
    assert!(Amount::from_str("   ").is_err());
    assert!(Amount::from_str(",").is_err());
    assert!(Amount::from_str("abc").is_err());
    assert!(Amount::from_str("$1,000.00").is_err());
    assert!(Amount::from_str("1.2.3").is_err());
    assert!(Amount::from_str("NaN").is_err());
    assert!(Amount::from_str("-").is_err());
}

#[test]
fn test_amount_keeps_decimal_scale() -> Result<()> {
    assert_eq!(Decimal::from(Amount::from_str("1,234.50")?).to_string(), "1234.50");

    Ok(())
}

#[test]
fn test_quarter_key_is_derived_from_calendar_month() -> Result<()> {
    assert_eq!(QuarterKey::from_date(date(2015, 1, 1)?), QuarterKey { year: 2015, quarter: 1 });
    assert_eq!(QuarterKey::from_date(date(2015, 3, 31)?), QuarterKey { year: 2015, quarter: 1 });
    assert_eq!(QuarterKey::from_date(date(2015, 4, 1)?), QuarterKey { year: 2015, quarter: 2 });
    assert_eq!(QuarterKey::from_date(date(2015, 9, 30)?), QuarterKey { year: 2015, quarter: 3 });
    assert_eq!(QuarterKey::from_date(date(2015, 12, 31)?), QuarterKey { year: 2015, quarter: 4 });

    Ok(())
}

#[test]
fn test_quarter_key_previous_wraps_year_boundary() {
    assert_eq!(QuarterKey { year: 2016, quarter: 1 }.previous(), QuarterKey { year: 2015, quarter: 4 });
    assert_eq!(QuarterKey { year: 2016, quarter: 3 }.previous(), QuarterKey { year: 2016, quarter: 2 });
}

#[test]
fn test_quarter_key_orders_by_year_then_quarter() {
    let mut keys = vec![
        QuarterKey { year: 2016, quarter: 1 },
        QuarterKey { year: 2015, quarter: 4 },
        QuarterKey { year: 2015, quarter: 2 },
    ];
    keys.sort();

    assert_eq!(keys.iter().map(QuarterKey::label).collect::<Vec<_>>(), vec!["2015 Q2", "2015 Q4", "2016 Q1"]);
}

#[test]
fn test_annualize_is_simple_multiplication_by_four() -> Result<()> {
    assert_eq!(super::annualize(Decimal::from_str("0.06")?), Decimal::from_str("0.24")?);
    assert_eq!(super::annualize(Decimal::from_str("-0.0125")?), Decimal::from_str("-0.05")?);
    assert_eq!(super::annualize(Decimal::ZERO), Decimal::ZERO);
    assert_eq!(super::annualize(Decimal::MAX), Decimal::MAX);
    assert_eq!(super::annualize(Decimal::MIN), Decimal::MIN);

    Ok(())
}

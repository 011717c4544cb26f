//! Parsing of command-line field values
//!
//! Every failure is a [`ValidationError`] carrying the message shown to the
//! user; nothing here touches the tracker.

use chrono::NaiveDate;

use crate::models::{Category, Money, Month, ValidationError};

/// Largest amount accepted on the command line: $10,000,000,000.00
pub const MAX_AMOUNT: Money = Money::from_cents(1_000_000_000_000);

/// Parse a transaction amount such as `12.50`; must be greater than zero
pub fn parse_amount(input: &str) -> Result<Money, ValidationError> {
    let amount = parse_money(input)?;
    if !amount.is_positive() {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(amount)
}

/// Parse a budget amount; zero is allowed, negatives are not
pub fn parse_budget_amount(input: &str) -> Result<Money, ValidationError> {
    let amount = parse_money(input)?;
    if amount.is_negative() {
        return Err(ValidationError::NegativeBudget);
    }
    Ok(amount)
}

fn parse_money(input: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(input).map_err(|e| {
        ValidationError::InvalidAmount(format!("{}. Use a format like '12.50' or '40'", e))
    })?;
    if amount > MAX_AMOUNT {
        return Err(ValidationError::InvalidAmount(format!(
            "Amount '{}' is too large (max {})",
            input.trim(),
            MAX_AMOUNT
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Parse a category key, ignoring case
pub fn parse_category(input: &str) -> Result<Category, ValidationError> {
    input
        .parse::<Category>()
        .map_err(|e| ValidationError::InvalidCategory(e.to_string()))
}

/// Parse a `YYYY-MM` month
pub fn parse_month(input: &str) -> Result<Month, ValidationError> {
    Month::parse(input).map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap().cents(), 1250);
        assert_eq!(parse_amount("40").unwrap().cents(), 4000);
        assert_eq!(parse_amount("0"), Err(ValidationError::AmountNotPositive));
        assert_eq!(parse_amount("-5"), Err(ValidationError::AmountNotPositive));
        assert!(matches!(
            parse_amount("twelve"),
            Err(ValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amounts_above_limit_rejected() {
        assert_eq!(parse_amount("10000000000").unwrap(), MAX_AMOUNT);
        assert_eq!(parse_budget_amount("10000000000.00").unwrap(), MAX_AMOUNT);
        for input in ["10000000000.01", "90000000000000000"] {
            assert!(matches!(
                parse_amount(input),
                Err(ValidationError::InvalidAmount(_))
            ));
            assert!(matches!(
                parse_budget_amount(input),
                Err(ValidationError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn test_parse_budget_amount() {
        assert!(parse_budget_amount("0").unwrap().is_zero());
        assert_eq!(parse_budget_amount("-1"), Err(ValidationError::NegativeBudget));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(matches!(
            parse_date("2025-02-30"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(parse_date("02/28/2025").is_err());
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("FOOD").unwrap(), Category::Food);
        let err = parse_category("groceries").unwrap_err();
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-02").unwrap(), Month::new(2025, 2).unwrap());
        assert!(parse_month("2025-13").is_err());
    }
}

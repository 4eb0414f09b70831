//! Expense model
//!
//! An expense is a single dated, categorized amount with an optional
//! description. Records are identified by an integer id assigned by the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used for input, storage and export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Store-assigned identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw row id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// A stored expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, immutable identifier
    pub id: ExpenseId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Amount spent
    pub amount: f64,

    /// Free-form category label
    pub category: String,

    /// Optional note (empty when absent)
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Date rendered in storage form (`YYYY-MM-DD`)
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Short label used in audit entries and confirmations
    pub fn label(&self) -> String {
        format!("{} {} {}", self.date_string(), self.category, self.amount)
    }

    /// The mutable fields of this record
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            date: self.date,
            amount: self.amount,
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date_string(),
            self.category,
            self.amount
        )
    }
}

/// Validated field values for creating or replacing an expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: String,
}

impl ExpenseDraft {
    /// Create a draft from already-typed values
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Validate raw form input and build a draft
    ///
    /// Date, amount and category are required; the date must be `YYYY-MM-DD`
    /// and the amount must be a finite number. Surrounding whitespace is
    /// trimmed from every field.
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<Self, ValidationError> {
        let date = date.trim();
        let amount = amount.trim();
        let category = category.trim();

        if date.is_empty() || amount.is_empty() || category.is_empty() {
            return Err(ValidationError::MissingRequired);
        }

        Ok(Self {
            date: parse_date(date)?,
            amount: parse_amount(amount)?,
            category: category.to_string(),
            description: description.trim().to_string(),
        })
    }

    /// Attach a store-assigned id
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
        }
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// Only the zero-padded form with a four-digit year is accepted, so the
/// stored value always renders back to the input.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let s = s.trim();
    let date =
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)?;

    if date.format(DATE_FORMAT).to_string() != s {
        return Err(ValidationError::InvalidDate);
    }

    Ok(date)
}

/// Parse an amount; anything that is not a finite number is rejected
pub fn parse_amount(s: &str) -> Result<f64, ValidationError> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}

/// Parse both endpoints of a date-range filter
pub fn parse_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err(ValidationError::MissingDateRange);
    }

    match (parse_date(start), parse_date(end)) {
        (Ok(start), Ok(end)) => Ok((start, end)),
        _ => Err(ValidationError::InvalidDateRange),
    }
}

/// Validation errors raised by the form before any store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequired,
    InvalidDate,
    InvalidAmount,
    MissingDateRange,
    InvalidDateRange,
    /// A mutating action that needs a selected record ("update", "delete")
    NoSelection(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "Date, Amount and Category are required."),
            Self::InvalidDate => write!(f, "Date must be YYYY-MM-DD."),
            Self::InvalidAmount => write!(f, "Amount must be a number."),
            Self::MissingDateRange => write!(f, "Start and end date required."),
            Self::InvalidDateRange => write!(f, "Dates must be YYYY-MM-DD."),
            Self::NoSelection(action) => write!(f, "Select a record to {}.", action),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::error::ExpenseError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_draft() {
        let draft = ExpenseDraft::parse(" 2025-01-01 ", "200", "Food", " Breakfast ").unwrap();
        assert_eq!(draft.date, date(2025, 1, 1));
        assert_eq!(draft.amount, 200.0);
        assert_eq!(draft.category, "Food");
        assert_eq!(draft.description, "Breakfast");
    }

    #[test]
    fn test_description_is_optional() {
        let draft = ExpenseDraft::parse("2025-01-01", "12.5", "Bills", "").unwrap();
        assert_eq!(draft.description, "");
        assert_eq!(draft.amount, 12.5);
    }

    #[test]
    fn test_negative_amount_accepted() {
        let draft = ExpenseDraft::parse("2025-01-01", "-40", "Other", "Refund").unwrap();
        assert_eq!(draft.amount, -40.0);
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(
            ExpenseDraft::parse("", "10", "Food", ""),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            ExpenseDraft::parse("2025-01-01", "   ", "Food", ""),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(
            ExpenseDraft::parse("2025-01-01", "10", "", ""),
            Err(ValidationError::MissingRequired)
        );
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            ExpenseDraft::parse("01/02/2025", "10", "Food", ""),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            ExpenseDraft::parse("2025-02-30", "10", "Food", ""),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_date_requires_padded_four_digit_year() {
        for input in ["25-01-01", "+2025-01-01", "2025-1-1", "2025-01-1", "02025-01-01"] {
            assert_eq!(
                ExpenseDraft::parse(input, "1", "Food", ""),
                Err(ValidationError::InvalidDate),
                "{input} should be rejected"
            );
        }
        assert_eq!(parse_date(" 0999-12-31 "), Ok(date(999, 12, 31)));
        assert_eq!(
            parse_date_range("2025-1-1", "2025-01-31"),
            Err(ValidationError::InvalidDateRange)
        );
    }

    #[test]
    fn test_invalid_amount() {
        assert_eq!(
            ExpenseDraft::parse("2025-01-01", "abc", "Food", ""),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(parse_amount("NaN"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("inf"), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_date_range() {
        let (start, end) = parse_date_range("2025-01-01", "2025-01-03").unwrap();
        assert_eq!(start, date(2025, 1, 1));
        assert_eq!(end, date(2025, 1, 3));

        assert_eq!(
            parse_date_range("2025-01-01", ""),
            Err(ValidationError::MissingDateRange)
        );
        assert_eq!(
            parse_date_range("2025-01-01", "tomorrow"),
            Err(ValidationError::InvalidDateRange)
        );
    }

    #[test]
    fn test_expense_id_parse() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!("#7".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serde_uses_iso_date() {
        let expense = ExpenseDraft::new(date(2025, 1, 4), 400.0, "Food", "Snacks")
            .into_expense(ExpenseId::new(4));
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["date"], "2025-01-04");
        assert_eq!(json["id"], 4);
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Amount must be a number."
        );
        let err: crate::error::ExpenseError = ValidationError::InvalidDate.into();
        assert!(err.is_validation());
    }
}

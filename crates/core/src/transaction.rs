//! Transaction input validation.

use chrono::NaiveDate;
use fluxo_shared::{AppError, AppResult};
use rust_decimal::Decimal;

/// Maximum transaction description length.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Maximum notes length.
pub const MAX_NOTES_LEN: usize = 500;

/// Currency precision: amounts carry at most this many decimal places.
pub const AMOUNT_SCALE: u32 = 2;

/// Input for creating or updating a transaction, before validation.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    /// Description of the transaction.
    pub description: String,
    /// Positive amount with at most two decimal places.
    pub amount: Decimal,
    /// The date the transaction occurred.
    pub occurred_at: NaiveDate,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

impl TransactionDraft {
    /// Validates the draft against `today`, accumulating every violated rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with all messages joined by "; ".
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.description.trim().is_empty() {
            errors.push("transaction description is required".to_string());
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(format!(
                "description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            ));
        }

        if self.amount <= Decimal::ZERO {
            errors.push("amount must be greater than zero".to_string());
        }
        if self.amount.normalize().scale() > AMOUNT_SCALE {
            errors.push(format!(
                "amount cannot have more than {AMOUNT_SCALE} decimal places"
            ));
        }

        if self.occurred_at > today {
            errors.push("transaction date cannot be in the future".to_string());
        }

        if let Some(notes) = &self.notes
            && notes.chars().count() > MAX_NOTES_LEN
        {
            errors.push(format!("notes cannot exceed {MAX_NOTES_LEN} characters"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid_draft() -> TransactionDraft {
        TransactionDraft {
            description: "Weekly groceries".to_string(),
            amount: dec!(125.40),
            occurred_at: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(valid_draft().validate(today()).is_ok());
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut draft = valid_draft();
        draft.description = String::new();
        let err = draft.validate(today()).unwrap_err();
        assert!(err.message().contains("description is required"));
    }

    #[test]
    fn test_zero_and_negative_amounts_rejected() {
        for amount in [Decimal::ZERO, dec!(-10.00)] {
            let mut draft = valid_draft();
            draft.amount = amount;
            let err = draft.validate(today()).unwrap_err();
            assert!(err.message().contains("amount must be greater than zero"));
        }
    }

    #[test]
    fn test_excess_precision_rejected() {
        let mut draft = valid_draft();
        draft.amount = dec!(10.999);
        let err = draft.validate(today()).unwrap_err();
        assert!(err.message().contains("2 decimal places"));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        let mut draft = valid_draft();
        draft.amount = dec!(10.9900);
        assert!(draft.validate(today()).is_ok());
    }

    #[test]
    fn test_future_date_rejected() {
        let mut draft = valid_draft();
        draft.occurred_at = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let err = draft.validate(today()).unwrap_err();
        assert!(err.message().contains("cannot be in the future"));
    }

    #[test]
    fn test_today_accepted() {
        let mut draft = valid_draft();
        draft.occurred_at = today();
        assert!(draft.validate(today()).is_ok());
    }

    #[test]
    fn test_overlong_notes_rejected() {
        let mut draft = valid_draft();
        draft.notes = Some("n".repeat(MAX_NOTES_LEN + 1));
        let err = draft.validate(today()).unwrap_err();
        assert!(err.message().contains("notes cannot exceed 500 characters"));
    }

    #[test]
    fn test_violations_accumulate() {
        let draft = TransactionDraft {
            description: String::new(),
            amount: dec!(-1),
            occurred_at: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            notes: Some("n".repeat(MAX_NOTES_LEN + 1)),
        };
        let err = draft.validate(today()).unwrap_err();
        let msg = err.message();
        assert!(msg.contains("description is required"));
        assert!(msg.contains("greater than zero"));
        assert!(msg.contains("cannot be in the future"));
        assert!(msg.contains("notes cannot exceed"));
    }
}

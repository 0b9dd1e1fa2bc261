//! Category kinds and input validation.

use fluxo_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum category name length.
pub const MAX_NAME_LEN: usize = 100;

/// The kind of a category: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Income category.
    Income,
    /// Expense category.
    Expense,
}

impl CategoryKind {
    /// Parses a kind from its lowercase label.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The response label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Input for creating a category, before validation.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    /// Category name.
    pub name: String,
    /// Category kind.
    pub kind: CategoryKind,
}

impl CategoryDraft {
    /// Validates the draft, accumulating every violated rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with all messages joined by "; ".
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("category name is required".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            errors.push(format!(
                "category name cannot exceed {MAX_NAME_LEN} characters"
            ));
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

    #[test]
    fn test_parse_kind_case_insensitive() {
        assert_eq!(CategoryKind::parse("income"), Some(CategoryKind::Income));
        assert_eq!(CategoryKind::parse("EXPENSE"), Some(CategoryKind::Expense));
        assert_eq!(CategoryKind::parse("Income"), Some(CategoryKind::Income));
        assert_eq!(CategoryKind::parse("revenue"), None);
        assert_eq!(CategoryKind::parse(""), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CategoryKind::Income.label(), "income");
        assert_eq!(CategoryKind::Expense.label(), "expense");
    }

    #[test]
    fn test_valid_draft() {
        let draft = CategoryDraft {
            name: "Groceries".to_string(),
            kind: CategoryKind::Expense,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let draft = CategoryDraft {
            name: "   ".to_string(),
            kind: CategoryKind::Income,
        };
        let err = draft.validate().unwrap_err();
        assert!(err.message().contains("category name is required"));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let draft = CategoryDraft {
            name: "x".repeat(MAX_NAME_LEN + 1),
            kind: CategoryKind::Income,
        };
        let err = draft.validate().unwrap_err();
        assert!(err.message().contains("cannot exceed 100 characters"));
    }

    #[test]
    fn test_name_at_limit_accepted() {
        let draft = CategoryDraft {
            name: "x".repeat(MAX_NAME_LEN),
            kind: CategoryKind::Expense,
        };
        assert!(draft.validate().is_ok());
    }
}

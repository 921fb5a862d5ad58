//! Form data for adding and deleting expenses, and its validation.
//!
//! Fields are received as raw text so that bad input can be reported back to
//! the user inline instead of being rejected by the form extractor.

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::ExpenseId};

/// The form data for adding an expense.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The amount spent, as typed by the user.
    #[serde(default)]
    pub amount: String,
    /// What the money was spent on.
    #[serde(default)]
    pub description: String,
}

/// An amount and description that have passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpense {
    pub amount: f64,
    pub description: String,
}

impl ExpenseForm {
    /// Check that the amount is a number and that the description is not blank.
    ///
    /// The description is trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns an:
    /// - [Error::InvalidAmount] if the amount is not a finite number,
    /// - or [Error::EmptyDescription] if the description is empty after trimming.
    pub fn validate(&self) -> Result<ValidatedExpense, Error> {
        let amount = parse_amount(&self.amount)?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(ValidatedExpense {
            amount,
            description: description.to_owned(),
        })
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::InvalidAmount(text.to_owned()))
}

/// The form data for deleting an expense.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DeleteExpenseForm {
    /// The ID of the expense to delete, as typed by the user.
    #[serde(default)]
    pub expense_id: String,
}

impl DeleteExpenseForm {
    /// Parse the expense ID as an integer.
    ///
    /// # Errors
    /// Returns an [Error::InvalidExpenseId] if the ID is not an integer.
    pub fn validate(&self) -> Result<ExpenseId, Error> {
        self.expense_id
            .trim()
            .parse::<ExpenseId>()
            .map_err(|_| Error::InvalidExpenseId(self.expense_id.clone()))
    }
}

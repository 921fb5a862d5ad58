//! The expense store: the add, delete, list and sum operations used by the pages.
//!
//! Every operation reports failure as `false`, an empty list or zero instead
//! of an error. The cause is logged and then discarded, so callers can only
//! tell that an operation failed, not why.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    expense::core::{Expense, create_expense, delete_expense, get_all_expenses, get_total_amount},
};

/// Adds, deletes, lists and sums expenses stored in SQLite.
///
/// The connection is shared, but each operation holds it only for the
/// duration of that one call.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExpenseStore {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.db_connection.clone())
    }
}

impl ExpenseStore {
    /// Create a store backed by `db_connection`.
    ///
    /// The database should already have been set up with [crate::initialize_db].
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    /// Store a new expense under the smallest unused positive ID.
    ///
    /// Returns `false` if the expense could not be stored.
    pub fn add(&self, amount: f64, description: &str, timestamp: OffsetDateTime) -> bool {
        let result = self.with_connection(|connection| {
            create_expense(Expense::build(amount, description, timestamp), connection)
        });

        match result {
            Ok(expense) => {
                tracing::info!("Added expense {}", expense.id);
                true
            }
            Err(error) => {
                tracing::error!("Could not add expense: {error}");
                false
            }
        }
    }

    /// Delete the expense with the ID `id`.
    ///
    /// Returns `false` if there was no expense with the ID or if the expense
    /// could not be deleted.
    pub fn delete(&self, id: ExpenseId) -> bool {
        match self.with_connection(|connection| delete_expense(id, connection)) {
            Ok(0) => {
                tracing::warn!("Tried to delete expense {id}, but it does not exist");
                false
            }
            Ok(_) => {
                tracing::info!("Deleted expense {id}");
                true
            }
            Err(error) => {
                tracing::error!("Could not delete expense {id}: {error}");
                false
            }
        }
    }

    /// Get every expense, in no particular order.
    ///
    /// Returns an empty list if the expenses could not be retrieved.
    pub fn list_all(&self) -> Vec<Expense> {
        self.with_connection(get_all_expenses).unwrap_or_else(|error| {
            tracing::error!("Could not retrieve expenses: {error}");
            Vec::new()
        })
    }

    /// Get the sum of the amounts of every expense.
    ///
    /// Returns zero if there are no expenses or if the total could not be calculated.
    pub fn total_amount(&self) -> f64 {
        self.with_connection(get_total_amount).unwrap_or_else(|error| {
            tracing::error!("Could not calculate the total amount of expenses: {error}");
            0.0
        })
    }

    fn with_connection<T>(
        &self,
        operation: impl FnOnce(&Connection) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let connection = self
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        operation(&*connection)
    }
}

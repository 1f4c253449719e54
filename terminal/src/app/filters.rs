//! # Transaction Filtering
//!
//! Pure filtering and ordering of an account's transaction history.
//! The input slice is never touched; callers always get a fresh `Vec`.

use chrono::{NaiveDate, NaiveDateTime};
use shared::{CustomerData, Transaction};

/// Which side of a transfer the customer was on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    All,
    Sent,
    Received,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        &[Direction::All, Direction::Sent, Direction::Received]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::All => "All",
            Direction::Sent => "Sent",
            Direction::Received => "Received",
        }
    }
}

/// Active transaction filter as typed by the user.
///
/// Dates are kept as entered (`YYYY-MM-DD`); blank or unparsable input means
/// "no bound".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start_date: String,
    pub end_date: String,
    pub direction: Direction,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.start_bound().is_none() && self.end_bound().is_none() && self.direction == Direction::All
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn start_bound(&self) -> Option<NaiveDateTime> {
        parse_day(&self.start_date)
    }

    // End of range is midnight at the start of the end date
    fn end_bound(&self) -> Option<NaiveDateTime> {
        parse_day(&self.end_date)
    }
}

fn parse_day(value: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Direction of `transaction` from `owner`'s point of view.
pub fn direction_of(transaction: &Transaction, owner: &CustomerData) -> Direction {
    if owner.is_party(&transaction.sender) {
        Direction::Sent
    } else {
        Direction::Received
    }
}

/// Apply `filter` to `transactions` and order the result newest first.
///
/// Transactions whose date cannot be parsed never satisfy a date bound and sort
/// after every dated one. The sort is stable, so ties keep their input order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
    owner: &CustomerData,
) -> Vec<Transaction> {
    let start = filter.start_bound();
    let end = filter.end_bound();

    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| {
            let date = tx.occurred_at();
            if let Some(start) = start {
                if !matches!(date, Some(d) if d >= start) {
                    return false;
                }
            }
            if let Some(end) = end {
                if !matches!(date, Some(d) if d <= end) {
                    return false;
                }
            }
            match filter.direction {
                Direction::All => true,
                wanted => direction_of(tx, owner) == wanted,
            }
        })
        .cloned()
        .collect();

    // None sorts below Some, so reversing puts undated entries last
    filtered.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));
    filtered
}

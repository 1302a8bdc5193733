use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::entry::BudgetEntry;
use crate::error::{LedgerError, LedgerResult};

/// Totals across every saved entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LedgerSummary {
    pub(crate) entry_count: usize,
    pub(crate) total_salary: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) total_saveable: Decimal,
    pub(crate) latest: Option<NaiveDateTime>,
}

impl LedgerSummary {
    /// Fails with `Overflow` when a running total leaves the `Decimal` range.
    pub(crate) fn from_entries(entries: &[BudgetEntry]) -> LedgerResult<Self> {
        entries.iter().try_fold(Self::default(), |mut acc, e| {
            acc.entry_count += 1;
            acc.total_salary = acc
                .total_salary
                .checked_add(e.salary)
                .ok_or(LedgerError::Overflow)?;
            acc.total_expenses = acc
                .total_expenses
                .checked_add(e.total_expenses)
                .ok_or(LedgerError::Overflow)?;
            acc.total_saveable = acc
                .total_saveable
                .checked_add(e.saveable_amount)
                .ok_or(LedgerError::Overflow)?;
            acc.latest = acc.latest.max(Some(e.date));
            Ok(acc)
        })
    }

    /// Mean saveable amount per entry, rounded to cents.
    pub(crate) fn average_saveable(&self) -> Decimal {
        if self.entry_count == 0 {
            return Decimal::ZERO;
        }
        (self.total_saveable / Decimal::from(self.entry_count)).round_dp(2)
    }
}

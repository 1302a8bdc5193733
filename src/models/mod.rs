mod entry;
mod form;
mod summary;

pub(crate) use entry::{BudgetEntry, DATE_FORMAT};
pub(crate) use form::{EntryForm, FormField};
pub(crate) use summary::LedgerSummary;

#[cfg(test)]
mod tests;

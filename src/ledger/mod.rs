use std::path::Path;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::error::LedgerResult;
use crate::models::{BudgetEntry, EntryForm, FormField, LedgerSummary};
use crate::store::JsonStore;

const CSV_HEADER: [&str; 10] = [
    "id",
    "date",
    "salary",
    "parent_support",
    "rent",
    "first_cutoff",
    "second_cutoff",
    "other_expenses",
    "total_expenses",
    "saveable_amount",
];

/// The savings log: turns form submissions into entries and reads them back
/// newest-first. Holds no state besides the store it owns.
pub(crate) struct Ledger {
    store: JsonStore<BudgetEntry>,
}

impl Ledger {
    pub(crate) fn open(path: &Path) -> LedgerResult<Self> {
        Ok(Self {
            store: JsonStore::open(path)?,
        })
    }

    pub(crate) fn close(self) {
        self.store.close();
    }

    pub(crate) fn path(&self) -> &Path {
        self.store.path()
    }

    /// Save the form as a new entry stamped with the current local time.
    pub(crate) fn submit(&mut self, form: &EntryForm) -> LedgerResult<BudgetEntry> {
        self.submit_at(form, Local::now().naive_local())
    }

    /// Save the form as a new entry stamped with `at`. Fractional seconds are
    /// dropped so the stored date matches the id.
    ///
    /// Nothing is written unless every field parses.
    pub(crate) fn submit_at(
        &mut self,
        form: &EntryForm,
        at: NaiveDateTime,
    ) -> LedgerResult<BudgetEntry> {
        let at = at.with_nanosecond(0).unwrap_or(at);
        let entry = BudgetEntry::from_form(form, at)?;
        self.store.put(&entry.id, entry.clone())?;
        tracing::info!(
            id = %entry.id,
            saveable = %entry.saveable_amount,
            "saved entry"
        );
        Ok(entry)
    }

    pub(crate) fn get(&self, id: &str) -> LedgerResult<BudgetEntry> {
        Ok(self.store.get(id)?.with_id(id))
    }

    pub(crate) fn exists(&self, id: &str) -> bool {
        self.store.exists(id)
    }

    /// Every entry, newest first. Re-read from the store on each call.
    pub(crate) fn list(&self) -> LedgerResult<Vec<BudgetEntry>> {
        let mut ids = self.store.keys();
        ids.sort_unstable_by(|a, b| b.cmp(a));
        ids.iter().map(|id| self.get(id)).collect()
    }

    /// Delete `id` if present. Returns whether an entry was removed.
    pub(crate) fn remove(&mut self, id: &str) -> LedgerResult<bool> {
        let removed = self.store.delete(id)?;
        if removed {
            tracing::info!(id, "deleted entry");
        }
        Ok(removed)
    }

    pub(crate) fn len(&self) -> usize {
        self.store.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub(crate) fn summary(&self) -> LedgerResult<LedgerSummary> {
        LedgerSummary::from_entries(&self.list()?)
    }

    /// Write every entry, newest first, to a CSV file. Returns the row count.
    pub(crate) fn export_csv(&self, path: &Path) -> LedgerResult<usize> {
        let entries = self.list()?;
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(CSV_HEADER)?;
        for entry in &entries {
            let mut row = vec![entry.id.clone(), entry.date_string()];
            row.extend(FormField::all().iter().map(|f| entry.amount(*f).to_string()));
            row.push(entry.total_expenses.to_string());
            row.push(entry.saveable_amount.to_string());
            wtr.write_record(&row)?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        tracing::info!(path = %path.display(), rows = entries.len(), "exported entries");
        Ok(entries.len())
    }
}

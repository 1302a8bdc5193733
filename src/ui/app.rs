use anyhow::Result;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::*;
use crate::ui::util::{format_amount, ListCursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Form,
    History,
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form => write!(f, "FORM"),
            Self::History => write!(f, "HISTORY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Confirm,
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteEntry { id: String, date: String },
}

/// Modal message shown over the screen until any key is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Popup {
    Success(String),
    Error(String),
}

/// Totals derived from whatever the form currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FormPreview {
    pub(crate) total_expenses: Decimal,
    pub(crate) saveable_amount: Decimal,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) focus: Focus,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) popup: Option<Popup>,

    // Form
    pub(crate) form: EntryForm,
    pub(crate) active_field: FormField,

    // History
    pub(crate) entries: Vec<BudgetEntry>,
    pub(crate) history: ListCursor,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            focus: Focus::Form,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,
            popup: None,

            form: EntryForm::new(),
            active_field: FormField::Salary,

            entries: Vec::new(),
            history: ListCursor::default(),

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 10,
        }
    }

    /// Reload the history from the ledger and keep the cursor in range.
    pub(crate) fn refresh_entries(&mut self, ledger: &Ledger) -> Result<()> {
        self.entries = ledger.list()?;
        self.history.clamp(self.entries.len());
        Ok(())
    }

    /// Save the form. Every failure is reported in a popup; the store is left
    /// as it was.
    pub(crate) fn submit_form(&mut self, ledger: &mut Ledger) -> Result<()> {
        match ledger.submit(&self.form) {
            Ok(entry) => {
                self.refresh_entries(ledger)?;
                self.history.top();
                self.popup = Some(Popup::Success(format!(
                    "Saved {}",
                    format_amount(entry.saveable_amount)
                )));
                self.set_status(format!("Saved entry {}", entry.date_string()));
            }
            Err(e) => self.report_error(&e),
        }
        Ok(())
    }

    /// Ask for confirmation before deleting the highlighted entry.
    pub(crate) fn request_delete(&mut self) {
        let Some((id, date, saved)) = self
            .selected_entry()
            .map(|e| (e.id.clone(), e.date_string(), e.saveable_amount))
        else {
            self.set_status("Nothing to delete");
            return;
        };
        self.confirm_message = format!("Delete entry {date} (saved {})?", format_amount(saved));
        self.pending_action = Some(PendingAction::DeleteEntry { id, date });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self, ledger: &mut Ledger) -> Result<()> {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteEntry { id, date } => match ledger.remove(&id) {
                    Ok(true) => self.set_status(format!("Deleted: {date}")),
                    Ok(false) => self.set_status(format!("Already gone: {date}")),
                    Err(e) => self.report_error(&e),
                },
            }
            self.refresh_entries(ledger)?;
        }
        self.cancel_pending();
        Ok(())
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn selected_entry(&self) -> Option<&BudgetEntry> {
        self.entries.get(self.history.index)
    }

    /// Totals for the current form, or `None` while any field is invalid or
    /// the totals do not fit in a `Decimal`.
    pub(crate) fn form_preview(&self) -> Option<FormPreview> {
        let salary = self.form.amount(FormField::Salary).ok()?;
        let mut total_expenses = Decimal::ZERO;
        for field in FormField::expenses() {
            total_expenses = total_expenses.checked_add(self.form.amount(*field).ok()?)?;
        }
        Some(FormPreview {
            total_expenses,
            saveable_amount: salary.checked_sub(total_expenses)?,
        })
    }

    /// Sum of `saveable_amount` over the loaded history, `None` on overflow.
    pub(crate) fn total_saved(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.saveable_amount))
    }

    // ── Form editing ──────────────────────────────────────────

    pub(crate) fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub(crate) fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub(crate) fn type_char(&mut self, c: char) {
        if !self.form.push_char(self.active_field, c) {
            self.set_status(format!("'{c}' is not allowed in an amount"));
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.form.pop_char(self.active_field);
    }

    pub(crate) fn clear_form(&mut self) {
        self.form.clear();
        self.active_field = FormField::Salary;
        self.set_status("Form cleared");
    }

    // ── History navigation ────────────────────────────────────

    pub(crate) fn move_down(&mut self) {
        self.history.down(self.entries.len(), self.visible_rows);
    }

    pub(crate) fn move_up(&mut self) {
        self.history.up();
    }

    pub(crate) fn goto_top(&mut self) {
        self.history.top();
    }

    pub(crate) fn goto_bottom(&mut self) {
        self.history.bottom(self.entries.len(), self.visible_rows);
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::History,
            Focus::History => Focus::Form,
        };
    }

    fn report_error(&mut self, e: &LedgerError) {
        if e.is_storage() {
            tracing::error!(error = %e, "ledger operation failed");
        } else if e.is_validation() {
            tracing::debug!(error = %e, "form rejected");
        }
        self.popup = Some(Popup::Error(e.to_string()));
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;

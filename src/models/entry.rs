use chrono::NaiveDateTime;
use rust_decimal::serde::arbitrary_precision;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::form::{EntryForm, FormField};
use crate::error::{LedgerError, LedgerResult};

/// Format of the human-readable `date` field.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the store key: the date with separators that are safe in keys
/// and file names.
const ID_FORMAT: &str = "log_%Y-%m-%d_%H-%M-%S";

/// One saved form submission. The derived totals are fixed at creation.
///
/// `id` is the store key and is not part of the serialized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BudgetEntry {
    #[serde(skip)]
    pub(crate) id: String,
    #[serde(with = "date_format")]
    pub(crate) date: NaiveDateTime,
    #[serde(with = "arbitrary_precision")]
    pub(crate) salary: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) parent_support: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) rent: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) first_cutoff: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) second_cutoff: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) other_expenses: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) total_expenses: Decimal,
    #[serde(with = "arbitrary_precision")]
    pub(crate) saveable_amount: Decimal,
}

impl BudgetEntry {
    /// Build an entry from parsed amounts, deriving the id and both totals.
    /// `expenses` follows the order of [`FormField::expenses`]. Fails with
    /// `Overflow` when a total does not fit in a `Decimal`.
    pub(crate) fn new(
        date: NaiveDateTime,
        salary: Decimal,
        expenses: [Decimal; 5],
    ) -> LedgerResult<Self> {
        let [parent_support, rent, first_cutoff, second_cutoff, other_expenses] = expenses;
        let total_expenses = expenses
            .iter()
            .try_fold(Decimal::ZERO, |acc, x| acc.checked_add(*x))
            .ok_or(LedgerError::Overflow)?;
        let saveable_amount = salary
            .checked_sub(total_expenses)
            .ok_or(LedgerError::Overflow)?;
        Ok(Self {
            id: entry_id(&date),
            date,
            salary,
            parent_support,
            rent,
            first_cutoff,
            second_cutoff,
            other_expenses,
            total_expenses,
            saveable_amount,
        })
    }

    /// Parse every field of `form`. The first field that fails aborts.
    pub(crate) fn from_form(form: &EntryForm, date: NaiveDateTime) -> LedgerResult<Self> {
        let salary = form.amount(FormField::Salary)?;
        let mut expenses = [Decimal::ZERO; 5];
        for (slot, field) in expenses.iter_mut().zip(FormField::expenses()) {
            *slot = form.amount(*field)?;
        }
        Self::new(date, salary, expenses)
    }

    pub(crate) fn amount(&self, field: FormField) -> Decimal {
        match field {
            FormField::Salary => self.salary,
            FormField::ParentSupport => self.parent_support,
            FormField::Rent => self.rent,
            FormField::FirstCutoff => self.first_cutoff,
            FormField::SecondCutoff => self.second_cutoff,
            FormField::OtherExpenses => self.other_expenses,
        }
    }

    pub(crate) fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub(crate) fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

pub(crate) fn entry_id(date: &NaiveDateTime) -> String {
    date.format(ID_FORMAT).to_string()
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub(super) fn serialize<S: Serializer>(
        date: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

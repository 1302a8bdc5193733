use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

/// Matches text that is, or can still grow into, an amount: an optional
/// currency sign, digits with optional thousands separators, and at most one
/// decimal point.
#[allow(clippy::expect_used)]
static AMOUNT_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[₱$]?[0-9,]*(\.[0-9]*)?$").expect("amount input pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FormField {
    Salary,
    ParentSupport,
    Rent,
    FirstCutoff,
    SecondCutoff,
    OtherExpenses,
}

impl FormField {
    pub(crate) const COUNT: usize = 6;

    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Salary,
            Self::ParentSupport,
            Self::Rent,
            Self::FirstCutoff,
            Self::SecondCutoff,
            Self::OtherExpenses,
        ]
    }

    /// Every field that counts towards `total_expenses`.
    pub(crate) fn expenses() -> &'static [FormField] {
        &Self::all()[1..]
    }

    /// JSON key used in the savings log.
    pub(crate) fn key(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::ParentSupport => "parent_support",
            Self::Rent => "rent",
            Self::FirstCutoff => "first_cutoff",
            Self::SecondCutoff => "second_cutoff",
            Self::OtherExpenses => "other_expenses",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Monthly Salary",
            Self::ParentSupport => "Parent Support",
            Self::Rent => "Rent",
            Self::FirstCutoff => "1st Cutoff Expenses",
            Self::SecondCutoff => "2nd Cutoff Expenses",
            Self::OtherExpenses => "Other Expenses",
        }
    }

    /// Accepts the JSON key or its kebab-case spelling, case-insensitively.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|f| f.key() == normalized)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    pub(crate) fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub(crate) fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw text of the savings form, one slot per [`FormField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EntryForm {
    values: [String; FormField::COUNT],
}

impl EntryForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub(crate) fn get(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub(crate) fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Append a typed character, rejecting it if the result could never
    /// parse as an amount. Returns whether the character was accepted.
    pub(crate) fn push_char(&mut self, field: FormField, c: char) -> bool {
        let slot = &mut self.values[field.index()];
        let mut candidate = slot.clone();
        candidate.push(c);
        if !is_amount_input(&candidate) {
            return false;
        }
        *slot = candidate;
        true
    }

    pub(crate) fn pop_char(&mut self, field: FormField) {
        self.values[field.index()].pop();
    }

    pub(crate) fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.values.iter().all(|v| v.trim().is_empty())
    }

    /// Parse one field; blank counts as zero.
    pub(crate) fn amount(&self, field: FormField) -> LedgerResult<Decimal> {
        parse_amount(field, self.get(field))
    }
}

pub(crate) fn is_amount_input(text: &str) -> bool {
    AMOUNT_INPUT.is_match(text)
}

/// Parse a non-negative amount. Blank input is zero. A leading currency sign
/// and thousands separators are ignored; scientific notation is accepted.
pub(crate) fn parse_amount(field: FormField, text: &str) -> LedgerResult<Decimal> {
    let invalid = || LedgerError::Validation {
        field,
        input: text.to_string(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let cleaned = trimmed
        .trim_start_matches(['₱', '$'])
        .trim_start()
        .replace(',', "");
    if cleaned.is_empty() {
        return Err(invalid());
    }

    let amount = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| invalid())?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }
    Ok(amount)
}

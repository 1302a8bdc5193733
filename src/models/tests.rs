#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::entry::entry_id;
use super::form::{is_amount_input, parse_amount};
use super::*;

fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn sample_form() -> EntryForm {
    EntryForm::new()
        .with(FormField::Salary, "30000")
        .with(FormField::ParentSupport, "5000")
        .with(FormField::Rent, "8000")
        .with(FormField::FirstCutoff, "2000")
        .with(FormField::SecondCutoff, "1500")
        .with(FormField::OtherExpenses, "500")
}

// ── FormField ─────────────────────────────────────────────────

#[test]
fn test_form_field_keys() {
    let keys: Vec<&str> = FormField::all().iter().map(|f| f.key()).collect();
    assert_eq!(
        keys,
        [
            "salary",
            "parent_support",
            "rent",
            "first_cutoff",
            "second_cutoff",
            "other_expenses"
        ]
    );
}

#[test]
fn test_form_field_expenses_excludes_salary() {
    assert_eq!(FormField::expenses().len(), 5);
    assert!(!FormField::expenses().contains(&FormField::Salary));
}

#[test]
fn test_form_field_parse() {
    assert_eq!(FormField::parse("salary"), Some(FormField::Salary));
    assert_eq!(FormField::parse("parent-support"), Some(FormField::ParentSupport));
    assert_eq!(FormField::parse("FIRST_CUTOFF"), Some(FormField::FirstCutoff));
    assert_eq!(FormField::parse("bonus"), None);
}

#[test]
fn test_form_field_cycle() {
    assert_eq!(FormField::Salary.next(), FormField::ParentSupport);
    assert_eq!(FormField::OtherExpenses.next(), FormField::Salary);
    assert_eq!(FormField::Salary.prev(), FormField::OtherExpenses);
    for f in FormField::all() {
        assert_eq!(f.next().prev(), *f);
    }
}

#[test]
fn test_form_field_display_is_label() {
    assert_eq!(format!("{}", FormField::FirstCutoff), "1st Cutoff Expenses");
}

// ── Amount parsing ────────────────────────────────────────────

#[test]
fn test_parse_amount_blank_is_zero() {
    assert_eq!(parse_amount(FormField::Rent, "").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount(FormField::Rent, "   ").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_amount_plain_and_decimal() {
    assert_eq!(parse_amount(FormField::Rent, "8000").unwrap(), dec!(8000));
    assert_eq!(parse_amount(FormField::Rent, " 12.50 ").unwrap(), dec!(12.50));
    assert_eq!(parse_amount(FormField::Rent, "0.5").unwrap(), dec!(0.5));
}

#[test]
fn test_parse_amount_currency_and_separators() {
    assert_eq!(parse_amount(FormField::Salary, "₱30,000.00").unwrap(), dec!(30000.00));
    assert_eq!(parse_amount(FormField::Salary, "$1,234.5").unwrap(), dec!(1234.5));
}

#[test]
fn test_parse_amount_scientific() {
    assert_eq!(parse_amount(FormField::Salary, "1e3").unwrap(), dec!(1000));
}

#[test]
fn test_parse_amount_rejects_text() {
    let err = parse_amount(FormField::Salary, "abc").unwrap_err();
    assert!(err.is_validation());
    let msg = err.to_string();
    assert!(msg.contains("Monthly Salary"), "{msg}");
    assert!(msg.contains("abc"), "{msg}");
}

#[test]
fn test_parse_amount_rejects_bare_sign() {
    assert!(parse_amount(FormField::Rent, "₱").is_err());
    assert!(parse_amount(FormField::Rent, "1.2.3").is_err());
}

#[test]
fn test_parse_amount_largest_value() {
    let max = Decimal::MAX.to_string();
    assert_eq!(parse_amount(FormField::Rent, &max).unwrap(), Decimal::MAX);
    assert_eq!(parse_amount(FormField::Rent, "1e28").unwrap(), dec!(10000000000000000000000000000));
}

#[test]
fn test_parse_amount_out_of_range_is_validation() {
    for text in ["79228162514264337593543950336", "1e30", "9e28", "1e99999"] {
        let err = parse_amount(FormField::Rent, text).unwrap_err();
        assert!(err.is_validation(), "{text}: {err}");
    }
}

#[test]
fn test_parse_amount_rejects_negative() {
    assert!(parse_amount(FormField::Rent, "-5").unwrap_err().is_validation());
    assert!(parse_amount(FormField::Rent, "-0.01").is_err());
}

// ── EntryForm ─────────────────────────────────────────────────

#[test]
fn test_form_push_char_filters_input() {
    let mut form = EntryForm::new();
    for c in "12a,3.4.5".chars() {
        form.push_char(FormField::Rent, c);
    }
    assert_eq!(form.get(FormField::Rent), "12,3.45");
}

#[test]
fn test_form_push_char_allows_leading_currency() {
    let mut form = EntryForm::new();
    assert!(form.push_char(FormField::Salary, '₱'));
    assert!(!form.push_char(FormField::Salary, '$'));
    assert!(form.push_char(FormField::Salary, '9'));
    assert_eq!(form.get(FormField::Salary), "₱9");
}

#[test]
fn test_form_pop_and_clear() {
    let mut form = sample_form();
    form.pop_char(FormField::Salary);
    assert_eq!(form.get(FormField::Salary), "3000");
    assert!(!form.is_blank());
    form.clear();
    assert!(form.is_blank());
}

#[test]
fn test_is_amount_input() {
    assert!(is_amount_input(""));
    assert!(is_amount_input("1,000."));
    assert!(!is_amount_input("1..0"));
    assert!(!is_amount_input("-1"));
}

// ── BudgetEntry ───────────────────────────────────────────────

#[test]
fn test_entry_example_totals() {
    let entry = BudgetEntry::from_form(&sample_form(), at(10, 0, 0)).unwrap();
    assert_eq!(entry.total_expenses, dec!(17000));
    assert_eq!(entry.saveable_amount, dec!(13000));
    assert_eq!(entry.rent, dec!(8000));
}

#[test]
fn test_entry_blank_form_is_all_zero() {
    let entry = BudgetEntry::from_form(&EntryForm::new(), at(10, 0, 0)).unwrap();
    for f in FormField::all() {
        assert_eq!(entry.amount(*f), Decimal::ZERO);
    }
    assert_eq!(entry.total_expenses, Decimal::ZERO);
    assert_eq!(entry.saveable_amount, Decimal::ZERO);
}

#[test]
fn test_entry_saveable_may_be_negative() {
    let entry = BudgetEntry::new(at(10, 0, 0), dec!(100), [dec!(50), dec!(75), dec!(0), dec!(0), dec!(0.01)]).unwrap();
    assert_eq!(entry.total_expenses, dec!(125.01));
    assert_eq!(entry.saveable_amount, dec!(-25.01));
}

#[test]
fn test_entry_totals_exact_for_cents() {
    let entry = BudgetEntry::new(
        at(10, 0, 0),
        dec!(0.3),
        [dec!(0.1), dec!(0.2), dec!(0), dec!(0), dec!(0)],
    )
    .unwrap();
    assert_eq!(entry.total_expenses, dec!(0.3));
    assert_eq!(entry.saveable_amount, Decimal::ZERO);
}

#[test]
fn test_entry_invalid_field_reports_field() {
    let form = sample_form().with(FormField::SecondCutoff, "lots");
    match BudgetEntry::from_form(&form, at(10, 0, 0)).unwrap_err() {
        crate::error::LedgerError::Validation { field, input } => {
            assert_eq!(field, FormField::SecondCutoff);
            assert_eq!(input, "lots");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_entry_expense_overflow_is_error() {
    let form = EntryForm::new()
        .with(FormField::Rent, Decimal::MAX.to_string())
        .with(FormField::OtherExpenses, "1");
    let err = BudgetEntry::from_form(&form, at(10, 0, 0)).unwrap_err();
    assert!(matches!(err, crate::error::LedgerError::Overflow));
    assert!(err.is_validation());
}

#[test]
fn test_entry_at_max_total_is_fine() {
    let entry = BudgetEntry::new(
        at(10, 0, 0),
        Decimal::ZERO,
        [Decimal::MAX, dec!(0), dec!(0), dec!(0), dec!(0)],
    )
    .unwrap();
    assert_eq!(entry.total_expenses, Decimal::MAX);
    assert_eq!(entry.saveable_amount, Decimal::MIN);
}

#[test]
fn test_entry_id_format() {
    let entry = BudgetEntry::new(at(9, 5, 7), Decimal::ZERO, [Decimal::ZERO; 5]).unwrap();
    assert_eq!(entry.id, "log_2024-01-15_09-05-07");
    assert_eq!(entry_id(&at(23, 59, 59)), "log_2024-01-15_23-59-59");
    assert_eq!(entry.date_string(), "2024-01-15 09:05:07");
}

#[test]
fn test_entry_ids_sort_chronologically() {
    let mut ids = vec![entry_id(&at(10, 0, 0)), entry_id(&at(9, 59, 59)), entry_id(&at(10, 0, 1))];
    ids.sort();
    assert_eq!(
        ids,
        [
            "log_2024-01-15_09-59-59",
            "log_2024-01-15_10-00-00",
            "log_2024-01-15_10-00-01"
        ]
    );
}

#[test]
fn test_entry_json_field_names() {
    let entry = BudgetEntry::from_form(&sample_form(), at(10, 0, 0)).unwrap();
    let json = serde_json::to_string(&entry).unwrap();
    assert!(!json.contains("\"id\""));
    for key in [
        "\"date\":\"2024-01-15 10:00:00\"",
        "\"salary\":30000",
        "\"parent_support\":5000",
        "\"total_expenses\":17000",
        "\"saveable_amount\":13000",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
}

#[test]
fn test_entry_reads_float_written_log() {
    let json = r#"{
        "date": "2024-01-15 10:00:00",
        "salary": 30000.0,
        "parent_support": 5000.0,
        "rent": 8000.0,
        "first_cutoff": 2000.0,
        "second_cutoff": 1500.0,
        "other_expenses": 500.0,
        "total_expenses": 17000.0,
        "saveable_amount": 13000.0
    }"#;
    let entry: BudgetEntry = serde_json::from_str(json).unwrap();
    assert!(entry.id.is_empty());
    assert_eq!(entry.date, at(10, 0, 0));
    assert_eq!(entry.salary, dec!(30000));
    assert_eq!(entry.saveable_amount, dec!(13000));
}

#[test]
fn test_entry_bad_date_rejected() {
    let json = r#"{"date":"yesterday","salary":1,"parent_support":0,"rent":0,
        "first_cutoff":0,"second_cutoff":0,"other_expenses":0,
        "total_expenses":0,"saveable_amount":1}"#;
    assert!(serde_json::from_str::<BudgetEntry>(json).is_err());
}

// ── LedgerSummary ─────────────────────────────────────────────

#[test]
fn test_summary_empty() {
    let summary = LedgerSummary::from_entries(&[]).unwrap();
    assert_eq!(summary.entry_count, 0);
    assert_eq!(summary.average_saveable(), Decimal::ZERO);
    assert!(summary.latest.is_none());
}

#[test]
fn test_summary_totals() {
    let a = BudgetEntry::new(at(8, 0, 0), dec!(1000), [dec!(100), dec!(0), dec!(0), dec!(0), dec!(0)]).unwrap();
    let b = BudgetEntry::new(at(9, 0, 0), dec!(500), [dec!(600), dec!(0), dec!(0), dec!(0), dec!(0)]).unwrap();
    let summary = LedgerSummary::from_entries(&[b, a]).unwrap();
    assert_eq!(summary.entry_count, 2);
    assert_eq!(summary.total_salary, dec!(1500));
    assert_eq!(summary.total_expenses, dec!(700));
    assert_eq!(summary.total_saveable, dec!(800));
    assert_eq!(summary.average_saveable(), dec!(400));
    assert_eq!(summary.latest, Some(at(9, 0, 0)));
}

#[test]
fn test_summary_overflow_is_error() {
    let big = |h| BudgetEntry::new(at(h, 0, 0), Decimal::MAX, [Decimal::ZERO; 5]).unwrap();
    let err = LedgerSummary::from_entries(&[big(8), big(9)]).unwrap_err();
    assert!(matches!(err, crate::error::LedgerError::Overflow));
}

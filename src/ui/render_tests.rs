#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

use super::*;
use crate::ledger::Ledger;
use crate::models::EntryForm;

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn app_with_entry() -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let mut ledger = Ledger::open(&dir.path().join("savings_log.json")).unwrap();
    let at = NaiveDate::from_ymd_opt(2024, 2, 1)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let form = EntryForm::new()
        .with(FormField::Salary, "30000")
        .with(FormField::Rent, "8000");
    ledger.submit_at(&form, at).unwrap();

    let mut app = App::new();
    app.refresh_entries(&ledger).unwrap();
    (dir, app)
}

#[test]
fn test_render_empty_app() {
    let screen = draw(&App::new(), 100, 30);
    assert!(screen.contains("My Savings Tracker"));
    assert!(screen.contains("Monthly Salary"));
    assert!(screen.contains("2nd Cutoff Expenses"));
    assert!(screen.contains("No entries saved yet"));
}

#[test]
fn test_render_history_row() {
    let (_dir, app) = app_with_entry();
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("History (1)"));
    assert!(screen.contains("2024-02-01 08:30:00"));
    assert!(screen.contains("₱22,000.00"));
}

#[test]
fn test_render_form_preview_invalid() {
    let mut app = App::new();
    app.form.set(FormField::Rent, "oops");
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("not valid numbers"));
}

#[test]
fn test_render_form_preview_overflow() {
    let mut app = App::new();
    app.form.set(FormField::Rent, rust_decimal::Decimal::MAX.to_string());
    app.form.set(FormField::OtherExpenses, "1");
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("not valid numbers"));
}

#[test]
fn test_render_title_total_out_of_range() {
    let dir = TempDir::new().unwrap();
    let mut ledger = Ledger::open(&dir.path().join("savings_log.json")).unwrap();
    let form = EntryForm::new().with(FormField::Salary, rust_decimal::Decimal::MAX.to_string());
    for hour in [8, 9] {
        let at = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        ledger.submit_at(&form, at).unwrap();
    }
    let mut app = App::new();
    app.refresh_entries(&ledger).unwrap();

    let screen = draw(&app, 120, 30);
    assert!(screen.contains("saved out of range"));
}

#[test]
fn test_render_error_popup() {
    let mut app = App::new();
    app.popup = Some(Popup::Error("Monthly Salary: 'abc' is not a valid amount".into()));
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("Error"));
    assert!(screen.contains("'abc'"));
}

#[test]
fn test_render_confirm_prompt() {
    let (_dir, mut app) = app_with_entry();
    app.focus = Focus::History;
    app.request_delete();
    let screen = draw(&app, 120, 30);
    assert!(screen.contains("[y/N]"));
}

#[test]
fn test_render_help() {
    let mut app = App::new();
    app.show_help = true;
    let screen = draw(&app, 100, 30);
    assert!(screen.contains("SaveTUI Help"));
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let (_dir, app) = app_with_entry();
    draw(&app, 10, 5);
}

#[test]
fn test_history_rows() {
    assert_eq!(history_rows(30), 30 - 1 - FORM_HEIGHT as usize - 1 - 3);
    assert_eq!(history_rows(3), 0);
}

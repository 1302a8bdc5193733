use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::ledger::Ledger;
use crate::models::{EntryForm, FormField};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger) -> Result<()> {
    match args[0].as_str() {
        "add" | "a" => cli_add(&args[1..], ledger),
        "list" | "ls" => cli_list(ledger),
        "show" => cli_show(&args[1..], ledger),
        "delete" | "rm" => cli_delete(&args[1..], ledger),
        "summary" | "s" => cli_summary(ledger),
        "export" => cli_export(&args[1..], ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("savetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("SaveTUI: local-only monthly savings tracker");
    println!();
    println!("Usage: savetui [--store <file.json>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add [--<field> <amount>]...   Save an entry; blank fields count as zero");
    for field in FormField::all() {
        println!(
            "    --{:<26}{}",
            field.key().replace('_', "-"),
            field.label()
        );
    }
    println!("  list                          List saved entries, newest first");
    println!("  show <id>                     Show every field of one entry");
    println!("  delete <id>                   Delete an entry");
    println!("  summary                       Print totals across all entries");
    println!("  export [path.csv]             Export all entries to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Build a form from `--field value` pairs.
pub(crate) fn parse_add_args(args: &[String]) -> Result<EntryForm> {
    let mut form = EntryForm::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let name = flag
            .strip_prefix("--")
            .ok_or_else(|| anyhow::anyhow!("Expected a --<field> flag, got '{flag}'"))?;
        let field =
            FormField::parse(name).ok_or_else(|| anyhow::anyhow!("Unknown field: --{name}"))?;
        let value = iter
            .next()
            .ok_or_else(|| anyhow::anyhow!("Missing amount for --{name}"))?;
        form = form.with(field, value.as_str());
    }
    Ok(form)
}

fn cli_add(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let form = parse_add_args(args)?;
    if form.is_blank() {
        println!("All fields blank; saving a zero entry");
    }
    let entry = ledger.submit(&form)?;
    println!("Saved {} as {}", format_amount(entry.saveable_amount), entry.id);
    println!(
        "  Salary {}  Expenses {}",
        format_amount(entry.salary),
        format_amount(entry.total_expenses)
    );
    Ok(())
}

fn cli_list(ledger: &mut Ledger) -> Result<()> {
    if ledger.is_empty() {
        println!("No entries");
        return Ok(());
    }
    let entries = ledger.list()?;

    println!(
        "{:<25} {:<20} {:>15} {:>15} {:>15}",
        "ID", "Date", "Salary", "Expenses", "Saved"
    );
    println!("{}", "─".repeat(94));
    for entry in &entries {
        println!(
            "{:<25} {:<20} {:>15} {:>15} {:>15}",
            entry.id,
            entry.date_string(),
            format_amount(entry.salary),
            format_amount(entry.total_expenses),
            format_amount(entry.saveable_amount),
        );
    }
    Ok(())
}

fn cli_show(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let id = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: savetui show <id>"))?;
    if !ledger.exists(id) {
        anyhow::bail!("No entry with id '{id}'. Run `savetui list` to see saved ids");
    }
    let entry = ledger.get(id)?;

    println!("{}  ({})", entry.id, entry.date_string());
    println!("{}", "─".repeat(40));
    for field in FormField::all() {
        println!(
            "  {:<22}{:>16}",
            field.label(),
            format_amount(entry.amount(*field))
        );
    }
    println!("{}", "─".repeat(40));
    println!(
        "  {:<22}{:>16}",
        "Total Expenses",
        format_amount(entry.total_expenses)
    );
    println!(
        "  {:<22}{:>16}",
        "Saveable Amount",
        format_amount(entry.saveable_amount)
    );
    Ok(())
}

fn cli_delete(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let id = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: savetui delete <id>"))?;
    if ledger.remove(id)? {
        println!("Deleted {id} ({} entries left)", ledger.len());
    } else {
        println!("Nothing to delete: no entry with id '{id}'");
    }
    Ok(())
}

fn cli_summary(ledger: &mut Ledger) -> Result<()> {
    let summary = ledger.summary()?;

    println!("SaveTUI: {}", ledger.path().display());
    println!("{}", "─".repeat(40));
    println!("  Entries:        {}", summary.entry_count);
    println!("  Total Salary:   {}", format_amount(summary.total_salary));
    println!("  Total Expenses: {}", format_amount(summary.total_expenses));
    println!("  Total Saved:    {}", format_amount(summary.total_saveable));
    println!(
        "  Avg Saved:      {}",
        format_amount(summary.average_saveable())
    );
    if let Some(latest) = summary.latest {
        println!(
            "  Latest Entry:   {}",
            latest.format(crate::models::DATE_FORMAT)
        );
    }
    Ok(())
}

fn cli_export(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(shellexpand(a)))
        .unwrap_or_else(|| {
            let date = chrono::Local::now().format("%Y-%m-%d");
            crate::config::home_dir().join(format!("savetui-export-{date}.csv"))
        });

    let count = ledger
        .export_csv(&output_path)
        .with_context(|| format!("Export to {} failed", output_path.display()))?;
    if count == 0 {
        println!("No entries; wrote header only to {}", output_path.display());
    } else {
        println!("Exported {count} entries to {}", output_path.display());
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", crate::config::home_dir().display())
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;

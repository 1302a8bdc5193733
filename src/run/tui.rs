use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::Ledger;
use crate::ui::app::{App, Focus, InputMode};

pub(crate) fn as_tui(ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new();
    app.refresh_entries(ledger)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.visible_rows = crate::ui::render::history_rows(f.area().height).max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app, ledger)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    if app.popup.is_some() {
        app.popup = None;
        return Ok(());
    }
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        app.running = false;
        return Ok(());
    }

    match app.input_mode {
        InputMode::Confirm => handle_confirm_input(key, app, ledger),
        InputMode::Normal => match app.focus {
            Focus::Form => handle_form_input(key, app, ledger),
            Focus::History => handle_history_input(key, app),
        },
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_form_input(key: KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('l') if ctrl => app.toggle_focus(),
        KeyCode::Char('r') if ctrl => app.clear_form(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),
        KeyCode::Enter => app.submit_form(ledger)?,
        KeyCode::Backspace => app.backspace(),
        KeyCode::Esc => app.status_message.clear(),
        KeyCode::Char(c) if !ctrl => app.type_char(c),
        _ => {}
    }
    Ok(())
}

fn handle_history_input(key: KeyEvent, app: &mut App) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('d') if ctrl => {
            for _ in 0..app.visible_rows / 2 {
                app.move_down();
            }
        }
        KeyCode::Char('u') if ctrl => {
            for _ in 0..app.visible_rows / 2 {
                app.move_up();
            }
        }
        KeyCode::Char('l') if ctrl => app.toggle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Char('D') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
            app.focus = Focus::Form;
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(ledger)?,
        _ => {
            // Any other key = cancel
            app.cancel_pending();
            app.set_status("Cancelled");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, Focus, InputMode, Popup};
use super::theme;
use super::util::{centered_rect, format_amount, truncate};
use crate::models::FormField;

/// Form rows plus a spacer, the totals line and two borders.
const FORM_HEIGHT: u16 = FormField::COUNT as u16 + 4;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title bar
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Min(4),              // History
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    super::screens::form::render(f, chunks[1], app);
    super::screens::history::render(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);

    if let Some(popup) = &app.popup {
        render_popup(f, f.area(), popup);
    } else if app.show_help {
        render_help_overlay(f, f.area());
    }
}

/// Rows available to the history table for a terminal of `height` rows.
pub(crate) fn history_rows(height: u16) -> usize {
    // title + form + status + history borders and header
    height.saturating_sub(1 + FORM_HEIGHT + 1 + 3) as usize
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let saved = app
        .total_saved()
        .map_or_else(|| "out of range".to_string(), format_amount);
    let left = " My Savings Tracker";
    let right = format!("{} entries | saved {saved} ", app.entries.len());
    let pad = (area.width as usize).saturating_sub(left.chars().count() + right.chars().count());

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(left, theme::title_style()),
        Span::styled(" ".repeat(pad), theme::title_style()),
        Span::styled(right, theme::title_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    if app.input_mode == InputMode::Confirm {
        let bar = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {}", app.confirm_message),
                Style::default().fg(theme::WARN),
            ),
            Span::styled(" [y/N] ", Style::default().fg(theme::LOSS)),
        ]))
        .style(theme::status_bar_style());
        f.render_widget(bar, area);
        return;
    }

    let mode_label = format!(" {} ", app.focus);
    let mode_style = Style::default()
        .fg(theme::BASE)
        .bg(match app.focus {
            Focus::Form => theme::GAIN,
            Focus::History => theme::FOCUS,
        })
        .add_modifier(Modifier::BOLD);

    let hints = match app.focus {
        Focus::Form => " Enter save | Tab next | Ctrl-l history | ? help ",
        Focus::History => " j/k move | D delete | Esc form | ? help ",
    };

    let room = (area.width as usize)
        .saturating_sub(mode_label.chars().count() + hints.chars().count() + 1);
    let message = if app.status_message.is_empty() {
        String::new()
    } else {
        format!(" {}", truncate(&app.status_message, room))
    };

    let used = mode_label.chars().count() + message.chars().count() + hints.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(message, theme::status_bar_style().fg(theme::TEXT)),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(hints, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_popup(f: &mut Frame, area: Rect, popup: &Popup) {
    let (title, color, text) = match popup {
        Popup::Success(msg) => (" Success ", theme::GAIN, msg.as_str()),
        Popup::Error(msg) => (" Error ", theme::LOSS, msg.as_str()),
    };

    let width = (area.width * 7 / 10).max(30);
    let height = (area.height * 3 / 10).max(5);
    let popup_area = centered_rect(width, height, area);

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(text.to_string(), theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", theme::dim_style())),
    ];

    f.render_widget(Clear, popup_area);
    let widget = Paragraph::new(body)
        .centered()
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    title,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(theme::BASE)),
        );
    f.render_widget(widget, popup_area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(theme::WARN)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " SaveTUI Help ",
            Style::default()
                .fg(theme::FOCUS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        row("  Tab/Down        Next field            Shift-Tab/Up  Previous field"),
        row("  0-9 . , ₱       Type amount           Backspace     Erase"),
        row("  Enter           Save entry            Ctrl-r        Clear form"),
        Line::from(""),
        section(" History"),
        row("  Ctrl-l          Focus history         Esc           Back to form"),
        row("  j/k or Up/Down  Move cursor           g/G           Top/Bottom"),
        row("  D or Delete     Delete entry          Ctrl-d/u      Page Down/Up"),
        Line::from(""),
        section(" General"),
        row("  ?               This help             Ctrl-q        Quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::MUTED),
        )),
    ];

    let popup_area = centered_rect(72, help_text.len() as u16 + 2, area);
    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::FOCUS))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::FormField;
use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::format_amount;

const LABEL_WIDTH: usize = 22;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Form;

    let mut lines: Vec<Line> = FormField::all()
        .iter()
        .map(|field| {
            let active = focused && *field == app.active_field;
            let marker = if active { "›" } else { " " };
            let value = app.form.get(*field);
            let (text, value_style) = if value.is_empty() {
                ("₱0.00".to_string(), theme::dim_style())
            } else if active {
                (value.to_string(), theme::selected_style())
            } else {
                (value.to_string(), theme::normal_style())
            };
            let label_style = if active {
                Style::default()
                    .fg(theme::FOCUS)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::normal_style()
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(theme::FOCUS)),
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                Span::styled(text, value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(preview_line(app));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled(
                " New Entry ",
                Style::default()
                    .fg(theme::MUTED)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(form, area);

    if focused {
        let row = app.active_field.index() as u16;
        let col = 2 + LABEL_WIDTH as u16 + app.form.get(app.active_field).chars().count() as u16;
        if row + 1 < area.height && col + 1 < area.width {
            f.set_cursor_position((area.x + 1 + col, area.y + 1 + row));
        }
    }
}

fn preview_line(app: &App) -> Line<'static> {
    match app.form_preview() {
        Some(p) => Line::from(vec![
            Span::styled(format!("  {:<LABEL_WIDTH$}", "Total Expenses"), theme::dim_style()),
            Span::styled(format_amount(p.total_expenses), theme::normal_style()),
            Span::styled("    Saveable ", theme::dim_style()),
            Span::styled(
                format_amount(p.saveable_amount),
                theme::amount_style(p.saveable_amount).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "  Some amounts are not valid numbers",
            Style::default().fg(theme::WARN),
        )),
    }
}

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, Focus};
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::History;
    let title = Span::styled(
        format!(" History ({}) ", app.entries.len()),
        Style::default()
            .fg(theme::MUTED)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(title);

    if app.entries.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No entries saved yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Fill in the form and press Enter to save one",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header = Row::new(
        ["Date", "Salary", "Expenses", "Saved"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::title_style())),
    )
    .height(1);

    let rows: Vec<Row> = app
        .entries
        .iter()
        .enumerate()
        .skip(app.history.offset)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, entry)| {
            let row_style = if focused && i == app.history.index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let saved_style = if focused && i == app.history.index {
                row_style.add_modifier(Modifier::BOLD)
            } else {
                row_style.patch(theme::amount_style(entry.saveable_amount))
            };
            Row::new(vec![
                Cell::from(entry.date_string()),
                Cell::from(format_amount(entry.salary)),
                Cell::from(format_amount(entry.total_expenses)),
                Cell::from(format_amount(entry.saveable_amount)).style(saved_style),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(20),
        Constraint::Min(14),
        Constraint::Min(14),
        Constraint::Min(14),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

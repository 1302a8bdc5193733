use ratatui::style::{Color, Modifier, Style};
use rust_decimal::Decimal;

// Warm dark palette
pub(crate) const BASE: Color = Color::Rgb(40, 40, 40);
pub(crate) const PANEL: Color = Color::Rgb(60, 56, 54);
pub(crate) const FRAME: Color = Color::Rgb(102, 92, 84);
pub(crate) const TEXT: Color = Color::Rgb(235, 219, 178);
pub(crate) const BRIGHT: Color = Color::Rgb(251, 241, 199);
pub(crate) const MUTED: Color = Color::Rgb(146, 131, 116);
pub(crate) const FOCUS: Color = Color::Rgb(131, 165, 152);
pub(crate) const GAIN: Color = Color::Rgb(184, 187, 38);
pub(crate) const LOSS: Color = Color::Rgb(251, 73, 52);
pub(crate) const WARN: Color = Color::Rgb(250, 189, 47);

pub(crate) fn title_style() -> Style {
    Style::new().fg(BRIGHT).bg(BASE).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::new().fg(BASE).bg(FOCUS)
}

pub(crate) fn normal_style() -> Style {
    Style::new().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::new().fg(MUTED)
}

/// Background for every other history row.
pub(crate) fn alt_row_style() -> Style {
    normal_style().bg(PANEL)
}

pub(crate) fn status_bar_style() -> Style {
    dim_style().bg(PANEL)
}

pub(crate) fn border_style(focused: bool) -> Style {
    Style::new().fg(if focused { FOCUS } else { FRAME })
}

/// Savings in the gain color, a shortfall in the loss color.
pub(crate) fn amount_style(val: Decimal) -> Style {
    Style::new().fg(if val.is_sign_negative() && !val.is_zero() {
        LOSS
    } else {
        GAIN
    })
}

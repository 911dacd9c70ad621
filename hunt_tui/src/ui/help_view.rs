//! Help tab view

use super::section;
use crate::app::{App, ARRIVAL_MILLIONS_MAX, ARRIVAL_MILLIONS_MIN};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let constants = &app.model.constants;

    let lines = vec![
        section("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select input"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section("Editing"),
        key_line("←/h  →/l", "Decrease/increase by 1"),
        key_line("PgDn  PgUp", "Decrease/increase by 10"),
        key_line("0-9", "Type a digit"),
        key_line("Backspace", "Delete last digit"),
        key_line("r", "Reset all inputs"),
        Line::from(""),
        section("Calculation"),
        Line::from(Span::styled(
            "Combat power (FDF):",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!(
            "  Σ count × attack × (1 + {} × bite level), split over hunt instinct raids",
            constants.bite_bonus_per_level
        )),
        Line::from(Span::styled(
            "Target size cutoff:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Log-log interpolation of the reference curve at the size on arrival,"),
        Line::from(format!(
            "  scaled by combat power per raid / {:.0}",
            app.model.curve.reference_combat_power()
        )),
        Line::from(format!(
            "  Size on arrival is entered in millions ({}-{})",
            ARRIVAL_MILLIONS_MIN, ARRIVAL_MILLIONS_MAX
        )),
        Line::from(format!(
            "  Cutoffs under {:.0} are flagged as not worth a raid",
            constants.cutoff_warning_threshold
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help "),
    );

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

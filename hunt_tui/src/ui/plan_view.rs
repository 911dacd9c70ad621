//! Plan tab view - inputs on the left, computed raid plan on the right

use super::{group_digits, section, value_line};
use crate::app::{App, Field};
use hunt_core::{Advisory, CalculationResult};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_inputs(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_field();
    let mut lines = vec![section("Army")];

    for field in app.fields() {
        if field == Field::BiteLevel {
            lines.push(Line::from(""));
            lines.push(section("Hunt"));
        }
        lines.push(input_line(&app.label(field), app.value(field), field == selected));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Inputs "),
    );

    f.render_widget(paragraph, area);
}

fn input_line(label: &str, value: u64, selected: bool) -> Line<'static> {
    let (marker, style) = if selected {
        (
            "▶ ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::White))
    };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(format!("{:24}", label), Style::default().fg(Color::Gray)),
        Span::styled(group_digits(value), style),
    ])
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.result {
        Ok(result) => result_lines(app, result),
        Err(err) => vec![Line::from(Span::styled(
            format!("Cannot compute cutoff: {}", err),
            Style::default().fg(Color::Red),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Results "),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn result_lines(app: &App, result: &CalculationResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Raids"),
        value_line("Raids", result.raid_count.to_string(), Color::White),
        value_line(
            "Combat power per raid",
            group_digits(result.combat_power_per_raid as u64),
            Color::White,
        ),
        value_line(
            "Total combat power",
            group_digits(result.total_combat_power as u64),
            Color::DarkGray,
        ),
        value_line(
            "Target size cutoff",
            group_digits(result.cutoff_truncated()),
            Color::Green,
        ),
        Line::from(""),
        section("Units per raid"),
    ];

    for (id, count) in &result.per_unit_raid_counts {
        lines.push(value_line(app.unit_name(id), group_digits(*count), Color::White));
    }

    lines.push(Line::from(""));
    lines.push(section("Army"));
    lines.push(value_line("Units", group_digits(result.army.units), Color::White));
    lines.push(value_line("Attack", group_digits(result.army.attack as u64), Color::Red));
    lines.push(value_line("Defense", group_digits(result.army.defense as u64), Color::Blue));
    lines.push(value_line("Health", group_digits(result.army.health as u64), Color::Magenta));

    if !result.advisories.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Advice"));
        for advisory in &result.advisories {
            lines.push(advisory_line(advisory));
        }
    }

    lines
}

fn advisory_line(advisory: &Advisory) -> Line<'static> {
    let color = match advisory {
        Advisory::CutoffBelowThreshold { .. } | Advisory::NoRaids => Color::Yellow,
        Advisory::UnknownUnitSkipped(_) => Color::DarkGray,
    };
    Line::from(Span::styled(format!("⚠ {}", advisory), Style::default().fg(color)))
}

//! DPS estimator view

use super::{field_line, result_line, section_title};
use crate::app::{App, SAMPLE_HITS};
use crate::forms::DpsForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_inputs(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.dps;
    let mut lines: Vec<Line> = vec![section_title("Inputs"), Line::from("")];
    for (i, (label, value)) in DpsForm::LABELS
        .iter()
        .zip(form.values())
        .enumerate()
    {
        lines.push(field_line(label, value, form.focus == i, app.editing));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Blank or invalid fields count as 0. Crit chance is clamped to 0-100%.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" DPS Estimator "));
    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let result = app.dps.estimate();
    let mut lines = vec![
        section_title("Expected"),
        Line::from(""),
        result_line(
            "Effective crit",
            format!("{:.1}%", result.effective_crit_chance * 100.0),
            Color::Yellow,
        ),
        result_line(
            "Expected hit",
            format!("{:.2}", result.expected_hit_damage),
            Color::White,
        ),
        result_line("DPS", format!("{:.2}", result.dps), Color::Green),
        Line::from(""),
        section_title("Sampled"),
        Line::from(""),
    ];

    match &app.dps.sample {
        Some(sample) => {
            let aps = app.dps.input().attacks_per_second;
            lines.push(result_line("Hits rolled", sample.hits.to_string(), Color::White));
            lines.push(result_line(
                "Observed crit",
                format!("{:.1}%", sample.crit_rate()),
                Color::Yellow,
            ));
            lines.push(result_line(
                "Average hit",
                format!("{:.2}", sample.avg_damage()),
                Color::White,
            ));
            lines.push(result_line("Observed DPS", format!("{:.2}", sample.dps(aps)), Color::Green));
        }
        None => lines.push(Line::from(Span::styled(
            format!("Press [s] to roll {} hits", SAMPLE_HITS),
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Results "));
    f.render_widget(paragraph, area);
}

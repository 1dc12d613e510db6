//! Upgrade cost projector view

use super::{field_line, result_line, section_title, select_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use utd_core::upgrade::{format_amount, GrowthModel};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_inputs(f, app, chunks[0]);
    draw_projection(f, app, chunks[1]);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.upgrade;
    let limits = &app.limits.upgrade;
    let hint = match form.model {
        GrowthModel::Linear => "Cost(n) = base + step × (n - 1)".to_string(),
        GrowthModel::Exponential => "Cost(n) = base × rate^(n - 1)".to_string(),
    };

    let lines = vec![
        section_title("Inputs"),
        Line::from(""),
        select_line("Model", form.model.label(), form.focus == 0),
        field_line("Base cost", &form.base_cost, form.focus == 1, app.editing),
        field_line("Levels", &form.levels, form.focus == 2, app.editing),
        field_line(form.rate_label(), form.rate_value(), form.focus == 3, app.editing),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Levels 0-{}, costs up to {}, growth rate 1-{}",
                limits.max_levels,
                format_amount(limits.max_cost, limits.scientific_threshold),
                limits.max_growth_rate
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Upgrade Projector "));
    f.render_widget(paragraph, area);
}

fn draw_projection(f: &mut Frame, app: &App, area: Rect) {
    let limits = &app.limits.upgrade;
    let projection = app.upgrade.project(&app.limits);
    let amount = |v: f64| format_amount(v, limits.scientific_threshold);

    let mut lines = vec![
        section_title("Totals"),
        Line::from(""),
        result_line("Levels", projection.levels().to_string(), Color::White),
        result_line("Total cost", amount(projection.total), Color::Green),
        result_line("Average per level", amount(projection.average), Color::Yellow),
    ];
    if projection.saturated {
        lines.push(Line::from(Span::styled(
            "Costs exceed the representable range; totals are capped",
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_title("Per level"));
    lines.push(Line::from(""));
    if projection.levels() == 0 {
        lines.push(Line::from(Span::styled(
            "No levels to project",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, cost) in projection.preview(limits.preview_levels).iter().enumerate() {
        lines.push(result_line(&format!("Level {}", i + 1), amount(*cost), Color::White));
    }
    let hidden = projection.levels().saturating_sub(limits.preview_levels);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("… {} more levels", hidden),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Projection "));
    f.render_widget(paragraph, area);
}

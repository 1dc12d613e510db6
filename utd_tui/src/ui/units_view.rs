//! Unit catalog browser view

use super::{field_line, rarity_color, select_line};
use crate::app::App;
use crate::forms::UnitsForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use utd_core::CatalogEntry;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    draw_filters(f, app, chunks[0]);
    draw_results(f, app, chunks[1]);
}

fn draw_filters(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.units;
    let filter = &form.filter;
    let lines = vec![
        field_line(UnitsForm::LABELS[0], &filter.query, form.focus == 0, app.editing),
        select_line(UnitsForm::LABELS[1], &filter.role.to_string(), form.focus == 1),
        select_line(UnitsForm::LABELS[2], &filter.rarity.to_string(), form.focus == 2),
        Line::from(""),
        Line::from(Span::styled(
            filter.summary(&app.catalog),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Unit Browser "));
    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let shown = app.units.filter.apply(&app.catalog);

    let lines: Vec<Line> = if shown.is_empty() {
        vec![Line::from(Span::styled(
            "No units match the current search",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let start = app.units.scroll.min(shown.len() - 1);
        shown[start..].iter().flat_map(|entry| entry_lines(entry)).collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Units "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn entry_lines(entry: &CatalogEntry) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                entry.name.clone(),
                Style::default()
                    .fg(rarity_color(entry.rarity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", entry.role, entry.rarity),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            format!("  Obtain: {}", entry.obtain_method),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("  {}", entry.notes),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !entry.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  #{}", entry.tags.join(" #")),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));
    lines
}

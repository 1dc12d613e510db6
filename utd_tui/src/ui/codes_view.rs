//! Redeem codes view

use super::section_title;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use utd_core::CodeStatus;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    draw_active(f, app, chunks[0]);
    draw_expired(f, app, chunks[1]);
}

fn draw_active(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.codes;
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Last updated: {}", form.board.last_updated),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (i, code) in form.board.active.iter().enumerate() {
        let selected = i == form.selected;
        let marker = if selected { "▶ " } else { "  " };
        let code_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let status_color = match code.status {
            CodeStatus::New => Color::Green,
            CodeStatus::Active => Color::Cyan,
        };

        let mut spans = vec![
            Span::styled(marker, code_style),
            Span::styled(format!("{:16}", code.code), code_style),
            Span::styled(format!("[{}] ", code.status), Style::default().fg(status_color)),
            Span::styled(code.reward.clone(), Style::default().fg(Color::Gray)),
        ];
        if selected {
            spans.push(Span::styled(
                format!("  ({})", app.copy_label()),
                Style::default().fg(Color::Yellow),
            ));
        }
        lines.push(Line::from(spans));

        if let Some(note) = &code.note {
            lines.push(Line::from(Span::styled(
                format!("    {}", note),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Active Codes "));
    f.render_widget(paragraph, area);
}

fn draw_expired(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![section_title("Expired"), Line::from("")];
    for code in &app.codes.board.expired {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:14}", code.code),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::styled(code.reward.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Archive "));
    f.render_widget(paragraph, area);
}

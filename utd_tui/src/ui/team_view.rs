//! Team builder view

use super::{field_line, section_title, select_line};
use crate::app::App;
use crate::forms::{Form, TeamField};
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
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_slots(f, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(chunks[1]);
    draw_export(f, app, right[0]);
    draw_roles(f, app, right[1]);
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.team;
    let team = &form.team;
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for index in 0..form.field_count() {
        let focused = form.focus == index;
        if focused {
            focused_line = lines.len();
        }
        match form.field(index) {
            TeamField::TeamName => {
                lines.push(field_line("Team name", &team.team_name, focused, app.editing));
            }
            TeamField::Name(slot) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Slot {}", slot + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
                if focused {
                    focused_line = lines.len();
                }
                lines.push(field_line("  Unit", &team.slots[slot].name, focused, app.editing));
            }
            TeamField::Role(slot) => {
                lines.push(select_line("  Role", team.slots[slot].role.label(), focused));
            }
            TeamField::Notes(slot) => {
                lines.push(field_line("  Notes", &team.slots[slot].notes, focused, app.editing));
            }
        }
    }

    // Keep the focused field on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (focused_line + 1).saturating_sub(visible);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Team Builder "))
        .scroll((scroll as u16, 0));
    f.render_widget(paragraph, area);
}

fn draw_export(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.team.team.serialize();
    let lines: Vec<Line> = summary.lines().map(|l| Line::from(l.to_string())).collect();

    let title = format!(" Export [c] {} ", app.copy_label());
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_roles(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .team
        .team
        .role_counts()
        .into_iter()
        .flat_map(|(role, count)| {
            let color = if count > 0 { Color::White } else { Color::DarkGray };
            [
                Span::styled(format!("{}: ", role.label()), Style::default().fg(Color::Gray)),
                Span::styled(format!("{}   ", count), Style::default().fg(color)),
            ]
        })
        .collect();

    let lines = vec![section_title("Roles"), Line::from(spans)];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

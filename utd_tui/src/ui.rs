//! UI rendering

mod codes_view;
mod dps_view;
mod help_view;
mod team_view;
mod units_view;
mod upgrade_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use utd_core::Rarity;

/// Width of the label column in form lines
const LABEL_WIDTH: usize = 22;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Dps => dps_view::draw(f, app, chunks[1]),
        Tab::Upgrade => upgrade_view::draw(f, app, chunks[1]),
        Tab::Team => team_view::draw(f, app, chunks[1]),
        Tab::Units => units_view::draw(f, app, chunks[1]),
        Tab::Codes => codes_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = if app.editing {
        vec![("Enter/Esc", "Done"), ("Tab", "Next field")]
    } else {
        vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")]
    };

    let tab_keys: Vec<(&str, &str)> = if app.editing {
        vec![("Type", "Edit field"), ("Backspace", "Delete")]
    } else {
        match app.current_tab {
            Tab::Dps => vec![
                ("↑/↓", "Field"),
                ("Enter", "Edit"),
                ("s", "Sample hits"),
                ("r", "Reset"),
            ],
            Tab::Upgrade => vec![
                ("↑/↓", "Field"),
                ("Enter", "Edit"),
                ("←/→", "Model"),
                ("r", "Reset"),
            ],
            Tab::Team => vec![
                ("↑/↓", "Field"),
                ("Enter", "Edit"),
                ("←/→", "Role"),
                ("c", app.copy_label()),
                ("J", "Copy JSON"),
                ("r", "Reset"),
            ],
            Tab::Units => vec![
                ("↑/↓", "Field"),
                ("Enter", "Search"),
                ("←/→", "Filter"),
                ("PgUp/PgDn", "Scroll"),
                ("r", "Reset"),
            ],
            Tab::Codes => vec![("↑/↓", "Select code"), ("Enter/c", app.copy_label())],
            Tab::Help => vec![],
        }
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("{} {}", i + 1, t.name()), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" UTD Planner "))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Text input line; the focused field is marked and shows a cursor while editing
pub fn field_line(label: &str, value: &str, focused: bool, editing: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if focused && editing {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if focused && editing { "▏" } else { "" };

    Line::from(vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(format!("{:width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

/// Select line, rendered as `< value >`
pub fn select_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(format!("{:width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ])
}

/// Read-only result line
pub fn result_line(name: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:width$}", name, width = LABEL_WIDTH),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

pub fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Mythic => Color::Red,
        Rarity::Secret => Color::Yellow,
        Rarity::Unknown => Color::DarkGray,
    }
}

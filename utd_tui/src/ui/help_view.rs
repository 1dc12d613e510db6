//! Help tab view

use super::section_title;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let limits = &app.limits.upgrade;
    let lines = vec![
        section_title("Navigation"),
        key_line("1-6", "Jump to tab (DPS/Upgrade/Team/Units/Codes/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Previous/next field"),
        key_line("←/h  →/l", "Change the focused select"),
        key_line("Enter", "Edit the focused text field"),
        key_line("Enter / Esc", "Finish editing"),
        key_line("r", "Reset the current tool"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section_title("Tools"),
        key_line("s", "DPS: roll sampled hits against the inputs"),
        key_line("c", "Team: copy the text summary"),
        key_line("J", "Team: copy the team as JSON"),
        key_line("PgUp/PgDn", "Units: scroll the results"),
        key_line("Enter / c", "Codes: copy the selected code"),
        Line::from(""),
        section_title("Formulas"),
        Line::from(""),
        Line::from(Span::styled("DPS:", Style::default().fg(Color::Yellow))),
        Line::from("  Expected hit = base × (1 + crit% × (multiplier - 1))"),
        Line::from("  DPS = expected hit × attacks per second"),
        Line::from("  Crit chance is clamped to 0-100%, multiplier to at least 1"),
        Line::from(""),
        Line::from(Span::styled("Upgrade costs:", Style::default().fg(Color::Yellow))),
        Line::from("  Linear:      cost(n) = base + step × (n - 1)"),
        Line::from("  Exponential: cost(n) = base × rate^(n - 1)"),
        Line::from(format!(
            "  Levels are capped at {}; the first {} are listed",
            limits.max_levels, limits.preview_levels
        )),
        Line::from(""),
        Line::from(Span::styled("Unit search:", Style::default().fg(Color::Yellow))),
        Line::from("  Matches name, role, rarity, obtain method, notes and tags"),
        Line::from("  Case-insensitive; blank search matches every unit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

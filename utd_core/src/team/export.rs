//! Plain-text team summary

use super::Team;

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the shareable summary:
///
/// ```text
/// UTD Team: <team name or Untitled>
///
/// 1. <name or (empty)> — <role>[ — <notes>]
/// ```
pub fn serialize_team(team: &Team) -> String {
    let team_name = normalize_whitespace(&team.team_name);
    let header = if team_name.is_empty() {
        "UTD Team: Untitled".to_string()
    } else {
        format!("UTD Team: {}", team_name)
    };

    let mut lines = vec![header, String::new()];
    for (index, slot) in team.slots.iter().enumerate() {
        let name = normalize_whitespace(&slot.name);
        let name = if name.is_empty() { "(empty)" } else { name.as_str() };
        let notes = normalize_whitespace(&slot.notes);

        let line = if notes.is_empty() {
            format!("{}. {} — {}", index + 1, name, slot.role)
        } else {
            format!("{}. {} — {} — {}", index + 1, name, slot.role, notes)
        };
        lines.push(line);
    }

    lines.join("\n")
}

//! Application state

use crate::forms::{CodesForm, DpsForm, Form, TeamForm, UnitsForm, UpgradeForm};
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::info;
use utd_core::{
    default_catalog, default_codes, CatalogEntry, Clipboard, CodeBoard, CopyFeedback,
    MemoryClipboard, ToolLimits,
};

/// Hits rolled per sampled DPS run
pub const SAMPLE_HITS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dps,
    Upgrade,
    Team,
    Units,
    Codes,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Dps, Tab::Upgrade, Tab::Team, Tab::Units, Tab::Codes, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Dps => "DPS",
            Tab::Upgrade => "Upgrade",
            Tab::Team => "Team",
            Tab::Units => "Units",
            Tab::Codes => "Codes",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub limits: ToolLimits,
    pub catalog: Vec<CatalogEntry>,
    pub dps: DpsForm,
    pub upgrade: UpgradeForm,
    pub team: TeamForm,
    pub units: UnitsForm,
    pub codes: CodesForm,
    /// Typed keys go into the focused text field
    pub editing: bool,
    pub copy_feedback: CopyFeedback,
    clipboard: Box<dyn Clipboard>,
    rng: rand::rngs::StdRng,
}

impl App {
    pub fn new(
        limits: ToolLimits,
        catalog: Vec<CatalogEntry>,
        codes: CodeBoard,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let copy_feedback = CopyFeedback::new(Duration::from_millis(limits.copy.acknowledge_ms));
        App {
            current_tab: Tab::Dps,
            limits,
            catalog,
            dps: DpsForm::new(),
            upgrade: UpgradeForm::new(),
            team: TeamForm::new(),
            units: UnitsForm::new(),
            codes: CodesForm::new(codes),
            editing: false,
            copy_feedback,
            clipboard,
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Seed the sampler, for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = rand::rngs::StdRng::seed_from_u64(seed);
        self
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.set_tab((idx + 1) % tabs.len());
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.set_tab((idx + tabs.len() - 1) % tabs.len());
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
            self.editing = false;
        }
    }

    fn current_form(&mut self) -> Option<&mut dyn Form> {
        match self.current_tab {
            Tab::Dps => Some(&mut self.dps as &mut dyn Form),
            Tab::Upgrade => Some(&mut self.upgrade as &mut dyn Form),
            Tab::Team => Some(&mut self.team as &mut dyn Form),
            Tab::Units => Some(&mut self.units as &mut dyn Form),
            Tab::Codes => Some(&mut self.codes as &mut dyn Form),
            Tab::Help => None,
        }
    }

    pub fn on_up(&mut self) {
        if let Some(form) = self.current_form() {
            form.focus_prev();
        }
    }

    pub fn on_down(&mut self) {
        if let Some(form) = self.current_form() {
            form.focus_next();
        }
    }

    pub fn on_left(&mut self) {
        if let Some(form) = self.current_form() {
            form.cycle(false);
        }
    }

    pub fn on_right(&mut self) {
        if let Some(form) = self.current_form() {
            form.cycle(true);
        }
    }

    /// Start editing a text field, cycle a select, or copy the selected code
    pub fn on_enter(&mut self) {
        if self.current_tab == Tab::Codes {
            self.copy_current();
            return;
        }
        let Some(form) = self.current_form() else {
            return;
        };
        if form.focused_is_text() {
            self.editing = true;
        } else {
            form.cycle(true);
        }
    }

    pub fn on_char(&mut self, c: char) {
        if !self.editing {
            return;
        }
        if let Some(form) = self.current_form() {
            form.edit_text(&mut |s| s.push(c));
        }
    }

    pub fn on_backspace(&mut self) {
        if !self.editing {
            return;
        }
        if let Some(form) = self.current_form() {
            form.edit_text(&mut |s| {
                s.pop();
            });
        }
    }

    /// Leave text entry, keeping what was typed
    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Copy whatever the current tab exports
    pub fn copy_current(&mut self) {
        let value = match self.current_tab {
            Tab::Team => Some(self.team.team.serialize()),
            Tab::Codes => self.codes.selected_code().map(str::to_string),
            _ => None,
        };
        if let Some(value) = value {
            self.copy_feedback
                .copy(&mut *self.clipboard, &value, Instant::now());
        }
    }

    /// Copy the team as JSON
    pub fn copy_team_json(&mut self) {
        if self.current_tab != Tab::Team {
            return;
        }
        match self.team.team.to_json() {
            Ok(json) => {
                self.copy_feedback
                    .copy(&mut *self.clipboard, &json, Instant::now());
            }
            Err(err) => tracing::warn!(error = %err, "team json export failed"),
        }
    }

    /// Reset the current tool to its starting state
    pub fn reset(&mut self) {
        match self.current_tab {
            Tab::Dps => self.dps = DpsForm::new(),
            Tab::Upgrade => self.upgrade = UpgradeForm::new(),
            Tab::Team => self.team.reset(),
            Tab::Units => self.units.reset(),
            Tab::Codes | Tab::Help => return,
        }
        self.editing = false;
        info!(tab = self.current_tab.name(), "tool reset");
    }

    /// Roll sampled hits against the current DPS inputs
    pub fn sample_dps(&mut self) {
        if self.current_tab == Tab::Dps {
            self.dps.run_sample(SAMPLE_HITS, &mut self.rng);
        }
    }

    pub fn on_page_down(&mut self) {
        if self.current_tab == Tab::Units {
            self.units.scroll = self.units.scroll.saturating_add(1);
        }
    }

    pub fn on_page_up(&mut self) {
        if self.current_tab == Tab::Units {
            self.units.scroll = self.units.scroll.saturating_sub(1);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.copy_feedback.tick(now);
    }

    pub fn copy_label(&self) -> &'static str {
        self.copy_feedback.label(Instant::now())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(
            ToolLimits::default(),
            default_catalog(),
            default_codes(),
            Box::new(MemoryClipboard::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use utd_core::ClipboardError;

    /// Clipboard whose contents the test can still read after handing it to the app
    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<Option<String>>>);

    impl Clipboard for SharedClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            *self.0.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    fn app_with_clipboard() -> (App, SharedClipboard) {
        let clipboard = SharedClipboard::default();
        let app = App::new(
            ToolLimits::default(),
            default_catalog(),
            default_codes(),
            Box::new(clipboard.clone()),
        );
        (app, clipboard)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_char(c);
        }
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = App::default();
        assert_eq!(app.current_tab, Tab::Dps);
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Upgrade);
    }

    #[test]
    fn test_typing_requires_edit_mode() {
        let mut app = App::default();
        app.on_char('5');
        assert_eq!(app.dps.base_damage, "100");

        app.on_enter();
        assert!(app.editing);
        app.on_backspace();
        app.on_backspace();
        app.on_backspace();
        type_text(&mut app, "250");
        app.stop_editing();
        assert!((app.dps.estimate().dps - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_team_copy_exports_summary() {
        let (mut app, clipboard) = app_with_clipboard();
        app.set_tab(2);
        app.on_down(); // slot 1 name
        app.on_enter();
        type_text(&mut app, "Kenpachi");
        app.stop_editing();
        app.on_down(); // slot 1 role
        app.on_right();

        app.copy_current();
        let copied = clipboard.0.borrow().clone().unwrap();
        assert!(copied.starts_with("UTD Team: My UTD Team\n\n1. Kenpachi — Main DPS"));
        assert_eq!(app.copy_label(), "Copied");
    }

    #[test]
    fn test_codes_enter_copies_selected() {
        let (mut app, clipboard) = app_with_clipboard();
        app.set_tab(4);
        app.on_down();
        app.on_enter();
        assert_eq!(clipboard.0.borrow().as_deref(), Some("75kLikes!"));
    }

    #[test]
    fn test_units_filter_through_app() {
        let mut app = App::default();
        app.set_tab(3);
        app.on_down(); // role select
        app.on_right();
        let shown = app.units.filter.apply(&app.catalog);
        assert!(shown.iter().all(|e| e.role == utd_core::UnitRole::Dps));

        app.reset();
        assert_eq!(app.units.filter.apply(&app.catalog).len(), app.catalog.len());
    }

    #[test]
    fn test_sample_is_seeded() {
        let mut first = App::default().with_seed(9);
        let mut second = App::default().with_seed(9);
        for app in [&mut first, &mut second] {
            app.dps.crit_chance = "40".to_string();
            app.sample_dps();
        }
        assert_eq!(first.dps.sample, second.dps.sample);
        assert!(first.dps.sample.is_some());
    }

    #[test]
    fn test_copy_acknowledgment_expires_on_tick() {
        let (mut app, _clipboard) = app_with_clipboard();
        app.set_tab(2);
        app.copy_current();
        app.tick(Instant::now() + Duration::from_secs(2));
        assert_eq!(app.copy_label(), "Copy");
    }
}

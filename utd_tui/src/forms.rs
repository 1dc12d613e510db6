//! Per-tool form state
//!
//! Each tool owns its raw field buffers and derives its output from them on
//! every draw. Numeric buffers are parsed with [`parse_number`], so anything
//! unparsable reads as 0.

use utd_core::{
    catalog::CatalogFilter,
    dps::{estimate, sample_hits, DpsEstimate, DpsInput, HitSample},
    numeric::parse_number,
    team::{SlotPatch, Team, TEAM_SIZE},
    upgrade::{project_with, GrowthModel, UpgradeInput, UpgradeProjection},
    CodeBoard, ToolLimits,
};

/// Fields per team slot: name, role, notes
const SLOT_FIELDS: usize = 3;

/// Focusable form fields
pub trait Form {
    fn field_count(&self) -> usize;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, focus: usize);
    /// Whether the focused field takes typed text
    fn focused_is_text(&self) -> bool;
    /// Edit the focused text field in place
    fn edit_text(&mut self, edit: &mut dyn FnMut(&mut String));
    /// Step the focused select field; no-op on text fields
    fn cycle(&mut self, forward: bool);

    fn focus_next(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.set_focus((self.focus() + 1) % count);
        }
    }

    fn focus_prev(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.set_focus((self.focus() + count - 1) % count);
        }
    }
}

/// DPS estimator inputs
pub struct DpsForm {
    pub base_damage: String,
    pub attacks_per_second: String,
    pub crit_chance: String,
    pub crit_multiplier: String,
    pub focus: usize,
    /// Most recent sampled run, cleared when inputs change
    pub sample: Option<HitSample>,
}

impl DpsForm {
    pub const LABELS: [&'static str; 4] = [
        "Base damage",
        "Attacks per second",
        "Crit chance (%)",
        "Crit multiplier",
    ];

    pub fn new() -> Self {
        let defaults = DpsInput::default();
        DpsForm {
            base_damage: defaults.base_damage.to_string(),
            attacks_per_second: defaults.attacks_per_second.to_string(),
            crit_chance: defaults.crit_chance_percent.to_string(),
            crit_multiplier: defaults.crit_multiplier.to_string(),
            focus: 0,
            sample: None,
        }
    }

    pub fn values(&self) -> [&str; 4] {
        [
            self.base_damage.as_str(),
            self.attacks_per_second.as_str(),
            self.crit_chance.as_str(),
            self.crit_multiplier.as_str(),
        ]
    }

    pub fn input(&self) -> DpsInput {
        DpsInput {
            base_damage: parse_number(&self.base_damage),
            attacks_per_second: parse_number(&self.attacks_per_second),
            crit_chance_percent: parse_number(&self.crit_chance),
            crit_multiplier: parse_number(&self.crit_multiplier),
        }
    }

    pub fn estimate(&self) -> DpsEstimate {
        estimate(&self.input())
    }

    pub fn run_sample(&mut self, hits: u32, rng: &mut impl rand::Rng) {
        self.sample = Some(sample_hits(&self.input(), hits, rng));
    }
}

impl Form for DpsForm {
    fn field_count(&self) -> usize {
        Self::LABELS.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_is_text(&self) -> bool {
        true
    }

    fn edit_text(&mut self, edit: &mut dyn FnMut(&mut String)) {
        let field = match self.focus {
            0 => &mut self.base_damage,
            1 => &mut self.attacks_per_second,
            2 => &mut self.crit_chance,
            _ => &mut self.crit_multiplier,
        };
        edit(field);
        self.sample = None;
    }

    fn cycle(&mut self, _forward: bool) {}
}

/// Upgrade cost projector inputs
pub struct UpgradeForm {
    pub model: GrowthModel,
    pub base_cost: String,
    pub levels: String,
    pub linear_step: String,
    pub growth_rate: String,
    pub focus: usize,
}

impl UpgradeForm {
    pub fn new() -> Self {
        let defaults = UpgradeInput::default();
        UpgradeForm {
            model: defaults.model,
            base_cost: defaults.base_cost.to_string(),
            levels: defaults.levels.to_string(),
            linear_step: defaults.linear_step.to_string(),
            growth_rate: defaults.growth_rate.to_string(),
            focus: 0,
        }
    }

    /// Label of the model-specific field
    pub fn rate_label(&self) -> &'static str {
        match self.model {
            GrowthModel::Linear => "Step per level",
            GrowthModel::Exponential => "Growth rate",
        }
    }

    pub fn rate_value(&self) -> &str {
        match self.model {
            GrowthModel::Linear => &self.linear_step,
            GrowthModel::Exponential => &self.growth_rate,
        }
    }

    pub fn input(&self) -> UpgradeInput {
        UpgradeInput {
            model: self.model,
            base_cost: parse_number(&self.base_cost),
            levels: parse_number(&self.levels),
            linear_step: parse_number(&self.linear_step),
            growth_rate: parse_number(&self.growth_rate),
        }
    }

    pub fn project(&self, limits: &ToolLimits) -> UpgradeProjection {
        project_with(&self.input(), &limits.upgrade)
    }
}

impl Form for UpgradeForm {
    fn field_count(&self) -> usize {
        4
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_is_text(&self) -> bool {
        self.focus != 0
    }

    fn edit_text(&mut self, edit: &mut dyn FnMut(&mut String)) {
        match self.focus {
            1 => edit(&mut self.base_cost),
            2 => edit(&mut self.levels),
            3 => match self.model {
                GrowthModel::Linear => edit(&mut self.linear_step),
                GrowthModel::Exponential => edit(&mut self.growth_rate),
            },
            _ => {}
        }
    }

    fn cycle(&mut self, _forward: bool) {
        if self.focus == 0 {
            self.model = self.model.toggled();
        }
    }
}

/// What a team builder field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    TeamName,
    Name(usize),
    Role(usize),
    Notes(usize),
}

/// Team builder state; every edit goes through the [`Team`] API
pub struct TeamForm {
    pub team: Team,
    pub focus: usize,
}

impl TeamForm {
    pub fn new() -> Self {
        TeamForm {
            team: Team::new(),
            focus: 0,
        }
    }

    pub fn field(&self, index: usize) -> TeamField {
        if index == 0 {
            return TeamField::TeamName;
        }
        let slot = (index - 1) / SLOT_FIELDS;
        match (index - 1) % SLOT_FIELDS {
            0 => TeamField::Name(slot),
            1 => TeamField::Role(slot),
            _ => TeamField::Notes(slot),
        }
    }

    pub fn focused_field(&self) -> TeamField {
        self.field(self.focus)
    }

    pub fn reset(&mut self) {
        self.team.reset();
        self.focus = 0;
    }
}

impl Form for TeamForm {
    fn field_count(&self) -> usize {
        1 + TEAM_SIZE * SLOT_FIELDS
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_is_text(&self) -> bool {
        !matches!(self.focused_field(), TeamField::Role(_))
    }

    fn edit_text(&mut self, edit: &mut dyn FnMut(&mut String)) {
        match self.focused_field() {
            TeamField::TeamName => {
                let mut name = self.team.team_name.clone();
                edit(&mut name);
                self.team.update_team_name(name);
            }
            TeamField::Name(slot) => {
                let mut name = self.team.slots[slot].name.clone();
                edit(&mut name);
                if let Err(err) = self.team.update_slot(slot, SlotPatch::name(name)) {
                    tracing::warn!(error = %err, "team name edit rejected");
                }
            }
            TeamField::Notes(slot) => {
                let mut notes = self.team.slots[slot].notes.clone();
                edit(&mut notes);
                if let Err(err) = self.team.update_slot(slot, SlotPatch::notes(notes)) {
                    tracing::warn!(error = %err, "team notes edit rejected");
                }
            }
            TeamField::Role(_) => {}
        }
    }

    fn cycle(&mut self, forward: bool) {
        if let TeamField::Role(slot) = self.focused_field() {
            let roles = utd_core::SlotRole::all();
            let current = self.team.slots[slot].role;
            let pos = roles.iter().position(|r| *r == current).unwrap_or(0);
            let next = if forward {
                roles[(pos + 1) % roles.len()]
            } else {
                roles[(pos + roles.len() - 1) % roles.len()]
            };
            if let Err(err) = self.team.update_slot(slot, SlotPatch::role(next)) {
                tracing::warn!(error = %err, "team role edit rejected");
            }
        }
    }
}

/// Unit browser: search field plus role and rarity selects
pub struct UnitsForm {
    pub filter: CatalogFilter,
    pub focus: usize,
    pub scroll: usize,
}

impl UnitsForm {
    pub const LABELS: [&'static str; 3] = ["Search", "Role", "Rarity"];

    pub fn new() -> Self {
        UnitsForm {
            filter: CatalogFilter::new(),
            focus: 0,
            scroll: 0,
        }
    }

    pub fn reset(&mut self) {
        self.filter.reset();
        self.scroll = 0;
    }
}

impl Form for UnitsForm {
    fn field_count(&self) -> usize {
        Self::LABELS.len()
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn focused_is_text(&self) -> bool {
        self.focus == 0
    }

    fn edit_text(&mut self, edit: &mut dyn FnMut(&mut String)) {
        if self.focus == 0 {
            edit(&mut self.filter.query);
            self.scroll = 0;
        }
    }

    fn cycle(&mut self, forward: bool) {
        match (self.focus, forward) {
            (1, true) => self.filter.next_role(),
            (1, false) => self.filter.prev_role(),
            (2, true) => self.filter.next_rarity(),
            (2, false) => self.filter.prev_rarity(),
            _ => return,
        }
        self.scroll = 0;
    }
}

/// Codes board selection
pub struct CodesForm {
    pub board: CodeBoard,
    pub selected: usize,
}

impl CodesForm {
    pub fn new(board: CodeBoard) -> Self {
        CodesForm { board, selected: 0 }
    }

    pub fn selected_code(&self) -> Option<&str> {
        self.board.active_code(self.selected).map(|c| c.code.as_str())
    }
}

impl Form for CodesForm {
    fn field_count(&self) -> usize {
        self.board.active.len()
    }

    fn focus(&self) -> usize {
        self.selected
    }

    fn set_focus(&mut self, focus: usize) {
        self.selected = focus;
    }

    fn focused_is_text(&self) -> bool {
        false
    }

    fn edit_text(&mut self, _edit: &mut dyn FnMut(&mut String)) {}

    fn cycle(&mut self, _forward: bool) {}
}

//! Integration test: plan a DPS unit -> project its upgrades -> slot it into a team -> export
//!
//! Runs every planning tool end to end through the library API.

use std::time::{Duration, Instant};
use utd_core::{
    default_catalog, default_codes, estimate, filter, project, CatalogFilter, Choice,
    CopyFeedback, DpsInput, GrowthModel, MemoryClipboard, Rarity, SlotPatch, SlotRole, Team,
    UnitRole, UpgradeInput,
};

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

#[test]
fn test_full_planning_flow() {
    separator("STEP 1: Browse the catalog for Mythic DPS units");

    let catalog = default_catalog();
    let mythic_dps: Vec<_> = filter(
        &catalog,
        "",
        Choice::Only(UnitRole::Dps),
        Choice::Only(Rarity::Mythic),
    )
    .collect();
    for entry in &mythic_dps {
        println!("  {} ({}, {}) - {}", entry.name, entry.role, entry.rarity, entry.obtain_method);
    }
    assert!(!mythic_dps.is_empty());
    let pick = mythic_dps[0].name.clone();
    assert_eq!(pick, "Kenpachi");

    separator("STEP 2: Estimate its damage");

    let dps = estimate(&DpsInput {
        base_damage: 100.0,
        attacks_per_second: 2.0,
        crit_chance_percent: 50.0,
        crit_multiplier: 3.0,
    });
    println!("  Expected hit: {:.2}", dps.expected_hit_damage);
    println!("  DPS: {:.2}", dps.dps);
    assert!((dps.expected_hit_damage - 200.0).abs() < f64::EPSILON);
    assert!((dps.dps - 400.0).abs() < f64::EPSILON);

    separator("STEP 3: Project its upgrade costs");

    let linear = project(&UpgradeInput {
        model: GrowthModel::Linear,
        base_cost: 100.0,
        levels: 3.0,
        linear_step: 25.0,
        growth_rate: 1.15,
    });
    println!("  Linear: {:?} total {}", linear.per_level_costs, linear.total);
    assert_eq!(linear.per_level_costs, vec![100.0, 125.0, 150.0]);
    assert!((linear.total - 375.0).abs() < f64::EPSILON);
    assert!((linear.average - 125.0).abs() < f64::EPSILON);

    let exponential = project(&UpgradeInput {
        model: GrowthModel::Exponential,
        base_cost: 100.0,
        levels: 3.0,
        linear_step: 25.0,
        growth_rate: 2.0,
    });
    println!("  Exponential: {:?} total {}", exponential.per_level_costs, exponential.total);
    assert_eq!(exponential.per_level_costs, vec![100.0, 200.0, 400.0]);
    assert!((exponential.total - 700.0).abs() < f64::EPSILON);
    assert!((exponential.average - 700.0 / 3.0).abs() < 1e-9);

    separator("STEP 4: Build and export the team");

    let mut team = Team::new();
    team.update_slot(
        2,
        SlotPatch {
            name: Some(format!("  {}  ", pick)),
            role: Some(SlotRole::MainDps),
            notes: Some(String::new()),
        },
    )
    .unwrap();
    team.update_slot(0, SlotPatch::notes("  buffs   the   front  "))
        .unwrap();
    assert!(team.update_slot(6, SlotPatch::name("Nobody")).is_err());

    let summary = team.serialize();
    println!("{}", summary);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "UTD Team: My UTD Team");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "1. (empty) — Flex — buffs the front");
    assert_eq!(lines[4], "3. Kenpachi — Main DPS");
    assert_eq!(lines.len(), 8);
    assert_eq!(team.serialize(), summary);

    separator("STEP 5: Copy the summary");

    let mut clipboard = MemoryClipboard::default();
    let mut feedback = CopyFeedback::default();
    let now = Instant::now();
    assert!(feedback.copy(&mut clipboard, &summary, now));
    assert_eq!(clipboard.contents.as_deref(), Some(summary.as_str()));
    assert!(feedback.is_copied(now + Duration::from_millis(1000)));
    assert!(!feedback.is_copied(now + Duration::from_millis(1400)));

    println!("  Flow complete");
}

#[test]
fn test_reset_team_serializes_six_empty_flex_slots() {
    let mut team = Team::new();
    team.update_team_name("Scratch");
    team.update_slot(4, SlotPatch::role(SlotRole::Economy)).unwrap();
    team.reset();

    let mut expected = String::from("UTD Team: My UTD Team\n\n");
    let slots: Vec<String> = (1..=6).map(|i| format!("{}. (empty) — Flex", i)).collect();
    expected.push_str(&slots.join("\n"));
    assert_eq!(team.serialize(), expected);
}

#[test]
fn test_catalog_browser_flow() {
    let catalog = default_catalog();
    let mut browser = CatalogFilter::new();

    browser.query = "MYTHIC".to_string();
    let shown = browser.apply(&catalog);
    assert!(!shown.is_empty());
    assert!(shown.iter().all(|e| e.rarity == Rarity::Mythic));

    browser.query = "  no such unit  ".to_string();
    assert!(browser.apply(&catalog).is_empty());
    assert_eq!(browser.summary(&catalog), format!("Showing 0 of {} units", catalog.len()));

    browser.reset();
    assert_eq!(browser.apply(&catalog).len(), catalog.len());
}

#[test]
fn test_clamped_inputs() {
    let low = estimate(&DpsInput {
        crit_chance_percent: -10.0,
        ..DpsInput::default()
    });
    let zero = estimate(&DpsInput {
        crit_chance_percent: 0.0,
        ..DpsInput::default()
    });
    assert_eq!(low, zero);

    let high = estimate(&DpsInput {
        crit_chance_percent: 150.0,
        ..DpsInput::default()
    });
    let full = estimate(&DpsInput {
        crit_chance_percent: 100.0,
        ..DpsInput::default()
    });
    assert_eq!(high, full);

    let weak = estimate(&DpsInput {
        crit_chance_percent: 100.0,
        crit_multiplier: 0.5,
        ..DpsInput::default()
    });
    assert!((weak.expected_hit_damage - 100.0).abs() < f64::EPSILON);

    let none = project(&UpgradeInput {
        levels: 0.0,
        ..UpgradeInput::default()
    });
    assert!(none.per_level_costs.is_empty());
    assert_eq!(none.total, 0.0);
    assert_eq!(none.average, 0.0);
}

#[test]
fn test_codes_board_loaded() {
    let board = default_codes();
    assert!(!board.active.is_empty());
    assert!(board.active.iter().all(|c| !board.is_expired(&c.code)));
}

//! DPS estimator - expected damage per hit and sustained DPS
//!
//! Expected-value model with an independent crit roll per hit:
//! - `chance = clamp(crit_chance_percent / 100, 0, 1)`
//! - `multiplier = max(crit_multiplier, 1)`
//! - `expected_hit = base_damage × (1 + chance × (multiplier - 1))`
//! - `dps = expected_hit × attacks_per_second`
//!
//! Burst timing, cooldowns and enemy resistances are not modelled.

mod simulation;

pub use simulation::{sample_hits, HitSample};

use crate::numeric::non_negative;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Crit chance bounds, in percent
pub const MIN_CRIT_CHANCE_PERCENT: f64 = 0.0;
pub const MAX_CRIT_CHANCE_PERCENT: f64 = 100.0;

/// Crits can never lower damage
pub const MIN_CRIT_MULTIPLIER: f64 = 1.0;

/// Raw DPS form input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpsInput {
    /// Damage per attack before crits
    pub base_damage: f64,
    pub attacks_per_second: f64,
    /// 0-100; out-of-range values are clamped
    pub crit_chance_percent: f64,
    /// 2.0 means crits deal double damage
    pub crit_multiplier: f64,
}

impl Default for DpsInput {
    fn default() -> Self {
        DpsInput {
            base_damage: 100.0,
            attacks_per_second: 1.0,
            crit_chance_percent: 0.0,
            crit_multiplier: 2.0,
        }
    }
}

impl DpsInput {
    /// Crit chance as a probability in [0, 1]
    pub fn effective_crit_chance(&self) -> f64 {
        let chance = self.crit_chance_percent / 100.0;
        if chance.is_nan() {
            return 0.0;
        }
        chance.clamp(
            MIN_CRIT_CHANCE_PERCENT / 100.0,
            MAX_CRIT_CHANCE_PERCENT / 100.0,
        )
    }

    pub fn effective_crit_multiplier(&self) -> f64 {
        if self.crit_multiplier.is_nan() {
            return MIN_CRIT_MULTIPLIER;
        }
        self.crit_multiplier.max(MIN_CRIT_MULTIPLIER)
    }
}

/// Derived DPS output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpsEstimate {
    pub expected_hit_damage: f64,
    pub dps: f64,
    /// Probability in [0, 1] actually used
    pub effective_crit_chance: f64,
}

/// Estimate expected hit damage and sustained DPS
pub fn estimate(input: &DpsInput) -> DpsEstimate {
    let chance = input.effective_crit_chance();
    let multiplier = input.effective_crit_multiplier();
    let base_damage = non_negative(input.base_damage);
    let attacks_per_second = non_negative(input.attacks_per_second);

    let expected_hit_damage = base_damage * (1.0 + chance * (multiplier - 1.0));
    let dps = expected_hit_damage * attacks_per_second;

    debug!(expected_hit_damage, dps, chance, "dps estimate recomputed");

    DpsEstimate {
        expected_hit_damage,
        dps,
        effective_crit_chance: chance,
    }
}

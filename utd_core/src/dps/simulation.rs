//! Sampled hits for comparing the expected-value model against actual rolls

use super::DpsInput;
use crate::numeric::non_negative;
use rand::Rng;

/// Outcome of rolling a fixed number of hits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitSample {
    pub hits: u32,
    pub crits: u32,
    pub total_damage: f64,
}

impl HitSample {
    /// Observed crit rate as a percentage
    pub fn crit_rate(&self) -> f64 {
        if self.hits > 0 {
            self.crits as f64 / self.hits as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Average damage per hit
    pub fn avg_damage(&self) -> f64 {
        if self.hits > 0 {
            self.total_damage / self.hits as f64
        } else {
            0.0
        }
    }

    /// Observed DPS at the input's attack rate
    pub fn dps(&self, attacks_per_second: f64) -> f64 {
        self.avg_damage() * non_negative(attacks_per_second)
    }
}

/// Roll `hits` attacks, each critting independently
pub fn sample_hits(input: &DpsInput, hits: u32, rng: &mut impl Rng) -> HitSample {
    let chance = input.effective_crit_chance();
    let multiplier = input.effective_crit_multiplier();
    let base_damage = non_negative(input.base_damage);

    let mut sample = HitSample {
        hits,
        crits: 0,
        total_damage: 0.0,
    };

    for _ in 0..hits {
        if rng.gen_bool(chance) {
            sample.crits += 1;
            sample.total_damage += base_damage * multiplier;
        } else {
            sample.total_damage += base_damage;
        }
    }

    sample
}

//! Upgrade cost projector
//!
//! For level index `i` in `[0, levels)`:
//! - Linear: `cost[i] = base_cost + i × linear_step`
//! - Exponential: `cost[i] = base_cost × growth_rate^i`
//!
//! The whole sequence is always produced so `total` and `average` are exact,
//! even though only a short prefix is usually rendered. Costs and the total
//! saturate at `f64::MAX` instead of overflowing to infinity.

mod format;

pub use format::format_amount;

use crate::config::UpgradeLimits;
use crate::numeric::clamp_finite;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Growth rate floor; costs never decrease level over level
pub const MIN_GROWTH_RATE: f64 = 1.0;

/// Cost growth model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrowthModel {
    /// base + step per level
    #[default]
    Linear,
    /// base × rate per level
    Exponential,
}

impl GrowthModel {
    pub fn toggled(self) -> Self {
        match self {
            GrowthModel::Linear => GrowthModel::Exponential,
            GrowthModel::Exponential => GrowthModel::Linear,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthModel::Linear => "Linear (base + step)",
            GrowthModel::Exponential => "Exponential (base × rate)",
        }
    }
}

impl fmt::Display for GrowthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw upgrade form input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeInput {
    pub model: GrowthModel,
    pub base_cost: f64,
    /// Floored to a whole number before use
    pub levels: f64,
    /// Only read by the linear model
    pub linear_step: f64,
    /// Only read by the exponential model
    pub growth_rate: f64,
}

impl Default for UpgradeInput {
    fn default() -> Self {
        UpgradeInput {
            model: GrowthModel::Linear,
            base_cost: 100.0,
            levels: 10.0,
            linear_step: 25.0,
            growth_rate: 1.15,
        }
    }
}

/// Derived upgrade cost output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeProjection {
    /// One entry per level, level 1 first
    pub per_level_costs: Vec<f64>,
    pub total: f64,
    /// 0 when there are no levels
    pub average: f64,
    /// Set when any amount hit `f64::MAX`
    pub saturated: bool,
}

impl UpgradeProjection {
    /// Leading costs for display
    pub fn preview(&self, count: usize) -> &[f64] {
        &self.per_level_costs[..count.min(self.per_level_costs.len())]
    }

    pub fn levels(&self) -> usize {
        self.per_level_costs.len()
    }
}

/// Project costs with the default limits
pub fn project(input: &UpgradeInput) -> UpgradeProjection {
    project_with(input, &UpgradeLimits::default())
}

/// Project costs under explicit limits
pub fn project_with(input: &UpgradeInput, limits: &UpgradeLimits) -> UpgradeProjection {
    let levels = clamp_finite(input.levels.floor(), 0.0, limits.max_levels as f64) as usize;
    let base = clamp_finite(input.base_cost, 0.0, limits.max_cost);
    let step = clamp_finite(input.linear_step, 0.0, limits.max_cost);
    let rate = clamp_finite(
        input.growth_rate,
        MIN_GROWTH_RATE,
        limits.max_growth_rate.max(MIN_GROWTH_RATE),
    );

    let mut saturated = false;
    let mut saturate = |value: f64| {
        if value.is_finite() {
            value
        } else {
            saturated = true;
            f64::MAX
        }
    };

    let mut per_level_costs = Vec::with_capacity(levels);
    // rate^i built by repeated multiplication so the sequence stays monotonic
    let mut factor = 1.0;
    for i in 0..levels {
        let cost = match input.model {
            GrowthModel::Linear => base + i as f64 * step,
            GrowthModel::Exponential => {
                // 0 × inf would be NaN once the factor overflows
                let cost = if base == 0.0 { 0.0 } else { base * factor };
                factor *= rate;
                cost
            }
        };
        per_level_costs.push(saturate(cost));
    }

    let total = saturate(per_level_costs.iter().sum::<f64>());
    let average = if levels > 0 { total / levels as f64 } else { 0.0 };

    if saturated {
        warn!(levels, rate, "upgrade projection saturated at f64::MAX");
    }
    debug!(model = ?input.model, levels, total, average, "upgrade projection recomputed");

    UpgradeProjection {
        per_level_costs,
        total,
        average,
        saturated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn linear(base: f64, levels: f64, step: f64) -> UpgradeInput {
        UpgradeInput {
            model: GrowthModel::Linear,
            base_cost: base,
            levels,
            linear_step: step,
            growth_rate: 1.0,
        }
    }

    fn exponential(base: f64, levels: f64, rate: f64) -> UpgradeInput {
        UpgradeInput {
            model: GrowthModel::Exponential,
            base_cost: base,
            levels,
            linear_step: 0.0,
            growth_rate: rate,
        }
    }

    #[test]
    fn test_linear_projection() {
        let result = project(&linear(100.0, 3.0, 25.0));
        assert_eq!(result.per_level_costs, vec![100.0, 125.0, 150.0]);
        assert!((result.total - 375.0).abs() < f64::EPSILON);
        assert!((result.average - 125.0).abs() < f64::EPSILON);
        assert!(!result.saturated);
    }

    #[test]
    fn test_exponential_projection() {
        let result = project(&exponential(100.0, 3.0, 2.0));
        assert_eq!(result.per_level_costs, vec![100.0, 200.0, 400.0]);
        assert!((result.total - 700.0).abs() < f64::EPSILON);
        assert!((result.average - 233.333).abs() < 0.01);
    }

    #[test]
    fn test_zero_levels() {
        let result = project(&linear(100.0, 0.0, 25.0));
        assert!(result.per_level_costs.is_empty());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.average, 0.0);
    }

    #[test]
    fn test_levels_floored_and_capped() {
        assert_eq!(project(&linear(1.0, 3.9, 0.0)).levels(), 3);
        assert_eq!(project(&linear(1.0, 5000.0, 0.0)).levels(), 999);
        assert_eq!(project(&linear(1.0, -4.0, 0.0)).levels(), 0);
        assert_eq!(project(&linear(1.0, f64::NAN, 0.0)).levels(), 0);
    }

    #[test]
    fn test_negative_inputs_clamped() {
        let result = project(&linear(-100.0, 3.0, -10.0));
        assert_eq!(result.per_level_costs, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_growth_rate_floored_at_one() {
        let result = project(&exponential(50.0, 4.0, 0.5));
        assert_eq!(result.per_level_costs, vec![50.0, 50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_cost_ceiling() {
        let result = project(&linear(5e12, 2.0, 0.0));
        assert_eq!(result.per_level_costs, vec![1e9, 1e9]);
    }

    #[test]
    fn test_exponential_saturates() {
        let result = project(&exponential(1e9, 999.0, 100.0));
        assert!(result.saturated);
        assert_eq!(result.levels(), 999);
        assert!(result.total.is_finite());
        assert!(result.average.is_finite());
        assert_eq!(*result.per_level_costs.last().unwrap(), f64::MAX);
    }

    #[test]
    fn test_zero_base_does_not_saturate() {
        let result = project(&exponential(0.0, 999.0, 100.0));
        assert!(!result.saturated);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_preview_prefix() {
        let result = project(&UpgradeInput::default());
        assert_eq!(result.levels(), 10);
        assert_eq!(result.preview(3), &[100.0, 125.0, 150.0]);
        assert_eq!(result.preview(50).len(), 10);
    }

    #[test]
    fn test_custom_limits() {
        let limits = UpgradeLimits {
            max_levels: 5,
            ..UpgradeLimits::default()
        };
        let result = project_with(&linear(10.0, 100.0, 1.0), &limits);
        assert_eq!(result.levels(), 5);
    }

    proptest! {
        #[test]
        fn prop_exponential_non_decreasing(
            base in 0.0f64..1e6,
            levels in 0.0f64..60.0,
            rate in -5.0f64..5.0,
        ) {
            let result = project(&exponential(base, levels, rate));
            for pair in result.per_level_costs.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
        }

        #[test]
        fn prop_average_is_total_over_levels(
            base in 0.0f64..1e4,
            levels in 1.0f64..200.0,
            step in 0.0f64..1e3,
        ) {
            let result = project(&linear(base, levels, step));
            let n = result.levels() as f64;
            prop_assert!((result.average * n - result.total).abs() <= result.total * 1e-9 + 1e-9);
        }
    }
}

//! One-dimensional parameter sweeps and break-even search
//!
//! Holds one engine and re-evaluates a policy while varying a single input
//! (term, premium, or discount rate). Samples are independent, so they are
//! evaluated in parallel and collected in input order.

use crate::policy::{PersonProfile, PolicyConfig};
use crate::projection::ProjectionEngine;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of samples in the default premium and discount-rate ranges
pub const DEFAULT_SAMPLES: usize = 25;

/// Parameter varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepAxis {
    /// Policy term in years
    Term,
    /// Annual premium
    Premium,
    /// Discount rate in percent
    DiscountRate,
}

impl SweepAxis {
    pub const ALL: [SweepAxis; 3] = [SweepAxis::Term, SweepAxis::Premium, SweepAxis::DiscountRate];

    /// Axis label for charts and exports
    pub fn label(&self) -> &'static str {
        match self {
            SweepAxis::Term => "Years",
            SweepAxis::Premium => "Annual Premium",
            SweepAxis::DiscountRate => "Discount Rate (%)",
        }
    }

    /// Recommended sample points for this axis
    ///
    /// Term: every year from 5 to 80. Premium: 25 points from 0.3x to 2.5x
    /// the nominal premium. Discount rate: 25 points from 1% to 20%.
    pub fn default_range(&self, policy: &PolicyConfig) -> Vec<f64> {
        match self {
            SweepAxis::Term => (5..=80).map(f64::from).collect(),
            SweepAxis::Premium => linspace(
                0.3 * policy.annual_premium,
                2.5 * policy.annual_premium,
                DEFAULT_SAMPLES,
            ),
            SweepAxis::DiscountRate => linspace(1.0, 20.0, DEFAULT_SAMPLES),
        }
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Sample whose NPV is closest to zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    pub x: f64,
    pub npv: f64,
}

/// Locate the sampled point with the smallest absolute NPV
///
/// Nearest-sample search, not interpolation: the returned `x` is always one
/// of `x_values`. Ties resolve to the first sample. Returns None for empty input.
pub fn find_break_even(x_values: &[f64], npv_values: &[f64]) -> Option<BreakEven> {
    x_values
        .iter()
        .zip(npv_values)
        .fold(None, |best: Option<BreakEven>, (&x, &npv)| match best {
            Some(b) if b.npv.abs() <= npv.abs() => Some(b),
            _ => Some(BreakEven { x, npv }),
        })
}

/// NPV series over one swept parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub axis: SweepAxis,

    /// Swept parameter values, in input order
    pub x_values: Vec<f64>,

    /// NPV at each swept value (index-aligned with `x_values`)
    pub npv_values: Vec<f64>,

    /// Sample nearest to zero NPV
    pub break_even: Option<BreakEven>,
}

impl SweepResult {
    /// (x, npv) pairs in sweep order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.npv_values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

/// Sweep runner with a shared projection engine
#[derive(Debug, Clone, Default)]
pub struct SweepAnalyzer {
    engine: ProjectionEngine,
}

impl SweepAnalyzer {
    pub fn new(engine: ProjectionEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// NPV of `policy` with `x` substituted for the axis parameter
    pub fn npv_at(
        &self,
        profile: &PersonProfile,
        policy: &PolicyConfig,
        discount_rate: f64,
        axis: SweepAxis,
        x: f64,
    ) -> f64 {
        let (policy, rate) = match axis {
            SweepAxis::Term => (policy.with_term(x.round().max(0.0) as u32), discount_rate),
            SweepAxis::Premium => (policy.with_premium(x), discount_rate),
            SweepAxis::DiscountRate => (*policy, x),
        };
        self.engine.project(profile, &policy, rate).npv
    }

    /// Evaluate NPV at every value in `range` and locate the break-even sample
    pub fn sweep(
        &self,
        profile: &PersonProfile,
        policy: &PolicyConfig,
        discount_rate: f64,
        axis: SweepAxis,
        range: &[f64],
    ) -> SweepResult {
        let npv_values: Vec<f64> = range
            .par_iter()
            .map(|&x| self.npv_at(profile, policy, discount_rate, axis, x))
            .collect();

        let break_even = find_break_even(range, &npv_values);
        debug!("{:?} sweep over {} samples, break-even {:?}", axis, range.len(), break_even);

        SweepResult {
            axis,
            x_values: range.to_vec(),
            npv_values,
            break_even,
        }
    }

    /// Sweep over the axis's default range for this policy
    pub fn sweep_default(
        &self,
        profile: &PersonProfile,
        policy: &PolicyConfig,
        discount_rate: f64,
        axis: SweepAxis,
    ) -> SweepResult {
        let range = axis.default_range(policy);
        self.sweep(profile, policy, discount_rate, axis, &range)
    }

    /// Sweep two policies over the same axis, each over its own default range
    pub fn sweep_pair(
        &self,
        profile: &PersonProfile,
        policy_a: &PolicyConfig,
        policy_b: &PolicyConfig,
        discount_rate: f64,
        axis: SweepAxis,
    ) -> (SweepResult, SweepResult) {
        rayon::join(
            || self.sweep_default(profile, policy_a, discount_rate, axis),
            || self.sweep_default(profile, policy_b, discount_rate, axis),
        )
    }
}

/// Sweep with the default teaching assumptions
pub fn sweep(
    profile: &PersonProfile,
    policy: &PolicyConfig,
    discount_rate: f64,
    axis: SweepAxis,
    range: &[f64],
) -> SweepResult {
    SweepAnalyzer::default().sweep(profile, policy, discount_rate, axis, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Gender, HealthCondition, Rider, Riders};
    use approx::assert_relative_eq;

    fn male_profile() -> PersonProfile {
        PersonProfile::new(30, Gender::Male, false, HealthCondition::Good, 2)
    }

    fn policy_a() -> PolicyConfig {
        PolicyConfig::term(30, 5_000_000.0, 20_000.0)
    }

    #[test]
    fn test_linspace_inclusive() {
        let values = linspace(1.0, 20.0, 25);
        assert_eq!(values.len(), 25);
        assert_eq!(values[0], 1.0);
        assert_eq!(values[24], 20.0);
        assert_relative_eq!(values[1] - values[0], 19.0 / 24.0, max_relative = 1e-12);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_default_ranges() {
        let policy = policy_a();
        let terms = SweepAxis::Term.default_range(&policy);
        assert_eq!(terms.len(), 76);
        assert_eq!(terms[0], 5.0);
        assert_eq!(terms[75], 80.0);

        let premiums = SweepAxis::Premium.default_range(&policy);
        assert_eq!(premiums.len(), 25);
        assert_relative_eq!(premiums[0], 6_000.0);
        assert_relative_eq!(premiums[24], 50_000.0);
    }

    #[test]
    fn test_break_even_nearest_sample() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [-30.0, -4.0, 5.0, 40.0];
        let be = find_break_even(&x, &y).unwrap();
        assert_eq!(be, BreakEven { x: 2.0, npv: -4.0 });

        // First sample wins ties
        let be = find_break_even(&[1.0, 2.0], &[3.0, -3.0]).unwrap();
        assert_eq!(be.x, 1.0);

        assert!(find_break_even(&[], &[]).is_none());
    }

    #[test]
    fn test_term_sweep_break_even_is_sampled() {
        let analyzer = SweepAnalyzer::default();
        let result = analyzer.sweep_default(&male_profile(), &policy_a(), 8.0, SweepAxis::Term);

        assert_eq!(result.x_values.len(), result.npv_values.len());
        let be = result.break_even.unwrap();
        assert!(result.x_values.contains(&be.x));
        assert_eq!(be.x.fract(), 0.0);
        assert!(result.npv_values.iter().all(|v| v.abs() >= be.npv.abs()));
    }

    #[test]
    fn test_sweep_matches_single_evaluations() {
        let analyzer = SweepAnalyzer::default();
        let profile = male_profile();
        let policy = policy_a();
        let range = [10.0, 20.0, 30.0];

        let result = analyzer.sweep(&profile, &policy, 8.0, SweepAxis::Term, &range);
        for (x, npv) in result.points() {
            let expected = analyzer.engine().project(&profile, &policy.with_term(x as u32), 8.0).npv;
            assert_eq!(npv, expected);
        }
        // Term 30 is the unswept policy
        assert_relative_eq!(result.npv_values[2], 17_578.399_491_775_08, max_relative = 1e-6);
    }

    #[test]
    fn test_premium_sweep_is_decreasing() {
        let analyzer = SweepAnalyzer::default();
        let result = analyzer.sweep_default(&male_profile(), &policy_a(), 8.0, SweepAxis::Premium);
        for pair in result.npv_values.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_rate_sweep_crosses_zero() {
        let analyzer = SweepAnalyzer::default();
        let result = analyzer.sweep_default(&male_profile(), &policy_a(), 8.0, SweepAxis::DiscountRate);
        assert!(result.npv_values[0] > 0.0);
        assert!(*result.npv_values.last().unwrap() < 0.0);
        let be = result.break_even.unwrap();
        assert!(be.x > 1.0 && be.x < 20.0);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let analyzer = SweepAnalyzer::default();
        let profile = male_profile();
        let policy = policy_a().with_riders(Riders::NONE.with(Rider::CriticalIllness));

        for axis in SweepAxis::ALL {
            let first = analyzer.sweep_default(&profile, &policy, 8.0, axis);
            let second = analyzer.sweep_default(&profile, &policy, 8.0, axis);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_sweep_pair_uses_each_policy_range() {
        let analyzer = SweepAnalyzer::default();
        let policy_b = PolicyConfig::term(40, 7_500_000.0, 35_000.0);
        let (a, b) = analyzer.sweep_pair(&male_profile(), &policy_a(), &policy_b, 8.0, SweepAxis::Premium);

        assert_relative_eq!(a.x_values[0], 6_000.0);
        assert_relative_eq!(b.x_values[0], 10_500.0);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_empty_range() {
        let result = sweep(&male_profile(), &policy_a(), 8.0, SweepAxis::Term, &[]);
        assert!(result.is_empty());
        assert!(result.break_even.is_none());
    }
}

//! Core projection engine for yearly expected-value projections

use crate::assumptions::Assumptions;
use crate::policy::{PersonProfile, PolicyConfig, Rider};
use super::cashflows::{NpvResult, ProjectionResult, YearRow};
use super::state::YearState;
use log::debug;

/// Evaluate a policy with the default teaching assumptions
pub fn evaluate(profile: &PersonProfile, policy: &PolicyConfig, discount_rate: f64) -> NpvResult {
    ProjectionEngine::default().project(profile, policy, discount_rate)
}

/// Yearly projection engine
///
/// Stateless apart from its assumptions: every call is a pure function of its
/// arguments, so one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Net present value of one policy
    ///
    /// # Arguments
    /// * `profile` - Insured person
    /// * `policy` - Policy being evaluated
    /// * `discount_rate` - Annual discount rate in percent (8.0 = 8%)
    pub fn project(&self, profile: &PersonProfile, policy: &PolicyConfig, discount_rate: f64) -> NpvResult {
        let state = self.run(profile, policy, discount_rate, None);
        NpvResult::new(state.cumulative_pv_benefit, state.cumulative_pv_premium)
    }

    /// Same as [`project`](Self::project), keeping one row per simulated year
    pub fn project_detailed(
        &self,
        profile: &PersonProfile,
        policy: &PolicyConfig,
        discount_rate: f64,
    ) -> ProjectionResult {
        let mut rows = Vec::with_capacity(self.assumptions.product.effective_term(policy) as usize);
        let state = self.run(profile, policy, discount_rate, Some(&mut rows));
        ProjectionResult {
            rows,
            npv: NpvResult::new(state.cumulative_pv_benefit, state.cumulative_pv_premium),
        }
    }

    /// Run the yearly loop, optionally recording rows
    fn run(
        &self,
        profile: &PersonProfile,
        policy: &PolicyConfig,
        discount_rate: f64,
        mut rows: Option<&mut Vec<YearRow>>,
    ) -> YearState {
        let r = discount_rate / 100.0;
        let effective_term = self.assumptions.product.effective_term(policy);
        let mut state = YearState::initial();

        for _ in 0..effective_term {
            state.advance_year();
            let row = self.calculate_year(profile, policy, r, &mut state);
            if let Some(rows) = rows.as_deref_mut() {
                rows.push(row);
            }
        }

        debug!(
            "projected {:?} over {} years at {}%: pv_benefit={:.2} pv_premium={:.2}",
            policy.policy_type,
            effective_term,
            discount_rate,
            state.cumulative_pv_benefit,
            state.cumulative_pv_premium,
        );

        state
    }

    /// Calculate expected cashflows for a single year and advance survival
    fn calculate_year(
        &self,
        profile: &PersonProfile,
        policy: &PolicyConfig,
        r: f64,
        state: &mut YearState,
    ) -> YearRow {
        let riders = &self.assumptions.riders;
        let t = state.elapsed_year;
        let survival = state.survival_probability;
        let attained_age = profile.attained_age(t);

        let mut row = YearRow::new(t);
        row.attained_age = attained_age;
        row.survival_probability = survival;

        // Mortality
        row.death_probability = self.assumptions.mortality.for_profile(profile, t);

        // Death benefit; the accidental multiplier applies to every death
        let mut payout = policy.cover;
        if policy.has_rider(Rider::Accidental) {
            payout *= riders.accidental_multiplier;
        }
        row.death_benefit = survival * row.death_probability * payout;

        if policy.has_rider(Rider::CriticalIllness) {
            row.critical_illness_benefit = survival
                * riders.critical_illness_incidence
                * riders.critical_illness_payout
                * policy.cover;
        }

        if policy.has_rider(Rider::Disability) && riders.disability_available(attained_age) {
            row.disability_benefit =
                survival * riders.disability_incidence * riders.disability_payout * policy.cover;
        }

        row.expected_benefit = row.death_benefit + row.critical_illness_benefit + row.disability_benefit;

        // Discounting; underflow to zero at extreme rates is accepted
        let accumulation = (1.0 + r).powi(t as i32);
        row.discount_factor = 1.0 / accumulation;
        row.pv_benefit = row.expected_benefit / accumulation;

        // Premium, waived after vesting while young enough
        row.premium_waived = policy.has_rider(Rider::WaiverOfPremium)
            && riders.premium_waived(attained_age, t);
        let effective_premium = if row.premium_waived { 0.0 } else { policy.annual_premium };

        if self.assumptions.product.in_premium_period(policy, t) {
            row.premium_due = effective_premium;
            row.pv_premium = effective_premium / accumulation;
        }

        state.cumulative_pv_benefit += row.pv_benefit;
        state.cumulative_pv_premium += row.pv_premium;
        state.apply_mortality(row.death_probability);

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Gender, HealthCondition, PolicyType, Riders};
    use approx::assert_relative_eq;

    fn classroom_profile() -> PersonProfile {
        PersonProfile::new(30, Gender::Female, false, HealthCondition::Good, 2)
    }

    fn classroom_policy() -> PolicyConfig {
        PolicyConfig::term(30, 5_000_000.0, 20_000.0)
    }

    fn all_riders() -> Riders {
        Rider::ALL.into_iter().collect()
    }

    #[test]
    fn test_reference_scenario() {
        let result = evaluate(&classroom_profile(), &classroom_policy(), 8.0);

        assert!(result.npv.is_finite());
        assert!(result.npv < 0.0);
        assert_relative_eq!(result.pv_benefit, 216_955.032_275_568_34, max_relative = 1e-6);
        assert_relative_eq!(result.pv_premium, 225_155.666_862_549_46, max_relative = 1e-6);
        assert_relative_eq!(result.npv, -8_200.634_586_981_12, max_relative = 1e-6);
    }

    #[test]
    fn test_male_reference_scenario() {
        let profile = PersonProfile {
            gender: Gender::Male,
            ..classroom_profile()
        };
        let result = evaluate(&profile, &classroom_policy(), 8.0);
        assert_relative_eq!(result.npv, 17_578.399_491_775_08, max_relative = 1e-6);
    }

    #[test]
    fn test_riders_reference_scenario() {
        let profile = PersonProfile::new(30, Gender::Male, false, HealthCondition::Good, 2);
        let riders = Riders::NONE.with(Rider::Accidental).with(Rider::CriticalIllness);
        let policy = PolicyConfig::term(40, 7_500_000.0, 35_000.0).with_riders(riders);

        let result = evaluate(&profile, &policy, 8.0);
        assert_relative_eq!(result.pv_benefit, 3_173_327.846_954_458, max_relative = 1e-6);
        assert_relative_eq!(result.pv_premium, 417_361.466_681_121_1, max_relative = 1e-6);
    }

    #[test]
    fn test_whole_life_all_riders_reference_scenario() {
        let profile = PersonProfile::new(30, Gender::Male, true, HealthCondition::Poor, 2);
        let policy = PolicyConfig::whole_life(30, 5_000_000.0, 20_000.0).with_riders(all_riders());

        let result = evaluate(&profile, &policy, 8.0);
        assert_relative_eq!(result.pv_benefit, 3_158_235.237_311_225_4, max_relative = 1e-6);
        assert_relative_eq!(result.pv_premium, 171_157.498_749_136_92, max_relative = 1e-6);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let engine = ProjectionEngine::default();
        let profile = classroom_profile();
        let policy = classroom_policy().with_riders(all_riders());

        let first = engine.project(&profile, &policy, 6.5);
        let second = engine.project(&profile, &policy, 6.5);
        assert_eq!(first.npv.to_bits(), second.npv.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_extreme_discount_rate_leaves_premium_cost() {
        let engine = ProjectionEngine::default();
        let profile = classroom_profile();
        let policy = classroom_policy();

        let normal = engine.project(&profile, &policy, 8.0);
        let extreme = engine.project(&profile, &policy, 1000.0);

        assert!(extreme.npv.is_finite());
        assert!(extreme.npv < 0.0);
        // Benefits are discounted to almost nothing
        assert!(extreme.pv_benefit < normal.pv_benefit * 0.01);
        // Premiums form a geometric series in 1/11: about 20_000 / 10
        assert_relative_eq!(extreme.pv_premium, 2_000.0, max_relative = 1e-9);
        assert!((extreme.npv + extreme.pv_premium).abs() < extreme.pv_premium);
    }

    #[test]
    fn test_survival_non_increasing_and_bounded() {
        let engine = ProjectionEngine::default();
        let profile = PersonProfile::new(65, Gender::Male, true, HealthCondition::Poor, 0);
        let policy = PolicyConfig::whole_life(80, 1_000_000.0, 10_000.0);

        let result = engine.project_detailed(&profile, &policy, 5.0);
        assert_eq!(result.rows.len(), 100);

        let mut prior = 1.0;
        for row in &result.rows {
            assert!(row.survival_probability <= prior);
            assert!((0.0..=1.0).contains(&row.survival_probability));
            prior = row.survival_probability;
        }
        assert_relative_eq!(result.rows[0].survival_probability, 1.0);
    }

    #[test]
    fn test_detailed_matches_aggregate() {
        let engine = ProjectionEngine::default();
        let profile = classroom_profile();
        let policy = classroom_policy().with_riders(all_riders());

        let npv = engine.project(&profile, &policy, 8.0);
        let detailed = engine.project_detailed(&profile, &policy, 8.0);

        assert_eq!(detailed.npv, npv);
        let pv_benefit: f64 = detailed.rows.iter().map(|r| r.pv_benefit).sum();
        assert_relative_eq!(pv_benefit, npv.pv_benefit, max_relative = 1e-12);
    }

    #[test]
    fn test_waiver_kicks_in_after_vesting() {
        let engine = ProjectionEngine::default();
        let profile = classroom_profile();
        let policy = classroom_policy().with_riders(Riders::NONE.with(Rider::WaiverOfPremium));

        let result = engine.project_detailed(&profile, &policy, 8.0);
        // Age 30: years 11-24 are waived (attained age 41-54)
        let waived: Vec<u32> = result.rows.iter().filter(|r| r.premium_waived).map(|r| r.year).collect();
        assert_eq!(waived, (11..=24).collect::<Vec<_>>());
        assert_eq!(result.summary().waived_years, 14);
        assert_eq!(result.rows[10].premium_due, 0.0);
        assert_eq!(result.rows[24].premium_due, 20_000.0);
    }

    #[test]
    fn test_disability_stops_at_60() {
        let engine = ProjectionEngine::default();
        let profile = classroom_profile();
        let policy = classroom_policy().with_riders(Riders::NONE.with(Rider::Disability));

        let result = engine.project_detailed(&profile, &policy, 8.0);
        for row in &result.rows {
            if row.attained_age < 60 {
                assert!(row.disability_benefit > 0.0);
            } else {
                assert_eq!(row.disability_benefit, 0.0);
            }
        }
    }

    #[test]
    fn test_whole_life_premium_period() {
        let engine = ProjectionEngine::default();
        let profile = classroom_profile();
        let policy = PolicyConfig::new(PolicyType::WholeLife, 20, 1_000_000.0, 5_000.0);

        let result = engine.project_detailed(&profile, &policy, 8.0);
        let paying_years = result.rows.iter().filter(|r| r.premium_due > 0.0).count();
        assert_eq!(paying_years, 60);
        assert_eq!(result.summary().total_premium, 300_000.0);
    }

    #[test]
    fn test_zero_cover_zero_premium_is_zero() {
        let result = evaluate(&classroom_profile(), &PolicyConfig::term(10, 0.0, 0.0), 8.0);
        assert_eq!(result.npv, 0.0);
    }
}

//! Implied discount rate (internal rate of return) of a policy
//!
//! The discount rate at which expected benefits and premiums balance is the
//! policy's implied return. It refines the sampled discount-rate break-even.

use super::engine::ProjectionEngine;
use crate::policy::{PersonProfile, PolicyConfig};

const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: u32 = 200;

/// Find the discount rate (percent) at which NPV is zero, using bisection.
///
/// # Arguments
/// * `low`, `high` - Search bracket in percent (e.g. 1.0 and 20.0)
///
/// # Returns
/// * `Option<f64>` - The rate in percent, or None if NPV has the same sign at both ends
pub fn implied_discount_rate(
    engine: &ProjectionEngine,
    profile: &PersonProfile,
    policy: &PolicyConfig,
    low: f64,
    high: f64,
) -> Option<f64> {
    let npv_at = |rate: f64| engine.project(profile, policy, rate).npv;

    let (mut low, mut high) = if low <= high { (low, high) } else { (high, low) };
    let mut npv_low = npv_at(low);
    let npv_high = npv_at(high);

    if npv_low == 0.0 {
        return Some(low);
    }
    if npv_high == 0.0 {
        return Some(high);
    }
    // No root in this interval
    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at(mid);

        if npv_mid == 0.0 || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    Some((low + high) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Gender, HealthCondition};

    #[test]
    fn test_implied_rate_zeroes_npv() {
        let engine = ProjectionEngine::default();
        // Male, age 30: positive NPV at 8%, negative at 20%
        let profile = PersonProfile::new(30, Gender::Male, false, HealthCondition::Good, 2);
        let policy = PolicyConfig::term(30, 5_000_000.0, 20_000.0);

        let rate = implied_discount_rate(&engine, &profile, &policy, 1.0, 20.0)
            .expect("NPV changes sign between 1% and 20%");
        assert!(rate > 8.0 && rate < 20.0, "rate={}", rate);

        let npv = engine.project(&profile, &policy, rate).npv;
        assert!(npv.abs() < 1e-3, "npv at implied rate = {}", npv);
    }

    #[test]
    fn test_no_sign_change() {
        let engine = ProjectionEngine::default();
        let profile = PersonProfile::default();
        // Free cover: NPV positive at every rate
        let policy = PolicyConfig::term(30, 1_000_000.0, 0.0);
        assert!(implied_discount_rate(&engine, &profile, &policy, 1.0, 20.0).is_none());
    }
}

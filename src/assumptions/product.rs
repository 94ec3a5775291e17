//! Product horizons for term and whole life policies

use crate::policy::{PolicyConfig, PolicyType};
use serde::{Deserialize, Serialize};

/// Benefit and premium horizons by product type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductTerms {
    /// Simulated years for whole life (stands in for "until death")
    pub whole_life_horizon: u32,

    /// Whole life premiums stop after this policy year
    pub whole_life_premium_years: u32,
}

impl ProductTerms {
    pub fn teaching() -> Self {
        Self {
            whole_life_horizon: 100,
            whole_life_premium_years: 60,
        }
    }

    /// Number of years the benefit loop runs
    pub fn effective_term(&self, policy: &PolicyConfig) -> u32 {
        match policy.policy_type {
            PolicyType::Term => policy.term_years,
            PolicyType::WholeLife => self.whole_life_horizon,
        }
    }

    /// Whether a premium falls due in this policy year
    pub fn in_premium_period(&self, policy: &PolicyConfig, elapsed_year: u32) -> bool {
        match policy.policy_type {
            PolicyType::Term => elapsed_year <= policy.term_years,
            PolicyType::WholeLife => elapsed_year <= self.whole_life_premium_years,
        }
    }
}

impl Default for ProductTerms {
    fn default() -> Self {
        Self::teaching()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_term() {
        let terms = ProductTerms::teaching();
        assert_eq!(terms.effective_term(&PolicyConfig::term(25, 1.0, 1.0)), 25);
        // Whole life ignores the configured term
        assert_eq!(terms.effective_term(&PolicyConfig::whole_life(25, 1.0, 1.0)), 100);
    }

    #[test]
    fn test_whole_life_premiums_stop_at_year_60() {
        let terms = ProductTerms::teaching();
        let policy = PolicyConfig::whole_life(10, 1.0, 1.0);
        assert!(terms.in_premium_period(&policy, 60));
        assert!(!terms.in_premium_period(&policy, 61));
    }
}

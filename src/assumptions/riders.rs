//! Rider benefit and premium-waiver assumptions

use serde::{Deserialize, Serialize};

/// Flat-rate rider assumptions used in the annual benefit loop
///
/// Incidence rates are annual and independent of death probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderAssumptions {
    /// Death benefit multiplier with the accidental rider (applied to every death)
    pub accidental_multiplier: f64,

    /// Annual critical illness incidence
    pub critical_illness_incidence: f64,

    /// Critical illness lump sum as a fraction of cover
    pub critical_illness_payout: f64,

    /// Annual disability incidence
    pub disability_incidence: f64,

    /// Disability benefit as a fraction of cover
    pub disability_payout: f64,

    /// Disability benefit only while attained age is below this
    pub disability_age_limit: u32,

    /// Premium waiver only while attained age is below this
    pub waiver_age_limit: u32,

    /// Premium waiver only after this many policy years
    pub waiver_vesting_years: u32,
}

impl RiderAssumptions {
    pub fn teaching() -> Self {
        Self {
            accidental_multiplier: 1.5,
            critical_illness_incidence: 0.10,
            critical_illness_payout: 0.30,
            disability_incidence: 0.05,
            disability_payout: 0.20,
            disability_age_limit: 60,
            waiver_age_limit: 55,
            waiver_vesting_years: 10,
        }
    }

    /// Whether the disability benefit is still available at this attained age
    pub fn disability_available(&self, attained_age: u32) -> bool {
        attained_age < self.disability_age_limit
    }

    /// Whether a waiver-of-premium rider waives the premium in this year
    pub fn premium_waived(&self, attained_age: u32, elapsed_year: u32) -> bool {
        attained_age < self.waiver_age_limit && elapsed_year > self.waiver_vesting_years
    }
}

impl Default for RiderAssumptions {
    fn default() -> Self {
        Self::teaching()
    }
}

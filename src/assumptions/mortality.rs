//! Teaching mortality model
//!
//! Annual death probability is a linear hazard in attained age with
//! multiplicative risk loadings:
//! - Gender-specific base hazard
//! - Linear slope per year of attained age above a pivot age
//! - Smoker and health multipliers (composed multiplicatively)
//! - A ceiling keeping every per-year probability well below 1
//!
//! This is a classroom approximation, not a life table.

use crate::policy::{Gender, HealthCondition, PersonProfile};
use serde::{Deserialize, Serialize};

/// Linear-hazard mortality model with risk multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortalityModel {
    /// Base annual hazard for females
    pub female_base: f64,

    /// Base annual hazard for males
    pub male_base: f64,

    /// Hazard added per year of attained age above `slope_pivot_age`
    pub age_slope: f64,

    /// No slope applies at or below this age
    pub slope_pivot_age: u32,

    /// Multiplier for smokers
    pub smoker_multiplier: f64,

    /// Multiplier for average health
    pub average_health_multiplier: f64,

    /// Multiplier for poor health
    pub poor_health_multiplier: f64,

    /// Upper bound on the annual probability
    pub ceiling: f64,
}

impl MortalityModel {
    /// Default classroom parameters
    pub fn teaching() -> Self {
        Self {
            female_base: 0.0015,
            male_base: 0.0020,
            age_slope: 0.00025,
            slope_pivot_age: 30,
            smoker_multiplier: 1.5,
            average_health_multiplier: 1.3,
            poor_health_multiplier: 1.8,
            ceiling: 0.25,
        }
    }

    /// Hazard before risk loadings, at the attained age
    pub fn base_hazard(&self, attained_age: u32, gender: Gender) -> f64 {
        let base = match gender {
            Gender::Female => self.female_base,
            Gender::Male => self.male_base,
        };
        let excess_years = attained_age.saturating_sub(self.slope_pivot_age);
        base + self.age_slope * excess_years as f64
    }

    /// Combined smoker and health loading
    pub fn risk_multiplier(&self, smoker: bool, health: HealthCondition) -> f64 {
        let mut multiplier = 1.0;
        if smoker {
            multiplier *= self.smoker_multiplier;
        }
        match health {
            HealthCondition::Good => {}
            HealthCondition::Average => multiplier *= self.average_health_multiplier,
            HealthCondition::Poor => multiplier *= self.poor_health_multiplier,
        }
        multiplier
    }

    /// Probability of dying during `elapsed_year` for a life currently aged `age`
    ///
    /// # Arguments
    /// * `age` - Age at evaluation time
    /// * `elapsed_year` - Simulated policy year (1-indexed); attained age is `age + elapsed_year`
    /// * `gender`, `smoker`, `health` - Risk factors
    pub fn annual_death_probability(
        &self,
        age: u8,
        elapsed_year: u32,
        gender: Gender,
        smoker: bool,
        health: HealthCondition,
    ) -> f64 {
        let attained_age = age as u32 + elapsed_year;
        let p = self.base_hazard(attained_age, gender) * self.risk_multiplier(smoker, health);
        p.min(self.ceiling)
    }

    /// Convenience wrapper taking the risk factors from a profile
    pub fn for_profile(&self, profile: &PersonProfile, elapsed_year: u32) -> f64 {
        self.annual_death_probability(
            profile.age,
            elapsed_year,
            profile.gender,
            profile.smoker,
            profile.health,
        )
    }
}

impl Default for MortalityModel {
    fn default() -> Self {
        Self::teaching()
    }
}

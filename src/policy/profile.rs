//! Personal profile of the insured

use serde::{Deserialize, Serialize};

/// Gender of the insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Self-reported health condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCondition {
    Good,
    Average,
    Poor,
}

/// The person whose life is insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// Current age (18-65)
    pub age: u8,

    pub gender: Gender,

    pub smoker: bool,

    pub health: HealthCondition,

    /// Number of financial dependents
    pub dependents: u32,
}

impl PersonProfile {
    pub fn new(
        age: u8,
        gender: Gender,
        smoker: bool,
        health: HealthCondition,
        dependents: u32,
    ) -> Self {
        Self {
            age,
            gender,
            smoker,
            health,
            dependents,
        }
    }

    /// Age reached in the given elapsed policy year
    pub fn attained_age(&self, elapsed_year: u32) -> u32 {
        self.age as u32 + elapsed_year
    }
}

impl Default for PersonProfile {
    fn default() -> Self {
        Self::new(30, Gender::Male, false, HealthCondition::Good, 2)
    }
}

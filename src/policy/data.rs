//! Policy configuration: product type, term, cover, premium and riders

use serde::{Deserialize, Serialize};

/// Product type of the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyType {
    /// Cover for a fixed number of years, nothing paid on survival
    Term,
    /// Cover until the internal modeling horizon
    WholeLife,
}

impl PolicyType {
    /// Label used in tables and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Term => "Term Insurance",
            PolicyType::WholeLife => "Whole Life",
        }
    }
}

/// Optional add-on benefit attached to a base policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rider {
    /// Extra 50% on the death benefit
    Accidental,
    /// Lump sum on diagnosis of a major illness
    CriticalIllness,
    /// Income replacement before age 60
    Disability,
    /// Premiums waived after the vesting period, before age 55
    WaiverOfPremium,
}

impl Rider {
    pub const ALL: [Rider; 4] = [
        Rider::Accidental,
        Rider::CriticalIllness,
        Rider::Disability,
        Rider::WaiverOfPremium,
    ];

    fn bit(self) -> u8 {
        match self {
            Rider::Accidental => 1 << 0,
            Rider::CriticalIllness => 1 << 1,
            Rider::Disability => 1 << 2,
            Rider::WaiverOfPremium => 1 << 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rider::Accidental => "Accidental Rider",
            Rider::CriticalIllness => "Critical Illness Rider",
            Rider::Disability => "Disability Rider",
            Rider::WaiverOfPremium => "Waiver of Premium",
        }
    }
}

/// Set of riders attached to a policy
///
/// Serialized as a list of rider names, e.g. `["Accidental", "CriticalIllness"]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Rider>", into = "Vec<Rider>")]
pub struct Riders {
    bits: u8,
}

impl Riders {
    /// No riders
    pub const NONE: Riders = Riders { bits: 0 };

    pub fn contains(&self, rider: Rider) -> bool {
        self.bits & rider.bit() != 0
    }

    pub fn insert(&mut self, rider: Rider) {
        self.bits |= rider.bit();
    }

    pub fn remove(&mut self, rider: Rider) {
        self.bits &= !rider.bit();
    }

    /// Builder-style insert
    pub fn with(mut self, rider: Rider) -> Self {
        self.insert(rider);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Active riders in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Rider> + '_ {
        Rider::ALL.into_iter().filter(move |r| self.contains(*r))
    }
}

impl FromIterator<Rider> for Riders {
    fn from_iter<I: IntoIterator<Item = Rider>>(iter: I) -> Self {
        let mut riders = Riders::NONE;
        for rider in iter {
            riders.insert(rider);
        }
        riders
    }
}

impl From<Vec<Rider>> for Riders {
    fn from(riders: Vec<Rider>) -> Self {
        riders.into_iter().collect()
    }
}

impl From<Riders> for Vec<Rider> {
    fn from(riders: Riders) -> Self {
        riders.iter().collect()
    }
}

/// A single policy being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Term or whole life
    #[serde(rename = "type")]
    pub policy_type: PolicyType,

    /// Term in years (ignored for the benefit horizon of whole life)
    pub term_years: u32,

    /// Sum assured
    pub cover: f64,

    /// Nominal annual premium
    pub annual_premium: f64,

    /// Attached riders
    #[serde(default)]
    pub riders: Riders,
}

impl PolicyConfig {
    /// Create a policy with no riders
    pub fn new(policy_type: PolicyType, term_years: u32, cover: f64, annual_premium: f64) -> Self {
        Self {
            policy_type,
            term_years,
            cover,
            annual_premium,
            riders: Riders::NONE,
        }
    }

    /// Create a term policy with no riders
    pub fn term(term_years: u32, cover: f64, annual_premium: f64) -> Self {
        Self::new(PolicyType::Term, term_years, cover, annual_premium)
    }

    /// Create a whole life policy with no riders
    pub fn whole_life(term_years: u32, cover: f64, annual_premium: f64) -> Self {
        Self::new(PolicyType::WholeLife, term_years, cover, annual_premium)
    }

    /// Same policy with the given riders
    pub fn with_riders(mut self, riders: Riders) -> Self {
        self.riders = riders;
        self
    }

    pub fn has_rider(&self, rider: Rider) -> bool {
        self.riders.contains(rider)
    }

    /// Same policy with a different term
    pub fn with_term(mut self, term_years: u32) -> Self {
        self.term_years = term_years;
        self
    }

    /// Same policy with a different annual premium
    pub fn with_premium(mut self, annual_premium: f64) -> Self {
        self.annual_premium = annual_premium;
        self
    }
}

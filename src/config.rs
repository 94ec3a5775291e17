//! Lab input bundle: the insured profile, two policies, and the discount rate
//!
//! Any field missing from a JSON config falls back to the classroom defaults.
//! `validate` enforces the classroom input bounds.

use crate::error::{LabError, LabResult};
use crate::policy::{PersonProfile, PolicyConfig, Rider, Riders};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 65;
pub const MAX_DEPENDENTS: u32 = 6;
pub const MIN_TERM: u32 = 5;
pub const MAX_TERM: u32 = 80;
pub const MIN_DISCOUNT_RATE: f64 = 1.0;
pub const MAX_DISCOUNT_RATE: f64 = 20.0;

/// Inputs for one comparison session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default)]
    pub profile: PersonProfile,

    #[serde(default = "default_policy_a")]
    pub policy_a: PolicyConfig,

    #[serde(default = "default_policy_b")]
    pub policy_b: PolicyConfig,

    /// Opportunity cost of capital, percent
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

fn default_policy_a() -> PolicyConfig {
    PolicyConfig::term(30, 5_000_000.0, 20_000.0)
}

fn default_policy_b() -> PolicyConfig {
    let riders = Riders::NONE.with(Rider::Accidental).with(Rider::CriticalIllness);
    PolicyConfig::term(40, 7_500_000.0, 35_000.0).with_riders(riders)
}

fn default_discount_rate() -> f64 { 8.0 }

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            profile: PersonProfile::default(),
            policy_a: default_policy_a(),
            policy_b: default_policy_b(),
            discount_rate: default_discount_rate(),
        }
    }
}

impl LabConfig {
    /// Load and validate a config from a JSON file
    pub fn from_json_path(path: &Path) -> LabResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| LabError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: LabConfig = serde_json::from_str(&text).map_err(|source| LabError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Use the file if given, otherwise the classroom defaults
    pub fn load_or_default(path: Option<&Path>) -> LabResult<Self> {
        match path {
            Some(path) => Self::from_json_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Check every field against the input bounds
    pub fn validate(&self) -> LabResult<()> {
        check_range("profile.age", self.profile.age as f64, MIN_AGE as f64, MAX_AGE as f64)?;
        check_range(
            "profile.dependents",
            self.profile.dependents as f64,
            0.0,
            MAX_DEPENDENTS as f64,
        )?;
        check_range(
            "discount_rate",
            self.discount_rate,
            MIN_DISCOUNT_RATE,
            MAX_DISCOUNT_RATE,
        )?;
        validate_policy("policy_a", &self.policy_a)?;
        validate_policy("policy_b", &self.policy_b)?;
        Ok(())
    }
}

fn validate_policy(name: &str, policy: &PolicyConfig) -> LabResult<()> {
    check_range(
        &format!("{}.term_years", name),
        policy.term_years as f64,
        MIN_TERM as f64,
        MAX_TERM as f64,
    )?;
    check_range(&format!("{}.cover", name), policy.cover, 0.0, f64::MAX)?;
    check_range(&format!("{}.annual_premium", name), policy.annual_premium, 0.0, f64::MAX)?;
    Ok(())
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> LabResult<()> {
    // NaN fails both comparisons and is rejected
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(LabError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}

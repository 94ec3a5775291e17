//! Projection output structures

use serde::{Deserialize, Serialize};

/// Present values for one policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpvResult {
    /// Present value of expected benefits (death benefit plus riders)
    pub pv_benefit: f64,

    /// Present value of premiums paid
    pub pv_premium: f64,

    /// `pv_benefit - pv_premium`
    pub npv: f64,
}

impl NpvResult {
    pub fn new(pv_benefit: f64, pv_premium: f64) -> Self {
        Self {
            pv_benefit,
            pv_premium,
            npv: pv_benefit - pv_premium,
        }
    }
}

/// A single row of projection output for one simulated year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRow {
    // Timing
    pub year: u32,
    pub attained_age: u32,

    // Decrements
    /// Probability of being alive at the start of the year
    pub survival_probability: f64,
    pub death_probability: f64,

    // Cashflows (expected, undiscounted)
    pub death_benefit: f64,
    pub critical_illness_benefit: f64,
    pub disability_benefit: f64,
    pub expected_benefit: f64,
    pub premium_due: f64,
    pub premium_waived: bool,

    // Discounting
    pub discount_factor: f64,
    pub pv_benefit: f64,
    pub pv_premium: f64,
}

impl YearRow {
    pub fn new(year: u32) -> Self {
        Self {
            year,
            attained_age: 0,
            survival_probability: 1.0,
            death_probability: 0.0,
            death_benefit: 0.0,
            critical_illness_benefit: 0.0,
            disability_benefit: 0.0,
            expected_benefit: 0.0,
            premium_due: 0.0,
            premium_waived: false,
            discount_factor: 1.0,
            pv_benefit: 0.0,
            pv_premium: 0.0,
        }
    }
}

/// Complete projection result with yearly detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly rows
    pub rows: Vec<YearRow>,

    /// Aggregate present values
    pub npv: NpvResult,
}

impl ProjectionResult {
    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_expected_benefit: f64 = self.rows.iter().map(|r| r.expected_benefit).sum();
        let total_premium: f64 = self.rows.iter().map(|r| r.premium_due).sum();
        let waived_years = self.rows.iter().filter(|r| r.premium_waived).count() as u32;

        let final_survival = self
            .rows
            .last()
            .map(|r| r.survival_probability * (1.0 - r.death_probability))
            .unwrap_or(1.0);

        ProjectionSummary {
            total_years: self.rows.len() as u32,
            total_expected_benefit,
            total_premium,
            waived_years,
            final_survival,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    /// Undiscounted expected benefits
    pub total_expected_benefit: f64,
    /// Undiscounted premiums
    pub total_premium: f64,
    pub waived_years: u32,
    /// Probability of surviving the whole horizon
    pub final_survival: f64,
}

//! Year-by-year projection state for a single policy

/// State carried between simulated years
#[derive(Debug, Clone)]
pub struct YearState {
    /// Current simulated year (0 before the first year, then 1-indexed)
    pub elapsed_year: u32,

    /// Probability of being alive at the start of the next simulated year
    pub survival_probability: f64,

    /// Present value of expected benefits accumulated so far
    pub cumulative_pv_benefit: f64,

    /// Present value of premiums accumulated so far
    pub cumulative_pv_premium: f64,
}

impl YearState {
    /// State before year 1: alive with certainty, nothing accumulated
    pub fn initial() -> Self {
        Self {
            elapsed_year: 0,
            survival_probability: 1.0,
            cumulative_pv_benefit: 0.0,
            cumulative_pv_premium: 0.0,
        }
    }

    /// Move to the next simulated year
    pub fn advance_year(&mut self) {
        self.elapsed_year += 1;
    }

    /// Apply this year's mortality so survival reflects the start of next year
    pub fn apply_mortality(&mut self, death_probability: f64) {
        self.survival_probability *= 1.0 - death_probability;
    }
}

impl Default for YearState {
    fn default() -> Self {
        Self::initial()
    }
}

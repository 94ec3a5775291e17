//! Side-by-side comparison of two policies

use crate::config::LabConfig;
use crate::policy::{PolicyConfig, Rider};
use crate::projection::{NpvResult, ProjectionEngine};
use crate::utility;
use rayon::join;
use serde::Serialize;

/// Evaluation of one policy in the comparison
#[derive(Debug, Clone, Serialize)]
pub struct PolicyOutcome {
    pub label: String,
    pub policy: PolicyConfig,
    pub result: NpvResult,
    pub utility: f64,
}

impl PolicyOutcome {
    pub fn evaluate(label: &str, config: &LabConfig, policy: &PolicyConfig, engine: &ProjectionEngine) -> Self {
        let result = engine.project(&config.profile, policy, config.discount_rate);
        let utility = utility::score(policy.cover, config.profile.dependents, result.npv);
        Self {
            label: label.to_string(),
            policy: *policy,
            result,
            utility,
        }
    }
}

/// Both policies evaluated against the same profile and discount rate
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub discount_rate: f64,
    pub policy_a: PolicyOutcome,
    pub policy_b: PolicyOutcome,
}

impl ComparisonSummary {
    pub fn build(config: &LabConfig, engine: &ProjectionEngine) -> Self {
        let (policy_a, policy_b) = join(
            || PolicyOutcome::evaluate("Policy A", config, &config.policy_a, engine),
            || PolicyOutcome::evaluate("Policy B", config, &config.policy_b, engine),
        );
        Self {
            discount_rate: config.discount_rate,
            policy_a,
            policy_b,
        }
    }

    /// Decision table rows: (metric, policy A, policy B)
    pub fn rows(&self) -> Vec<(String, String, String)> {
        let a = &self.policy_a;
        let b = &self.policy_b;

        let mut rows = vec![
            ("NPV".to_string(), format_currency(a.result.npv), format_currency(b.result.npv)),
            ("Utility Score".to_string(), format_score(a.utility), format_score(b.utility)),
            ("Cover".to_string(), format_currency(a.policy.cover), format_currency(b.policy.cover)),
            (
                "Premium".to_string(),
                format_currency(a.policy.annual_premium),
                format_currency(b.policy.annual_premium),
            ),
        ];
        for rider in Rider::ALL {
            rows.push((
                rider.as_str().to_string(),
                a.policy.has_rider(rider).to_string(),
                b.policy.has_rider(rider).to_string(),
            ));
        }
        rows
    }

    /// Outcome with the higher utility score (A on ties)
    pub fn preferred_by_utility(&self) -> &PolicyOutcome {
        if self.policy_b.utility > self.policy_a.utility {
            &self.policy_b
        } else {
            &self.policy_a
        }
    }
}

/// Whole currency units with thousands separators, e.g. `-8,201`
pub fn format_currency(value: f64) -> String {
    group_thousands(value, 0)
}

/// One decimal place with thousands separators, e.g. `609,681.5`
pub fn format_score(value: f64) -> String {
    group_thousands(value, 1)
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 2);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // Avoid "-0" after rounding
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

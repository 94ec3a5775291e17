//! Protection-oriented utility score
//!
//! Larger cover and more dependents raise the score. A large NPV in either
//! direction dilutes it: extreme cost and extreme windfall both mean the
//! policy is a poor fit for steady protection.

/// Utility score of a policy, always >= 0 for non-negative cover
///
/// `cover * max(dependents, 1) / (|npv| + 1)`. A person with no dependents
/// still counts as protecting themself.
pub fn score(cover: f64, dependents: u32, npv: f64) -> f64 {
    cover * dependents.max(1) as f64 / (npv.abs() + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_npv_does_not_divide_by_zero() {
        assert_eq!(score(1_000_000.0, 0, 0.0), 1_000_000.0);
    }

    #[test]
    fn test_dependents_scale_score() {
        assert_relative_eq!(score(1_000.0, 3, 9.0), 300.0);
        assert_eq!(score(1_000.0, 0, 9.0), score(1_000.0, 1, 9.0));
    }

    #[test]
    fn test_npv_sign_is_ignored() {
        assert_eq!(score(5_000_000.0, 2, -8_200.0), score(5_000_000.0, 2, 8_200.0));
        assert!(score(5_000_000.0, 2, 100.0) > score(5_000_000.0, 2, 10_000.0));
    }
}

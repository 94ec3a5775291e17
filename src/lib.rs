//! Insurance Lab - Teaching engine for comparing insurance policies
//!
//! This library provides:
//! - A linear-hazard teaching mortality model with smoker/health loadings
//! - Yearly expected-value projection of benefits and premiums (NPV)
//! - Rider modeling (accidental, critical illness, disability, waiver of premium)
//! - A protection-oriented utility score
//! - One-parameter sweeps with nearest-sample break-even search
//! - Comparison tables, CSV export, and the student submission document

pub mod policy;
pub mod assumptions;
pub mod projection;
pub mod utility;
pub mod sweep;
pub mod comparison;
pub mod config;
pub mod export;
pub mod submission;
pub mod error;

// Re-export commonly used types
pub use policy::{PersonProfile, PolicyConfig, PolicyType, Rider, Riders, Gender, HealthCondition};
pub use assumptions::{Assumptions, MortalityModel};
pub use projection::{evaluate, NpvResult, ProjectionEngine, ProjectionResult};
pub use utility::score;
pub use sweep::{sweep, SweepAnalyzer, SweepAxis, SweepResult, BreakEven};
pub use comparison::ComparisonSummary;
pub use config::LabConfig;
pub use error::{LabError, LabResult};

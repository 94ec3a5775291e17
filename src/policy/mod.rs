//! Policy and insured-person data structures

mod data;
mod profile;

pub use data::{PolicyConfig, PolicyType, Rider, Riders};
pub use profile::{Gender, HealthCondition, PersonProfile};

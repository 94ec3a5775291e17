//! Projection engine for single-policy expected-value projections

mod state;
mod engine;
mod cashflows;
mod irr;

pub use state::YearState;
pub use engine::{evaluate, ProjectionEngine};
pub use cashflows::{NpvResult, ProjectionResult, ProjectionSummary, YearRow};
pub use irr::implied_discount_rate;

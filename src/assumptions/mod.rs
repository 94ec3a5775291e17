//! Teaching assumptions: mortality, rider incidence, and product horizons

mod mortality;
mod product;
mod riders;

pub use mortality::MortalityModel;
pub use product::ProductTerms;
pub use riders::RiderAssumptions;

use serde::{Deserialize, Serialize};

/// Container for all projection assumptions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Assumptions {
    pub mortality: MortalityModel,
    pub riders: RiderAssumptions,
    pub product: ProductTerms,
}

impl Assumptions {
    /// Classroom defaults
    pub fn default_teaching() -> Self {
        Self {
            mortality: MortalityModel::teaching(),
            riders: RiderAssumptions::teaching(),
            product: ProductTerms::teaching(),
        }
    }
}

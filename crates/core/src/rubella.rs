//! Rubella immunity.
//!
//! One dose of MMR is about 97% effective against rubella (range 94%-100%) and the
//! protection does not wane. A second dose helps those who did not respond to the first
//! but does not raise the likelihood of immunity for those who did, so any vaccination
//! gives the same probability. Unlike measles and mumps, doses count whenever they were
//! given, not only before age six.
//!
//! Serologic studies found 5% to 9% of those born before 1957 had no detectable antibody,
//! hence roughly 7% non-immunity for presumed and documented cases.
//! - https://www.cdc.gov/vaccines/pubs/pinkbook/rubella.html

use crate::constants::PRESUMPTIVE_IMMUNITY_CUTOFF_YEAR;
use crate::illness::Illness;
use crate::profile::{IllnessInput, IllnessProfile, ImmunityEstimate, VaccinationModel};
use crate::ImmunityResult;
use immunity_types::RawValue;

pub const CONFIRMED_IMMUNITY: f64 = 0.93;
pub const NATURAL_IMMUNITY: f64 = 0.10;
pub const VACCINATED_IMMUNITY: f64 = 0.97;

pub const PROFILE: IllnessProfile = IllnessProfile {
    illness: Illness::Rubella,
    confirmed_immunity: CONFIRMED_IMMUNITY,
    natural_immunity: NATURAL_IMMUNITY,
    presumption_cutoff_year: PRESUMPTIVE_IMMUNITY_CUTOFF_YEAR,
    vaccination: VaccinationModel::Flat {
        vaccinated: VACCINATED_IMMUNITY,
    },
};

/// Estimates the probability of being immune to rubella if exposed.
///
/// # Errors
///
/// Returns `ImmunityError::InvalidInput` on a malformed birth year or dose count.
pub fn immunity(
    birth_year: impl Into<RawValue>,
    doses: impl Into<RawValue>,
    had_rubella: bool,
    current_year: i32,
) -> ImmunityResult<ImmunityEstimate> {
    PROFILE.estimate(&IllnessInput::new(birth_year, doses, had_rubella), current_year)
}

//! Measles immunity.
//!
//! Efficacy per on-time dose (before age six) from
//! https://www.cdc.gov/vaccines/vpd/mmr/hcp/about.html: one dose is about 93% effective,
//! two doses about 97%. No data is available beyond two doses, so more are capped at the
//! two dose value.

use crate::constants::PRESUMPTIVE_IMMUNITY_CUTOFF_YEAR;
use crate::illness::Illness;
use crate::profile::{IllnessInput, IllnessProfile, ImmunityEstimate, VaccinationModel};
use crate::ImmunityResult;
use immunity_types::RawValue;

pub const CONFIRMED_IMMUNITY: f64 = 0.90;
pub const NATURAL_IMMUNITY: f64 = 0.10;
pub const ONE_DOSE_IMMUNITY: f64 = 0.93;
pub const TWO_DOSE_IMMUNITY: f64 = 0.97;

pub const PROFILE: IllnessProfile = IllnessProfile {
    illness: Illness::Measles,
    confirmed_immunity: CONFIRMED_IMMUNITY,
    natural_immunity: NATURAL_IMMUNITY,
    presumption_cutoff_year: PRESUMPTIVE_IMMUNITY_CUTOFF_YEAR,
    vaccination: VaccinationModel::DoseTable {
        one_dose: ONE_DOSE_IMMUNITY,
        two_doses: TWO_DOSE_IMMUNITY,
    },
};

/// Estimates the probability of being immune to measles if exposed.
///
/// # Errors
///
/// Returns `ImmunityError::InvalidInput` on a malformed birth year or dose count.
pub fn immunity(
    birth_year: impl Into<RawValue>,
    on_time_doses: impl Into<RawValue>,
    had_measles: bool,
    current_year: i32,
) -> ImmunityResult<ImmunityEstimate> {
    PROFILE.estimate(
        &IllnessInput::new(birth_year, on_time_doses, had_measles),
        current_year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentTemplate::*;
    use crate::ImmunityError;

    const FIXED_YEAR: i32 = 2020;

    #[test]
    fn test_pre_1957_regardless_of_doses() {
        for doses in [RawValue::Absent, 0.into(), 1.into(), 2.into(), 3.into()] {
            for year in [1900, 1956] {
                let estimate = immunity(year, doses.clone(), false, FIXED_YEAR).unwrap();
                assert_eq!(
                    estimate,
                    ImmunityEstimate::new(CONFIRMED_IMMUNITY, vec![Pre1957Message])
                );
            }
        }
    }

    #[test]
    fn test_previous_illness_overrides_everything() {
        for year in [1900, 1956, 1957, 2011] {
            for doses in [0, 1, 2, 7] {
                let estimate = immunity(year, doses, true, FIXED_YEAR).unwrap();
                assert_eq!(
                    estimate,
                    ImmunityEstimate::new(CONFIRMED_IMMUNITY, vec![PreviousIllness])
                );
            }
        }
        // Invalid dose count is never looked at.
        let estimate = immunity(1990, -1, true, FIXED_YEAR).unwrap();
        assert_eq!(estimate.content_templates, vec![PreviousIllness]);
    }

    #[test]
    fn test_dose_lookup() {
        let one = immunity(1990, 1, false, FIXED_YEAR).unwrap();
        assert_eq!(one, ImmunityEstimate::new(0.93, vec![HasImmunisations]));

        let two = immunity(1957, 2, false, FIXED_YEAR).unwrap();
        assert_eq!(two, ImmunityEstimate::new(0.97, vec![HasImmunisations]));

        let seven = immunity(2011, 7, false, FIXED_YEAR).unwrap();
        assert_eq!(
            seven,
            ImmunityEstimate::new(
                0.97,
                vec![HasImmunisations, GreaterThanTwoShotsBeforeAgeSixMessage]
            )
        );
    }

    #[test]
    fn test_no_doses() {
        for doses in [RawValue::Absent, 0.into(), false.into(), "".into()] {
            let estimate = immunity(1985, doses, false, FIXED_YEAR).unwrap();
            assert_eq!(
                estimate,
                ImmunityEstimate::new(NATURAL_IMMUNITY, vec![NoImmunisations])
            );
        }
    }

    #[test]
    fn test_invalid_doses_rejected() {
        for doses in [RawValue::from(-1), 1.5.into(), "two".into()] {
            let err = immunity(1985, doses, false, FIXED_YEAR).expect_err("invalid doses");
            assert!(matches!(err, ImmunityError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_integer_valued_float_inputs() {
        let estimate = immunity(1985.0, 2.0, false, FIXED_YEAR).unwrap();
        assert_eq!(estimate, ImmunityEstimate::new(0.97, vec![HasImmunisations]));
    }
}

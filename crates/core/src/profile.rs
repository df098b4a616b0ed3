//! Shared decision table for the per-illness estimators.
//!
//! Every illness follows the same decision order; only the constants and the way
//! vaccination translates into a probability differ:
//!
//! 1. Documented previous illness: confirmed immunity.
//! 2. Birth year is validated (an invalid year fails here).
//! 3. Birth before the presumption cutoff: confirmed immunity.
//! 4. Dose count is validated; when supplied, the vaccination model decides.
//! 5. Otherwise: natural immunity.

use crate::constants::ON_TIME_VACCINATION_AGE;
use crate::content::ContentTemplate;
use crate::illness::Illness;
use crate::validation::{validate_birth_year, validate_dose_count};
use crate::ImmunityResult;
use immunity_types::RawValue;
use serde::Serialize;

/// Estimated probability of immunity plus the messages explaining it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImmunityEstimate {
    pub probability: f64,
    pub content_templates: Vec<ContentTemplate>,
}

impl ImmunityEstimate {
    pub fn new(probability: f64, content_templates: Vec<ContentTemplate>) -> Self {
        Self {
            probability,
            content_templates,
        }
    }
}

/// Raw inputs for one illness, as collected by a front end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IllnessInput {
    pub birth_year: RawValue,
    /// Doses received (before age six for measles and mumps, ever for rubella).
    pub doses: RawValue,
    pub had_illness: bool,
}

impl IllnessInput {
    pub fn new(
        birth_year: impl Into<RawValue>,
        doses: impl Into<RawValue>,
        had_illness: bool,
    ) -> Self {
        Self {
            birth_year: birth_year.into(),
            doses: doses.into(),
            had_illness,
        }
    }
}

/// Exponential waning model `y = a * e^(k * x)`, where `x` is years elapsed since the
/// on-time vaccination age.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayCurve {
    pub initial_immunity: f64,
    pub rate: f64,
}

impl DecayCurve {
    /// Probability of immunity for someone born in `birth_year`. Children not yet past the
    /// on-time age have lost nothing.
    pub fn immunity_for(&self, birth_year: i32, current_year: i32) -> f64 {
        let years_after_age_six = (i64::from(current_year)
            - i64::from(birth_year)
            - i64::from(ON_TIME_VACCINATION_AGE))
        .max(0);
        self.initial_immunity * (self.rate * years_after_age_six as f64).exp()
    }
}

/// How a supplied dose count becomes a probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VaccinationModel {
    /// Fixed efficacy per on-time dose count; two doses is the highest tabulated entry.
    DoseTable { one_dose: f64, two_doses: f64 },
    /// On-time doses whose protection decays with age.
    Waning {
        one_dose: DecayCurve,
        two_doses: DecayCurve,
    },
    /// Any vaccination confers the same, non-waning protection.
    Flat { vaccinated: f64 },
}

impl VaccinationModel {
    fn estimate(&self, doses: u32, birth_year: i32, current_year: i32) -> ImmunityEstimate {
        use ContentTemplate::*;

        let (probability, mut templates) = match self {
            VaccinationModel::Flat { vaccinated } => {
                return ImmunityEstimate::new(*vaccinated, vec![HasImmunisations]);
            }
            VaccinationModel::DoseTable {
                one_dose,
                two_doses,
            } => {
                let p = if doses == 1 { *one_dose } else { *two_doses };
                (p, vec![HasImmunisations])
            }
            VaccinationModel::Waning {
                one_dose,
                two_doses,
            } => {
                let curve = if doses == 1 { one_dose } else { two_doses };
                (
                    curve.immunity_for(birth_year, current_year),
                    vec![HasImmunisations, WaningWarning],
                )
            }
        };

        if doses > 2 {
            templates.push(GreaterThanTwoShotsBeforeAgeSixMessage);
        }
        ImmunityEstimate::new(probability, templates)
    }
}

/// Per-illness configuration of the decision table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IllnessProfile {
    pub illness: Illness,
    /// Probability after a documented illness or birth before the cutoff.
    pub confirmed_immunity: f64,
    /// Probability with no vaccination.
    pub natural_immunity: f64,
    /// Birth strictly before this year implies presumed immunity.
    pub presumption_cutoff_year: i32,
    pub vaccination: VaccinationModel,
}

impl IllnessProfile {
    /// Runs the decision table against raw inputs.
    ///
    /// # Errors
    ///
    /// Returns `ImmunityError::InvalidInput` for a malformed birth year or dose count,
    /// unless a previous illness short-circuits validation.
    pub fn estimate(
        &self,
        input: &IllnessInput,
        current_year: i32,
    ) -> ImmunityResult<ImmunityEstimate> {
        let estimate = self.decide(input, current_year)?;
        tracing::debug!(
            illness = %self.illness,
            probability = estimate.probability,
            templates = ?estimate.content_templates,
            "estimated immunity"
        );
        Ok(estimate)
    }

    fn decide(
        &self,
        input: &IllnessInput,
        current_year: i32,
    ) -> ImmunityResult<ImmunityEstimate> {
        if input.had_illness {
            return Ok(ImmunityEstimate::new(
                self.confirmed_immunity,
                vec![ContentTemplate::PreviousIllness],
            ));
        }

        let birth_year = validate_birth_year(&input.birth_year, current_year)?;

        if birth_year < self.presumption_cutoff_year {
            return Ok(ImmunityEstimate::new(
                self.confirmed_immunity,
                vec![ContentTemplate::Pre1957Message],
            ));
        }

        // Unknown and confirmed-zero doses both land in the natural-immunity branch.
        match validate_dose_count(&input.doses)? {
            Some(doses) => Ok(self.vaccination.estimate(doses, birth_year, current_year)),
            None => Ok(ImmunityEstimate::new(
                self.natural_immunity,
                vec![ContentTemplate::NoImmunisations],
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImmunityError;

    const FIXED_YEAR: i32 = 2020;

    const TEST_PROFILE: IllnessProfile = IllnessProfile {
        illness: Illness::Measles,
        confirmed_immunity: 0.5,
        natural_immunity: 0.25,
        presumption_cutoff_year: 1957,
        vaccination: VaccinationModel::DoseTable {
            one_dose: 0.6,
            two_doses: 0.7,
        },
    };

    #[test]
    fn test_decay_curve_flat_until_age_six() {
        let curve = DecayCurve {
            initial_immunity: 0.9,
            rate: -0.1,
        };
        assert_eq!(curve.immunity_for(FIXED_YEAR, FIXED_YEAR), 0.9);
        assert_eq!(curve.immunity_for(FIXED_YEAR - 6, FIXED_YEAR), 0.9);
        assert!(curve.immunity_for(FIXED_YEAR - 7, FIXED_YEAR) < 0.9);
    }

    #[test]
    fn test_history_checked_before_validation() {
        let input = IllnessInput::new("not a year", "two", true);
        let estimate = TEST_PROFILE.estimate(&input, FIXED_YEAR).unwrap();
        assert_eq!(
            estimate,
            ImmunityEstimate::new(0.5, vec![ContentTemplate::PreviousIllness])
        );
    }

    #[test]
    fn test_birth_year_validated_before_doses() {
        let input = IllnessInput::new(198, "two", false);
        let err = TEST_PROFILE.estimate(&input, FIXED_YEAR).expect_err("invalid year");
        assert!(matches!(err, ImmunityError::InvalidInput(msg) if msg.contains("birth year")));
    }

    #[test]
    fn test_presumption_ignores_dose_count() {
        let input = IllnessInput::new(1956, -1, false);
        let estimate = TEST_PROFILE.estimate(&input, FIXED_YEAR).unwrap();
        assert_eq!(
            estimate,
            ImmunityEstimate::new(0.5, vec![ContentTemplate::Pre1957Message])
        );
    }

    #[test]
    fn test_flat_model_never_adds_extra_templates() {
        let profile = IllnessProfile {
            vaccination: VaccinationModel::Flat { vaccinated: 0.8 },
            ..TEST_PROFILE
        };
        let estimate = profile
            .estimate(&IllnessInput::new(1990, 5, false), FIXED_YEAR)
            .unwrap();
        assert_eq!(
            estimate,
            ImmunityEstimate::new(0.8, vec![ContentTemplate::HasImmunisations])
        );
    }
}

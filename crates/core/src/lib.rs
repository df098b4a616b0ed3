//! # Immunity Core
//!
//! Estimates the probability that a person is immune to measles, mumps or rubella from their
//! birth year, vaccination history and illness history.
//!
//! Each illness is a small decision table ([`profile::IllnessProfile`]) combining:
//! - presumptive immunity for birth before 1957
//! - documented previous illness
//! - vaccine efficacy per dose, waning over time for mumps
//!
//! Estimates are pure functions of their inputs and the current year, which is resolved once
//! at startup ([`config::EngineConfig`]) and injected.
//!
//! **No front-end concerns**: collecting input, rendering messages and handling errors for
//! display belong to the binaries.

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod illness;
pub mod measles;
pub mod mumps;
pub mod profile;
pub mod report;
pub mod rubella;
pub mod validation;

pub use config::EngineConfig;
pub use content::ContentTemplate;
pub use error::{ImmunityError, ImmunityResult};
pub use illness::{Illness, Illnesses};
pub use immunity_types::RawValue;
pub use profile::{IllnessInput, ImmunityEstimate};
pub use report::IllnessReport;
pub use validation::{validate_birth_year, validate_dose_count};

/// Immunity estimation bound to a fixed current year.
///
/// Cheap to copy and safe to share between threads; it holds no mutable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmunityEngine {
    current_year: i32,
}

impl ImmunityEngine {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.current_year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Estimates immunity to `illness` from raw inputs.
    ///
    /// # Errors
    ///
    /// Returns `ImmunityError::InvalidInput` on a malformed birth year or dose count.
    pub fn estimate(
        &self,
        illness: Illness,
        input: &IllnessInput,
    ) -> ImmunityResult<ImmunityEstimate> {
        illness.profile().estimate(input, self.current_year)
    }

    pub fn measles_immunity(
        &self,
        birth_year: impl Into<RawValue>,
        on_time_doses: impl Into<RawValue>,
        had_measles: bool,
    ) -> ImmunityResult<ImmunityEstimate> {
        measles::immunity(birth_year, on_time_doses, had_measles, self.current_year)
    }

    pub fn mumps_immunity(
        &self,
        birth_year: impl Into<RawValue>,
        on_time_doses: impl Into<RawValue>,
        had_mumps: bool,
    ) -> ImmunityResult<ImmunityEstimate> {
        mumps::immunity(birth_year, on_time_doses, had_mumps, self.current_year)
    }

    pub fn rubella_immunity(
        &self,
        birth_year: impl Into<RawValue>,
        doses: impl Into<RawValue>,
        had_rubella: bool,
    ) -> ImmunityResult<ImmunityEstimate> {
        rubella::immunity(birth_year, doses, had_rubella, self.current_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED_YEAR: i32 = 2020;

    #[test]
    fn test_estimate_dispatches_to_illness_profile() {
        let engine = ImmunityEngine::new(FIXED_YEAR);
        let input = IllnessInput::new(1990, 2, false);

        assert_eq!(
            engine.estimate(Illness::Measles, &input).unwrap(),
            engine.measles_immunity(1990, 2, false).unwrap()
        );
        assert_eq!(
            engine.estimate(Illness::Mumps, &input).unwrap(),
            engine.mumps_immunity(1990, 2, false).unwrap()
        );
        assert_eq!(
            engine.estimate(Illness::Rubella, &input).unwrap(),
            engine.rubella_immunity(1990, 2, false).unwrap()
        );
    }

    #[test]
    fn test_every_illness_rejects_invalid_birth_years() {
        let engine = ImmunityEngine::new(FIXED_YEAR);
        let invalid = [
            RawValue::from("abc"),
            RawValue::from(1957.6),
            RawValue::from(-1989),
            RawValue::from(19894),
            RawValue::from(198),
            RawValue::from(FIXED_YEAR + 1),
        ];

        for illness in Illness::ALL {
            for birth_year in &invalid {
                let input = IllnessInput {
                    birth_year: birth_year.clone(),
                    ..IllnessInput::default()
                };
                let err = engine.estimate(illness, &input).expect_err("should reject");
                assert!(matches!(err, ImmunityError::InvalidInput(_)));
            }
        }
    }

    #[test]
    fn test_templates_stay_within_illness_vocabulary() {
        let engine = ImmunityEngine::new(FIXED_YEAR);
        for illness in Illness::ALL {
            for birth_year in [1900, 1957, 1990, FIXED_YEAR] {
                for doses in 0..5 {
                    for had_illness in [false, true] {
                        let input = IllnessInput::new(birth_year, doses, had_illness);
                        let estimate = engine.estimate(illness, &input).unwrap();
                        assert!((0.0..=1.0).contains(&estimate.probability));
                        assert!(estimate
                            .content_templates
                            .iter()
                            .all(|t| illness.allowed_templates().contains(t)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_engine_follows_configured_year() {
        let config = EngineConfig::new(1990, Illnesses::all()).unwrap();
        let engine = ImmunityEngine::from_config(&config);
        assert_eq!(engine.current_year(), 1990);
        assert!(engine.measles_immunity(1991, 1, false).is_err());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImmunityEngine>();
        assert_send_sync::<ImmunityEstimate>();
    }
}

//! Input validation utilities.
//!
//! Every estimator funnels its raw inputs through these functions before any
//! probability is computed, so malformed input is rejected eagerly and never replaced
//! with a default. Only values that are not supplied at all are treated as "no data".

use crate::constants::MIN_BIRTH_YEAR;
use crate::{ImmunityError, ImmunityResult};
use immunity_types::RawValue;

/// Validates a birth year supplied to an estimator.
///
/// Accepts a 4 digit integer from `MIN_BIRTH_YEAR` up to and including `current_year`.
/// Integer-valued floats are accepted (`1980.0` becomes `1980`).
///
/// # Arguments
///
/// * `value` - The raw birth year as collected by the caller.
/// * `current_year` - The calendar year resolved at startup.
///
/// # Errors
///
/// Returns `ImmunityError::InvalidInput` for absent values, booleans, text, fractional
/// floats, and years outside the accepted range.
pub fn validate_birth_year(value: &RawValue, current_year: i32) -> ImmunityResult<i32> {
    let year = match value {
        RawValue::Integer(_) | RawValue::Float(_) => value.as_integer().ok(),
        _ => None,
    };

    match year {
        Some(y) if (i64::from(MIN_BIRTH_YEAR)..=i64::from(current_year)).contains(&y) => {
            // Range check above guarantees the value fits.
            Ok(y as i32)
        }
        _ => {
            tracing::warn!("rejected birth year {}", value);
            Err(ImmunityError::InvalidInput(format!(
                "birth year must be a 4 digit integer no later than {current_year}, got {value}"
            )))
        }
    }
}

/// Validates a dose count supplied to an estimator.
///
/// Returns `None` when no dose information was supplied (absent, `false`, `0`, `0.0` or
/// empty text) and the number of doses otherwise. Counts beyond `u32::MAX` saturate.
///
/// # Errors
///
/// Returns `ImmunityError::InvalidInput` when a supplied value is negative, fractional,
/// or text.
pub fn validate_dose_count(value: &RawValue) -> ImmunityResult<Option<u32>> {
    if !value.is_supplied() {
        return Ok(None);
    }

    let doses = value.as_integer().map_err(|e| {
        tracing::warn!("rejected dose count {}", value);
        ImmunityError::InvalidInput(format!("vaccinations must be a positive integer: {e}"))
    })?;

    if doses < 1 {
        tracing::warn!("rejected dose count {}", value);
        return Err(ImmunityError::InvalidInput(format!(
            "vaccinations must be a positive integer, got {doses}"
        )));
    }

    Ok(Some(u32::try_from(doses).unwrap_or(u32::MAX)))
}

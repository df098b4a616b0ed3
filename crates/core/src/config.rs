//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into the engine. The engine never reads the clock or environment variables itself, so
//! a long-running process and a test harness see the same "current year" for every request.

use crate::constants::MIN_BIRTH_YEAR;
use crate::illness::{Illness, Illnesses};
use crate::{ImmunityError, ImmunityResult};
use chrono::Datelike;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    current_year: i32,
    illnesses: Illnesses,
}

impl EngineConfig {
    /// Create a new `EngineConfig`.
    pub fn new(current_year: i32, illnesses: Illnesses) -> ImmunityResult<Self> {
        if current_year < MIN_BIRTH_YEAR {
            return Err(ImmunityError::InvalidInput(format!(
                "current year must be at least {MIN_BIRTH_YEAR}, got {current_year}"
            )));
        }
        if illnesses.is_empty() {
            return Err(ImmunityError::InvalidInput(
                "at least one illness must be configured".into(),
            ));
        }

        Ok(Self {
            current_year,
            illnesses,
        })
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn illnesses(&self) -> &Illnesses {
        &self.illnesses
    }
}

/// Resolve the current year from an optional override value.
///
/// If `value` is `None` or empty/whitespace, returns the local wall-clock year.
pub fn resolve_current_year(value: Option<String>) -> ImmunityResult<i32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        Some(v) => v.parse::<i32>().map_err(|_| {
            ImmunityError::InvalidInput(format!("current year override is not a year: {v}"))
        }),
        None => Ok(chrono::Local::now().year()),
    }
}

/// Parse the configured illness list from an optional comma-separated value.
///
/// If `value` is `None` or empty/whitespace, every supported illness is configured.
pub fn illnesses_from_env_value(value: Option<String>) -> ImmunityResult<Illnesses> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(Illnesses::all());
    };

    let parsed = value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.parse::<Illness>())
        .collect::<ImmunityResult<Vec<_>>>()?;

    Illnesses::new(parsed)
}

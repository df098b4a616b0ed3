//! Constants used throughout the immunity core crate.
//!
//! Epidemiological constants that are specific to one illness live in that illness'
//! module; the values here are shared by every estimator or by configuration.

/// Lowest birth year accepted (inclusive). Anything earlier is not a 4 digit year.
pub const MIN_BIRTH_YEAR: i32 = 1000;

/// Birth before this year provides presumptive evidence of immunity to measles, mumps
/// and rubella (CDC).
pub const PRESUMPTIVE_IMMUNITY_CUTOFF_YEAR: i32 = 1957;

/// Age by which doses count as "on time" for measles and mumps.
pub const ON_TIME_VACCINATION_AGE: i32 = 6;

/// Environment variable overriding the current year used for validation and waning.
pub const CURRENT_YEAR_ENV: &str = "IMMUNITY_CURRENT_YEAR";

/// Environment variable selecting which illnesses are estimated (comma-separated).
pub const ILLNESSES_ENV: &str = "IMMUNITY_ILLNESSES";

//! Illness registry.
//!
//! Each supported illness is a variant of [`Illness`]. Which illnesses a deployment
//! estimates is configured once at startup as an [`Illnesses`] list; front ends iterate
//! that list in registration order.

use crate::content::ContentTemplate;
use crate::profile::IllnessProfile;
use crate::{measles, mumps, rubella};
use crate::{ImmunityError, ImmunityResult};
use serde::{Deserialize, Serialize};

/// A vaccine-preventable illness the engine can estimate immunity for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Illness {
    Measles,
    Mumps,
    Rubella,
}

impl Illness {
    /// Every supported illness, in default registration order.
    pub const ALL: [Illness; 3] = [Illness::Measles, Illness::Mumps, Illness::Rubella];

    pub fn name(self) -> &'static str {
        match self {
            Illness::Measles => "measles",
            Illness::Mumps => "mumps",
            Illness::Rubella => "rubella",
        }
    }

    /// Key under which callers publish this illness' probability, e.g.
    /// `probability_of_measles_immunity`.
    pub fn result_key(self) -> String {
        format!("probability_of_{}_immunity", self.name())
    }

    /// Decision table used to estimate this illness.
    pub fn profile(self) -> &'static IllnessProfile {
        match self {
            Illness::Measles => &measles::PROFILE,
            Illness::Mumps => &mumps::PROFILE,
            Illness::Rubella => &rubella::PROFILE,
        }
    }

    /// The closed set of templates an estimate for this illness may carry.
    pub fn allowed_templates(self) -> &'static [ContentTemplate] {
        const MEASLES: &[ContentTemplate] = &[
            ContentTemplate::Pre1957Message,
            ContentTemplate::HasImmunisations,
            ContentTemplate::GreaterThanTwoShotsBeforeAgeSixMessage,
            ContentTemplate::NoImmunisations,
            ContentTemplate::PreviousIllness,
        ];
        const MUMPS: &[ContentTemplate] = &[
            ContentTemplate::Pre1957Message,
            ContentTemplate::HasImmunisations,
            ContentTemplate::GreaterThanTwoShotsBeforeAgeSixMessage,
            ContentTemplate::NoImmunisations,
            ContentTemplate::PreviousIllness,
            ContentTemplate::WaningWarning,
        ];
        const RUBELLA: &[ContentTemplate] = &[
            ContentTemplate::Pre1957Message,
            ContentTemplate::HasImmunisations,
            ContentTemplate::NoImmunisations,
            ContentTemplate::PreviousIllness,
        ];

        match self {
            Illness::Measles => MEASLES,
            Illness::Mumps => MUMPS,
            Illness::Rubella => RUBELLA,
        }
    }
}

impl std::fmt::Display for Illness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Illness {
    type Err = ImmunityError;

    fn from_str(s: &str) -> ImmunityResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "measles" => Ok(Illness::Measles),
            "mumps" => Ok(Illness::Mumps),
            "rubella" => Ok(Illness::Rubella),
            other => Err(ImmunityError::InvalidInput(format!(
                "unknown illness: {other}"
            ))),
        }
    }
}

/// The configured illnesses, in registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Illnesses(Vec<Illness>);

impl Illnesses {
    /// Registers the given illnesses.
    ///
    /// # Errors
    ///
    /// Returns `ImmunityError::InvalidInput` if an illness is listed twice.
    pub fn new(illnesses: Vec<Illness>) -> ImmunityResult<Self> {
        for (i, illness) in illnesses.iter().enumerate() {
            if illnesses[..i].contains(illness) {
                return Err(ImmunityError::InvalidInput(format!(
                    "illness registered more than once: {illness}"
                )));
            }
        }
        Ok(Self(illnesses))
    }

    /// Every supported illness.
    pub fn all() -> Self {
        Self(Illness::ALL.to_vec())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|illness| illness.name()).collect()
    }

    pub fn contains(&self, illness: Illness) -> bool {
        self.0.contains(&illness)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Illness> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Illnesses {
    fn default() -> Self {
        Self::all()
    }
}

impl<'a> IntoIterator for &'a Illnesses {
    type Item = Illness;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Illness>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

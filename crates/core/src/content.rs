//! Content templates: the explanation tags attached to an estimate.
//!
//! The engine only decides *which* messages apply. Rendering them is the caller's job,
//! but a default English catalogue is provided here so every front end says the same
//! thing.

use crate::illness::Illness;
use crate::{ImmunityError, ImmunityResult};
use serde::{Deserialize, Serialize};

const CDC_PRESUMPTIVE_IMMUNITY: &str = "\"Birth before 1957 provides only presumptive evidence \
for measles, mumps, and rubella. Before vaccines were available, nearly everyone was infected \
with measles, mumps, and rubella viruses during childhood. The majority of people born before \
1957 are likely to have been infected naturally and therefore are presumed to be protected \
against measles, mumps, and rubella. Healthcare personnel born before 1957 without laboratory \
evidence of immunity or disease should consider getting two doses of MMR vaccine.\" \
- https://www.cdc.gov/vaccines/vpd/mmr/public/index.html";

/// Explanation tag naming a message the caller should display.
///
/// Order within an estimate matters; callers render tags in the order given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTemplate {
    /// Born before 1957, presumed immune through childhood exposure.
    #[serde(rename = "pre_1957_message")]
    Pre1957Message,
    /// Vaccinated; the probability reflects vaccine efficacy.
    HasImmunisations,
    /// More than two on-time doses reported; efficacy data stops at two.
    GreaterThanTwoShotsBeforeAgeSixMessage,
    /// No vaccination reported.
    NoImmunisations,
    /// Documented previous illness.
    PreviousIllness,
    /// Vaccine-induced immunity declines over time.
    WaningWarning,
    /// Boundary-only tag: estimation failed on the supplied data.
    ImmunityResultsErrorMessage,
}

impl ContentTemplate {
    /// Returns the wire tag, e.g. `"has_immunisations"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentTemplate::Pre1957Message => "pre_1957_message",
            ContentTemplate::HasImmunisations => "has_immunisations",
            ContentTemplate::GreaterThanTwoShotsBeforeAgeSixMessage => {
                "greater_than_two_shots_before_age_six_message"
            }
            ContentTemplate::NoImmunisations => "no_immunisations",
            ContentTemplate::PreviousIllness => "previous_illness",
            ContentTemplate::WaningWarning => "waning_warning",
            ContentTemplate::ImmunityResultsErrorMessage => "immunity_results_error_message",
        }
    }

    /// Renders the default English message for this tag.
    pub fn message(self, illness: Illness) -> String {
        let name = illness.name();
        match self {
            ContentTemplate::Pre1957Message => format!(
                "According to the CDC, you are likely immune to {name} due to childhood \
                 exposure.\n{CDC_PRESUMPTIVE_IMMUNITY}"
            ),
            ContentTemplate::HasImmunisations => format!(
                "This means you have a statistical probability of being immune to {name} if \
                 you are exposed. The closer to 1.0, the more likely you are immune."
            ),
            ContentTemplate::GreaterThanTwoShotsBeforeAgeSixMessage => {
                "Data not available for more than 2 shots before age 6.".to_string()
            }
            ContentTemplate::NoImmunisations => format!(
                "You are unlikely to have any immunity to {name}, if you are exposed, you are \
                 very likely to be infected."
            ),
            ContentTemplate::PreviousIllness => format!(
                "Having had {name} before makes a second infection rare, so you are likely \
                 immune."
            ),
            ContentTemplate::WaningWarning => format!(
                "Protection from {name} vaccination decreases over time and not every immune \
                 system responds to the vaccine equally well."
            ),
            ContentTemplate::ImmunityResultsErrorMessage => format!(
                "An error was encountered while estimating your immunity to {name}. Please \
                 check the information you entered."
            ),
        }
    }
}

impl std::fmt::Display for ContentTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentTemplate {
    type Err = ImmunityError;

    fn from_str(s: &str) -> ImmunityResult<Self> {
        match s {
            "pre_1957_message" => Ok(ContentTemplate::Pre1957Message),
            "has_immunisations" => Ok(ContentTemplate::HasImmunisations),
            "greater_than_two_shots_before_age_six_message" => {
                Ok(ContentTemplate::GreaterThanTwoShotsBeforeAgeSixMessage)
            }
            "no_immunisations" => Ok(ContentTemplate::NoImmunisations),
            "previous_illness" => Ok(ContentTemplate::PreviousIllness),
            "waning_warning" => Ok(ContentTemplate::WaningWarning),
            "immunity_results_error_message" => Ok(ContentTemplate::ImmunityResultsErrorMessage),
            other => Err(ImmunityError::InvalidInput(format!(
                "unknown content template: {other}"
            ))),
        }
    }
}

//! Display-ready results for front ends.
//!
//! Front ends never show raw engine errors. A failed estimate becomes an "Unknown"
//! probability with the generic error template, and the other illnesses of the same
//! request are still reported.

use crate::content::ContentTemplate;
use crate::illness::Illness;
use crate::profile::ImmunityEstimate;
use crate::ImmunityResult;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Rendered result for one illness.
#[derive(Clone, Debug, PartialEq)]
pub struct IllnessReport {
    pub illness: Illness,
    /// `None` when estimation failed.
    pub probability: Option<f64>,
    pub content_templates: Vec<ContentTemplate>,
}

impl IllnessReport {
    pub fn from_result(illness: Illness, result: ImmunityResult<ImmunityEstimate>) -> Self {
        match result {
            Ok(estimate) => Self {
                illness,
                probability: Some(estimate.probability),
                content_templates: estimate.content_templates,
            },
            Err(e) => {
                tracing::error!("{} estimate error: {:?}", illness, e);
                Self {
                    illness,
                    probability: None,
                    content_templates: vec![ContentTemplate::ImmunityResultsErrorMessage],
                }
            }
        }
    }

    pub fn probability_text(&self) -> String {
        match self.probability {
            Some(p) => format!("{p:.2}"),
            None => "Unknown".to_string(),
        }
    }

    /// Messages for each template, in order.
    pub fn messages(&self) -> Vec<String> {
        self.content_templates
            .iter()
            .map(|template| template.message(self.illness))
            .collect()
    }
}

impl Serialize for IllnessReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("illness", &self.illness)?;
        match self.probability {
            Some(p) => map.serialize_entry(&self.illness.result_key(), &p)?,
            None => map.serialize_entry(&self.illness.result_key(), "Unknown")?,
        }
        map.serialize_entry("content_templates", &self.content_templates)?;
        map.serialize_entry("messages", &self.messages())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImmunityError;

    #[test]
    fn test_error_becomes_unknown() {
        let report = IllnessReport::from_result(
            Illness::Mumps,
            Err(ImmunityError::InvalidInput("bad".into())),
        );
        assert_eq!(report.probability, None);
        assert_eq!(report.probability_text(), "Unknown");
        assert_eq!(
            report.content_templates,
            vec![ContentTemplate::ImmunityResultsErrorMessage]
        );

        let json = serde_json::to_value(&report).expect("serialise");
        assert_eq!(json["probability_of_mumps_immunity"], "Unknown");
        assert_eq!(json["content_templates"][0], "immunity_results_error_message");
    }

    #[test]
    fn test_success_serialises_probability_under_result_key() {
        let estimate = ImmunityEstimate::new(0.97, vec![ContentTemplate::HasImmunisations]);
        let report = IllnessReport::from_result(Illness::Rubella, Ok(estimate));
        assert_eq!(report.probability_text(), "0.97");

        let json = serde_json::to_value(&report).expect("serialise");
        assert_eq!(json["illness"], "rubella");
        assert_eq!(json["probability_of_rubella_immunity"], 0.97);
        assert_eq!(json["content_templates"][0], "has_immunisations");
        assert!(json["messages"][0]
            .as_str()
            .is_some_and(|m| m.contains("rubella")));
    }
}

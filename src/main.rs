use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use immunity_core::config::{illnesses_from_env_value, resolve_current_year};
use immunity_core::constants::{CURRENT_YEAR_ENV, ILLNESSES_ENV};
use immunity_core::{EngineConfig, Illness, IllnessInput, IllnessReport, ImmunityEngine, RawValue};

/// One completed data-entry form.
///
/// Every field is optional on the wire; missing answers reach the engine as "not supplied"
/// and the engine decides whether that is acceptable.
#[derive(Debug, Default, Deserialize)]
struct SurveyResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    birth_year: RawValue,
    #[serde(default)]
    measles: IllnessAnswers,
    #[serde(default)]
    mumps: IllnessAnswers,
    #[serde(default)]
    rubella: IllnessAnswers,
}

#[derive(Debug, Default, Deserialize)]
struct IllnessAnswers {
    #[serde(default)]
    doses: RawValue,
    #[serde(default)]
    had_illness: bool,
}

#[derive(Debug, Serialize)]
struct SurveyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    results: Vec<IllnessReport>,
}

impl SurveyResponse {
    fn input_for(&self, illness: Illness) -> IllnessInput {
        let answers = match illness {
            Illness::Measles => &self.measles,
            Illness::Mumps => &self.mumps,
            Illness::Rubella => &self.rubella,
        };
        IllnessInput {
            birth_year: self.birth_year.clone(),
            doses: answers.doses.clone(),
            had_illness: answers.had_illness,
        }
    }
}

/// Estimates every configured illness for every response.
///
/// A failing illness is reported as "Unknown" without affecting the others.
fn run_batch(config: &EngineConfig, responses: Vec<SurveyResponse>) -> Vec<SurveyResult> {
    let engine = ImmunityEngine::from_config(config);

    responses
        .into_iter()
        .map(|response| {
            let results = config
                .illnesses()
                .iter()
                .map(|illness| {
                    let input = response.input_for(illness);
                    IllnessReport::from_result(illness, engine.estimate(illness, &input))
                })
                .collect();
            SurveyResult {
                id: response.id,
                results,
            }
        })
        .collect()
}

/// Batch immunity estimation.
///
/// Reads a JSON array of survey responses from the file named by the first argument, or from
/// stdin when no argument is given, and writes a JSON array of results to stdout. Logs go to
/// stderr.
///
/// # Environment Variables
/// - `IMMUNITY_CURRENT_YEAR`: Year used for validation and waning (default: the clock)
/// - `IMMUNITY_ILLNESSES`: Comma-separated illnesses to estimate (default: all)
/// - `RUST_LOG`: Log filter
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("immunity_run=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let current_year = resolve_current_year(std::env::var(CURRENT_YEAR_ENV).ok())?;
    let illnesses = illnesses_from_env_value(std::env::var(ILLNESSES_ENV).ok())?;
    let config = EngineConfig::new(current_year, illnesses)?;

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let responses: Vec<SurveyResponse> = serde_json::from_str(&input)?;

    tracing::info!(
        "++ Estimating {} response(s) for {:?} as of {}",
        responses.len(),
        config.illnesses().names(),
        config.current_year()
    );

    let results = run_batch(&config, responses);
    serde_json::to_writer_pretty(std::io::stdout().lock(), &results)?;
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use immunity_core::Illnesses;

    fn config() -> EngineConfig {
        EngineConfig::new(2020, Illnesses::all()).expect("config")
    }

    #[test]
    fn test_missing_fields_default_to_not_supplied() {
        let responses: Vec<SurveyResponse> =
            serde_json::from_str(r#"[{"birth_year": 1990}]"#).expect("parse");
        let input = responses[0].input_for(Illness::Mumps);
        assert_eq!(input, IllnessInput::new(1990, RawValue::Absent, false));
    }

    #[test]
    fn test_run_batch_reports_each_illness() {
        let responses: Vec<SurveyResponse> = serde_json::from_str(
            r#"[{
                "id": "a",
                "birth_year": 1990,
                "measles": {"doses": 2},
                "mumps": {"doses": 1.5},
                "rubella": {"doses": 0, "had_illness": true}
            }]"#,
        )
        .expect("parse");

        let results = run_batch(&config(), responses);
        let json = serde_json::to_value(&results).expect("serialise");
        let reports = &json[0]["results"];

        assert_eq!(json[0]["id"], "a");
        assert_eq!(reports[0]["probability_of_measles_immunity"], 0.97);
        assert_eq!(reports[1]["probability_of_mumps_immunity"], "Unknown");
        assert_eq!(
            reports[1]["content_templates"][0],
            "immunity_results_error_message"
        );
        assert_eq!(reports[2]["probability_of_rubella_immunity"], 0.93);
        assert_eq!(reports[2]["content_templates"][0], "previous_illness");
    }

    #[test]
    fn test_run_batch_respects_configured_illnesses() {
        let config = EngineConfig::new(
            2020,
            Illnesses::new(vec![Illness::Rubella]).expect("illnesses"),
        )
        .expect("config");
        let responses = vec![SurveyResponse {
            birth_year: RawValue::Integer(1950),
            ..SurveyResponse::default()
        }];

        let results = run_batch(&config, responses);
        assert_eq!(results[0].results.len(), 1);
        assert_eq!(results[0].results[0].illness, Illness::Rubella);
        assert_eq!(results[0].results[0].probability, Some(0.93));
    }
}

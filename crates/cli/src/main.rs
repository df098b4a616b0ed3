use clap::{Parser, Subcommand};
use immunity_core::config::{illnesses_from_env_value, resolve_current_year};
use immunity_core::constants::{CURRENT_YEAR_ENV, ILLNESSES_ENV};
use immunity_core::{EngineConfig, Illness, IllnessInput, IllnessReport, ImmunityEngine, RawValue};

#[derive(Parser)]
#[command(name = "immunity")]
#[command(about = "Estimate probable immunity to measles, mumps and rubella")]
struct Cli {
    /// Override the current year (defaults to IMMUNITY_CURRENT_YEAR, then the clock)
    #[arg(long, global = true)]
    current_year: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured illnesses
    Illnesses,
    /// Estimate immunity for one person
    Estimate {
        /// Four digit birth year
        #[arg(value_parser = parse_raw_value)]
        birth_year: RawValue,
        /// Measles vaccinations by age six
        #[arg(long, value_parser = parse_raw_value)]
        measles_doses: Option<RawValue>,
        /// Had a documented case of measles
        #[arg(long)]
        had_measles: bool,
        /// Mumps vaccinations by age six
        #[arg(long, value_parser = parse_raw_value)]
        mumps_doses: Option<RawValue>,
        /// Had a documented case of mumps
        #[arg(long)]
        had_mumps: bool,
        /// Rubella vaccinations (at any age)
        #[arg(long, value_parser = parse_raw_value)]
        rubella_doses: Option<RawValue>,
        /// Had a documented case of rubella
        #[arg(long)]
        had_rubella: bool,
        /// Only estimate these illnesses (comma-separated)
        #[arg(long)]
        only: Option<String>,
    },
}

/// Keeps whatever number the user typed so the engine, not clap, decides validity.
fn parse_raw_value(s: &str) -> Result<RawValue, String> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Ok(RawValue::Integer(i));
    }
    if let Ok(f) = s.parse::<f64>() {
        return Ok(RawValue::Float(f));
    }
    Ok(RawValue::Text(s.to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("immunity_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let current_year =
        resolve_current_year(cli.current_year.or_else(|| std::env::var(CURRENT_YEAR_ENV).ok()))?;

    match cli.command {
        Some(Commands::Illnesses) => {
            let illnesses = illnesses_from_env_value(std::env::var(ILLNESSES_ENV).ok())?;
            for name in illnesses.names() {
                println!("{name}");
            }
        }
        Some(Commands::Estimate {
            birth_year,
            measles_doses,
            had_measles,
            mumps_doses,
            had_mumps,
            rubella_doses,
            had_rubella,
            only,
        }) => {
            let illnesses =
                illnesses_from_env_value(only.or_else(|| std::env::var(ILLNESSES_ENV).ok()))?;
            let config = EngineConfig::new(current_year, illnesses)?;
            let engine = ImmunityEngine::from_config(&config);

            for illness in config.illnesses() {
                let (doses, had_illness) = match illness {
                    Illness::Measles => (measles_doses.clone(), had_measles),
                    Illness::Mumps => (mumps_doses.clone(), had_mumps),
                    Illness::Rubella => (rubella_doses.clone(), had_rubella),
                };
                let input = IllnessInput::new(birth_year.clone(), doses, had_illness);
                let report = IllnessReport::from_result(illness, engine.estimate(illness, &input));

                println!("{}: {}", illness, report.probability_text());
                for message in report.messages() {
                    println!("  {}", message);
                }
            }
        }
        None => {
            println!("Use 'immunity --help' for commands");
        }
    }

    Ok(())
}

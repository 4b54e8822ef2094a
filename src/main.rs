//! glycemia
//!
//! Command-line interface for fuzzy blood-sugar estimation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use glycemia::fuzzy::{ACTIVITY, AGE, BMI};
use glycemia::{
    membership_curve, parse_inputs, simulate, Error, ErrorResponse, GlycemiaConfig, Inference,
    LinguisticVariable, LogLevel, OutputFormat, Predictor, ProfileKind,
};

#[derive(Parser)]
#[command(name = "glycemia")]
#[command(author = "glycemia authors")]
#[command(version = concat!(env!("GLYCEMIA_VERSION"), " (", env!("GLYCEMIA_TARGET"), ")"))]
#[command(about = "Fuzzy blood-sugar estimation from age, BMI and activity", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the standard search path)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict blood sugar for one set of inputs
    Predict {
        /// Age in years (0-100)
        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// Body-mass index (10-45)
        #[arg(long, allow_hyphen_values = true)]
        bmi: String,

        /// Activity level (0-10)
        #[arg(long, allow_hyphen_values = true)]
        activity: String,

        /// Rule base to use
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,

        /// Show term degrees and rule activations
        #[arg(long)]
        explain: bool,
    },

    /// Sample the membership functions of a variable
    Curves {
        /// Variable to sample
        #[arg(long, value_enum, default_value = "age")]
        variable: VariableArg,

        /// Number of sample points
        #[arg(long)]
        samples: Option<usize>,

        /// Profile providing the blood-sugar terms
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
    },

    /// Predict over a simulated, drifting input stream
    Simulate {
        /// Number of time steps
        #[arg(long)]
        steps: Option<usize>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Rule base to use
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
    },

    /// List the built-in rule bases
    Profiles,

    /// Print the effective configuration
    Config {
        /// Print a commented default configuration file instead
        #[arg(long)]
        init: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Five mixed AND/OR rules
    Standard,
    /// Nine three-way AND rules
    Extended,
}

impl From<ProfileArg> for ProfileKind {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Standard => ProfileKind::Standard,
            ProfileArg::Extended => ProfileKind::Extended,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum VariableArg {
    Age,
    Bmi,
    Activity,
    BloodSugar,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = GlycemiaConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            config.apply_env_overrides();
            config
        }
        None => GlycemiaConfig::load().context("Failed to load config")?,
    };

    if let Some(format) = cli.format {
        config.general.format = format.into();
    }
    if cli.quiet {
        config.general.log_level = LogLevel::Quiet;
    } else if cli.verbose {
        config.general.log_level = LogLevel::Verbose;
    }

    tracing_subscriber::fmt()
        .with_max_level(config.general.log_level.tracing_level())
        .with_writer(std::io::stderr)
        .init();

    debug!(profile = %config.inference.profile, "configuration loaded");

    match cli.command {
        Command::Predict {
            age,
            bmi,
            activity,
            profile,
            explain,
        } => run_predict(&config, &age, &bmi, &activity, profile, explain),
        Command::Curves {
            variable,
            samples,
            profile,
        } => {
            let kind = profile.map(Into::into).unwrap_or(config.inference.profile);
            let samples = samples.unwrap_or(config.simulation.samples);
            let variable: &LinguisticVariable = match variable {
                VariableArg::Age => &AGE,
                VariableArg::Bmi => &BMI,
                VariableArg::Activity => &ACTIVITY,
                VariableArg::BloodSugar => &kind.profile().output,
            };
            let curve = membership_curve(variable, samples);
            match config.general.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
                OutputFormat::Text | OutputFormat::Csv => print!("{}", curve.to_csv()),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Simulate {
            steps,
            seed,
            profile,
        } => {
            let kind = profile.map(Into::into).unwrap_or(config.inference.profile);
            let steps = steps.unwrap_or(config.simulation.steps);
            let seed = seed.unwrap_or(config.simulation.seed);
            info!(steps, seed, profile = %kind, "running simulation");

            let mut rng = StdRng::seed_from_u64(seed);
            let series = simulate(steps, &mut rng, &Predictor::new(kind));
            match config.general.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&series)?),
                OutputFormat::Csv => {
                    println!("step,age,bmi,activity,blood_sugar");
                    for s in &series {
                        println!("{},{},{},{},{}", s.step, s.age, s.bmi, s.activity, s.blood_sugar);
                    }
                }
                OutputFormat::Text => {
                    println!("{:>5} {:>8} {:>8} {:>8} {:>12}", "step", "age", "bmi", "activity", "blood_sugar");
                    for s in &series {
                        println!(
                            "{:>5} {:>8.2} {:>8.2} {:>8.2} {:>12.3}",
                            s.step, s.age, s.bmi, s.activity, s.blood_sugar
                        );
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Profiles => {
            for kind in ProfileKind::ALL {
                let profile = kind.profile();
                let marker = if kind == config.inference.profile { "*" } else { " " };
                println!(
                    "{} {:<10} {} ({} rules)",
                    marker,
                    profile.name(),
                    profile.description,
                    profile.rules.len()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { init } => {
            if init {
                print!("{}", GlycemiaConfig::default_config_content());
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_predict(
    config: &GlycemiaConfig,
    age: &str,
    bmi: &str,
    activity: &str,
    profile: Option<ProfileArg>,
    explain: bool,
) -> Result<ExitCode> {
    let inputs = match parse_inputs(age, bmi, activity) {
        Ok(inputs) => inputs,
        Err(e) => {
            let err = Error::from(e);
            match config.general.format {
                OutputFormat::Json => println!("{}", ErrorResponse::from(&err).to_json()),
                _ => {
                    let field = match &err {
                        Error::Validation(v) => v.field(),
                        Error::Config(_) => None,
                    };
                    eprintln!("Validation error!");
                    match field {
                        Some(field) => eprintln!("{}: {}", field, err),
                        None => eprintln!("{}", err),
                    }
                }
            }
            return Ok(ExitCode::from(2));
        }
    };

    let kind = profile.map(Into::into).unwrap_or(config.inference.profile);
    let inference = Predictor::new(kind).infer(inputs.age, inputs.bmi, inputs.activity);

    match config.general.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&inference)?),
        OutputFormat::Csv => {
            println!("age,bmi,activity,profile,blood_sugar");
            println!(
                "{},{},{},{},{}",
                inputs.age, inputs.bmi, inputs.activity, kind, inference.output
            );
        }
        OutputFormat::Text => {
            if explain {
                print_explanation(&inference);
            }
            println!("{}", glycemia::validation::round_display(inference.output));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_explanation(inference: &Inference) {
    for (name, degrees) in [
        ("age", &inference.age),
        ("bmi", &inference.bmi),
        ("activity", &inference.activity),
    ] {
        let terms: Vec<String> = degrees
            .iter()
            .map(|(label, degree)| format!("{}={:.3}", label, degree))
            .collect();
        println!("{:<9} {}", name, terms.join(" "));
    }
    for (i, activation) in inference.activations.iter().enumerate() {
        println!("rule {:<4} {:<7} {:.3}", i + 1, activation.label, activation.strength);
    }
    if inference.fallback {
        println!("no rule fired, using fallback centroid");
    }
}

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tvs_score::scoring::{self, RawContentMetrics};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the value score (TVS) for a video's engagement metrics
    Value {
        /// Metrics file (.json or YAML); flags override its values
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        metrics: MetricArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Score audio, filter and content descriptors
    Authenticity {
        /// Descriptor file (.json or YAML) with audio, filter and content sections
        #[arg(short, long)]
        input: PathBuf,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Score the built-in sample video (default if no subcommand)
    Sample {
        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Show the creator tier and diamond multiplier for an authenticity score
    Tier {
        /// Authenticity score, 0-100
        #[arg(allow_negative_numbers = true)]
        authenticity: f64,

        /// Monthly earnings to project with the tier multiplier
        #[arg(long)]
        earnings: Option<f64>,
    },
    /// Write a config file with the default scoring settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
struct MetricArgs {
    #[arg(long)]
    views: Option<f64>,
    #[arg(long)]
    likes: Option<f64>,
    #[arg(long)]
    comments: Option<f64>,
    #[arg(long)]
    shares: Option<f64>,
    /// Average watch time in seconds
    #[arg(long)]
    watch_time: Option<f64>,
    /// Video length in seconds
    #[arg(long)]
    video_length: Option<f64>,
    #[arg(long)]
    stitches: Option<f64>,
    #[arg(long)]
    duets: Option<f64>,
    #[arg(long)]
    remixes: Option<f64>,
}

impl MetricArgs {
    fn apply(&self, metrics: &mut RawContentMetrics) {
        let overrides = [
            (self.views, &mut metrics.views),
            (self.likes, &mut metrics.likes),
            (self.comments, &mut metrics.comments),
            (self.shares, &mut metrics.shares),
            (self.watch_time, &mut metrics.watch_time),
            (self.video_length, &mut metrics.video_length),
            (self.stitches, &mut metrics.stitches),
            (self.duets, &mut metrics.duets),
            (self.remixes, &mut metrics.remixes),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Print JSON instead of a report
    #[arg(long, conflicts_with = "tsv")]
    json: bool,

    /// Print one tab-separated line: score, engagement, watch time, ripple, sentiment
    #[arg(long)]
    tsv: bool,
}

#[derive(Parser, Debug)]
#[command(name = "tvs-score")]
#[command(about = "Video value and authenticity scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/tvs-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn valid_authenticity(score: f64) -> bool {
    (0.0..=100.0).contains(&score)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

/// Load and validate the scoring config, exiting on any problem
fn load_scorer(config_path: Option<PathBuf>) -> scoring::ValueScorer {
    let config = match tvs_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    scoring::ValueScorer::from_config(&effective_scoring)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Sample { json: false });
    let config_path = cli.config.map(PathBuf::from);
    let use_colors = tvs_score::output::should_use_colors();

    match command {
        Commands::Value {
            input,
            metrics: overrides,
            format,
        } => {
            let scorer = load_scorer(config_path);
            let mut metrics = match input {
                Some(ref path) => match tvs_score::input::load_metrics(path) {
                    Ok(m) => m,
                    Err(e) => {
                        eprintln!("Input error: {:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
                None => RawContentMetrics::default(),
            };
            overrides.apply(&mut metrics);
            debug!(?metrics, "scoring metrics");

            let result = scorer.score(&metrics);
            if format.json {
                print_json(&result);
            } else if format.tsv {
                println!("{}", tvs_score::output::format_value_tsv(&result));
            } else {
                println!(
                    "{}",
                    tvs_score::output::format_value_report(&result, use_colors)
                );
            }
        }
        Commands::Authenticity { input, json } => {
            let descriptors = match tvs_score::input::load_descriptors(&input) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let report = scoring::compute_authenticity(&descriptors);
            if json {
                print_json(&report);
            } else {
                println!(
                    "{}",
                    tvs_score::output::format_authenticity_report(&report, use_colors)
                );
            }
        }
        Commands::Sample { json } => {
            let scorer = load_scorer(config_path);
            let result = scorer.score(&scoring::sample_metrics());
            let report = scoring::compute_authenticity(&scoring::sample_descriptors());

            if json {
                print_json(&serde_json::json!({
                    "value": result,
                    "authenticity": report,
                }));
            } else {
                println!(
                    "{}",
                    tvs_score::output::format_value_report(&result, use_colors)
                );
                println!();
                println!(
                    "{}",
                    tvs_score::output::format_authenticity_report(&report, use_colors)
                );
            }
        }
        Commands::Tier {
            authenticity,
            earnings,
        } => {
            if !valid_authenticity(authenticity) {
                eprintln!(
                    "Invalid authenticity score {}. Must be a number between 0 and 100.",
                    authenticity
                );
                std::process::exit(EXIT_INPUT);
            }
            println!(
                "{}",
                tvs_score::output::format_tier(authenticity, earnings, use_colors)
            );
        }
        Commands::Init { force } => {
            let path = match config_path {
                Some(p) => p,
                None => match tvs_score::config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            if let Err(e) = tvs_score::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

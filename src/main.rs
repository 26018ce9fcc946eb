use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ergoscore::config::{ColorChoice, OutputFormat};
use ergoscore::observation::{apply_estimate, load_estimate, load_observation, validate_observation, PostureEstimate};
use ergoscore::output::{self, Report};
use ergoscore::{Locale, Method, Observation};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_NO_RESULT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score observation files and print risk levels with corrections
    Assess {
        /// Observation files or glob patterns (YAML, or JSON with a .json extension)
        #[arg(required = true)]
        files: Vec<String>,

        /// Posture estimate to merge into every observation before scoring
        #[arg(short, long)]
        estimate: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on out-of-range fields instead of warning
        #[arg(long)]
        strict: bool,
    },
    /// Print a starting observation record for a method
    Template {
        /// REBA, RULA, OWAS or NIOSH
        method: Method,
    },
    /// List the fields a method's observation record takes
    Fields {
        /// REBA, RULA, OWAS or NIOSH
        method: Method,
    },
    /// List the supported assessment methods
    Methods,
}

#[derive(Parser, Debug)]
#[command(name = "ergoscore")]
#[command(about = "Ergonomic posture and lifting risk scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/ergoscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language for levels, actions and corrections (en, fa)
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Outcome of assessing one file
enum FileOutcome {
    Scored(Report),
    NoResult(Report),
    Failed,
}

fn main() {
    let cli = Cli::parse();

    ergoscore::tracing_init::init_tracing(if cli.verbose { "debug" } else { "warn" });

    let config = match ergoscore::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(?config, "loaded config");

    let locale = cli.locale.unwrap_or(config.locale);
    let use_colors = !cli.no_color
        && match config.color {
            ColorChoice::Auto => output::should_use_colors(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

    let code = match cli.command {
        Commands::Assess {
            files,
            estimate,
            format,
            output,
            strict,
        } => {
            let options = AssessOptions {
                locale,
                use_colors,
                format: format.unwrap_or(config.format),
                strict: strict || config.strict,
            };
            run_assess(&files, estimate.as_deref(), output.as_deref(), &options)
        }
        Commands::Template { method } => match render_template(method) {
            Ok(yaml) => {
                print!("{}", yaml);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                EXIT_INPUT
            }
        },
        Commands::Fields { method } => {
            println!("{}", output::format_fields(method));
            EXIT_SUCCESS
        }
        Commands::Methods => {
            println!("{}", output::format_methods(locale, use_colors));
            EXIT_SUCCESS
        }
    };

    std::process::exit(code);
}

struct AssessOptions {
    locale: Locale,
    use_colors: bool,
    format: OutputFormat,
    strict: bool,
}

fn run_assess(
    patterns: &[String],
    estimate_path: Option<&Path>,
    output_path: Option<&Path>,
    options: &AssessOptions,
) -> i32 {
    let paths = match expand_patterns(patterns) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    let estimate = match estimate_path.map(load_estimate).transpose() {
        Ok(estimate) => estimate,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_INPUT;
        }
    };
    if let Some(notes) = estimate.as_ref().and_then(|e| e.observations.as_deref()) {
        tracing::debug!(notes, "estimate observations");
    }

    let mut reports = Vec::new();
    let mut any_failed = false;
    let mut any_missing = false;

    for path in &paths {
        match assess_file(path, estimate.as_ref(), options) {
            FileOutcome::Scored(report) => reports.push(report),
            FileOutcome::NoResult(report) => {
                any_missing = true;
                reports.push(report);
            }
            FileOutcome::Failed => any_failed = true,
        }
    }

    match options.format {
        OutputFormat::Text => {
            let width = output::terminal_width();
            let blocks: Vec<String> = reports
                .iter()
                .map(|report| match &report.assessment {
                    Some(assessment) => output::format_assessment(
                        &report.source,
                        assessment,
                        &report.corrections,
                        options.use_colors,
                        width,
                    ),
                    None => output::format_no_result(&report.source, report.observation.method()),
                })
                .collect();
            if !blocks.is_empty() {
                println!("{}", blocks.join("\n\n"));
            }
        }
        OutputFormat::Json => match output::render_json(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                return EXIT_INPUT;
            }
        },
    }

    if let Some(path) = output_path {
        if let Err(e) = output::write_reports(path, &reports) {
            eprintln!("Error: {:#}", e);
            return EXIT_INPUT;
        }
    }

    if any_failed {
        EXIT_INPUT
    } else if any_missing {
        EXIT_NO_RESULT
    } else {
        EXIT_SUCCESS
    }
}

fn assess_file(path: &Path, estimate: Option<&PostureEstimate>, options: &AssessOptions) -> FileOutcome {
    let source = path.display().to_string();

    let mut observation = match load_observation(path) {
        Ok(observation) => observation,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return FileOutcome::Failed;
        }
    };

    if let Some(estimate) = estimate {
        let applied = apply_estimate(&mut observation, estimate);
        tracing::debug!(source = %source, ?applied, "merged estimate");
    }

    if let Err(problems) = validate_observation(&observation) {
        let label = if options.strict { "error" } else { "warning" };
        for problem in &problems {
            eprintln!("{}: {}: {}", label, source, problem);
        }
        if options.strict {
            return FileOutcome::Failed;
        }
    }

    let assessment = ergoscore::assess(&observation, options.locale);
    let corrections = ergoscore::corrections(
        observation.method(),
        assessment.as_ref(),
        &observation,
        options.locale,
    );

    let missing = assessment.is_none();
    let report = Report::new(source, observation, assessment, corrections);
    if missing {
        FileOutcome::NoResult(report)
    } else {
        FileOutcome::Scored(report)
    }
}

/// Expand glob patterns in order; plain paths are passed through as-is.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(pattern));
            continue;
        }
        let before = paths.len();
        for entry in glob::glob(pattern).with_context(|| format!("Invalid glob pattern '{}'", pattern))? {
            paths.push(entry.with_context(|| format!("Failed to read a match of '{}'", pattern))?);
        }
        if paths.len() == before {
            anyhow::bail!("No files match '{}'", pattern);
        }
    }
    Ok(paths)
}

fn render_template(method: Method) -> Result<String> {
    serde_saphyr::to_string(&Observation::default_for(method))
        .with_context(|| format!("Failed to render {} template", method))
}

//! Fitstat CLI - Command-line interface for fitstat
//!
//! Commands:
//! - transform: Process sensor packages into summaries (batch mode)
//! - run: Process streaming input from stdin (streaming mode)
//! - validate: Validate sensor package shapes
//! - schema: Print schema information

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use fitstat::encoder::SummaryEncoder;
use fitstat::package::{PackageReader, SensorPackage, SCHEMA_VERSION};
use fitstat::report::summary_message;
use fitstat::types::SummaryRecord;
use fitstat::FITSTAT_VERSION;

/// Fitstat - Compute engine for fitness tracker workout summaries
#[derive(Parser)]
#[command(name = "fitstat")]
#[command(version = FITSTAT_VERSION)]
#[command(about = "Transform raw sensor packages into workout summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process sensor packages into summaries (batch mode)
    Transform {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Process streaming input from stdin (one package per line)
    Run {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Flush output after each record
        #[arg(long, default_value = "true")]
        flush: bool,
    },

    /// Validate sensor package shapes
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,

        /// Output as JSON schema
        #[arg(long)]
        json_schema: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One fixed-template summary line per package
    Text,
    /// Newline-delimited JSON (one summary record per line)
    Ndjson,
    /// JSON array of summary records
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (fitstat.sensor_package.v1)
    Input,
    /// Output schema (fitstat.summary.v1)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FitstatCliError> {
    match cli.command {
        Commands::Transform {
            input,
            output,
            input_format,
            output_format,
        } => cmd_transform(&input, &output, input_format, output_format),

        Commands::Run {
            output_format,
            flush,
        } => cmd_run(output_format, flush),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Schema {
            schema_type,
            json_schema,
        } => cmd_schema(schema_type, json_schema),
    }
}

fn cmd_transform(
    input: &PathBuf,
    output: &PathBuf,
    input_format: InputFormat,
    output_format: OutputFormat,
) -> Result<(), FitstatCliError> {
    let input_data = read_input(input)?;

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };

    if packages.is_empty() {
        return Err(FitstatCliError::NoPackages);
    }

    let output_data = render_packages(&packages, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{output_data}");
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_run(output_format: OutputFormat, flush: bool) -> Result<(), FitstatCliError> {
    if atty::is(atty::Stream::Stdin) {
        return Err(FitstatCliError::StdinIsTty);
    }

    let encoder = SummaryEncoder::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let package: SensorPackage = serde_json::from_str(trimmed)
            .map_err(|e| FitstatCliError::ParseError(format!("Failed to parse package: {e}")))?;

        let output = render_one(&package, &encoder, &output_format)?;
        writeln!(stdout, "{output}")?;
        if flush {
            stdout.flush()?;
        }
    }

    Ok(())
}

fn cmd_validate(
    input: &PathBuf,
    input_format: InputFormat,
    json: bool,
) -> Result<(), FitstatCliError> {
    let input_data = read_input(input)?;

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };

    let issues = PackageReader::validate_packages(&packages);

    let report = ValidationReport {
        total_packages: packages.len(),
        valid_packages: packages.len() - issues.len(),
        invalid_packages: issues.len(),
        errors: issues
            .iter()
            .map(|issue| ValidationErrorDetail {
                index: issue.index,
                workout_type: issue.workout_type.clone(),
                error: issue.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!(
                    "  - Package {} (index {}): {}",
                    err.workout_type, err.index, err.error
                );
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(FitstatCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType, json_schema: bool) -> Result<(), FitstatCliError> {
    match schema_type {
        SchemaType::Input => {
            if json_schema {
                println!("{}", get_input_json_schema());
            } else {
                println!("Input Schema: {SCHEMA_VERSION}");
                println!();
                println!("A sensor package carries a workout code and positional values:");
                println!();
                println!("  workout_type - three-letter tag: RUN, WLK, SWM");
                println!("  data         - ordered numeric values, bound positionally:");
                println!();
                println!("  RUN: [action_count, duration_hours, weight_kg]");
                println!("  WLK: [action_count, duration_hours, weight_kg, height_cm]");
                println!("  SWM: [action_count, duration_hours, weight_kg, pool_length_m, pool_laps]");
            }
        }
        SchemaType::Output => {
            if json_schema {
                println!("{}", get_output_json_schema());
            } else {
                println!("Output Schema: fitstat.summary.v1");
                println!();
                println!("A summary record contains:");
                println!();
                println!("- record_version: Schema version");
                println!("- producer: {{ name, version, instance_id }}");
                println!("- workout_type: Source workout code");
                println!("- computed_at_utc: Computation timestamp");
                println!("- summary: {{ activity_label, duration_hours, distance_km,");
                println!("             mean_speed_kmh, calories }}");
            }
        }
    }

    Ok(())
}

// Helper functions

fn read_input(input: &PathBuf) -> Result<String, FitstatCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn render_one(
    package: &SensorPackage,
    encoder: &SummaryEncoder,
    format: &OutputFormat,
) -> Result<String, FitstatCliError> {
    let workout = package.resolve()?;
    let summary = workout.summary();

    match format {
        OutputFormat::Text => Ok(summary_message(&summary)),
        OutputFormat::Ndjson | OutputFormat::Json => {
            let record = encoder.encode(workout.code(), summary);
            Ok(serde_json::to_string(&record)?)
        }
        OutputFormat::JsonPretty => {
            let record = encoder.encode(workout.code(), summary);
            Ok(serde_json::to_string_pretty(&record)?)
        }
    }
}

fn render_packages(
    packages: &[SensorPackage],
    format: &OutputFormat,
) -> Result<String, FitstatCliError> {
    let encoder = SummaryEncoder::new();

    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = Vec::new();
            for package in packages {
                let summary = package.resolve()?.summary();
                lines.push(summary_message(&summary));
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for package in packages {
                lines.push(render_one(package, &encoder, &OutputFormat::Ndjson)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let mut records: Vec<SummaryRecord> = Vec::new();
            for package in packages {
                let workout = package.resolve()?;
                records.push(encoder.encode(workout.code(), workout.summary()));
            }
            if matches!(format, OutputFormat::JsonPretty) {
                Ok(serde_json::to_string_pretty(&records)?)
            } else {
                Ok(serde_json::to_string(&records)?)
            }
        }
    }
}

fn get_input_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": SCHEMA_VERSION,
        "description": "Fitstat sensor package schema",
        "type": "object",
        "required": ["workout_type", "data"],
        "properties": {
            "schema_version": {
                "type": "string",
                "const": SCHEMA_VERSION
            },
            "workout_type": {
                "type": "string",
                "enum": ["RUN", "WLK", "SWM"]
            },
            "data": {
                "type": "array",
                "items": { "type": "number" },
                "minItems": 3,
                "maxItems": 5
            }
        }
    })
    .to_string()
}

fn get_output_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "fitstat.summary.v1",
        "description": "Fitstat summary record schema",
        "type": "object",
        "required": ["record_version", "producer", "workout_type", "computed_at_utc", "summary"],
        "properties": {
            "record_version": { "type": "string" },
            "producer": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "version": { "type": "string" },
                    "instance_id": { "type": "string" }
                }
            },
            "workout_type": {
                "type": "string",
                "enum": ["RUN", "WLK", "SWM"]
            },
            "computed_at_utc": { "type": "string" },
            "summary": {
                "type": "object",
                "required": ["activity_label", "duration_hours", "distance_km", "mean_speed_kmh", "calories"],
                "properties": {
                    "activity_label": { "type": "string" },
                    "duration_hours": { "type": "number" },
                    "distance_km": { "type": "number" },
                    "mean_speed_kmh": { "type": "number" },
                    "calories": { "type": "number" }
                }
            }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum FitstatCliError {
    Io(io::Error),
    Compute(fitstat::ComputeError),
    Json(serde_json::Error),
    NoPackages,
    ValidationFailed(usize),
    StdinIsTty,
    ParseError(String),
}

impl From<io::Error> for FitstatCliError {
    fn from(e: io::Error) -> Self {
        FitstatCliError::Io(e)
    }
}

impl From<fitstat::ComputeError> for FitstatCliError {
    fn from(e: fitstat::ComputeError) -> Self {
        FitstatCliError::Compute(e)
    }
}

impl From<serde_json::Error> for FitstatCliError {
    fn from(e: serde_json::Error) -> Self {
        FitstatCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<FitstatCliError> for CliError {
    fn from(e: FitstatCliError) -> Self {
        match e {
            FitstatCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            FitstatCliError::Compute(e) => CliError {
                code: "COMPUTE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'fitstat schema input' for the expected package shape".to_string()),
            },
            FitstatCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            FitstatCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            FitstatCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{count} packages failed validation"),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            FitstatCliError::StdinIsTty => CliError {
                code: "STDIN_IS_TTY".to_string(),
                message: "No input piped to stdin".to_string(),
                hint: Some("Pipe NDJSON packages into 'fitstat run'".to_string()),
            },
            FitstatCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Check input format".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}

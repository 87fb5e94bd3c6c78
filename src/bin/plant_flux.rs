//! plant-flux CLI - Command-line interface for Plant Flux
//!
//! Commands:
//! - derive: Turn a batch of sensor records into health reports
//! - run: Process streaming NDJSON from stdin, one report per record
//! - validate: Validate records against plant.health_log.v1
//! - doctor: Diagnose configuration and environment
//! - schema: Print input or output schema

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use plant_flux::schema::{RecordAdapter, ValidationError, SCHEMA_VERSION};
use plant_flux::types::{HealthReport, SensorReading};
use plant_flux::{
    ComputeError, EngineConfig, HistoricalWindow, PlantProcessor, FLUX_VERSION, PRODUCER_NAME,
};

const LOG_ENV: &str = "PLANT_FLUX_LOG";

/// plant-flux - Deterministic health metrics from plant sensor readings
#[derive(Parser)]
#[command(name = "plant-flux")]
#[command(version = FLUX_VERSION)]
#[command(about = "Derive plant health metrics from sensor readings", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive health reports from a batch of records
    Derive {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        /// Emit a report after every record instead of only the latest
        #[arg(long)]
        all: bool,

        /// Historical window capacity (overrides the config file)
        #[arg(long)]
        window_capacity: Option<usize>,

        /// Load the historical window from file
        #[arg(long)]
        load_window: Option<PathBuf>,

        /// Save the historical window to file after processing
        #[arg(long)]
        save_window: Option<PathBuf>,
    },

    /// Process streaming NDJSON from stdin
    Run {
        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        /// Historical window capacity (overrides the config file)
        #[arg(long)]
        window_capacity: Option<usize>,

        /// Load the historical window from file
        #[arg(long)]
        load_window: Option<PathBuf>,

        /// Save the historical window to file on exit
        #[arg(long)]
        save_window: Option<PathBuf>,

        /// Flush output after each record
        #[arg(long, default_value = "true")]
        flush: bool,
    },

    /// Validate records against the input schema
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

    /// Diagnose configuration and environment
    Doctor {
        /// Check a saved window file
        #[arg(long)]
        window: Option<PathBuf>,

        /// Output as JSON
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
    /// Newline-delimited JSON (one record per line)
    Ndjson,
    /// JSON array of records
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one report per line)
    Ndjson,
    /// JSON array of reports
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (plant.health_log.v1)
    Input,
    /// Output schema (health report)
    Output,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_tracing() {
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => atty::is(atty::Stream::Stderr),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var(LOG_ENV).ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("error") => "error",
            _ => "warn",
        };
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), PlantCliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Derive {
            input,
            output,
            input_format,
            output_format,
            all,
            window_capacity,
            load_window,
            save_window,
        } => {
            let config = load_config(config_path, window_capacity)?;
            cmd_derive(
                &input,
                &output,
                input_format,
                output_format,
                all,
                config,
                load_window.as_deref(),
                save_window.as_deref(),
            )
        }

        Commands::Run {
            output_format,
            window_capacity,
            load_window,
            save_window,
            flush,
        } => {
            let config = load_config(config_path, window_capacity)?;
            cmd_run(
                output_format,
                config,
                load_window.as_deref(),
                save_window.as_deref(),
                flush,
            )
        }

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Doctor { window, json } => cmd_doctor(config_path, window.as_deref(), json),

        Commands::Schema {
            schema_type,
            json_schema,
        } => cmd_schema(schema_type, json_schema),
    }
}

fn load_config(
    path: Option<&Path>,
    window_capacity: Option<usize>,
) -> Result<EngineConfig, PlantCliError> {
    let config = match path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    }
    .with_capacity(window_capacity);
    config.validate()?;
    config.log_config();
    Ok(config)
}

fn build_processor(
    config: EngineConfig,
    load_window: Option<&Path>,
) -> Result<PlantProcessor, PlantCliError> {
    let processor = PlantProcessor::with_window_config(config.window);
    if let Some(window_path) = load_window {
        let window_json = fs::read_to_string(window_path)?;
        processor.load_window(&window_json)?;
        tracing::info!(
            path = %window_path.display(),
            len = processor.window_len(),
            "window loaded"
        );
    }
    Ok(processor)
}

fn save_processor_window(
    processor: &PlantProcessor,
    save_window: Option<&Path>,
) -> Result<(), PlantCliError> {
    if let Some(window_path) = save_window {
        let window_json = processor.save_window()?;
        fs::write(window_path, window_json)?;
        tracing::info!(path = %window_path.display(), "window saved");
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String, PlantCliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn parse_records(data: &str, format: &InputFormat) -> Result<Vec<SensorReading>, PlantCliError> {
    let readings = match format {
        InputFormat::Ndjson => RecordAdapter::parse_ndjson(data)?,
        InputFormat::Json => RecordAdapter::parse_array(data)?,
    };
    Ok(readings)
}

#[allow(clippy::too_many_arguments)]
fn cmd_derive(
    input: &Path,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    all: bool,
    config: EngineConfig,
    load_window: Option<&Path>,
    save_window: Option<&Path>,
) -> Result<(), PlantCliError> {
    let input_data = read_input(input)?;
    let readings = parse_records(&input_data, &input_format)?;

    if readings.is_empty() {
        return Err(PlantCliError::NoRecords);
    }
    RecordAdapter::ensure_valid(&readings)?;

    let processor = build_processor(config, load_window)?;
    let mut reports: Vec<HealthReport> = Vec::new();

    for reading in readings {
        let observed_at = reading.timestamp;
        processor.ingest(reading);
        if all {
            // Each intermediate report is computed as of its own reading
            reports.extend(processor.health_report(observed_at));
        }
    }

    if !all {
        reports.extend(processor.health_report(Utc::now()));
    }
    tracing::info!(
        reports = reports.len(),
        window_len = processor.window_len(),
        "derive complete"
    );

    save_processor_window(&processor, save_window)?;

    let output_data = format_output(&reports, &output_format)?;
    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_run(
    output_format: OutputFormat,
    config: EngineConfig,
    load_window: Option<&Path>,
    save_window: Option<&Path>,
    flush: bool,
) -> Result<(), PlantCliError> {
    let processor = build_processor(config, load_window)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut processed = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let reading = RecordAdapter::parse_record(trimmed)?;
        reading.validate()?;
        processor.ingest(reading);
        processed += 1;

        if let Some(report) = processor.health_report(Utc::now()) {
            let output = format_output(std::slice::from_ref(&report), &output_format)?;
            write!(stdout, "{}", output)?;
            if flush {
                stdout.flush()?;
            }
        }
    }

    stdout.flush()?;
    tracing::info!(processed, "stream closed");

    save_processor_window(&processor, save_window)
}

fn cmd_validate(input: &Path, input_format: InputFormat, json: bool) -> Result<(), PlantCliError> {
    let input_data = read_input(input)?;
    let readings = parse_records(&input_data, &input_format)?;

    let results = RecordAdapter::validate_records(&readings);

    let report = ValidationReport {
        total_records: readings.len(),
        valid_records: readings.len() - results.len(),
        invalid_records: results.len(),
        errors: results
            .iter()
            .map(|r| ValidationErrorDetail {
                index: r.index,
                record_id: r.record_id,
                error: r.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total records:   {}", report.total_records);
        println!("Valid records:   {}", report.valid_records);
        println!("Invalid records: {}", report.invalid_records);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!(
                    "  - Record {} (index {}): {}",
                    err.record_id, err.index, err.error
                );
            }
        }
    }

    if report.invalid_records > 0 {
        Err(PlantCliError::ValidationFailed(report.invalid_records))
    } else {
        Ok(())
    }
}

fn cmd_doctor(
    config_path: Option<&Path>,
    window: Option<&Path>,
    json: bool,
) -> Result<(), PlantCliError> {
    let mut checks: Vec<DoctorCheck> = vec![
        DoctorCheck::ok("flux_version", format!("Plant Flux version {}", FLUX_VERSION)),
        DoctorCheck::ok("schema_version", format!("Input schema: {}", SCHEMA_VERSION)),
    ];

    match config_path {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => checks.push(DoctorCheck::ok(
                "config",
                format!(
                    "Config valid (window capacity {}, retention {})",
                    config.window.capacity,
                    describe_retention(config.window.retention_hours)
                ),
            )),
            Err(e) => checks.push(DoctorCheck::error("config", e.to_string())),
        },
        None => {
            let config = EngineConfig::default();
            checks.push(DoctorCheck::ok(
                "config",
                format!(
                    "Using defaults (window capacity {}, retention {})",
                    config.window.capacity,
                    describe_retention(config.window.retention_hours)
                ),
            ));
        }
    }

    if let Some(window_path) = window {
        if !window_path.exists() {
            checks.push(DoctorCheck::warning("window", "Window file does not exist"));
        } else {
            match fs::read_to_string(window_path) {
                Ok(content) => match HistoricalWindow::from_json(&content) {
                    Ok(window) => checks.push(DoctorCheck::ok(
                        "window",
                        format!("Window file valid ({} readings)", window.len()),
                    )),
                    Err(e) => {
                        checks.push(DoctorCheck::error("window", format!("Invalid window JSON: {}", e)))
                    }
                },
                Err(e) => checks.push(DoctorCheck::error(
                    "window",
                    format!("Cannot read window file: {}", e),
                )),
            }
        }
    }

    let log_filter = env::var("RUST_LOG")
        .or_else(|_| env::var(LOG_ENV))
        .unwrap_or_else(|_| "warn (default)".to_string());
    checks.push(DoctorCheck::ok("log_filter", format!("Log filter: {}", log_filter)));

    let stdin_message = if atty::is(atty::Stream::Stdin) {
        "stdin is a TTY (interactive mode)"
    } else {
        "stdin is a pipe (streaming mode ready)"
    };
    checks.push(DoctorCheck::ok("stdin", stdin_message));

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: FLUX_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Plant Flux Doctor Report");
        println!("========================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(PlantCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

fn describe_retention(retention_hours: Option<i64>) -> String {
    match retention_hours {
        Some(hours) => format!("{}h", hours),
        None => "unbounded".to_string(),
    }
}

fn cmd_schema(schema_type: SchemaType, json_schema: bool) -> Result<(), PlantCliError> {
    match schema_type {
        SchemaType::Input => {
            if json_schema {
                println!("{}", input_json_schema());
            } else {
                println!("Input Schema: {}", SCHEMA_VERSION);
                println!();
                println!("One record per sensor sample, in arrival order:");
                println!();
                println!("- id: integer, non-negative");
                println!("- created_at: RFC 3339 timestamp (alias: timestamp)");
                println!("- plant_id: string, optional");
                println!("- temperature: degrees C, optional (default 25)");
                println!("- humidity: percent, optional (default 60)");
                println!("- soil_moisture: raw 0-1023, optional (default 512)");
                println!("- vibration: raw, optional (default 0)");
                println!("- bio_signal: raw, optional (default 500)");
                println!("- stress_type: string label, optional");
                println!();
                println!("Numeric fields must be finite. Missing fields are defaulted.");
            }
        }
        SchemaType::Output => {
            if json_schema {
                println!("{}", output_json_schema());
            } else {
                println!("Output Schema: health report");
                println!();
                println!("- report_version: Schema version");
                println!("- producer: {{ name, version, instance_id }}");
                println!("- provenance: {{ plant_id, reading_id, observed_at_utc, computed_at_utc, window_len }}");
                println!("- quality: {{ coverage, freshness_sec, defaulted_fields }}");
                println!("- metrics: {{ heatStressIndex, soilDryness, vibrationStressScore,");
                println!("             bioSignalStability, plantStressIndex, stressCauses,");
                println!("             confidenceScore, suitabilityScore, stressDuration,");
                println!("             recoveryRate, diseaseRisk, irrigationRecommendation }}");
                println!("- status: {{ overall, metrics, sensors }}");
            }
        }
    }

    Ok(())
}

fn format_output(reports: &[HealthReport], format: &OutputFormat) -> Result<String, PlantCliError> {
    match format {
        OutputFormat::Ndjson => {
            let mut output = String::new();
            for report in reports {
                output.push_str(&serde_json::to_string(report)?);
                output.push('\n');
            }
            Ok(output)
        }
        OutputFormat::Json => Ok(serde_json::to_string(reports)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(reports)? + "\n"),
    }
}

fn input_json_schema() -> String {
    let optional_number = serde_json::json!({ "type": ["number", "null"] });
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": SCHEMA_VERSION,
        "description": "Plant sensor reading",
        "type": "object",
        "required": ["id", "created_at"],
        "properties": {
            "id": { "type": "integer", "minimum": 0 },
            "created_at": { "type": "string", "format": "date-time" },
            "plant_id": { "type": ["string", "null"] },
            "temperature": optional_number,
            "humidity": optional_number,
            "soil_moisture": optional_number,
            "vibration": optional_number,
            "bio_signal": optional_number,
            "stress_type": { "type": ["string", "null"] }
        }
    })
    .to_string()
}

fn output_json_schema() -> String {
    let level = serde_json::json!({ "type": "string", "enum": ["healthy", "warning", "critical"] });
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "plant.health_report",
        "description": "Plant Flux health report",
        "type": "object",
        "required": ["report_version", "producer", "provenance", "quality", "metrics", "status"],
        "properties": {
            "report_version": { "type": "string" },
            "producer": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "version": { "type": "string" },
                    "instance_id": { "type": "string" }
                }
            },
            "provenance": {
                "type": "object",
                "properties": {
                    "plant_id": { "type": ["string", "null"] },
                    "reading_id": { "type": "integer" },
                    "observed_at_utc": { "type": "string" },
                    "computed_at_utc": { "type": "string" },
                    "window_len": { "type": "integer" }
                }
            },
            "quality": {
                "type": "object",
                "properties": {
                    "coverage": { "type": "number" },
                    "freshness_sec": { "type": "integer" },
                    "defaulted_fields": { "type": "array", "items": { "type": "string" } }
                }
            },
            "metrics": {
                "type": "object",
                "properties": {
                    "heatStressIndex": { "type": "number" },
                    "soilDryness": { "type": "number" },
                    "vibrationStressScore": { "type": "number" },
                    "bioSignalStability": { "type": "number" },
                    "plantStressIndex": { "type": "number" },
                    "stressCauses": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "type": { "type": "string" },
                                "severity": { "type": "string", "enum": ["medium", "high"] },
                                "color": { "type": "string" }
                            }
                        }
                    },
                    "confidenceScore": { "type": "number" },
                    "suitabilityScore": { "type": "number" },
                    "stressDuration": { "type": "string", "pattern": "^\\d+h \\d+m$" },
                    "recoveryRate": { "type": "integer" },
                    "diseaseRisk": { "type": "number" },
                    "irrigationRecommendation": {
                        "type": "string",
                        "enum": ["optimal", "water_soon", "immediate"]
                    }
                }
            },
            "status": {
                "type": "object",
                "properties": {
                    "overall": level,
                    "metrics": { "type": "object" },
                    "sensors": { "type": "object" }
                }
            }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum PlantCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    Validation(ValidationError),
    NoRecords,
    ValidationFailed(usize),
    DoctorFailed,
}

impl From<io::Error> for PlantCliError {
    fn from(e: io::Error) -> Self {
        PlantCliError::Io(e)
    }
}

impl From<ComputeError> for PlantCliError {
    fn from(e: ComputeError) -> Self {
        PlantCliError::Compute(e)
    }
}

impl From<serde_json::Error> for PlantCliError {
    fn from(e: serde_json::Error) -> Self {
        PlantCliError::Json(e)
    }
}

impl From<ValidationError> for PlantCliError {
    fn from(e: ValidationError) -> Self {
        PlantCliError::Validation(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(code: &str, message: String, hint: &str) -> Self {
        Self {
            code: code.to_string(),
            message,
            hint: Some(hint.to_string()),
        }
    }
}

impl From<PlantCliError> for CliError {
    fn from(e: PlantCliError) -> Self {
        match e {
            PlantCliError::Io(e) => {
                CliError::new("IO_ERROR", e.to_string(), "Check file paths and permissions")
            }
            PlantCliError::Compute(e) => {
                let (code, hint) = match &e {
                    ComputeError::ParseError(_) | ComputeError::JsonError(_) => (
                        "PARSE_ERROR",
                        "Ensure input matches plant.health_log.v1 ('plant-flux schema input')",
                    ),
                    ComputeError::InvalidRecord(_) => {
                        ("INVALID_RECORD", "Run 'plant-flux validate' for details")
                    }
                    ComputeError::EncodingError(_) => {
                        ("ENCODING_ERROR", "Report this as a bug with the input attached")
                    }
                    ComputeError::IngestError(_) => ("INGEST_ERROR", "Check the ingestion feed"),
                    ComputeError::InvalidConfig(_) => (
                        "INVALID_CONFIG",
                        "Window capacity must be >= 1 and retention_hours > 0",
                    ),
                };
                CliError::new(code, e.to_string(), hint)
            }
            PlantCliError::Json(e) => CliError::new("JSON_ERROR", e.to_string(), "Check JSON syntax"),
            PlantCliError::Validation(e) => CliError::new(
                "VALIDATION_ERROR",
                e.to_string(),
                "Run 'plant-flux validate' for details",
            ),
            PlantCliError::NoRecords => CliError::new(
                "NO_RECORDS",
                "No records found in input".to_string(),
                "Ensure input file is not empty",
            ),
            PlantCliError::ValidationFailed(count) => CliError::new(
                "VALIDATION_FAILED",
                format!("{} records failed validation", count),
                "Fix validation errors and retry",
            ),
            PlantCliError::DoctorFailed => CliError::new(
                "DOCTOR_FAILED",
                "One or more health checks failed".to_string(),
                "Review the doctor report for details",
            ),
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_records: usize,
    valid_records: usize,
    invalid_records: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    record_id: i64,
    error: String,
}

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

impl DoctorCheck {
    fn ok(name: &str, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Ok, message)
    }

    fn warning(name: &str, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Warning, message)
    }

    fn error(name: &str, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Error, message)
    }

    fn with_status(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

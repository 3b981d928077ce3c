//! CLI entry point for the district scorer.
//!
//! Provides subcommands for running the scoring pipeline, explaining one
//! district's scores, and listing persisted alerts.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use district_scorer::alerts::alerts_for;
use district_scorer::alerts::filter::AlertFilter;
use district_scorer::alerts::types::{AlertStatus, AlertSummary, Severity};
use district_scorer::config::{ALERTS_FILE, DISTRICTS_FILE, PipelineConfig};
use district_scorer::pipeline;
use district_scorer::scoring::aggregate::breakdown;
use district_scorer::scoring::categories::evaluate;
use district_scorer::scoring::grade::level;
use district_scorer::scoring::score_district;
use district_scorer::scoring::types::Category;
use district_scorer::store;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "district_scorer")]
#[command(about = "Scores districts from raw indicators and raises threshold alerts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load districts, score them, derive alerts and write both documents
    Run {
        /// Directory containing districts.json and alerts.json
        #[arg(short, long, env = "DISTRICT_INPUT_DIR", default_value = "inputs")]
        input_dir: PathBuf,

        /// Directory to write scores.json and alerts.json into
        #[arg(short, long, env = "DISTRICT_OUTPUT_DIR", default_value = "public/data")]
        output_dir: PathBuf,

        /// Optional: also write a flat CSV table of the scores
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show how one district's scores are built up
    Explain {
        /// District id as it appears in districts.json
        #[arg(value_name = "DISTRICT_ID")]
        district_id: String,

        /// Directory containing districts.json
        #[arg(short, long, env = "DISTRICT_INPUT_DIR", default_value = "inputs")]
        input_dir: PathBuf,
    },
    /// List alerts from a previously written alerts document
    ListAlerts {
        /// Directory containing the output alerts.json
        #[arg(short, long, env = "DISTRICT_OUTPUT_DIR", default_value = "public/data")]
        output_dir: PathBuf,

        #[arg(long, value_enum)]
        severity: Option<SeverityArg>,

        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        #[arg(long)]
        source: Option<String>,

        #[arg(short, long)]
        district: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeverityArg {
    Critical,
    Warning,
    Info,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Critical => Severity::Critical,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Info => Severity::Info,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Resolved,
}

impl From<StatusArg> for AlertStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => AlertStatus::Active,
            StatusArg::Resolved => AlertStatus::Resolved,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/district_scorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("district_scorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input_dir,
            output_dir,
            csv,
        } => {
            let mut config = PipelineConfig::new(input_dir, output_dir);
            if let Some(path) = csv {
                config = config.with_csv(path);
            }

            info!("{}", "=".repeat(50));
            let summary = pipeline::run(&config, Utc::now())?;
            info!(
                districts = summary.districts,
                new_alerts = summary.new_alerts,
                total_alerts = summary.total_alerts,
                "Scoring run completed successfully"
            );
            info!("{}", "=".repeat(50));
        }
        Commands::Explain {
            district_id,
            input_dir,
        } => {
            explain(&input_dir.join(DISTRICTS_FILE), &district_id)?;
        }
        Commands::ListAlerts {
            output_dir,
            severity,
            status,
            source,
            district,
        } => {
            let filter = AlertFilter {
                severity: severity.map(Severity::from),
                status: status.map(AlertStatus::from),
                source,
                district_id: district,
            };
            list_alerts(&output_dir.join(ALERTS_FILE), &filter)?;
        }
    }

    Ok(())
}

/// Logs every band that fired for one district, its weighted breakdown and
/// the alerts a run would raise for it.
#[tracing::instrument(skip(districts_path))]
fn explain(districts_path: &Path, district_id: &str) -> Result<()> {
    let districts = store::load_districts(districts_path)?;
    let district = districts
        .get(district_id)
        .with_context(|| format!("district '{district_id}' not found in input"))?;

    for category in Category::ALL {
        let outcome = evaluate(district, category);
        for adj in &outcome.adjustments {
            info!(
                %category,
                indicator = adj.indicator,
                value = adj.value,
                delta = adj.delta,
                "Band applied"
            );
        }
        if outcome.adjustments.is_empty() {
            info!(%category, "No bands applied, base score kept");
        }
    }

    let record = score_district(district_id, district, Utc::now());
    for row in breakdown(&record.categories) {
        info!(
            category = %row.category,
            score = row.score,
            level = %level(row.score),
            weight = row.weight,
            weighted_score = row.weighted_score,
            "Category"
        );
    }
    info!(
        overall = record.overall,
        level = %level(record.overall),
        "Overall score"
    );

    for alert in alerts_for(&record, record.last_updated) {
        warn!(severity = %alert.severity, title = %alert.title, "Would raise alert");
    }

    Ok(())
}

#[tracing::instrument(skip(filter), fields(path = %path.display()))]
fn list_alerts(path: &Path, filter: &AlertFilter) -> Result<()> {
    let document = store::read_alerts_document(path)?;
    let selected = filter.apply(&document.alerts);

    for alert in &selected {
        info!(
            id = %alert.id,
            severity = %alert.severity,
            status = %alert.status,
            source = %alert.source,
            district_id = %alert.district_id,
            timestamp = %alert.timestamp,
            "{}",
            alert.message
        );
    }

    let all = AlertSummary::from_alerts(&document.alerts);
    info!(
        matched = selected.len(),
        total = all.total,
        active = all.active,
        resolved = all.resolved,
        "Alert list summary"
    );
    Ok(())
}

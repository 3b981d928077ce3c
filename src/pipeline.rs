//! Run orchestration: `Load -> Score -> Alert -> Persist`.
//!
//! Each stage takes the previous stage's output by value or reference and
//! returns its own; nothing is held in shared mutable state. A failing stage
//! aborts the run and the error is returned to the caller.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, error, info};

use crate::alerts::types::AlertRecord;
use crate::alerts::{append_alerts, derive_alerts};
use crate::config::PipelineConfig;
use crate::district::DistrictSet;
use crate::output::scores_to_csv;
use crate::scoring::score_districts;
use crate::scoring::types::ScoreRecord;
use crate::store::{self, AlertsDocument, ScoresDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Score,
    Alert,
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Load => "load",
            Stage::Score => "score",
            Stage::Alert => "alert",
            Stage::Persist => "persist",
        })
    }
}

/// Everything read from disk at the start of a run.
#[derive(Debug, Default)]
pub struct Inputs {
    pub districts: DistrictSet,
    pub prior_alerts: Vec<AlertRecord>,
}

/// Result of the alert stage.
#[derive(Debug)]
pub struct AlertBatch {
    pub alerts: Vec<AlertRecord>,
    pub new_alerts: usize,
}

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub districts: usize,
    pub new_alerts: usize,
    pub total_alerts: usize,
}

#[tracing::instrument(skip_all)]
pub fn load(config: &PipelineConfig) -> Result<Inputs> {
    info!("Loading input data");
    let districts = store::load_districts(&config.districts_input())?;
    let prior_alerts = store::load_alerts(&config.alerts_input())?;
    Ok(Inputs {
        districts,
        prior_alerts,
    })
}

#[tracing::instrument(skip_all, fields(districts = districts.len()))]
pub fn score(districts: &DistrictSet, now: DateTime<Utc>) -> Vec<ScoreRecord> {
    info!("Calculating district scores");
    let scores = score_districts(districts, now);
    info!(count = scores.len(), "Calculated district scores");
    scores
}

#[tracing::instrument(skip_all, fields(prior = prior.len()))]
pub fn alert(prior: Vec<AlertRecord>, scores: &[ScoreRecord], now: DateTime<Utc>) -> AlertBatch {
    info!("Generating alerts");
    let fresh = derive_alerts(scores, now);
    let new_alerts = fresh.len();
    info!(new_alerts, "Generated new alerts");
    AlertBatch {
        alerts: append_alerts(prior, fresh),
        new_alerts,
    }
}

/// Every output file of a run, rendered to bytes.
#[derive(Debug)]
pub struct RenderedOutputs {
    pub scores_json: Vec<u8>,
    pub alerts_json: Vec<u8>,
    /// Present only when a CSV export is configured.
    pub scores_csv: Option<Vec<u8>>,
}

/// Serializes both documents and, when configured, the CSV export. Nothing is
/// written here, so a rendering error leaves every output file untouched.
pub fn render_outputs(
    config: &PipelineConfig,
    scores: Vec<ScoreRecord>,
    alerts: Vec<AlertRecord>,
    now: DateTime<Utc>,
) -> Result<RenderedOutputs> {
    let scores_doc = ScoresDocument::new(scores, now);
    let alerts_doc = AlertsDocument::new(alerts, now);
    let scores_csv = match config.csv_path {
        Some(_) => Some(scores_to_csv(&scores_doc.scores)?),
        None => None,
    };

    Ok(RenderedOutputs {
        scores_json: store::to_json_bytes(&scores_doc)?,
        alerts_json: store::to_json_bytes(&alerts_doc)?,
        scores_csv,
    })
}

/// Writes every output file. All of them are rendered before any file is
/// touched.
#[tracing::instrument(skip_all, fields(output_dir = %config.output_dir().display()))]
pub fn persist(
    config: &PipelineConfig,
    scores: Vec<ScoreRecord>,
    alerts: Vec<AlertRecord>,
    now: DateTime<Utc>,
) -> Result<()> {
    info!("Saving output data");

    let rendered = render_outputs(config, scores, alerts, now)?;

    std::fs::create_dir_all(config.output_dir()).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir().display()
        )
    })?;
    store::write_file(&config.scores_output(), &rendered.scores_json)?;
    store::write_file(&config.alerts_output(), &rendered.alerts_json)?;

    if let (Some(csv_path), Some(csv)) = (&config.csv_path, &rendered.scores_csv) {
        store::write_file(csv_path, csv)?;
    }

    info!(output_dir = %config.output_dir().display(), "Saved output data");
    Ok(())
}

fn stage_failed(stage: Stage) -> impl FnOnce(anyhow::Error) -> anyhow::Error {
    move |e| {
        error!(%stage, error = %format!("{e:#}"), "Stage failed");
        e.context(format!("{stage} stage failed"))
    }
}

/// Runs all four stages in order using `now` as the run clock.
pub fn run(config: &PipelineConfig, now: DateTime<Utc>) -> Result<RunSummary> {
    info!("Starting district scoring run");

    debug!(stage = %Stage::Load, "Entering stage");
    let inputs = load(config).map_err(stage_failed(Stage::Load))?;

    debug!(stage = %Stage::Score, "Entering stage");
    let scores = score(&inputs.districts, now);

    debug!(stage = %Stage::Alert, "Entering stage");
    let batch = alert(inputs.prior_alerts, &scores, now);

    let summary = RunSummary {
        districts: scores.len(),
        new_alerts: batch.new_alerts,
        total_alerts: batch.alerts.len(),
    };

    debug!(stage = %Stage::Persist, "Entering stage");
    persist(config, scores, batch.alerts, now).map_err(stage_failed(Stage::Persist))?;

    Ok(summary)
}

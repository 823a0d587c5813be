//! Tendara Bid Analysis Service
//!
//! Single-invocation batch run: read every bid opening document in the
//! configured input directory, extract and score contracts, and write the
//! raw table, the training feature table, and the run summary.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use tendara_bid_analysis::export;
use tendara_bid_analysis::pipeline::BidAnalysisPipeline;
use tendara_utils::{init_logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    config.validate()?;

    info!("Starting Tendara bid analysis pipeline");

    let mut rng = match config.pipeline.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pipeline = BidAnalysisPipeline::new(&config.pipeline);
    let report = pipeline.run(Path::new(&config.pipeline.input_dir), &mut rng)?;

    info!(
        files = report.files_processed,
        failed = report.files_failed,
        contracts = report.records.len(),
        notices = report.notices.len(),
        skipped_rows = report.rows_skipped,
        "Extraction complete"
    );

    let paths = export::export_all(&report.records, Path::new(&config.pipeline.output_dir))?;
    info!("Contract data written to {}", paths.raw_data.display());
    info!("Training features written to {}", paths.training_data.display());
    info!("Run summary written to {}", paths.summary.display());

    Ok(())
}

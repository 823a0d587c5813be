//! Batch pipeline orchestration.
//!
//! One pass over the input directory: every supported file is read into a
//! raw table, the header row is located, and data rows become contract
//! records. PDF sources without a table fall through to notice field
//! extraction. Failures never stop the batch: a malformed row is skipped
//! with a log line, an unreadable source fails alone.

use std::path::{Path, PathBuf};

use rand::Rng;
use regex::Regex;
use tracing::{debug, error, info, warn};

use tendara_models::{ContractRecord, NoticeFields, NoticeTriage, TechnologyTier};
use tendara_utils::{validate_file_type, validate_model, PipelineConfig, TendaraError, TendaraResult};

use crate::classifier::CategoryClassifier;
use crate::estimator::ValueEstimator;
use crate::notice::NoticeExtractor;
use crate::risk::RiskScorer;
use crate::sources::SourceReader;
use crate::table::{RawBidRow, TableRowParser};

const SUPPORTED_EXTENSIONS: [&str; 4] = ["pdf", "csv", "xlsx", "xls"];

/// A notice-style document that carried no bid table.
#[derive(Debug, Clone)]
pub struct NoticeReport {
    pub source: String,
    pub fields: NoticeFields,
    pub triage: NoticeTriage,
}

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct PipelineReport {
    pub records: Vec<ContractRecord>,
    pub notices: Vec<NoticeReport>,
    pub files_processed: usize,
    pub files_failed: usize,
    pub rows_skipped: usize,
}

pub struct BidAnalysisPipeline {
    reader: SourceReader,
    parser: TableRowParser,
    classifier: CategoryClassifier,
    estimator: ValueEstimator,
    scorer: RiskScorer,
    notice_extractor: NoticeExtractor,
    default_year: u16,
    year_pattern: Regex,
}

impl BidAnalysisPipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            reader: SourceReader::new(),
            parser: TableRowParser::new(),
            classifier: CategoryClassifier::new(),
            estimator: ValueEstimator::new(config.base_value_eur),
            scorer: RiskScorer::new(),
            notice_extractor: NoticeExtractor::new(),
            default_year: config.default_year,
            year_pattern: Regex::new(r"20\d{2}").unwrap(),
        }
    }

    /// Year encoded in the file name, or the configured default.
    pub fn year_from_filename(&self, file_name: &str) -> u16 {
        self.year_pattern
            .find(file_name)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(self.default_year)
    }

    /// Processes every supported file under `input_dir`.
    pub fn run<R: Rng>(&self, input_dir: &Path, rng: &mut R) -> TendaraResult<PipelineReport> {
        if !input_dir.is_dir() {
            return Err(TendaraError::not_found(format!(
                "input directory {}",
                input_dir.display()
            )));
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(input_dir)
            .map_err(|e| TendaraError::source_unreadable(input_dir.display().to_string(), e.to_string()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut report = PipelineReport::default();

        for path in paths {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            if validate_file_type(&file_name, &SUPPORTED_EXTENSIONS).is_err() {
                debug!(file = %file_name, "Skipping unsupported file");
                continue;
            }

            match self.process_file(&path, rng) {
                Ok(outcome) => {
                    info!(
                        file = %file_name,
                        contracts = outcome.records.len(),
                        skipped = outcome.rows_skipped,
                        "Processed source"
                    );
                    report.records.extend(outcome.records);
                    report.notices.extend(outcome.notices);
                    report.rows_skipped += outcome.rows_skipped;
                    report.files_processed += 1;
                }
                Err(e) => {
                    // One bad source never aborts the batch
                    error!(file = %file_name, error = %e, "Failed to process source");
                    report.files_failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Processes a single source file.
    pub fn process_file<R: Rng>(&self, path: &Path, rng: &mut R) -> TendaraResult<FileOutcome> {
        let table = self.reader.read(path)?;
        debug!(file = %table.source, table_id = %table.id, rows = table.rows.len(), "Read source table");
        for warning in &table.warnings {
            warn!(file = %table.source, "{}", warning);
        }

        let year = self.year_from_filename(&table.source);
        let mut outcome = FileOutcome::default();

        match TableRowParser::header_row_index(&table.rows) {
            Some(header_idx) => {
                let (records, skipped) = self.process_rows(&table.rows[header_idx + 1..], year, rng);
                outcome.records = records;
                outcome.rows_skipped = skipped;
            }
            None => {
                debug!(file = %table.source, "No bid table header found");
                if let Some(text) = &table.text {
                    if let Some(notice) = self.analyze_notice(&table.source, text) {
                        outcome.notices.push(notice);
                    }
                }
            }
        }

        Ok(outcome)
    }

    /// Turns data rows into validated contract records.
    pub fn process_rows<R: Rng>(
        &self,
        rows: &[Vec<String>],
        year: u16,
        rng: &mut R,
    ) -> (Vec<ContractRecord>, usize) {
        let mut records = Vec::new();
        let mut skipped = 0;

        for row in rows {
            match self.parser.parse_row(row) {
                Some(raw) => {
                    let record = self.build_record(raw, year, rng);
                    match validate_model(&record) {
                        Ok(()) => records.push(record),
                        Err(e) => {
                            warn!(error = %e, "Dropping row that failed validation");
                            skipped += 1;
                        }
                    }
                }
                None => skipped += 1,
            }
        }

        (records, skipped)
    }

    /// Field-extracts a notice-style document. Returns `None` when nothing
    /// recognizable was found.
    pub fn analyze_notice(&self, source: &str, text: &str) -> Option<NoticeReport> {
        let fields = self.notice_extractor.extract(text);

        let recognized = fields.contract_value.is_some()
            || fields.duration.is_some()
            || fields.risk_level.is_some()
            || fields.strategic_priority.is_some()
            || !fields.requirements.is_empty();
        if !recognized {
            return None;
        }

        let triage = fields.triage();
        info!(source = %source, triage = ?triage, "Extracted notice fields");
        Some(NoticeReport {
            source: source.to_string(),
            fields,
            triage,
        })
    }

    fn build_record<R: Rng>(&self, raw: RawBidRow, year: u16, rng: &mut R) -> ContractRecord {
        let category = self.classifier.classify(&raw.title);
        let estimated_value_eur = self.estimator.estimate(&raw.title, rng);
        let assessment =
            self.scorer
                .assess(&raw.title, category, estimated_value_eur, raw.bidder_count, rng);
        let technology = TechnologyTier::from_title(&raw.title);

        ContractRecord {
            contract_id: raw.contract_id,
            title: raw.title,
            category,
            closing_date: raw.closing_date,
            bidders: raw.bidders,
            country: raw.country,
            bidder_count: raw.bidder_count,
            estimated_value_eur,
            year,
            risk_likelihood: assessment.likelihood,
            risk_impact: assessment.impact,
            risk_score: assessment.score,
            complexity: assessment.complexity,
            is_multinational: raw.is_multinational,
            technology,
        }
    }
}

/// Per-file processing result.
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub records: Vec<ContractRecord>,
    pub notices: Vec<NoticeReport>,
    pub rows_skipped: usize,
}

//! Tendara Bid Analysis
//!
//! Batch pipeline that turns procurement bid opening documents into a typed
//! contract dataset: table rows are parsed into records, classified by
//! keyword, given a heuristic value estimate and a likelihood/impact risk
//! score, and written out as CSV tables plus a JSON summary.

pub mod classifier;
pub mod estimator;
pub mod export;
pub mod notice;
pub mod pipeline;
pub mod risk;
pub mod sources;
pub mod table;

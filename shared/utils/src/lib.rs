pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.pipeline.input_dir, "bid_documents");
        assert_eq!(config.pipeline.output_dir, "analysis_output");
    }

    #[test]
    fn test_error_handling() {
        let error = TendaraError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");

        let error = TendaraError::source_unreadable("missing.pdf", "no such file");
        assert_eq!(error.error_code(), "SOURCE_UNREADABLE");
    }
}

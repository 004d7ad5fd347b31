// Service Layer
// Validates caller input and dispatches to the classification/conversion engines

pub mod document;

pub use document::{extract_text, load_document, DocumentError, DocumentKind};

use thiserror::Error;
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::models::{
    AnalysisReport, AnalyzeRequest, BatchAnalyzeRequest, BatchAnalyzeResponse, BatchItemResult,
    ClassificationResult, ConversionResult, ConvertRequest,
};
use crate::services::config_store::{AppConfig, LimitsConfig};
use crate::services::conversion::TextConverter;
use crate::services::detection::{analyze, analyze_report};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text content is required")]
    EmptyText,
    #[error("Text too long (max {max} characters, got {actual})")]
    TextTooLong { max: usize, actual: usize },
    #[error("Texts must be a non-empty array")]
    EmptyBatch,
    #[error("Maximum {max} texts per batch (got {actual})")]
    BatchTooLarge { max: usize, actual: usize },
}

const EMPTY_ITEM_ERROR: &str = "Empty text";

/// Entry point for callers: request validation, logging, then the engines.
#[derive(Debug, Clone, Default)]
pub struct TextService {
    limits: LimitsConfig,
    converter: TextConverter,
}

impl TextService {
    pub fn new(limits: LimitsConfig, converter: TextConverter) -> Self {
        Self { limits, converter }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.limits.clone(), TextConverter::new(config.conversion.seed))
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    fn validate_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let chars = text.chars().count();
        if chars > self.limits.max_text_chars {
            return Err(ValidationError::TextTooLong {
                max: self.limits.max_text_chars,
                actual: chars,
            });
        }
        Ok(())
    }

    pub fn analyze(&self, req: &AnalyzeRequest) -> Result<ClassificationResult, ValidationError> {
        let request_id = Uuid::new_v4();
        let _span = info_span!("analyze", %request_id).entered();
        if let Err(e) = self.validate_text(&req.text) {
            warn!(error = %e, "analyze.rejected");
            return Err(e);
        }

        let result = analyze(&req.text);
        info!(
            prediction = %result.label,
            confidence = result.confidence,
            word_count = result.word_count,
            "analyze.completed"
        );
        Ok(result)
    }

    pub fn report(&self, req: &AnalyzeRequest) -> Result<AnalysisReport, ValidationError> {
        let request_id = Uuid::new_v4();
        let _span = info_span!("report", %request_id).entered();
        if let Err(e) = self.validate_text(&req.text) {
            warn!(error = %e, "report.rejected");
            return Err(e);
        }

        let report = analyze_report(&req.text);
        info!(
            prediction = %report.result.label,
            confidence = report.result.confidence,
            signals = report.signals.len(),
            "report.completed"
        );
        Ok(report)
    }

    pub fn convert(&self, req: &ConvertRequest) -> Result<ConversionResult, ValidationError> {
        let request_id = Uuid::new_v4();
        let _span = info_span!("convert", %request_id).entered();
        if let Err(e) = self.validate_text(&req.text) {
            warn!(error = %e, "convert.rejected");
            return Err(e);
        }

        let result = self.converter.convert(&req.text);
        info!(
            input_chars = result.original_text.chars().count(),
            output_chars = result.converted_text.chars().count(),
            seeded = self.converter.seed().is_some(),
            "convert.completed"
        );
        Ok(result)
    }

    /// Classify several texts; a bad item is reported in place and never fails the batch.
    pub fn analyze_batch(
        &self,
        req: &BatchAnalyzeRequest,
    ) -> Result<BatchAnalyzeResponse, ValidationError> {
        let request_id = Uuid::new_v4();
        let _span = info_span!("analyze_batch", %request_id).entered();
        if req.texts.is_empty() {
            warn!("analyze_batch.rejected: empty");
            return Err(ValidationError::EmptyBatch);
        }
        if req.texts.len() > self.limits.max_batch_size {
            warn!(count = req.texts.len(), "analyze_batch.rejected: too large");
            return Err(ValidationError::BatchTooLarge {
                max: self.limits.max_batch_size,
                actual: req.texts.len(),
            });
        }

        let results: Vec<BatchItemResult> = req
            .texts
            .iter()
            .enumerate()
            .map(|(index, text)| match self.validate_text(text) {
                Ok(()) => BatchItemResult {
                    index,
                    result: Some(analyze(text)),
                    error: None,
                },
                Err(ValidationError::EmptyText) => BatchItemResult {
                    index,
                    result: None,
                    error: Some(EMPTY_ITEM_ERROR.to_string()),
                },
                Err(e) => BatchItemResult {
                    index,
                    result: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        let failed = results.iter().filter(|r| r.error.is_some()).count();
        info!(count = results.len(), failed, "analyze_batch.completed");

        Ok(BatchAnalyzeResponse {
            total_processed: results.len(),
            results,
        })
    }
}

//! Analysis engine
//!
//! [`AnalysisEngine`] runs the detectors over a text, resolves their
//! candidates into canonical entities, and derives everything the caller
//! sees from that one list: scores, compliance status, distributions and
//! the redacted text.
//!
//! # Examples
//!
//! ```
//! use privlens::analysis::{AnalysisEngine, AnalysisOptions};
//!
//! let engine = AnalysisEngine::new(AnalysisOptions::default())?;
//! let result = engine.analyze("Contact: john@example.com or 9876543210")?;
//!
//! assert_eq!(result.risk_score, 8);
//! assert_eq!(result.safety_score, 92);
//! assert_eq!(result.compliance_status.label(), "SAFE FOR PUBLIC RELEASE");
//! # Ok::<(), privlens::domain::PrivlensError>(())
//! ```

use crate::analysis::{
    audit::{AuditLogger, AuditRecord},
    classifier,
    compliance::{self, ComplianceStatus},
    detector::{CandidateDetector, ContextualDetector, PatternDetector, RuleNameExtractor},
    distribution::Distribution,
    image::{plan_mask, MaskRect, OcrLayout, OcrWord},
    merge,
    models::{CandidateSpan, CanonicalEntity, Category, DetectedEntity, Label},
    recognizer::ModelHandle,
    redaction, scoring,
};
use crate::config::PrivlensConfig;
use crate::domain::{PrivlensError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Per-engine analysis switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Include the redacted text and entity list in results
    pub include_sensitive_output: bool,
    /// Run detectors on separate threads
    pub parallel: bool,
    /// Run the rule-based name extractor
    pub rule_based: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            include_sensitive_output: true,
            parallel: false,
            rule_based: true,
        }
    }
}

/// Result of analyzing one text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub risk_score: u32,
    pub safety_score: u32,
    pub compliance_status: ComplianceStatus,
    pub category_distribution: BTreeMap<Category, usize>,
    pub label_distribution: BTreeMap<Label, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redacted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_entities: Option<Vec<DetectedEntity>>,
    /// Audit entry id, when auditing is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_id: Option<String>,
}

impl AnalysisResult {
    /// Number of entities that survived conflict resolution
    pub fn entity_count(&self) -> usize {
        self.label_distribution.values().sum()
    }
}

/// Result of analyzing an OCR-scanned image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAnalysis {
    pub analysis: AnalysisResult,
    pub masks: Vec<MaskRect>,
}

/// PII analysis pipeline
///
/// Detectors are shared read-only across calls, so one engine can serve
/// concurrent requests behind an `Arc`.
pub struct AnalysisEngine {
    detectors: Vec<Box<dyn CandidateDetector>>,
    options: AnalysisOptions,
    audit_logger: Option<AuditLogger>,
}

impl AnalysisEngine {
    /// Create an engine with the pattern detector and, if enabled, the name rules
    pub fn new(options: AnalysisOptions) -> Result<Self> {
        let mut detectors: Vec<Box<dyn CandidateDetector>> = vec![Box::new(PatternDetector::new()?)];
        if options.rule_based {
            detectors.push(Box::new(RuleNameExtractor::new()?));
        }

        Ok(Self {
            detectors,
            options,
            audit_logger: None,
        })
    }

    /// Create an engine from the application configuration
    ///
    /// The contextual model is only registered here; it loads on first use.
    pub fn from_config(config: &PrivlensConfig) -> Result<Self> {
        let options = AnalysisOptions {
            include_sensitive_output: config.output.include_sensitive_output,
            parallel: config.detection.parallel,
            rule_based: config.detection.rule_based,
        };
        let mut engine = Self::new(options)?;

        let contextual = &config.detection.contextual;
        if contextual.enabled {
            let path = contextual.model_path.clone().ok_or_else(|| {
                PrivlensError::Configuration(
                    "detection.contextual.model_path is required when enabled".to_string(),
                )
            })?;
            engine = engine.with_recognizer(Arc::new(ModelHandle::gazetteer(path)));
        }

        if config.audit.enabled {
            engine = engine.with_audit_logger(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?);
        }

        Ok(engine)
    }

    /// Add the contextual detector over a recognizer handle
    pub fn with_recognizer(self, model: Arc<ModelHandle>) -> Self {
        self.with_detector(Box::new(ContextualDetector::new(model)))
    }

    /// Add a candidate detector
    pub fn with_detector(mut self, detector: Box<dyn CandidateDetector>) -> Self {
        self.detectors.push(detector);
        self
    }

    /// Record every analysis in an audit log
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    pub fn options(&self) -> AnalysisOptions {
        self.options
    }

    /// Number of registered detectors
    pub fn detector_count(&self) -> usize {
        self.detectors.len()
    }

    /// Detect, resolve and classify the entities of `text`
    pub fn detect(&self, text: &str) -> Result<Vec<CanonicalEntity>> {
        let candidates = if self.options.parallel && self.detectors.len() > 1 {
            self.collect_parallel(text)?
        } else {
            self.collect_sequential(text)?
        };

        let candidate_count = candidates.len();
        let resolved = merge::resolve(candidates);
        tracing::debug!(
            candidates = candidate_count,
            resolved = resolved.len(),
            "Resolved candidate spans"
        );

        Ok(classifier::classify(resolved))
    }

    /// Run the full pipeline on `text`
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let started = Instant::now();
        let entities = self.detect(text)?;
        self.build_result(text, &entities, started)
    }

    /// Run the pipeline on the text reconstructed from OCR words and plan the masks
    pub fn analyze_image(
        &self,
        words: impl IntoIterator<Item = OcrWord>,
        padding: u32,
    ) -> Result<ImageAnalysis> {
        let started = Instant::now();
        let layout = OcrLayout::from_words(words);

        let entities = if layout.is_blank() {
            Vec::new()
        } else {
            self.detect(&layout.text)?
        };
        let masks = plan_mask(&layout, &entities, padding);
        tracing::debug!(words = layout.words.len(), masks = masks.len(), "Planned image masks");

        Ok(ImageAnalysis {
            analysis: self.build_result(&layout.text, &entities, started)?,
            masks,
        })
    }

    fn collect_sequential(&self, text: &str) -> Result<Vec<CandidateSpan>> {
        let mut candidates = Vec::new();
        for detector in &self.detectors {
            candidates.extend(detector.detect(text)?);
        }
        Ok(candidates)
    }

    fn collect_parallel(&self, text: &str) -> Result<Vec<CandidateSpan>> {
        let outcomes: Vec<Result<Vec<CandidateSpan>>> = thread::scope(|scope| {
            let handles: Vec<_> = self
                .detectors
                .iter()
                .map(|detector| scope.spawn(move || detector.detect(text)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(PrivlensError::Other("Detector thread panicked".to_string()))
                    })
                })
                .collect()
        });

        let mut candidates = Vec::new();
        for outcome in outcomes {
            candidates.extend(outcome?);
        }
        Ok(candidates)
    }

    fn build_result(
        &self,
        text: &str,
        entities: &[CanonicalEntity],
        started: Instant,
    ) -> Result<AnalysisResult> {
        let risk_score = scoring::compute_risk_score(entities);
        let safety_score = scoring::compute_safety_score(risk_score);
        let compliance_status = compliance::evaluate(risk_score);
        let distribution = Distribution::from_entities(entities);

        let (redacted_text, detected_entities) = if self.options.include_sensitive_output {
            (
                Some(redaction::redact(text, entities)),
                Some(entities.iter().map(CanonicalEntity::to_detected).collect()),
            )
        } else {
            (None, None)
        };

        let processing_time_ms = started.elapsed().as_millis() as u64;
        let analysis_id = match &self.audit_logger {
            Some(logger) => Some(logger.log_analysis(&AuditRecord {
                entities,
                risk_score,
                safety_score,
                compliance_status,
                processing_time_ms,
            })?),
            None => None,
        };

        tracing::info!(
            entities = entities.len(),
            risk_score,
            safety_score,
            compliance_status = %compliance_status,
            processing_time_ms,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            risk_score,
            safety_score,
            compliance_status,
            category_distribution: distribution.categories,
            label_distribution: distribution.labels,
            redacted_text,
            detected_entities,
            analysis_id,
        })
    }
}

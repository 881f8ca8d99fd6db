//! Audit logger for analysis runs

use crate::analysis::compliance::ComplianceStatus;
use crate::analysis::models::CanonicalEntity;
use crate::domain::{PrivlensError, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Outcome of one analysis as seen by the audit log
#[derive(Debug, Clone, Copy)]
pub struct AuditRecord<'a> {
    pub entities: &'a [CanonicalEntity],
    pub risk_score: u32,
    pub safety_score: u32,
    pub compliance_status: ComplianceStatus,
    pub processing_time_ms: u64,
}

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    analysis_id: String,
    timestamp: String,
    entity_count: usize,
    risk_score: u32,
    safety_score: u32,
    compliance_status: ComplianceStatus,
    processing_time_ms: u64,
    entities: Vec<AuditEntity>,
}

/// Audit entity entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditEntity {
    label: String,
    category: String,
    detection_method: String,
    /// SHA-256 hash of the matched value (never log plaintext PII)
    value_hash: String,
}

/// Append-only audit logger
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PrivlensError::Audit(format!(
                    "Failed to create audit log directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Append an entry for one analysis and return its id
    pub fn log_analysis(&self, record: &AuditRecord<'_>) -> Result<String> {
        let entry = AuditLogEntry {
            analysis_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            entity_count: record.entities.len(),
            risk_score: record.risk_score,
            safety_score: record.safety_score,
            compliance_status: record.compliance_status,
            processing_time_ms: record.processing_time_ms,
            entities: record.entities.iter().map(audit_entity).collect(),
        };

        self.write_entry(&entry)?;
        Ok(entry.analysis_id)
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                PrivlensError::Audit(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        let line = if self.json_format {
            serde_json::to_string(entry)?
        } else {
            format!(
                "[{}] Analysis: {} | Entities: {} | Risk: {} | Safety: {} | Status: {} | Time: {}ms",
                entry.timestamp,
                entry.analysis_id,
                entry.entity_count,
                entry.risk_score,
                entry.safety_score,
                entry.compliance_status,
                entry.processing_time_ms
            )
        };

        writeln!(file, "{line}")
            .map_err(|e| PrivlensError::Audit(format!("Failed to write audit entry: {e}")))
    }
}

fn audit_entity(entity: &CanonicalEntity) -> AuditEntity {
    AuditEntity {
        label: entity.label.to_string(),
        category: entity.category.to_string(),
        detection_method: entity.detection_method.to_string(),
        value_hash: hash_value(&entity.value),
    }
}

/// Hash a PII value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{Category, DetectionMethod, Label};
    use tempfile::tempdir;

    fn email_entity() -> CanonicalEntity {
        CanonicalEntity {
            value: "test@example.com".to_string(),
            label: Label::Email,
            category: Category::Personal,
            detection_method: DetectionMethod::Pattern,
            start: 0,
            end: 16,
        }
    }

    fn record(entities: &[CanonicalEntity]) -> AuditRecord<'_> {
        AuditRecord {
            entities,
            risk_score: 3,
            safety_score: 97,
            compliance_status: ComplianceStatus::SafeForPublicRelease,
            processing_time_ms: 4,
        }
    }

    #[test]
    fn test_hash_value() {
        assert_eq!(hash_value("test@example.com"), hash_value("test@example.com"));
        assert_ne!(hash_value("test@example.com"), hash_value("other@example.com"));
        assert_eq!(hash_value("").len(), 64);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested/audit/privlens.log");
        AuditLogger::new(log_path.clone(), true).unwrap();
        assert!(log_path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_json_entry_has_no_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        let entities = vec![email_entity()];
        let first = logger.log_analysis(&record(&entities)).unwrap();
        let second = logger.log_analysis(&record(&entities)).unwrap();
        assert_ne!(first, second);

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("test@example.com"));

        let entry: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(entry["analysis_id"], first.as_str());
        assert_eq!(entry["compliance_status"], "SAFE FOR PUBLIC RELEASE");
        assert_eq!(entry["entities"][0]["label"], "EMAIL");
        assert_eq!(entry["entities"][0]["value_hash"], hash_value("test@example.com"));
    }

    #[test]
    fn test_plain_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        let id = logger.log_analysis(&record(&[email_entity()])).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains(&format!("Analysis: {id}")));
        assert!(content.contains("Status: SAFE FOR PUBLIC RELEASE"));
        assert!(!content.contains("test@example.com"));
    }
}

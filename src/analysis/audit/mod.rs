//! Audit logging module
//!
//! Records one entry per analysis with hashed entity values.

pub mod logger;

pub use logger::{AuditLogger, AuditRecord};

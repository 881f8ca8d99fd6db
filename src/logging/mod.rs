//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! Log events carry counts, scores and timings. Entity values never appear
//! in logs.
//!
//! # Example
//!
//! ```no_run
//! use privlens::logging::init_logging;
//! use privlens::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config)?;
//!
//! tracing::info!("Application started");
//! # Ok::<(), privlens::domain::PrivlensError>(())
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use privlens::log_error_with_context;
/// use privlens::domain::PrivlensError;
///
/// let error = PrivlensError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log the start of an analysis
///
/// # Example
///
/// ```no_run
/// use privlens::log_analysis_start;
///
/// log_analysis_start!("notes.txt", 1024);
/// ```
#[macro_export]
macro_rules! log_analysis_start {
    ($source:expr, $bytes:expr) => {
        tracing::info!(source = %$source, bytes = $bytes, "Starting analysis");
    };
}

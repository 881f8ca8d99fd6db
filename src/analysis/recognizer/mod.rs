//! Entity recognizer collaborator
//!
//! The contextual detector treats the recognizer as a black box that returns
//! labeled spans. [`ModelHandle`] owns the recognizer and loads it lazily,
//! once per process, no matter how many requests race for it.

pub mod gazetteer;

use crate::domain::{PrivlensError, Result};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

pub use gazetteer::GazetteerRecognizer;

/// Span returned by an entity recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedSpan {
    /// Text covered by the span
    pub text: String,
    /// Coarse label as reported by the model (e.g. "PERSON", "ORG", "GPE", "DATE")
    pub label: String,
    /// Start offset
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl RecognizedSpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
            start,
            end,
        }
    }
}

/// Trait for named-entity recognizers
///
/// Implementations must be deterministic for a given model and safe for
/// concurrent read-only use.
pub trait EntityRecognizer: Send + Sync {
    /// Human-readable model identifier
    fn model_id(&self) -> &str;

    /// Recognize entities in `text`
    fn recognize(&self, text: &str) -> Result<Vec<RecognizedSpan>>;
}

type Loader = Box<dyn Fn() -> Result<Arc<dyn EntityRecognizer>> + Send + Sync>;

/// Lazily loaded, shared recognizer handle
///
/// `ensure_loaded` runs the loader at most once at a time: concurrent callers
/// block until the first load finishes and then share its result. A failed
/// load leaves the handle empty so the next request can try again.
pub struct ModelHandle {
    loader: Loader,
    model: OnceCell<Arc<dyn EntityRecognizer>>,
}

impl ModelHandle {
    /// Create a handle that loads its recognizer on first use
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn EntityRecognizer>> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            model: OnceCell::new(),
        }
    }

    /// Create a handle around an already loaded recognizer
    pub fn preloaded(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        let model = OnceCell::new();
        // A fresh cell is always empty
        let _ = model.set(recognizer);
        Self {
            loader: Box::new(|| {
                Err(PrivlensError::ModelUnavailable(
                    "preloaded handle has no loader".to_string(),
                ))
            }),
            model,
        }
    }

    /// Create a handle for a gazetteer model file
    pub fn gazetteer(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        Self::new(move || {
            let recognizer = GazetteerRecognizer::from_file(&path)?;
            Ok(Arc::new(recognizer) as Arc<dyn EntityRecognizer>)
        })
    }

    /// Load the recognizer if needed and return it
    pub fn ensure_loaded(&self) -> Result<Arc<dyn EntityRecognizer>> {
        self.model
            .get_or_try_init(|| {
                let started = Instant::now();
                let model = (self.loader)().map_err(|e| match e {
                    PrivlensError::ModelUnavailable(_) => e,
                    other => PrivlensError::ModelUnavailable(other.to_string()),
                })?;
                tracing::info!(
                    model_id = model.model_id(),
                    load_ms = started.elapsed().as_millis() as u64,
                    "Entity recognizer loaded"
                );
                Ok(model)
            })
            .map(Arc::clone)
    }

    /// Whether the recognizer has been loaded
    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

//! Mask-image command implementation
//!
//! Reads OCR word boxes as JSON, runs the analysis over the reconstructed
//! text and prints the mask rectangles. With `--image` and `--output` the
//! rectangles are also painted onto the scan and saved as PNG.

use crate::analysis::image::{redact_image_file, OcrWord, DEFAULT_MASK_PADDING};
use crate::analysis::{AnalysisEngine, ImageAnalysis};
use crate::cli::{exit_code_for, load_or_default, EXIT_INPUT_ERROR};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the mask-image command
#[derive(Args, Debug)]
pub struct MaskImageArgs {
    /// JSON array of OCR words ({text, left, top, width, height, block, paragraph, line})
    #[arg(long)]
    pub ocr: PathBuf,

    /// Pixels added around each mask rectangle
    #[arg(long, default_value_t = DEFAULT_MASK_PADDING)]
    pub padding: u32,

    /// Scanned image the OCR words were read from
    #[arg(long, value_name = "PATH", requires = "output")]
    pub image: Option<PathBuf>,

    /// Where to write the masked image (PNG)
    #[arg(long, value_name = "PATH", requires = "image")]
    pub output: Option<PathBuf>,
}

impl MaskImageArgs {
    /// Execute the mask-image command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        let words = match read_words(&self.ocr).await {
            Ok(words) => words,
            Err(message) => {
                tracing::warn!(path = %self.ocr.display(), "OCR input rejected");
                eprintln!("❌ {message}");
                return Ok(EXIT_INPUT_ERROR);
            }
        };

        tracing::info!(source = %self.ocr.display(), words = words.len(), "Starting image analysis");

        let padding = self.padding;
        let paths = self.image.clone().zip(self.output.clone());
        let outcome = tokio::task::spawn_blocking(move || -> crate::domain::Result<ImageAnalysis> {
            let engine = AnalysisEngine::from_config(&config)?;
            let analysis = engine.analyze_image(words, padding)?;
            if let Some((input, output)) = &paths {
                redact_image_file(input, output, &analysis.masks)?;
                tracing::info!(output = %output.display(), masks = analysis.masks.len(), "Masked image written");
            }
            Ok(analysis)
        })
        .await?;

        match outcome {
            Ok(image) => {
                println!("{}", serde_json::to_string_pretty(&image)?);
                Ok(0)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Image analysis failed");
                eprintln!("❌ {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}

async fn read_words(path: &Path) -> Result<Vec<OcrWord>, String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read OCR file {}: {e}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid OCR file {}: {e}", path.display()))
}

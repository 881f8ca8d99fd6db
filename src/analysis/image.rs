//! Mask planning for OCR-scanned images
//!
//! The OCR collaborator supplies word boxes; this module rebuilds the page
//! text from them, keeps the byte range of every word, and maps resolved
//! entities back onto the boxes that must be blacked out. The planned
//! rectangles can then be painted onto the scanned image itself.

use crate::analysis::models::CanonicalEntity;
use crate::domain::{PrivlensError, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default padding, in pixels, around each masked word
pub const DEFAULT_MASK_PADDING: u32 = 3;

/// Fill colour for masked regions
const MASK_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Word box as reported by the OCR engine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OcrWord {
    pub text: String,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default, alias = "block_num")]
    pub block: u32,
    #[serde(default, alias = "par_num")]
    pub paragraph: u32,
    #[serde(default, alias = "line_num")]
    pub line: u32,
}

/// OCR word placed in the reconstructed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutWord {
    pub word: OcrWord,
    /// Trimmed word text
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Reconstructed page text with word positions
#[derive(Debug, Clone, Default)]
pub struct OcrLayout {
    pub text: String,
    pub words: Vec<LayoutWord>,
}

impl OcrLayout {
    /// Rebuild the page text from OCR words
    ///
    /// Blank words are dropped. Words on the same line are joined by a
    /// space; a change of block, paragraph or line starts a new line.
    pub fn from_words(words: impl IntoIterator<Item = OcrWord>) -> Self {
        let mut layout = Self::default();
        let mut previous: Option<(u32, u32, u32)> = None;

        for word in words {
            let trimmed = word.text.trim();
            if trimmed.is_empty() {
                continue;
            }

            let position = (word.block, word.paragraph, word.line);
            match previous {
                Some(prev) if prev == position => layout.text.push(' '),
                Some(_) => layout.text.push('\n'),
                None => {}
            }
            previous = Some(position);

            let start = layout.text.len();
            layout.text.push_str(trimmed);
            let text = trimmed.to_string();
            layout.words.push(LayoutWord {
                start,
                end: layout.text.len(),
                text,
                word,
            });
        }

        layout
    }

    /// Whether the page carries any text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Rectangle to fill, in image pixels
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaskRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl MaskRect {
    fn around(word: &OcrWord, padding: u32) -> Self {
        Self {
            left: word.left.saturating_sub(padding),
            top: word.top.saturating_sub(padding),
            right: word.left.saturating_add(word.width).saturating_add(padding),
            bottom: word.top.saturating_add(word.height).saturating_add(padding),
        }
    }
}

/// Rectangles covering every word that belongs to an entity
///
/// Words are matched by offset overlap first. When an entity overlaps no
/// word, its whitespace-split tokens are matched case-insensitively against
/// runs of consecutive words instead.
pub fn plan_mask(layout: &OcrLayout, entities: &[CanonicalEntity], padding: u32) -> Vec<MaskRect> {
    let mut rects = Vec::new();

    for entity in entities {
        let before = rects.len();
        rects.extend(
            layout
                .words
                .iter()
                .filter(|w| w.end > entity.start && w.start < entity.end)
                .map(|w| MaskRect::around(&w.word, padding)),
        );

        if rects.len() == before {
            mask_by_text(layout, &entity.value, padding, &mut rects);
        }
    }

    rects
}

fn mask_by_text(layout: &OcrLayout, value: &str, padding: u32, rects: &mut Vec<MaskRect>) {
    let tokens: Vec<String> = value.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() || tokens.len() > layout.words.len() {
        return;
    }

    for window in layout.words.windows(tokens.len()) {
        let matches = window
            .iter()
            .zip(&tokens)
            .all(|(w, token)| w.text.to_lowercase() == *token);
        if matches {
            rects.extend(window.iter().map(|w| MaskRect::around(&w.word, padding)));
        }
    }
}

/// Fill every rectangle with black, clipped to the image bounds
///
/// Pixels outside the rectangles are left untouched.
pub fn paint_masks(image: &mut RgbaImage, rects: &[MaskRect]) {
    let (width, height) = image.dimensions();

    for rect in rects {
        let right = rect.right.min(width);
        let bottom = rect.bottom.min(height);
        for y in rect.top..bottom {
            for x in rect.left..right {
                image.put_pixel(x, y, MASK_COLOR);
            }
        }
    }
}

/// Paint `rects` onto the image at `input` and write the result to `output` as PNG
pub fn redact_image_file(input: &Path, output: &Path, rects: &[MaskRect]) -> Result<()> {
    let mut image = image::open(input)
        .map_err(|e| PrivlensError::Io(format!("Failed to open image {}: {e}", input.display())))?
        .to_rgba8();

    paint_masks(&mut image, rects);

    image
        .save_with_format(output, ImageFormat::Png)
        .map_err(|e| {
            PrivlensError::Other(format!("Failed to write image {}: {e}", output.display()))
        })?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        masks = rects.len(),
        "Redacted image written"
    );
    Ok(())
}

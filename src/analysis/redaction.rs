//! Placeholder redaction of resolved entities

use crate::analysis::models::CanonicalEntity;

/// Replace every entity's range in `text` with its `[LABEL]` placeholder
///
/// Entities are visited back to front and the output is assembled from the
/// untouched runs between them, so offsets of entities not yet visited stay
/// valid. An entity that overlaps one already applied, or whose range is not
/// a valid slice of `text`, is skipped with a warning.
pub fn redact(text: &str, entities: &[CanonicalEntity]) -> String {
    let mut ordered: Vec<&CanonicalEntity> = entities.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut pieces: Vec<&str> = Vec::with_capacity(ordered.len() * 2 + 1);
    let placeholders: Vec<String> = ordered.iter().map(|e| e.label.placeholder()).collect();
    let mut cursor = text.len();

    for (entity, placeholder) in ordered.iter().zip(&placeholders) {
        if entity.start >= entity.end
            || entity.end > cursor
            || !text.is_char_boundary(entity.start)
            || !text.is_char_boundary(entity.end)
        {
            tracing::warn!(
                label = %entity.label,
                start = entity.start,
                end = entity.end,
                "Skipping entity that cannot be redacted"
            );
            continue;
        }

        pieces.push(&text[entity.end..cursor]);
        pieces.push(placeholder);
        cursor = entity.start;
    }
    pieces.push(&text[..cursor]);

    pieces.iter().rev().copied().collect()
}

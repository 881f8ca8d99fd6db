//! Category and label frequency tables

use crate::analysis::models::{CanonicalEntity, Category, Label};
use serde::Serialize;
use std::collections::BTreeMap;

/// Entity counts per category and per label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub categories: BTreeMap<Category, usize>,
    pub labels: BTreeMap<Label, usize>,
}

impl Distribution {
    /// Tally the entities
    pub fn from_entities(entities: &[CanonicalEntity]) -> Self {
        let mut distribution = Self::default();
        for entity in entities {
            *distribution.categories.entry(entity.category).or_insert(0) += 1;
            *distribution.labels.entry(entity.label).or_insert(0) += 1;
        }
        distribution
    }
}

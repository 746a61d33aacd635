use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generation::generator::GeneratedCopy;
use crate::generation::parser::ContentVariant;
use crate::models::product::ProductDetails;

/// A form submission and the latest copy generated for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: Uuid,
    pub details: ProductDetails,
    /// Raw model output (markdown), shown and downloaded verbatim.
    pub content: String,
    pub variants: Vec<ContentVariant>,
    pub model: String,
    pub regenerations: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GenerationRecord {
    pub fn new(details: ProductDetails, copy: GeneratedCopy) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            details,
            content: copy.content,
            variants: copy.variants,
            model: copy.model,
            regenerations: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the output with a fresh generation from the same inputs.
    pub fn apply_regeneration(&mut self, copy: GeneratedCopy) {
        self.content = copy.content;
        self.variants = copy.variants;
        self.model = copy.model;
        self.regenerations += 1;
        self.updated_at = Utc::now();
    }
}

//! Per-locale flattening of catalog documents into searchable fields.

use diverga_types::{Locale, Localized, SearchableDocument};

use crate::fields::Field;

/// One searchable field with its precomputed length norm.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatField {
    pub text: String,
    /// `1 / sqrt(token count)`, rounded to three decimals.
    pub norm: f64,
}

impl FlatField {
    pub fn new(text: String) -> Self {
        let norm = field_norm(&text);
        Self { text, norm }
    }
}

/// A catalog document flattened for one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDocument {
    /// Position of the source document in the catalog.
    pub doc_index: usize,
    /// Fields in [`Field::ALL`] order.
    pub fields: [FlatField; 4],
}

impl FlatDocument {
    pub fn field(&self, field: Field) -> &FlatField {
        &self.fields[field.index()]
    }
}

/// Flatten every document for every locale.
///
/// Keywords are joined with a space so that each keyword counts towards
/// the field's token count.
pub fn flatten(documents: &[SearchableDocument]) -> Localized<Vec<FlatDocument>> {
    Localized::new(
        flatten_locale(documents, Locale::En),
        flatten_locale(documents, Locale::Ko),
    )
}

fn flatten_locale(documents: &[SearchableDocument], locale: Locale) -> Vec<FlatDocument> {
    documents
        .iter()
        .enumerate()
        .map(|(doc_index, doc)| FlatDocument {
            doc_index,
            fields: [
                FlatField::new(doc.title.get(locale).clone()),
                FlatField::new(doc.id.clone()),
                FlatField::new(doc.keywords.get(locale).join(" ")),
                FlatField::new(doc.description.get(locale).clone()),
            ],
        })
        .collect()
}

fn field_norm(text: &str) -> f64 {
    let tokens = text.split_whitespace().count().max(1) as f64;
    (1000.0 / tokens.sqrt()).round() / 1000.0
}

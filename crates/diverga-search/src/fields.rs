//! Searchable fields and their weights.

use crate::error::SearchError;

/// A searchable field of a flattened document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Id,
    Keywords,
    Description,
}

impl Field {
    /// All fields, in flattening order.
    pub const ALL: [Field; 4] = [Field::Title, Field::Id, Field::Keywords, Field::Description];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Id => "id",
            Field::Keywords => "keywords",
            Field::Description => "description",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Field::Title => 0,
            Field::Id => 1,
            Field::Keywords => 2,
            Field::Description => 3,
        }
    }
}

/// Relative importance of each field.
///
/// Weights are relative; [`FieldWeights::normalized`] rescales them to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f64,
    pub id: f64,
    pub keywords: f64,
    pub description: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 3.0,
            id: 2.0,
            keywords: 2.0,
            description: 1.0,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Id => self.id,
            Field::Keywords => self.keywords,
            Field::Description => self.description,
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        for field in Field::ALL {
            let weight = self.get(field);
            if !weight.is_finite() || weight < 0.0 {
                return Err(SearchError::InvalidWeights(format!(
                    "{} weight must be a non-negative number, got {}",
                    field.as_str(),
                    weight
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(SearchError::InvalidWeights(
                "at least one weight must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn total(&self) -> f64 {
        Field::ALL.iter().map(|&f| self.get(f)).sum()
    }

    /// Weights rescaled to sum to 1, indexed in [`Field::ALL`] order.
    pub fn normalized(&self) -> [f64; 4] {
        let total = self.total();
        Field::ALL.map(|f| self.get(f) / total)
    }
}

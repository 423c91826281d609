use crate::{Catalog, Field};

/// Per-field distinct observed values, in lexicographic (case-sensitive)
/// order — the same order a user-facing option list shows, and the order
/// the one-hot encoding is laid out in.
///
/// Rebuilt whenever the catalog is; read-only afterward. Never contains
/// empty values (validation already dropped those records).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    values: [Vec<String>; 7],
}

impl Vocabulary {
    pub fn build(catalog: &Catalog) -> Vocabulary {
        let values = Field::ALL.map(|field| {
            let mut values: Vec<String> = catalog
                .all()
                .iter()
                .map(|item| item.value(field).to_string())
                .collect();
            values.sort();
            values.dedup();
            values
        });
        Vocabulary { values }
    }

    /// Sorted distinct values of one field.
    #[must_use]
    pub fn values_of(&self, field: Field) -> &[String] {
        &self.values[field as usize]
    }

    /// Position of `value` within its field's sorted values.
    pub(crate) fn position(&self, field: Field, value: &str) -> Option<usize> {
        self.values_of(field)
            .binary_search_by(|v| v.as_str().cmp(value))
            .ok()
    }

    /// Total one-hot dimensionality: sum of vocabulary sizes over all fields.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }
}

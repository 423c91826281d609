use crate::{Catalog, Field, Item};

/// A per-query set of exact-match constraints; unset fields are
/// unconstrained. Transient — built per query, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    required: [Option<String>; 7],
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain one field to an exact value.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.required[field as usize] = Some(value.into());
        self
    }

    /// Set or clear one field's constraint in place.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.required[field as usize] = value;
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.required[field as usize].as_deref()
    }

    /// True when every field is unconstrained.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.required.iter().all(Option::is_none)
    }

    /// Exact, case-sensitive equality on every constrained field.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        Field::ALL.iter().all(|&field| match &self.required[field as usize] {
            Some(required) => item.value(field) == required,
            None => true,
        })
    }

    /// Apply to the catalog, preserving load order. Pure and deterministic:
    /// the same catalog and constraints always produce the same sequence.
    #[must_use]
    pub fn apply(&self, catalog: &Catalog) -> Vec<Item> {
        catalog
            .all()
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

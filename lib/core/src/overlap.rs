//! Tag-overlap recommender: a dependency-free alternate strategy that
//! scores candidates by counting matching categorical fields against a
//! reference item.

use crate::{Catalog, Field, Item};

/// The fixed signature set compared by the overlap score. `occasion`,
/// `price` and `brand` are deliberately excluded from scoring.
pub const SIGNATURE_FIELDS: [Field; 4] = [
    Field::ScentDirection,
    Field::Season,
    Field::Gender,
    Field::Personality,
];

/// Count of signature fields where `candidate` matches `item` exactly.
/// Always in `0..=4`.
#[must_use]
pub fn score(item: &Item, candidate: &Item) -> u32 {
    SIGNATURE_FIELDS
        .iter()
        .filter(|&&field| item.value(field) == candidate.value(field))
        .count() as u32
}

/// Candidates ordered by descending overlap score, ties broken by catalog
/// order (the sort is stable over candidates gathered in catalog order).
/// The reference item is excluded by name. Empty when no other items exist.
#[must_use]
pub fn top_matches(item: &Item, catalog: &Catalog, max_results: usize) -> Vec<Item> {
    let mut scored: Vec<(u32, &Item)> = catalog
        .all()
        .iter()
        .filter(|candidate| candidate.name != item.name)
        .map(|candidate| (score(item, candidate), candidate))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(max_results)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

use crate::recommend::{self, Strategy};
use crate::{
    Catalog, ConstraintSet, Error, Field, Item, RawRecord, Result, SimilarityIndex, Vocabulary,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// One immutable build of catalog, vocabulary and similarity index.
/// Always constructed as a whole so the three can never disagree.
#[derive(Debug)]
struct Generation {
    catalog: Catalog,
    vocabulary: Vocabulary,
    index: Option<SimilarityIndex>,
}

impl Generation {
    fn build(records: Vec<RawRecord>) -> Result<Generation> {
        let catalog = Catalog::load(records)?;
        let vocabulary = Vocabulary::build(&catalog);
        let index = match SimilarityIndex::build(&catalog, &vocabulary) {
            Ok(index) => Some(index),
            // A single-item catalog has no neighbors to rank; the facade
            // falls back to tag overlap.
            Err(Error::InsufficientData { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(Generation {
            catalog,
            vocabulary,
            index,
        })
    }
}

/// The public entry point: filtering, recommendation and vocabulary
/// queries over the current catalog generation.
///
/// Reads are lock-free after cloning the generation `Arc`; a reload builds
/// a complete new generation and swaps the reference atomically, so
/// in-flight readers never observe a half-updated index.
pub struct Engine {
    current: RwLock<Arc<Generation>>,
}

impl Engine {
    /// Build an engine from raw records.
    pub fn load(records: Vec<RawRecord>) -> Result<Engine> {
        let generation = Generation::build(records)?;
        info!(
            items = generation.catalog.len(),
            indexed = generation.index.is_some(),
            "catalog loaded"
        );
        Ok(Engine {
            current: RwLock::new(Arc::new(generation)),
        })
    }

    /// Atomically replace the current generation. On failure the previous
    /// generation keeps serving.
    pub fn reload(&self, records: Vec<RawRecord>) -> Result<()> {
        let generation = Arc::new(Generation::build(records)?);
        info!(items = generation.catalog.len(), "catalog reloaded");
        *self.current.write() = generation;
        Ok(())
    }

    fn generation(&self) -> Arc<Generation> {
        self.current.read().clone()
    }

    /// Items matching the constraints, in catalog load order.
    pub fn filter(&self, constraints: &ConstraintSet) -> Vec<Item> {
        constraints.apply(&self.generation().catalog)
    }

    /// Up to three items similar to `name` (similarity with fallback).
    pub fn recommend(&self, name: &str) -> Result<Vec<Item>> {
        self.recommend_with(name, Strategy::default())
    }

    pub fn recommend_with(&self, name: &str, strategy: Strategy) -> Result<Vec<Item>> {
        let generation = self.generation();
        recommend::recommend(name, &generation.catalog, generation.index.as_ref(), strategy)
    }

    /// Sorted distinct values of one field — filter-menu options.
    pub fn vocabulary(&self, field: Field) -> Vec<String> {
        self.generation().vocabulary.values_of(field).to_vec()
    }

    /// Snapshot of all items in load order.
    pub fn items(&self) -> Vec<Item> {
        self.generation().catalog.all().to_vec()
    }

    pub fn len(&self) -> usize {
        self.generation().catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation().catalog.is_empty()
    }
}

//! # Essenza
//!
//! An in-memory fragrance recommender: deterministic multi-attribute
//! exact filtering plus "items like this one" recommendation, combining
//! one-hot cosine nearest-neighbor search with a tag-overlap fallback.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install essenza
//! essenza --data perfumes.csv filter --brand Dior --season Spring
//! essenza --data perfumes.csv similar "Miss Dior"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use essenza::prelude::*;
//!
//! let records: Vec<RawRecord> = vec![
//!     Item::new("Aria", "Dior", "Female", "Floral", "Spring", "Romantic", "Day", "High"),
//!     Item::new("Nocte", "Dior", "Female", "Floral", "Spring", "Romantic", "Evening", "Low"),
//!     Item::new("Cedrus", "Creed", "Male", "Woody", "Winter", "Bold", "Evening", "High"),
//! ]
//! .into_iter()
//! .map(RawRecord::from)
//! .collect();
//!
//! let engine = Engine::load(records).unwrap();
//! let similar = engine.recommend("Aria").unwrap();
//! assert_eq!(similar[0].name, "Nocte");
//! ```
//!
//! ## Crate Structure
//!
//! - [`essenza_core`] - Catalog, vocabulary, filter, similarity index,
//!   tag-overlap recommender, engine facade
//! - [`essenza_data`] - Semicolon-CSV catalog loader
//! - [`essenza_shops`] - Shop-locator HTTP collaborator

// Re-export core types
pub use essenza_core::{
    Catalog, ConstraintSet, Engine, Error, Field, Item, RawRecord, Result, SimilarityIndex,
    Strategy, Vector, Vocabulary, RECOMMEND_LIMIT, SIGNATURE_FIELDS,
};

// Re-export the loader
pub use essenza_data::{load_engine, load_records, read_records, LoadError};

// Re-export the shop locator
pub use essenza_shops::{Shop, ShopFinder, DEFAULT_LOCATION, MAX_RESULTS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, ConstraintSet, Engine, Error, Field, Item, RawRecord, Result, Shop, ShopFinder,
        SimilarityIndex, Strategy, Vector, Vocabulary,
    };
}

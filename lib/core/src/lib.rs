//! # Essenza Core
//!
//! Core library for the Essenza fragrance recommender.
//!
//! This crate provides the catalog filter and similarity recommender:
//!
//! - [`Catalog`] - Validated, immutable in-memory item table
//! - [`Vocabulary`] - Per-field sorted distinct values (filter options and
//!   one-hot layout)
//! - [`ConstraintSet`] - Exact-match multi-attribute filtering
//! - [`SimilarityIndex`] - One-hot cosine nearest-neighbor search
//! - [`overlap`] - Tag-overlap fallback recommender
//! - [`Engine`] - Facade tying the above together, with atomic reload
//!
//! ## Example
//!
//! ```rust
//! use essenza_core::{ConstraintSet, Engine, Field, Item, RawRecord};
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
//!
//! // Exact-match filtering, catalog order preserved.
//! let florals = engine.filter(&ConstraintSet::new().with(Field::ScentDirection, "Floral"));
//! assert_eq!(florals.len(), 2);
//!
//! // "Items like this one", similarity first with tag-overlap fallback.
//! let similar = engine.recommend("Aria").unwrap();
//! assert_eq!(similar[0].name, "Nocte");
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod index;
pub mod item;
pub mod overlap;
pub mod recommend;
pub mod vector;
pub mod vocabulary;

pub use catalog::Catalog;
pub use engine::Engine;
pub use error::{Error, Result};
pub use filter::ConstraintSet;
pub use index::SimilarityIndex;
pub use item::{Field, Item, RawRecord};
pub use overlap::SIGNATURE_FIELDS;
pub use recommend::{Strategy, RECOMMEND_LIMIT};
pub use vector::Vector;
pub use vocabulary::Vocabulary;

use crate::{Error, Item, RawRecord, Result};
use ahash::AHashMap;
use tracing::debug;

/// The normalized, immutable in-memory catalog.
///
/// Built once from raw records; load order is preserved and later relied
/// on by the filter engine and both recommenders for deterministic output.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    by_name: AHashMap<String, usize>,
}

impl Catalog {
    /// Validate raw records into a catalog.
    ///
    /// Records missing the name or any attribute are dropped (not coerced
    /// to sentinels). Fails if nothing valid remains, or if a name is
    /// duplicated across otherwise-valid records — every duplicate name is
    /// reported, not just the first.
    pub fn load(records: Vec<RawRecord>) -> Result<Catalog> {
        let total = records.len();
        let items: Vec<Item> = records.into_iter().filter_map(Item::from_raw).collect();
        let dropped = total - items.len();
        if dropped > 0 {
            debug!(dropped, kept = items.len(), "dropped incomplete catalog records");
        }
        if items.is_empty() {
            return Err(Error::EmptyCatalog { dropped });
        }

        let mut by_name = AHashMap::with_capacity(items.len());
        let mut duplicates: Vec<String> = Vec::new();
        for (row, item) in items.iter().enumerate() {
            if by_name.insert(item.name.clone(), row).is_some()
                && !duplicates.contains(&item.name)
            {
                duplicates.push(item.name.clone());
            }
        }
        if !duplicates.is_empty() {
            return Err(Error::DuplicateNames(duplicates));
        }

        Ok(Catalog { items, by_name })
    }

    /// Look up an item by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.by_name.get(name).map(|&row| &self.items[row])
    }

    /// All items in source load order.
    #[must_use]
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

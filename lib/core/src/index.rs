use crate::{Catalog, Error, Field, Item, Result, Vector, Vocabulary};
use ahash::AHashMap;
use tracing::debug;

/// One-hot nearest-neighbor index over the catalog's categorical fields.
///
/// Every valid item is encoded against the vocabulary into a binary vector
/// with exactly one hot component per field; queries rank the other items
/// by cosine distance. The index is immutable — any catalog or vocabulary
/// change requires a wholesale rebuild.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    items: Vec<Item>,
    vectors: Vec<Vector>,
    rows: AHashMap<String, usize>,
}

impl SimilarityIndex {
    /// Encode every catalog item. Fails with `InsufficientData` when fewer
    /// than 2 items exist — a single item has no neighbors to rank.
    pub fn build(catalog: &Catalog, vocabulary: &Vocabulary) -> Result<SimilarityIndex> {
        if catalog.len() < 2 {
            return Err(Error::InsufficientData {
                requested: 2,
                available: catalog.len(),
            });
        }

        let dim = vocabulary.dimension();
        let mut items = Vec::with_capacity(catalog.len());
        let mut vectors = Vec::with_capacity(catalog.len());
        let mut rows = AHashMap::with_capacity(catalog.len());
        for item in catalog.all() {
            vectors.push(encode(item, vocabulary, dim)?);
            rows.insert(item.name.clone(), items.len());
            items.push(item.clone());
        }
        debug!(items = items.len(), dim, "similarity index built");

        Ok(SimilarityIndex { items, vectors, rows })
    }

    /// Whether an item name is present in the indexed set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rows.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `k` nearest items to `name` by cosine distance, nearest first.
    ///
    /// The query item is excluded by name, not by distance: a zero-distance
    /// duplicate elsewhere in the catalog is a legitimate neighbor. Ties
    /// are broken by catalog order — candidates are gathered in catalog
    /// order and the sort is stable.
    pub fn k_nearest(&self, name: &str, k: usize) -> Result<Vec<(Item, f32)>> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        let &row = self
            .rows
            .get(name)
            .ok_or_else(|| Error::NotIndexed(name.to_string()))?;
        let available = self.items.len() - 1;
        if available < k {
            return Err(Error::InsufficientData {
                requested: k,
                available,
            });
        }

        let query = &self.vectors[row];
        let mut candidates: Vec<(usize, f32)> = (0..self.items.len())
            .filter(|&i| i != row)
            .map(|i| (i, query.cosine_distance(&self.vectors[i])))
            .collect();
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(k);

        Ok(candidates
            .into_iter()
            .map(|(i, distance)| (self.items[i].clone(), distance))
            .collect())
    }
}

fn encode(item: &Item, vocabulary: &Vocabulary, dim: usize) -> Result<Vector> {
    let mut data = vec![0.0f32; dim];
    let mut base = 0;
    for field in Field::ALL {
        let position =
            vocabulary
                .position(field, item.value(field))
                .ok_or_else(|| Error::UnknownValue {
                    field,
                    value: item.value(field).to_string(),
                })?;
        data[base + position] = 1.0;
        base += vocabulary.values_of(field).len();
    }
    Ok(Vector::new(data))
}

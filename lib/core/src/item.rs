use serde::{Deserialize, Serialize};

/// The seven categorical attributes of a catalog item.
///
/// `Price` is a band label ("Low", "High", ...), not a numeric quantity;
/// it filters and encodes like every other categorical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Brand,
    Gender,
    ScentDirection,
    Season,
    Personality,
    Occasion,
    Price,
}

impl Field {
    /// All fields in encoding order. This order is fixed: the one-hot
    /// layout and the `ConstraintSet` slots both depend on it.
    pub const ALL: [Field; 7] = [
        Field::Brand,
        Field::Gender,
        Field::ScentDirection,
        Field::Season,
        Field::Personality,
        Field::Occasion,
        Field::Price,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::Gender => "gender",
            Field::ScentDirection => "scent_direction",
            Field::Season => "season",
            Field::Personality => "personality",
            Field::Occasion => "occasion",
            Field::Price => "price",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(Field::Brand),
            "gender" => Ok(Field::Gender),
            "scent_direction" | "scent" => Ok(Field::ScentDirection),
            "season" => Ok(Field::Season),
            "personality" => Ok(Field::Personality),
            "occasion" => Ok(Field::Occasion),
            "price" => Ok(Field::Price),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// One row of catalog input before validation.
///
/// Every column is optional here; [`Catalog::load`](crate::Catalog::load)
/// decides what is usable. Deserializes straight from a CSV row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub gender: Option<String>,
    pub scent_direction: Option<String>,
    pub season: Option<String>,
    pub personality: Option<String>,
    pub occasion: Option<String>,
    pub price: Option<String>,
}

/// One validated catalog entry.
///
/// An `Item` always has all seven attributes present and non-empty;
/// incomplete records never make it past [`Catalog::load`](crate::Catalog::load),
/// so downstream code needs no per-field default handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub brand: String,
    pub gender: String,
    pub scent_direction: String,
    pub season: String,
    pub personality: String,
    pub occasion: String,
    pub price: String,
}

impl Item {
    #[must_use]
    pub fn new(
        name: &str,
        brand: &str,
        gender: &str,
        scent_direction: &str,
        season: &str,
        personality: &str,
        occasion: &str,
        price: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            brand: brand.to_string(),
            gender: gender.to_string(),
            scent_direction: scent_direction.to_string(),
            season: season.to_string(),
            personality: personality.to_string(),
            occasion: occasion.to_string(),
            price: price.to_string(),
        }
    }

    /// Validate a raw record. Returns `None` if the name or any of the
    /// seven attributes is missing or empty; values are kept verbatim,
    /// never coerced to a sentinel.
    pub(crate) fn from_raw(record: RawRecord) -> Option<Item> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.is_empty())
        }

        Some(Item {
            name: present(record.name)?,
            brand: present(record.brand)?,
            gender: present(record.gender)?,
            scent_direction: present(record.scent_direction)?,
            season: present(record.season)?,
            personality: present(record.personality)?,
            occasion: present(record.occasion)?,
            price: present(record.price)?,
        })
    }

    /// Attribute accessor by field.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Brand => &self.brand,
            Field::Gender => &self.gender,
            Field::ScentDirection => &self.scent_direction,
            Field::Season => &self.season,
            Field::Personality => &self.personality,
            Field::Occasion => &self.occasion,
            Field::Price => &self.price,
        }
    }
}

impl From<Item> for RawRecord {
    fn from(item: Item) -> Self {
        RawRecord {
            name: Some(item.name),
            brand: Some(item.brand),
            gender: Some(item.gender),
            scent_direction: Some(item.scent_direction),
            season: Some(item.season),
            personality: Some(item.personality),
            occasion: Some(item.occasion),
            price: Some(item.price),
        }
    }
}

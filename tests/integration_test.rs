// Integration tests for Essenza
use essenza_core::{
    overlap, ConstraintSet, Engine, Error, Field, Item, RawRecord, Strategy, RECOMMEND_LIMIT,
};
use std::io::Write;

fn item(
    name: &str,
    brand: &str,
    gender: &str,
    scent: &str,
    season: &str,
    personality: &str,
    occasion: &str,
    price: &str,
) -> Item {
    Item::new(name, brand, gender, scent, season, personality, occasion, price)
}

fn sample_records() -> Vec<RawRecord> {
    vec![
        item("A", "X", "Unisex", "Woody", "Winter", "Classic", "Evening", "High"),
        item("B", "X", "Unisex", "Woody", "Winter", "Classic", "Day", "Low"),
        item("C", "Y", "Female", "Floral", "Summer", "Romantic", "Day", "Low"),
        item("D", "Y", "Male", "Fresh", "Summer", "Sporty", "Day", "Low"),
        item("E", "Z", "Male", "Oriental", "Autumn", "Bold", "Evening", "High"),
    ]
    .into_iter()
    .map(RawRecord::from)
    .collect()
}

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_filter_identity_and_idempotence() {
    let engine = Engine::load(sample_records()).unwrap();

    let everything = engine.filter(&ConstraintSet::new());
    assert_eq!(names(&everything), ["A", "B", "C", "D", "E"]);

    let constraints = ConstraintSet::new()
        .with(Field::Season, "Summer")
        .with(Field::Price, "Low");
    let first = engine.filter(&constraints);
    let second = engine.filter(&constraints);
    assert_eq!(first, second);
    assert_eq!(names(&first), ["C", "D"]);
}

#[test]
fn test_filter_monotonicity() {
    let engine = Engine::load(sample_records()).unwrap();
    let mut constraints = ConstraintSet::new();
    let mut last = engine.filter(&constraints).len();
    for (field, value) in [
        (Field::Occasion, "Day"),
        (Field::Price, "Low"),
        (Field::Gender, "Male"),
    ] {
        constraints = constraints.with(field, value);
        let size = engine.filter(&constraints).len();
        assert!(size <= last);
        last = size;
    }
    assert_eq!(last, 1);
}

#[test]
fn test_spec_example_brand_filter() {
    let engine = Engine::load(sample_records()).unwrap();
    let result = engine.filter(&ConstraintSet::new().with(Field::Brand, "X"));
    assert_eq!(names(&result), ["A", "B"]);
}

#[test]
fn test_recommend_excludes_self_and_is_deterministic() {
    let engine = Engine::load(sample_records()).unwrap();
    for name in ["A", "B", "C", "D", "E"] {
        let first = engine.recommend(name).unwrap();
        let second = engine.recommend(name).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), RECOMMEND_LIMIT);
        assert!(first.iter().all(|i| i.name != name));
    }
}

#[test]
fn test_recommend_ranks_shared_attributes_first() {
    let engine = Engine::load(sample_records()).unwrap();
    // B shares every attribute with A except occasion and price.
    assert_eq!(engine.recommend("A").unwrap()[0].name, "B");
    assert_eq!(engine.recommend("B").unwrap()[0].name, "A");
}

#[test]
fn test_recommend_unknown_name() {
    let engine = Engine::load(sample_records()).unwrap();
    assert!(matches!(engine.recommend("Nope"), Err(Error::NotFound(_))));
}

#[test]
fn test_tag_overlap_spec_example() {
    let records: Vec<RawRecord> = vec![
        item("A", "X", "Unisex", "Woody", "Winter", "Classic", "Evening", "High"),
        item("B", "X", "Unisex", "Woody", "Winter", "Classic", "Day", "Low"),
        item("C", "Y", "Female", "Floral", "Summer", "Romantic", "Day", "Low"),
    ]
    .into_iter()
    .map(RawRecord::from)
    .collect();
    let engine = Engine::load(records).unwrap();

    let result = engine.recommend_with("A", Strategy::TagOverlap).unwrap();
    assert_eq!(names(&result), ["B", "C"]);

    let a = item("A", "X", "Unisex", "Woody", "Winter", "Classic", "Evening", "High");
    let b = item("B", "X", "Unisex", "Woody", "Winter", "Classic", "Day", "Low");
    let c = item("C", "Y", "Female", "Floral", "Summer", "Romantic", "Day", "Low");
    assert_eq!(overlap::score(&a, &b), 4);
    assert_eq!(overlap::score(&a, &c), 0);
}

#[test]
fn test_vocabulary_soundness() {
    let engine = Engine::load(sample_records()).unwrap();
    let items = engine.items();
    for field in Field::ALL {
        let values = engine.vocabulary(field);
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(values, sorted);
        for value in &values {
            assert!(items.iter().any(|i| i.value(field) == value));
        }
        for item in &items {
            assert!(values.iter().any(|v| v == item.value(field)));
        }
    }
}

#[test]
fn test_duplicate_names_reported_on_load() {
    let mut records = sample_records();
    records.push(RawRecord::from(item(
        "A", "W", "Male", "Fresh", "Spring", "Sporty", "Day", "Low",
    )));
    records.push(RawRecord::from(item(
        "C", "W", "Male", "Fresh", "Spring", "Sporty", "Day", "Low",
    )));
    match Engine::load(records) {
        Err(Error::DuplicateNames(dupes)) => {
            assert_eq!(dupes, vec!["A".to_string(), "C".to_string()]);
        }
        Err(other) => panic!("expected DuplicateNames, got {other:?}"),
        Ok(_) => panic!("expected DuplicateNames, load succeeded"),
    }
}

#[test]
fn test_single_item_catalog_falls_back_to_empty() {
    let engine = Engine::load(sample_records().into_iter().take(1).collect()).unwrap();
    assert_eq!(engine.recommend("A").unwrap(), Vec::<Item>::new());
}

#[test]
fn test_reload_is_atomic() {
    let engine = Engine::load(sample_records()).unwrap();

    // A failed reload leaves the previous generation serving.
    assert!(engine.reload(vec![RawRecord::default()]).is_err());
    assert_eq!(engine.len(), 5);
    assert_eq!(engine.recommend("A").unwrap().len(), RECOMMEND_LIMIT);

    // A successful reload swaps catalog, vocabulary and index together.
    let next: Vec<RawRecord> = vec![
        item("P", "Q", "Male", "Fresh", "Summer", "Sporty", "Day", "Low"),
        item("R", "Q", "Male", "Fresh", "Summer", "Sporty", "Night", "Low"),
    ]
    .into_iter()
    .map(RawRecord::from)
    .collect();
    engine.reload(next).unwrap();
    assert_eq!(engine.vocabulary(Field::Brand), ["Q"]);
    assert_eq!(engine.recommend("P").unwrap()[0].name, "R");
}

#[test]
fn test_csv_loader_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name;brand;gender;scent_direction;season;personality;occasion;price").unwrap();
    writeln!(file, "Aria;Dior;Female;Floral;Spring;Romantic;Day;High").unwrap();
    writeln!(file, "Nocte;Dior;Female;Floral;Spring;Romantic;Evening;Low").unwrap();
    writeln!(file, "Cedrus;Creed;Male;Woody;Winter;Bold;Evening;High").unwrap();
    writeln!(file, ";Broken;Male;Woody;Winter;Bold;Evening;High").unwrap();

    let engine = essenza_data::load_engine(file.path()).unwrap();
    assert_eq!(engine.len(), 3); // incomplete row dropped
    assert_eq!(engine.recommend("Aria").unwrap()[0].name, "Nocte");
    let florals = engine.filter(&ConstraintSet::new().with(Field::ScentDirection, "Floral"));
    assert_eq!(names(&florals), ["Aria", "Nocte"]);
}

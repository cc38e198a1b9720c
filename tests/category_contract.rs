//! Contract tests for the public category API.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use recipe_categories::{AppError, Category};

fn hash_of(category: Category) -> u64 {
    let mut hasher = DefaultHasher::new();
    category.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_serialize_roundtrip_for_every_category() {
    for &category in Category::all() {
        let encoded = serde_json::to_string(&category).unwrap();
        let decoded: Category = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, category);
    }
}

#[test]
fn test_all_values_fixed_order() {
    for _ in 0..2 {
        let all: Vec<Category> = Category::iter().collect();
        assert_eq!(
            all,
            vec![
                Category::Dessert,
                Category::Pancake,
                Category::Salad,
                Category::Sandwich
            ]
        );
    }
}

#[test]
fn test_labels_are_total_and_distinct() {
    let labels: Vec<&str> = Category::iter()
        .map(|c| c.localized_name().as_str())
        .collect();
    assert_eq!(labels, vec!["Dessert", "Pancake", "Salad", "Sandwich"]);
    assert!(labels.iter().all(|l| !l.is_empty()));
}

#[test]
fn test_out_of_range_identities_fail() {
    assert!(matches!(
        Category::from_id(4),
        Err(AppError::UnknownCategory(4))
    ));
    assert!(matches!(
        Category::try_from(-1i64),
        Err(AppError::UnknownCategory(-1))
    ));
    assert!(serde_json::from_str::<Category>("4").is_err());
    assert!(serde_json::from_str::<Category>("-1").is_err());
}

#[test]
fn test_equality_laws_follow_identity() {
    for &a in Category::all() {
        assert_eq!(a, a);
        for &b in Category::all() {
            assert_eq!(a == b, b == a);
            assert_eq!(a == b, a.id() == b.id());
            if a == b {
                assert_eq!(hash_of(a), hash_of(b));
            }
            for &c in Category::all() {
                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
}

#[test]
fn test_salad_scenario() {
    let category = Category::from_id(2).unwrap();
    assert_eq!(category, Category::Salad);
    assert_eq!(category.localized_name().as_str(), "Salad");
    assert_eq!(serde_json::to_value(category).unwrap(), serde_json::json!(2));
    assert_eq!(u8::from(category), 2);
}

#[test]
fn test_persisted_records_keep_categories() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Recipe {
        name: String,
        category: Category,
    }

    let stored = r#"{"name":"Waffles","category":1}"#;
    let recipe: Recipe = serde_json::from_str(stored).unwrap();
    assert_eq!(recipe.category, Category::Pancake);
    assert_eq!(serde_json::to_string(&recipe).unwrap(), stored);

    let corrupted = r#"{"name":"Waffles","category":9}"#;
    let err = serde_json::from_str::<Recipe>(corrupted).unwrap_err();
    assert!(err.to_string().contains("Unknown category: 9"));
}

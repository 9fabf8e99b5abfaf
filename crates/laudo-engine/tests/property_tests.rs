//! Property tests for classification, wording and section assembly

use chrono::{DateTime, FixedOffset, TimeZone};
use laudo_engine::classify::classify;
use laudo_engine::text::{pluralize, quantity_text, spell_out};
use laudo_engine::{build_document, ReportConfig};
use laudo_types::{ItemRecord, LaudoRequest, MaterialType, PackagingColor, PackagingType};
use proptest::prelude::*;

fn material_strategy() -> impl Strategy<Value = MaterialType> {
    prop_oneof![
        Just(MaterialType::DriedPlant),
        Just(MaterialType::Powder),
        Just(MaterialType::Rock),
        Just(MaterialType::Resin),
        "[a-z]{3,8}".prop_map(|code| MaterialType::from_code(&code)),
    ]
}

fn item_strategy() -> impl Strategy<Value = ItemRecord> {
    (
        1u32..40,
        material_strategy(),
        prop::sample::select(PackagingType::ALL.to_vec()),
        prop::option::of(prop::sample::select(PackagingColor::ALL.to_vec())),
        "[0-9]{1,2}\\.[0-9]{1,2}",
        prop::option::of("[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}"),
    )
        .prop_map(
            |(quantity, material, packaging, packaging_color, reference, person)| ItemRecord {
                quantity,
                material,
                packaging,
                packaging_color,
                reference,
                person,
            },
        )
}

fn request(items: Vec<ItemRecord>) -> LaudoRequest {
    LaudoRequest {
        report_number: "100/2026".to_string(),
        seal_number: "123456".to_string(),
        preliminary_report: None,
        requesting_authority: None,
        request_document: None,
        received_on: None,
        items,
        image_base64: None,
    }
}

fn now() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 19, 9, 0, 0)
        .unwrap()
}

proptest! {
    /// Property: a count of one never changes the word
    #[test]
    fn pluralize_singular_is_identity(word in "[a-zçãõéí]{1,12}") {
        prop_assert_eq!(pluralize(&word, 1), word);
    }

    /// Property: plurals are never shorter than the singular
    #[test]
    fn pluralize_never_shrinks(word in "[a-z]{2,12}", count in 2u32..1000) {
        prop_assert!(pluralize(&word, count).chars().count() >= word.chars().count());
    }

    /// Property: quantities above ten are written in digits only
    #[test]
    fn large_quantities_are_digits(n in 11u32..100_000) {
        prop_assert_eq!(spell_out(n), None);
        prop_assert_eq!(quantity_text(n), n.to_string());
    }

    /// Property: every item lands in exactly one group, labels stay sequential
    #[test]
    fn classification_partitions_items(items in prop::collection::vec(item_strategy(), 1..20)) {
        let c = classify(&items);
        prop_assert_eq!(c.cannabis.len() + c.cocaine.len() + c.unclassified.len(), items.len());

        let mut labels: Vec<String> = c.cannabis.labels().into_iter()
            .chain(c.cocaine.labels())
            .chain(c.unclassified.labels())
            .map(str::to_string)
            .collect();
        labels.sort_by_key(|l| l[2..].parse::<usize>().unwrap());
        let expected: Vec<String> = (1..=items.len()).map(|n| format!("2.{}", n)).collect();
        prop_assert_eq!(labels, expected);
    }

    /// Property: same input and timestamp produce the same document
    #[test]
    fn generation_is_idempotent(items in prop::collection::vec(item_strategy(), 1..8)) {
        let config = ReportConfig::default();
        let request = request(items);
        let first = build_document(&request, &config, now()).unwrap();
        let second = build_document(&request, &config, now()).unwrap();
        prop_assert_eq!(first.document.paragraphs(), second.document.paragraphs());
    }

    /// Property: one item paragraph per item, in entry order
    #[test]
    fn one_paragraph_per_item(items in prop::collection::vec(item_strategy(), 1..12)) {
        let preview = build_document(&request(items.clone()), &ReportConfig::default(), now()).unwrap();
        let paragraphs = preview.document.paragraphs();
        for index in 0..items.len() {
            let prefix = format!("2.{} {}", index + 1, items[index].quantity);
            prop_assert_eq!(paragraphs.iter().filter(|p| p.starts_with(&prefix)).count(), 1);
        }
    }
}

//! Item classification into substance families
//!
//! Items are numbered `2.N` in entry order (section 2 lists the received
//! material) and bucketed by the family their material code belongs to.

use laudo_types::{ItemRecord, SubstanceFamily};
use serde::Serialize;
use tracing::debug;

/// Section that lists the received material; item labels hang off it
pub const MATERIAL_SECTION: u32 = 2;

/// A classified item: the preliminary-report reference and this report's label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedItem {
    pub reference: String,
    pub label: String,
}

/// Ordered reference → label mapping for one family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FamilyGroup {
    entries: Vec<ClassifiedItem>,
}

impl FamilyGroup {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ClassifiedItem] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn references(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.reference.as_str()).collect()
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }

    fn push(&mut self, reference: &str, label: String) {
        self.entries.push(ClassifiedItem {
            reference: reference.trim().to_string(),
            label,
        });
    }
}

/// Result of scanning the item list once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub cannabis: FamilyGroup,
    pub cocaine: FamilyGroup,
    /// Items whose material code maps to no family
    pub unclassified: FamilyGroup,
}

impl Classification {
    pub fn group(&self, family: SubstanceFamily) -> &FamilyGroup {
        match family {
            SubstanceFamily::Cannabis => &self.cannabis,
            SubstanceFamily::Cocaine => &self.cocaine,
        }
    }

    /// Families with at least one item, cannabis first
    pub fn present_families(&self) -> Vec<SubstanceFamily> {
        [SubstanceFamily::Cannabis, SubstanceFamily::Cocaine]
            .into_iter()
            .filter(|family| !self.group(*family).is_empty())
            .collect()
    }

    pub fn has_any_family(&self) -> bool {
        !self.cannabis.is_empty() || !self.cocaine.is_empty()
    }
}

/// Label of the item at `index` (0-based) in section 2
pub fn item_label(index: usize) -> String {
    format!("{}.{}", MATERIAL_SECTION, index + 1)
}

/// Partition items into cannabis/cocaine groups. Unknown material codes never
/// fail; they land in `unclassified` and in neither family group.
pub fn classify(items: &[ItemRecord]) -> Classification {
    let mut classification = Classification::default();

    for (index, item) in items.iter().enumerate() {
        let label = item_label(index);
        match item.material.family() {
            Some(SubstanceFamily::Cannabis) => classification.cannabis.push(&item.reference, label),
            Some(SubstanceFamily::Cocaine) => classification.cocaine.push(&item.reference, label),
            None => {
                debug!(
                    "Item {} has unclassified material code '{}'",
                    label,
                    item.material.code()
                );
                classification.unclassified.push(&item.reference, label)
            }
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use laudo_types::{MaterialType, PackagingType};
    use pretty_assertions::assert_eq;

    fn item(material: &str, reference: &str) -> ItemRecord {
        ItemRecord {
            quantity: 1,
            material: MaterialType::from_code(material),
            packaging: PackagingType::Bag,
            packaging_color: None,
            reference: reference.to_string(),
            person: None,
        }
    }

    #[test]
    fn test_partition_by_material_code() {
        let items = vec![
            item("v", "1.1"),
            item("po", "1.2"),
            item("r", "1.3"),
            item("pd", "1.4"),
            item("xx", "1.5"),
        ];

        let c = classify(&items);
        assert_eq!(c.cannabis.labels(), vec!["2.1", "2.3"]);
        assert_eq!(c.cannabis.references(), vec!["1.1", "1.3"]);
        assert_eq!(c.cocaine.labels(), vec!["2.2", "2.4"]);
        assert_eq!(c.unclassified.labels(), vec!["2.5"]);
        assert!(!c.cannabis.contains_label("2.5"));
        assert!(!c.cocaine.contains_label("2.5"));
    }

    #[test]
    fn test_present_families_order() {
        let c = classify(&[item("pd", "a"), item("v", "b")]);
        assert_eq!(
            c.present_families(),
            vec![SubstanceFamily::Cannabis, SubstanceFamily::Cocaine]
        );

        let only_cocaine = classify(&[item("po", "a")]);
        assert_eq!(only_cocaine.present_families(), vec![SubstanceFamily::Cocaine]);
        assert!(only_cocaine.has_any_family());
    }

    #[test]
    fn test_unknown_codes_only() {
        let c = classify(&[item("comprimido", "a"), item("liquido", "b")]);
        assert!(!c.has_any_family());
        assert!(c.present_families().is_empty());
        assert_eq!(c.unclassified.len(), 2);
    }

    #[test]
    fn test_duplicate_references_are_kept_in_order() {
        let c = classify(&[item("v", "1.1"), item("v", "1.1")]);
        assert_eq!(c.cannabis.labels(), vec!["2.1", "2.2"]);
        assert_eq!(c.cannabis.references(), vec!["1.1", "1.1"]);
    }

    #[test]
    fn test_references_are_trimmed() {
        let c = classify(&[item("r", "  3.2 ")]);
        assert_eq!(c.cannabis.entries()[0].reference, "3.2");
    }
}

//! Item paragraph of section 2

use laudo_types::ItemRecord;

use super::numerals::quantity_text;
use super::plural::pluralize;

/// Packaging noun phrase in agreement with the item quantity, colour included
pub fn packaging_phrase(item: &ItemRecord) -> String {
    let mut phrase = pluralize(item.packaging.noun(), item.quantity);

    if let Some(color) = item.packaging_color {
        if color.is_adjective() {
            phrase.push(' ');
            phrase.push_str(&pluralize(color.feminine(), item.quantity));
        } else {
            phrase.push_str(" de cor ");
            phrase.push_str(color.feminine());
        }
    }

    phrase
}

/// Full sentence describing one item, prefixed with its label (`2.N`)
pub fn describe_item(label: &str, item: &ItemRecord) -> String {
    let qty = item.quantity;
    let packed = if qty == 1 {
        "acondicionada em"
    } else {
        "acondicionadas, individualmente, em"
    };

    let mut text = format!(
        "{} {} {} de material {}, {} {}, referente à amostra do subitem {} do laudo de constatação supracitado",
        label,
        quantity_text(qty),
        pluralize("porção", qty),
        item.material.description(),
        packed,
        packaging_phrase(item),
        item.reference.trim(),
    );

    if let Some(person) = item.person.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        text.push_str(", relacionada a ");
        text.push_str(person);
    }

    text.push('.');
    text
}

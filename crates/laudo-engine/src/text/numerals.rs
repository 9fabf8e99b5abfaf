/// Feminine forms, agreeing with "porção"
const SPELLED: [&str; 10] = [
    "uma", "duas", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez",
];

/// Spelled-out form for 1..=10
pub fn spell_out(n: u32) -> Option<&'static str> {
    match n {
        1..=10 => Some(SPELLED[(n - 1) as usize]),
        _ => None,
    }
}

/// `"3 (três)"` inside the spelled range, bare digits outside it
pub fn quantity_text(n: u32) -> String {
    match spell_out(n) {
        Some(word) => format!("{} ({})", n, word),
        None => n.to_string(),
    }
}

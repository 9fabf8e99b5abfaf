//! Suffix-rule pluralizer for the handful of nouns and adjectives the report uses

/// Fixed phrases whose plural the suffix rules would get wrong
const PHRASE_PLURALS: &[(&str, &str)] = &[
    ("microtubo do tipo eppendorf", "microtubos do tipo eppendorf"),
    ("saco plástico", "sacos plásticos"),
    ("porção de papel alumínio", "porções de papel alumínio"),
    ("filme plástico", "filmes plásticos"),
    ("invólucro de papel", "invólucros de papel"),
];

/// Plural of `word` for `count` items. `count == 1` returns the word untouched.
///
/// Multi-word input is only handled through the fixed phrase table; anything
/// else is treated as a single word and the rules apply to its ending:
/// `-ão` → `-ões`, `-m` → `-ns`, `-r`/`-z` → `+es`, `-l` → `-is`, else `+s`.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 || word.is_empty() {
        return word.to_string();
    }

    if let Some((_, plural)) = PHRASE_PLURALS.iter().find(|(singular, _)| *singular == word) {
        return plural.to_string();
    }

    if let Some(stem) = word.strip_suffix("ão") {
        format!("{}ões", stem)
    } else if let Some(stem) = word.strip_suffix('m') {
        format!("{}ns", stem)
    } else if word.ends_with('r') || word.ends_with('z') {
        format!("{}es", word)
    } else if let Some(stem) = word.strip_suffix('l') {
        format!("{}is", stem)
    } else {
        format!("{}s", word)
    }
}

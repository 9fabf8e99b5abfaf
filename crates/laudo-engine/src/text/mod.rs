//! Portuguese wording helpers
//!
//! Pure functions only: everything here is deterministic and free of
//! document concerns, so the assembler can compose them freely.

pub mod item;
pub mod numerals;
pub mod plural;

pub use item::{describe_item, packaging_phrase};
pub use numerals::{quantity_text, spell_out};
pub use plural::pluralize;

/// Join labels the way a sentence lists them: `a`, `a e b`, `a, b e c`
pub fn join_labels<S: AsRef<str>>(labels: &[S]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ");
            format!("{} e {}", head, last.as_ref())
        }
    }
}

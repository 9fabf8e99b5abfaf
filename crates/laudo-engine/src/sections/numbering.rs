//! Section and subsection numbers

use laudo_types::SubstanceFamily;

use crate::classify::{Classification, MATERIAL_SECTION};

pub const HISTORY: u32 = 1;
pub const MATERIAL: u32 = MATERIAL_SECTION;
pub const OBJECTIVE: u32 = 3;
pub const EXAMS: u32 = 4;
pub const RESULTS: u32 = 5;
pub const CONCLUSION: u32 = 6;
pub const CUSTODY: u32 = 7;

/// Subsection a family occupies inside sections 4 and 5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySlot {
    pub family: SubstanceFamily,
    pub number: u32,
}

/// Present families get consecutive slots from 1, cannabis first. An absent
/// family takes no slot, so a lone family is always `x.1`.
pub fn family_slots(classification: &Classification) -> Vec<FamilySlot> {
    classification
        .present_families()
        .into_iter()
        .zip(1..)
        .map(|(family, number)| FamilySlot { family, number })
        .collect()
}

/// `"4.2"` for section 4, subsection 2
pub fn subsection(section: u32, number: u32) -> String {
    format!("{}.{}", section, number)
}

//! Sections 4 to 6: exams, results and conclusion
//!
//! Each present family gets its own subsection slot (see [`family_slots`]).
//! When no item belongs to a family the sections fall back to a macroscopic
//! exam over every item.

use laudo_types::SubstanceFamily;

use crate::classify::Classification;
use crate::document::Block;
use crate::text::{join_labels, pluralize};

use super::numbering::{family_slots, subsection, CONCLUSION, EXAMS, RESULTS};

pub const CONCLUSION_OPENING: &str = "A partir das análises realizadas, conclui-se que, ";

/// Joins one family's conclusion to the next
pub const CONCLUSION_CONNECTIVE: &str = " Outrossim, ";

/// `material descrito no subitem 2.1` or `materiais descritos nos subitens 2.1 e 2.2`
fn described_materials(labels: &[&str]) -> String {
    let n = labels.len() as u32;
    format!(
        "{} {} {} {} {}",
        pluralize("material", n),
        pluralize("descrito", n),
        if n == 1 { "no" } else { "nos" },
        pluralize("subitem", n),
        join_labels(labels)
    )
}

/// `no material questionado` or `nos materiais questionados`
fn questioned_materials(n: u32) -> String {
    format!(
        "{} {} {}",
        if n == 1 { "no" } else { "nos" },
        pluralize("material", n),
        pluralize("questionado", n)
    )
}

fn exam_steps(family: SubstanceFamily) -> (&'static str, [&'static str; 2]) {
    match family {
        SubstanceFamily::Cannabis => (
            "Exames realizados para pesquisa de Cannabis sativa L. (maconha)",
            [
                "Ensaio químico com Fast blue salt B: teste de cor em reação com solução aquosa de sal de azul sólido B em meio alcalino;",
                "Cromatografia em Camada Delgada (CCD), comparativa com substância padrão, em sistemas contendo eluentes apropriados e posterior revelação com solução aquosa de azul sólido B.",
            ],
        ),
        SubstanceFamily::Cocaine => (
            "Exames realizados para pesquisa de cocaína",
            [
                "Ensaio químico com teste de tiocianato de cobalto: reação de cor com solução de tiocianato de cobalto em meio ácido;",
                "Cromatografia em Camada Delgada (CCD), comparativa com substância padrão, em sistemas com eluentes apropriados e revelação com solução de iodo platinado.",
            ],
        ),
    }
}

fn result_steps(family: SubstanceFamily, n: u32) -> [String; 2] {
    match family {
        SubstanceFamily::Cannabis => [
            "No ensaio com Fast blue salt B, foi obtida coloração característica para canabinol e tetrahidrocanabinol (princípios ativos da Cannabis sativa L.);".to_string(),
            format!(
                "Na CCD, obtiveram-se perfis cromatográficos coincidentes com o material de referência (padrão de Cannabis sativa L.); portanto, a substância tetrahidrocanabinol está presente {}.",
                questioned_materials(n)
            ),
        ],
        SubstanceFamily::Cocaine => [
            "No teste de tiocianato de cobalto, foi obtida coloração característica para cocaína;".to_string(),
            format!(
                "Na CCD, obtiveram-se perfis cromatográficos coincidentes com o material de referência (padrão de cocaína); portanto, a substância cocaína está presente {}.",
                questioned_materials(n)
            ),
        ],
    }
}

fn family_conclusion(family: SubstanceFamily, labels: &[&str], legal_basis: &str) -> String {
    let n = labels.len() as u32;
    let subject = format!(
        "{} {}",
        if n == 1 { "no" } else { "nos" },
        described_materials(labels)
    );
    match family {
        SubstanceFamily::Cannabis => format!(
            "{}, foi detectada a presença de partes da planta Cannabis sativa L., vulgarmente conhecida por maconha. A Cannabis sativa L. contém princípios ativos chamados canabinóis, dentre os quais se encontra o tetrahidrocanabinol, substância perturbadora do sistema nervoso central. Tanto a Cannabis sativa L. quanto o tetrahidrocanabinol são proscritos no país, com fulcro na {}.",
            subject, legal_basis
        ),
        SubstanceFamily::Cocaine => format!(
            "{}, foi detectada a presença de cocaína, substância alcaloide estimulante do sistema nervoso central. A cocaína é proscrita no país, com fulcro na {}.",
            subject, legal_basis
        ),
    }
}

pub fn exams(classification: &Classification) -> Vec<Block> {
    let mut blocks = vec![Block::heading(format!("{} EXAMES", EXAMS))];
    let slots = family_slots(classification);

    if slots.is_empty() {
        let index = subsection(EXAMS, 1);
        blocks.push(Block::paragraph(format!("{} Exames realizados", index)));
        blocks.push(Block::paragraph(format!("{}.1 Exame macroscópico.", index)));
        return blocks;
    }

    for slot in slots {
        let index = subsection(EXAMS, slot.number);
        let (title, steps) = exam_steps(slot.family);
        blocks.push(Block::paragraph(format!("{} {}", index, title)));
        for (step, text) in steps.iter().enumerate() {
            blocks.push(Block::justified(format!("{}.{} {}", index, step + 1, text)));
        }
    }
    blocks
}

pub fn results(classification: &Classification) -> Vec<Block> {
    let mut blocks = vec![Block::heading(format!("{} RESULTADOS", RESULTS))];
    let slots = family_slots(classification);

    if slots.is_empty() {
        let labels = classification.unclassified.labels();
        let n = labels.len() as u32;
        blocks.push(Block::justified(format!(
            "{} O exame macroscópico {} {} não revelou a presença de substâncias de uso proscrito.",
            subsection(RESULTS, 1),
            if n == 1 { "do" } else { "dos" },
            described_materials(&labels)
        )));
        return blocks;
    }

    for slot in slots {
        let index = subsection(RESULTS, slot.number);
        let labels = classification.group(slot.family).labels();
        let n = labels.len() as u32;
        blocks.push(Block::paragraph(format!(
            "{} Resultados obtidos para {} {}:",
            index,
            if n == 1 { "o" } else { "os" },
            described_materials(&labels)
        )));
        for (step, text) in result_steps(slot.family, n).iter().enumerate() {
            blocks.push(Block::justified(format!("{}.{} {}", index, step + 1, text)));
        }
    }
    blocks
}

pub fn conclusion_text(classification: &Classification, legal_basis: &str) -> String {
    let parts: Vec<String> = classification
        .present_families()
        .into_iter()
        .map(|family| {
            family_conclusion(family, &classification.group(family).labels(), legal_basis)
        })
        .collect();

    if parts.is_empty() {
        let n = classification.unclassified.len() as u32;
        format!(
            "A partir das análises realizadas, conclui-se que não foram detectadas substâncias de uso proscrito {}.",
            if n == 1 { "no material analisado" } else { "nos materiais analisados" }
        )
    } else {
        format!("{}{}", CONCLUSION_OPENING, parts.join(CONCLUSION_CONNECTIVE))
    }
}

pub fn conclusion(classification: &Classification, legal_basis: &str) -> Vec<Block> {
    vec![
        Block::heading(format!("{} CONCLUSÃO", CONCLUSION)),
        Block::justified(conclusion_text(classification, legal_basis)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use laudo_types::{ItemRecord, MaterialType, PackagingType};
    use pretty_assertions::assert_eq;

    const BASIS: &str = "Portaria nº 344/1998";

    fn classified(codes: &[&str]) -> Classification {
        let items: Vec<ItemRecord> = codes
            .iter()
            .enumerate()
            .map(|(i, code)| ItemRecord {
                quantity: 1,
                material: MaterialType::from_code(code),
                packaging: PackagingType::Bag,
                packaging_color: None,
                reference: format!("1.{}", i + 1),
                person: None,
            })
            .collect();
        classify(&items)
    }

    fn texts(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().filter_map(Block::text).collect()
    }

    #[test]
    fn test_described_materials_agreement() {
        assert_eq!(described_materials(&["2.1"]), "material descrito no subitem 2.1");
        assert_eq!(
            described_materials(&["2.1", "2.3"]),
            "materiais descritos nos subitens 2.1 e 2.3"
        );
    }

    #[test]
    fn test_exams_with_both_families() {
        let blocks = exams(&classified(&["po", "v"]));
        let texts = texts(&blocks);
        assert_eq!(texts[0], "4 EXAMES");
        assert!(texts[1].starts_with("4.1 Exames realizados para pesquisa de Cannabis"));
        assert!(texts[2].starts_with("4.1.1 Ensaio químico com Fast blue salt B"));
        assert!(texts[3].starts_with("4.1.2 Cromatografia"));
        assert_eq!(texts[4], "4.2 Exames realizados para pesquisa de cocaína");
        assert!(texts[5].starts_with("4.2.1 Ensaio químico com teste de tiocianato"));
        assert_eq!(texts.len(), 7);
    }

    #[test]
    fn test_lone_cocaine_uses_first_slot() {
        let c = classified(&["pd"]);
        let exam_texts = texts(&exams(&c)).join("\n");
        assert!(exam_texts.contains("4.1 Exames realizados para pesquisa de cocaína"));
        assert!(!exam_texts.contains("4.2"));

        let result_texts = texts(&results(&c)).join("\n");
        assert!(result_texts
            .contains("5.1 Resultados obtidos para o material descrito no subitem 2.1:"));
        assert!(result_texts.contains("presente no material questionado."));
    }

    #[test]
    fn test_fallback_without_families() {
        let c = classified(&["comprimido", "liquido"]);
        assert_eq!(
            texts(&exams(&c)),
            vec!["4 EXAMES", "4.1 Exames realizados", "4.1.1 Exame macroscópico."]
        );
        assert_eq!(
            texts(&results(&c))[1],
            "5.1 O exame macroscópico dos materiais descritos nos subitens 2.1 e 2.2 não revelou a presença de substâncias de uso proscrito."
        );
        assert_eq!(
            conclusion_text(&c, BASIS),
            "A partir das análises realizadas, conclui-se que não foram detectadas substâncias de uso proscrito nos materiais analisados."
        );
    }

    #[test]
    fn test_results_list_family_labels_only() {
        let c = classified(&["v", "xx", "r"]);
        let blocks = results(&c);
        let result_texts = texts(&blocks);
        assert_eq!(
            result_texts[1],
            "5.1 Resultados obtidos para os materiais descritos nos subitens 2.1 e 2.3:"
        );
        assert!(result_texts[3].ends_with("presente nos materiais questionados."));
        assert_eq!(result_texts.len(), 4);
    }

    #[test]
    fn test_conclusion_joins_families() {
        let text = conclusion_text(&classified(&["v", "po", "pd"]), BASIS);
        assert!(text.starts_with(
            "A partir das análises realizadas, conclui-se que, no material descrito no subitem 2.1, foi detectada a presença de partes da planta Cannabis sativa L."
        ));
        assert!(text.contains(
            " Outrossim, nos materiais descritos nos subitens 2.2 e 2.3, foi detectada a presença de cocaína"
        ));
        assert_eq!(text.matches(BASIS).count(), 2);
    }

    #[test]
    fn test_single_family_has_no_connective() {
        let text = conclusion_text(&classified(&["r"]), BASIS);
        assert!(!text.contains("Outrossim"));
        assert!(text.ends_with("com fulcro na Portaria nº 344/1998."));
    }
}

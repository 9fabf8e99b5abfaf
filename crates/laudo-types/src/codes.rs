//! Closed vocabularies used by the seizure form
//!
//! Each enum maps a short form code to the Portuguese wording used in the
//! report. Material codes are open: the form may send codes this build does
//! not know, and those are carried through as [`MaterialType::Other`].

use serde::{Deserialize, Serialize};

/// Substance family a material type is examined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstanceFamily {
    /// Cannabis sativa L. (maconha)
    Cannabis,
    /// Cocaine (base or salt)
    Cocaine,
}

/// Physical presentation of the seized material
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaterialType {
    /// `v`: leafy, dried plant material
    DriedPlant,
    /// `po`: powder
    Powder,
    /// `pd`: rock / petrified
    Rock,
    /// `r`: resin
    Resin,
    /// Any code outside the known set, kept verbatim
    Other(String),
}

impl MaterialType {
    /// Known material types, in the order the form lists them
    pub const KNOWN: [MaterialType; 4] = [
        MaterialType::DriedPlant,
        MaterialType::Powder,
        MaterialType::Rock,
        MaterialType::Resin,
    ];

    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "v" => MaterialType::DriedPlant,
            "po" => MaterialType::Powder,
            "pd" => MaterialType::Rock,
            "r" => MaterialType::Resin,
            other => MaterialType::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            MaterialType::DriedPlant => "v",
            MaterialType::Powder => "po",
            MaterialType::Rock => "pd",
            MaterialType::Resin => "r",
            MaterialType::Other(code) => code,
        }
    }

    /// Adjective that follows "material" in the item sentence
    pub fn description(&self) -> &str {
        match self {
            MaterialType::DriedPlant => "vegetal dessecado",
            MaterialType::Powder => "pulverizado",
            MaterialType::Rock => "petrificado",
            MaterialType::Resin => "resinoso",
            MaterialType::Other(code) => code,
        }
    }

    /// Family the material is examined for; `None` for unknown codes
    pub fn family(&self) -> Option<SubstanceFamily> {
        match self {
            MaterialType::DriedPlant | MaterialType::Resin => Some(SubstanceFamily::Cannabis),
            MaterialType::Powder | MaterialType::Rock => Some(SubstanceFamily::Cocaine),
            MaterialType::Other(_) => None,
        }
    }
}

impl From<String> for MaterialType {
    fn from(code: String) -> Self {
        MaterialType::from_code(&code)
    }
}

impl From<MaterialType> for String {
    fn from(material: MaterialType) -> Self {
        material.code().to_string()
    }
}

/// Container the material was received in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackagingType {
    #[serde(rename = "t")]
    Tube,
    #[serde(rename = "sp")]
    Bag,
    #[serde(rename = "pa")]
    Foil,
    #[serde(rename = "fp")]
    Plastic,
    #[serde(rename = "pp")]
    Paper,
}

impl PackagingType {
    pub const ALL: [PackagingType; 5] = [
        PackagingType::Tube,
        PackagingType::Bag,
        PackagingType::Foil,
        PackagingType::Plastic,
        PackagingType::Paper,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PackagingType::Tube => "t",
            PackagingType::Bag => "sp",
            PackagingType::Foil => "pa",
            PackagingType::Plastic => "fp",
            PackagingType::Paper => "pp",
        }
    }

    /// Singular noun phrase
    pub fn noun(&self) -> &'static str {
        match self {
            PackagingType::Tube => "microtubo do tipo eppendorf",
            PackagingType::Bag => "saco plástico",
            PackagingType::Foil => "porção de papel alumínio",
            PackagingType::Plastic => "filme plástico",
            PackagingType::Paper => "invólucro de papel",
        }
    }
}

/// Packaging colour, rendered in agreement with "cor" (feminine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingColor {
    Branco,
    Preto,
    Azul,
    Verde,
    Amarelo,
    Vermelho,
    Rosa,
    Laranja,
    Roxo,
    Cinza,
    Transparente,
}

impl PackagingColor {
    pub const ALL: [PackagingColor; 11] = [
        PackagingColor::Branco,
        PackagingColor::Preto,
        PackagingColor::Azul,
        PackagingColor::Verde,
        PackagingColor::Amarelo,
        PackagingColor::Vermelho,
        PackagingColor::Rosa,
        PackagingColor::Laranja,
        PackagingColor::Roxo,
        PackagingColor::Cinza,
        PackagingColor::Transparente,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PackagingColor::Branco => "branco",
            PackagingColor::Preto => "preto",
            PackagingColor::Azul => "azul",
            PackagingColor::Verde => "verde",
            PackagingColor::Amarelo => "amarelo",
            PackagingColor::Vermelho => "vermelho",
            PackagingColor::Rosa => "rosa",
            PackagingColor::Laranja => "laranja",
            PackagingColor::Roxo => "roxo",
            PackagingColor::Cinza => "cinza",
            PackagingColor::Transparente => "transparente",
        }
    }

    /// Feminine form, agreeing with "de cor ..."
    pub fn feminine(&self) -> &'static str {
        match self {
            PackagingColor::Branco => "branca",
            PackagingColor::Preto => "preta",
            PackagingColor::Azul => "azul",
            PackagingColor::Verde => "verde",
            PackagingColor::Amarelo => "amarela",
            PackagingColor::Vermelho => "vermelha",
            PackagingColor::Rosa => "rosa",
            PackagingColor::Laranja => "laranja",
            PackagingColor::Roxo => "roxa",
            PackagingColor::Cinza => "cinza",
            PackagingColor::Transparente => "transparente",
        }
    }

    /// Transparency is an attribute of the packaging, not a colour: it follows
    /// the packaging noun directly and agrees with it in number.
    pub fn is_adjective(&self) -> bool {
        matches!(self, PackagingColor::Transparente)
    }
}

//! Report configuration: institute identity, signatory, styling and citations
//!
//! Everything that varies between deployments (or between revisions of the
//! institute's template) lives here instead of in the section text. A JSON
//! file may override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generator::errors::LaudoError;

/// Person who signs the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Signatory {
    /// Left out of the signature block when unset
    pub name: Option<String>,
    pub title: String,
    /// Registration line, e.g. "Matrícula nº 00000"
    pub registration: Option<String>,
}

impl Default for Signatory {
    fn default() -> Self {
        Self {
            name: None,
            title: "Perito Criminal".to_string(),
            registration: None,
        }
    }
}

/// Visual settings applied to the whole document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_family: String,
    pub font_size_pt: u32,
    /// Hex RGB without `#`
    pub font_color: String,
    pub heading_color: String,
    /// Margins in centimetres
    pub margin_top_cm: f32,
    pub margin_left_cm: f32,
    pub margin_bottom_cm: f32,
    pub margin_right_cm: f32,
    /// Width the photo is scaled down to, in inches
    pub image_max_width_in: f32,
    /// Uploaded photos wider than this are resampled before embedding
    pub image_max_pixels: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size_pt: 12,
            font_color: "000000".to_string(),
            heading_color: "000000".to_string(),
            margin_top_cm: 3.0,
            margin_left_cm: 3.0,
            margin_bottom_cm: 2.0,
            margin_right_cm: 2.0,
            image_max_width_in: 5.0,
            image_max_pixels: 1600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Centred header lines, top to bottom
    pub header_lines: Vec<String>,
    /// How the history paragraph names the receiving unit ("neste ...")
    pub institute: String,
    /// City in the signature date line
    pub city: String,
    /// UTC offset of the document date, in hours
    pub utc_offset_hours: i32,
    pub signatory: Signatory,
    pub style: StyleConfig,
    /// Statute cited by every conclusion paragraph
    pub legal_basis: String,
    /// Ordinance governing counter-sample custody
    pub custody_ordinance: String,
    pub references: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header_lines: vec![
                "ESTADO DE GOIÁS".to_string(),
                "SECRETARIA DE ESTADO DA SEGURANÇA PÚBLICA".to_string(),
                "SUPERINTENDÊNCIA DE POLÍCIA TÉCNICO-CIENTÍFICA".to_string(),
                "INSTITUTO DE CRIMINALÍSTICA".to_string(),
            ],
            institute: "Instituto de Criminalística".to_string(),
            city: "Goiânia".to_string(),
            utc_offset_hours: -3,
            signatory: Signatory::default(),
            style: StyleConfig::default(),
            legal_basis: "Portaria nº 344/1998, atualizada por meio da RDC nº 970, de 19/03/2025, da Anvisa"
                .to_string(),
            custody_ordinance: "Portaria 0003/2019/SSP".to_string(),
            references: vec![
                "BRASIL. Ministério da Saúde. Secretaria de Vigilância Sanitária. Portaria SVS/MS nº 344, de 12 de maio de 1998. Aprova o Regulamento Técnico sobre substâncias e medicamentos sujeitos a controle especial. Diário Oficial da União, Brasília, DF, 15 maio 1998.".to_string(),
                "GOIÁS. Secretaria de Estado da Segurança Pública. Portaria nº 0003/2019/SSP.".to_string(),
                "SWGDRUG: Scientific Working Group for the Analysis of Seized Drugs. Recommendations.".to_string(),
            ],
        }
    }
}

impl ReportConfig {
    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(raw: &str) -> Result<Self, LaudoError> {
        serde_json::from_str(raw).map_err(|e| LaudoError::ConfigError(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LaudoError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LaudoError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&raw)?;
        info!("Loaded report configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, LaudoError> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }
}

// src/report/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text interpretation keyed by normalized label.
/// Ordered so that serialized records are byte-identical across runs.
pub type Interpretation = BTreeMap<String, String>;

/// A circular boundary as reported by the imaging stage.
/// Serialized as `{"centro": [x, y], "raio": r}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(rename = "centro")]
    pub center: (u64, u64),
    #[serde(rename = "raio")]
    pub radius: u64,
}

/// Pupil and iris boundaries from the report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralMeasurements {
    #[serde(rename = "pupila")]
    pub pupil: Circle,
    pub iris: Circle,
}

/// One `setor_<N>:` block. `index` is whatever the report declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAnalysis {
    #[serde(rename = "setor")]
    pub index: u64,
    #[serde(rename = "contraste")]
    pub contrast: f64,
    #[serde(rename = "homogeneidade")]
    pub homogeneity: f64,
    /// One or two entries, in source order.
    #[serde(rename = "observacoes")]
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollaretteMetrics {
    #[serde(rename = "regularidade")]
    pub regularity: f64,
    #[serde(rename = "circularidade")]
    pub circularity: f64,
}

/// The parsed report. Field names on the wire are fixed: API consumers
/// read `medidas_estruturais`, `analise_setorial`, `analise_collarette`
/// and `interpretacao` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReportRecord {
    #[serde(rename = "medidas_estruturais")]
    pub structural: StructuralMeasurements,
    #[serde(rename = "analise_setorial")]
    pub sectors: Vec<SectorAnalysis>,
    #[serde(rename = "analise_collarette")]
    pub collarette: CollaretteMetrics,
    #[serde(rename = "interpretacao")]
    pub interpretation: Interpretation,
}

impl StructuredReportRecord {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> StructuredReportRecord {
        let mut interpretation = Interpretation::new();
        interpretation.insert("pupila".to_string(), "Normal.".to_string());
        StructuredReportRecord {
            structural: StructuralMeasurements {
                pupil: Circle { center: (100, 100), radius: 30 },
                iris: Circle { center: (101, 99), radius: 50 },
            },
            sectors: vec![SectorAnalysis {
                index: 1,
                contrast: 0.5,
                homogeneity: 0.8,
                observations: vec!["ok".to_string()],
            }],
            collarette: CollaretteMetrics { regularity: 350.0, circularity: 0.85 },
            interpretation,
        }
    }

    #[test]
    fn test_record_uses_wire_field_names() {
        let value = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(value["medidas_estruturais"]["pupila"]["raio"], 30);
        assert_eq!(value["medidas_estruturais"]["iris"]["centro"], serde_json::json!([101, 99]));
        assert_eq!(value["analise_setorial"][0]["setor"], 1);
        assert_eq!(value["analise_setorial"][0]["contraste"], 0.5);
        assert_eq!(value["analise_setorial"][0]["homogeneidade"], 0.8);
        assert_eq!(value["analise_setorial"][0]["observacoes"], serde_json::json!(["ok"]));
        assert_eq!(value["analise_collarette"]["regularidade"], 350.0);
        assert_eq!(value["analise_collarette"]["circularidade"], 0.85);
        assert_eq!(value["interpretacao"]["pupila"], "Normal.");
    }

    #[test]
    fn test_record_reloads_from_json() {
        let record = sample_record();
        let json = record.to_json().unwrap();
        let reloaded: StructuredReportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, record);
    }
}

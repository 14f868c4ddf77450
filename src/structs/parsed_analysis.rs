use serde::{Deserialize, Deserializer};
use crate::structs::defect_result::DefectResult;

pub const SENTINEL_DEFECT_TYPE: &str = "Analysis Error";
pub const SENTINEL_CONFIDENCE: f64 = 50.0;
pub const SENTINEL_SEVERITY: &str = "Unknown";
pub const SENTINEL_DESCRIPTION: &str = "Could not parse AI response properly";

/// Shape the model is asked to reply with. Both keys are optional.
#[derive(Debug, Deserialize)]
pub struct ModelDefectPayload {
    #[serde(default)]
    pub defects_found: Vec<DefectResult>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_defects: Option<u32>,
}

/// Whole numbers are accepted in float form (`2.0`). A negative count is
/// treated as absent, so the number of listed defects is used. Fractions
/// still fail the decode.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(count) if count.fract() != 0.0 || count > f64::from(u32::MAX) => Err(serde::de::Error::custom(
            format!("total_defects {} is not a whole defect count", count),
        )),
        Some(count) if count < 0.0 => Ok(None),
        Some(count) => Ok(Some(count as u32)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAnalysis {
    pub defects_found: Vec<DefectResult>,
    pub total_defects: u32,
    pub fallback: bool,
}

impl ParsedAnalysis {
    pub fn sentinel() -> Self {
        Self {
            defects_found: vec![DefectResult {
                defect_type: SENTINEL_DEFECT_TYPE.to_string(),
                confidence: SENTINEL_CONFIDENCE,
                severity: SENTINEL_SEVERITY.to_string(),
                description: SENTINEL_DESCRIPTION.to_string(),
            }],
            total_defects: 1,
            fallback: true,
        }
    }
}

impl From<ModelDefectPayload> for ParsedAnalysis {
    fn from(payload: ModelDefectPayload) -> Self {
        let total_defects = payload
            .total_defects
            .unwrap_or(payload.defects_found.len() as u32);

        Self {
            defects_found: payload.defects_found,
            total_defects,
            fallback: false,
        }
    }
}

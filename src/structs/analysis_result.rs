use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::helpers::timestamp;
use crate::structs::defect_result::DefectResult;
use crate::structs::parsed_analysis::ParsedAnalysis;

fn analysis_complete_default() -> bool {
    true
}

/// One stored image submission. Never mutated once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub id: String,
    pub filename: String,
    #[serde(with = "timestamp")]
    pub upload_time: DateTime<Utc>,
    pub total_defects: u32,
    pub defects_found: Vec<DefectResult>,
    #[serde(default = "analysis_complete_default")]
    pub analysis_complete: bool,
    #[serde(default)]
    pub image_base64: Option<String>,
}

impl AnalysisResult {
    /// Builds the record for a freshly classified upload with a new id and
    /// creation timestamp. `analysis_complete` is set even when the model
    /// reply fell back to the sentinel.
    pub fn assemble(filename: &str, image_base64: Option<String>, parsed: ParsedAnalysis) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            filename: filename.to_string(),
            upload_time: timestamp::now(),
            total_defects: parsed.total_defects,
            defects_found: parsed.defects_found,
            analysis_complete: true,
            image_base64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(defects: Vec<DefectResult>, total: u32) -> ParsedAnalysis {
        ParsedAnalysis {
            defects_found: defects,
            total_defects: total,
            fallback: false,
        }
    }

    #[test]
    fn assemble_generates_distinct_ids() {
        let first = AnalysisResult::assemble("a.jpg", None, parsed(vec![], 0));
        let second = AnalysisResult::assemble("a.jpg", None, parsed(vec![], 0));
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn assemble_marks_fallback_records_complete() {
        let record = AnalysisResult::assemble("weld.png", Some("aGk=".to_string()), ParsedAnalysis::sentinel());
        assert!(record.analysis_complete);
        assert_eq!(record.total_defects, 1);
        assert_eq!(record.defects_found[0].defect_type, "Analysis Error");
        assert_eq!(record.image_base64.as_deref(), Some("aGk="));
    }

    #[test]
    fn serializes_upload_time_as_text() {
        let record = AnalysisResult::assemble("a.jpg", None, parsed(vec![], 0));
        let value = serde_json::to_value(&record).unwrap();
        let text = value["upload_time"].as_str().unwrap();
        assert_eq!(text, timestamp::format_timestamp(&record.upload_time));
        assert!(value["image_base64"].is_null());
    }

    #[test]
    fn reads_records_written_without_optional_fields() {
        let record: AnalysisResult = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "id": "abc",
            "filename": "bolt.jpg",
            "upload_time": "2024-05-01T10:00:00.5",
            "total_defects": 0,
            "defects_found": []
        }))
        .unwrap();

        assert!(record.analysis_complete);
        assert_eq!(record.image_base64, None);
        assert_eq!(timestamp::format_timestamp(&record.upload_time), "2024-05-01T10:00:00.500000");
    }
}

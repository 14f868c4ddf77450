use crate::structs::parsed_analysis::{ModelDefectPayload, ParsedAnalysis};

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";
const LOGGED_REPLY_PREVIEW_CHARS: usize = 500;

pub struct ResponseParser;

impl ResponseParser {

    /// Turns the model's free-text reply into defects. Never fails: anything
    /// that does not decode into the expected object (bad JSON, a non-object
    /// value, a defect missing a field, wrong field types) is replaced by the
    /// sentinel analysis.
    pub fn parse(raw_reply: &str) -> ParsedAnalysis {
        let cleaned = Self::strip_code_fence(raw_reply);

        match serde_json::from_str::<ModelDefectPayload>(cleaned) {
            Ok(payload) => ParsedAnalysis::from(payload),
            Err(e) => {
                log::warn!(
                    "⚠️ Could not parse model reply ({}), substituting sentinel. Reply: {}",
                    e,
                    Self::preview(raw_reply)
                );
                ParsedAnalysis::sentinel()
            }
        }
    }

    /// Trims whitespace, then drops one leading "```json" and one trailing
    /// "```". Nothing else is removed.
    pub fn strip_code_fence(raw_reply: &str) -> &str {
        let trimmed = raw_reply.trim();
        let without_open = trimmed.strip_prefix(JSON_FENCE_OPEN).unwrap_or(trimmed);
        without_open.strip_suffix(FENCE_CLOSE).unwrap_or(without_open)
    }

    fn preview(raw_reply: &str) -> String {
        let mut preview: String = raw_reply.chars().take(LOGGED_REPLY_PREVIEW_CHARS).collect();
        if raw_reply.chars().count() > LOGGED_REPLY_PREVIEW_CHARS {
            preview.push('…');
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::parsed_analysis::SENTINEL_DEFECT_TYPE;
    use proptest::prelude::*;

    const TWO_DEFECTS: &str = r#"{
        "defects_found": [
            {"defect_type": "Cold Joint", "confidence": 92, "severity": "High", "description": "Incomplete weld penetration"},
            {"defect_type": "Foreign Material", "confidence": 86.5, "severity": "Medium", "description": "Metallic debris"}
        ],
        "total_defects": 2
    }"#;

    fn assert_sentinel(parsed: &ParsedAnalysis) {
        assert!(parsed.fallback);
        assert_eq!(parsed.total_defects, 1);
        assert_eq!(parsed.defects_found.len(), 1);
        let defect = &parsed.defects_found[0];
        assert_eq!(defect.defect_type, SENTINEL_DEFECT_TYPE);
        assert_eq!(defect.confidence, 50.0);
        assert_eq!(defect.severity, "Unknown");
        assert_eq!(defect.description, "Could not parse AI response properly");
    }

    #[test]
    fn parses_plain_json_reply() {
        let parsed = ResponseParser::parse(TWO_DEFECTS);
        assert!(!parsed.fallback);
        assert_eq!(parsed.total_defects, 2);
        assert_eq!(parsed.defects_found[0].defect_type, "Cold Joint");
        assert_eq!(parsed.defects_found[1].confidence, 86.5);
    }

    #[test]
    fn fenced_reply_matches_unfenced_reply() {
        let fenced = format!("\n  ```json\n{}\n```  \n", TWO_DEFECTS);
        assert_eq!(ResponseParser::parse(&fenced), ResponseParser::parse(TWO_DEFECTS));
    }

    #[test]
    fn empty_result_parses_to_zero_defects() {
        let parsed = ResponseParser::parse(r#"{"defects_found": [], "total_defects": 0}"#);
        assert!(!parsed.fallback);
        assert_eq!(parsed.total_defects, 0);
        assert!(parsed.defects_found.is_empty());
    }

    #[test]
    fn non_json_reply_falls_back_to_sentinel() {
        assert_sentinel(&ResponseParser::parse("not json at all"));
    }

    #[test]
    fn empty_reply_falls_back_to_sentinel() {
        assert_sentinel(&ResponseParser::parse("   "));
        assert_sentinel(&ResponseParser::parse("```json```"));
    }

    #[test]
    fn missing_total_defaults_to_defect_count() {
        let parsed = ResponseParser::parse(
            r#"{"defects_found": [{"defect_type": "Crack", "confidence": 70, "severity": "High", "description": "Hairline crack"}]}"#,
        );
        assert_eq!(parsed.total_defects, 1);
        assert!(!parsed.fallback);
    }

    #[test]
    fn missing_defects_key_yields_empty_list() {
        let parsed = ResponseParser::parse(r#"{"total_defects": 3}"#);
        assert!(parsed.defects_found.is_empty());
        assert_eq!(parsed.total_defects, 3);
    }

    #[test]
    fn model_total_is_kept_even_when_inconsistent() {
        let parsed = ResponseParser::parse(r#"{"defects_found": [], "total_defects": 4}"#);
        assert_eq!(parsed.total_defects, 4);
    }

    #[test]
    fn defect_missing_a_field_falls_back_to_sentinel() {
        let parsed = ResponseParser::parse(
            r#"{"defects_found": [{"defect_type": "Crack", "confidence": 70}], "total_defects": 1}"#,
        );
        assert_sentinel(&parsed);
    }

    #[test]
    fn non_object_json_falls_back_to_sentinel() {
        assert_sentinel(&ResponseParser::parse("[1, 2, 3]"));
        assert_sentinel(&ResponseParser::parse("42"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed = ResponseParser::parse(
            r#"{"defects_found": [], "total_defects": 0, "notes": "clean part"}"#,
        );
        assert!(!parsed.fallback);
    }

    #[test]
    fn only_the_json_fence_prefix_is_stripped() {
        assert_eq!(ResponseParser::strip_code_fence("```\n{}\n```"), "```\n{}\n");
        assert_eq!(ResponseParser::strip_code_fence("```json{}```"), "{}");
        assert_eq!(ResponseParser::strip_code_fence("```"), "");
    }

    #[test]
    fn plain_fence_without_language_falls_back() {
        assert_sentinel(&ResponseParser::parse("```\n{\"defects_found\": []}\n```"));
    }

    #[test]
    fn whole_float_total_is_accepted() {
        let parsed = ResponseParser::parse(
            r#"{"defects_found": [{"defect_type": "Crack", "confidence": 88, "severity": "High", "description": "Hairline"}], "total_defects": 1.0}"#,
        );
        assert!(!parsed.fallback);
        assert_eq!(parsed.total_defects, 1);
        assert_eq!(parsed.defects_found[0].defect_type, "Crack");
    }

    #[test]
    fn negative_total_falls_back_to_defect_count() {
        let parsed = ResponseParser::parse(&TWO_DEFECTS.replace("\"total_defects\": 2", "\"total_defects\": -1"));
        assert!(!parsed.fallback);
        assert_eq!(parsed.total_defects, 2);
    }

    #[test]
    fn fractional_total_is_sentinel() {
        let parsed = ResponseParser::parse(r#"{"defects_found": [], "total_defects": 2.5}"#);
        assert_sentinel(&parsed);
    }

    proptest! {
        #[test]
        fn fencing_never_changes_the_parse(
            total in 0u32..50,
            defect_type in "[A-Za-z ]{1,20}",
            confidence in 0u32..=100,
            leading in "[ \n\t]{0,3}",
            trailing in "[ \n\t]{0,3}",
        ) {
            let body = format!(
                r#"{{"defects_found": [{{"defect_type": "{}", "confidence": {}, "severity": "Low", "description": "d"}}], "total_defects": {}}}"#,
                defect_type, confidence, total
            );
            let fenced = format!("{}```json{}```{}", leading, body, trailing);
            prop_assert_eq!(ResponseParser::parse(&fenced), ResponseParser::parse(&body));
        }

        #[test]
        fn arbitrary_text_always_yields_a_result(reply in ".*") {
            let parsed = ResponseParser::parse(&reply);
            if parsed.fallback {
                prop_assert_eq!(parsed.total_defects, 1);
                prop_assert_eq!(parsed.defects_found.len(), 1);
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use crate::structs::analysis_result::AnalysisResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub message: String,
    pub analysis: Option<AnalysisResult>,
}

impl AnalysisResponse {
    pub fn completed(analysis: AnalysisResult) -> Self {
        Self {
            success: true,
            message: format!("Analysis complete. Found {} defects.", analysis.total_defects),
            analysis: Some(analysis),
        }
    }
}

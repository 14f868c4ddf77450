use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectResult {
    pub defect_type: String,
    pub confidence: f64,
    pub severity: String,
    pub description: String,
}

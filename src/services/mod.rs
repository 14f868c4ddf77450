pub mod ai_providers;
pub mod defect_analyzer;
pub mod defect_classifier;
pub mod response_parser;
pub mod stores;

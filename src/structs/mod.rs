pub mod ai;
pub mod analysis_response;
pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod defect_result;
pub mod image_upload;
pub mod parsed_analysis;

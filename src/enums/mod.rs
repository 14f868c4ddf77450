pub mod ai_provider_error;
pub mod commands;
pub mod storage_backend;

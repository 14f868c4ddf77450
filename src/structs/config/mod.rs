pub mod ai_config;
pub mod config;
pub mod database_config;
pub mod logging_config;
pub mod server_config;

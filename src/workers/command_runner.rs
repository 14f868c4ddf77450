use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use serde::Serialize;
use crate::api::api_server::ApiServer;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{DEFAULT_CONTENT_TYPE, SUPPORTED_IMAGE_EXTENSIONS};
use crate::enums::commands::Commands;
use crate::errors::{DetectiveError, DetectiveResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::create_provider;
use crate::services::defect_analyzer::DefectAnalyzer;
use crate::services::stores::create_store;
use crate::services::stores::memory_store::MemoryAnalysisStore;
use crate::structs::analysis_response::AnalysisResponse;
use crate::structs::config::config::Config;
use crate::structs::image_upload::ImageUpload;
use crate::traits::analysis_store::AnalysisStore;

pub struct CommandRunner {
    config: Config,
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DetectiveResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { path, no_save } => self.analyze_command(&path, no_save).await,
            Commands::History { limit } => self.history_command(limit).await,
            Commands::Show { id } => self.show_command(&id).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn serve_command(&mut self, host: Option<String>, port: Option<u16>) -> DetectiveResult<()> {
        if let Some(host) = host {
            self.config.server.host = host;
        }
        if let Some(port) = port {
            self.config.server.port = port;
        }

        log::info!("🚀 Starting Defect Detective API...");
        let analyzer = self.build_analyzer(None).await?;
        ApiServer::new(Arc::new(analyzer), self.config.server.clone()).run().await
    }

    fn init_command(&self) -> DetectiveResult<()> {
        let path = self.config_path.clone().unwrap_or_else(ConfigManager::default_config_path);
        log::info!("🚀 Initializing Defect Detective configuration...");

        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Edit {} and export {} before running 'defect-detective serve'.", path.display(), self.config.ai.api_key_env);
        Ok(())
    }

    fn validate_command(&self) -> DetectiveResult<()> {
        let api_key_present = self.config.ai.api_key().is_some();

        match ConfigManager::validate_config(&self.config, api_key_present) {
            Ok(()) => {
                log::info!("✅ Configuration is valid (storage: {}, model: {})", self.config.database.backend, self.config.ai.model);
                Ok(())
            }
            Err(problems) => {
                for problem in &problems {
                    log::error!("❌ {}", problem);
                }
                Err(DetectiveError::config_error(
                    &format!("{} configuration problem(s) found", problems.len()),
                    None,
                ))
            }
        }
    }

    async fn analyze_command(&self, path: &Path, no_save: bool) -> DetectiveResult<()> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let upload = ImageUpload::new(&filename, Some(content_type_for(path)), bytes);

        let store: Option<Arc<dyn AnalysisStore>> = if no_save {
            Some(Arc::new(MemoryAnalysisStore::new()))
        } else {
            None
        };
        let analyzer = self.build_analyzer(store).await?;

        let mut spinner = AnimatedLogger::analyzing(&filename);
        spinner.start();

        match analyzer.analyze(upload).await {
            Ok(analysis) => {
                let elapsed = spinner.succeed(analysis.total_defects).await;
                log::debug!("🔍 Model round trip for '{}' took {:.2}s", filename, elapsed.as_secs_f64());
                print_json(&AnalysisResponse::completed(analysis))
            }
            Err(e) => {
                spinner.fail(&e).await;
                Err(e)
            }
        }
    }

    async fn history_command(&self, limit: u32) -> DetectiveResult<()> {
        let store = create_store(&self.config.database).await?;
        let analyses = store.list_recent(limit).await?;
        log::info!("📚 {} analysis record(s)", analyses.len());
        print_json(&analyses)
    }

    async fn show_command(&self, id: &str) -> DetectiveResult<()> {
        let store = create_store(&self.config.database).await?;
        let analysis = store.get_by_id(id).await?;
        print_json(&analysis)
    }

    async fn build_analyzer(&self, store: Option<Arc<dyn AnalysisStore>>) -> DetectiveResult<DefectAnalyzer> {
        let store = match store {
            Some(store) => store,
            None => create_store(&self.config.database).await?,
        };
        let provider = create_provider(&self.config.ai);

        Ok(DefectAnalyzer::new(provider, store, self.config.ai.store_image))
    }
}

/// Declared type for a local file, from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    SUPPORTED_IMAGE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

fn print_json<T: Serialize>(value: &T) -> DetectiveResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;
use crate::api::handlers::{
    analyze_handler, get_analysis_handler, handle_rejection, history_handler, root_handler, HistoryQuery,
};
use crate::config::constants::{CORS_ALLOWED_HEADERS, CORS_ALLOWED_METHODS};
use crate::errors::{DetectiveError, DetectiveResult};
use crate::services::defect_analyzer::DefectAnalyzer;
use crate::structs::config::server_config::ServerConfig;

pub struct ApiServer {
    analyzer: Arc<DefectAnalyzer>,
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(analyzer: Arc<DefectAnalyzer>, config: ServerConfig) -> Self {
        Self { analyzer, config }
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> DetectiveResult<()> {
        let addr = self.resolve_address().await?;
        let routes = self.routes();

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutdown signal received");
            })
            .map_err(|e| DetectiveError::config_error(&format!("Failed to bind {}: {}", addr, e), Some("server.port")))?;

        log::info!("🌐 Defect Detective API listening on http://{} (store: {})", bound, self.analyzer.store_backend());
        server.await;
        log::info!("✅ Server shutdown complete");

        Ok(())
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        let root = warp::path::end()
            .and(warp::get())
            .and_then(root_handler);

        self.create_api_routes(Arc::clone(&self.analyzer))
            .or(root)
            .recover(handle_rejection)
            .with(self.cors())
            // CORS refusals are rejections raised outside the routes.
            .recover(handle_rejection)
            .with(warp::log("defect_detective::api"))
    }

    fn create_api_routes(
        &self,
        analyzer: Arc<DefectAnalyzer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));
        let upload_limit = self.config.max_upload_bytes.unwrap_or(u64::MAX);

        let analyze = warp::path!("api" / "analyze")
            .and(warp::post())
            .and(warp::multipart::form().max_length(upload_limit))
            .and(analyzer_filter.clone())
            .and_then(analyze_handler);

        let history = warp::path!("api" / "history")
            .and(warp::get())
            .and(warp::query::<HistoryQuery>())
            .and(analyzer_filter.clone())
            .and_then(history_handler);

        let get_analysis = warp::path!("api" / "analysis" / String)
            .and(warp::get())
            .and(analyzer_filter)
            .and_then(get_analysis_handler);

        analyze
            .or(history)
            .or(get_analysis)
    }

    fn cors(&self) -> warp::cors::Builder {
        let builder = warp::cors()
            .allow_credentials(true)
            .allow_methods(CORS_ALLOWED_METHODS.to_vec())
            .allow_headers(CORS_ALLOWED_HEADERS.to_vec());

        if self.config.allows_any_origin() {
            builder.allow_any_origin()
        } else {
            builder.allow_origins(self.config.cors_origins.iter().map(|origin| origin.as_str()))
        }
    }

    async fn resolve_address(&self) -> DetectiveResult<SocketAddr> {
        let target = format!("{}:{}", self.config.host, self.config.port);
        let resolved = tokio::net::lookup_host(&target)
            .await?
            .next()
            .ok_or_else(|| DetectiveError::config_error(&format!("Cannot resolve {}", target), Some("server.host")));
        resolved
    }
}

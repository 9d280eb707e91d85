use crate::app::DashboardApp;
use crate::client::HttpMetricsClient;
use crate::domain::types::BaseUrl;
use crate::models::config::DashboardConfig;
use crate::render::TermRenderer;

pub mod app;
pub mod client;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod render;
pub mod services;

/// Builds the metrics client and runs the interactive dashboard loop using
/// the provided configuration.
pub async fn run(config: DashboardConfig) -> std::io::Result<()> {
    let base_url = BaseUrl::new(config.base_url.as_str())
        .map_err(|e| std::io::Error::other(format!("Invalid base URL: {e}")))?;

    if config.per_page == 0 {
        return Err(std::io::Error::other("per_page must be greater than zero"));
    }

    let client = HttpMetricsClient::new(base_url);
    let renderer = TermRenderer::new();

    let mut dashboard = DashboardApp::new(client, renderer, config.per_page);
    dashboard.run().await
}

//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the dashboard session.
pub struct DashboardConfig {
    /// Base URL of the analytics service, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Rows requested per trip-details page; fixed for the session.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

use std::path::PathBuf;

use log::{debug, info};
use rocket::tokio;
use url::Url;

use crate::models::portfolio::Portfolio;

/// Where the portfolio document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Remote(Url),
}

impl DataSource {
    /// http(s) URLs are fetched; anything else is a path relative to the
    /// working directory.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => DataSource::Remote(url),
            _ => DataSource::File(PathBuf::from(raw)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::File(path) => path.display().to_string(),
            DataSource::Remote(url) => url.to_string(),
        }
    }
}

/// Single attempt: no retry, no timeout, no cache.
pub async fn fetch(source: &DataSource) -> Result<Portfolio, String> {
    debug!("Fetching portfolio from {}", source.describe());
    let portfolio = match source {
        DataSource::File(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            Portfolio::from_json(&raw)?
        }
        DataSource::Remote(url) => {
            let response = reqwest::get(url.clone())
                .await
                .map_err(|e| format!("Failed to fetch data: {}", e))?;
            if !response.status().is_success() {
                return Err(format!("Failed to fetch data: HTTP {}", response.status()));
            }
            response
                .json::<Portfolio>()
                .await
                .map_err(|e| format!("Invalid portfolio JSON: {}", e))?
        }
    };
    info!("Loaded portfolio from {}", source.describe());
    Ok(portfolio)
}

//! Remote ingestion - fetches a discovery document from a live site

use crate::catalog::error::CatalogError;
use crate::catalog::ingest::ingest;
use crate::catalog::model::Catalog;
use crate::constants::DISCOVERY_PATH;

/// Effective fetch target for a site URL.
///
/// The discovery path is appended unless the URL already contains it.
pub fn discovery_url(site_url: &str) -> Result<String, CatalogError> {
    let url = site_url.trim();
    if url.is_empty() {
        return Err(CatalogError::Input);
    }
    if url.contains(DISCOVERY_PATH) {
        return Ok(url.to_string());
    }
    let base = url.strip_suffix('/').unwrap_or(url);
    Ok(format!("{}{}", base, DISCOVERY_PATH))
}

/// Fetch and ingest the discovery document served by `site_url`
pub async fn fetch_catalog(client: &reqwest::Client, site_url: &str) -> Result<Catalog, CatalogError> {
    let target = discovery_url(site_url)?;
    tracing::info!(url = %target, "Fetching API description");

    let response = client.get(&target).send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %target, status = status.as_u16(), "Discovery request failed");
        return Err(CatalogError::Http(status.as_u16()));
    }

    let body = response.text().await?;
    let raw: serde_json::Value = serde_json::from_str(&body)?;
    Ok(ingest(raw))
}

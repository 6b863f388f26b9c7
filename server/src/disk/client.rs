//! Yandex.Disk REST API client
//!
//! Only the two read-only calls the front-end needs: listing a public
//! folder and obtaining a signed download URL. Every call is a single
//! attempt; failures are classified into [`DiskError`] categories.

use super::error::DiskError;
use super::models::{parse_listing, DownloadLink, FileEntry};

pub const DEFAULT_API_URL: &str = "https://cloud-api.yandex.net/v1/disk";

const LISTING: &str = "fetching the file list";
const DOWNLOADING: &str = "downloading the file";

pub struct DiskClient {
    base_url: String,
    client: reqwest::Client,
}

impl DiskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// List the contents of the public resource identified by `public_key`.
    pub async fn list_public(&self, public_key: &str) -> Result<Vec<FileEntry>, DiskError> {
        let url = format!("{}/public/resources", self.base_url);
        tracing::debug!("Listing public resource {}", public_key);

        let body = self
            .get_json_body(&url, &[("public_key", public_key)], LISTING)
            .await?;
        let entries = parse_listing(&body).map_err(|e| DiskError::from_body(e, LISTING))?;

        tracing::info!("Listed {} entries for public resource {}", entries.len(), public_key);
        Ok(entries)
    }

    /// Ask the API for a signed, short-lived download URL for `path`.
    pub async fn download_link(&self, path: &str) -> Result<String, DiskError> {
        let url = format!("{}/resources/download", self.base_url);

        let body = self.get_json_body(&url, &[("path", path)], DOWNLOADING).await?;
        let link: DownloadLink =
            serde_json::from_slice(&body).map_err(|e| DiskError::from_body(e, DOWNLOADING))?;

        link.usable_href().ok_or_else(|| {
            tracing::warn!("API granted no download link for {}", path);
            DiskError::NoDownloadUrl
        })
    }

    /// Open the signed URL. The body is left unread for the caller to stream.
    pub async fn open_download(&self, href: &str) -> Result<reqwest::Response, DiskError> {
        self.client
            .get(href)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| DiskError::from_transport(e, DOWNLOADING))
    }

    async fn get_json_body(
        &self,
        url: &str,
        query: &[(&str, &str)],
        doing: &'static str,
    ) -> Result<Vec<u8>, DiskError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| DiskError::from_transport(e, doing))?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| DiskError::from_transport(e, doing))?;
        Ok(body.to_vec())
    }
}

//! Shapes of the Yandex.Disk API responses we consume.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Dir,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::File => "file",
            ResourceKind::Dir => "dir",
        }
    }
}

/// One file or folder of a public listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[derive(Deserialize)]
struct EmbeddedItems {
    #[serde(default)]
    items: Option<Vec<FileEntry>>,
}

/// `GET /public/resources` body. Folder contents normally sit under
/// `_embedded.items`; a top-level `items` array takes precedence.
#[derive(Deserialize)]
struct PublicResource {
    #[serde(default)]
    items: Option<Vec<FileEntry>>,
    #[serde(default, rename = "_embedded")]
    embedded: Option<EmbeddedItems>,
}

/// `GET /resources/download` body
#[derive(Debug, Deserialize)]
pub struct DownloadLink {
    #[serde(default)]
    pub href: Option<String>,
}

impl DownloadLink {
    pub fn usable_href(self) -> Option<String> {
        self.href.filter(|h| !h.is_empty())
    }
}

/// Parse a listing body into entries, preserving API order.
///
/// A body without items yields an empty list. Any malformed item fails
/// the whole parse.
pub fn parse_listing(body: &[u8]) -> Result<Vec<FileEntry>, serde_json::Error> {
    let resource: PublicResource = serde_json::from_slice(body)?;
    let items = resource
        .items
        .or_else(|| resource.embedded.and_then(|e| e.items))
        .unwrap_or_default();
    Ok(items)
}

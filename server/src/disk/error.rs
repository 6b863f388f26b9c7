use thiserror::Error;

/// Failures talking to the Yandex.Disk API.
///
/// The display text is what users see; the wrapped sources only go to the log.
#[derive(Error, Debug)]
pub enum DiskError {
    #[error("Invalid public link format.")]
    InvalidLink,
    #[error("Error connecting to the Yandex.Disk API.")]
    Connection(#[source] reqwest::Error),
    #[error("Error processing the Yandex.Disk API response.")]
    Parse(#[source] serde_json::Error),
    #[error("Could not obtain a download link for the file.")]
    NoDownloadUrl,
    #[error("Unknown error while {0}.")]
    Unknown(&'static str),
}

impl DiskError {
    /// Sort a transport error into a coarse category, logging the details.
    pub fn from_transport(err: reqwest::Error, doing: &'static str) -> Self {
        if err.is_builder() {
            tracing::error!(error = %err, "Unexpected error while {}", doing);
            DiskError::Unknown(doing)
        } else {
            tracing::error!(error = %err, "API request failed while {}", doing);
            DiskError::Connection(err)
        }
    }

    pub fn from_body(err: serde_json::Error, doing: &'static str) -> Self {
        tracing::error!(error = %err, "Malformed API response while {}", doing);
        DiskError::Parse(err)
    }
}

//! Download proxy
//!
//! Resolves a disk path to a signed URL and streams the upstream body
//! through unmodified.

use crate::api::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use tokio_stream::StreamExt;

use super::error::AppError;
use super::page::percent_encode;

pub fn download_routes() -> Router<AppState> {
    Router::new().route("/download/*file_path", get(download_file))
}

async fn download_file(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> Result<Response, AppError> {
    // The route carries a trailing slash after the path
    let file_path = file_path.trim_end_matches('/');
    if file_path.is_empty() {
        return Err(AppError::BadRequest(
            "Error downloading file: no file path given.".into(),
        ));
    }

    let href = state.disk.download_link(file_path).await?;
    let upstream = state.disk.open_download(&href).await?;

    let filename = file_path.rsplit('/').next().unwrap_or(file_path);

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| {
            let guessed = mime_guess::from_path(filename).first_or_octet_stream();
            HeaderValue::from_str(guessed.as_ref())
                .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"))
        });
    let content_length = upstream.headers().get(header::CONTENT_LENGTH).cloned();

    tracing::info!("Streaming download of {} ({:?})", file_path, content_type);

    let source = file_path.to_string();
    let stream = async_stream::stream! {
        let mut chunks = Box::pin(upstream.bytes_stream());
        while let Some(chunk) = chunks.next().await {
            match chunk {
                Ok(bytes) => yield Ok::<_, std::io::Error>(bytes),
                Err(e) => {
                    tracing::error!("Upstream stream failed for {}: {}", source, e);
                    yield Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
                    return;
                }
            }
        }
    };

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_DISPOSITION, content_disposition(filename));
    if let Some(length) = content_length {
        builder = builder.header(header::CONTENT_LENGTH, length);
    }

    builder
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
}

/// `attachment` disposition naming the file; non-ASCII names also get an
/// RFC 5987 `filename*` parameter with an ASCII fallback.
fn content_disposition(filename: &str) -> HeaderValue {
    let plain = filename.is_ascii() && !filename.chars().any(|c| c.is_ascii_control());
    let value = if plain {
        format!("attachment; filename=\"{}\"", quote(filename))
    } else {
        let fallback: String = filename
            .chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
            .collect();
        let encoded = percent_encode(filename, |b| {
            b.is_ascii_alphanumeric()
                || matches!(b, b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~')
        });
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            quote(&fallback),
            encoded
        )
    };

    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn quote(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

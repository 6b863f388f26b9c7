pub mod client;
pub mod error;
pub mod link;
pub mod models;

#[cfg(test)]
pub(crate) mod fake;

pub use client::DiskClient;
pub use error::DiskError;
pub use link::extract_public_key;
pub use models::{FileEntry, ResourceKind};

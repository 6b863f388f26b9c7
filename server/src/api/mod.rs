pub mod rest;

use crate::config::Config;
use crate::disk::DiskClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub disk: Arc<DiskClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            disk: Arc::new(DiskClient::new(&config.disk_api_url)),
            config,
        }
    }
}

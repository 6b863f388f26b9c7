use crate::disk::client::DEFAULT_API_URL;
use std::net::{IpAddr, SocketAddr};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_name: String,
    pub listen_addr: IpAddr,
    pub rest_port: u16,
    pub disk_api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            server_name: std::env::var("SERVER_NAME")
                .unwrap_or_else(|_| "Yandex.Disk viewer".to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()?,
            rest_port: std::env::var("REST_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            disk_api_url: std::env::var("DISK_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.rest_port)
    }
}

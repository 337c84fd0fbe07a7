//! API server settings

use std::{env, net::SocketAddr};

use crate::error::ApiError;

mod defaults {
    pub const API_HOST: &str = "0.0.0.0";
    pub const API_PORT: &str = "8080";
}

/// Listen address from `API_HOST` / `API_PORT`
pub fn listen_addr() -> Result<SocketAddr, ApiError> {
    resolve(env::var("API_HOST").ok(), env::var("API_PORT").ok())
}

fn resolve(host: Option<String>, port: Option<String>) -> Result<SocketAddr, ApiError> {
    let host = host.unwrap_or_else(|| defaults::API_HOST.to_string());
    let port = port.unwrap_or_else(|| defaults::API_PORT.to_string());

    let port = port
        .trim()
        .parse::<u16>()
        .map_err(|e| ApiError::invalid_config("API_PORT", e))?;

    format!("{host}:{port}")
        .parse()
        .map_err(|e| ApiError::invalid_config("API_HOST", e))
}

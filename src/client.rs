use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::config::Config;
use crate::redfish::{self, SystemRoot};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("GET {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {path} returned {status}")]
    Status {
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("GET {path} returned an undecodable body: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct RedfishClient {
    http: Client,
    base: String,
    user: String,
    password: String,
}

impl RedfishClient {
    pub fn new(cfg: &Config) -> Result<Self, FetchError> {
        let http = Client::builder()
            .danger_accept_invalid_certs(!cfg.verify_tls)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(FetchError::Build)?;

        // Bare hosts default to https; an explicit scheme is kept as-is.
        let base = if cfg.host.contains("://") {
            cfg.host.clone()
        } else {
            format!("https://{}", cfg.host)
        };

        Ok(Self {
            http,
            base,
            user: cfg.user.clone(),
            password: cfg.password.clone(),
        })
    }

    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base, path);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await
            .map_err(|source| FetchError::Request {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(path = %path, status = %status, body = %body, "get command failed");
            return Err(FetchError::Status {
                path: path.to_string(),
                status,
                body,
            });
        }

        response.json::<T>().await.map_err(|source| FetchError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    client: RedfishClient,
    pub serial_number: String,
    pub host_name: String,
}

impl Session {
    pub async fn establish(client: RedfishClient) -> Result<Self, FetchError> {
        let root: SystemRoot = client.fetch(redfish::SYSTEM_ROOT).await?;
        Ok(Self {
            client,
            serial_number: root.serial_number,
            host_name: root.host_name,
        })
    }

    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.client.fetch(path).await
    }
}

use crate::client::http_client;
use crate::error::{GtfError, Result};
use crate::utils::remove_partial_file;
use futures_util::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

const WRITE_BUFFER_SIZE: usize = 1024 * 1024;

/// Retrieves a URL into a local file.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Plain HTTP(S) GET, one request per call.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: &'static Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_client(http_client())
    }

    pub fn with_client(client: &'static Client) -> Self {
        Self { client }
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| GtfError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GtfError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(dest)
            .await?;

        let mut stream = response.bytes_stream();
        let mut buffer = Vec::with_capacity(WRITE_BUFFER_SIZE);
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| GtfError::Fetch {
                url: url.to_string(),
                source,
            })?;
            buffer.extend_from_slice(&chunk);
            if buffer.len() >= WRITE_BUFFER_SIZE {
                file.write_all(&buffer).await?;
                buffer.clear();
            }
        }

        if !buffer.is_empty() {
            file.write_all(&buffer).await?;
        }
        file.flush().await?;
        Ok(())
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        log::debug!("GET {}", url);
        let result = self.download(url, dest).await;
        if result.is_err() {
            // 下载失败时删除残留文件，否则下次运行会被误判为已下载
            remove_partial_file(dest).await;
        }
        result
    }
}

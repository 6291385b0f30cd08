use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GtfError>;

#[derive(Debug, thiserror::Error)]
pub enum GtfError {
    /// 运行环境中缺少必需的发布配置
    #[error("environment variable {0} is not set")]
    MissingConfig(&'static str),

    #[error("environment variable {0} is set but is not valid UTF-8")]
    NotUnicode(&'static str),

    #[error("failed to download {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server answered {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decompress {path:?}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

use std::net::SocketAddr;

use servicemap_shared::error::DataLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),

    #[error("failed to read dataset {path}: {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {path} is unusable: {source}")]
    Dataset {
        path: String,
        #[source]
        source: DataLoadError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

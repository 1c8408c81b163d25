use std::path::PathBuf;

/// Errors raised while loading the site configuration.
///
/// Nothing else in the application is fallible: the photo catalog is built
/// from authored data and the lightbox treats bad input as a no-op.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

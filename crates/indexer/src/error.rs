use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// The label source could not be opened or read. Fatal at startup: the
    /// engine cannot serve lookups without its table.
    #[error("label table unavailable at {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

use std::io;
use std::path::PathBuf;

/// Failure of a whole search. No partial results are returned alongside it.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("error opening file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading dictionary: {0}")]
    Read(#[source] io::Error),
}

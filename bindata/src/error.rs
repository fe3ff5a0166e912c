use std::io;

/// An error returned by generated asset accessors.
///
/// Embedded data is never trusted blindly: a corrupt or truncated frame is
/// reported here with the asset's name instead of aborting the process.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Read {name:?}: {source}")]
    Decode {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("Asset {0:?} not found")]
    NotFound(String),
    #[error("No embedded assets have been registered")]
    NotRegistered,
}

impl ReadError {
    /// Wraps a decompression failure with the name of the asset being read.
    pub fn decode(name: &str, source: io::Error) -> Self {
        Self::Decode {
            name: name.to_owned(),
            source,
        }
    }
}

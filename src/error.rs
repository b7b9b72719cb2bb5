//! Crate-level error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers of the scene layer and the CLI. The layout
/// core itself never errors: no-space is an `Option` sentinel and malformed
/// canvas input is a documented pass-through no-op.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Scene file could not be read or written
    #[error("failed to read scene '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scene file is not valid TOML
    #[error("invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Scene could not be serialized back to TOML
    #[error("could not serialize scene: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A request referenced an item id that is not on the board
    #[error("unknown item id '{0}'")]
    UnknownItem(String),

    /// Scene declares a non-positive canvas
    #[error("canvas dimensions must be positive, got {w}x{h}")]
    InvalidCanvas { w: i32, h: i32 },
}

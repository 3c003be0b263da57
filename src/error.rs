use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving the canvas or loading a background
#[derive(Debug, Error)]
pub enum FileError {
    /// The source file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not an image the decoder understands
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The rendered canvas could not be written out
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image is wider or taller than the GPU can hold as one texture
    #[error("{path} is {width}x{height}, larger than the {max_side}px texture limit")]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_side: usize,
    },

    /// Nothing to export: the canvas has no area
    #[error("Canvas is empty ({width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Result type for save/load operations
pub type Result<T> = std::result::Result<T, FileError>;

//! Asset loading for scene resources

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Errors raised while loading scene assets
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read from disk
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the unreadable file
        path: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file was readable but not decodable as an image
    #[error("failed to decode image {path}: {reason}")]
    Decode {
        /// Path of the undecodable file
        path: String,
        /// Decoder-reported reason
        reason: String,
    },

    /// The image decoded to a channel count the renderer does not handle
    #[error("image {path} has {channels} color channels; only RGB (3) and RGBA (4) are supported")]
    UnsupportedChannels {
        /// Path of the rejected file
        path: String,
        /// Detected channel count
        channels: u8,
    },
}

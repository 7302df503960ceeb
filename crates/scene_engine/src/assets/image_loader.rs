//! Image loading for texture data
//!
//! Decodes image files into 8-bit-per-channel raster data ready for GPU
//! upload. The renderer only accepts RGB and RGBA images; any other channel
//! count is rejected at load time rather than at upload time.

use crate::assets::AssetError;
use image::{DynamicImage, ImageError};
use std::path::Path;

/// Decoded image data ready for GPU upload
///
/// Pixel rows are stored bottom-to-top (vertically flipped relative to the
/// file) to match the texture coordinate origin of the rendering pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw pixel data, `channels` bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels: 3 (RGB) or 4 (RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// # Errors
    /// Returns [`AssetError::Io`] if the file is unreadable,
    /// [`AssetError::Decode`] if it is not a decodable image, and
    /// [`AssetError::UnsupportedChannels`] if the decoded channel count is
    /// neither 3 nor 4.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();
        log::debug!("Loading image from: {}", path_ref.display());

        let img = image::open(path_ref).map_err(|err| match err {
            ImageError::IoError(source) => AssetError::Io {
                path: path_ref.display().to_string(),
                source,
            },
            other => AssetError::Decode {
                path: path_ref.display().to_string(),
                reason: other.to_string(),
            },
        })?;

        Self::from_dynamic(img, &path_ref.display().to_string())
    }

    /// Load an image from memory (useful for embedded resources)
    ///
    /// # Errors
    /// Returns [`AssetError::Decode`] on undecodable bytes and
    /// [`AssetError::UnsupportedChannels`] on a rejected channel count.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes).map_err(|err| AssetError::Decode {
            path: "<memory>".to_string(),
            reason: err.to_string(),
        })?;

        Self::from_dynamic(img, "<memory>")
    }

    fn from_dynamic(img: DynamicImage, path: &str) -> Result<Self, AssetError> {
        let channels = img.color().channel_count();

        // Rows are flipped so index 0 is the bottom row, matching the
        // target coordinate convention for texture sampling.
        let img = img.flipv();

        match channels {
            3 => {
                let rgb = img.to_rgb8();
                let (width, height) = rgb.dimensions();
                log::info!("Loaded RGB image {path} ({width}x{height})");
                Ok(Self {
                    data: rgb.into_raw(),
                    width,
                    height,
                    channels: 3,
                })
            }
            4 => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                log::info!("Loaded RGBA image {path} ({width}x{height})");
                Ok(Self {
                    data: rgba.into_raw(),
                    width,
                    height,
                    channels: 4,
                })
            }
            channels => Err(AssetError::UnsupportedChannels {
                path: path.to_string(),
                channels,
            }),
        }
    }

    /// Create a solid color RGBA image (useful for testing and defaults)
    #[must_use]
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Size of the pixel data in bytes
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

//! Receipt photo compression.
//!
//! Receipts are phone photos; the store only holds a URL, and the CDN plan
//! is small, so photos are downscaled and re-encoded before upload. The
//! quality steps down until the encoded size fits the target or the quality
//! floor is hit, whichever comes first, inside a bounded loop.

use image::{DynamicImage, codecs::jpeg::JpegEncoder, imageops::FilterType};

use crate::Error;

/// Photos wider than this are downscaled, preserving aspect ratio.
pub const MAX_WIDTH: u32 = 1280;

// Backstop for a mis-configured step; (90 - 15) / 10 needs 9 encodes.
const MAX_ENCODE_ATTEMPTS: u32 = 16;

/// Size and quality targets for [compress_receipt].
///
/// Quality is the JPEG quality percentage (the 0.90/0.15 fractions of the
/// browser canvas API map to 90/15 here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionLimits {
    /// Stop once the encoded image is at most this many bytes.
    pub max_bytes: usize,
    /// The quality of the first encode.
    pub starting_quality: u8,
    /// How much the quality drops per attempt.
    pub quality_step: u8,
    /// The quality floor; the encode at this quality is returned as-is even
    /// if it is still over the size target.
    pub minimum_quality: u8,
}

impl Default for CompressionLimits {
    fn default() -> Self {
        Self {
            max_bytes: 200 * 1024,
            starting_quality: 90,
            quality_step: 10,
            minimum_quality: 15,
        }
    }
}

/// Downscale and re-encode a receipt photo as JPEG.
///
/// # Errors
/// Returns [Error::InvalidImage] if the input cannot be decoded as an image
/// or the re-encode fails.
pub fn compress_receipt(bytes: &[u8], limits: &CompressionLimits) -> Result<Vec<u8>, Error> {
    let image = image::load_from_memory(bytes)
        .map_err(|error| Error::InvalidImage(error.to_string()))?;

    let image = if image.width() > MAX_WIDTH {
        image.resize(MAX_WIDTH, u32::MAX, FilterType::Triangle)
    } else {
        image
    };
    // JPEG has no alpha channel.
    let image = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut quality = limits.starting_quality.max(limits.minimum_quality);
    let mut encoded = encode_jpeg(&image, quality)?;
    let mut attempts = 1;

    while encoded.len() > limits.max_bytes
        && quality > limits.minimum_quality
        && attempts < MAX_ENCODE_ATTEMPTS
    {
        quality = quality
            .saturating_sub(limits.quality_step.max(1))
            .max(limits.minimum_quality);
        encoded = encode_jpeg(&image, quality)?;
        attempts += 1;
    }

    tracing::debug!(
        "compressed receipt to {} bytes at quality {quality} in {attempts} encode(s)",
        encoded.len()
    );

    Ok(encoded)
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, Error> {
    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|error| Error::InvalidImage(error.to_string()))?;

    Ok(encoded)
}

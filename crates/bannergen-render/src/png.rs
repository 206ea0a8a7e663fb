//! Deterministic PNG writer.
//!
//! Uses fixed compression and filter settings so the same canvas always
//! encodes to the same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::Up,
        }
    }
}

/// Write a canvas as 8-bit RGB PNG to any writer.
pub fn write_rgb_to_writer<W: Write>(
    canvas: &Canvas,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(PngError::InvalidDimensions(canvas.width, canvas.height));
    }

    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamps or other variable chunks
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgb8())?;
    png_writer.finish()?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn encode_png(canvas: &Canvas, config: &PngConfig) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(canvas, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Encode and write to `path`, replacing any existing file. Returns the hash.
pub fn save_png(canvas: &Canvas, path: &Path, config: &PngConfig) -> Result<String, PngError> {
    let (data, hash) = encode_png(canvas, config)?;
    std::fs::write(path, &data)?;
    log::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::gradient::VerticalGradient;

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::new(64, 32, Color::black());
        VerticalGradient::new(Color::rgb(21, 101, 192), Color::rgb(66, 165, 245))
            .paint(&mut canvas);
        canvas
    }

    #[test]
    fn test_rgb_deterministic() {
        let canvas = sample_canvas();
        let config = PngConfig::default();

        let (data1, hash1) = encode_png(&canvas, &config).unwrap();
        let (data2, hash2) = encode_png(&canvas, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_decodes_to_same_pixels() {
        let canvas = sample_canvas();
        let (data, _) = encode_png(&canvas, &PngConfig::default()).unwrap();

        let decoded = image::load_from_memory(&data).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (64, 32));
        assert_eq!(decoded.into_raw(), canvas.to_rgb8());
    }

    #[test]
    fn test_zero_sized_canvas_rejected() {
        let canvas = Canvas::new(0, 10, Color::black());
        let err = encode_png(&canvas, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(0, 10)));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        let hash = save_png(&sample_canvas(), &path, &PngConfig::default()).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(hash_png(&written), hash);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = save_png(&sample_canvas(), &path, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::Io(_)));
    }
}

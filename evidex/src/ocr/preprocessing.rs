use crate::config::OcrConfig;
use crate::error::{EvidexError, Result};
use image::{DynamicImage, GenericImageView, ImageReader, RgbImage};

/// Decode image bytes into the RGB raster handed to OCR
///
/// 1. Guesses the format from the bytes and decodes
/// 2. Downscales images larger than `max_image_dimension`, keeping aspect ratio
/// 3. Converts to 3-channel RGB (alpha, grayscale and palette inputs included)
pub fn normalize_image(bytes: &[u8], config: &OcrConfig) -> Result<RgbImage> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EvidexError::Image(format!("Failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| EvidexError::Image(format!("Failed to decode image: {e}")))?;

    let img = resize_if_needed(img, config.max_image_dimension);

    Ok(into_rgb(img))
}

/// Resize image if it exceeds maximum dimension while maintaining aspect ratio
///
/// Uses Lanczos3 filter for high-quality downscaling
fn resize_if_needed(img: DynamicImage, max_dim: u32) -> DynamicImage {
    let (width, height) = img.dimensions();

    if max_dim == 0 || (width <= max_dim && height <= max_dim) {
        return img;
    }

    // `resize` fits within the bounds and keeps the aspect ratio
    img.resize(max_dim, max_dim, image::imageops::FilterType::Lanczos3)
}

fn into_rgb(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}

//! Bounding-box resizing for artwork.
//!
//! Images are only ever shrunk. A source that already fits its target box is
//! returned unchanged.

use super::{DecodedImage, FilterType};
use crate::error::ArtworkError;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `ArtworkError::ImageDecode` if a target dimension is zero or the
/// source buffer does not match its dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, ArtworkError> {
    if width == 0 || height == 0 {
        return Err(ArtworkError::ImageDecode(format!(
            "invalid resize target {width}x{height}"
        )));
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| ArtworkError::ImageDecode("pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Shrink an image to fit a `max_edge` square, preserving aspect ratio.
///
/// The resize happens only if the source exceeds the aspect-matched target
/// box in either dimension; smaller sources are returned as-is.
///
/// # Errors
///
/// Returns `ArtworkError::ImageDecode` if `max_edge` is zero or the resize fails.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, ArtworkError> {
    if max_edge == 0 {
        return Err(ArtworkError::ImageDecode("zero bounding box".to_string()));
    }

    let (target_width, target_height) = calculate_fit_dimensions(image.width, image.height, max_edge);

    if image.width <= target_width && image.height <= target_height {
        return Ok(image.clone());
    }

    resize(
        image,
        target_width.min(image.width),
        target_height.min(image.height),
        filter,
    )
}

/// Calculate the aspect-matched box for an image within `max_edge`.
///
/// Wider images get `(max_edge, round(max_edge / aspect))`, all others
/// `(round(max_edge * aspect), max_edge)`. Neither side drops below 1.
pub(crate) fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let aspect = f64::from(width) / f64::from(height);

    if aspect > 1.0 {
        let new_height = (f64::from(max_edge) / aspect).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        let new_width = (f64::from(max_edge) * aspect).round() as u32;
        (new_width.max(1), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_mismatched_buffer_error() {
        let img = DecodedImage {
            width: 10,
            height: 10,
            pixels: vec![0; 5],
        };
        assert!(matches!(
            resize(&img, 5, 5, FilterType::Nearest),
            Err(ArtworkError::ImageDecode(_))
        ));
    }

    #[test]
    fn test_resize_to_fit_landscape() {
        let img = create_test_image(600, 400);
        let resized = resize_to_fit(&img, 200, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 200);
        assert_eq!(resized.height, 133); // 400 * (200/600) ≈ 133
    }

    #[test]
    fn test_resize_to_fit_portrait() {
        let img = create_test_image(400, 600);
        let resized = resize_to_fit(&img, 200, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 133);
        assert_eq!(resized.height, 200);
    }

    #[test]
    fn test_resize_to_fit_square() {
        let img = create_test_image(500, 500);
        let resized = resize_to_fit(&img, 200, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width, resized.height), (200, 200));
    }

    #[test]
    fn test_resize_to_fit_one_side_too_large() {
        // Narrow and tall: only the height exceeds the box
        let img = create_test_image(100, 250);
        let resized = resize_to_fit(&img, 200, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width, resized.height), (80, 200));
    }

    #[test]
    fn test_resize_to_fit_already_smaller() {
        let img = create_test_image(150, 100);
        let resized = resize_to_fit(&img, 200, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width, resized.height), (150, 100));
    }

    #[test]
    fn test_resize_to_fit_extreme_aspect() {
        let img = create_test_image(1000, 1);
        let resized = resize_to_fit(&img, 200, FilterType::Nearest).unwrap();

        assert_eq!((resized.width, resized.height), (200, 1));
    }

    #[test]
    fn test_resize_to_fit_zero_max_edge_error() {
        let img = create_test_image(100, 50);
        assert!(resize_to_fit(&img, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_calculate_fit_dimensions() {
        assert_eq!(calculate_fit_dimensions(6000, 4000, 200), (200, 133));
        assert_eq!(calculate_fit_dimensions(4000, 6000, 200), (133, 200));
        assert_eq!(calculate_fit_dimensions(4000, 4000, 200), (200, 200));
        assert_eq!(calculate_fit_dimensions(0, 0, 200), (0, 0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

//! Decoding of encoded image buffers with optional EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader, RgbaImage};

use super::{DecodeError, Orientation};

/// Decode an encoded image buffer to RGBA pixels.
///
/// The format is guessed from the buffer contents, so any format enabled on
/// the `image` crate (JPEG, PNG) is accepted.
///
/// # Arguments
///
/// * `bytes` - Encoded image bytes
/// * `auto_orient` - Rotate/flip according to the EXIF orientation tag
///
/// # Errors
///
/// Returns `DecodeError::EmptyInput` for a zero-length buffer,
/// `DecodeError::InvalidFormat` if the format cannot be recognized, and
/// `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8], auto_orient: bool) -> Result<RgbaImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = if auto_orient {
        apply_orientation(img, extract_orientation(bytes))
    } else {
        img
    };

    Ok(img.into_rgba8())
}

/// Extract EXIF orientation value from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

//! Canvas layout and compositing for joins.

use image::{imageops, DynamicImage, RgbImage, RgbaImage};

use super::{Direction, JoinError};
use crate::config::GridOptions;
use crate::decode::decode_image;

/// Largest canvas a join will allocate, in pixels (16383 x 16383).
pub const MAX_CANVAS_PIXELS: u64 = 0x3FFF * 0x3FFF;

/// Compute the canvas size for joining images of the given dimensions.
///
/// Returns `JoinError::DimensionOverflow` if the summed axis does not fit
/// in a `u32` or the canvas would exceed [`MAX_CANVAS_PIXELS`].
pub fn canvas_size<I>(dimensions: I, direction: Direction) -> Result<(u32, u32), JoinError>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut along = 0u32;
    let mut across = 0u32;

    for (width, height) in dimensions {
        let (advance, extent) = match direction {
            Direction::Horizontal => (width, height),
            Direction::Vertical => (height, width),
        };
        along = along
            .checked_add(advance)
            .ok_or(JoinError::DimensionOverflow)?;
        across = across.max(extent);
    }

    let (width, height) = match direction {
        Direction::Horizontal => (along, across),
        Direction::Vertical => (across, along),
    };

    if u64::from(width) * u64::from(height) > MAX_CANVAS_PIXELS {
        return Err(JoinError::DimensionOverflow);
    }

    Ok((width, height))
}

/// Join decoded images along `direction` onto a background-filled canvas.
///
/// Images are placed in input order starting at the canvas origin. The
/// result is flattened to RGB.
pub fn join_images(
    images: &[RgbaImage],
    direction: Direction,
    options: &GridOptions,
) -> Result<RgbImage, JoinError> {
    if images.is_empty() {
        return Err(JoinError::NoImages);
    }

    let (width, height) = canvas_size(images.iter().map(|img| img.dimensions()), direction)?;
    let mut canvas = RgbaImage::from_pixel(width, height, options.background_rgba());

    let mut offset: i64 = 0;
    for img in images {
        match direction {
            Direction::Horizontal => {
                imageops::overlay(&mut canvas, img, offset, 0);
                offset += i64::from(img.width());
            }
            Direction::Vertical => {
                imageops::overlay(&mut canvas, img, 0, offset);
                offset += i64::from(img.height());
            }
        }
    }

    Ok(DynamicImage::ImageRgba8(canvas).into_rgb8())
}

/// Decode encoded buffers and join them along `direction`.
///
/// Decode failures carry the index of the offending buffer.
pub fn join_buffers<B: AsRef<[u8]>>(
    buffers: &[B],
    direction: Direction,
    options: &GridOptions,
) -> Result<RgbImage, JoinError> {
    let images = buffers
        .iter()
        .enumerate()
        .map(|(index, bytes)| {
            decode_image(bytes.as_ref(), options.auto_orient)
                .map_err(|source| JoinError::Decode { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    join_images(&images, direction, options)
}

/// Join encoded buffers side by side.
pub fn join_horizontal<B: AsRef<[u8]>>(
    buffers: &[B],
    options: &GridOptions,
) -> Result<RgbImage, JoinError> {
    join_buffers(buffers, Direction::Horizontal, options)
}

/// Stack encoded buffers top to bottom.
pub fn join_vertical<B: AsRef<[u8]>>(
    buffers: &[B],
    options: &GridOptions,
) -> Result<RgbImage, JoinError> {
    join_buffers(buffers, Direction::Vertical, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodeError;
    use image::{ImageFormat, Rgb, Rgba};
    use std::io::Cursor;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbaImage {
        let [r, g, b] = color.0;
        RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
    }

    fn png(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(solid(width, height, color))
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_canvas_size_horizontal() {
        let dims = [(10, 5), (20, 8), (5, 3)];
        assert_eq!(canvas_size(dims, Direction::Horizontal).unwrap(), (35, 8));
    }

    #[test]
    fn test_canvas_size_vertical() {
        let dims = [(10, 5), (20, 8), (5, 3)];
        assert_eq!(canvas_size(dims, Direction::Vertical).unwrap(), (20, 16));
    }

    #[test]
    fn test_canvas_size_overflow() {
        let dims = [(u32::MAX, 1), (1, 1)];
        assert!(matches!(
            canvas_size(dims, Direction::Horizontal),
            Err(JoinError::DimensionOverflow)
        ));
    }

    #[test]
    fn test_canvas_size_rejects_large_area() {
        // Each axis fits, the product does not
        let dims = [(20000, 1), (1, 20000)];
        assert!(matches!(
            canvas_size(dims, Direction::Horizontal),
            Err(JoinError::DimensionOverflow)
        ));
        assert!(matches!(
            canvas_size(dims, Direction::Vertical),
            Err(JoinError::DimensionOverflow)
        ));

        let huge = [(u32::MAX - 1, 1), (1, u32::MAX)];
        assert!(matches!(
            canvas_size(huge, Direction::Horizontal),
            Err(JoinError::DimensionOverflow)
        ));
    }

    #[test]
    fn test_canvas_size_at_limit() {
        let dims = [(0x3FFF, 0x3FFF)];
        assert_eq!(
            canvas_size(dims, Direction::Horizontal).unwrap(),
            (0x3FFF, 0x3FFF)
        );
        assert!(canvas_size([(0x3FFF, 0x3FFF), (1, 1)], Direction::Horizontal).is_err());
    }

    #[test]
    fn test_join_thin_strips_rejected_before_allocation() {
        let wide = png(20000, 1, RED);
        let tall = png(1, 20000, BLUE);
        let buffers = vec![wide, tall];

        assert!(matches!(
            join_horizontal(&buffers, &GridOptions::new()),
            Err(JoinError::DimensionOverflow)
        ));
        assert!(matches!(
            join_vertical(&buffers, &GridOptions::new()),
            Err(JoinError::DimensionOverflow)
        ));
    }

    #[test]
    fn test_join_images_horizontal_order() {
        let images = [solid(2, 2, RED), solid(3, 2, GREEN)];
        let joined = join_images(&images, Direction::Horizontal, &GridOptions::new()).unwrap();

        assert_eq!(joined.dimensions(), (5, 2));
        assert_eq!(*joined.get_pixel(0, 0), RED);
        assert_eq!(*joined.get_pixel(1, 1), RED);
        assert_eq!(*joined.get_pixel(2, 0), GREEN);
        assert_eq!(*joined.get_pixel(4, 1), GREEN);
    }

    #[test]
    fn test_join_images_vertical_order() {
        let images = [solid(2, 1, RED), solid(2, 2, GREEN), solid(2, 1, BLUE)];
        let joined = join_images(&images, Direction::Vertical, &GridOptions::new()).unwrap();

        assert_eq!(joined.dimensions(), (2, 4));
        assert_eq!(*joined.get_pixel(0, 0), RED);
        assert_eq!(*joined.get_pixel(1, 2), GREEN);
        assert_eq!(*joined.get_pixel(0, 3), BLUE);
    }

    #[test]
    fn test_uneven_heights_fill_with_background() {
        let mut opts = GridOptions::new();
        opts.background = [255, 255, 255];

        let images = [solid(2, 4, RED), solid(2, 1, BLUE)];
        let joined = join_images(&images, Direction::Horizontal, &opts).unwrap();

        assert_eq!(joined.dimensions(), (4, 4));
        // Shorter image is top-aligned; the rest of its column is background
        assert_eq!(*joined.get_pixel(2, 0), BLUE);
        assert_eq!(*joined.get_pixel(2, 1), Rgb([255, 255, 255]));
        assert_eq!(*joined.get_pixel(3, 3), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_transparent_pixels_show_background() {
        let mut opts = GridOptions::new();
        opts.background = [0, 0, 255];

        let clear = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 0]));
        let joined = join_images(&[clear], Direction::Horizontal, &opts).unwrap();

        assert_eq!(*joined.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn test_join_images_empty() {
        let result = join_images(&[], Direction::Vertical, &GridOptions::new());
        assert!(matches!(result, Err(JoinError::NoImages)));
    }

    #[test]
    fn test_join_horizontal_buffers() {
        let buffers = vec![png(4, 4, RED), png(4, 4, GREEN), png(4, 4, BLUE)];
        let joined = join_horizontal(&buffers, &GridOptions::new()).unwrap();

        assert_eq!(joined.dimensions(), (12, 4));
        assert_eq!(*joined.get_pixel(0, 0), RED);
        assert_eq!(*joined.get_pixel(5, 0), GREEN);
        assert_eq!(*joined.get_pixel(11, 3), BLUE);
    }

    #[test]
    fn test_join_vertical_buffers() {
        let buffers = vec![png(3, 2, GREEN), png(3, 2, RED)];
        let joined = join_vertical(&buffers, &GridOptions::new()).unwrap();

        assert_eq!(joined.dimensions(), (3, 4));
        assert_eq!(*joined.get_pixel(0, 0), GREEN);
        assert_eq!(*joined.get_pixel(0, 3), RED);
    }

    #[test]
    fn test_join_buffers_reports_bad_index() {
        let buffers = vec![png(2, 2, RED), b"not an image".to_vec(), png(2, 2, BLUE)];
        let result = join_horizontal(&buffers, &GridOptions::new());

        match result {
            Err(JoinError::Decode {
                index: 1,
                source: DecodeError::InvalidFormat,
            }) => {}
            other => panic!("Expected decode error at index 1, got: {:?}", other),
        }
    }
}

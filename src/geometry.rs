//! Pixel to PDF unit conversion.
//!
//! OCR coordinates are pixels with the origin at the top-left corner of the
//! scan; PDF page space is measured in points (1/72 inch) with the origin at
//! the bottom-left corner. All functions here are pure.

use crate::model::{PixelRect, Point, Resolution, ResolutionUnit, Rotation, Size};

/// Points per inch in PDF user space.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Centimeters per inch.
pub const CENTIMETERS_PER_INCH: f64 = 2.54;

/// Convert a pixel length to PDF points.
pub fn pixels_to_points(size: f64, resolution: f64, unit: ResolutionUnit) -> f64 {
    match unit {
        ResolutionUnit::Centimeters => {
            size / (resolution * CENTIMETERS_PER_INCH) * POINTS_PER_INCH
        }
        ResolutionUnit::Inches => size / resolution * POINTS_PER_INCH,
    }
}

/// Convert a pixel point to points, axis by axis, without flipping.
pub fn point_to_pdf(p: Point, resolution: &Resolution) -> Point {
    Point::new(
        pixels_to_points(p.x, resolution.x, resolution.unit),
        pixels_to_points(p.y, resolution.y, resolution.unit),
    )
}

/// Convert a pixel point to PDF page space, flipping the vertical axis.
pub fn page_point_to_pdf(p: Point, resolution: &Resolution, page_size: Size) -> Point {
    let converted = point_to_pdf(p, resolution);
    Point::new(converted.x, page_size.height - converted.y)
}

/// Convert a pixel extent to points.
pub fn size_to_pdf(size: Size, resolution: &Resolution) -> Size {
    Size::new(
        pixels_to_points(size.width, resolution.x, resolution.unit),
        pixels_to_points(size.height, resolution.y, resolution.unit),
    )
}

/// Extent of `rect` in points along the text direction.
///
/// Sideways text advances along the pixel height of its box, so width and
/// height are swapped before conversion for 90° and 270°.
pub fn rotated_dimensions(rect: &PixelRect, resolution: &Resolution, rotation: Rotation) -> Size {
    let size = if rotation.is_sideways() {
        Size::new(rect.height(), rect.width())
    } else {
        rect.size()
    };
    size_to_pdf(size, resolution)
}

/// Pixel-space origin of a run anchored on `rect` at `baseline`.
pub fn run_origin(rect: &PixelRect, baseline: f64, page_pixels: Size, rotation: Rotation) -> Point {
    match rotation {
        Rotation::None => Point::new(rect.left, baseline),
        Rotation::Clockwise => Point::new(page_pixels.width - baseline, rect.top),
        Rotation::UpsideDown => Point::new(rect.right, page_pixels.height - baseline),
        Rotation::Counterclockwise => Point::new(baseline, rect.bottom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({}, {}), got {:?}",
            x,
            y,
            actual
        );
    }

    fn assert_size(actual: Size, width: f64, height: f64) {
        assert!(
            (actual.width - width).abs() < EPS && (actual.height - height).abs() < EPS,
            "expected {}x{}, got {:?}",
            width,
            height,
            actual
        );
    }

    #[test]
    fn test_pixels_to_points_inches() {
        assert_eq!(pixels_to_points(300.0, 300.0, ResolutionUnit::Inches), 72.0);
        assert_eq!(pixels_to_points(150.0, 300.0, ResolutionUnit::Inches), 36.0);
    }

    #[test]
    fn test_pixels_to_points_centimeters() {
        let pts = pixels_to_points(254.0, 100.0, ResolutionUnit::Centimeters);
        assert!((pts - 72.0).abs() < EPS);
    }

    #[test]
    fn test_page_point_flips_vertical_axis() {
        let res = Resolution::dpi(72.0);
        let page = Size::new(612.0, 792.0);
        let p = page_point_to_pdf(Point::new(10.0, 100.0), &res, page);
        assert_point(p, 10.0, 692.0);

        // no flip
        assert_point(point_to_pdf(Point::new(10.0, 100.0), &res), 10.0, 100.0);
    }

    #[test]
    fn test_anisotropic_resolution() {
        let res = Resolution {
            x: 300.0,
            y: 150.0,
            unit: ResolutionUnit::Inches,
        };
        let size = size_to_pdf(Size::new(300.0, 300.0), &res);
        assert_size(size, 72.0, 144.0);
    }

    #[test]
    fn test_rotated_dimensions_swap() {
        let res = Resolution::dpi(72.0);
        let rect = PixelRect::from_size(0.0, 0.0, 100.0, 20.0);
        assert_size(rotated_dimensions(&rect, &res, Rotation::None), 100.0, 20.0);
        assert_size(rotated_dimensions(&rect, &res, Rotation::UpsideDown), 100.0, 20.0);
        assert_size(rotated_dimensions(&rect, &res, Rotation::Clockwise), 20.0, 100.0);
        assert_size(
            rotated_dimensions(&rect, &res, Rotation::Counterclockwise),
            20.0,
            100.0,
        );
    }

    #[test]
    fn test_run_origin_per_rotation() {
        let rect = PixelRect::new(30.0, 50.0, 130.0, 90.0);
        let page = Size::new(600.0, 800.0);

        assert_eq!(
            run_origin(&rect, 200.0, page, Rotation::None),
            Point::new(30.0, 200.0)
        );
        assert_eq!(
            run_origin(&rect, 200.0, page, Rotation::Clockwise),
            Point::new(400.0, 50.0)
        );
        assert_eq!(
            run_origin(&rect, 200.0, page, Rotation::UpsideDown),
            Point::new(130.0, 600.0)
        );
        assert_eq!(
            run_origin(&rect, 200.0, page, Rotation::Counterclockwise),
            Point::new(200.0, 90.0)
        );
    }
}

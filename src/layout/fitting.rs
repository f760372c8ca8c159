//! Width fitting.
//!
//! The font assigned by the OCR engine rarely has the metrics of the
//! scanned typeface. Each run is stretched so its measured width covers
//! the scanned box exactly, which keeps selection highlights aligned.

use crate::error::{Error, Result};
use crate::font::FontTable;
use crate::geometry;
use crate::model::{Resolution, TextRun};

/// Width difference in points below which a run is left unscaled.
pub const WIDTH_EPSILON: f64 = 1e-3;

/// Horizontal scaling, in percent, that stretches `measured` to `target`.
///
/// Returns `None` when the run should keep its default scaling: the text
/// measures zero, the box has no width (inverted boxes included) or the
/// widths already agree.
pub fn horizontal_scaling(measured: f64, target: f64) -> Option<f64> {
    if measured > 0.0 && target > 0.0 && (measured - target).abs() > WIDTH_EPSILON {
        Some(target / measured * 100.0)
    } else {
        None
    }
}

/// Fix up the horizontal scaling of every run against its font's metrics.
pub fn fit_widths(
    runs: &mut [TextRun],
    fonts: &FontTable,
    resolution: &Resolution,
) -> Result<()> {
    for run in runs.iter_mut() {
        let font = fonts.get(run.font).ok_or(Error::UnknownFont(run.font))?;
        let measured = font.metrics.text_width(&run.text, run.font_size);
        let target = geometry::rotated_dimensions(&run.source, resolution, run.rotation).width;

        run.horizontal_scaling = match horizontal_scaling(measured, target) {
            Some(scaling) => scaling,
            None => TextRun::DEFAULT_SCALING,
        };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontRegistry, StandardFonts};
    use crate::model::{Color, FontDescriptor, FontId, PixelRect, Point, RenderMode, Rotation};

    fn run(text: &str, font: FontId, source: PixelRect, rotation: Rotation) -> TextRun {
        TextRun {
            text: text.to_string(),
            origin: Point::default(),
            rotation,
            render_mode: RenderMode::Invisible,
            color: Color::BLACK,
            font,
            font_size: 10.0,
            horizontal_scaling: TextRun::DEFAULT_SCALING,
            source,
        }
    }

    fn courier_table() -> (FontId, FontTable) {
        let mut registry = FontRegistry::new();
        let id = registry.register(&FontDescriptor::new("Courier New", 10.0));
        (id, registry.resolve(&StandardFonts).unwrap())
    }

    #[test]
    fn test_scaling_factor() {
        assert_eq!(horizontal_scaling(50.0, 40.0), Some(80.0));
        assert_eq!(horizontal_scaling(20.0, 30.0), Some(150.0));
    }

    #[test]
    fn test_zero_width_keeps_default() {
        assert_eq!(horizontal_scaling(0.0, 40.0), None);
        assert_eq!(horizontal_scaling(-1.0, 40.0), None);
    }

    #[test]
    fn test_degenerate_box_keeps_default() {
        assert_eq!(horizontal_scaling(20.0, 0.0), None);
        assert_eq!(horizontal_scaling(20.0, -40.0), None);
    }

    #[test]
    fn test_matching_width_keeps_default() {
        assert_eq!(horizontal_scaling(40.0, 40.0), None);
        assert_eq!(horizontal_scaling(40.0, 40.0 + WIDTH_EPSILON / 2.0), None);
    }

    #[test]
    fn test_fit_runs() {
        let (id, fonts) = courier_table();
        let resolution = Resolution::dpi(72.0);
        // "abcde" in Courier 10pt measures 30pt
        let mut runs = vec![
            run("abcde", id, PixelRect::new(0.0, 0.0, 24.0, 10.0), Rotation::None),
            run("abcde", id, PixelRect::new(0.0, 0.0, 30.0, 10.0), Rotation::None),
            run("abcde", id, PixelRect::new(0.0, 0.0, 10.0, 45.0), Rotation::Clockwise),
        ];

        fit_widths(&mut runs, &fonts, &resolution).unwrap();
        assert!((runs[0].horizontal_scaling - 80.0).abs() < 1e-9);
        assert_eq!(runs[1].horizontal_scaling, TextRun::DEFAULT_SCALING);
        assert!((runs[2].horizontal_scaling - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_box_is_not_mirrored() {
        let (id, fonts) = courier_table();
        // right edge left of the left edge
        let mut runs = vec![run("ab", id, PixelRect::new(40.0, 80.0, 0.0, 100.0), Rotation::None)];

        fit_widths(&mut runs, &fonts, &Resolution::dpi(72.0)).unwrap();
        assert_eq!(runs[0].horizontal_scaling, TextRun::DEFAULT_SCALING);
    }

    #[test]
    fn test_unknown_font() {
        let (_, fonts) = courier_table();
        let mut runs = vec![run("x", FontId::new(9), PixelRect::default(), Rotation::None)];
        let result = fit_widths(&mut runs, &fonts, &Resolution::dpi(72.0));
        assert!(matches!(result, Err(Error::UnknownFont(id)) if id == FontId::new(9)));
    }
}

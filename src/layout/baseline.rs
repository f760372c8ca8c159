//! Baseline normalization.
//!
//! OCR engines report a baseline per word that jitters by a pixel or two
//! around the line's baseline. Small deviations are snapped back to the
//! line; large ones, or a sudden change in font size, are kept because they
//! mark real sub- and superscripts.

/// Fraction of the box height a baseline may deviate before it counts as a shift.
pub const SHIFT_HEIGHT_DIVISOR: f64 = 4.0;

/// Font size change in points that counts as a shift on its own.
pub const FONT_JUMP_THRESHOLD: f64 = 2.0;

/// Decide which baseline a word or glyph is drawn on.
///
/// `current_size` is the size of the active font, if any.
pub fn resolve_baseline(
    line_baseline: f64,
    own_baseline: f64,
    height: f64,
    current_size: Option<f64>,
    own_size: f64,
    normalized: bool,
) -> f64 {
    if normalized {
        return line_baseline;
    }

    let shifted = (line_baseline - own_baseline).abs() > height / SHIFT_HEIGHT_DIVISOR;
    let size_jump =
        current_size.is_some_and(|size| (size - own_size).abs() > FONT_JUMP_THRESHOLD);

    if shifted || size_jump {
        own_baseline
    } else {
        line_baseline
    }
}

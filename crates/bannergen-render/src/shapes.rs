//! Filled shape primitives.

use crate::canvas::Canvas;
use crate::color::Color;

/// Fill a disc of `radius` centered on `center`, alpha-blended.
///
/// Covers the pixels of the inclusive bounding box
/// `[cx - r, cy - r, cx + r, cy + r]` whose centers satisfy `dx² + dy² <= r²`.
pub fn fill_circle(canvas: &mut Canvas, center: [i32; 2], radius: u32, color: Color) {
    let r = radius as i64;
    let [cx, cy] = center;

    for dy in -r..=r {
        let half_width = isqrt(r * r - dy * dy);
        let y = cy as i64 + dy;
        for dx in -half_width..=half_width {
            let x = cx as i64 + dx;
            if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                canvas.blend(x, y, color, 255);
            }
        }
    }
}

/// Largest integer whose square is <= `value`.
fn isqrt(value: i64) -> i64 {
    if value <= 0 {
        return 0;
    }
    let mut root = (value as f64).sqrt() as i64;
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}

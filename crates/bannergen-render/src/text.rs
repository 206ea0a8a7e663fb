//! Drawing rasterized text onto the canvas.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::font::{Anchor, Face, RenderError, TextMask};

/// Draw `text` at `position`. Characters the face cannot render are skipped.
pub fn draw_text(
    canvas: &mut Canvas,
    face: &Face,
    text: &str,
    position: [i32; 2],
    anchor: Anchor,
    color: Color,
) {
    let mask = face.rasterize(text);
    composite(canvas, &mask, anchor.origin(position, &mask), color);
}

/// Draw `text` only if every character can be shaped; otherwise leave the
/// canvas untouched.
pub fn try_draw_text(
    canvas: &mut Canvas,
    face: &Face,
    text: &str,
    position: [i32; 2],
    anchor: Anchor,
    color: Color,
) -> Result<(), RenderError> {
    let mask = face.rasterize_strict(text)?;
    composite(canvas, &mask, anchor.origin(position, &mask), color);
    Ok(())
}

fn composite(canvas: &mut Canvas, mask: &TextMask, origin: [i32; 2], color: Color) {
    let [ox, oy] = origin;
    for y in 0..mask.height {
        for x in 0..mask.width {
            let coverage = mask.get(x, y);
            if coverage > 0 {
                canvas.blend(ox + x as i32, oy + y as i32, color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BuiltinFace;

    #[test]
    fn test_draw_left_top() {
        let mut canvas = Canvas::new(40, 20, Color::black());
        let face = Face::Builtin(BuiltinFace::new(1));
        draw_text(&mut canvas, &face, "L", [3, 4], Anchor::LeftTop, Color::white());

        assert_eq!(canvas.get(3, 4), [255, 255, 255]);
        assert_eq!(canvas.get(3, 10), [255, 255, 255]);
        assert_eq!(canvas.get(7, 10), [255, 255, 255]);
        assert_eq!(canvas.get(2, 4), [0, 0, 0]);
        assert_eq!(canvas.get(3, 3), [0, 0, 0]);
    }

    #[test]
    fn test_draw_left_middle() {
        let mut canvas = Canvas::new(40, 40, Color::black());
        let face = Face::Builtin(BuiltinFace::new(2));
        // 14px tall line centered on y = 20 starts at y = 13
        draw_text(&mut canvas, &face, "L", [0, 20], Anchor::LeftMiddle, Color::white());
        assert_eq!(canvas.get(0, 13), [255, 255, 255]);
        assert_eq!(canvas.get(0, 12), [0, 0, 0]);
    }

    #[test]
    fn test_translucent_text_blends() {
        let mut canvas = Canvas::new(10, 10, Color::black());
        let face = Face::Builtin(BuiltinFace::new(1));
        let color = Color::white().with_alpha(200);
        draw_text(&mut canvas, &face, "L", [0, 0], Anchor::LeftTop, color);
        assert_eq!(canvas.get(0, 0), color.blend_over([0, 0, 0], 255));
    }

    #[test]
    fn test_try_draw_leaves_canvas_untouched_on_failure() {
        let mut canvas = Canvas::new(10, 10, Color::black());
        let before = canvas.clone();
        let face = Face::builtin();
        let result = try_draw_text(
            &mut canvas,
            &face,
            "A\u{1F512}",
            [5, 5],
            Anchor::Center,
            Color::white(),
        );
        assert!(result.is_err());
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_text_clipped_at_canvas_edge() {
        let mut canvas = Canvas::new(4, 4, Color::black());
        let face = Face::Builtin(BuiltinFace::new(1));
        // 'L' drawn 2px up and left: only the bottom-right of its cell is visible
        draw_text(&mut canvas, &face, "L", [-2, -2], Anchor::LeftTop, Color::white());

        // Bottom bar (cell row 6) lands on canvas row 4, past the edge; the
        // left stroke is at cell column 0, canvas column -2. So the visible
        // 4x4 window shows cell columns 2..5, rows 2..5 of 'L': empty.
        assert!((0..4).all(|y| (0..4).all(|x| canvas.get(x, y) == [0, 0, 0])));

        let mut canvas = Canvas::new(4, 4, Color::black());
        draw_text(&mut canvas, &face, "L", [-2, -3], Anchor::LeftTop, Color::white());
        // Bottom bar now on row 3, visible for cell columns 2..4
        assert_eq!(canvas.get(0, 3), [255, 255, 255]);
        assert_eq!(canvas.get(2, 3), [255, 255, 255]);
        assert_eq!(canvas.get(3, 3), [0, 0, 0]);
        assert_eq!(canvas.get(0, 2), [0, 0, 0]);
    }
}

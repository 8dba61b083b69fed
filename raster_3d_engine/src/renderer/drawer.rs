/// Drawer - scan conversion of lines and filled triangles.
///
/// A Drawer is bound to exactly one render target at a time and writes
/// solid colors into its color plane. Inputs are screen-normalized points
/// (`[0, 1]` on X and Y, origin at the top-left pixel) as produced by
/// `Shader::calculate_vertex`; they are scaled to pixels here.
///
/// Every pixel coordinate is clamped into `[0, width] x [0, height]` before
/// use, and the texture ignores writes outside `[0, width) x [0, height)`,
/// so arbitrary (even non-finite) input never writes out of bounds.

use std::mem::swap;
use crate::math::{Vector2, Vector3};
use crate::resource::{Color, RenderTarget};

/// Fill color used until `set_fill_color` is called
pub const DEFAULT_FILL_COLOR: Color = Color::WHITE;

/// Line color used until `set_line_color` is called
pub const DEFAULT_LINE_COLOR: Color = Color::BLACK;

pub struct Drawer<'a> {
    target: &'a mut RenderTarget,
    fill_color: Color,
    line_color: Color,
}

impl<'a> Drawer<'a> {
    pub fn new(target: &'a mut RenderTarget) -> Self {
        Self {
            target,
            fill_color: DEFAULT_FILL_COLOR,
            line_color: DEFAULT_LINE_COLOR,
        }
    }

    /// Bind another render target; colors are kept
    pub fn set_target(&mut self, target: &'a mut RenderTarget) {
        self.target = target;
    }

    pub fn target(&self) -> &RenderTarget {
        &*self.target
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    fn width(&self) -> i64 {
        i64::from(self.target.width())
    }

    fn height(&self) -> i64 {
        i64::from(self.target.height())
    }

    /// Screen-normalized point to whole pixels, truncated toward zero
    fn to_pixel(&self, p: Vector2) -> Pixel {
        Pixel {
            x: (p.x * self.target.width() as f32) as i64,
            y: (p.y * self.target.height() as f32) as i64,
        }
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.target.set(x, y, color);
        }
    }

    // ===== LINES =====

    /// Bresenham line from `p0` to `p1`, both endpoints included
    pub fn draw_line(&mut self, p0: Vector2, p1: Vector2) {
        let (w, h) = (self.width(), self.height());
        let (p0, p1) = (self.to_pixel(p0), self.to_pixel(p1));

        let mut x0 = p0.x.clamp(0, w);
        let mut y0 = p0.y.clamp(0, h);
        let x1 = p1.x.clamp(0, w);
        let y1 = p1.y.clamp(0, h);

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let color = self.line_color;

        loop {
            self.plot(x0, y0, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    // ===== TRIANGLES =====

    /// Fill the triangle `p0, p1, p2` with the fill color.
    ///
    /// Top/bottom split scanline fill: vertices are sorted by Y, the long
    /// edge (top to bottom vertex) bounds one side of every row and the two
    /// short edges, split at the middle vertex, bound the other. The side
    /// of the middle vertex is decided on the normalized points; rows and
    /// edges are then walked on whole pixels. Z is not used; there is no
    /// depth test.
    pub fn draw_triangle(&mut self, p0: Vector3, p1: Vector3, p2: Vector3) {
        let (mut p0, mut p1, mut p2) = (p0, p1, p2);
        if p1.y < p0.y {
            swap(&mut p0, &mut p1);
        }
        if p2.y < p1.y {
            swap(&mut p1, &mut p2);
        }
        if p1.y < p0.y {
            swap(&mut p0, &mut p1);
        }

        let middle_on_right = inverse_slope(p0, p1) > inverse_slope(p0, p2);

        let top = self.to_pixel(p0.truncate());
        let middle = self.to_pixel(p1.truncate());
        let bottom = self.to_pixel(p2.truncate());

        let h = self.height();
        let y_start = top.y.clamp(0, h);
        let y_end = bottom.y.clamp(0, h);

        for y in y_start..=y_end {
            let above_middle = y < middle.y;
            match (middle_on_right, above_middle) {
                (true, true) => self.scan_line(y, top, bottom, top, middle),
                (true, false) => self.scan_line(y, top, bottom, middle, bottom),
                (false, true) => self.scan_line(y, top, middle, top, bottom),
                (false, false) => self.scan_line(y, middle, bottom, top, bottom),
            }
        }
    }

    /// Fill row `y` between edge `pa -> pb` and edge `pc -> pd`, `[start, end)`
    fn scan_line(&mut self, y: i64, pa: Pixel, pb: Pixel, pc: Pixel, pd: Pixel) {
        if y >= self.height() {
            return;
        }
        let w = self.width();

        let sx = edge_x(y, pa, pb);
        let ex = edge_x(y, pc, pd);

        // Equal-Y top vertices can leave the edges swapped
        let start = sx.min(ex).clamp(0, w);
        let end = sx.max(ex).clamp(0, w);

        let color = self.fill_color;
        for x in start..end {
            self.plot(x, y, color);
        }
    }
}

/// Whole-pixel position; `as` saturates and maps NaN to 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pixel {
    x: i64,
    y: i64,
}

/// dx/dy of the edge `from -> to`, 0 for an edge with no Y extent
fn inverse_slope(from: Vector3, to: Vector3) -> f32 {
    let dy = to.y - from.y;
    if dy > 0.0 {
        (to.x - from.x) / dy
    } else {
        0.0
    }
}

/// X of the edge `start -> end` on row `y`.
///
/// The row is clamped into the edge's Y extent (gradient in `[0, 1]`), and a
/// horizontal edge yields its end X (gradient 1). Multiplying before the
/// division keeps rows that land exactly on a pixel boundary exact.
fn edge_x(y: i64, start: Pixel, end: Pixel) -> i64 {
    if start.y == end.y {
        return end.x;
    }
    let (x0, y0) = (start.x as f64, start.y as f64);
    let (x1, y1) = (end.x as f64, end.y as f64);
    let row = (y as f64).clamp(y0.min(y1), y0.max(y1));
    (x0 + (x1 - x0) * (row - y0) / (y1 - y0)) as i64
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;

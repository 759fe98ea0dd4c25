//! Line and polygon rasterization.

use crate::geometry::Point;
use crate::primitive::LineAlgorithm;

/// Rasterize a line with the digital differential analyzer.
///
/// Steps one pixel at a time along the dominant axis and accumulates a
/// floating-point increment on the minor axis, rounding every sample with
/// [`round_coord`](crate::geometry::round_coord). Emits `max(|dx|, |dy|) + 1`
/// points whose first and last entries are exactly `p0` and `p1`.
///
/// # Arguments
///
/// * `out` - Pixel sequence to append to
/// * `p0`, `p1` - Start and end points
pub fn draw_line_dda(out: &mut Vec<Point>, p0: Point, p1: Point) {
    let dx = i64::from(p1.x) - i64::from(p0.x);
    let dy = i64::from(p1.y) - i64::from(p0.y);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        out.push(p0);
        return;
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = f64::from(p0.x);
    let mut y = f64::from(p0.y);

    out.reserve(steps as usize + 1);
    for _ in 0..steps {
        out.push(Point::from_f64(x, y));
        x += x_inc;
        y += y_inc;
    }
    // The accumulated sum may drift by a few ulps; pin the far endpoint.
    out.push(p1);
}

/// Rasterize a line using Bresenham's algorithm.
///
/// Integer-only: the loop advances by one pixel on the dominant axis and an
/// error term decides when to step the minor axis. Every emitted pixel lies
/// within half a pixel of the ideal line, measured along the minor axis.
pub fn draw_line_bresenham(out: &mut Vec<Point>, p0: Point, p1: Point) {
    let dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let dy = (i64::from(p1.y) - i64::from(p0.y)).abs();
    let sx = if p1.x >= p0.x { 1 } else { -1 };
    let sy = if p1.y >= p0.y { 1 } else { -1 };

    let mut x = i64::from(p0.x);
    let mut y = i64::from(p0.y);

    out.reserve(dx.max(dy) as usize + 1);

    if dx >= dy {
        let mut err = 2 * dy - dx;
        for _ in 0..=dx {
            out.push(Point::new(x as i32, y as i32));
            if err > 0 {
                y += sy;
                err -= 2 * dx;
            }
            err += 2 * dy;
            x += sx;
        }
    } else {
        let mut err = 2 * dx - dy;
        for _ in 0..=dy {
            out.push(Point::new(x as i32, y as i32));
            if err > 0 {
                x += sx;
                err -= 2 * dy;
            }
            err += 2 * dx;
            y += sy;
        }
    }
}

/// Rasterize a line with the selected algorithm.
pub fn draw_line(out: &mut Vec<Point>, p0: Point, p1: Point, algorithm: LineAlgorithm) {
    match algorithm {
        LineAlgorithm::Dda => draw_line_dda(out, p0, p1),
        LineAlgorithm::Bresenham => draw_line_bresenham(out, p0, p1),
    }
}

/// Rasterize a polygon outline.
///
/// Three or more vertices form a closed outline with edges rasterized in
/// vertex order. Two vertices produce their single edge once, and a lone
/// vertex produces itself.
pub fn draw_polygon(out: &mut Vec<Point>, vertices: &[Point], algorithm: LineAlgorithm) {
    match vertices {
        [] => {}
        [p] => out.push(*p),
        [p0, p1] => draw_line(out, *p0, *p1, algorithm),
        _ => {
            let closing = vertices.len() - 1;
            for edge in vertices.windows(2) {
                draw_line(out, edge[0], edge[1], algorithm);
            }
            draw_line(out, vertices[closing], vertices[0], algorithm);
        }
    }
}

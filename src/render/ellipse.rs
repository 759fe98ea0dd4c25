//! Midpoint ellipse rasterization.

use super::line::draw_line_bresenham;
use crate::geometry::Point;

/// Rasterize the outline of the axis-aligned ellipse inscribed in a bounding box.
///
/// The center and integer semi-axes are derived from the two opposite
/// corners `c0` and `c1`. One quadrant is traced with the midpoint decision
/// algorithm and mirrored into the other three, so the output is symmetric
/// about both center lines. Region 1 covers the arc where the slope is
/// shallower than -1; region 2 takes over once `2·ry²·x >= 2·rx²·y`.
///
/// A box with zero width or height degenerates to a vertical or horizontal
/// segment, or to a single point.
pub fn draw_ellipse(out: &mut Vec<Point>, c0: Point, c1: Point) {
    let (x0, y0) = (i64::from(c0.x), i64::from(c0.y));
    let (x1, y1) = (i64::from(c1.x), i64::from(c1.y));

    let cx = (x0 + x1).div_euclid(2);
    let cy = (y0 + y1).div_euclid(2);
    let rx = (x1 - x0).abs() / 2;
    let ry = (y1 - y0).abs() / 2;

    if rx == 0 || ry == 0 {
        draw_line_bresenham(
            out,
            Point::new((cx - rx) as i32, (cy - ry) as i32),
            Point::new((cx + rx) as i32, (cy + ry) as i32),
        );
        return;
    }

    let rx2 = (rx * rx) as f64;
    let ry2 = (ry * ry) as f64;

    let mut x: i64 = 0;
    let mut y: i64 = ry;
    let mut dx = 0.0;
    let mut dy = 2.0 * rx2 * y as f64;

    // Region 1
    let mut d1 = ry2 - rx2 * ry as f64 + 0.25 * rx2;
    while dx < dy {
        push_quadrants(out, cx, cy, x, y);
        x += 1;
        dx += 2.0 * ry2;
        if d1 < 0.0 {
            d1 += dx + ry2;
        } else {
            y -= 1;
            dy -= 2.0 * rx2;
            d1 += dx - dy + ry2;
        }
    }

    // Region 2
    let xf = x as f64 + 0.5;
    let yf = (y - 1) as f64;
    let mut d2 = ry2 * xf * xf + rx2 * yf * yf - rx2 * ry2;
    while y >= 0 {
        push_quadrants(out, cx, cy, x, y);
        if y == 0 {
            break;
        }
        y -= 1;
        dy -= 2.0 * rx2;
        if d2 > 0.0 {
            d2 += rx2 - dy;
        } else {
            x += 1;
            dx += 2.0 * ry2;
            d2 += dx - dy + rx2;
        }
    }

    // Flat boxes reach the major axis before x reaches rx
    for x in x + 1..=rx {
        push_quadrants(out, cx, cy, x, 0);
    }
}

/// Mirror a first-quadrant offset into all four quadrants.
///
/// Offsets on an axis are emitted once rather than duplicated.
#[inline]
fn push_quadrants(out: &mut Vec<Point>, cx: i64, cy: i64, x: i64, y: i64) {
    let p = |px: i64, py: i64| Point::new(px as i32, py as i32);
    out.push(p(cx + x, cy + y));
    if x != 0 {
        out.push(p(cx - x, cy + y));
    }
    if y != 0 {
        out.push(p(cx + x, cy - y));
        if x != 0 {
            out.push(p(cx - x, cy - y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ellipse(c0: (i32, i32), c1: (i32, i32)) -> Vec<Point> {
        let mut out = Vec::new();
        draw_ellipse(&mut out, c0.into(), c1.into());
        out
    }

    #[test]
    fn test_circle_extremes() {
        let set: HashSet<Point> = ellipse((40, 40), (60, 60)).into_iter().collect();
        assert!(set.contains(&Point::new(50, 60)));
        assert!(set.contains(&Point::new(50, 40)));
        assert!(set.contains(&Point::new(60, 50)));
        assert!(set.contains(&Point::new(40, 50)));
        assert!(!set.contains(&Point::new(50, 50)));
    }

    #[test]
    fn test_ellipse_stays_in_box() {
        for p in ellipse((200, 100), (350, 460)) {
            assert!((200..=350).contains(&p.x), "{p}");
            assert!((100..=460).contains(&p.y), "{p}");
        }
    }

    #[test]
    fn test_ellipse_no_duplicates() {
        let pixels = ellipse((0, 0), (30, 10));
        let set: HashSet<Point> = pixels.iter().copied().collect();
        assert_eq!(set.len(), pixels.len());
    }

    #[test]
    fn test_ellipse_corner_order_irrelevant() {
        let a: HashSet<Point> = ellipse((200, 100), (350, 460)).into_iter().collect();
        let b: HashSet<Point> = ellipse((350, 460), (200, 100)).into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ellipse_connected_outline() {
        // Each pixel should have an 8-neighbour in the outline
        let pixels = ellipse((-50, -20), (50, 20));
        let set: HashSet<Point> = pixels.iter().copied().collect();
        for p in &pixels {
            let has_neighbour = (-1..=1).any(|ox| {
                (-1..=1).any(|oy| (ox, oy) != (0, 0) && set.contains(&p.offset(ox, oy)))
            });
            assert!(has_neighbour, "isolated pixel {p}");
        }
    }

    #[test]
    fn test_flat_ellipse_reaches_its_vertices() {
        for (w, h) in [(16, 2), (40, 2), (200, 6), (7, 3), (120, 4)] {
            let pixels = ellipse((0, 0), (w, h));
            let set: HashSet<Point> = pixels.iter().copied().collect();
            let (cx, cy, rx, ry) = (w / 2, h / 2, w / 2, h / 2);

            assert_eq!(set.len(), pixels.len(), "duplicates in {w}x{h}");
            for v in [(cx - rx, cy), (cx + rx, cy), (cx, cy - ry), (cx, cy + ry)] {
                assert!(set.contains(&Point::from(v)), "{w}x{h} misses {v:?}");
            }
        }
    }

    #[test]
    fn test_zero_height_is_horizontal_segment() {
        let pixels = ellipse((10, 5), (20, 5));
        assert_eq!(pixels.len(), 11);
        assert!(pixels.iter().all(|p| p.y == 5));
    }

    #[test]
    fn test_zero_width_is_vertical_segment() {
        let pixels = ellipse((3, 0), (3, 8));
        assert_eq!(pixels.len(), 9);
        assert!(pixels.iter().all(|p| p.x == 3));
    }

    #[test]
    fn test_zero_size_is_point() {
        assert_eq!(ellipse((9, 9), (9, 9)), vec![Point::new(9, 9)]);
    }
}

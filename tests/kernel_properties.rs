//! Kernel property tests.
//!
//! End-to-end checks of the rasterization, transform and clipping guarantees
//! through the public `Primitive` facade.
//!
//! Run: cargo test --test kernel_properties

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use trueno_draw::prelude::*;

fn assert_connected(pixels: &[Point]) {
    for w in pixels.windows(2) {
        assert!(
            (w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1,
            "gap between {} and {}",
            w[0],
            w[1]
        );
    }
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn dda_and_bresenham_agree_on_axis_aligned_and_diagonal_lines() {
    let cases = [
        ((10, 10), (60, 10)),
        ((60, 10), (10, 10)),
        ((10, 10), (10, 60)),
        ((10, 60), (10, 10)),
        ((0, 0), (40, 40)),
        ((40, 0), (0, 40)),
        ((-5, -5), (-45, -45)),
        ((7, 7), (7, 7)),
    ];
    for (a, b) in cases {
        let dda = Primitive::line(a.into(), b.into(), LineAlgorithm::Dda).render();
        let bres = Primitive::line(a.into(), b.into(), LineAlgorithm::Bresenham).render();
        assert_eq!(dda, bres, "{a:?} -> {b:?}");
    }
}

#[test]
fn reference_line_renders_from_start_to_end() {
    let line = Primitive::line(Point::new(100, 400), Point::new(300, 200), LineAlgorithm::Dda);
    let pixels = line.render();

    assert_eq!(pixels.len(), 201);
    assert_eq!(pixels[0], Point::new(100, 400));
    assert_eq!(pixels[200], Point::new(300, 200));
    assert!(pixels.contains(&Point::new(200, 300)));
}

// ============================================================================
// Polygons
// ============================================================================

#[test]
fn polygon_outline_is_closed() {
    let verts = vec![Point::new(0, 0), Point::new(40, 0), Point::new(40, 30), Point::new(0, 30)];
    let polygon = Primitive::polygon(verts.clone(), LineAlgorithm::Bresenham).unwrap();
    let pixels = polygon.render();

    assert_eq!(pixels.first(), Some(&verts[0]));
    assert_eq!(pixels.last(), Some(&verts[0]));
    assert_connected(&pixels);
    for v in &verts {
        assert!(pixels.contains(v), "missing vertex {v}");
    }
}

#[test]
fn single_vertex_polygon_is_a_pixel() {
    let polygon = Primitive::polygon(vec![Point::new(3, 4)], LineAlgorithm::Dda).unwrap();
    assert_eq!(polygon.render(), vec![Point::new(3, 4)]);
}

// ============================================================================
// Ellipses
// ============================================================================

#[test]
fn ellipse_is_symmetric_about_its_center() {
    let ellipse = Primitive::ellipse(Point::new(200, 100), Point::new(350, 460));
    let pixels: HashSet<Point> = ellipse.render().into_iter().collect();
    let (cx, cy) = (275, 280);

    assert!(pixels.contains(&Point::new(200, cy)));
    assert!(pixels.contains(&Point::new(350, cy)));
    assert!(pixels.contains(&Point::new(cx, 100)));
    assert!(pixels.contains(&Point::new(cx, 460)));

    for p in &pixels {
        assert!(pixels.contains(&Point::new(2 * cx - p.x, p.y)), "no mirror of {p} in x");
        assert!(pixels.contains(&Point::new(p.x, 2 * cy - p.y)), "no mirror of {p} in y");
    }
}

#[test]
fn ellipse_stays_within_its_box() {
    let ellipse = Primitive::ellipse(Point::new(350, 460), Point::new(200, 100));
    let rect = ellipse.bounding_rect();
    assert_eq!(rect, Rect::new(200, 100, 150, 360));
    assert!(ellipse.render().iter().all(|p| rect.contains(*p)));
}

// ============================================================================
// Curves
// ============================================================================

#[test]
fn bezier_starts_and_ends_on_control_points() {
    let control = vec![Point::new(0, 0), Point::new(100, 200), Point::new(300, 100)];
    let curve = Primitive::curve(control, CurveAlgorithm::Bezier).unwrap();
    let pixels = curve.render();

    assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
    assert_eq!(pixels.last(), Some(&Point::new(300, 100)));
    assert_connected(&pixels);
}

#[test]
fn bspline_needs_four_control_points() {
    let three = vec![Point::new(0, 0), Point::new(50, 80), Point::new(100, 0)];
    let curve = Primitive::curve(three, CurveAlgorithm::BSpline).unwrap();
    assert!(curve.render().is_empty());

    let four = vec![Point::new(0, 0), Point::new(50, 80), Point::new(100, 0), Point::new(150, 80)];
    let curve = Primitive::curve(four, CurveAlgorithm::BSpline).unwrap();
    let pixels = curve.render();
    assert!(!pixels.is_empty());
    assert_connected(&pixels);
}

#[test]
fn fixed_step_options_are_honored() {
    let control = vec![Point::new(0, 0), Point::new(0, 100), Point::new(100, 100)];
    let curve = Primitive::curve(control, CurveAlgorithm::Bezier).unwrap();
    let coarse = curve.render_with(&RasterOptions {
        curve_steps: Some(1),
        spline_steps: None,
    });

    // One step joins the end points directly.
    let mut chord = Vec::new();
    trueno_draw::render::draw_line_bresenham(&mut chord, Point::new(0, 0), Point::new(100, 100));
    assert_eq!(coarse, chord);
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn rotate_full_turn_returns_home() {
    let mut polygon = Primitive::polygon(
        vec![Point::new(120, 40), Point::new(-30, 77), Point::new(5, -90)],
        LineAlgorithm::Dda,
    )
    .unwrap();
    let before = polygon.points().to_vec();

    polygon.rotate(Point::new(13, -8), 360.0);

    for (a, b) in before.iter().zip(polygon.points()) {
        assert!((a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1, "{a} became {b}");
    }
}

#[test]
fn transforms_compose_on_the_facade() {
    let mut line = Primitive::line(Point::new(0, 0), Point::new(10, 0), LineAlgorithm::Bresenham);
    line.apply(Transform::Rotate {
        pivot: Point::ORIGIN,
        degrees: 90.0,
    });
    line.apply(Transform::Scale {
        pivot: Point::ORIGIN,
        rate: 2.0,
    });
    line.translate(5, 5);

    assert_eq!(line.points(), &[Point::new(5, 5), Point::new(5, 25)]);
}

// ============================================================================
// Clipping
// ============================================================================

#[test]
fn reference_clip_agrees_across_algorithms() {
    let window = Window::new(150, 150, 350, 350);
    for algorithm in [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky] {
        let mut line =
            Primitive::line(Point::new(100, 400), Point::new(300, 200), LineAlgorithm::Dda);
        assert!(line.clip(window, algorithm).unwrap());
        assert_eq!(line.points(), &[Point::new(150, 350), Point::new(300, 200)], "{algorithm}");
    }
}

#[test]
fn clipping_a_curve_is_rejected() {
    let mut curve = Primitive::curve(
        vec![Point::new(0, 0), Point::new(10, 10)],
        CurveAlgorithm::Bezier,
    )
    .unwrap();
    let err = curve.clip(Window::new(0, 0, 5, 5), ClipAlgorithm::LiangBarsky).unwrap_err();
    assert_eq!(err, Error::NotClippable(PrimitiveKind::Curve));
    assert_eq!(curve.points(), &[Point::new(0, 0), Point::new(10, 10)]);
}

// ============================================================================
// Properties
// ============================================================================

fn coord() -> impl Strategy<Value = i32> {
    -1000..1000i32
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn near_point() -> impl Strategy<Value = Point> {
    (-120..220i32, -120..220i32).prop_map(|(x, y)| Point::new(x, y))
}

fn line_algorithm() -> impl Strategy<Value = LineAlgorithm> {
    prop_oneof![Just(LineAlgorithm::Dda), Just(LineAlgorithm::Bresenham)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_lines_hit_both_endpoints(p0 in point(), p1 in point(), algorithm in line_algorithm()) {
        let pixels = Primitive::line(p0, p1, algorithm).render();
        let expected = (p1.x - p0.x).abs().max((p1.y - p0.y).abs()) as usize + 1;

        prop_assert_eq!(pixels.len(), expected);
        prop_assert_eq!(pixels[0], p0);
        prop_assert_eq!(pixels[pixels.len() - 1], p1);
        for w in pixels.windows(2) {
            prop_assert!((w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1);
        }
    }

    #[test]
    fn prop_translate_shifts_bounding_rect(
        pts in prop::collection::vec(point(), 1..8),
        dx in -500..500i32,
        dy in -500..500i32,
    ) {
        let mut polygon = Primitive::polygon(pts, LineAlgorithm::Bresenham).unwrap();
        let before = polygon.bounding_rect();
        polygon.translate(dx, dy);
        let after = polygon.bounding_rect();

        prop_assert_eq!(after, Rect::new(before.x + dx, before.y + dy, before.width, before.height));
    }

    #[test]
    fn prop_identity_transforms(pts in prop::collection::vec(point(), 1..8), pivot in point()) {
        let mut polygon = Primitive::polygon(pts.clone(), LineAlgorithm::Dda).unwrap();
        polygon.scale(pivot, 1.0);
        prop_assert_eq!(polygon.points(), pts.as_slice());
        polygon.rotate(pivot, 0.0);
        prop_assert_eq!(polygon.points(), pts.as_slice());
    }

    #[test]
    fn prop_bezier_is_connected_and_anchored(
        control in prop::collection::vec(point(), 2..6),
        steps in prop::option::of(1..64u32),
    ) {
        let curve = Primitive::curve(control.clone(), CurveAlgorithm::Bezier).unwrap();
        let pixels = curve.render_with(&RasterOptions { curve_steps: steps, spline_steps: None });

        prop_assert_eq!(pixels[0], control[0]);
        prop_assert_eq!(pixels[pixels.len() - 1], control[control.len() - 1]);
        for w in pixels.windows(2) {
            prop_assert!((w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1);
        }
    }

    #[test]
    fn prop_clipped_line_lies_in_window(
        p0 in near_point(),
        p1 in near_point(),
        c0 in near_point(),
        c1 in near_point(),
    ) {
        let window = Window::from_corners(c0, c1);
        let mut cs = Primitive::line(p0, p1, LineAlgorithm::Dda);
        let mut lb = cs.clone();

        let cs_visible = cs.clip(window, ClipAlgorithm::CohenSutherland).unwrap();
        let lb_visible = lb.clip(window, ClipAlgorithm::LiangBarsky).unwrap();

        prop_assert_eq!(cs_visible, lb_visible);
        if cs_visible {
            for p in cs.points().iter().chain(lb.points()) {
                prop_assert!(window.contains(*p), "{} outside window", p);
            }
        } else {
            prop_assert_eq!(cs.points(), &[p0, p1]);
        }
    }
}

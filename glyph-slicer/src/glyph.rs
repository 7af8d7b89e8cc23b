//------------------------------------------------------------------------------
// glyph.rs
//------------------------------------------------------------------------------
// Runs the whole slicing pipeline for one glyph and assembles the output
//------------------------------------------------------------------------------

use crate::ordered_float::OrderedFloat;

use crate::geometry::*;
use crate::curve::QuadraticBezier;
use crate::outline::*;
use crate::sweep::*;

// One renderable slice: a horizontal band bounded by two quadratics
#[derive(Clone, Copy, Debug)]
pub struct GlyphSlice {
    pub left: QuadraticBezier,
    pub right: QuadraticBezier
}

// A fully sliced glyph
#[derive(Clone, Debug)]
pub struct Glyph {
    pub code: char,
    pub advance: Coord,
    pub bounds: Rect,
    pub slices: Vec<GlyphSlice>
}

/// Slice one glyph outline. Total on well-formed input: an empty or
/// degenerate outline comes back with no slices but intact metrics.
pub fn slice_glyph(outline: &GlyphOutline) -> Glyph {
    let mut graph = build_outline(&outline.events);
    resolve_self_intersections(&mut graph);
    find_corners(&mut graph);
    let raw = sweep_plane(&mut graph);
    let curves = approximate_slices(&mut graph, raw);

    let mut slices: Vec<GlyphSlice> = curves.into_iter()
        .map(|s| GlyphSlice { left: s.left, right: s.right })
        .collect();
    slices.sort_by_key(|s| OrderedFloat(s.left.a.y));

    Glyph {
        code: outline.code,
        advance: outline.advance,
        bounds: outline.bounds,
        slices
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::approx::assert_abs_diff_eq;

    fn outline(events: Vec<OutlineEvent>) -> GlyphOutline {
        let pts = events.iter().flat_map(|e| match *e {
            OutlineEvent::MoveTo(p) | OutlineEvent::LineTo(p) => vec![p],
            OutlineEvent::QuadTo(c, p) => vec![c, p],
            OutlineEvent::CubicTo(c1, c2, p) => vec![c1, c2, p],
            OutlineEvent::End => vec![]
        });
        let bounds = Rect::enclosing_rect(pts).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        GlyphOutline { code: 'x', advance: 1100.0, bounds, events }
    }

    fn check_slices(glyph: &Glyph) {
        let mut prev_top = -CoordM::INFINITY;
        for s in &glyph.slices {
            assert_abs_diff_eq!(s.left.a.y, s.right.a.y);
            assert_abs_diff_eq!(s.left.c.y, s.right.c.y);
            assert!(s.left.a.y < s.left.c.y);
            assert!(s.left.a.y >= prev_top);
            prev_top = s.left.a.y;
            for i in 0..=16 {
                let t = i as Coord / 16.0;
                assert!(s.left.at(t).x <= s.right.at(t).x + 0.5,
                    "left crosses right at t = {}", t);
            }
        }
    }

    // Recover the filled area as the sum of each slice's strip integral
    fn slices_area(glyph: &Glyph) -> Coord {
        let mut area = 0.0;
        for s in &glyph.slices {
            let h = s.left.c.y - s.left.a.y;
            let samples = 64;
            for i in 0..samples {
                let y = s.left.a.y + (i as Coord + 0.5) / samples as Coord * h;
                let xl = solve_x_at(&s.left, y);
                let xr = solve_x_at(&s.right, y);
                area += (xr - xl) * h / samples as Coord;
            }
        }
        area
    }

    fn solve_x_at(q: &QuadraticBezier, y: Coord) -> Coord {
        let roots = q.solve_y(y);
        match roots.first() {
            Some(&t) => q.at(t).x,
            None => if y < q.a.y { q.a.x } else { q.c.x }
        }
    }

    #[test]
    fn test_triangle() {
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(500.0, 1000.0)),
            OutlineEvent::End
        ]));
        check_slices(&glyph);
        assert_eq!(glyph.slices.len(), 1);
        let s = &glyph.slices[0];
        assert_abs_diff_eq!(s.left.a.x, 0.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(s.left.a.y, 0.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(s.left.c.x, 500.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(s.left.c.y, 1000.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(s.right.a.x, 1000.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(s.right.c.x, 500.0, epsilon = 1.0e-6);

        let area = slices_area(&glyph);
        assert!((area - 500000.0).abs() / 500000.0 < 0.03, "area {}", area);
    }

    #[test]
    fn test_square() {
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 1000.0)),
            OutlineEvent::LineTo(Vec2::new(0.0, 1000.0)),
            OutlineEvent::End
        ]));
        check_slices(&glyph);
        assert_eq!(glyph.slices.len(), 1);
        let s = &glyph.slices[0];
        for (p, e) in [
            (s.left.a, (0.0, 0.0)), (s.left.b, (0.0, 500.0)), (s.left.c, (0.0, 1000.0)),
            (s.right.a, (1000.0, 0.0)), (s.right.b, (1000.0, 500.0)), (s.right.c, (1000.0, 1000.0))
        ].iter() {
            assert_abs_diff_eq!(p.x, e.0, epsilon = 1.0e-6);
            assert_abs_diff_eq!(p.y, e.1, epsilon = 1.0e-6);
        }

        let area = slices_area(&glyph);
        assert!((area - 1.0e6).abs() / 1.0e6 < 0.03, "area {}", area);
    }

    #[test]
    fn test_circle() {
        let k = 0.5522847498 * 500.0;
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(500.0, 0.0)),
            OutlineEvent::CubicTo(Vec2::new(500.0, k), Vec2::new(k, 500.0), Vec2::new(0.0, 500.0)),
            OutlineEvent::CubicTo(Vec2::new(-k, 500.0), Vec2::new(-500.0, k), Vec2::new(-500.0, 0.0)),
            OutlineEvent::CubicTo(Vec2::new(-500.0, -k), Vec2::new(-k, -500.0), Vec2::new(0.0, -500.0)),
            OutlineEvent::CubicTo(Vec2::new(k, -500.0), Vec2::new(500.0, -k), Vec2::new(500.0, 0.0)),
            OutlineEvent::End
        ]));
        check_slices(&glyph);
        assert!(glyph.slices.len() >= 2);

        let area = slices_area(&glyph);
        let expected = CoordM::consts::PI * 500.0 * 500.0;
        assert!((area - expected).abs() / expected < 0.03, "area {}", area);
    }

    #[test]
    fn test_square_with_hole() {
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 1000.0)),
            OutlineEvent::LineTo(Vec2::new(0.0, 1000.0)),
            OutlineEvent::MoveTo(Vec2::new(250.0, 250.0)),
            OutlineEvent::LineTo(Vec2::new(250.0, 750.0)),
            OutlineEvent::LineTo(Vec2::new(750.0, 750.0)),
            OutlineEvent::LineTo(Vec2::new(750.0, 250.0)),
            OutlineEvent::End
        ]));
        check_slices(&glyph);
        assert_eq!(glyph.slices.len(), 4);

        // Sorted by top y: full band, two strips, full band
        assert_abs_diff_eq!(glyph.slices[0].left.a.y, 0.0);
        assert_abs_diff_eq!(glyph.slices[0].left.c.y, 250.0);
        for s in &glyph.slices[1..3] {
            assert_abs_diff_eq!(s.left.a.y, 250.0);
            assert_abs_diff_eq!(s.left.c.y, 750.0);
        }
        assert_abs_diff_eq!(glyph.slices[3].left.a.y, 750.0);
        assert_abs_diff_eq!(glyph.slices[3].left.c.y, 1000.0);

        let area = slices_area(&glyph);
        let expected = 1.0e6 - 250000.0;
        assert!((area - expected).abs() / expected < 0.03, "area {}", area);
    }

    #[test]
    fn test_self_intersecting_contour() {
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 1000.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(0.0, 1000.0)),
            OutlineEvent::End
        ]));
        check_slices(&glyph);
        // Both lobes of the figure eight, nothing spurious
        assert_eq!(glyph.slices.len(), 4);
        let area = slices_area(&glyph);
        assert!((area - 500000.0).abs() / 500000.0 < 0.03, "area {}", area);
    }

    #[test]
    fn test_degenerate_segment() {
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(500.0, 1000.0)),
            OutlineEvent::End
        ]));
        check_slices(&glyph);
        assert_eq!(glyph.slices.len(), 1);
        assert_abs_diff_eq!(glyph.bounds.width, 1000.0);
        assert_abs_diff_eq!(glyph.bounds.height, 1000.0);
    }

    #[test]
    fn test_zero_area_contour_yields_no_slices() {
        let glyph = slice_glyph(&outline(vec![
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(100.0, 100.0)),
            OutlineEvent::LineTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::End
        ]));
        assert!(glyph.slices.is_empty());
    }

    #[test]
    fn test_empty_outline_keeps_metrics() {
        let glyph = slice_glyph(&GlyphOutline {
            code: ' ',
            advance: 600.0,
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            events: vec![OutlineEvent::End]
        });
        assert!(glyph.slices.is_empty());
        assert_abs_diff_eq!(glyph.advance, 600.0);
    }
}

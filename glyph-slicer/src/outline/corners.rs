//------------------------------------------------------------------------------
// corners.rs
//------------------------------------------------------------------------------
// Splits curved edges at their vertical extremes and flags the vertices
// which anchor the plane sweep
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::curve::*;
use super::graph::*;

/// Make every curved edge y-monotone and flag every corner vertex: a
/// tangent break sharper than ~7 degrees, or a vertical turnaround.
pub fn find_corners(graph: &mut OutlineGraph) {
    // Snapshot the live rings; splits append edges that are already
    // monotone halves and need no second visit
    let mut edges = Vec::new();
    let mut vertices = Vec::new();
    for ri in 0..graph.roots.len() {
        edges.extend(graph.ring_edges(graph.roots[ri]));
        vertices.extend(graph.ring_vertices(graph.roots[ri]));
    }

    // Split curved edges at interior vertical extremes
    for e in edges {
        match graph.curve(e) {
            Curve::Line(_) => {}
            Curve::QuadraticBezier(q) => {
                if q.is_monotonic_y() { continue; }
                let d = q.derivative();
                if let Some(&t) = d.solve_y(0.0).first() {
                    if let Some(v) = graph.split_edge(e, t) {
                        graph.vertices[v].is_corner = true;
                    }
                }
            }
            Curve::CubicBezier(c) => {
                if c.is_monotonic_y() { continue; }
                // The derivative is quadratic, so up to two extremes
                let roots = c.derivative().solve_y(0.0);
                let mut e = e;
                let mut t1 = roots.get(1).copied();

                if let Some(&t0) = roots.first() {
                    if let Some(v) = graph.split_edge(e, t0) {
                        graph.vertices[v].is_corner = true;
                        e = graph.vertices[v].next;
                        // Map the second extreme onto the right half
                        t1 = t1.map(|t| (t - t0) / (1.0 - t0));
                    }
                }

                if let Some(t1) = t1 {
                    if let Some(v) = graph.split_edge(e, t1) {
                        graph.vertices[v].is_corner = true;
                    }
                }
            }
        }
    }

    // Flag the corner vertices of the original rings
    let limit = (0.02 * TWO_PI).cos();
    for v in vertices {
        let tin = -1.0 * graph.tangent_away(v, true);
        let tout = graph.tangent_away(v, false);

        // Check angle
        if tin.dot(tout) < limit {
            graph.vertices[v].is_corner = true;
        }

        // Check for vertical extreme
        if (tin.y >= 0.0 && tout.y <= 0.0) || (tin.y <= 0.0 && tout.y >= 0.0) {
            graph.vertices[v].is_corner = true;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::outline::{build_outline, OutlineEvent};
    use crate::approx::assert_abs_diff_eq;

    fn corners_of(graph: &OutlineGraph) -> Vec<usize> {
        (0..graph.vertices.len()).filter(|&v| graph.vertices[v].is_corner).collect()
    }

    #[test]
    fn test_square_corners() {
        let mut graph = build_outline(&[
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(1000.0, 1000.0)),
            OutlineEvent::LineTo(Vec2::new(0.0, 1000.0)),
            OutlineEvent::End
        ]);
        find_corners(&mut graph);
        assert_eq!(corners_of(&graph).len(), 4);
    }

    #[test]
    fn test_circle_extremes_only() {
        let k = 0.5522847498 * 500.0;
        let mut graph = build_outline(&[
            OutlineEvent::MoveTo(Vec2::new(500.0, 0.0)),
            OutlineEvent::CubicTo(Vec2::new(500.0, k), Vec2::new(k, 500.0), Vec2::new(0.0, 500.0)),
            OutlineEvent::CubicTo(Vec2::new(-k, 500.0), Vec2::new(-500.0, k), Vec2::new(-500.0, 0.0)),
            OutlineEvent::CubicTo(Vec2::new(-500.0, -k), Vec2::new(-k, -500.0), Vec2::new(0.0, -500.0)),
            OutlineEvent::CubicTo(Vec2::new(k, -500.0), Vec2::new(500.0, -k), Vec2::new(500.0, 0.0)),
            OutlineEvent::End
        ]);
        find_corners(&mut graph);

        // Quadrants are y-monotone already; only the apex and nadir flag
        let corners = corners_of(&graph);
        assert_eq!(corners.len(), 2);
        let mut ys: Vec<Coord> = corners.iter().map(|&v| graph.vertices[v].p.y).collect();
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_abs_diff_eq!(ys[0], -500.0);
        assert_abs_diff_eq!(ys[1], 500.0);
    }

    #[test]
    fn test_arch_splits_at_apex() {
        // A quadratic arch over a flat base; the apex is an interior extreme
        let mut graph = build_outline(&[
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::QuadTo(Vec2::new(500.0, 1000.0), Vec2::new(1000.0, 0.0)),
            OutlineEvent::End
        ]);
        let edges_before = graph.edges.len();
        find_corners(&mut graph);

        // Exactly one split, at the top of the arch
        assert_eq!(graph.edges.len(), edges_before + 1);
        let apex = graph.vertices.iter()
            .find(|v| v.is_corner && v.p.y > 400.0)
            .expect("apex not split");
        assert_abs_diff_eq!(apex.p.x, 500.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(apex.p.y, 500.0, epsilon = 1.0e-6);
    }

    #[test]
    fn test_ess_cubic_splits_twice() {
        // Both extremes of an S-shaped cubic get their own vertex
        let mut graph = build_outline(&[
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::CubicTo(
                Vec2::new(120.0, 160.0), Vec2::new(-20.0, -60.0), Vec2::new(100.0, 100.0)),
            OutlineEvent::LineTo(Vec2::new(50.0, 300.0)),
            OutlineEvent::End
        ]);
        find_corners(&mut graph);

        let split_corners = graph.vertices.iter()
            .skip(3)
            .filter(|v| v.is_corner)
            .count();
        assert_eq!(split_corners, 2);
    }
}

//------------------------------------------------------------------------------
// graph.rs
//------------------------------------------------------------------------------
// Provides the ring graph a glyph outline is processed in: vertices and
// edges live in per-glyph arenas and refer to each other by index
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::curve::*;

// New vertices this close, in parameter space, to an existing endpoint are
// rejected rather than created
pub const SPLIT_EPSILON: Coord = 0.01;

// The interior control points of an edge; endpoints live on the vertices
#[derive(Clone, Copy, Debug)]
pub enum EdgeKind {
    Line,
    Quadratic(Vec2),
    Cubic(Vec2, Vec2)
}

#[derive(Debug)]
pub struct Vertex {
    pub p: Vec2,
    pub prev: usize,
    pub next: usize,
    pub is_corner: bool
}

#[derive(Debug)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from: usize,
    pub to: usize
}

// Every ring keeps the invariants edge.from.next == edge and
// edge.to.prev == edge; prev/next traversal returns to the start
#[derive(Debug)]
pub struct OutlineGraph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub roots: Vec<usize>
}

impl OutlineGraph {
    pub fn new() -> OutlineGraph {
        OutlineGraph { vertices: Vec::new(), edges: Vec::new(), roots: Vec::new() }
    }

    pub fn curve(&self, e: usize) -> Curve {
        let edge = &self.edges[e];
        let a = self.vertices[edge.from].p;
        let b = self.vertices[edge.to].p;
        match edge.kind {
            EdgeKind::Line => Curve::line(a, b),
            EdgeKind::Quadratic(c) => Curve::quadratic_bezier(a, c, b),
            EdgeKind::Cubic(c1, c2) => Curve::cubic_bezier(a, c1, c2, b)
        }
    }

    // The nearest control point of the edge leaving v forward (next) or
    // backward (prev); degenerates to the far endpoint for lines
    pub fn tangent_away(&self, v: usize, backward: bool) -> Vec2 {
        if backward {
            -1.0 * self.curve(self.vertices[v].prev).exit_tangent()
        } else {
            self.curve(self.vertices[v].next).entry_tangent()
        }
    }

    /// Split edge `e` at parameter `t`, mutating it into the left half and
    /// appending the right half. The new vertex is returned; splits too
    /// close to an endpoint are rejected. Vertices born from cubic splits
    /// are corner candidates.
    pub fn split_edge(&mut self, e: usize, t: Coord) -> Option<usize> {
        if t < SPLIT_EPSILON || t > 1.0 - SPLIT_EPSILON { return None; }

        let (mid, left_kind, right_kind, is_corner) = match self.curve(e) {
            Curve::Line(l) => {
                let (l0, _) = l.split(t);
                (l0.b, EdgeKind::Line, EdgeKind::Line, false)
            }
            Curve::QuadraticBezier(q) => {
                let (q0, q1) = q.split(t);
                (q0.c, EdgeKind::Quadratic(q0.b), EdgeKind::Quadratic(q1.b), false)
            }
            Curve::CubicBezier(c) => {
                let (c0, c1) = c.split(t);
                (c0.d, EdgeKind::Cubic(c0.b, c0.c), EdgeKind::Cubic(c1.b, c1.c), true)
            }
        };

        let v = self.vertices.len();
        let f = self.edges.len();
        let to = self.edges[e].to;

        self.edges[e].kind = left_kind;
        self.edges[e].to = v;
        self.vertices.push(Vertex { p: mid, prev: e, next: f, is_corner });
        self.edges.push(Edge { kind: right_kind, from: v, to });
        self.vertices[to].prev = f;

        Some(v)
    }

    /// Split the side running from `a` down to `b` at height `y`. The side
    /// must be y-monotone with y increasing from `a` to `b`; `reversed`
    /// walks prev edges instead of next ones. A failed solve or rejected
    /// split falls back to the nearest existing endpoint.
    pub fn split_at_y(&mut self, a: usize, b: usize, reversed: bool, y: Coord) -> usize {
        // Find the edge which straddles the horizontal line
        let mut e;
        if reversed {
            e = self.vertices[a].prev;
            while self.vertices[self.edges[e].from].p.y < y && self.edges[e].from != b {
                e = self.vertices[self.edges[e].from].prev;
            }
        } else {
            e = self.vertices[a].next;
            while self.vertices[self.edges[e].to].p.y < y && self.edges[e].to != b {
                e = self.vertices[self.edges[e].to].next;
            }
        }

        // Solve at y to find the parameter at which to split
        let roots = self.curve(e).solve_y(y);
        if let Some(&t) = roots.first() {
            if let Some(v) = self.split_edge(e, t) {
                return v;
            }
        }

        // Otherwise, return the endpoint closest to the split line
        let (from, to) = (self.edges[e].from, self.edges[e].to);
        let fy = self.vertices[from].p.y;
        let ty = self.vertices[to].p.y;
        let mid = (fy + ty) * 0.5;
        if fy < ty {
            if y < mid { from } else { to }
        } else {
            if y < mid { to } else { from }
        }
    }

    /// The x coordinate where edge `e` meets the horizontal line at `y`,
    /// clamped to the nearer endpoint when the solve comes up empty.
    pub fn edge_x_at(&self, e: usize, y: Coord) -> Coord {
        let curve = self.curve(e);
        let roots = curve.solve_y(y);
        if let Some(&t) = roots.first() {
            return curve.at(t).x;
        }

        // y should intersect the edge, but just in case...
        let from = self.vertices[self.edges[e].from].p;
        let to = self.vertices[self.edges[e].to].p;
        if from.y < to.y {
            if y < from.y { return from.x; }
            if y > to.y { return to.x; }
        } else {
            if y < to.y { return to.x; }
            if y > from.y { return from.x; }
        }
        (from.x + to.x) * 0.5
    }

    pub fn ring_edges(&self, root: usize) -> RingEdges<'_> {
        RingEdges {
            graph: Some(self),
            first: self.vertices[root].next,
            cur: self.vertices[root].next,
            remaining: self.edges.len()
        }
    }

    pub fn ring_vertices(&self, root: usize) -> impl Iterator<Item = usize> + '_ {
        self.ring_edges(root).map(move |e| self.edges[e].from)
    }
}

// Walks the edges of one ring in next order, fused against corrupted links
pub struct RingEdges<'a> {
    graph: Option<&'a OutlineGraph>,
    first: usize,
    cur: usize,
    remaining: usize
}

impl<'a> Iterator for RingEdges<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let graph = self.graph?;
        if self.remaining == 0 {
            warn!("ring walk exceeded the edge arena, dropping out");
            self.graph = None;
            return None;
        }
        self.remaining -= 1;

        let cur = self.cur;
        self.cur = graph.vertices[graph.edges[cur].to].next;
        if self.cur == self.first { self.graph = None; }
        Some(cur)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::outline::{build_outline, OutlineEvent};
    use crate::approx::assert_abs_diff_eq;

    fn diamond() -> OutlineGraph {
        build_outline(&[
            OutlineEvent::MoveTo(Vec2::new(0.0, 0.0)),
            OutlineEvent::LineTo(Vec2::new(100.0, 100.0)),
            OutlineEvent::LineTo(Vec2::new(0.0, 200.0)),
            OutlineEvent::LineTo(Vec2::new(-100.0, 100.0)),
            OutlineEvent::End
        ])
    }

    fn check_ring(graph: &OutlineGraph, root: usize) {
        for e in graph.ring_edges(root) {
            assert_eq!(graph.vertices[graph.edges[e].from].next, e);
            assert_eq!(graph.vertices[graph.edges[e].to].prev, e);
        }
    }

    #[test]
    fn test_split_edge() {
        let mut graph = diamond();
        let v = graph.split_edge(0, 0.5).expect("split rejected");
        assert_abs_diff_eq!(graph.vertices[v].p.x, 50.0);
        assert_abs_diff_eq!(graph.vertices[v].p.y, 50.0);
        assert_eq!(graph.ring_edges(graph.roots[0]).count(), 5);
        check_ring(&graph, graph.roots[0]);
    }

    #[test]
    fn test_split_rejection() {
        let mut graph = diamond();
        assert!(graph.split_edge(0, 0.005).is_none());
        assert!(graph.split_edge(0, 0.995).is_none());
        assert_eq!(graph.edges.len(), 4);
    }

    #[test]
    fn test_split_at_y() {
        let mut graph = diamond();
        // Right flank of the diamond runs from (0,0) up to (0,200) through
        // (100,100); split it halfway up the first edge
        let v = graph.split_at_y(0, 2, false, 50.0);
        assert_abs_diff_eq!(graph.vertices[v].p.y, 50.0, epsilon = 1.0e-6);
        assert_abs_diff_eq!(graph.vertices[v].p.x, 50.0, epsilon = 1.0e-6);
        check_ring(&graph, graph.roots[0]);
    }

    #[test]
    fn test_split_at_y_falls_back_to_endpoint() {
        let mut graph = diamond();
        let v = graph.split_at_y(0, 2, false, 0.0000001);
        assert_eq!(v, 0);
        assert_eq!(graph.vertices.len(), 4);
    }

    #[test]
    fn test_edge_x_at() {
        let graph = diamond();
        // Edge 0 goes (0,0) -> (100,100)
        assert_abs_diff_eq!(graph.edge_x_at(0, 50.0), 50.0, epsilon = 1.0e-6);
        // Out-of-range y clamps to the nearer endpoint
        assert_abs_diff_eq!(graph.edge_x_at(0, -10.0), 0.0);
        assert_abs_diff_eq!(graph.edge_x_at(0, 500.0), 100.0);
    }
}

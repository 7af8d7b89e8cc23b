//------------------------------------------------------------------------------
// builder.rs
//------------------------------------------------------------------------------
// Consumes the outline event stream and assembles the closed rings of the
// outline graph
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::curve::*;
use super::graph::*;
use super::OutlineEvent;

struct ContourPoint {
    p: Vec2,
    kind: EdgeKind
}

pub fn build_outline(events: &[OutlineEvent]) -> OutlineGraph {
    let mut graph = OutlineGraph::new();
    let mut contour: Vec<ContourPoint> = Vec::new();
    let mut first = Vec2::zero();
    let mut cur = Vec2::zero();

    for event in events {
        match *event {
            OutlineEvent::MoveTo(target) => {
                close_contour(&mut graph, &mut contour, cur, first);
                first = target;
                cur = target;
            }
            OutlineEvent::LineTo(target) => {
                push_segment(&mut contour, cur, EdgeKind::Line, target);
                cur = target;
            }
            OutlineEvent::QuadTo(ctl, target) => {
                push_segment(&mut contour, cur, EdgeKind::Quadratic(ctl), target);
                cur = target;
            }
            OutlineEvent::CubicTo(ctl1, ctl2, target) => {
                push_segment(&mut contour, cur, EdgeKind::Cubic(ctl1, ctl2), target);
                cur = target;
            }
            OutlineEvent::End => {
                close_contour(&mut graph, &mut contour, cur, first);
                break;
            }
        }
    }

    // Tolerate a producer that never sent the terminator
    close_contour(&mut graph, &mut contour, cur, first);
    graph
}

fn segment_curve(from: Vec2, kind: EdgeKind, to: Vec2) -> Curve {
    match kind {
        EdgeKind::Line => Curve::line(from, to),
        EdgeKind::Quadratic(c) => Curve::quadratic_bezier(from, c, to),
        EdgeKind::Cubic(c1, c2) => Curve::cubic_bezier(from, c1, c2, to)
    }
}

fn push_segment(contour: &mut Vec<ContourPoint>, from: Vec2, kind: EdgeKind, to: Vec2) {
    // Zero-length segments contribute nothing
    if is_curve_degenerate(&segment_curve(from, kind, to)) { return; }
    contour.push(ContourPoint { p: from, kind });
}

fn close_contour(graph: &mut OutlineGraph, contour: &mut Vec<ContourPoint>, cur: Vec2, first: Vec2) {
    if contour.is_empty() { return; }

    // A contour left open is closed with a line
    if !cur.roughly_equals(first) {
        contour.push(ContourPoint { p: cur, kind: EdgeKind::Line });
    }

    let len = contour.len();
    let v0 = graph.vertices.len();
    let e0 = graph.edges.len();
    for (i, point) in contour.drain(..).enumerate() {
        graph.vertices.push(Vertex {
            p: point.p,
            prev: e0 + (i + len - 1) % len,
            next: e0 + i,
            is_corner: false
        });
        graph.edges.push(Edge {
            kind: point.kind,
            from: v0 + i,
            to: v0 + (i + 1) % len
        });
    }
    graph.roots.push(v0);
}

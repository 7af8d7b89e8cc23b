//------------------------------------------------------------------------------
// fit.rs
//------------------------------------------------------------------------------
// Replaces the outline sides of each raw slice with single quadratic
// Béziers, splitting slices in half until the fit is close enough
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::curve::*;
use crate::outline::*;
use super::RawSlice;

// Mean horizontal deviation allowed per side, in design units
pub const MAX_ERROR: Coord = 2.5;
// Slices shorter than this are kept however bad the fit
pub const MIN_SPLIT: Coord = 10.0;

const ERROR_SAMPLES: usize = 16;
const FIT_EPSILON: Coord = 0.01;

// A finished slice: both sides are quadratics spanning the same y band
#[derive(Clone, Copy, Debug)]
pub struct SliceCurves {
    pub left: QuadraticBezier,
    pub right: QuadraticBezier
}

/// Approximate every raw slice, subdividing as needed, and return the
/// finished slices in emission order.
pub fn approximate_slices(graph: &mut OutlineGraph, raw: Vec<RawSlice>) -> Vec<SliceCurves> {
    let mut out = Vec::new();
    for slice in raw {
        fit_or_split(graph, slice, &mut out, 0);
    }
    out
}

fn fit_or_split(graph: &mut OutlineGraph, s: RawSlice, out: &mut Vec<SliceCurves>, depth: usize) {
    // Attempt approximation
    let (left, lvalid) = fit_side(graph, s.tl, s.bl, s.lreversed);
    let (mut right, rvalid) = fit_side(graph, s.tr, s.br, s.rreversed);

    // Errors in approximation can cause the sides to span different bands
    right.a.y = left.a.y;
    right.c.y = left.c.y;

    let fitted = SliceCurves { left, right };

    // Check approximation
    if lvalid && side_error(graph, s.tl, s.bl, s.lreversed, &left) < MAX_ERROR
        && rvalid && side_error(graph, s.tr, s.br, s.rreversed, &right) < MAX_ERROR {
        out.push(fitted);
        return;
    }

    // Don't split forever
    let top_y = graph.vertices[s.tl].p.y;
    let bottom_y = graph.vertices[s.bl].p.y;
    if bottom_y - top_y <= MIN_SPLIT || depth > 32 {
        out.push(fitted);
        return;
    }

    // Otherwise, split at the midline
    let split_y = (top_y + bottom_y) * 0.5;
    let lv = graph.split_at_y(s.tl, s.bl, s.lreversed, split_y);
    let rv = graph.split_at_y(s.tr, s.br, s.rreversed, split_y);

    // The split may land on a corner vertex, in which case give up
    if lv == s.tl || lv == s.bl || rv == s.tr || rv == s.br {
        out.push(fitted);
        return;
    }

    let top = RawSlice { bl: lv, br: rv, ..s };
    let bottom = RawSlice { tl: lv, tr: rv, ..s };
    fit_or_split(graph, top, out, depth + 1);
    fit_or_split(graph, bottom, out, depth + 1);
}

// Fit one side by intersecting the endpoint tangent rays; parallel or
// backwards-meeting tangents fall back to a straight side
fn fit_side(graph: &OutlineGraph, a: usize, b: usize, reversed: bool) -> (QuadraticBezier, bool) {
    let pa = graph.vertices[a].p;
    let pb = graph.vertices[b].p;

    let ta = graph.tangent_away(a, reversed);
    let tb = graph.tangent_away(b, !reversed);

    let linear = QuadraticBezier { a: pa, b: (pa + pb) * 0.5, c: pb };

    /*
        Intersection of the two rays by Cramer:

        | ta.x  -tb.x | | s |   | c.x |
        | ta.y  -tb.y | | t | = | c.y |
    */
    let c = pb - pa;
    let sdet = c.x * -tb.y - -tb.x * c.y;
    let tdet = ta.x * c.y - c.x * ta.y;
    let det = ta.x * -tb.y - -tb.x * ta.y;

    if (sdet.abs() < FIT_EPSILON && tdet.abs() < FIT_EPSILON) || det.abs() < FIT_EPSILON {
        // Probably linear
        return (linear, true);
    }

    let s = sdet / det;
    let t = tdet / det;
    if s > FIT_EPSILON && t > FIT_EPSILON {
        return (QuadraticBezier { a: pa, b: pa + s * ta, c: pb }, true);
    }

    // The tangents meet behind the endpoints
    (linear, false)
}

// Mean horizontal distance between the approximation and the outline,
// sampled at uniform parameters
fn side_error(graph: &OutlineGraph, a: usize, b: usize, reversed: bool,
    approx: &QuadraticBezier) -> Coord {

    let mut error = 0.0;
    for i in 1..ERROR_SAMPLES {
        let t = i as Coord / ERROR_SAMPLES as Coord;
        let p = approx.at(t);
        let x = side_x_at(graph, a, b, reversed, p.y);
        error += (p.x - x).abs();
    }
    error / ERROR_SAMPLES as Coord
}

// The outline side's x at height y, walking from a down to b
fn side_x_at(graph: &OutlineGraph, a: usize, b: usize, reversed: bool, y: Coord) -> Coord {
    let pa = graph.vertices[a].p;
    let pb = graph.vertices[b].p;
    if y <= pa.y { return pa.x; }
    if y >= pb.y { return pb.x; }

    let mut e;
    if reversed {
        e = graph.vertices[a].prev;
        while graph.edges[e].from != b && graph.vertices[graph.edges[e].from].p.y < y {
            e = graph.vertices[graph.edges[e].from].prev;
        }
    } else {
        e = graph.vertices[a].next;
        while graph.edges[e].to != b && graph.vertices[graph.edges[e].to].p.y < y {
            e = graph.vertices[graph.edges[e].to].next;
        }
    }

    graph.edge_x_at(e, y)
}

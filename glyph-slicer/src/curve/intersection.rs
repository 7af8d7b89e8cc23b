//--------------------------------------------------------------------
// intersection.rs
//--------------------------------------------------------------------
// Provides the cubic-cubic intersection routine, by recursive
// bounding-box midpoint subdivision
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::arrayvec::ArrayVec;
use super::cubic_bezier::CubicBezier;

pub const MAX_INTERSECTIONS: usize = 9;
pub type IntersectionPairs = ArrayVec<[(Coord, Coord); MAX_INTERSECTIONS]>;

// Flatness scale for the subdivision depth estimate
const INV_EPS: Coord = (1 << 14) as Coord;

fn log4(x: Coord) -> Coord { 0.5 * x.log2() }

fn curve_bbox(c: &CubicBezier) -> Rect {
    Rect::enclosing_rect([c.a, c.b, c.c, c.d].iter().copied()).unwrap()
}

fn bbox_overlap(a: &CubicBezier, b: &CubicBezier) -> bool {
    curve_bbox(a).intersects(curve_bbox(b))
}

// The number of halvings after which the control net is flat enough to be
// treated as its end-to-end segment, from the second differences
fn subdivision_depth(c: &CubicBezier) -> i32 {
    let l1 = (c.c - c.b) - (c.b - c.a);
    let l2 = (c.d - c.c) - (c.c - c.b);
    let l0 = l1.x.abs().max(l1.y.abs()).max(l2.x.abs()).max(l2.y.abs());

    let sqrt2 = (2.0 as Coord).sqrt();
    if l0 * 0.75 * sqrt2 + 1.0 != 1.0 {
        log4(sqrt2 * 6.0 / 8.0 * INV_EPS * l0).ceil().max(0.0) as i32
    } else {
        0
    }
}

fn recursively_intersect(
    a: &CubicBezier, t0: Coord, t1: Coord, deptha: i32,
    b: &CubicBezier, u0: Coord, u1: Coord, depthb: i32,
    out: &mut IntersectionPairs) {

    if out.is_full() { return; }

    if deptha > 0 {
        let (a0, a1) = a.split(0.5);
        let tmid = (t0 + t1) * 0.5;
        let deptha = deptha - 1;

        if depthb > 0 {
            let (b0, b1) = b.split(0.5);
            let umid = (u0 + u1) * 0.5;
            let depthb = depthb - 1;

            if bbox_overlap(&a0, &b0) {
                recursively_intersect(&a0, t0, tmid, deptha, &b0, u0, umid, depthb, out);
            }
            if bbox_overlap(&a0, &b1) {
                recursively_intersect(&a0, t0, tmid, deptha, &b1, umid, u1, depthb, out);
            }
            if bbox_overlap(&a1, &b0) {
                recursively_intersect(&a1, tmid, t1, deptha, &b0, u0, umid, depthb, out);
            }
            if bbox_overlap(&a1, &b1) {
                recursively_intersect(&a1, tmid, t1, deptha, &b1, umid, u1, depthb, out);
            }
        } else {
            if bbox_overlap(&a0, b) {
                recursively_intersect(&a0, t0, tmid, deptha, b, u0, u1, depthb, out);
            }
            if bbox_overlap(&a1, b) {
                recursively_intersect(&a1, tmid, t1, deptha, b, u0, u1, depthb, out);
            }
        }
    } else if depthb > 0 {
        let (b0, b1) = b.split(0.5);
        let umid = (u0 + u1) * 0.5;
        let depthb = depthb - 1;

        if bbox_overlap(a, &b0) {
            recursively_intersect(a, t0, t1, deptha, &b0, u0, umid, depthb, out);
        }
        if bbox_overlap(a, &b1) {
            recursively_intersect(a, t0, t1, deptha, &b1, umid, u1, depthb, out);
        }
    } else {
        // Both segments are fully subdivided, do line segments
        let lk = a.d - a.a;
        let nm = b.d - b.a;
        let mk = b.a - a.a;

        let det = nm.x * lk.y - nm.y * lk.x;
        if 1.0 + det == 1.0 { return; }

        let detinv = 1.0 / det;
        let s = (nm.x * mk.y - nm.y * mk.x) * detinv;
        let t = (lk.x * mk.y - lk.y * mk.x) * detinv;
        if s < 0.0 || s > 1.0 || t < 0.0 || t > 1.0 { return; }

        out.push((t0 + (t1 - t0) * s, u0 + (u1 - u0) * t));
    }
}

pub fn solve_intersection(a: &CubicBezier, b: &CubicBezier) -> IntersectionPairs {
    let mut out = IntersectionPairs::new();
    if bbox_overlap(a, b) {
        let ra = subdivision_depth(a);
        let rb = subdivision_depth(b);
        recursively_intersect(a, 0.0, 1.0, ra, b, 0.0, 1.0, rb, &mut out);
    }
    out
}

//--------------------------------------------------------------------
// cubic_bezier.rs
//--------------------------------------------------------------------
// Represents a cubic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::roots;
use crate::geometry::*;
use super::quadratic_bezier::QuadraticBezier;
use super::line::Line;
use super::*;

// The cubic bezier structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "CubicBezier({},{},{},{})", a, b, c, d)]
pub struct CubicBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2, pub d: Vec2 }

// The myriad of different functions present here
impl CubicBezier {
    pub fn from_line(l: &Line) -> CubicBezier {
        CubicBezier {
            a: l.a,
            b: (2.0 * l.a + l.b) / 3.0,
            c: (l.a + 2.0 * l.b) / 3.0,
            d: l.b
        }
    }

    pub fn from_quadratic(q: &QuadraticBezier) -> CubicBezier {
        CubicBezier {
            a: q.a,
            b: q.a + (2.0 / 3.0) * (q.b - q.a),
            c: q.c + (2.0 / 3.0) * (q.b - q.c),
            d: q.c
        }
    }

    pub fn at(&self, t: Coord) -> Vec2 {
        let q01 = (1.0-t) * self.a + t * self.b;
        let q12 = (1.0-t) * self.b + t * self.c;
        let q23 = (1.0-t) * self.c + t * self.d;
        let q012 = (1.0-t) * q01 + t * q12;
        let q123 = (1.0-t) * q12 + t * q23;
        (1.0-t) * q012 + t * q123
    }

    pub fn split(&self, t: Coord) -> (CubicBezier, CubicBezier) {
        let q01 = (1.0-t) * self.a + t * self.b;
        let q12 = (1.0-t) * self.b + t * self.c;
        let q23 = (1.0-t) * self.c + t * self.d;
        let q012 = (1.0-t) * q01 + t * q12;
        let q123 = (1.0-t) * q12 + t * q23;
        let q = (1.0-t) * q012 + t * q123;
        (CubicBezier { a: self.a, b: q01, c: q012, d: q },
            CubicBezier { a: q, b: q123, c: q23, d: self.d })
    }

    pub fn derivative(&self) -> QuadraticBezier {
        let a = 3.0 * (self.b - self.a);
        let b = 3.0 * (self.c - self.b);
        let c = 3.0 * (self.d - self.c);
        QuadraticBezier { a, b, c }
    }

    pub fn winding(&self) -> Coord {
        (6.0 * self.a.cross(self.b) + 3.0 * self.a.cross(self.c) + self.a.cross(self.d) +
            3.0 * self.b.cross(self.c) + 3.0 * self.b.cross(self.d) + 6.0 * self.c.cross(self.d)) / 10.0
    }

    pub fn solve_x(&self, x: Coord) -> SolveRoots {
        let span = self.d.x - self.a.x;
        if span.roughly_zero() {
            return roots_inside01(roots::find_roots_cubic(
                -self.a.x + 3.0 * self.b.x - 3.0 * self.c.x + self.d.x,
                3.0 * (self.a.x - 2.0 * self.b.x + self.c.x),
                3.0 * (self.b.x - self.a.x), self.a.x - x));
        }
        let f = (self.b.x - self.a.x) / span;
        let g = (self.d.x - self.c.x) / span;
        solve_normalized(f, g, (x - self.a.x) / span)
    }

    pub fn solve_y(&self, y: Coord) -> SolveRoots {
        let span = self.d.y - self.a.y;
        if span.roughly_zero() {
            return roots_inside01(roots::find_roots_cubic(
                -self.a.y + 3.0 * self.b.y - 3.0 * self.c.y + self.d.y,
                3.0 * (self.a.y - 2.0 * self.b.y + self.c.y),
                3.0 * (self.b.y - self.a.y), self.a.y - y));
        }
        let f = (self.b.y - self.a.y) / span;
        let g = (self.d.y - self.c.y) / span;
        solve_normalized(f, g, (y - self.a.y) / span)
    }

    pub fn is_monotonic_x(&self) -> bool {
        let span = self.d.x - self.a.x;
        if span.roughly_zero() { return false; }
        monotonic_region((self.b.x - self.a.x) / span, (self.d.x - self.c.x) / span)
    }

    pub fn is_monotonic_y(&self) -> bool {
        let span = self.d.y - self.a.y;
        if span.roughly_zero() { return false; }
        monotonic_region((self.b.y - self.a.y) / span, (self.d.y - self.c.y) / span)
    }

    // The parameter pair where the extended curve crosses itself, when it
    // does; the pair may land outside [0,1]. Curves quadratic in either
    // coordinate are reported as loop-free.
    pub fn self_intersection(&self) -> Option<(Coord, Coord)> {
        let h = self.derivative();

        let g0 = h.a.x;
        let gl = h.b.x - h.a.x;
        let gm = h.c.x - 2.0 * h.b.x + h.a.x;

        let h0 = h.a.y;
        let hl = h.b.y - h.a.y;
        let hm = h.c.y - 2.0 * h.b.y + h.a.y;

        if gm.roughly_zero() || hm.roughly_zero() { return None; }

        let denom = 2.0 * (gl / gm - hl / hm);
        if denom.roughly_zero() { return None; }

        let u = (h0 / hm - g0 / gm) / denom;
        let vsq = -3.0 * u * u - 6.0 * (hl / hm) * u - 3.0 * h0 / hm;
        if vsq < 0.0 { return None; }

        let v = vsq.sqrt();
        Some((u - v, u + v))
    }

    pub fn entry_tangent(&self) -> Vec2 {
        if self.b.roughly_equals(self.a) { self.derivative().entry_tangent() }
        else { (self.b-self.a).normalized() }
    }

    pub fn exit_tangent(&self) -> Vec2 {
        if self.d.roughly_equals(self.c) { self.derivative().exit_tangent() }
        else { (self.d-self.c).normalized() }
    }
}

impl std::fmt::Debug for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

// The cubic in normalized ordinates (0, f, 1-g, 1) collapses to lower
// degrees when the leading coefficients vanish
fn solve_normalized(f: Coord, g: Coord, v: Coord) -> SolveRoots {
    let d = 3.0 * f + 3.0 * g - 2.0;
    let n = 2.0 * f + g - 1.0;

    if d.abs() < SOLVE_EPSILON {
        if n.abs() < SOLVE_EPSILON {
            // 3ft - v = 0
            roots_inside01(roots::find_roots_linear(3.0 * f, -v))
        } else {
            // -3nt^2 + 3ft - v = 0
            roots_inside01(roots::find_roots_quadratic(-3.0 * n, 3.0 * f, -v))
        }
    } else {
        // dt^3 - 3nt^2 + 3ft - v = 0
        roots_inside01(roots::find_roots_cubic(d, -3.0 * n, 3.0 * f, -v))
    }
}

// The monotonicity region in the (f,g) plane: the triangle against the
// axes, two half-plane lobes and the ellipse that bridges them
fn monotonic_region(f: Coord, g: Coord) -> bool {
    if f < 0.0 || g < 0.0 { return false; }
    if g <= 2.0 / 3.0 - f { return true; }
    if g <= 1.0 - 2.0 * f { return true; }
    if g <= 0.5 - 0.5 * f { return true; }

    // (2g + f - 2)^2 <= -3f^2 + 4f
    let lhs = 2.0 * g + f - 2.0;
    lhs * lhs <= -3.0 * f * f + 4.0 * f
}

//--------------------------------------------------------------------
// quadratic_bezier.rs
//--------------------------------------------------------------------
// Represents a quadratic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;
use super::line::Line;
use super::*;

// The quadratic bezier structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "QuadraticBezier({},{},{})", a, b, c)]
pub struct QuadraticBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2 }

// The myriad of different functions present here
impl QuadraticBezier {
    pub fn at(&self, t: Coord) -> Vec2 {
        let q01 = (1.0-t) * self.a + t * self.b;
        let q12 = (1.0-t) * self.b + t * self.c;
        (1.0-t) * q01 + t * q12
    }

    pub fn split(&self, t: Coord) -> (QuadraticBezier, QuadraticBezier) {
        let q01 = (1.0-t) * self.a + t * self.b;
        let q12 = (1.0-t) * self.b + t * self.c;
        let q = (1.0-t) * q01 + t * q12;
        (QuadraticBezier { a: self.a, b: q01, c: q },
            QuadraticBezier { a: q, b: q12, c: self.c })
    }

    pub fn derivative(&self) -> Line { Line { a: 2.0 * (self.b - self.a), b: 2.0 * (self.c - self.b) } }

    pub fn winding(&self) -> Coord {
        (2.0 * self.a.cross(self.b) + 2.0 * self.b.cross(self.c) + self.a.cross(self.c)) / 3.0
    }

    pub fn solve_x(&self, x: Coord) -> SolveRoots {
        let a = self.a.x - 2.0*self.b.x + self.c.x;
        let b = 2.0 * (self.b.x - self.a.x);
        let c = self.a.x - x;
        if a.abs() < SOLVE_EPSILON {
            // One root, from the collapsed linear form
            roots_inside01(roots::find_roots_linear(b, c))
        } else {
            roots_inside01(roots::find_roots_quadratic(a, b, c))
        }
    }

    pub fn solve_y(&self, y: Coord) -> SolveRoots {
        let a = self.a.y - 2.0*self.b.y + self.c.y;
        let b = 2.0 * (self.b.y - self.a.y);
        let c = self.a.y - y;
        if a.abs() < SOLVE_EPSILON {
            roots_inside01(roots::find_roots_linear(b, c))
        } else {
            roots_inside01(roots::find_roots_quadratic(a, b, c))
        }
    }

    pub fn is_monotonic_x(&self) -> bool {
        let d = self.derivative();
        if (d.a.x - d.b.x).roughly_zero() { return true; }
        let t = d.a.x / (d.a.x - d.b.x);
        t <= 0.0 || t >= 1.0
    }

    pub fn is_monotonic_y(&self) -> bool {
        let d = self.derivative();
        if (d.a.y - d.b.y).roughly_zero() { return true; }
        let t = d.a.y / (d.a.y - d.b.y);
        t <= 0.0 || t >= 1.0
    }

    pub fn entry_tangent(&self) -> Vec2 { (self.b-self.a).normalized() }

    pub fn exit_tangent(&self) -> Vec2 { (self.c-self.b).normalized() }
}

impl std::fmt::Debug for QuadraticBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

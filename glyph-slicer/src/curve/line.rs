//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// Represents a line segment
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::geometry::*;
use super::*;

// The line structure
#[derive(Copy, Clone, Display)]
#[display(fmt = "Line({},{})", a, b)]
pub struct Line { pub a: Vec2, pub b: Vec2 }

// The myriad of different functions present here
impl Line {
    pub fn at(&self, t: Coord) -> Vec2 { (1.0-t) * self.a + t * self.b }

    pub fn split(&self, t: Coord) -> (Line, Line) {
        let q = self.at(t);
        (Line { a: self.a, b: q }, Line { a: q, b: self.b })
    }

    pub fn derivative(&self) -> Vec2 { self.b - self.a }

    pub fn winding(&self) -> Coord { self.a.cross(self.b) }

    pub fn solve_x(&self, x: Coord) -> SolveRoots {
        let q = self.b.x - self.a.x;
        if q == 0.0 { return SolveRoots::new(); }
        roots_inside01(roots::find_roots_linear(q, self.a.x - x))
    }

    pub fn solve_y(&self, y: Coord) -> SolveRoots {
        let q = self.b.y - self.a.y;
        if q == 0.0 { return SolveRoots::new(); }
        roots_inside01(roots::find_roots_linear(q, self.a.y - y))
    }

    pub fn is_monotonic_x(&self) -> bool { true }

    pub fn is_monotonic_y(&self) -> bool { true }

    pub fn entry_tangent(&self) -> Vec2 { (self.b-self.a).normalized() }

    pub fn exit_tangent(&self) -> Vec2 { (self.b-self.a).normalized() }
}

impl std::fmt::Debug for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

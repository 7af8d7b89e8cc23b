//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Provides the proxy enumeration Curve, which acts as a dispatcher
// between the known types of curves
//--------------------------------------------------------------------

use crate::derive_more::*;

mod line;
mod quadratic_bezier;
mod cubic_bezier;
mod intersection;

pub use line::Line;
pub use quadratic_bezier::QuadraticBezier;
pub use cubic_bezier::CubicBezier;
pub use intersection::*;

use crate::geometry::*;
use crate::arrayvec::ArrayVec;
use crate::vec_utils::arrayvec_dedup;

// Solvers hand back at most degree-many parameters, all inside [0,1]
pub const MAX_SOLVE_ROOTS: usize = 3;
pub type SolveRoots = ArrayVec<[Coord; MAX_SOLVE_ROOTS]>;

// Degenerate leading coefficients below this fall through to the
// next-lower-degree solver
pub const SOLVE_EPSILON: Coord = 1.0e-4;

#[derive(Clone, Display)]
pub enum Curve {
    Line(Line),
    QuadraticBezier(QuadraticBezier),
    CubicBezier(CubicBezier)
}

// Use a simplifier macro to implement the "normal" functions
macro_rules! forward_to_curves {
    ($($i:ident ( $($arg:ident : $arg_ty:ty),* ) -> $result:ty );*) => {
        $(
            pub fn $i(&self, $($arg : $arg_ty,)*) -> $result {
                match self {
                    Curve::Line(l) => l.$i($($arg,)*),
                    Curve::QuadraticBezier(q) => q.$i($($arg,)*),
                    Curve::CubicBezier(c) => c.$i($($arg,)*)
                }
            }
        )*
    }
}

impl Curve {
    // Forward the implementations that have similar signatures
    forward_to_curves! {
        at(t: Coord) -> Vec2;
        winding() -> Coord;

        solve_x(x: Coord) -> SolveRoots;
        solve_y(y: Coord) -> SolveRoots;

        is_monotonic_x() -> bool;
        is_monotonic_y() -> bool;

        entry_tangent() -> Vec2;
        exit_tangent() -> Vec2
    }

    // Create curves of specific types
    pub fn line(a: Vec2, b: Vec2) -> Curve { Curve::Line(Line { a, b }) }
    pub fn quadratic_bezier(a: Vec2, b: Vec2, c: Vec2) -> Curve {
        Curve::QuadraticBezier(QuadraticBezier { a, b, c })
    }
    pub fn cubic_bezier(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Curve {
        Curve::CubicBezier(CubicBezier { a, b, c, d })
    }

    // Degree elevation to a cubic, used by the intersection machinery
    pub fn to_cubic(&self) -> CubicBezier {
        match self {
            Curve::Line(l) => CubicBezier::from_line(l),
            Curve::QuadraticBezier(q) => CubicBezier::from_quadratic(q),
            Curve::CubicBezier(c) => c.clone()
        }
    }
}

pub fn is_curve_degenerate(curve: &Curve) -> bool {
    match curve {
        Curve::Line(l) => l.a.roughly_equals(l.b),
        Curve::QuadraticBezier(q) => q.a.roughly_equals(q.b)
            && q.b.roughly_equals(q.c),
        Curve::CubicBezier(c) => c.a.roughly_equals(c.b)
            && c.b.roughly_equals(c.c)
            && c.c.roughly_equals(c.d)
    }
}

// Keep the in-range roots, in ascending parameter order
pub(crate) fn roots_inside01(roots: roots::Roots<Coord>) -> SolveRoots {
    let mut v: SolveRoots = roots.as_ref().iter().copied().filter(|&t| inside01(t)).collect();
    v.sort_unstable_by(|a: &Coord, b: &Coord| a.partial_cmp(b).unwrap());
    arrayvec_dedup(&mut v);
    v
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate arrayvec;
extern crate derive_more;
#[macro_use]
extern crate log;
extern crate ordered_float;
extern crate roots;

mod geometry;
mod curve;
mod outline;
mod sweep;
mod glyph;
mod vec_utils;

pub use geometry::{Coord, Vec2, Rect};
pub use curve::*;
pub use outline::*;
pub use glyph::*;

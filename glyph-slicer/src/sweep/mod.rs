//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// Decomposes the corner-annotated outline into raw slices with a plane
// sweep over the corners in y order
//------------------------------------------------------------------------------

mod fit;

pub use fit::*;

use crate::ordered_float::OrderedFloat;

use crate::geometry::*;
use crate::outline::*;

// A raw slice: matching top and bottom vertex pairs on the graph, with the
// side traversal directions. The sides stay on the outline until the
// approximation pass replaces them
#[derive(Clone, Copy, Debug)]
pub struct RawSlice {
    pub tl: usize,
    pub tr: usize,
    pub bl: usize,
    pub br: usize,
    pub lreversed: bool,
    pub rreversed: bool
}

// One boundary crossing the sweep line
#[derive(Clone, Copy, Debug)]
struct SweepEdge {
    top: usize,      // previous corner
    edge: usize,     // current edge
    corner: usize,   // next corner downwards along the boundary
    reversed: bool,  // down is either from -> to, or reversed
    left: bool       // bounds a filled interval on its left, or on its right
}

/// Sweep the plane across every corner, maintaining the active boundary
/// list sorted by x, and emit a slice whenever an interval runs past a
/// corner. Topology anomalies cost slices, never the glyph.
pub fn sweep_plane(graph: &mut OutlineGraph) -> Vec<RawSlice> {
    let mut corners = Vec::new();
    for ri in 0..graph.roots.len() {
        let root = graph.roots[ri];
        corners.extend(graph.ring_vertices(root).filter(|&v| graph.vertices[v].is_corner));
    }
    corners.sort_by_key(|&v| {
        let p = graph.vertices[v].p;
        (OrderedFloat(p.y), OrderedFloat(p.x))
    });

    let mut active: Vec<SweepEdge> = Vec::new();
    let mut slices = Vec::new();

    for ci in 0..corners.len() {
        let corner = corners[ci];
        // The spurious-hole filter may have unflagged this vertex
        if !graph.vertices[corner].is_corner { continue; }

        debug!("corner {} at {:?}, {} active", corner, graph.vertices[corner].p, active.len());

        if let Some(i) = active.iter().position(|e| e.corner == corner) {
            if i + 1 < active.len() && active[i + 1].corner == corner {
                terminate_pair(graph, &mut active, &mut slices, i, corner);
            } else {
                terminate_single(graph, &mut active, &mut slices, i, corner);
            }
        } else {
            start_interval(graph, &mut active, &mut slices, corner);
        }
    }

    if !active.is_empty() {
        warn!("sweep finished with {} boundaries still active", active.len());
    }

    slices
}

// Both this boundary and the next one stop at the corner: either a filled
// interval closes, or a hole does
fn terminate_pair(graph: &mut OutlineGraph, active: &mut Vec<SweepEdge>,
    slices: &mut Vec<RawSlice>, i: usize, corner: usize) {

    if active[i].left {
        /*
            End of a filled interval:

                \###/
                 \#/
                  +
        */
        sweep_slice(graph, active, slices, i, i + 1, corner);
    } else {
        /*
            End of a hole:

              ##\   /##
              ###\ /###
              ####+####
        */
        if i == 0 || i + 2 >= active.len() {
            warn!("hole closes without enclosing boundaries, dropping slices");
        } else {
            sweep_slice(graph, active, slices, i - 1, i, corner);
            sweep_slice(graph, active, slices, i + 1, i + 2, corner);
        }
    }

    active.remove(i + 1);
    active.remove(i);
}

// The boundary continues straight through the corner on one side of a
// filled span; emit up to the corner and move on to the next corner
fn terminate_single(graph: &mut OutlineGraph, active: &mut Vec<SweepEdge>,
    slices: &mut Vec<RawSlice>, i: usize, corner: usize) {

    if active[i].left {
        /*
                |##
                +##
                |##
        */
        if i + 1 < active.len() {
            sweep_slice(graph, active, slices, i, i + 1, corner);
        } else {
            warn!("left boundary has no partner, skipping slice");
            active[i].top = corner;
        }
    } else {
        /*
              ##|
              ##+
              ##|
        */
        if i > 0 {
            sweep_slice(graph, active, slices, i - 1, i, corner);
        } else {
            warn!("right boundary has no partner, skipping slice");
            active[i].top = corner;
        }
    }

    // Move to the next corner along the boundary
    let e = &mut active[i];
    if e.reversed {
        e.edge = graph.vertices[corner].prev;
        e.corner = graph.edges[e.edge].from;
        while !graph.vertices[e.corner].is_corner {
            e.corner = graph.edges[graph.vertices[e.corner].prev].from;
        }
    } else {
        e.edge = graph.vertices[corner].next;
        e.corner = graph.edges[e.edge].to;
        while !graph.vertices[e.corner].is_corner {
            e.corner = graph.edges[graph.vertices[e.corner].next].to;
        }
    }
}

// A corner no boundary was heading for opens something new: a filled
// interval in the gaps, or a hole inside a filled interval
fn start_interval(graph: &mut OutlineGraph, active: &mut Vec<SweepEdge>,
    slices: &mut Vec<RawSlice>, corner: usize) {

    let p = graph.vertices[corner].p;

    // Find the interval containing the corner
    let mut after = 0;
    while after < active.len() {
        reproject(graph, &mut active[after], p.y);
        let x = graph.edge_x_at(active[after].edge, p.y);
        if p.x < x { break; }
        after += 1;
    }

    let is_hole = after < active.len() && !active[after].left;

    // Build both candidate boundaries, walked to their next corners
    let mut left = SweepEdge {
        top: corner,
        edge: graph.vertices[corner].prev,
        corner: graph.edges[graph.vertices[corner].prev].from,
        reversed: true,
        left: false
    };
    while !graph.vertices[left.corner].is_corner {
        left.corner = graph.edges[graph.vertices[left.corner].prev].from;
    }

    let mut right = SweepEdge {
        top: corner,
        edge: graph.vertices[corner].next,
        corner: graph.edges[graph.vertices[corner].next].to,
        reversed: false,
        left: false
    };
    while !graph.vertices[right.corner].is_corner {
        right.corner = graph.edges[graph.vertices[right.corner].next].to;
    }

    // Work out which boundary is to the left
    let e0 = graph.tangent_away(corner, true);
    let e1 = graph.tangent_away(corner, false);
    if e0.x > e1.x {
        std::mem::swap(&mut left, &mut right);
    }

    if is_hole {
        /*
            Start of a hole:

              ####+####
              ###/ \###
              ##/   \##
        */
        if after == 0 {
            warn!("hole opens left of every boundary, treating as a fill");
        } else {
            // A hole wound like its surrounding fill is an artifact of
            // self-intersection; silence its whole loop and move on
            if left.reversed == active[after - 1].reversed {
                debug!("spurious hole at {:?}, unflagging its loop", p);
                let loop_vertices: Vec<usize> = graph.ring_vertices(corner).collect();
                for v in loop_vertices {
                    graph.vertices[v].is_corner = false;
                }
                return;
            }

            // Cap the fill above the hole
            sweep_slice(graph, active, slices, after - 1, after, corner);
            right.left = true;
            active.insert(after, left);
            active.insert(after + 1, right);
            return;
        }
    }

    /*
        Start of a new filled interval:

              +
             /#\
            /###\
    */
    left.left = true;
    active.insert(after, left);
    active.insert(after + 1, right);
}

// Split both boundaries at the corner height and record the slab between
// them, then continue the boundaries from the new bottom vertices
fn sweep_slice(graph: &mut OutlineGraph, active: &mut Vec<SweepEdge>,
    slices: &mut Vec<RawSlice>, li: usize, ri: usize, corner: usize) {

    let slice = RawSlice {
        tl: active[li].top,
        tr: active[ri].top,
        bl: sweep_split(graph, &active[li], corner),
        br: sweep_split(graph, &active[ri], corner),
        lreversed: active[li].reversed,
        rreversed: active[ri].reversed
    };

    active[li].top = slice.bl;
    active[ri].top = slice.br;

    // Degenerate slabs are not worth keeping
    if graph.vertices[slice.tl].p.y >= graph.vertices[slice.bl].p.y {
        return;
    }

    slices.push(slice);
}

fn sweep_split(graph: &mut OutlineGraph, e: &SweepEdge, corner: usize) -> usize {
    if e.corner == corner {
        return corner;
    }
    let y = graph.vertices[corner].p.y;
    graph.split_at_y(e.top, e.corner, e.reversed, y)
}

// Walk the boundary's edge pointer down past vertices the sweep line has
// already crossed; they were not corners, so nothing is emitted
fn reproject(graph: &OutlineGraph, e: &mut SweepEdge, y: Coord) {
    let mut guard = graph.edges.len();
    if e.reversed {
        while graph.vertices[graph.edges[e.edge].from].p.y < y && guard > 0 {
            e.edge = graph.vertices[graph.edges[e.edge].from].prev;
            guard -= 1;
        }
    } else {
        while graph.vertices[graph.edges[e.edge].to].p.y < y && guard > 0 {
            e.edge = graph.vertices[graph.edges[e.edge].to].next;
            guard -= 1;
        }
    }
    if guard == 0 {
        warn!("boundary loop while reprojecting, keeping last edge");
    }
}

//------------------------------------------------------------------------------
// self_intersection.rs
//------------------------------------------------------------------------------
// Finds where a ring crosses itself, splits the offending edges and
// rewires the crossing into two disjoint rings
//------------------------------------------------------------------------------

use crate::geometry::*;
use crate::curve::*;
use super::graph::*;

// Restart guard against degenerate inputs that keep producing splits
const MAX_RESTARTS: usize = 64;

/// Resolve every crossing inside each ring. Every resolved crossing adds
/// one ring; afterwards no two non-adjacent edges of a ring cross anywhere
/// but at shared endpoints, and zero-area rings are gone.
pub fn resolve_self_intersections(graph: &mut OutlineGraph) {
    let mut ri = 0;
    while ri < graph.roots.len() {
        let mut restarts = 0;
        // Splitting invalidates the collected ring, so restart the scan
        // after every rewiring
        while scan_ring(graph, ri) {
            restarts += 1;
            if restarts >= MAX_RESTARTS {
                warn!("self-intersection scan did not settle, keeping ring as-is");
                break;
            }
        }
        ri += 1;
    }

    // Once the rings are simple, winding measures enclosed area; doubled-back
    // slivers enclose nothing and would only feed the sweep empty intervals
    let mut kept = Vec::new();
    for ri in 0..graph.roots.len() {
        let winding: Coord = graph.ring_edges(graph.roots[ri])
            .map(|e| graph.curve(e).winding())
            .sum();
        if !winding.roughly_zero() {
            kept.push(graph.roots[ri]);
        } else {
            debug!("dropping zero-area ring at {:?}", graph.vertices[graph.roots[ri]].p);
        }
    }
    graph.roots = kept;
}

// One scan over the ring; true when a split happened and the scan must rerun
fn scan_ring(graph: &mut OutlineGraph, ri: usize) -> bool {
    let edges: Vec<usize> = graph.ring_edges(graph.roots[ri]).collect();
    let len = edges.len();

    // An edge may cross itself without a partner
    for &e in &edges {
        if let Curve::CubicBezier(c) = graph.curve(e) {
            if let Some((t0, t1)) = c.self_intersection() {
                if inside01(t0) && inside01(t1) && split_loop_edge(graph, ri, e, t0, t1) {
                    return true;
                }
            }
        }
    }

    for i in 0..len {
        for j in i+1..len {
            // Immediate neighbours meet at their shared vertex by design
            if j == i + 1 || (i == 0 && j == len - 1) { continue; }

            let ca = graph.curve(edges[i]).to_cubic();
            let cb = graph.curve(edges[j]).to_cubic();

            for &(ta, tb) in solve_intersection(&ca, &cb).iter() {
                // Endpoint contacts are rejected by the split threshold
                let va = graph.split_edge(edges[i], ta);
                let vb = match va {
                    Some(_) => graph.split_edge(edges[j], tb),
                    None => None
                };

                match (va, vb) {
                    (Some(va), Some(vb)) => {
                        rewire_crossing(graph, ri, va, vb);
                        return true;
                    }
                    (Some(_), None) => {
                        // Half a split still moved the ring under us
                        return true;
                    }
                    _ => {}
                }
            }
        }
    }

    false
}

// A single cubic that loops: split at both loop parameters, then pinch
fn split_loop_edge(graph: &mut OutlineGraph, ri: usize, e: usize, t0: Coord, t1: Coord) -> bool {
    let va = match graph.split_edge(e, t0) {
        Some(v) => v,
        None => return false
    };
    // Carry the second parameter onto the right half
    let t1 = (t1 - t0) / (1.0 - t0);
    let right = graph.vertices[va].next;
    let vb = match graph.split_edge(right, t1) {
        Some(v) => v,
        None => return true
    };
    rewire_crossing(graph, ri, va, vb);
    true
}

// The two vertices sit on the same point; swapping their outgoing edges
// separates the ring into the outer loop (through va) and the inner loop
// (through vb)
fn rewire_crossing(graph: &mut OutlineGraph, ri: usize, va: usize, vb: usize) {
    let a_next = graph.vertices[va].next;
    let b_next = graph.vertices[vb].next;

    graph.vertices[va].next = b_next;
    graph.vertices[vb].next = a_next;
    graph.edges[b_next].from = va;
    graph.edges[a_next].from = vb;

    // The old root may sit on either loop; re-anchor both explicitly
    graph.roots[ri] = va;
    graph.roots.push(vb);

    debug!("ring {} split at {:?}, now {} rings", ri, graph.vertices[va].p, graph.roots.len());
}

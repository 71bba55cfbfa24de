//! Cycle detection.
//!
//! Directed graphs look for a back edge (an edge into a vertex still on the DFS branch).
//! Undirected graphs use the same walk but ignore the edge leading back to the parent,
//! or deduplicate edges and check them against a disjoint set.

pub mod directed;
pub mod undirected;

use crate::graphlib::{Direction, Graph, Vertex, Weight};

/// Rebuilds `w -> ... -> v -> w` from a back edge `v -> w` and the DFS parent links.
fn close_cycle(v: usize, w: usize, parent: &[Option<usize>]) -> Vec<usize> {
    let mut cycle: Vec<usize> = vec![w];
    let mut x = v;
    while x != w {
        cycle.push(x);
        let Some(p) = parent[x] else {
            debug_assert!(false, "back edge target is not an ancestor");
            break;
        };
        x = p;
    }
    cycle.push(w);
    cycle.reverse();
    cycle
}

/// DFS from every unvisited vertex, stopping at the first back edge.
///
/// With `skip_parent`, edges pointing at the vertex's own tree parent are ignored; that
/// is how an undirected edge, stored in both directions, avoids looking like a 2-cycle.
fn find_back_edge<V, W, D>(
    g: &Graph<V, W, D>,
    skip_parent: bool,
) -> Option<Vec<usize>>
where
    V: Vertex,
    W: Weight,
    D: Direction,
{
    let n = g.vertex_count();
    let mut visited = vec![false; n];
    let mut on_branch = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_branch[root] = true;
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (v, pos) = *frame;
            let edges = g.out_edges_ix(v);
            if pos >= edges.len() {
                on_branch[v] = false;
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let w = edges[pos].target_ix();
            if skip_parent && parent[v] == Some(w) {
                continue;
            }
            if !visited[w] {
                visited[w] = true;
                on_branch[w] = true;
                parent[w] = Some(v);
                stack.push((w, 0));
            } else if on_branch[w] {
                return Some(close_cycle(v, w, &parent));
            }
            // Cross and forward edges reach finished vertices and say nothing about cycles.
        }
    }
    None
}

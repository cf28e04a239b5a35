/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::graphs::{AdjGraph, GraphError};
use crate::list::CursorList;
use dsi_progress_logger::ProgressLog;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm, building the transpose internally.
///
/// See [`kosaraju`] for the order of the components and of their members.
///
/// # Arguments
///
/// * `graph`: the graph; its traversal state is overwritten by the first
///   search.
///
/// * `pl`: a progress logger.
pub fn compute(graph: &mut AdjGraph, pl: &mut impl ProgressLog) -> Result<Sccs, GraphError> {
    let mut transpose = graph.transpose();
    kosaraju(graph, &mut transpose, pl)
}

/// Computes the strongly connected components of a graph using Kosaraju's algorithm.
///
/// A first depth-first search on `graph`, trying roots in increasing order,
/// leaves a stack of vertices by decreasing finish time; a second search on
/// `transpose` tries roots in the order of the stack. Then the stack, which
/// now contains vertices by decreasing finish time of the second search, is
/// scanned from back to front: each vertex is prepended to a buffer, and a
/// vertex without parent in the second search, that is, the root of a tree,
/// closes the component formed by the buffer.
///
/// Components are thus listed in the order in which the second search found
/// them, which is a topological order of the condensation of `graph` (sources
/// first), and the members of each component start with its root.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `transpose`: the transpose of `graph`.
///
/// * `pl`: a progress logger.
pub fn kosaraju(
    graph: &mut AdjGraph,
    transpose: &mut AdjGraph,
    pl: &mut impl ProgressLog,
) -> Result<Sccs, GraphError> {
    let order = graph.order();
    if transpose.order() != order {
        return Err(GraphError::OrderMismatch {
            graph: order,
            transpose: transpose.order(),
        });
    }

    let mut stack = CursorList::from_iter(1..=order);
    graph.dfs_with_logger(&mut stack, pl)?;
    transpose.dfs_with_logger(&mut stack, pl)?;

    let mut components = Vec::new();
    let mut buffer = CursorList::new();
    for &vertex in stack.iter().rev() {
        buffer.prepend(vertex);
        if transpose.parent(vertex)?.is_none() {
            components.push(buffer.iter().copied().collect());
            buffer.clear();
        }
    }

    log::debug!(
        "Found {} strongly connected components in a graph with {} vertices",
        components.len(),
        order
    );

    Ok(Sccs::new(order, components))
}

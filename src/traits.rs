/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Traits for graphs that can be visited.

/// A directed graph providing random access to the successors of its nodes.
///
/// Nodes are numbered from 1 to [`num_nodes`](RandomAccessGraph::num_nodes)
/// (both included); calling methods with other nodes is a logic error and
/// may panic.
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node.
    type Successors<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs, that is, the sum of the outdegrees.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of `node` in the order in which a visit
    /// should enumerate them.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).count()
    }

    /// Returns whether there is an arc from `src` to `dst`.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.successors(src).any(|succ| succ == dst)
    }
}

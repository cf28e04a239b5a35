/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components by Kosaraju's algorithm.
//!
//! [`compute`] runs a depth-first search on a graph, and then a second one
//! on its transpose, trying roots by decreasing finish time of the first
//! search. Each tree of the second search is a strongly connected component;
//! [`kosaraju`] does the same work on a transpose provided by the caller.
//!
//! # Examples
//! ```
//! use digraph_sccs::prelude::*;
//! use digraph_sccs::sccs;
//! use dsi_progress_logger::no_logging;
//!
//! let mut graph = AdjGraph::from_arcs(4, [(1, 2), (2, 3), (3, 1), (2, 4)])?;
//!
//! let mut scc = sccs::compute(&mut graph, no_logging![])?;
//! assert_eq!(scc.num_components(), 2);
//! assert_eq!(scc.component(0), &[1, 3, 2]);
//! assert_eq!(scc.component(1), &[4]);
//!
//! // Let's sort the components by size
//! let sizes = scc.sort_by_size();
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(scc.component_of(4), Some(1));
//! # Ok::<(), GraphError>(())
//! ```

mod kosaraju;
pub use kosaraju::*;

/// Strongly connected components.
///
/// An instance of this structure stores the members of each component, in
/// the order in which the components were found, and the [index of the
/// component](Sccs::component_of) of each vertex. Components are numbered
/// from 0 to [`num_components`](Sccs::num_components).
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    components: Vec<Box<[usize]>>,
    /// For each vertex (shifted by one), the index of its component.
    component_of: Box<[usize]>,
}

impl Sccs {
    /// Creates a new structure from the members of each component of a
    /// graph with vertices from 1 to `order`.
    ///
    /// # Panics
    ///
    /// If some member is not in the range from 1 to `order`.
    pub fn new(order: usize, components: Vec<Box<[usize]>>) -> Self {
        let mut component_of = vec![usize::MAX; order].into_boxed_slice();
        for (index, members) in components.iter().enumerate() {
            for &vertex in members.iter() {
                component_of[vertex - 1] = index;
            }
        }
        Sccs {
            components,
            component_of,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Returns the members of all components.
    pub fn components(&self) -> &[Box<[usize]>] {
        &self.components
    }

    /// Returns the members of the component of given index.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than the number of components.
    pub fn component(&self, index: usize) -> &[usize] {
        &self.components[index]
    }

    /// Returns the index of the component of `vertex`, or `None` if
    /// `vertex` is not a vertex of the graph.
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        vertex
            .checked_sub(1)
            .and_then(|i| self.component_of.get(i))
            .copied()
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        self.components
            .iter()
            .map(|members| members.len())
            .collect()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be nonincreasing in the component index; components of the same
    /// size keep their relative order. The method returns the sizes of the
    /// components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        self.components.sort_by(|x, y| y.len().cmp(&x.len()));
        for (index, members) in self.components.iter().enumerate() {
            for &vertex in members.iter() {
                self.component_of[vertex - 1] = index;
            }
        }
        self.compute_sizes()
    }
}

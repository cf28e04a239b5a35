/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::list::{CursorList, Iter, ListError};
use crate::traits::RandomAccessGraph;
use crate::visits::depth_first::{Color, EventPred, SeqPred};
use crate::visits::Sequential;
use dsi_progress_logger::{no_logging, ProgressLog};
use no_break::NoBreak;
use std::fmt;
use std::iter::Copied;
use std::ops::ControlFlow::Continue;
use thiserror::Error;

/// Errors returned by [`AdjGraph`] operations whose preconditions are not met.
///
/// Failing operations never modify the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex is not in the range from 1 to the order of the graph.
    #[error("Calling {op}() with invalid vertex {vertex} (the graph has order {order})")]
    InvalidVertex {
        op: &'static str,
        vertex: usize,
        order: usize,
    },
    /// The starting sequence of a depth-first search does not contain
    /// exactly one item for each vertex.
    #[error("Calling dfs() with a stack of length {len} on a graph of order {order}")]
    InvalidStack { len: usize, order: usize },
    /// The starting sequence of a depth-first search contains a vertex
    /// twice.
    #[error("Calling dfs() with a stack containing vertex {vertex} more than once")]
    DuplicateVertex { vertex: usize },
    /// A graph and its supposed transpose have different orders.
    #[error("Different orders: {graph} (graph) != {transpose} (transpose)")]
    OrderMismatch { graph: usize, transpose: usize },
    /// An adjacency list operation failed.
    #[error(transparent)]
    List(#[from] ListError),
}

/// A directed graph with sorted adjacency lists and depth-first-search
/// metadata.
///
/// Vertices are numbered from 1 to [`order`](AdjGraph::order). Each vertex
/// has a [`CursorList`] of successors, kept in ascending order by
/// [`add_arc`](AdjGraph::add_arc) and [`add_edge`](AdjGraph::add_edge), and
/// the color, parent, discovery time and finish time assigned by the last
/// run of [`dfs`](AdjGraph::dfs). Before any search, parents and times are
/// `None`.
///
/// Cloning returns a graph with the same adjacency lists and fresh traversal
/// state (see [`copy_graph`](AdjGraph::copy_graph)).
///
/// # Examples
///
/// ```
/// use digraph_sccs::prelude::*;
///
/// let mut graph = AdjGraph::new(3);
/// graph.add_arc(1, 3)?;
/// graph.add_arc(1, 2)?;
/// graph.add_arc(3, 1)?;
/// assert_eq!(graph.adjacency(1)?.to_string(), "2 3");
///
/// let mut stack = CursorList::from_iter(1..=3);
/// graph.dfs(&mut stack)?;
/// assert_eq!(stack.to_string(), "1 3 2");
/// assert_eq!(graph.parent(3)?, Some(1));
/// assert_eq!(graph.discover(1)?, Some(1));
/// assert_eq!(graph.finish(1)?, Some(6));
/// # Ok::<(), GraphError>(())
/// ```
pub struct AdjGraph {
    /// The number of edge insertions performed.
    size: usize,
    /// For each vertex, its list of successors.
    succ: Vec<CursorList<usize>>,
    color: Vec<Color>,
    parent: Vec<Option<usize>>,
    discover: Vec<Option<usize>>,
    finish: Vec<Option<usize>>,
}

impl AdjGraph {
    /// Creates a new graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            size: 0,
            succ: (0..n).map(|_| CursorList::new()).collect(),
            color: vec![Color::White; n],
            parent: vec![None; n],
            discover: vec![None; n],
            finish: vec![None; n],
        }
    }

    /// Creates a new graph with `n` vertices from an [`IntoIterator`] of
    /// directed arcs.
    pub fn from_arcs(
        n: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n);
        for (u, v) in arcs {
            graph.add_arc(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.succ.len()
    }

    /// Returns the number of edges added so far: an undirected edge counts
    /// as one, even if it is stored in two adjacency lists.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the parent of `u` in the forest built by the last
    /// depth-first search, or `None` if `u` was a root or no search
    /// happened.
    pub fn parent(&self, u: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.parent[self.check("parent", u)?])
    }

    /// Returns the discovery time of `u` in the last depth-first search, or
    /// `None` if no search happened.
    pub fn discover(&self, u: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.discover[self.check("discover", u)?])
    }

    /// Returns the finish time of `u` in the last depth-first search, or
    /// `None` if no search happened.
    pub fn finish(&self, u: usize) -> Result<Option<usize>, GraphError> {
        Ok(self.finish[self.check("finish", u)?])
    }

    /// Returns the color assigned to `u` by the last depth-first search.
    pub fn color(&self, u: usize) -> Result<Color, GraphError> {
        Ok(self.color[self.check("color", u)?])
    }

    /// Returns the adjacency list of `u`.
    pub fn adjacency(&self, u: usize) -> Result<&CursorList<usize>, GraphError> {
        Ok(&self.succ[self.check("adjacency", u)?])
    }

    /// Adds an undirected edge between `u` and `v`, that is, the arcs `u → v`
    /// and `v → u`. The size of the graph grows by one.
    ///
    /// Parallel edges are not suppressed.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let (iu, iv) = (self.check("add_edge", u)?, self.check("add_edge", v)?);
        insert_sorted(&mut self.succ[iu], v)?;
        insert_sorted(&mut self.succ[iv], u)?;
        self.size += 1;
        Ok(())
    }

    /// Adds a directed arc from `u` to `v`, keeping the successors of `u`
    /// sorted.
    ///
    /// Parallel arcs are not suppressed.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let iu = self.check("add_arc", u)?;
        self.check("add_arc", v)?;
        insert_sorted(&mut self.succ[iu], v)?;
        self.size += 1;
        Ok(())
    }

    /// Runs a depth-first search, see
    /// [`dfs_with_logger`](AdjGraph::dfs_with_logger).
    pub fn dfs(&mut self, stack: &mut CursorList<usize>) -> Result<(), GraphError> {
        self.dfs_with_logger(stack, no_logging![])
    }

    /// Runs a depth-first search, trying roots in the order given by `stack`
    /// and replacing its content with the vertices by decreasing finish
    /// time.
    ///
    /// `stack` must contain each vertex exactly once, or an error is returned
    /// and neither the graph nor `stack` are modified. Colors and parents of
    /// all vertices are reset; then every white vertex of `stack`, in order,
    /// becomes the root of a new tree, and successors are enumerated in
    /// adjacency-list order. Discovery and finish times come from a single
    /// counter incremented before each stamp.
    ///
    /// # Arguments
    ///
    /// * `stack`: the starting order on input, the finish order on output.
    ///
    /// * `pl`: a progress logger.
    pub fn dfs_with_logger(
        &mut self,
        stack: &mut CursorList<usize>,
        pl: &mut impl ProgressLog,
    ) -> Result<(), GraphError> {
        let order = self.order();
        if stack.len() != order {
            return Err(GraphError::InvalidStack {
                len: stack.len(),
                order,
            });
        }
        // Every vertex must appear exactly once
        let mut color = vec![Color::White; order];
        for &u in stack.iter() {
            let i = self.check("dfs", u)?;
            if color[i] != Color::White {
                return Err(GraphError::DuplicateVertex { vertex: u });
            }
            color[i] = Color::Gray;
        }
        color.fill(Color::White);

        pl.item_name("node");
        pl.expected_updates(Some(order));
        pl.start("Visiting the graph depth-first...");

        let roots: Vec<usize> = stack.iter().copied().collect();
        stack.clear();

        let mut parent = vec![None; order];
        let mut discover = std::mem::take(&mut self.discover);
        let mut finish = std::mem::take(&mut self.finish);
        let mut time = 0;

        SeqPred::new(&*self)
            .visit(roots, |event| {
                match event {
                    EventPred::Previsit {
                        node,
                        parent: pred,
                        root,
                        ..
                    } => {
                        pl.light_update();
                        color[node - 1] = Color::Gray;
                        time += 1;
                        discover[node - 1] = Some(time);
                        parent[node - 1] = (node != root).then_some(pred);
                    }
                    EventPred::Postvisit { node, .. } => {
                        color[node - 1] = Color::Black;
                        time += 1;
                        finish[node - 1] = Some(time);
                        stack.prepend(node);
                    }
                    _ => (),
                }
                Continue(())
            })
            .continue_value_no_break();

        pl.done();
        log::debug!(
            "Depth-first search of a graph with {} vertices and {} edges completed at time {}",
            order,
            self.size,
            time
        );

        self.color = color;
        self.parent = parent;
        self.discover = discover;
        self.finish = finish;
        Ok(())
    }

    /// Returns the transpose of this graph.
    ///
    /// Sources are scanned in increasing order, and each source is appended
    /// to the lists of its successors; lists are not sorted again, so they
    /// are sorted only if the sources were scanned in sorted order, which is
    /// always the case. The size of the transpose is the number of arcs.
    pub fn transpose(&self) -> AdjGraph {
        let mut transpose = AdjGraph::new(self.order());
        for (i, succ) in self.succ.iter().enumerate() {
            for &v in succ {
                transpose.succ[v - 1].append(i + 1);
                transpose.size += 1;
            }
        }
        transpose
    }

    /// Returns an independent copy of this graph with the same adjacency
    /// lists and size, and fresh traversal state.
    pub fn copy_graph(&self) -> AdjGraph {
        AdjGraph {
            size: self.size,
            succ: self.succ.clone(),
            ..AdjGraph::new(self.order())
        }
    }

    /// Returns the index of `u` in the per-vertex arrays.
    fn check(&self, op: &'static str, u: usize) -> Result<usize, GraphError> {
        if u < 1 || u > self.order() {
            return Err(GraphError::InvalidVertex {
                op,
                vertex: u,
                order: self.order(),
            });
        }
        Ok(u - 1)
    }
}

/// Inserts `v` before the first element of `list` strictly greater than `v`,
/// or at the back if there is no such element.
fn insert_sorted(list: &mut CursorList<usize>, v: usize) -> Result<(), ListError> {
    list.move_front();
    while list.index().is_some() {
        if v < *list.get()? {
            return list.insert_before(v);
        }
        list.move_next();
    }
    list.append(v);
    Ok(())
}

impl Clone for AdjGraph {
    fn clone(&self) -> Self {
        self.copy_graph()
    }
}

impl fmt::Debug for AdjGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjGraph")
            .field("order", &self.order())
            .field("size", &self.size)
            .field("succ", &self.succ)
            .finish_non_exhaustive()
    }
}

/// Renders one line `u: v w ...` for each vertex.
impl fmt::Display for AdjGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, succ) in self.succ.iter().enumerate() {
            writeln!(f, "{}: {}", i + 1, succ)?;
        }
        Ok(())
    }
}

impl RandomAccessGraph for AdjGraph {
    type Successors<'a> = Copied<Iter<'a, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.order()
    }

    fn num_arcs(&self) -> usize {
        self.succ.iter().map(CursorList::len).sum()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node - 1].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node - 1].len()
    }
}

/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::{
    depth_first::{Color, EventPred, FilterArgsPred},
    Sequential,
};
use std::ops::ControlFlow::{self, Continue};

/// A sequential depth-first visit keeping track of parents and of the nodes
/// on the visit path.
///
/// The visit is iterative: the path is kept on a heap-allocated stack whose
/// entries pair the iterator on the successors of a node with the parent of
/// the node, so deep graphs do not exhaust the thread stack. Events are
/// nonetheless emitted in the same order as in a recursive visit.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use digraph_sccs::prelude::*;
/// use digraph_sccs::visits::{Sequential, StoppedWhenDone};
/// use digraph_sccs::visits::depth_first::*;
/// use std::ops::ControlFlow::*;
///
/// let graph = AdjGraph::from_arcs(4, [(1, 2), (2, 3), (3, 1), (2, 4)])?;
/// let mut visit = SeqPred::new(&graph);
///
/// assert!(visit
///     .visit(1..=graph.num_nodes(), |event| match event {
///         // A back arc closes a cycle
///         EventPred::Revisit { on_stack: true, .. } => Break(StoppedWhenDone),
///         _ => Continue(()),
///     })
///     .is_break());
/// # Ok::<(), GraphError>(())
/// ```
pub struct SeqPred<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// Successors still to enumerate and parent, for each node on the path.
    stack: Vec<(G::Successors<'a>, usize)>,
    /// Indexed by node; entry 0 is unused.
    colors: Vec<Color>,
}

impl<'a, G: RandomAccessGraph> SeqPred<'a, G> {
    /// Creates a new sequential visit of `graph`.
    pub fn new(graph: &'a G) -> SeqPred<'a, G> {
        Self {
            graph,
            stack: Vec::with_capacity(16),
            colors: vec![Color::White; graph.num_nodes() + 1],
        }
    }

    /// Returns the current color of `node`.
    #[inline(always)]
    pub fn color(&self, node: usize) -> Color {
        self.colors[node]
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for SeqPred<'_, G> {
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(EventPred) -> ControlFlow<E, ()>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        let colors = &mut self.colors;

        for root in roots {
            if colors[root] != Color::White
                || !filter(FilterArgsPred {
                    node: root,
                    pred: root,
                    root,
                    depth: 0,
                })
            {
                continue;
            }

            colors[root] = Color::Gray;
            callback(EventPred::Previsit {
                node: root,
                parent: root,
                root,
                depth: 0,
            })?;
            self.stack.push((self.graph.successors(root), root));

            // The node on top of the stack
            let mut curr = root;

            'recurse: loop {
                let depth = self.stack.len();
                let Some((iter, parent)) = self.stack.last_mut() else {
                    break;
                };

                for succ in iter {
                    if colors[succ] != Color::White {
                        callback(EventPred::Revisit {
                            node: succ,
                            pred: curr,
                            root,
                            depth,
                            on_stack: colors[succ] == Color::Gray,
                        })?;
                    } else if filter(FilterArgsPred {
                        node: succ,
                        pred: curr,
                        root,
                        depth,
                    }) {
                        colors[succ] = Color::Gray;
                        callback(EventPred::Previsit {
                            node: succ,
                            parent: curr,
                            root,
                            depth,
                        })?;
                        self.stack.push((self.graph.successors(succ), curr));
                        curr = succ;
                        continue 'recurse;
                    }
                }

                colors[curr] = Color::Black;
                callback(EventPred::Postvisit {
                    node: curr,
                    parent: *parent,
                    root,
                    depth: depth - 1,
                })?;

                curr = *parent;
                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.colors.fill(Color::White);
    }
}

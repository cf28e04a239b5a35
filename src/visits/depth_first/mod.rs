/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Events carry the node that led to the current one, so previsits and
//! postvisits of non-root nodes correspond to tree arcs, and revisits to
//! the remaining arcs.

mod seq;
pub use seq::*;

/// The state of a node during a depth-first visit.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// On the visit path.
    Gray,
    /// Completed.
    Black,
}

/// Events of a depth-first visit.
///
/// For a root, `parent` is the root itself and `depth` is zero.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// `node` has just been discovered through the tree arc from `parent`.
    Previsit {
        node: usize,
        parent: usize,
        root: usize,
        depth: usize,
    },
    /// The arc from `pred` leads to the already discovered `node`; it is a
    /// back arc if `on_stack` is true, and a forward or cross arc otherwise.
    Revisit {
        node: usize,
        pred: usize,
        root: usize,
        /// The length of the visit path, root included.
        depth: usize,
        on_stack: bool,
    },
    /// All successors of `node` have been enumerated.
    Postvisit {
        node: usize,
        parent: usize,
        root: usize,
        depth: usize,
    },
}

/// The argument of the filter of a depth-first visit: `node` is about to be
/// discovered from `pred`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    pub node: usize,
    pub pred: usize,
    pub root: usize,
    pub depth: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}

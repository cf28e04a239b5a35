/*
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components of directed graphs.
//!
//! Graphs are [adjacency-list graphs](graphs::AdjGraph) whose successor
//! lists are [cursor lists](list::CursorList) kept in ascending order. A
//! [depth-first search](graphs::AdjGraph::dfs) stamps discovery and finish
//! times and parents, and leaves vertices on a stack by decreasing finish
//! time; [Kosaraju's algorithm](sccs::kosaraju) combines two such searches,
//! one on the graph and one on its [transpose](graphs::AdjGraph::transpose),
//! to extract the [strongly connected components](sccs::Sccs).
//!
//! The [`io`] module reads edge lists and writes reports, and the
//! `find-components` binary (feature `cli`) ties everything together.
//!
//! ```
//! use digraph_sccs::prelude::*;
//! use dsi_progress_logger::no_logging;
//!
//! let mut graph = AdjGraph::from_arcs(3, [(1, 2), (2, 1), (2, 3)])?;
//! let sccs = digraph_sccs::sccs::compute(&mut graph, no_logging![])?;
//! assert_eq!(sccs.components(), &[vec![1, 2].into_boxed_slice(), vec![3].into_boxed_slice()]);
//! # Ok::<(), GraphError>(())
//! ```

#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod graphs;
pub mod io;
pub mod list;
pub mod sccs;
pub mod traits;
pub mod visits;

#[cfg(feature = "cli")]
pub mod cli;

pub mod prelude {
    pub use crate::graphs::prelude::*;
    pub use crate::list::{CursorList, ListError};
    pub use crate::sccs::Sccs;
    pub use crate::traits::RandomAccessGraph;
    pub use crate::visits::depth_first::Color;
}

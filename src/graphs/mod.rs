/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod adj_graph;
pub use adj_graph::*;

pub mod prelude {
    pub use super::adj_graph::{AdjGraph, GraphError};
}

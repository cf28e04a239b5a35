/*
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading edge lists and writing component reports.
//!
//! The input format is a sequence of whitespace-separated integers: the
//! order of the graph, followed by pairs `u v` denoting directed arcs, and
//! terminated by the pair `0 0`. Anything after the terminating pair is
//! ignored.
//!
//! The report lists the adjacency lists of the graph and then its strongly
//! connected components; every element of a list is followed by a space.

use crate::graphs::{AdjGraph, GraphError};
use crate::sccs::Sccs;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors returned while parsing an edge list.
#[derive(Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The input does not start with the order of the graph.
    #[error("Missing number of vertices")]
    MissingOrder,
    /// A token is not a nonnegative integer.
    #[error("Invalid token {token:?} at position {position}")]
    InvalidToken { position: usize, token: String },
    /// The input ended before the terminating pair `0 0`.
    #[error("Unexpected end of input at position {position} (missing terminating pair \"0 0\")")]
    UnexpectedEof { position: usize },
    /// An arc has an endpoint outside the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses an edge list, returning the graph it describes.
///
/// Token positions in errors start from 1.
pub fn parse_edge_list(input: &str) -> Result<AdjGraph, InputError> {
    let mut tokens = input.split_whitespace().enumerate().map(|(i, token)| {
        token
            .parse::<usize>()
            .map_err(|_| InputError::InvalidToken {
                position: i + 1,
                token: token.to_owned(),
            })
    });

    let n = tokens.next().ok_or(InputError::MissingOrder)??;
    let mut graph = AdjGraph::new(n);
    // The number of tokens consumed so far
    let mut consumed = 1;
    let mut next = || -> Result<usize, InputError> {
        consumed += 1;
        tokens
            .next()
            .ok_or(InputError::UnexpectedEof { position: consumed })?
    };

    loop {
        let u = next()?;
        let v = next()?;
        if u == 0 && v == 0 {
            break;
        }
        graph.add_arc(u, v)?;
    }

    log::debug!(
        "Read a graph with {} vertices and {} arcs",
        graph.order(),
        graph.size()
    );
    Ok(graph)
}

/// Reads the whole of `reader` and parses it as an edge list.
pub fn read_edge_list(mut reader: impl Read) -> Result<AdjGraph, InputError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_edge_list(&input)
}

fn write_items(
    mut writer: impl Write,
    items: impl IntoIterator<Item = usize>,
) -> std::io::Result<()> {
    for item in items {
        write!(writer, "{} ", item)?;
    }
    writeln!(writer)
}

/// Writes the adjacency lists of `graph`, followed by an empty line.
pub fn write_adjacency(mut writer: impl Write, graph: &AdjGraph) -> std::io::Result<()> {
    writeln!(writer, "Adjacency list representation of G:")?;
    for u in 1..=graph.order() {
        write!(writer, "{}: ", u)?;
        let succ = graph.adjacency(u).map_err(std::io::Error::other)?;
        write_items(&mut writer, succ.iter().copied())?;
    }
    writeln!(writer)
}

/// Writes the number of components and the members of each component.
pub fn write_components(mut writer: impl Write, sccs: &Sccs) -> std::io::Result<()> {
    writeln!(
        writer,
        "G contains {} strongly connected components:",
        sccs.num_components()
    )?;
    for (i, members) in sccs.components().iter().enumerate() {
        write!(writer, "Component {}: ", i + 1)?;
        write_items(&mut writer, members.iter().copied())?;
    }
    Ok(())
}

/// Writes a full report: adjacency lists, then components.
pub fn write_report(mut writer: impl Write, graph: &AdjGraph, sccs: &Sccs) -> std::io::Result<()> {
    write_adjacency(&mut writer, graph)?;
    write_components(&mut writer, sccs)
}

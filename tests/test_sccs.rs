/*
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph_sccs::prelude::*;
use digraph_sccs::sccs;
use dsi_progress_logger::{no_logging, ProgressLogger};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

const EXAMPLE: [(usize, usize); 9] = [
    (1, 2),
    (2, 3),
    (3, 1),
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 4),
    (6, 7),
    (8, 8),
];

fn logger_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn components(sccs: &Sccs) -> Vec<Vec<usize>> {
    sccs.components().iter().map(|c| c.to_vec()).collect()
}

/// Returns, for each vertex, the set of vertices reachable from it.
fn reachability(graph: &AdjGraph) -> Vec<Vec<bool>> {
    let n = graph.order();
    (1..=n)
        .map(|src| {
            let mut seen = vec![false; n + 1];
            let mut queue = VecDeque::from([src]);
            seen[src] = true;
            while let Some(u) = queue.pop_front() {
                for v in graph.successors(u) {
                    if !seen[v] {
                        seen[v] = true;
                        queue.push_back(v);
                    }
                }
            }
            seen
        })
        .collect()
}

fn random_graph(rng: &mut SmallRng, n: usize, m: usize) -> Result<AdjGraph> {
    let arcs: Vec<_> = (0..m)
        .map(|_| (rng.random_range(1..=n), rng.random_range(1..=n)))
        .collect();
    Ok(AdjGraph::from_arcs(n, arcs)?)
}

#[test]
fn test_example() -> Result<()> {
    logger_init();
    let mut graph = AdjGraph::from_arcs(8, EXAMPLE)?;
    let mut pl = ProgressLogger::default();
    let sccs = sccs::compute(&mut graph, &mut pl)?;

    assert_eq!(sccs.num_components(), 4);
    assert_eq!(
        components(&sccs),
        vec![vec![8], vec![1, 3, 2], vec![4, 6, 5], vec![7]]
    );
    assert_eq!(sccs.component_of(8), Some(0));
    assert_eq!(sccs.component_of(2), Some(1));
    assert_eq!(sccs.component_of(5), Some(2));
    assert_eq!(sccs.component_of(7), Some(3));
    assert_eq!(sccs.component_of(0), None);
    assert_eq!(sccs.component_of(9), None);
    Ok(())
}

#[test]
fn test_no_arcs() -> Result<()> {
    let mut graph = AdjGraph::new(3);
    let sccs = sccs::compute(&mut graph, no_logging![])?;
    assert_eq!(components(&sccs), vec![vec![3], vec![2], vec![1]]);

    let mut graph = AdjGraph::new(0);
    assert_eq!(
        sccs::compute(&mut graph, no_logging![])?.num_components(),
        0
    );
    Ok(())
}

#[test]
fn test_cycle() -> Result<()> {
    let mut graph = AdjGraph::from_arcs(3, [(1, 2), (2, 3), (3, 1)])?;
    let sccs = sccs::compute(&mut graph, no_logging![])?;
    assert_eq!(components(&sccs), vec![vec![1, 3, 2]]);
    Ok(())
}

#[test]
fn test_sizes() -> Result<()> {
    let mut graph = AdjGraph::from_arcs(8, EXAMPLE)?;
    let mut sccs = sccs::compute(&mut graph, no_logging![])?;
    assert_eq!(sccs.compute_sizes(), vec![1, 3, 3, 1].into_boxed_slice());

    assert_eq!(sccs.sort_by_size(), vec![3, 3, 1, 1].into_boxed_slice());
    assert_eq!(
        components(&sccs),
        vec![vec![1, 3, 2], vec![4, 6, 5], vec![8], vec![7]]
    );
    assert_eq!(sccs.component_of(8), Some(2));
    assert_eq!(sccs.component_of(4), Some(1));
    Ok(())
}

#[test]
fn test_kosaraju_roots() -> Result<()> {
    let mut graph = AdjGraph::from_arcs(8, EXAMPLE)?;
    let mut transpose = graph.transpose();
    let sccs = sccs::kosaraju(&mut graph, &mut transpose, no_logging![])?;

    let mut roots = 0;
    for u in 1..=8 {
        if transpose.parent(u)?.is_none() {
            roots += 1;
        }
    }
    assert_eq!(roots, sccs.num_components());
    // Each component starts with the root of its tree
    for component in sccs.components() {
        assert_eq!(transpose.parent(component[0])?, None);
    }
    Ok(())
}

#[test]
fn test_order_mismatch() -> Result<()> {
    let mut graph = AdjGraph::new(3);
    let mut transpose = AdjGraph::new(2);
    assert_eq!(
        sccs::kosaraju(&mut graph, &mut transpose, no_logging![]),
        Err(GraphError::OrderMismatch {
            graph: 3,
            transpose: 2
        })
    );
    Ok(())
}

#[test]
fn test_idempotent() -> Result<()> {
    let mut graph = AdjGraph::from_arcs(8, EXAMPLE)?;
    let first = sccs::compute(&mut graph, no_logging![])?;
    let second = sccs::compute(&mut graph, no_logging![])?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_random() -> Result<()> {
    logger_init();
    let mut rng = SmallRng::seed_from_u64(0);
    for (n, m) in [(1, 1), (10, 5), (10, 20), (30, 40), (50, 200)] {
        let mut graph = random_graph(&mut rng, n, m)?;
        let reach = reachability(&graph);
        let sccs = sccs::compute(&mut graph, no_logging![])?;

        let mut seen = vec![false; n + 1];
        for component in sccs.components() {
            for &u in component.iter() {
                assert!(!seen[u], "vertex {} in two components", u);
                seen[u] = true;
            }
        }
        assert!(seen[1..].iter().all(|&s| s));

        for u in 1..=n {
            for v in 1..=n {
                let same = sccs.component_of(u) == sccs.component_of(v);
                assert_eq!(same, reach[u - 1][v] && reach[v - 1][u], "{} {}", u, v);
            }
            // Components are in topological order
            for v in graph.successors(u) {
                assert!(sccs.component_of(u) <= sccs.component_of(v));
            }
        }
    }
    Ok(())
}

#[test]
fn test_transpose_transpose() -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(1);
    for (n, m) in [(5, 10), (20, 60)] {
        let graph = random_graph(&mut rng, n, m)?;
        let transpose = graph.transpose();
        assert_eq!(transpose.num_arcs(), graph.num_arcs());
        for u in 1..=n {
            for v in graph.successors(u) {
                assert!(transpose.has_arc(v, u));
            }
        }
        let back = transpose.transpose();
        for u in 1..=n {
            assert_eq!(back.adjacency(u)?, graph.adjacency(u)?);
        }
    }
    Ok(())
}

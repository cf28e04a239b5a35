/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! A visit reports what happens to each node through events of a type
//! implementing [`Event`], which are passed to a callback. The callback
//! returns a `ControlFlow<E, ()>`: a [`Break`](ControlFlow::Break) stops the
//! visit and becomes its return value. Uninterruptible visits use
//! [`Infallible`](std::convert::Infallible) as `E`, and their result is
//! unwrapped with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).
//!
//! A filter, receiving an [`Event::FilterArgs`], is called on each node
//! about to be discovered; if it returns false the node is left unknown, so
//! it might be discovered later along another arc or as a root.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

/// A break value for visits that computed their result early, such as
/// an acyclicity test meeting a back arc.
#[derive(Error, Debug)]
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// Types usable as arguments for the callbacks in visits.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A sequential visit.
///
/// The roots are tried in the given order, and roots already known are
/// skipped.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified roots, ignoring the nodes
    /// rejected by `filter`.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified roots.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Makes every node unknown again, so that the visit can be reused.
    fn reset(&mut self);
}

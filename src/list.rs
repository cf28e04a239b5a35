/*
 * SPDX-FileCopyrightText: 2026 The digraph-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Doubly-linked lists with a movable cursor.
//!
//! A [`CursorList`] is a sequence with a distinguished *cursor* that is either
//! undefined or positioned on exactly one element. The cursor is the
//! traversal primitive used by graphs to scan and update their adjacency
//! lists: moving it past either end makes it undefined, so a scan
//! terminates when [`index`](CursorList::index) returns `None`.
//!
//! Nodes are stored in an arena and linked by index, so there are no owning
//! pointers: dropping the list (or [clearing](CursorList::clear) it) releases
//! the arena in one step. Slots freed by deletions are reused by moving the
//! last node of the arena into the hole.
//!
//! # Examples
//!
//! ```
//! use digraph_sccs::list::CursorList;
//!
//! let mut list = CursorList::from_iter([1, 3, 4]);
//! list.move_front();
//! list.move_next();
//! list.insert_before(2)?;
//! assert_eq!(list.to_string(), "1 2 3 4");
//! assert_eq!(list.index(), Some(2));
//!
//! list.move_next();
//! list.move_next();
//! assert_eq!(list.index(), None);
//! # Ok::<(), digraph_sccs::list::ListError>(())
//! ```

use itertools::Itertools;
use std::fmt;
use std::iter::FusedIterator;
use thiserror::Error;

/// Errors returned by [`CursorList`] operations whose preconditions are not
/// met.
///
/// The associated string is the name of the failing operation. Failing
/// operations never modify the list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The list has no elements.
    #[error("Calling {0}() on a list with no elements")]
    Empty(&'static str),
    /// The cursor is undefined.
    #[error("Calling {0}() on a list with undefined cursor element")]
    UndefinedCursor(&'static str),
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    /// The arena slot of the element under the cursor.
    handle: usize,
    /// The position of the element in the list.
    index: usize,
}

/// A doubly-linked list with a cursor, stored in an arena.
///
/// Equality ignores the cursor; [cloning](Clone) returns a list with the same
/// elements and an undefined cursor.
pub struct CursorList<T = usize> {
    nodes: Vec<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    cursor: Option<Cursor>,
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CursorList<T> {
    /// Creates a new empty list with undefined cursor.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            front: None,
            back: None,
            cursor: None,
        }
    }

    /// Creates a new empty list with space for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            front: None,
            back: None,
            cursor: None,
        }
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the position of the cursor, or `None` if the cursor is
    /// undefined.
    #[inline(always)]
    pub fn index(&self) -> Option<usize> {
        self.cursor.map(|cursor| cursor.index)
    }

    /// Returns the front element.
    pub fn front(&self) -> Result<&T, ListError> {
        self.front
            .map(|handle| &self.nodes[handle].value)
            .ok_or(ListError::Empty("front"))
    }

    /// Returns the back element.
    pub fn back(&self) -> Result<&T, ListError> {
        self.back
            .map(|handle| &self.nodes[handle].value)
            .ok_or(ListError::Empty("back"))
    }

    /// Returns the element under the cursor.
    pub fn get(&self) -> Result<&T, ListError> {
        let handle = self.cursor_handle("get")?;
        Ok(&self.nodes[handle].value)
    }

    /// Overwrites the element under the cursor.
    pub fn set(&mut self, value: T) -> Result<(), ListError> {
        let handle = self.cursor_handle("set")?;
        self.nodes[handle].value = value;
        Ok(())
    }

    /// Places the cursor on the front element; does nothing on an empty list.
    pub fn move_front(&mut self) {
        self.cursor = self.front.map(|handle| Cursor { handle, index: 0 });
    }

    /// Places the cursor on the back element; does nothing on an empty list.
    pub fn move_back(&mut self) {
        self.cursor = self.back.map(|handle| Cursor {
            handle,
            index: self.len() - 1,
        });
    }

    /// Moves the cursor one step toward the front.
    ///
    /// If the cursor is on the front element it becomes undefined; if it is
    /// undefined, nothing happens.
    pub fn move_prev(&mut self) {
        if let Some(Cursor { handle, index }) = self.cursor {
            self.cursor = self.nodes[handle].prev.map(|prev| Cursor {
                handle: prev,
                index: index - 1,
            });
        }
    }

    /// Moves the cursor one step toward the back.
    ///
    /// If the cursor is on the back element it becomes undefined; if it is
    /// undefined, nothing happens.
    pub fn move_next(&mut self) {
        if let Some(Cursor { handle, index }) = self.cursor {
            self.cursor = self.nodes[handle].next.map(|next| Cursor {
                handle: next,
                index: index + 1,
            });
        }
    }

    /// Inserts an element before the front element.
    ///
    /// A defined cursor stays on the same element, so its index grows by one.
    pub fn prepend(&mut self, value: T) {
        let handle = self.alloc(value, None, self.front);
        match self.front {
            Some(front) => self.nodes[front].prev = Some(handle),
            None => self.back = Some(handle),
        }
        self.front = Some(handle);
        if let Some(cursor) = &mut self.cursor {
            cursor.index += 1;
        }
    }

    /// Inserts an element after the back element.
    pub fn append(&mut self, value: T) {
        let handle = self.alloc(value, self.back, None);
        match self.back {
            Some(back) => self.nodes[back].next = Some(handle),
            None => self.front = Some(handle),
        }
        self.back = Some(handle);
    }

    /// Inserts an element before the cursor.
    pub fn insert_before(&mut self, value: T) -> Result<(), ListError> {
        let at = self.cursor_handle("insert_before")?;
        let prev = self.nodes[at].prev;
        let handle = self.alloc(value, prev, Some(at));
        match prev {
            Some(prev) => self.nodes[prev].next = Some(handle),
            None => self.front = Some(handle),
        }
        self.nodes[at].prev = Some(handle);
        if let Some(cursor) = &mut self.cursor {
            cursor.index += 1;
        }
        Ok(())
    }

    /// Inserts an element after the cursor.
    pub fn insert_after(&mut self, value: T) -> Result<(), ListError> {
        let at = self.cursor_handle("insert_after")?;
        let next = self.nodes[at].next;
        let handle = self.alloc(value, Some(at), next);
        match next {
            Some(next) => self.nodes[next].prev = Some(handle),
            None => self.back = Some(handle),
        }
        self.nodes[at].next = Some(handle);
        Ok(())
    }

    /// Removes and returns the front element.
    ///
    /// If the cursor was on the front element it becomes undefined.
    pub fn delete_front(&mut self) -> Result<T, ListError> {
        let handle = self.front.ok_or(ListError::Empty("delete_front"))?;
        self.cursor = match self.cursor {
            Some(cursor) if cursor.handle == handle => None,
            Some(cursor) => Some(Cursor {
                index: cursor.index - 1,
                ..cursor
            }),
            None => None,
        };
        Ok(self.unlink(handle))
    }

    /// Removes and returns the back element.
    ///
    /// If the cursor was on the back element it becomes undefined.
    pub fn delete_back(&mut self) -> Result<T, ListError> {
        let handle = self.back.ok_or(ListError::Empty("delete_back"))?;
        if self.cursor.is_some_and(|cursor| cursor.handle == handle) {
            self.cursor = None;
        }
        Ok(self.unlink(handle))
    }

    /// Removes and returns the element under the cursor, making the cursor
    /// undefined.
    pub fn delete(&mut self) -> Result<T, ListError> {
        let handle = self.cursor_handle("delete")?;
        self.cursor = None;
        Ok(self.unlink(handle))
    }

    /// Removes all elements, making the cursor undefined.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.back = None;
        self.cursor = None;
    }

    /// Returns a front-to-back iterator over the elements.
    ///
    /// The iterator does not use or modify the cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.front,
            back: self.back,
            len: self.len(),
        }
    }

    fn cursor_handle(&self, op: &'static str) -> Result<usize, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty(op));
        }
        self.cursor
            .map(|cursor| cursor.handle)
            .ok_or(ListError::UndefinedCursor(op))
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        self.nodes.push(Node { value, prev, next });
        self.nodes.len() - 1
    }

    /// Detaches the node in slot `handle` and fills the hole with the last
    /// slot of the arena. The cursor must not be on `handle`.
    fn unlink(&mut self, handle: usize) -> T {
        let Node { prev, next, .. } = self.nodes[handle];
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.front = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.back = prev,
        }

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(handle);
        if handle != last {
            // The node formerly in slot `last` now lives in slot `handle`
            let Node { prev, next, .. } = self.nodes[handle];
            match prev {
                Some(prev) => self.nodes[prev].next = Some(handle),
                None => self.front = Some(handle),
            }
            match next {
                Some(next) => self.nodes[next].prev = Some(handle),
                None => self.back = Some(handle),
            }
            if let Some(cursor) = &mut self.cursor {
                if cursor.handle == last {
                    cursor.handle = handle;
                }
            }
        }
        removed.value
    }
}

impl<T: Clone> Clone for CursorList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CursorList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CursorList<T> {}

impl<T: fmt::Debug> fmt::Debug for CursorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorList")
            .field("elements", &self.iter().collect::<Vec<_>>())
            .field("index", &self.index())
            .finish()
    }
}

/// Renders the elements separated by spaces, front on the left.
impl<T: fmt::Display> fmt::Display for CursorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().format(" "))
    }
}

impl<T> FromIterator<T> for CursorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CursorList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The iterator returned by [`CursorList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(list: &CursorList) -> Vec<usize> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty() {
        let list = CursorList::<usize>::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.index(), None);
        assert_eq!(list.front(), Err(ListError::Empty("front")));
        assert_eq!(list.back(), Err(ListError::Empty("back")));
        assert_eq!(list.get(), Err(ListError::Empty("get")));
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn test_insertion_keeps_cursor_undefined() {
        let mut list = CursorList::new();
        list.append(1);
        assert_eq!(list.index(), None);
        list.prepend(0);
        assert_eq!(list.index(), None);
        assert_eq!(elements(&list), vec![0, 1]);
    }

    #[test]
    fn test_prepend_shifts_index() {
        let mut list = CursorList::from_iter([5, 6, 7]);
        list.move_back();
        assert_eq!(list.index(), Some(2));
        list.prepend(4);
        assert_eq!(list.index(), Some(3));
        assert_eq!(list.get(), Ok(&7));
        list.append(8);
        assert_eq!(list.index(), Some(3));
    }

    #[test]
    fn test_cursor_walk() {
        let mut list = CursorList::from_iter(1..=4);
        list.move_front();
        let mut seen = vec![];
        while let Some(index) = list.index() {
            seen.push((index, *list.get().unwrap()));
            list.move_next();
        }
        assert_eq!(seen, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);

        // Going past the back makes the cursor undefined, and then nothing moves it
        list.move_next();
        assert_eq!(list.index(), None);
        list.move_prev();
        assert_eq!(list.index(), None);

        list.move_back();
        list.move_prev();
        assert_eq!(list.get(), Ok(&3));
        list.move_prev();
        list.move_prev();
        list.move_prev();
        assert_eq!(list.index(), None);
        assert_eq!(list.get(), Err(ListError::UndefinedCursor("get")));
    }

    #[test]
    fn test_insert_around_cursor() -> Result<(), ListError> {
        let mut list = CursorList::new();
        assert_eq!(
            list.insert_before(1),
            Err(ListError::Empty("insert_before"))
        );
        list.append(3);
        assert_eq!(
            list.insert_after(1),
            Err(ListError::UndefinedCursor("insert_after"))
        );

        list.move_front();
        list.insert_before(1)?;
        assert_eq!(list.index(), Some(1));
        list.insert_after(5)?;
        list.insert_before(2)?;
        assert_eq!(list.index(), Some(2));
        list.move_back();
        list.insert_after(6)?;
        list.move_prev();
        list.insert_after(4)?;
        assert_eq!(elements(&list), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&6));
        assert_eq!(
            list.iter().rev().copied().collect::<Vec<_>>(),
            vec![6, 5, 4, 3, 2, 1]
        );
        Ok(())
    }

    #[test]
    fn test_delete() -> Result<(), ListError> {
        let mut list = CursorList::from_iter(1..=6);
        assert_eq!(list.delete(), Err(ListError::UndefinedCursor("delete")));

        list.move_front();
        list.move_next();
        list.move_next();
        // Deleting elsewhere keeps the cursor on the same element
        assert_eq!(list.delete_front()?, 1);
        assert_eq!(list.index(), Some(1));
        assert_eq!(list.get(), Ok(&3));
        assert_eq!(list.delete_back()?, 6);
        assert_eq!(list.get(), Ok(&3));

        assert_eq!(list.delete()?, 3);
        assert_eq!(list.index(), None);
        assert_eq!(elements(&list), vec![2, 4, 5]);

        list.move_front();
        assert_eq!(list.delete_front()?, 2);
        assert_eq!(list.index(), None);
        list.move_back();
        assert_eq!(list.delete_back()?, 5);
        assert_eq!(list.index(), None);

        assert_eq!(list.delete_back()?, 4);
        assert!(list.is_empty());
        assert_eq!(list.delete_front(), Err(ListError::Empty("delete_front")));
        assert_eq!(list.delete_back(), Err(ListError::Empty("delete_back")));
        Ok(())
    }

    #[test]
    fn test_arena_reuse_after_delete() -> Result<(), ListError> {
        let mut list = CursorList::from_iter(0..5);
        list.move_front();
        list.move_next();
        list.delete()?;
        list.move_back();
        list.move_prev();
        // The cursor is now on the element stored in the last arena slot
        list.delete_front()?;
        assert_eq!(list.get(), Ok(&3));
        assert_eq!(list.index(), Some(1));
        list.set(7)?;
        list.append(9);
        list.prepend(8);
        assert_eq!(elements(&list), vec![8, 2, 7, 4, 9]);
        assert_eq!(list.index(), Some(2));
        Ok(())
    }

    #[test]
    fn test_clear() {
        let mut list = CursorList::from_iter(0..10);
        list.move_back();
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.index(), None);
        list.append(1);
        assert_eq!(elements(&list), vec![1]);
    }

    #[test]
    fn test_equality_ignores_cursor() {
        let mut a = CursorList::from_iter([1, 2, 3]);
        let b = CursorList::from_iter([1, 2, 3]);
        a.move_back();
        assert_eq!(a, b);
        assert_ne!(a, CursorList::from_iter([1, 2]));
        assert_ne!(a, CursorList::from_iter([1, 2, 4]));
    }

    #[test]
    fn test_clone_is_independent() -> Result<(), ListError> {
        let mut list = CursorList::from_iter([3, 1, 2]);
        list.move_front();
        let mut copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.index(), None);
        assert_eq!(list.index(), Some(0));

        copy.move_front();
        copy.set(10)?;
        copy.append(4);
        assert_eq!(elements(&list), vec![3, 1, 2]);
        assert_ne!(copy, list);
        Ok(())
    }

    #[test]
    fn test_display() {
        let list = CursorList::from_iter([1, 20, 3]);
        assert_eq!(list.to_string(), "1 20 3");
        assert_eq!(
            format!("{:?}", list),
            "CursorList { elements: [1, 20, 3], index: None }"
        );
    }
}

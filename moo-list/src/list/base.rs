// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc::boxed::Box;
use log::trace;

use crate::error::Result;
use crate::record::allocate;

type Link<'a, T> = Option<NonNull<Node<'a, T>>>;

/// A single position in the chain of a [`MooList`].
///
/// A node owns its links, but only borrows its item.
pub(crate) struct Node<'a, T: ?Sized> {
    item: &'a T,
    previous: Link<'a, T>,
    next: Link<'a, T>,
}

/// A non-owning handle to a node of a [`MooList`].
///
/// Handles are returned by the insertion functions and [`MooList::get_node`], and are accepted by
/// [`MooList::insert`] and [`MooList::delete_node`].
/// A handle becomes dangling as soon as its node is deleted or its list is cleared or dropped.
pub struct NodeRef<'a, T: ?Sized> {
    node: NonNull<Node<'a, T>>,
}

impl<'a, T: ?Sized> NodeRef<'a, T> {
    /// Returns the item borrowed by this node.
    ///
    /// # Safety
    ///
    /// The node must still be part of a list that is alive.
    pub unsafe fn item(self) -> &'a T {
        self.node.as_ref().item
    }

    /// Returns the following node, or `None` if this is the back of its list.
    ///
    /// # Safety
    ///
    /// The node must still be part of a list that is alive.
    pub unsafe fn next(self) -> Option<Self> {
        self.node.as_ref().next.map(|node| Self { node })
    }

    /// Returns the preceding node, or `None` if this is the front of its list.
    ///
    /// # Safety
    ///
    /// The node must still be part of a list that is alive.
    pub unsafe fn previous(self) -> Option<Self> {
        self.node.as_ref().previous.map(|node| Self { node })
    }
}

impl<'a, T: ?Sized> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized> Copy for NodeRef<'a, T> {}

impl<'a, T: ?Sized> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<'a, T: ?Sized> Eq for NodeRef<'a, T> {}

impl<'a, T: ?Sized> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.node).finish()
    }
}

/// A doubly linked list of borrowed items.
///
/// The list owns its chain of nodes and frees them when they are deleted, when the list is
/// cleared, and when the list is dropped.
/// It never owns the items: every item leaves the list exactly as it was handed in.
/// The same item may be inserted any number of times.
///
/// See the [module-level documentation](crate::list) for more details.
pub struct MooList<'a, T: ?Sized> {
    front: Link<'a, T>,
    back: Link<'a, T>,
    size: usize,
    marker: PhantomData<Box<Node<'a, T>>>,
}

impl<'a, T: ?Sized> MooList<'a, T> {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self {
            front: None,
            back: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Provides the last item, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back(&self) -> Option<&'a T> {
        self.back.map(|node| unsafe { node.as_ref().item })
    }

    /// Provides a handle to the last node, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn back_node(&self) -> Option<NodeRef<'a, T>> {
        self.back.map(|node| NodeRef { node })
    }

    /// Removes all nodes from the list, deallocating them.
    ///
    /// The items are left untouched.
    /// This operation computes in *O*(*n*) time.
    pub fn clear(&mut self) {
        // Detach the chain first, so that the list is consistent at every point.
        let mut current = self.front.take();
        self.back = None;
        self.size = 0;

        while let Some(node) = current {
            // Reconstruct the `Box` of the allocation made in `insert`.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
    }

    /// Unlinks `node` from the list, deallocates it and returns its item.
    ///
    /// Returns `None` without touching the list if `node` is `None`.
    ///
    /// This operation computes in *O*(*1*) time.
    ///
    /// # Safety
    ///
    /// `node` must be `None` or a node of this list that has not been deleted yet.
    pub unsafe fn delete_node(&mut self, node: Option<NodeRef<'a, T>>) -> Option<&'a T> {
        let node = Box::from_raw(node?.node.as_ptr());

        match node.previous {
            Some(mut previous) => previous.as_mut().next = node.next,
            None => self.front = node.next,
        }

        match node.next {
            Some(mut next) => next.as_mut().previous = node.previous,
            None => self.back = node.previous,
        }

        self.size -= 1;
        trace!("deleted node at {:p}, {} nodes left", node, self.size);

        Some(node.item)
    }

    /// Provides the first item, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front(&self) -> Option<&'a T> {
        self.front.map(|node| unsafe { node.as_ref().item })
    }

    /// Provides a handle to the first node, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn front_node(&self) -> Option<NodeRef<'a, T>> {
        self.front.map(|node| NodeRef { node })
    }

    /// Returns the item at position `index`, or `None` if `index` is out of bounds.
    ///
    /// This operation computes in *O*(*index*) time.
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.get_node(index).map(|node| unsafe { node.item() })
    }

    /// Returns a handle to the node at position `index`, or `None` if `index` is out of bounds.
    ///
    /// The list is always traversed from the front.
    /// This operation computes in *O*(*index*) time.
    pub fn get_node(&self, index: usize) -> Option<NodeRef<'a, T>> {
        if index >= self.size {
            return None;
        }

        let mut node = self.front?;
        for _ in 0..index {
            node = unsafe { node.as_ref().next? };
        }

        Some(NodeRef { node })
    }

    /// Inserts `item` in a new node right after `after`, or at the front if `after` is `None`.
    ///
    /// Returns a handle to the new node.
    /// Fails with [`MooError::Allocation`] if the node cannot be allocated, in which case the list
    /// is left unchanged.
    ///
    /// This operation computes in *O*(*1*) time.
    ///
    /// # Safety
    ///
    /// `after` must be `None` or a node of this list that has not been deleted yet.
    ///
    /// [`MooError::Allocation`]: crate::MooError::Allocation
    pub unsafe fn insert(
        &mut self,
        after: Option<NodeRef<'a, T>>,
        item: &'a T,
    ) -> Result<NodeRef<'a, T>> {
        let new_node = allocate::<Node<'a, T>>()?;

        let (previous, next) = match after {
            Some(after) => (Some(after.node), after.node.as_ref().next),
            None => (None, self.front),
        };
        new_node.as_ptr().write(Node {
            item,
            previous,
            next,
        });

        match next {
            Some(mut next) => next.as_mut().previous = Some(new_node),
            None => self.back = Some(new_node),
        }

        match previous {
            Some(mut previous) => previous.as_mut().next = Some(new_node),
            None => self.front = Some(new_node),
        }

        self.size += 1;
        trace!("inserted node at {:p}, {} nodes", new_node, self.size);

        Ok(NodeRef { node: new_node })
    }

    /// Returns `true` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns an iterator yielding each item of the list from front to back.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            front: self.front,
            back: self.back,
            remaining: self.size,
            marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Removes the last node and returns its item, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_back(&mut self) -> Option<&'a T> {
        let back = self.back_node();
        unsafe { self.delete_node(back) }
    }

    /// Removes the first node and returns its item, or `None` if the list is empty.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn pop_front(&mut self) -> Option<&'a T> {
        let front = self.front_node();
        unsafe { self.delete_node(front) }
    }

    /// Appends `item` to the back of the list and returns a handle to its node.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_back(&mut self, item: &'a T) -> Result<NodeRef<'a, T>> {
        let back = self.back_node();
        unsafe { self.insert(back, item) }
    }

    /// Prepends `item` to the front of the list and returns a handle to its node.
    ///
    /// This operation computes in *O*(*1*) time.
    pub fn push_front(&mut self, item: &'a T) -> Result<NodeRef<'a, T>> {
        unsafe { self.insert(None, item) }
    }

    /// Removes the node at position `index` and returns its item.
    ///
    /// Returns `None` without touching the list if `index` is out of bounds.
    /// This operation computes in *O*(*index*) time.
    pub fn remove(&mut self, index: usize) -> Option<&'a T> {
        let node = self.get_node(index);
        unsafe { self.delete_node(node) }
    }
}

impl<'a, T: ?Sized + fmt::Debug> fmt::Debug for MooList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: ?Sized> Default for MooList<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized> Drop for MooList<'a, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'l, 'a, T: ?Sized> IntoIterator for &'l MooList<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'l, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of a [`MooList`].
///
/// This iterator is returned from the [`MooList::iter`] function.
pub struct Iter<'l, 'a, T: ?Sized> {
    front: Link<'a, T>,
    back: Link<'a, T>,
    remaining: usize,
    marker: PhantomData<&'l MooList<'a, T>>,
}

impl<'l, 'a, T: ?Sized> Iterator for Iter<'l, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let node = unsafe { self.front?.as_ref() };
        self.front = node.next;
        self.remaining -= 1;

        Some(node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'l, 'a, T: ?Sized> DoubleEndedIterator for Iter<'l, 'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let node = unsafe { self.back?.as_ref() };
        self.back = node.previous;
        self.remaining -= 1;

        Some(node.item)
    }
}

impl<'l, 'a, T: ?Sized> ExactSizeIterator for Iter<'l, 'a, T> {}

impl<'l, 'a, T: ?Sized> FusedIterator for Iter<'l, 'a, T> {}

// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::base::{MooList, NodeRef};
use crate::error::Result;
use crate::record::{this, Record};

/// Lists take part in the dispatch handshake like any other record.
///
/// Each concrete item type gets its own guard from the shared registry.
impl<T: ?Sized + 'static> Record for MooList<'static, T> {
    fn init() -> Self {
        Self::new()
    }
}

/// The list operations as member functions driven by [`dispatch`](crate::record::dispatch).
///
/// Each function starts with the preamble that binds the most recently dispatched
/// `MooList<'static, T>` and then forwards to the respective [`MooList`] method.
/// Apart from [`MooError::ProtocolViolation`] when no dispatch is pending, the results are the
/// same as calling the methods directly.
///
/// ```ignore
/// let mut list = construct::<MooList<str>>()?;
/// dispatch(&mut *list);
/// unsafe { member::push_back::<str>("a") }?;
/// ```
///
/// # Safety
///
/// All functions require the list passed to the consumed dispatch to still be alive, at the same
/// address, and not borrowed elsewhere while the function runs.
///
/// [`MooError::ProtocolViolation`]: crate::MooError::ProtocolViolation
pub mod member {
    use super::*;

    pub unsafe fn get_node<T: ?Sized + 'static>(
        index: usize,
    ) -> Result<Option<NodeRef<'static, T>>> {
        let this = this::<MooList<'static, T>>()?;
        Ok(this.get_node(index))
    }

    pub unsafe fn get<T: ?Sized + 'static>(index: usize) -> Result<Option<&'static T>> {
        let this = this::<MooList<'static, T>>()?;
        Ok(this.get(index))
    }

    /// Also requires `after` to be `None` or a live node of the dispatched list.
    pub unsafe fn insert<T: ?Sized + 'static>(
        after: Option<NodeRef<'static, T>>,
        item: &'static T,
    ) -> Result<NodeRef<'static, T>> {
        let this = this::<MooList<'static, T>>()?;
        this.insert(after, item)
    }

    /// Also requires `node` to be `None` or a live node of the dispatched list.
    pub unsafe fn delete_node<T: ?Sized + 'static>(
        node: Option<NodeRef<'static, T>>,
    ) -> Result<Option<&'static T>> {
        let this = this::<MooList<'static, T>>()?;
        Ok(this.delete_node(node))
    }

    pub unsafe fn remove<T: ?Sized + 'static>(index: usize) -> Result<Option<&'static T>> {
        let this = this::<MooList<'static, T>>()?;
        Ok(this.remove(index))
    }

    pub unsafe fn push_front<T: ?Sized + 'static>(
        item: &'static T,
    ) -> Result<NodeRef<'static, T>> {
        let this = this::<MooList<'static, T>>()?;
        this.push_front(item)
    }

    pub unsafe fn pop_front<T: ?Sized + 'static>() -> Result<Option<&'static T>> {
        let this = this::<MooList<'static, T>>()?;
        Ok(this.pop_front())
    }

    pub unsafe fn push_back<T: ?Sized + 'static>(item: &'static T) -> Result<NodeRef<'static, T>> {
        let this = this::<MooList<'static, T>>()?;
        this.push_back(item)
    }

    pub unsafe fn pop_back<T: ?Sized + 'static>() -> Result<Option<&'static T>> {
        let this = this::<MooList<'static, T>>()?;
        Ok(this.pop_back())
    }
}

// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! A doubly linked list of borrowed items.
//!
//! [`MooList`] owns the chain of its nodes, but never the items those nodes point to.
//! Every item handed in comes back out unchanged, and the caller stays responsible for it:
//!
//! ```ignore
//! let items = [1, 2, 3];
//! let mut list = MooList::new();
//!
//! for item in &items {
//!     list.push_back(item)?;
//! }
//!
//! assert_eq!(list.pop_front(), Some(&1));
//! assert_eq!(list.get(1), Some(&3));
//! ```
//!
//! Positional functions like [`MooList::get`] and [`MooList::remove`] always walk the chain from
//! the front and simply return `None` for an index out of bounds.
//! Functions that take a [`NodeRef`] handle are `unsafe`, because the compiler cannot tell whether
//! the handle still belongs to the list.
//!
//! Allocating a node may fail, which is reported as [`MooError::Allocation`].
//!
//! A `MooList<'static, T>` is also a [`Record`], and the [`member`] functions perform every list
//! operation through the dispatch handshake.
//!
//! [`MooError::Allocation`]: crate::MooError::Allocation
//! [`Record`]: crate::record::Record

mod base;
mod record;

pub use base::*;
pub use record::*;

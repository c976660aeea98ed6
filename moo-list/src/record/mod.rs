// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! Bound-method calls on plain records through a one-shot dispatch handshake.
//!
//! Every [`Record`] type owns exactly one [`CallGuard`], shared by all of its instances.
//! A call happens in two steps:
//!
//! 1. The caller passes the instance to [`dispatch`], which stores it as the active instance of
//!    its type and arms the guard.
//! 2. The member function starts with [`bind_self`] (or [`this`]), which binds "self" to the
//!    active instance and disarms the guard again.
//!
//! ```ignore
//! #[derive(Default, Record)]
//! struct Counter {
//!     value: u32,
//! }
//!
//! unsafe fn counter_increment() -> moo_list::Result<u32> {
//!     let this = this::<Counter>()?;
//!     this.value += 1;
//!     Ok(this.value)
//! }
//!
//! let mut counter = construct::<Counter>()?;
//! dispatch(&mut *counter);
//! assert_eq!(unsafe { counter_increment() }?, 1);
//! ```
//!
//! The guard is process-wide per type and holds a single pending handshake.
//! Dispatching a second instance of the same type before the first handshake has been consumed
//! replaces the active instance, and the pending member function binds to the second one.
//! Member functions must therefore never dispatch their own type before running their preamble.
//!
//! Records are created with [`construct`], which reports allocation failures as
//! [`MooError::Allocation`] instead of aborting.
//!
//! [`MooError::Allocation`]: crate::MooError::Allocation

mod construct;
mod guard;
mod registry;
mod traits;

pub use construct::*;
pub(crate) use construct::allocate;
pub use guard::*;
pub use traits::*;

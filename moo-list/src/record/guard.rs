// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::any::type_name;
use core::ptr::{self, NonNull};
use core::sync::atomic::{AtomicBool, AtomicPtr, Ordering};

use log::{debug, trace, warn};

use super::traits::Record;
use crate::error::{MooError, Result};

/// The call context of a single record type: one active-instance slot and one armed flag.
///
/// A `CallGuard` is shared by all instances of its type and holds at most one pending handshake.
/// The atomics only make it usable in a `static`.
/// The handshake itself is not synchronized in any way and must not be used from multiple threads.
#[derive(Debug)]
pub struct CallGuard {
    active: AtomicPtr<()>,
    armed: AtomicBool,
}

impl CallGuard {
    /// Creates an unarmed guard without an active instance.
    pub const fn new() -> Self {
        Self {
            active: AtomicPtr::new(ptr::null_mut()),
            armed: AtomicBool::new(false),
        }
    }

    /// Stores `instance` as the active instance and arms the guard.
    ///
    /// Returns `true` if this replaced a handshake that has never been consumed.
    pub(crate) fn arm(&self, instance: *mut ()) -> bool {
        self.active.store(instance, Ordering::Relaxed);
        self.armed.swap(true, Ordering::Relaxed)
    }

    /// Consumes the pending handshake and returns the active instance.
    ///
    /// Returns `None` if the guard is not armed.
    /// An armed guard with an empty slot is disarmed and also yields `None`, so it never stays
    /// armed without an active instance.
    pub(crate) fn consume(&self) -> Option<NonNull<()>> {
        if !self.armed.swap(false, Ordering::Relaxed) {
            return None;
        }

        NonNull::new(self.active.load(Ordering::Relaxed))
    }

    pub(crate) fn disarm(&self) {
        self.armed.store(false, Ordering::Relaxed);
    }

    /// Returns `true` if a dispatch is waiting to be consumed by a member function.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Relaxed)
    }
}

impl Default for CallGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Makes `instance` the active instance of its type and arms the guard for exactly one
/// member function call.
///
/// Returns `instance` unchanged, so that calls can be chained.
///
/// The last dispatch wins: if a previous dispatch of the same type has not been consumed yet,
/// its instance is silently replaced and the next member function binds to `instance`.
pub fn dispatch<T: Record>(instance: &mut T) -> &mut T {
    let active: *mut T = instance;

    if T::guard().arm(active.cast()) {
        warn!(
            "dispatch of `{}` at {:p} replaced a handshake that was never consumed",
            type_name::<T>(),
            active
        );
    } else {
        trace!("dispatch `{}` at {:p}", type_name::<T>(), active);
    }

    instance
}

/// The member function preamble: consumes the pending dispatch of `T` and returns the
/// instance that "self" refers to.
///
/// Exactly one `bind_self` succeeds per [`dispatch`].
/// Fails with [`MooError::ProtocolViolation`] if `T` has not been dispatched since the last
/// successful `bind_self`.
pub fn bind_self<T: Record>() -> Result<NonNull<T>> {
    match T::guard().consume() {
        Some(active) => {
            trace!("bind self of `{}` to {:p}", type_name::<T>(), active);
            Ok(active.cast())
        }
        None => {
            debug!("`{}` member function called without dispatch", type_name::<T>());
            Err(MooError::ProtocolViolation {
                type_name: type_name::<T>(),
            })
        }
    }
}

/// Like [`bind_self`], but returns "self" as a mutable reference.
///
/// # Safety
///
/// The instance passed to the consumed [`dispatch`] must still be alive, must not have moved, and
/// must not be borrowed elsewhere for as long as the returned reference is used.
pub unsafe fn this<'a, T: Record>() -> Result<&'a mut T> {
    bind_self::<T>().map(|mut this| this.as_mut())
}

/// Returns `true` if a dispatch of `T` is waiting to be consumed.
pub fn is_armed<T: Record>() -> bool {
    T::guard().is_armed()
}

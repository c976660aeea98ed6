// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::any::{type_name, TypeId};

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use log::trace;
use spin::Mutex;

use super::guard::CallGuard;

/// Guards of all record types that don't bring their own `static`.
///
/// Entries are leaked on first use and live until the process exits, just like a `static` would.
static GUARDS: Mutex<BTreeMap<TypeId, &'static CallGuard>> = Mutex::new(BTreeMap::new());

/// Returns the guard of `T`, registering a fresh one on first use.
pub(crate) fn guard_of<T: 'static>() -> &'static CallGuard {
    let mut guards = GUARDS.lock();

    *guards.entry(TypeId::of::<T>()).or_insert_with(|| {
        trace!("registering call guard for `{}`", type_name::<T>());
        let guard: &'static CallGuard = Box::leak(Box::new(CallGuard::new()));
        guard
    })
}

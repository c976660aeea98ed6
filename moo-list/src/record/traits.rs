// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::guard::CallGuard;
use super::registry;

/// Designates a structure as a record that supports the [`dispatch`]/[`bind_self`] handshake.
///
/// The easiest way to implement this trait for a non-generic structure is to use `derive`:
///
/// ```ignore
/// #[derive(Default, Record)]
/// struct MyRecord {
///     value: i32,
/// }
/// ```
///
/// This gives the type its own `static` [`CallGuard`] and uses [`Default`] as initializer.
/// A different initializer can be named via `#[record(init = path::to::function)]`.
///
/// Generic structures cannot own a `static` per concrete type.
/// Implement the trait manually for them and keep the default [`Record::guard`], which looks up
/// the guard of the concrete type in a process-wide registry.
///
/// [`dispatch`]: super::dispatch
/// [`bind_self`]: super::bind_self
pub trait Record: Sized + 'static {
    /// Returns a new instance with all fields set to their default values.
    ///
    /// This is the type-specific initializer called by [`construct`](super::construct).
    fn init() -> Self;

    /// Returns the call guard shared by all instances of this type.
    fn guard() -> &'static CallGuard {
        registry::guard_of::<Self>()
    }
}

#[cfg(feature = "derive")]
pub use moo_list_macros::Record;

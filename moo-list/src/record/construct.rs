// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use core::alloc::Layout;
use core::any::type_name;
use core::ptr::NonNull;

use alloc::boxed::Box;
use log::{error, trace};

use super::traits::Record;
use crate::error::{MooError, Result};

/// Allocates and initializes a new record of type `T`.
///
/// The storage comes from the global allocator and is initialized via [`Record::init`].
/// Afterwards, the guard of `T` is disarmed: no instance counts as dispatched until
/// [`dispatch`](super::dispatch) is called explicitly.
///
/// The record is exclusively owned by the caller until it is dropped.
pub fn construct<T: Record>() -> Result<Box<T>> {
    let record = allocate::<T>()?;

    // The `Box` takes over the allocation we just made with the layout of `T`.
    let record = unsafe {
        record.as_ptr().write(T::init());
        Box::from_raw(record.as_ptr())
    };

    T::guard().disarm();
    trace!("constructed `{}` at {:p}", type_name::<T>(), record);

    Ok(record)
}

/// Allocates uninitialized storage for a `T` with the global allocator.
///
/// Unlike `Box::new`, this reports an exhausted allocator as [`MooError::Allocation`] instead of
/// aborting. The returned memory has the layout `Box<T>` expects, so initializing it and passing it
/// to `Box::from_raw` transfers ownership to a `Box`.
pub(crate) fn allocate<T>() -> Result<NonNull<T>> {
    let layout = Layout::new::<T>();

    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    let ptr = unsafe { alloc::alloc::alloc(layout) }.cast::<T>();

    NonNull::new(ptr).ok_or_else(|| {
        error!(
            "allocating {} bytes for `{}` failed",
            layout.size(),
            type_name::<T>()
        );

        MooError::Allocation {
            type_name: type_name::<T>(),
            size: layout.size(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{dispatch, is_armed, Record};

    #[derive(Record)]
    #[record(init = Settings::with_defaults)]
    struct Settings {
        retries: u8,
        verbose: bool,
    }

    impl Settings {
        fn with_defaults() -> Self {
            Self {
                retries: 3,
                verbose: true,
            }
        }
    }

    #[test]
    fn test_construct_runs_initializer() {
        let settings = construct::<Settings>().unwrap();
        assert_eq!(settings.retries, 3);
        assert!(settings.verbose);
    }

    #[derive(Default, Record)]
    struct Pending {
        value: u64,
    }

    #[test]
    fn test_construct_disarms_guard() {
        let mut first = construct::<Pending>().unwrap();
        dispatch(&mut *first);
        assert!(is_armed::<Pending>());

        let second = construct::<Pending>().unwrap();
        assert!(!is_armed::<Pending>());
        assert_eq!(second.value, 0);
    }

    #[derive(Default, Record)]
    struct Empty;

    #[test]
    fn test_construct_zero_sized() {
        let empty = construct::<Empty>();
        assert!(empty.is_ok());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_allocation_failure() {
        // No allocator can hand out an exbibyte.
        type Huge = [u8; 1 << 60];

        assert_eq!(
            allocate::<Huge>(),
            Err(MooError::Allocation {
                type_name: type_name::<Huge>(),
                size: 1 << 60,
            })
        );
    }
}

// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lists and records report an exhausted allocator as an error.
//!
//! This lives in its own test binary, because it installs a global allocator.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use moo_list::list::MooList;
use moo_list::record::construct;
use moo_list::MooError;

/// Forwards to the system allocator unless failing has been switched on for the current thread.
struct SwitchableAllocator;

thread_local! {
    static FAILING: Cell<bool> = const { Cell::new(false) };
}

unsafe impl GlobalAlloc for SwitchableAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAILING.try_with(Cell::get).unwrap_or(false) {
            std::ptr::null_mut()
        } else {
            System.alloc(layout)
        }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: SwitchableAllocator = SwitchableAllocator;

/// Runs `f` while every allocation on this thread fails.
///
/// `f` must not panic: formatting the panic message would need the allocator.
fn while_failing<R>(f: impl FnOnce() -> R) -> R {
    FAILING.with(|failing| failing.set(true));
    let result = f();
    FAILING.with(|failing| failing.set(false));
    result
}

#[test]
fn test_insert_failure_leaves_list_unchanged() {
    let items = [1u8, 2, 3];
    let mut list = MooList::new();

    let first = list.push_back(&items[0]).unwrap();
    list.push_back(&items[1]).unwrap();

    let (pushed_back, pushed_front, inserted) = while_failing(|| {
        (
            list.push_back(&items[2]),
            list.push_front(&items[2]),
            unsafe { list.insert(Some(first), &items[2]) },
        )
    });

    for result in [pushed_back, pushed_front, inserted] {
        let error = result.unwrap_err();
        assert!(matches!(error, MooError::Allocation { size, .. } if size > 0));
        assert!(error.type_name().contains("Node"));
    }

    assert_eq!(list.len(), 2);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&2));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
    assert_eq!(list.front_node(), Some(first));

    // The list keeps working once memory is available again.
    list.push_back(&items[2]).unwrap();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_construct_failure() {
    let result = while_failing(construct::<MooList<'static, u8>>);

    let error = result.unwrap_err();
    assert!(matches!(error, MooError::Allocation { .. }));
    assert!(error.type_name().contains("MooList"));
}

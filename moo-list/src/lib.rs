// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_std]

extern crate alloc;

// Required for deriving our traits when testing.
#[cfg(test)]
extern crate self as moo_list;

mod error;
pub mod list;
pub mod record;

pub use error::*;

// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

pub type Result<T, E = MooError> = core::result::Result<T, E>;

/// All failures that records and lists can report.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MooError {
    /// The global allocator could not provide memory for a new record or list node.
    #[error("could not allocate {size} bytes for `{type_name}`")]
    Allocation {
        type_name: &'static str,
        size: usize,
    },

    /// A member function of `type_name` ran its preamble without an immediately preceding,
    /// unconsumed [`dispatch`](crate::record::dispatch) on that type.
    ///
    /// This always denotes a programming error at the call site.
    #[error("member function of `{type_name}` called without a preceding dispatch")]
    ProtocolViolation { type_name: &'static str },
}

impl MooError {
    /// Returns the name of the type whose record or node triggered the error.
    pub fn type_name(&self) -> &'static str {
        match self {
            MooError::Allocation { type_name, .. } => type_name,
            MooError::ProtocolViolation { type_name } => type_name,
        }
    }
}

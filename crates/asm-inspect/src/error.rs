// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the analysis crate

use std::{num::ParseIntError, path::PathBuf};

use asm_lexer::{ParseArchitectureError, UnsupportedSimdQuery};
use thiserror::Error;

/// Analysis errors
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("malformed number '{text}' in {directive} directive at byte {position}")]
    MalformedNumber {
        directive: &'static str,
        text: String,
        position: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("{what} index {index} out of range (length {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    UnknownArchitecture(#[from] ParseArchitectureError),

    #[error(transparent)]
    UnsupportedSimd(#[from] UnsupportedSimdQuery),

    #[error("block {index} out of range ({count} blocks)")]
    BlockOutOfRange { index: usize, count: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for analysis operations
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Bounds-checked slice access reporting [`AnalyzeError::IndexOutOfRange`].
pub(crate) fn get<'a, T>(items: &'a [T], index: usize, what: &'static str) -> AnalyzeResult<&'a T> {
    items.get(index).ok_or(AnalyzeError::IndexOutOfRange {
        what,
        index,
        len: items.len(),
    })
}

pub(crate) fn get_mut<'a, T>(
    items: &'a mut [T],
    index: usize,
    what: &'static str,
) -> AnalyzeResult<&'a mut T> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(AnalyzeError::IndexOutOfRange { what, index, len })
}

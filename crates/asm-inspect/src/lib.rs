// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Line, block and control-flow analysis of compiler assembly listings
//!
//! Builds on the `asm-lexer` token stream:
//! - **Lines and blocks**: tokens grouped into typed lines, lines into
//!   blocks split at labels and after conditional branches
//! - **Edges**: branch and jump operands resolved against a two-level
//!   global/local label namespace
//! - **Source locations**: `.file`/`.loc` directives turned into
//!   `file(line, column)` annotations
//! - **Rendering**: block text with optional color markup, plus the byte
//!   spans needed to map a text offset back to its block
//!
//! [`Analyzer`] is the entry point:
//!
//! ```
//! use asm_inspect::{Analyzer, AnalyzerOptions};
//! use asm_lexer::Architecture;
//!
//! let mut analyzer = Analyzer::new();
//! analyzer
//!     .initialize("f:\n\tret\n", Architecture::Intel, AnalyzerOptions::default())
//!     .unwrap();
//! assert_eq!(analyzer.blocks().len(), 1);
//! ```

pub mod analyzer;
pub mod builder;
pub mod error;
pub mod graph;
pub mod labels;
pub mod model;
pub mod options;
pub mod registers;
pub mod render;
pub mod source;

pub use analyzer::Analyzer;
pub use error::{AnalyzeError, AnalyzeResult};
pub use graph::BlockGraph;
pub use model::{Block, BlockKind, BlockSpan, Edge, EdgeDirection, Line, LineKind, LineRef};
pub use options::AnalyzerOptions;
pub use render::Palette;

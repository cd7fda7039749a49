// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Assembly text tokenizer for x86-64, Arm64, WebAssembly and LLVM IR
//!
//! This crate provides:
//! - **Text slices**: zero-copy views into the input buffer, compared by
//!   content so they can key label maps
//! - **Token classification**: per-architecture keyword tables for
//!   instructions, registers and qualifiers
//! - **Tokenization**: a single pass over the text producing tokens that
//!   cover every byte of the input
//! - **Mnemonic descriptions**: one-line explanations of common instructions
//!
//! # Modules
//!
//! - [`slice`]: `TextSlice` and `TextSpan`
//! - [`token`]: `Token`, `TokenKind` and `SimdKind`
//! - [`arch`]: supported dialects and their comment/alignment rules
//! - [`classifier`]: the `TokenClassifier` trait and the `Classifier` handle
//! - [`x86`], [`arm64`], [`wasm`], [`llvm_ir`]: dialect keyword tables
//! - [`tokenizer`]: the scanner
//! - [`describe`]: `lookup_description`

pub mod arch;
pub mod arm64;
pub mod classifier;
pub mod describe;
pub mod llvm_ir;
pub mod slice;
pub mod token;
pub mod tokenizer;
pub mod wasm;
pub mod x86;

pub use arch::{Architecture, ParseArchitectureError, INSTRUCTION_ALIGNMENT};
pub use classifier::{Classifier, KeywordTable, TokenClassifier, UnsupportedSimdQuery};
pub use describe::lookup_description;
pub use slice::{TextSlice, TextSpan};
pub use token::{SimdKind, Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};

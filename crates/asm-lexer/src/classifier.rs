// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-architecture token classification
//!
//! Each architecture provides a [`TokenClassifier`]: a keyword table built
//! once from static mnemonic/register lists, plus the character rules and
//! register/SIMD policies that differ between dialects.
//!
//! [`Classifier`] is the copyable handle the tokenizer and the analysis
//! passes hold. It dispatches by `match` to the shared singletons, so the
//! hot tokenizing path never goes through a trait object.

use std::collections::HashMap;

use thiserror::Error;

use crate::{
    arch::Architecture,
    arm64::ARM64,
    llvm_ir::LLVM_IR,
    token::{SimdKind, TokenKind},
    wasm::WASM,
    x86::X86,
};

/// `simd_kind` was asked of an architecture that defines no SIMD
/// sub-classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("SIMD sub-classification is not defined for {architecture}")]
pub struct UnsupportedSimdQuery {
    pub architecture: Architecture,
}

/// Keyword spelling to token kind map.
///
/// Lookups of text longer than the longest keyword fail without hashing.
#[derive(Debug, Default)]
pub struct KeywordTable {
    kinds: HashMap<&'static str, TokenKind>,
    max_len: usize,
}

impl KeywordTable {
    pub fn builder() -> KeywordTableBuilder {
        KeywordTableBuilder {
            table: KeywordTable::default(),
        }
    }

    /// Kind registered for `text`, or [`TokenKind::Identifier`].
    pub fn lookup(&self, text: &str) -> TokenKind {
        if text.len() > self.max_len {
            return TokenKind::Identifier;
        }
        self.kinds
            .get(text)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Length of the longest registered keyword
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

pub struct KeywordTableBuilder {
    table: KeywordTable,
}

impl KeywordTableBuilder {
    /// Register every spelling in `words` as `kind`. A spelling registered
    /// by an earlier call keeps its first kind.
    pub fn with(mut self, words: &[&'static str], kind: TokenKind) -> Self {
        for &word in words {
            self.table.kinds.entry(word).or_insert(kind);
            self.table.max_len = self.table.max_len.max(word.len());
        }
        self
    }

    pub fn build(self) -> KeywordTable {
        self.table
    }
}

/// Architecture-specific classification capabilities.
pub trait TokenClassifier: Sync {
    fn architecture(&self) -> Architecture;

    fn table(&self) -> &KeywordTable;

    /// Classify an instruction/register/identifier spelling.
    fn classify(&self, text: &str) -> TokenKind {
        self.table().lookup(text)
    }

    /// Whether `c` continues an instruction, register or identifier.
    ///
    /// `.` is included by default for suffixed mnemonics like `b.le`.
    fn is_identifier_or_register_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '@' || c == '.'
    }

    /// Whether `c` may terminate an identifier and be included in it.
    fn accepts_as_identifier_end(&self, _c: char) -> bool {
        false
    }

    /// Whether two register spellings name the same register.
    fn register_equal(&self, a: &str, b: &str) -> bool {
        a == b
    }

    fn simd_kind(&self, _mnemonic: &str) -> Result<SimdKind, UnsupportedSimdQuery> {
        Err(UnsupportedSimdQuery {
            architecture: self.architecture(),
        })
    }
}

/// Handle to the shared classifier of one architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classifier {
    X86,
    Arm64,
    Wasm,
    LlvmIr,
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            Classifier::X86 => {
                let $c = &*X86;
                $body
            }
            Classifier::Arm64 => {
                let $c = &*ARM64;
                $body
            }
            Classifier::Wasm => {
                let $c = &*WASM;
                $body
            }
            Classifier::LlvmIr => {
                let $c = &*LLVM_IR;
                $body
            }
        }
    };
}

impl Classifier {
    pub const fn for_architecture(architecture: Architecture) -> Self {
        match architecture {
            Architecture::Intel => Classifier::X86,
            Architecture::Arm64 => Classifier::Arm64,
            Architecture::Wasm => Classifier::Wasm,
            Architecture::LlvmIr => Classifier::LlvmIr,
        }
    }

    pub fn architecture(self) -> Architecture {
        dispatch!(self, c => c.architecture())
    }

    pub fn classify(self, text: &str) -> TokenKind {
        dispatch!(self, c => c.classify(text))
    }

    pub fn is_identifier_or_register_char(self, ch: char) -> bool {
        dispatch!(self, c => c.is_identifier_or_register_char(ch))
    }

    pub fn accepts_as_identifier_end(self, ch: char) -> bool {
        dispatch!(self, c => c.accepts_as_identifier_end(ch))
    }

    pub fn register_equal(self, a: &str, b: &str) -> bool {
        dispatch!(self, c => c.register_equal(a, b))
    }

    pub fn simd_kind(self, mnemonic: &str) -> Result<SimdKind, UnsupportedSimdQuery> {
        dispatch!(self, c => c.simd_kind(mnemonic))
    }

    pub fn keyword_count(self) -> usize {
        dispatch!(self, c => c.table().len())
    }
}

impl From<Architecture> for Classifier {
    fn from(architecture: Architecture) -> Self {
        Classifier::for_architecture(architecture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_first_kind_wins() {
        let table = KeywordTable::builder()
            .with(&["mov", "ret"], TokenKind::Instruction)
            .with(&["ret"], TokenKind::ReturnInstruction)
            .build();
        assert_eq!(table.lookup("mov"), TokenKind::Instruction);
        assert_eq!(table.lookup("ret"), TokenKind::Instruction);
        assert_eq!(table.lookup("movabs"), TokenKind::Identifier);
        assert_eq!(table.max_len(), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_round_trips_architecture() {
        for arch in Architecture::ALL {
            let classifier = Classifier::for_architecture(arch);
            assert_eq!(classifier.architecture(), arch);
            assert!(classifier.keyword_count() > 0);
        }
    }

    #[test]
    fn test_unsupported_simd_is_an_error() {
        for classifier in [Classifier::Arm64, Classifier::Wasm, Classifier::LlvmIr] {
            let err = classifier.simd_kind("fadd").unwrap_err();
            assert_eq!(err.architecture, classifier.architecture());
        }
        assert!(Classifier::X86.simd_kind("addps").is_ok());
    }

    #[test]
    fn test_default_register_equality_is_exact() {
        assert!(Classifier::Arm64.register_equal("x0", "x0"));
        assert!(!Classifier::Arm64.register_equal("x0", "w0"));
        assert!(!Classifier::Wasm.register_equal("local.", "global."));
    }
}

// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Token model shared by the tokenizer and the analysis passes.

use crate::slice::{TextSlice, TextSpan};

/// Category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Generic assembler directive (`.globl`, `.p2align`, ...)
    Directive,
    /// Data emitting directive (`.byte`, `.short`, `.long`, `.ascii`, `.asciz`)
    DataDirective,
    /// `.file` / `.cv_file`
    SourceFile,
    /// `.loc` / `.cv_loc`
    SourceLocation,
    /// Label declaration or reference
    Label,
    /// `.Lfunc_begin*`
    FunctionBegin,
    /// `.Lfunc_end*`
    FunctionEnd,
    Identifier,
    /// Operand qualifier (`qword`, `ptr`, `lsl`, ...)
    Qualifier,
    Instruction,
    CallInstruction,
    /// Conditional branch (falls through when not taken)
    BranchInstruction,
    /// Unconditional jump
    JumpInstruction,
    ReturnInstruction,
    SimdInstruction,
    Register,
    Number,
    String,
    Comment,
    NewLine,
    /// Whitespace and punctuation between recognized tokens
    Misc,
}

impl TokenKind {
    /// Whether this is one of the instruction kinds (plain, call, branch,
    /// jump, return or SIMD).
    pub fn is_instruction(self) -> bool {
        matches!(
            self,
            TokenKind::Instruction
                | TokenKind::CallInstruction
                | TokenKind::BranchInstruction
                | TokenKind::JumpInstruction
                | TokenKind::ReturnInstruction
                | TokenKind::SimdInstruction
        )
    }
}

/// Sub-classification of a SIMD instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdKind {
    Packed,
    Scalar,
    /// Shuffles, loads, state management and anything not per-lane arithmetic
    Infrastructure,
}

/// A classified run of the input.
///
/// Tokens never own text; `position` and `length` index the input buffer.
/// `aligned_position` is where the token starts once operand columns are
/// padded after short instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
    pub aligned_position: usize,
    pub length: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, position: usize, aligned_position: usize, length: usize) -> Self {
        Self {
            kind,
            position,
            aligned_position,
            length,
        }
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.position, self.length)
    }

    pub fn slice<'a>(&self, text: &'a str) -> TextSlice<'a> {
        TextSlice::new(text, self.position, self.length)
    }

    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        self.slice(text).as_str()
    }

    /// Same token with another kind, used when the semantic pass retags a
    /// branch operand as a label.
    pub fn with_kind(self, kind: TokenKind) -> Self {
        Self { kind, ..self }
    }

    /// Length of the token once rendered. Line breaks always render as a
    /// single `\n`.
    pub fn rendered_len(&self) -> usize {
        if self.kind == TokenKind::NewLine {
            1
        } else {
            self.length
        }
    }
}

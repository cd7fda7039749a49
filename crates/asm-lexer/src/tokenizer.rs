// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Single-pass assembly tokenizer
//!
//! Scans the input byte by byte and yields a flat sequence of [`Token`]s
//! covering every byte exactly once. Dispatch is on the first byte of each
//! token:
//! - `.` starts a directive or a `.L` local label
//! - a letter, `_` or `@` starts an instruction, register or identifier
//! - a digit or `-` starts a number
//! - `"` starts a string
//! - the architecture's comment character starts a comment
//! - `\n`, `\r` or `\r\n` is one line break
//! - anything else is a run of [`TokenKind::Misc`]
//!
//! An instruction, number or string immediately followed by `:` is
//! reclassified as a label.

use crate::{
    arch::{Architecture, INSTRUCTION_ALIGNMENT},
    classifier::Classifier,
    token::{Token, TokenKind},
};

const DATA_DIRECTIVES: &[&str] = &[".long", ".byte", ".short", ".ascii", ".asciz"];

/// Iterator over the tokens of an assembly listing
pub struct Tokenizer<'a> {
    text: &'a str,
    bytes: &'a [u8],
    classifier: Classifier,
    comment_start: u8,
    align_instructions: bool,
    pos: usize,
    /// Distance between byte positions and aligned positions
    shift: usize,
    /// Padding owed by the previous instruction, applied at its first operand
    pending_pad: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, architecture: Architecture) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            classifier: Classifier::for_architecture(architecture),
            comment_start: architecture.comment_start() as u8,
            align_instructions: architecture.aligns_instructions(),
            pos: 0,
            shift: 0,
            pending_pad: None,
        }
    }

    /// Byte offset of the next token
    pub fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_identifier(b: u8) -> bool {
        b.is_ascii_alphabetic() || b == b'_' || b == b'@'
    }

    fn starts_number(b: u8) -> bool {
        b.is_ascii_digit() || b == b'-'
    }

    /// Whether `b` starts any token other than [`TokenKind::Misc`].
    fn starts_token(&self, b: u8) -> bool {
        matches!(b, b'\r' | b'\n' | b'.' | b'"')
            || Self::starts_identifier(b)
            || Self::starts_number(b)
            || b == self.comment_start
    }

    fn followed_by_colon(&self) -> bool {
        self.peek() == Some(b':')
    }

    fn scan_directive(&mut self, start: usize) -> TokenKind {
        self.pos += 1;
        let is_label = self.peek() == Some(b'L');
        while let Some(b) = self.peek() {
            if !(b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'@')) {
                break;
            }
            self.pos += 1;
        }

        let text = &self.text[start..self.pos];
        if is_label {
            return if text.starts_with(".Lfunc_begin") {
                TokenKind::FunctionBegin
            } else if text.starts_with(".Lfunc_end") {
                TokenKind::FunctionEnd
            } else {
                TokenKind::Label
            };
        }

        match text {
            ".file" | ".cv_file" => TokenKind::SourceFile,
            ".loc" | ".cv_loc" => TokenKind::SourceLocation,
            _ if DATA_DIRECTIVES.contains(&text) => TokenKind::DataDirective,
            _ => TokenKind::Directive,
        }
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.pos += 1;
        while let Some(b) = self.peek() {
            if !self.classifier.is_identifier_or_register_char(b as char) {
                break;
            }
            self.pos += 1;
        }
        if let Some(b) = self.peek() {
            if self.classifier.accepts_as_identifier_end(b as char) {
                self.pos += 1;
            }
        }

        match self.classifier.classify(&self.text[start..self.pos]) {
            TokenKind::Identifier if self.followed_by_colon() => TokenKind::Label,
            kind => kind,
        }
    }

    fn scan_number(&mut self) -> TokenKind {
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while let Some(b) = self.peek() {
            if !(b.is_ascii_hexdigit() || b == b'x' || b == b'.') {
                break;
            }
            self.pos += 1;
        }

        if self.followed_by_colon() {
            TokenKind::Label
        } else {
            TokenKind::Number
        }
    }

    fn scan_string(&mut self) -> TokenKind {
        self.pos += 1;
        loop {
            match self.peek() {
                None => break,
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') if self.peek_at(1) == Some(b'"') => self.pos += 2,
                Some(_) => self.pos += 1,
            }
        }

        if self.followed_by_colon() {
            TokenKind::Label
        } else {
            TokenKind::String
        }
    }

    fn scan_comment(&mut self) -> TokenKind {
        while let Some(b) = self.peek() {
            if b == b'\n' || b == b'\r' {
                break;
            }
            self.pos += 1;
        }
        TokenKind::Comment
    }

    fn scan_newline(&mut self) -> TokenKind {
        if self.peek() == Some(b'\r') && self.peek_at(1) == Some(b'\n') {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        TokenKind::NewLine
    }

    fn scan_misc(&mut self) -> TokenKind {
        self.pos += 1;
        while let Some(b) = self.peek() {
            if self.starts_token(b) {
                break;
            }
            self.pos += 1;
        }
        TokenKind::Misc
    }

    /// Settle padding owed by a preceding instruction.
    ///
    /// Whitespace after the mnemonic keeps its own aligned position and
    /// shifts everything after it; any other operand is shifted itself.
    /// A line break cancels the padding.
    fn apply_pending_pad(&mut self, token: &mut Token) {
        let Some(pad) = self.pending_pad.take() else {
            return;
        };
        match token.kind {
            TokenKind::NewLine => {}
            TokenKind::Misc => self.shift += pad,
            _ => {
                token.aligned_position += pad;
                self.shift += pad;
            }
        }
    }

    fn prepare_alignment(&mut self, token: &Token) {
        let operands_follow = !matches!(self.peek(), None | Some(b'\n') | Some(b'\r'));
        if self.align_instructions
            && token.kind.is_instruction()
            && token.length < INSTRUCTION_ALIGNMENT
            && operands_follow
        {
            self.pending_pad = Some(INSTRUCTION_ALIGNMENT - token.length);
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let c = self.peek()?;
        let start = self.pos;

        let kind = match c {
            b'.' => self.scan_directive(start),
            _ if Self::starts_identifier(c) => self.scan_identifier(start),
            _ if Self::starts_number(c) => self.scan_number(),
            b'"' => self.scan_string(),
            _ if c == self.comment_start => self.scan_comment(),
            b'\r' | b'\n' => self.scan_newline(),
            _ => self.scan_misc(),
        };

        let mut token = Token::new(kind, start, start + self.shift, self.pos - start);
        self.apply_pending_pad(&mut token);
        self.prepare_alignment(&token);
        Some(token)
    }
}

/// Tokenize a whole listing.
pub fn tokenize(text: &str, architecture: Architecture) -> Vec<Token> {
    Tokenizer::new(text, architecture).collect()
}

// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Block rendering
//!
//! Blocks are rendered back to text one line at a time. Colored output
//! wraps each token in `<color=#RRGGBB>...</color>` markup. Under Intel
//! syntax, instructions shorter than [`INSTRUCTION_ALIGNMENT`] are padded
//! with spaces so operands line up; an instruction with nothing after it on
//! its line is never padded.
//!
//! [`line_len`] is the single source of truth for how many bytes a line
//! renders to without color. The builder uses it to lay out block text
//! spans, so offsets into the rendered text map back to blocks exactly.

use std::{collections::HashMap, fmt::Write as _};

use asm_lexer::{Architecture, Classifier, SimdKind, Token, TokenKind, INSTRUCTION_ALIGNMENT};

use crate::{
    error::{get, AnalyzeError, AnalyzeResult},
    model::{Block, Line, LineKind},
};

/// Markup colors, one per token category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub line_directive: &'static str,
    pub directive: &'static str,
    pub identifier: &'static str,
    pub qualifier: &'static str,
    pub instruction: &'static str,
    pub simd: &'static str,
    pub simd_packed: &'static str,
    pub simd_scalar: &'static str,
    pub register: &'static str,
    pub number: &'static str,
    pub string: &'static str,
    pub comment: &'static str,
}

impl Palette {
    pub const DARK: Palette = Palette {
        line_directive: "#FFFF00",
        directive: "#CCCCCC",
        identifier: "#d4d4d4",
        qualifier: "#DCDCAA",
        instruction: "#4EC9B0",
        simd: "#C586C0",
        simd_packed: "#A586C0",
        simd_scalar: "#E586C0",
        register: "#d7ba7d",
        number: "#9cdcfe",
        string: "#ce9178",
        comment: "#6A9955",
    };

    pub const LIGHT: Palette = Palette {
        line_directive: "#888800",
        directive: "#444444",
        identifier: "#1c1c1c",
        qualifier: "#267f99",
        instruction: "#0451a5",
        simd: "#0000ff",
        simd_packed: "#8000ff",
        simd_scalar: "#8050ff",
        register: "#811f3f",
        number: "#007ACC",
        string: "#a31515",
        comment: "#008000",
    };

    pub fn for_skin(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// Spaces rendered after token `index` of a line.
pub fn padding_after(architecture: Architecture, line_tokens: &[Token], index: usize) -> usize {
    let Some(token) = line_tokens.get(index) else {
        return 0;
    };
    if !architecture.aligns_instructions()
        || !token.kind.is_instruction()
        || token.length >= INSTRUCTION_ALIGNMENT
    {
        return 0;
    }
    match line_tokens.get(index + 1) {
        Some(next) if next.kind != TokenKind::NewLine => INSTRUCTION_ALIGNMENT - token.length,
        _ => 0,
    }
}

/// Uncolored rendered length of an ordinary (non source-location) line.
pub fn line_len(architecture: Architecture, line_tokens: &[Token]) -> usize {
    line_tokens
        .iter()
        .enumerate()
        .map(|(i, t)| t.rendered_len() + padding_after(architecture, line_tokens, i))
        .sum()
}

/// A rendered block and the starting column of every token on each of its
/// lines. Source-location lines have no columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBlock {
    pub text: String,
    pub columns: Vec<Vec<usize>>,
}

/// Renders blocks of one analyzed listing
pub struct Renderer<'a> {
    pub text: &'a str,
    pub architecture: Architecture,
    pub classifier: Classifier,
    pub tokens: &'a [Token],
    pub lines: &'a [Line],
    pub blocks: &'a [Block],
    /// Source annotations by line index
    pub annotations: &'a HashMap<usize, String>,
    pub palette: Palette,
    pub smell_test: bool,
}

impl Renderer<'_> {
    pub fn render_block(&self, index: usize, colored: bool) -> AnalyzeResult<RenderedBlock> {
        let block = get(self.blocks, index, "block")?;
        let mut rendered = RenderedBlock {
            text: String::new(),
            columns: Vec::with_capacity(block.length),
        };
        for line_index in block.lines() {
            let line = get(self.lines, line_index, "line")?;
            let columns = self.render_line(line_index, line, colored, &mut rendered.text)?;
            rendered.columns.push(columns);
        }
        Ok(rendered)
    }

    /// Render line `line_index` into `out`, returning its token columns.
    pub fn render_line(
        &self,
        line_index: usize,
        line: &Line,
        colored: bool,
        out: &mut String,
    ) -> AnalyzeResult<Vec<usize>> {
        if let LineKind::SourceFileLocation { .. } = line.kind {
            self.render_source_location(line_index, colored, out);
            return Ok(Vec::new());
        }

        let tokens = self
            .tokens
            .get(line.tokens())
            .ok_or(AnalyzeError::IndexOutOfRange {
                what: "token",
                index: line.tokens().end,
                len: self.tokens.len(),
            })?;

        let mut columns = Vec::with_capacity(tokens.len());
        let mut column = 0;
        for (i, token) in tokens.iter().enumerate() {
            columns.push(column);
            if token.kind == TokenKind::NewLine {
                out.push('\n');
                column += 1;
                continue;
            }

            let text = token.text(self.text);
            match self.color_of(token, text).filter(|_| colored) {
                Some(color) => {
                    let _ = write!(out, "<color={color}>{text}</color>");
                }
                None => out.push_str(text),
            }
            let padding = padding_after(self.architecture, tokens, i);
            out.extend(std::iter::repeat(' ').take(padding));
            column += text.len() + padding;
        }
        Ok(columns)
    }

    fn render_source_location(&self, line_index: usize, colored: bool, out: &mut String) {
        if let Some(annotation) = self.annotations.get(&line_index) {
            if colored {
                let _ = write!(out, "<color={}>{annotation}</color>", self.palette.line_directive);
            } else {
                out.push_str(annotation);
            }
        }
        out.push('\n');
    }

    fn color_of(&self, token: &Token, text: &str) -> Option<&'static str> {
        let palette = &self.palette;
        let color = match token.kind {
            TokenKind::Directive
            | TokenKind::DataDirective
            | TokenKind::SourceFile
            | TokenKind::SourceLocation
            | TokenKind::FunctionBegin
            | TokenKind::FunctionEnd => palette.directive,
            TokenKind::Label | TokenKind::Identifier => palette.identifier,
            TokenKind::Qualifier => palette.qualifier,
            TokenKind::Instruction
            | TokenKind::CallInstruction
            | TokenKind::BranchInstruction
            | TokenKind::JumpInstruction
            | TokenKind::ReturnInstruction => palette.instruction,
            TokenKind::SimdInstruction if self.smell_test => {
                match self.classifier.simd_kind(text) {
                    Ok(SimdKind::Packed) => palette.simd_packed,
                    Ok(SimdKind::Scalar) => palette.simd_scalar,
                    Ok(SimdKind::Infrastructure) | Err(_) => palette.simd,
                }
            }
            TokenKind::SimdInstruction => palette.simd,
            TokenKind::Register => palette.register,
            TokenKind::Number => palette.number,
            TokenKind::String => palette.string,
            TokenKind::Comment => palette.comment,
            TokenKind::NewLine | TokenKind::Misc => return None,
        };
        Some(color)
    }
}

/// Index of the token rendered at `column`, given the token columns of a
/// line and the line's tokens.
///
/// Columns inside instruction padding belong to no token.
pub fn token_at_column(line_tokens: &[Token], columns: &[usize], column: usize) -> Option<usize> {
    let index = columns.partition_point(|&c| c <= column).checked_sub(1)?;
    let token = line_tokens.get(index)?;
    let start = *columns.get(index)?;
    (column < start + token.rendered_len()).then_some(index)
}

// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Line and block assembly
//!
//! Consumes the token stream once, grouping tokens into lines and lines into
//! blocks. A new block starts:
//! - at a line whose first token is a label
//! - after a conditional branch line (the fallthrough target)
//!
//! `.file` and `.loc` lines are handed to [`SourceFiles`] as they complete,
//! label declarations and branch operands to [`LabelTable`]. Branch operands
//! are resolved into edges once the whole listing has been assembled.

use std::{collections::HashMap, mem};

use asm_lexer::{Architecture, Classifier, Token, TokenKind, Tokenizer};
use tracing::debug;

use crate::{
    error::AnalyzeResult,
    labels::LabelTable,
    model::{Block, BlockKind, BlockSpan, Line, LineKind, LineRef},
    options::AnalyzerOptions,
    registers::RegisterIndex,
    render,
    source::SourceFiles,
};

/// Everything derived from one listing.
///
/// Holds positions into the analyzed text, never the text itself.
#[derive(Debug)]
pub struct Analysis {
    pub architecture: Architecture,
    pub tokens: Vec<Token>,
    pub lines: Vec<Line>,
    pub blocks: Vec<Block>,
    /// Rendered text range of each block, ordered and non-overlapping
    pub spans: Vec<BlockSpan>,
    pub sources: SourceFiles,
    /// Annotation of each source-location line, as of the line's `.loc`.
    /// Lines with an empty annotation have no entry.
    pub annotations: HashMap<usize, String>,
    pub registers: RegisterIndex,
}

/// Assemble `text` into lines, blocks and edges.
pub fn analyze(
    text: &str,
    architecture: Architecture,
    options: &AnalyzerOptions,
) -> AnalyzeResult<Analysis> {
    AnalysisBuilder::new(text, architecture, options).build()
}

/// Line kind fixed by the first significant token. A label only declares
/// when it opens the line.
pub fn line_kind(line_tokens: &[Token]) -> LineKind {
    for (i, token) in line_tokens.iter().enumerate() {
        let kind = match token.kind {
            TokenKind::Directive => LineKind::Directive,
            TokenKind::SourceFile => LineKind::SourceFile,
            TokenKind::SourceLocation => LineKind::SourceLocation,
            TokenKind::DataDirective => LineKind::Data,
            TokenKind::Instruction | TokenKind::SimdInstruction => LineKind::Code,
            TokenKind::BranchInstruction => LineKind::CodeBranch,
            TokenKind::JumpInstruction => LineKind::CodeJump,
            TokenKind::CallInstruction => LineKind::CodeCall,
            TokenKind::ReturnInstruction => LineKind::CodeReturn,
            TokenKind::Label if i == 0 => LineKind::LabelDeclaration,
            TokenKind::Comment => LineKind::Comment,
            TokenKind::FunctionBegin => LineKind::FunctionBegin,
            TokenKind::FunctionEnd => LineKind::FunctionEnd,
            _ => continue,
        };
        return kind;
    }
    LineKind::Empty
}

/// Line kinds seen in the open block
#[derive(Debug, Default, Clone, Copy)]
struct KindFlags {
    code: bool,
    data: bool,
    directive: bool,
}

impl KindFlags {
    fn observe(&mut self, kind: LineKind) {
        match kind {
            LineKind::Directive => self.directive = true,
            LineKind::Data => self.data = true,
            LineKind::SourceFileLocation { .. } => self.code = true,
            kind if kind.is_code() => self.code = true,
            _ => {}
        }
    }

    /// Code wins over data, data over directives.
    fn block_kind(self) -> Option<BlockKind> {
        if self.code {
            Some(BlockKind::Code)
        } else if self.data {
            Some(BlockKind::Data)
        } else if self.directive {
            Some(BlockKind::Directive)
        } else {
            None
        }
    }
}

struct AnalysisBuilder<'a> {
    text: &'a str,
    architecture: Architecture,
    options: AnalyzerOptions,
    tokens: Vec<Token>,
    lines: Vec<Line>,
    blocks: Vec<Block>,
    spans: Vec<BlockSpan>,
    sources: SourceFiles,
    annotations: HashMap<usize, String>,
    registers: RegisterIndex,
    labels: LabelTable<'a>,
    /// The open block, at index `blocks.len()`
    block: Block,
    flags: KindFlags,
    /// Rendered offset where the open block starts
    block_start: usize,
    /// Rendered length of everything assembled so far
    text_offset: usize,
    /// First token of the open line
    line_start: usize,
    /// The last line was a conditional branch
    split_pending: bool,
}

impl<'a> AnalysisBuilder<'a> {
    fn new(text: &'a str, architecture: Architecture, options: &AnalyzerOptions) -> Self {
        Self {
            text,
            architecture,
            options: *options,
            tokens: Vec::with_capacity(text.len() / 7),
            lines: Vec::new(),
            blocks: Vec::new(),
            spans: Vec::new(),
            sources: SourceFiles::new(),
            annotations: HashMap::new(),
            registers: RegisterIndex::new(),
            labels: LabelTable::new(),
            block: Block::new(BlockKind::Block, 0),
            flags: KindFlags::default(),
            block_start: 0,
            text_offset: 0,
            line_start: 0,
            split_pending: false,
        }
    }

    fn build(mut self) -> AnalyzeResult<Analysis> {
        let mut tokenizer = Tokenizer::new(self.text, self.architecture);
        if self.options.skip_header_line {
            let _ = tokenizer.by_ref().find(|t| t.kind == TokenKind::NewLine);
        }

        for token in tokenizer {
            if self.tokens.len() == self.line_start {
                self.begin_line(&token);
            }
            self.tokens.push(token);
            if token.kind == TokenKind::NewLine {
                self.finish_line()?;
            }
        }
        if self.tokens.len() > self.line_start {
            self.finish_line()?;
        }
        self.close_block();

        let resolved = self
            .labels
            .resolve(self.text, &self.lines, &mut self.blocks)?;
        debug!(
            architecture = %self.architecture,
            tokens = self.tokens.len(),
            lines = self.lines.len(),
            blocks = self.blocks.len(),
            references = self.labels.pending().len(),
            resolved,
            "assembled listing"
        );

        Ok(Analysis {
            architecture: self.architecture,
            tokens: self.tokens,
            lines: self.lines,
            blocks: self.blocks,
            spans: self.spans,
            sources: self.sources,
            annotations: self.annotations,
            registers: self.registers,
        })
    }

    fn begin_line(&mut self, first: &Token) {
        if self.split_pending || first.kind == TokenKind::Label {
            self.close_block();
        }
        self.split_pending = false;
    }

    /// Push the open block, if it has lines, and open the next one.
    fn close_block(&mut self) {
        if self.block.length == 0 {
            return;
        }
        let next = Block::new(BlockKind::None, self.lines.len());
        let mut block = mem::replace(&mut self.block, next);
        if let Some(kind) = mem::take(&mut self.flags).block_kind() {
            block.kind = kind;
        }
        self.blocks.push(block);
        self.spans.push(BlockSpan {
            start: self.block_start,
            end: self.text_offset,
        });
        self.block_start = self.text_offset;
    }

    fn finish_line(&mut self) -> AnalyzeResult<()> {
        let start = self.line_start;
        let at = LineRef::new(self.blocks.len(), self.block.length);
        let line_tokens = &self.tokens[start..];

        let kind = match line_kind(line_tokens) {
            LineKind::SourceFile => {
                self.sources
                    .register_file(self.text, line_tokens, self.options.load_source_files)?;
                self.tokens.truncate(start);
                return Ok(());
            }
            LineKind::SourceLocation => self.sources.resolve_location(self.text, line_tokens)?,
            LineKind::LabelDeclaration => {
                if let Some(label) = line_tokens.first() {
                    self.labels.declare(label.slice(self.text), at);
                }
                LineKind::LabelDeclaration
            }
            kind @ (LineKind::CodeBranch | LineKind::CodeJump) => {
                self.record_branch_target(at);
                kind
            }
            kind => kind,
        };

        let line_tokens = &self.tokens[start..];
        self.text_offset += match kind {
            LineKind::SourceFileLocation { file, line, column } => {
                let annotation =
                    self.sources
                        .annotation(self.architecture.comment_start(), file, line, column);
                let len = annotation.len() + 1;
                if !annotation.is_empty() {
                    self.annotations.insert(self.lines.len(), annotation);
                }
                len
            }
            _ => render::line_len(self.architecture, line_tokens),
        };

        let registers = line_tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Register)
            .map(|t| t.text(self.text).to_string())
            .collect();
        self.registers.push_line(self.lines.len(), registers);

        self.lines.push(Line {
            kind,
            token_index: start,
            length: line_tokens.len(),
        });
        self.block.length += 1;
        self.flags.observe(kind);
        self.split_pending = kind == LineKind::CodeBranch;
        self.line_start = self.tokens.len();
        Ok(())
    }

    /// Record the label a branch or jump line targets.
    ///
    /// The target is the first operand that is not a register or number
    /// (`cbz x0, .LBB0_2`, `tbz w1, #3, .LBB0_4`). Identifiers and strings
    /// there become labels.
    fn record_branch_target(&mut self, at: LineRef) {
        let operand = self.tokens[self.line_start..]
            .iter_mut()
            .skip_while(|t| {
                !matches!(
                    t.kind,
                    TokenKind::BranchInstruction | TokenKind::JumpInstruction
                )
            })
            .skip(1)
            .find(|t| {
                !matches!(
                    t.kind,
                    TokenKind::Misc | TokenKind::Register | TokenKind::Number
                )
            });

        if let Some(token) = operand.filter(|t| {
            matches!(
                t.kind,
                TokenKind::Label | TokenKind::Identifier | TokenKind::String
            )
        }) {
            token.kind = TokenKind::Label;
            self.labels.reference(at, token.span());
        }
    }
}

impl Analysis {
    pub fn classifier(&self) -> Classifier {
        Classifier::for_architecture(self.architecture)
    }

    /// Rendered length of every block together
    pub fn text_len(&self) -> usize {
        self.spans.last().map_or(0, |span| span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeDirection;

    fn build(text: &str, architecture: Architecture) -> Analysis {
        let options = AnalyzerOptions::default().with_load_source_files(false);
        analyze(text, architecture, &options).unwrap()
    }

    fn line_kinds(analysis: &Analysis) -> Vec<LineKind> {
        analysis.lines.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_line_kinds() {
        let text = "\t.text\nmain:\n\tmov eax, 1\n\tcall foo\n\tjne .L1\n\tjmp .L2\n\tret\n\t.byte 1\n# hi\n\n  .L1:\n";
        let analysis = build(text, Architecture::Intel);
        assert_eq!(
            line_kinds(&analysis),
            vec![
                LineKind::Directive,
                LineKind::LabelDeclaration,
                LineKind::Code,
                LineKind::CodeCall,
                LineKind::CodeBranch,
                LineKind::CodeJump,
                LineKind::CodeReturn,
                LineKind::Data,
                LineKind::Comment,
                LineKind::Empty,
                LineKind::Empty,
            ]
        );
    }

    #[test]
    fn test_blocks_split_at_labels_and_after_branches() {
        let text = "\t.text\nf:\n\tcmp eax, 0\n\tje .LBB0_2\n\tinc eax\n.LBB0_2:\n\tret\n";
        let analysis = build(text, Architecture::Intel);
        let shape: Vec<_> = analysis
            .blocks
            .iter()
            .map(|b| (b.kind, b.line_index, b.length))
            .collect();
        assert_eq!(
            shape,
            vec![
                (BlockKind::Directive, 0, 1),
                (BlockKind::Code, 1, 3),
                (BlockKind::Code, 4, 1),
                (BlockKind::Code, 5, 2),
            ]
        );

        // conditional branch: explicit target plus fallthrough
        let targets: Vec<_> = analysis.blocks[1].outbound().map(|e| e.target).collect();
        assert_eq!(targets, vec![LineRef::new(2, 0), LineRef::new(3, 0)]);
        assert_eq!(analysis.blocks[2].inbound().count(), 1);
        assert_eq!(analysis.blocks[3].inbound().count(), 1);
        assert!(analysis.blocks[3]
            .edges
            .iter()
            .all(|e| e.direction == EdgeDirection::Inbound && e.target == LineRef::new(1, 2)));
    }

    #[test]
    fn test_first_block_kind_without_content() {
        let analysis = build("\n# banner\nf:\n\tret\n", Architecture::Intel);
        assert_eq!(analysis.blocks[0].kind, BlockKind::Block);
        assert_eq!(analysis.blocks[1].kind, BlockKind::Code);
    }

    #[test]
    fn test_partitions() {
        let text = "a:\n\tjmp b\nb:\n\tret\n\t.long 4";
        let analysis = build(text, Architecture::Intel);
        let mut next_token = 0;
        for line in &analysis.lines {
            assert_eq!(line.token_index, next_token);
            next_token += line.length;
        }
        assert_eq!(next_token, analysis.tokens.len());

        let mut next_line = 0;
        for block in &analysis.blocks {
            assert_eq!(block.line_index, next_line);
            next_line += block.length;
        }
        assert_eq!(next_line, analysis.lines.len());
    }

    #[test]
    fn test_spans_follow_rendered_lengths() {
        // `jmp` is padded to 10 columns, the bare `ret` is not
        let text = "f:\n\tjmp f\n\tret\n";
        let analysis = build(text, Architecture::Intel);
        assert_eq!(
            analysis.spans,
            vec![BlockSpan {
                start: 0,
                end: 3 + (1 + 10 + 1 + 1 + 1) + 5
            }]
        );
    }

    #[test]
    fn test_file_lines_are_consumed() {
        let text = "\t.file 1 \"a.c\"\n\t.loc 1 3 0\n\tret\n";
        let analysis = build(text, Architecture::Intel);
        assert_eq!(analysis.lines.len(), 2);
        assert_eq!(
            analysis.lines[0].kind,
            LineKind::SourceFileLocation {
                file: 1,
                line: 3,
                column: 0
            }
        );
        assert_eq!(analysis.lines[0].token_index, 0);
        assert_eq!(analysis.sources.get(1).unwrap().name, "a.c");
        assert_eq!(
            analysis.annotations.get(&0).map(String::as_str),
            Some("# a.c(3, 1)")
        );
        // "# a.c(3, 1)\n" then "\tret\n"
        assert_eq!(analysis.text_len(), 12 + 5);
    }

    #[test]
    fn test_branch_operand_becomes_label() {
        let text = "\tcbz x0, done\n\tb.ne \"quoted\"\n";
        let analysis = build(text, Architecture::Arm64);
        let labels: Vec<_> = analysis
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Label)
            .map(|t| t.text(text))
            .collect();
        assert_eq!(labels, vec!["done", "\"quoted\""]);
    }

    #[test]
    fn test_registers_per_line() {
        let text = "\tmov rax, rbx\n\tret\n\tadd eax, ecx\n";
        let analysis = build(text, Architecture::Intel);
        assert_eq!(
            analysis.registers.registers_on_line(0).unwrap(),
            &["rax".to_string(), "rbx".to_string()]
        );
        assert_eq!(analysis.registers.registers_on_line(1), None);
        assert_eq!(analysis.registers.registers_on_line(2).unwrap().len(), 2);
    }

    #[test]
    fn test_skip_header_line() {
        let options = AnalyzerOptions::default().with_skip_header_line(true);
        let text = "While compiling job: f\n\tret\n";
        let analysis = analyze(text, Architecture::Intel, &options).unwrap();
        assert_eq!(line_kinds(&analysis), vec![LineKind::CodeReturn]);
        assert_eq!(analysis.text_len(), 5);
    }

    #[test]
    fn test_empty_input() {
        let analysis = build("", Architecture::Wasm);
        assert!(analysis.tokens.is_empty());
        assert!(analysis.lines.is_empty());
        assert!(analysis.blocks.is_empty());
        assert_eq!(analysis.text_len(), 0);
    }
}

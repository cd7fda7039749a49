// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Analyzer facade
//!
//! [`Analyzer`] owns one listing and everything derived from it. Blocks are
//! rendered lazily and cached in the configured color mode; every query
//! answers from the last successful [`Analyzer::initialize`].

use std::{cell::OnceCell, fs, path::Path};

use asm_lexer::{
    lookup_description, Architecture, Classifier, SimdKind, TextSlice, Token,
};
use tracing::{info, warn};

use crate::{
    builder::{analyze, Analysis},
    error::{AnalyzeError, AnalyzeResult},
    model::{Block, BlockSpan, Line, LineKind},
    options::AnalyzerOptions,
    registers::dedup_registers,
    render::{self, Palette, RenderedBlock, Renderer},
};

struct State {
    analysis: Analysis,
    rendered: Vec<OnceCell<RenderedBlock>>,
}

/// Analyzes one assembly listing at a time.
#[derive(Default)]
pub struct Analyzer {
    input: String,
    options: AnalyzerOptions,
    state: Option<State>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `input`, replacing whatever was analyzed before.
    ///
    /// On failure the analyzer is left empty and the error is returned.
    pub fn initialize(
        &mut self,
        input: impl Into<String>,
        architecture: Architecture,
        options: AnalyzerOptions,
    ) -> AnalyzeResult<()> {
        self.reset();
        self.input = input.into();
        self.options = options;

        match analyze(&self.input, architecture, &options) {
            Ok(analysis) => {
                let rendered = analysis.blocks.iter().map(|_| OnceCell::new()).collect();
                self.state = Some(State { analysis, rendered });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, %architecture, "failed to analyze listing");
                self.reset();
                Err(e)
            }
        }
    }

    /// Like [`Analyzer::initialize`], naming the architecture.
    pub fn initialize_named(
        &mut self,
        input: impl Into<String>,
        architecture: &str,
        options: AnalyzerOptions,
    ) -> AnalyzeResult<()> {
        let architecture = match architecture.parse::<Architecture>() {
            Ok(architecture) => architecture,
            Err(e) => {
                warn!(error = %e, "failed to analyze listing");
                self.reset();
                return Err(e.into());
            }
        };
        self.initialize(input, architecture, options)
    }

    /// Read and analyze the listing at `path`.
    pub fn initialize_from_file(
        &mut self,
        path: impl AsRef<Path>,
        architecture: Architecture,
        options: AnalyzerOptions,
    ) -> AnalyzeResult<()> {
        let path = path.as_ref();
        let input = match fs::read_to_string(path) {
            Ok(input) => input,
            Err(source) => {
                self.reset();
                return Err(AnalyzeError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        info!(path = %path.display(), bytes = input.len(), "loaded listing");
        self.initialize(input, architecture, options)
    }

    /// Drop the input and everything derived from it.
    pub fn reset(&mut self) {
        self.input.clear();
        self.state = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    pub fn architecture(&self) -> Option<Architecture> {
        self.analysis().map(|a| a.architecture)
    }

    fn analysis(&self) -> Option<&Analysis> {
        self.state.as_ref().map(|s| &s.analysis)
    }

    fn classifier(&self) -> Option<Classifier> {
        self.analysis().map(Analysis::classifier)
    }

    pub fn tokens(&self) -> &[Token] {
        self.analysis()
            .map(|a| a.tokens.as_slice())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> &[Line] {
        self.analysis()
            .map(|a| a.lines.as_slice())
            .unwrap_or_default()
    }

    pub fn blocks(&self) -> &[Block] {
        self.analysis()
            .map(|a| a.blocks.as_slice())
            .unwrap_or_default()
    }

    pub fn block_spans(&self) -> &[BlockSpan] {
        self.analysis()
            .map(|a| a.spans.as_slice())
            .unwrap_or_default()
    }

    pub fn block_span(&self, index: usize) -> Option<BlockSpan> {
        self.block_spans().get(index).copied()
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens().get(index)
    }

    pub fn token_slice(&self, index: usize) -> Option<TextSlice<'_>> {
        self.token(index).map(|t| t.slice(&self.input))
    }

    pub fn token_text(&self, index: usize) -> Option<&str> {
        self.token_slice(index).map(|s| s.as_str())
    }

    fn renderer<'a>(&'a self, analysis: &'a Analysis) -> Renderer<'a> {
        Renderer {
            text: &self.input,
            architecture: analysis.architecture,
            classifier: analysis.classifier(),
            tokens: &analysis.tokens,
            lines: &analysis.lines,
            blocks: &analysis.blocks,
            annotations: &analysis.annotations,
            palette: Palette::for_skin(self.options.dark_skin),
            smell_test: self.options.smell_test,
        }
    }

    fn check_block(&self, index: usize) -> AnalyzeResult<()> {
        let count = self.blocks().len();
        if index < count {
            Ok(())
        } else {
            Err(AnalyzeError::BlockOutOfRange { index, count })
        }
    }

    fn rendered_block(&self, index: usize) -> AnalyzeResult<&RenderedBlock> {
        self.check_block(index)?;
        let state = self
            .state
            .as_ref()
            .ok_or(AnalyzeError::BlockOutOfRange { index, count: 0 })?;
        let cell = crate::error::get(&state.rendered, index, "render cache")?;
        if let Some(rendered) = cell.get() {
            return Ok(rendered);
        }
        let rendered = self
            .renderer(&state.analysis)
            .render_block(index, self.options.syntax_coloring)?;
        Ok(cell.get_or_init(|| rendered))
    }

    /// Text of block `index` in the configured color mode. Cached.
    pub fn render_block_text(&self, index: usize) -> AnalyzeResult<&str> {
        self.rendered_block(index).map(|r| r.text.as_str())
    }

    /// Text of block `index` in the given color mode, rendered afresh.
    pub fn render_block_text_uncached(&self, index: usize, colored: bool) -> AnalyzeResult<String> {
        self.check_block(index)?;
        let state = self
            .state
            .as_ref()
            .ok_or(AnalyzeError::BlockOutOfRange { index, count: 0 })?;
        Ok(self
            .renderer(&state.analysis)
            .render_block(index, colored)?
            .text)
    }

    /// Every block rendered in the configured color mode, in order. The raw
    /// input when nothing has been analyzed.
    pub fn render_full_text(&self) -> AnalyzeResult<String> {
        if !self.is_initialized() {
            return Ok(self.input.clone());
        }
        let mut out = String::new();
        for index in 0..self.blocks().len() {
            out.push_str(self.render_block_text(index)?);
        }
        Ok(out)
    }

    /// Block whose uncolored rendered text covers `offset`.
    pub fn find_block_by_text_offset(&self, offset: usize) -> Option<usize> {
        self.find_block_by_text_offset_from(offset, 0)
    }

    /// Like [`Analyzer::find_block_by_text_offset`], only considering
    /// blocks from `search_start` on.
    pub fn find_block_by_text_offset_from(&self, offset: usize, search_start: usize) -> Option<usize> {
        let spans = self.block_spans().get(search_start..)?;
        let i = spans.partition_point(|span| span.end <= offset);
        spans
            .get(i)
            .filter(|span| span.contains(offset))
            .map(|_| search_start + i)
    }

    /// Token rendered at `column` of line `line_number` of block
    /// `block_index`, as `(token index, line index)`.
    ///
    /// Source annotation lines and columns inside instruction padding have
    /// no token.
    pub fn token_index_at_column(
        &self,
        block_index: usize,
        line_number: usize,
        column: usize,
    ) -> Option<(usize, usize)> {
        let analysis = self.analysis()?;
        let block = analysis.blocks.get(block_index)?;
        if line_number >= block.length {
            return None;
        }
        let line_index = block.line_index + line_number;
        let line = analysis.lines.get(line_index)?;
        if matches!(line.kind, LineKind::SourceFileLocation { .. }) {
            return None;
        }

        let rendered = self.rendered_block(block_index).ok()?;
        let columns = rendered.columns.get(line_number)?;
        let tokens = analysis.tokens.get(line.tokens())?;
        let index = render::token_at_column(tokens, columns, column)?;
        Some((line.token_index + index, line_index))
    }

    pub fn registers_on_line(&self, line_index: usize) -> Option<&[String]> {
        self.analysis()?.registers.registers_on_line(line_index)
    }

    /// Registers on the line naming the same register as `register`.
    pub fn count_register_matches(&self, line_index: usize, register: &str) -> usize {
        self.analysis().map_or(0, |a| {
            a.registers
                .count_matches(a.classifier(), line_index, register)
        })
    }

    pub fn registers_equal(&self, a: &str, b: &str) -> bool {
        self.classifier().is_some_and(|c| c.register_equal(a, b))
    }

    pub fn dedup_registers(&self, registers: &[String]) -> Vec<String> {
        match self.classifier() {
            Some(classifier) => dedup_registers(classifier, registers),
            None => registers.to_vec(),
        }
    }

    /// First register token of a line, at or after token `start_token`,
    /// naming the same register as `register`.
    pub fn register_token_index(
        &self,
        line_index: usize,
        register: &str,
        start_token: usize,
    ) -> Option<usize> {
        let analysis = self.analysis()?;
        let classifier = analysis.classifier();
        let line = analysis.lines.get(line_index)?;
        (line.token_index.max(start_token)..line.tokens().end).find(|&i| {
            analysis.tokens.get(i).is_some_and(|t| {
                t.kind == asm_lexer::TokenKind::Register
                    && classifier.register_equal(register, t.text(&self.input))
            })
        })
    }

    pub fn simd_kind(&self, mnemonic: &str) -> AnalyzeResult<SimdKind> {
        let architecture = self.architecture().unwrap_or(Architecture::Intel);
        Ok(Classifier::for_architecture(architecture).simd_kind(mnemonic)?)
    }

    /// Description of `mnemonic` in the analyzed architecture.
    pub fn instruction_description(&self, mnemonic: &str) -> Option<String> {
        lookup_description(self.architecture()?, mnemonic)
    }

    /// Name recorded by the `.file` directive numbered `file_no`
    pub fn source_file_name(&self, file_no: u32) -> Option<&str> {
        self.analysis()?
            .sources
            .get(file_no)
            .map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeDirection;

    const LISTING: &str = "\
main:
\tpush\trbp
\tmov\trbp, rsp
\tcmp\tedi, 0
\tje\t.LBB0_2
\tmov\teax, 1
\tpop\trbp
\tret
.LBB0_2:
\txor\teax, eax
\tpop\trbp
\tret
";

    fn plain() -> AnalyzerOptions {
        AnalyzerOptions::default()
            .with_syntax_coloring(false)
            .with_load_source_files(false)
    }

    fn analyzer(text: &str) -> Analyzer {
        let mut analyzer = Analyzer::new();
        analyzer
            .initialize(text, Architecture::Intel, plain())
            .unwrap();
        analyzer
    }

    #[test]
    fn test_uninitialized() {
        let analyzer = Analyzer::new();
        assert!(!analyzer.is_initialized());
        assert!(analyzer.blocks().is_empty());
        assert_eq!(analyzer.render_full_text().unwrap(), "");
        assert!(matches!(
            analyzer.render_block_text(0),
            Err(AnalyzeError::BlockOutOfRange { index: 0, count: 0 })
        ));
        assert_eq!(analyzer.find_block_by_text_offset(0), None);
        assert_eq!(analyzer.architecture(), None);
    }

    #[test]
    fn test_render_and_offsets() {
        let analyzer = analyzer(LISTING);
        assert_eq!(analyzer.blocks().len(), 3);

        let full = analyzer.render_full_text().unwrap();
        assert!(full.starts_with("main:\n\tpush      \trbp\n"));
        assert!(full.ends_with("\tret\n"));
        assert_eq!(analyzer.block_spans().last().unwrap().end, full.len());

        for (index, span) in analyzer.block_spans().iter().enumerate() {
            let text = analyzer.render_block_text(index).unwrap();
            assert_eq!(&full[span.start..span.end], text);
            assert_eq!(analyzer.find_block_by_text_offset(span.start), Some(index));
            assert_eq!(analyzer.find_block_by_text_offset(span.end - 1), Some(index));
        }
        assert_eq!(analyzer.find_block_by_text_offset(full.len()), None);
        assert_eq!(analyzer.find_block_by_text_offset_from(0, 1), None);
        let last = analyzer.block_spans().len() - 1;
        assert_eq!(
            analyzer.find_block_by_text_offset_from(full.len() - 1, last),
            Some(last)
        );
    }

    #[test]
    fn test_edges() {
        let analyzer = analyzer(LISTING);
        let outbound: Vec<_> = analyzer.blocks()[0]
            .outbound()
            .map(|e| (e.target.block, e.target.line))
            .collect();
        assert_eq!(outbound, vec![(1, 0), (2, 0)]);
        assert!(analyzer.blocks()[2]
            .edges
            .iter()
            .all(|e| e.direction == EdgeDirection::Inbound));
    }

    #[test]
    fn test_cached_and_uncached_rendering() {
        let mut analyzer = Analyzer::new();
        analyzer
            .initialize(LISTING, Architecture::Intel, AnalyzerOptions::default())
            .unwrap();
        let colored = analyzer.render_block_text(0).unwrap().to_string();
        assert!(colored.contains("<color=#4EC9B0>push</color>"));
        assert_eq!(analyzer.render_block_text_uncached(0, true).unwrap(), colored);
        let plain = analyzer.render_block_text_uncached(0, false).unwrap();
        assert!(!plain.contains("<color"));
        assert_eq!(plain.len(), analyzer.block_span(0).unwrap().len());
    }

    #[test]
    fn test_token_index_at_column() {
        let analyzer = analyzer(LISTING);
        // line 1 of block 0 is "\tpush      \trbp\n"
        let push = analyzer.token_index_at_column(0, 1, 2).unwrap();
        assert_eq!(analyzer.token_text(push.0), Some("push"));
        assert_eq!(push.1, 1);
        assert_eq!(analyzer.token_index_at_column(0, 1, 7), None);
        let rbp = analyzer.token_index_at_column(0, 1, 12).unwrap();
        assert_eq!(analyzer.token_text(rbp.0), Some("rbp"));
        assert_eq!(analyzer.token_index_at_column(0, 99, 0), None);
        assert_eq!(analyzer.token_index_at_column(9, 0, 0), None);
    }

    #[test]
    fn test_register_queries() {
        let analyzer = analyzer(LISTING);
        // "\tmov\trbp, rsp" is line 2
        assert_eq!(
            analyzer.registers_on_line(2).unwrap(),
            &["rbp".to_string(), "rsp".to_string()]
        );
        assert_eq!(analyzer.count_register_matches(2, "ebp"), 1);
        assert!(analyzer.registers_equal("eax", "al"));
        assert!(!analyzer.registers_equal("eax", "ebx"));
        assert_eq!(
            analyzer.dedup_registers(&["rcx".into(), "ecx".into(), "rax".into()]),
            vec!["rcx".to_string(), "rax".to_string()]
        );

        let line = analyzer.lines()[2];
        let first = analyzer.register_token_index(2, "bp", 0).unwrap();
        assert_eq!(analyzer.token_text(first), Some("rbp"));
        assert_eq!(analyzer.register_token_index(2, "bp", first + 1), None);
        let rsp = analyzer.register_token_index(2, "esp", line.token_index).unwrap();
        assert_eq!(analyzer.token_text(rsp), Some("rsp"));
    }

    fn plain_text(analyzer: &Analyzer) -> String {
        (0..analyzer.blocks().len())
            .map(|i| {
                let text = analyzer.render_block_text_uncached(i, false).unwrap();
                assert_eq!(text.len(), analyzer.block_span(i).unwrap().len());
                text
            })
            .collect()
    }

    #[test]
    fn test_annotations_fixed_at_their_loc() {
        // .loc ahead of the .file it names
        let early = analyzer("f:\n\t.loc\t1 4 2\n\tret\n\t.file\t1 \"a.c\"\n");
        assert_eq!(plain_text(&early), "f:\n\n\tret\n");
        assert_eq!(early.source_file_name(1), Some("a.c"));

        // file number registered twice
        let renamed = analyzer(
            "\t.file\t1 \"a.c\"\n\t.loc\t1 4 2\n\t.file\t1 \"longer_name.c\"\n\t.loc\t1 5 0\n\tret\n",
        );
        assert_eq!(
            plain_text(&renamed),
            "# a.c(4, 3)\n# longer_name.c(5, 1)\n\tret\n"
        );
        let colored = renamed.render_block_text_uncached(0, true).unwrap();
        assert!(colored.starts_with("<color=#FFFF00># a.c(4, 3)</color>\n"));
    }

    #[test]
    fn test_codeview_locations() {
        let cv = analyzer(
            "\t.cv_file\t1 \"C:\\\\src\\\\job.cs\" \"0A1B2C3D4E5F\" 1\n\t.cv_loc\t0 1 12 5\n\tret\n",
        );
        assert_eq!(cv.source_file_name(1), Some("C:/src/job.cs"));
        assert_eq!(plain_text(&cv), "# job.cs(12, 6)\n\tret\n");
    }

    #[test]
    fn test_failed_initialize_resets() {
        let mut analyzer = analyzer(LISTING);
        let err = analyzer
            .initialize(".loc 1 99999999999 0\n", Architecture::Intel, plain())
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedNumber { .. }));
        assert!(!analyzer.is_initialized());
        assert!(analyzer.tokens().is_empty());

        let err = analyzer
            .initialize_named(LISTING, "mips", plain())
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::UnknownArchitecture(_)));
        assert!(!analyzer.is_initialized());
    }

    #[test]
    fn test_simd_and_descriptions() {
        let mut analyzer = analyzer(LISTING);
        assert_eq!(analyzer.simd_kind("mulps").unwrap(), SimdKind::Packed);
        assert_eq!(
            analyzer.instruction_description("push").as_deref(),
            Some("Push a value onto the stack.")
        );

        analyzer
            .initialize("ret\n", Architecture::Arm64, plain())
            .unwrap();
        assert!(matches!(
            analyzer.simd_kind("fadd"),
            Err(AnalyzeError::UnsupportedSimd(_))
        ));
        assert!(analyzer.instruction_description("b.eq").is_some());
    }
}

// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Analyzer configuration

/// Flags controlling how a listing is analyzed and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Use the dark palette (the light one otherwise)
    pub dark_skin: bool,
    /// Color mode of the cached block renderings
    pub syntax_coloring: bool,
    /// Color packed and scalar SIMD instructions differently
    pub smell_test: bool,
    /// Drop the first line of input (a compiler banner)
    pub skip_header_line: bool,
    /// Read the source files named by `.file` directives to annotate
    /// `.loc` lines with source text
    pub load_source_files: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            dark_skin: true,
            syntax_coloring: true,
            smell_test: false,
            skip_header_line: false,
            load_source_files: true,
        }
    }
}

impl AnalyzerOptions {
    pub fn with_dark_skin(mut self, dark_skin: bool) -> Self {
        self.dark_skin = dark_skin;
        self
    }

    pub fn with_syntax_coloring(mut self, syntax_coloring: bool) -> Self {
        self.syntax_coloring = syntax_coloring;
        self
    }

    pub fn with_smell_test(mut self, smell_test: bool) -> Self {
        self.smell_test = smell_test;
        self
    }

    pub fn with_skip_header_line(mut self, skip_header_line: bool) -> Self {
        self.skip_header_line = skip_header_line;
        self
    }

    pub fn with_load_source_files(mut self, load_source_files: bool) -> Self {
        self.load_source_files = load_source_files;
        self
    }
}

// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Assembly listing inspector
//!
//! Reads a compiler listing from a file or stdin and prints the rendered
//! text, a per-block summary or a Graphviz block graph.
//!
//! Usage:
//!     clang -S -o - test.c | asm-inspect --arch x86 --mode blocks

use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use asm_inspect::{AnalyzeError, Analyzer, AnalyzerOptions, BlockGraph, BlockKind};
use asm_lexer::Architecture;
use clap::{Parser, ValueEnum};
use color_print::{ceprintln, cprintln};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Rendered listing
    Text,
    /// One summary line per block
    Blocks,
    /// Graphviz block graph
    Dot,
}

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Listing to analyze. Reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Listing dialect: x86, arm64, wasm or llvm-ir
    #[clap(short, long, default_value = "x86")]
    arch: Architecture,

    /// What to print
    #[clap(short, long, value_enum, default_value_t = Mode::Text)]
    mode: Mode,

    /// Use the light palette
    #[clap(long)]
    light: bool,

    /// Render without color markup
    #[clap(long)]
    no_color: bool,

    /// Color packed and scalar SIMD instructions apart
    #[clap(long)]
    smell_test: bool,

    /// Drop the first line of the input
    #[clap(long)]
    skip_header: bool,

    /// Do not read the files named by `.file` directives
    #[clap(long)]
    no_source: bool,
}

impl Args {
    fn options(&self) -> AnalyzerOptions {
        AnalyzerOptions::default()
            .with_dark_skin(!self.light)
            .with_syntax_coloring(!self.no_color)
            .with_smell_test(self.smell_test)
            .with_skip_header_line(self.skip_header)
            .with_load_source_files(!self.no_source)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ceprintln!("<r,s>error</>: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AnalyzeError> {
    let mut analyzer = Analyzer::new();
    match args.input.as_ref().filter(|p| p.as_os_str() != "-") {
        Some(path) => analyzer.initialize_from_file(path, args.arch, args.options())?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|source| AnalyzeError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            analyzer.initialize(input, args.arch, args.options())?;
        }
    }

    match args.mode {
        Mode::Text => print!("{}", analyzer.render_full_text()?),
        Mode::Blocks => print_blocks(&analyzer),
        Mode::Dot => print!("{}", BlockGraph::from_analyzer(&analyzer).to_dot()),
    }
    Ok(())
}

fn print_blocks(analyzer: &Analyzer) {
    let graph = BlockGraph::from_analyzer(analyzer);
    for (index, block) in analyzer.blocks().iter().enumerate() {
        let kind = match block.kind {
            BlockKind::None => "none",
            BlockKind::Block => "block",
            BlockKind::Directive => "directive",
            BlockKind::Code => "code",
            BlockKind::Data => "data",
        };
        let span = analyzer.block_span(index).unwrap_or_default();
        let label = graph
            .node(index)
            .and_then(|node| node.label.as_deref())
            .unwrap_or("");
        cprintln!(
            "<b>#{:<4}</> {:<9} <g>{:<24}</> lines {:>5}+{:<4} text {}..{}",
            index,
            kind,
            label,
            block.line_index,
            block.length,
            span.start,
            span.end
        );
        for edge in block.outbound() {
            cprintln!(
                "      <c>-></> #{} line {} (from line {})",
                edge.target.block,
                edge.target.line,
                edge.origin.line
            );
        }
    }
    cprintln!(
        "<s>{}</> blocks, <s>{}</> edges",
        graph.block_count(),
        graph.edge_count()
    );
}

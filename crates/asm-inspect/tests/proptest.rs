// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests using proptest.
//!
//! Checks the bookkeeping invariants of the analyzer over random input:
//! arbitrary text never panics, and listings assembled from realistic lines
//! always partition cleanly, render to exactly their recorded spans and
//! carry mirrored edges.

use asm_inspect::{Analyzer, AnalyzerOptions, EdgeDirection};
use asm_lexer::Architecture;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Arbitrary ASCII text, line breaks included.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('\0', '\x7f'), 0..256)
        .prop_map(|v| v.into_iter().collect())
}

fn arb_architecture() -> impl Strategy<Value = Architecture> {
    prop::sample::select(vec![
        Architecture::Intel,
        Architecture::Arm64,
        Architecture::Wasm,
        Architecture::LlvmIr,
    ])
}

/// Lines as they appear in Intel-syntax compiler output.
fn x86_line() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "f:",
        "g:",
        ".L1:",
        ".L2:",
        ".LBB0_1:",
        "\tje\t.L1",
        "\tjne\t.L2",
        "\tjle\t.LBB0_1",
        "\tjmp\t.L1",
        "\tjmp\tg",
        "\tjb\tnowhere",
        "\tcall\tf",
        "\tret",
        "\tnop",
        "\tmov\trax, qword ptr [rbp - 8]",
        "\tadd\teax, 1",
        "\tmovabs\trcx, 81985529216486895",
        "\tvaddps\tymm0, ymm1, ymm2",
        "\t.file\t1 \"/src\" \"a.c\"",
        "\t.loc\t1 4 2",
        "\t.loc\t2 9 0",
        "\t.p2align\t4, 0x90",
        "\t.quad\t42",
        "\t.asciz\t\"hi\\n\"",
        "# comment",
        "",
    ])
}

/// A listing of 0..64 lines, optionally with CRLF breaks and no final
/// line break.
fn x86_listing() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(x86_line(), 0..64),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(lines, crlf, trailing)| {
            let mut text = lines.join(if crlf { "\r\n" } else { "\n" });
            if trailing {
                text.push('\n');
            }
            text
        })
}

fn options() -> AnalyzerOptions {
    AnalyzerOptions::default().with_load_source_files(false)
}

/// Invariants of a successfully analyzed listing.
fn check_invariants(analyzer: &Analyzer) -> Result<(), TestCaseError> {
    let mut next_token = 0;
    for line in analyzer.lines() {
        prop_assert_eq!(line.token_index, next_token);
        next_token += line.length;
    }
    prop_assert_eq!(next_token, analyzer.tokens().len());

    let mut next_line = 0;
    let mut next_offset = 0;
    for (index, block) in analyzer.blocks().iter().enumerate() {
        prop_assert!(block.length > 0);
        prop_assert_eq!(block.line_index, next_line);
        next_line += block.length;

        let span = analyzer.block_span(index).unwrap();
        prop_assert_eq!(span.start, next_offset);
        let plain = analyzer.render_block_text_uncached(index, false).unwrap();
        prop_assert_eq!(plain.len(), span.len());
        next_offset = span.end;

        for edge in block.outbound() {
            let twin = analyzer.blocks()[edge.target.block].edges.iter().any(|e| {
                e.direction == EdgeDirection::Inbound
                    && e.origin == edge.target
                    && e.target == edge.origin
            });
            prop_assert!(twin, "edge {:?} has no inbound twin", edge);
        }
    }
    prop_assert_eq!(next_line, analyzer.lines().len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Analysis must never panic; failures leave nothing behind.
    #[test]
    fn no_panic_on_arbitrary_text(input in arb_text(), architecture in arb_architecture()) {
        let mut analyzer = Analyzer::new();
        match analyzer.initialize(input, architecture, options()) {
            Ok(()) => {
                check_invariants(&analyzer)?;
                prop_assert!(analyzer.render_full_text().is_ok());
            }
            Err(_) => {
                prop_assert!(!analyzer.is_initialized());
                prop_assert!(analyzer.blocks().is_empty());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Realistic listings keep every bookkeeping invariant.
    #[test]
    fn listings_keep_invariants(listing in x86_listing()) {
        let mut analyzer = Analyzer::new();
        analyzer.initialize(listing, Architecture::Intel, options()).unwrap();
        check_invariants(&analyzer)?;
    }

    /// Every rendered offset maps back to the block that rendered it.
    #[test]
    fn offsets_map_to_blocks(listing in x86_listing()) {
        let mut analyzer = Analyzer::new();
        analyzer
            .initialize(listing, Architecture::Intel, options().with_syntax_coloring(false))
            .unwrap();
        let full = analyzer.render_full_text().unwrap();
        let mut block = 0;
        for offset in 0..full.len() {
            while !analyzer.block_span(block).unwrap().contains(offset) {
                block += 1;
            }
            prop_assert_eq!(analyzer.find_block_by_text_offset(offset), Some(block));
            prop_assert_eq!(analyzer.find_block_by_text_offset_from(offset, block), Some(block));
        }
        prop_assert_eq!(analyzer.find_block_by_text_offset(full.len()), None);
    }

    /// Analyzing the same text twice gives identical results.
    #[test]
    fn reinitialize_is_idempotent(listing in x86_listing()) {
        let mut analyzer = Analyzer::new();
        analyzer.initialize(listing.clone(), Architecture::Intel, options()).unwrap();
        let lines = analyzer.lines().to_vec();
        let blocks = analyzer.blocks().to_vec();
        let text = analyzer.render_full_text().unwrap();

        analyzer.initialize(listing, Architecture::Intel, options()).unwrap();
        prop_assert_eq!(analyzer.lines(), lines.as_slice());
        prop_assert_eq!(analyzer.blocks(), blocks.as_slice());
        prop_assert_eq!(analyzer.render_full_text().unwrap(), text);
    }
}

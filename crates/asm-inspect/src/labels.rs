// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Label namespace and edge resolution
//!
//! Labels live in two levels: global labels (function names and other
//! symbols) and local labels (`.L` prefixed) scoped to the global label
//! that most recently preceded them. Branch and jump operands are recorded
//! while lines are assembled and resolved once every label is known, since
//! forward references are the norm.

use std::collections::HashMap;

use asm_lexer::{TextSlice, TextSpan};
use tracing::trace;

use crate::{
    error::{get, get_mut, AnalyzeResult},
    model::{Block, Edge, EdgeDirection, Line, LineKind, LineRef},
};

/// Prefix of compiler-local labels
pub const LOCAL_LABEL_PREFIX: &str = ".L";

pub fn is_local_label(name: &str) -> bool {
    name.starts_with(LOCAL_LABEL_PREFIX)
}

#[derive(Debug)]
struct GlobalLabel<'a> {
    declaration: LineRef,
    locals: HashMap<TextSlice<'a>, LineRef>,
}

impl GlobalLabel<'_> {
    fn new(declaration: LineRef) -> Self {
        Self {
            declaration,
            locals: HashMap::new(),
        }
    }
}

/// A branch/jump operand waiting for resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRef {
    /// Declaration block of the global label in scope at the reference
    pub owner_block: Option<usize>,
    /// The branching line
    pub source: LineRef,
    /// Operand text
    pub target: TextSpan,
}

/// Label declarations and pending references of one listing
#[derive(Debug, Default)]
pub struct LabelTable<'a> {
    globals: HashMap<TextSlice<'a>, GlobalLabel<'a>>,
    /// Global label owning each block that declares one
    owners: HashMap<usize, TextSlice<'a>>,
    current: Option<TextSlice<'a>>,
    pending: Vec<LabelRef>,
}

impl<'a> LabelTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a label declared at `at`.
    pub fn declare(&mut self, name: TextSlice<'a>, at: LineRef) {
        if is_local_label(name.as_str()) {
            let owner = match self.current {
                Some(owner) => owner,
                None => {
                    // local label ahead of any global one
                    let owner = TextSlice::empty();
                    self.globals.insert(owner, GlobalLabel::new(at));
                    self.owners.insert(at.block, owner);
                    self.current = Some(owner);
                    owner
                }
            };
            if let Some(global) = self.globals.get_mut(&owner) {
                global.locals.insert(name, at);
            }
        } else {
            // a redeclared global keeps its first declaration
            self.globals
                .entry(name)
                .or_insert_with(|| GlobalLabel::new(at));
            self.owners.insert(at.block, name);
            self.current = Some(name);
        }
    }

    /// Record a branch or jump from `source` to the label spelled at `target`.
    pub fn reference(&mut self, source: LineRef, target: TextSpan) {
        let owner_block = self
            .current
            .and_then(|owner| self.globals.get(&owner))
            .map(|global| global.declaration.block);
        self.pending.push(LabelRef {
            owner_block,
            source,
            target,
        });
    }

    pub fn global_count(&self) -> usize {
        self.globals.len()
    }

    pub fn pending(&self) -> &[LabelRef] {
        &self.pending
    }

    /// Declaration of `target` as seen from a reference owned by
    /// `owner_block`. Unknown labels resolve to `None`.
    fn lookup(&self, target: TextSlice<'a>, owner_block: Option<usize>) -> Option<LineRef> {
        if is_local_label(target.as_str()) {
            let owner = self.owners.get(&owner_block?)?;
            self.globals.get(owner)?.locals.get(&target).copied()
        } else {
            self.globals.get(&target).map(|global| global.declaration)
        }
    }

    /// Resolve every pending reference into edge pairs on `blocks`.
    ///
    /// Unresolvable targets are skipped. Conditional branches also get an
    /// edge to the first line of the following block, when there is one.
    /// Returns the number of resolved references.
    pub fn resolve(
        &self,
        text: &'a str,
        lines: &[Line],
        blocks: &mut [Block],
    ) -> AnalyzeResult<usize> {
        let mut resolved = 0;
        for reference in &self.pending {
            let label = reference.target.slice(text);
            let Some(target) = self.lookup(label, reference.owner_block) else {
                trace!(label = label.as_str(), "unresolved label reference");
                continue;
            };

            let source = reference.source;
            let source_line = {
                let block = get(blocks, source.block, "block")?;
                get(lines, block.line_index + source.line, "line")?.kind
            };
            add_edge_pair(blocks, source, target)?;

            if source_line == LineKind::CodeBranch && source.block + 1 < blocks.len() {
                add_edge_pair(blocks, source, LineRef::new(source.block + 1, 0))?;
            }
            trace!(?source, ?target, label = label.as_str(), "resolved label reference");
            resolved += 1;
        }

        for block in blocks.iter_mut() {
            block.sort_edges();
        }
        Ok(resolved)
    }
}

fn add_edge_pair(blocks: &mut [Block], source: LineRef, target: LineRef) -> AnalyzeResult<()> {
    get(blocks, target.block, "block")?;
    get_mut(blocks, source.block, "block")?
        .edges
        .push(Edge::new(EdgeDirection::Outbound, source, target));
    get_mut(blocks, target.block, "block")?
        .edges
        .push(Edge::new(EdgeDirection::Inbound, target, source));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;

    fn span_of(text: &str, needle: &str, nth: usize) -> TextSpan {
        let position = text
            .match_indices(needle)
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap();
        TextSpan::new(position, needle.len())
    }

    fn blocks(count: usize) -> (Vec<Line>, Vec<Block>) {
        let lines = (0..count)
            .map(|i| Line {
                kind: if i % 2 == 0 {
                    LineKind::CodeBranch
                } else {
                    LineKind::CodeJump
                },
                token_index: i,
                length: 1,
            })
            .collect();
        let blocks = (0..count)
            .map(|i| {
                let mut block = Block::new(BlockKind::Code, i);
                block.length = 1;
                block
            })
            .collect();
        (lines, blocks)
    }

    #[test]
    fn test_local_labels_are_scoped() {
        let text = "a .L1 b .L1 .L1 .L1";
        let mut labels = LabelTable::new();
        labels.declare(span_of(text, "a", 0).slice(text), LineRef::new(0, 0));
        labels.declare(span_of(text, ".L1", 0).slice(text), LineRef::new(1, 0));
        labels.declare(span_of(text, "b", 0).slice(text), LineRef::new(2, 0));
        labels.declare(span_of(text, ".L1", 1).slice(text), LineRef::new(3, 0));
        // reference from inside b
        labels.reference(LineRef::new(3, 0), span_of(text, ".L1", 2));
        assert_eq!(labels.pending()[0].owner_block, Some(2));

        let (lines, mut blocks) = blocks(4);
        assert_eq!(labels.resolve(text, &lines, &mut blocks).unwrap(), 1);
        let targets: Vec<_> = blocks[3].outbound().map(|e| e.target).collect();
        assert_eq!(targets, vec![LineRef::new(3, 0)]);
        assert_eq!(blocks[1].edges.len(), 0);
    }

    #[test]
    fn test_local_before_any_global() {
        let text = ".Ltmp0 .Ltmp0";
        let mut labels = LabelTable::new();
        labels.declare(span_of(text, ".Ltmp0", 0).slice(text), LineRef::new(1, 0));
        labels.reference(LineRef::new(0, 0), span_of(text, ".Ltmp0", 1));
        assert_eq!(labels.global_count(), 1);

        let (lines, mut blocks) = blocks(2);
        assert_eq!(labels.resolve(text, &lines, &mut blocks).unwrap(), 1);
        // conditional branch: explicit target and fallthrough
        assert_eq!(blocks[0].outbound().count(), 2);
        assert_eq!(blocks[1].inbound().count(), 2);
    }

    #[test]
    fn test_unresolved_and_unowned_references() {
        let text = "memcpy .Lnowhere";
        let mut labels = LabelTable::new();
        labels.reference(LineRef::new(0, 0), span_of(text, "memcpy", 0));
        labels.reference(LineRef::new(0, 0), span_of(text, ".Lnowhere", 0));
        assert_eq!(labels.pending()[1].owner_block, None);

        let (lines, mut blocks) = blocks(1);
        assert_eq!(labels.resolve(text, &lines, &mut blocks).unwrap(), 0);
        assert!(blocks[0].edges.is_empty());
    }

    #[test]
    fn test_branch_in_last_block_has_no_fallthrough() {
        let text = "f f";
        let mut labels = LabelTable::new();
        labels.declare(span_of(text, "f", 0).slice(text), LineRef::new(0, 0));
        labels.reference(LineRef::new(0, 0), span_of(text, "f", 1));

        let (lines, mut blocks) = blocks(1);
        assert_eq!(labels.resolve(text, &lines, &mut blocks).unwrap(), 1);
        assert_eq!(
            blocks[0].edges,
            vec![
                Edge::new(EdgeDirection::Inbound, LineRef::new(0, 0), LineRef::new(0, 0)),
                Edge::new(EdgeDirection::Outbound, LineRef::new(0, 0), LineRef::new(0, 0)),
            ]
        );
    }

    #[test]
    fn test_redeclared_global_keeps_first() {
        let text = "g g g";
        let mut labels = LabelTable::new();
        labels.declare(span_of(text, "g", 0).slice(text), LineRef::new(0, 0));
        labels.declare(span_of(text, "g", 1).slice(text), LineRef::new(1, 0));
        labels.reference(LineRef::new(1, 0), span_of(text, "g", 2));
        assert_eq!(labels.global_count(), 1);

        let (lines, mut blocks) = blocks(2);
        // line of block 1 is a jump, so no fallthrough
        labels.resolve(text, &lines, &mut blocks).unwrap();
        let targets: Vec<_> = blocks[1].outbound().map(|e| e.target).collect();
        assert_eq!(targets, vec![LineRef::new(0, 0)]);
        assert!(blocks[0]
            .edges
            .iter()
            .any(|e| e.direction == EdgeDirection::Inbound && e.target == LineRef::new(1, 0)));
    }
}

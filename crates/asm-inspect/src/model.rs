// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Line, block and edge records
//!
//! Everything here is plain index/length data over the token sequence and
//! the line sequence. Nothing owns text.

use std::ops::Range;

/// Semantic category of a line, fixed by its first significant token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Blank or whitespace/punctuation-only line
    Empty,
    Directive,
    /// `.file` line. Consumed during assembly and never stored.
    SourceFile,
    /// `.loc` line before it is resolved. Never stored either.
    SourceLocation,
    /// A resolved `.loc` line, rendered as a source annotation
    SourceFileLocation { file: u32, line: u32, column: u32 },
    Data,
    Code,
    CodeCall,
    /// Conditional branch
    CodeBranch,
    /// Unconditional jump
    CodeJump,
    CodeReturn,
    LabelDeclaration,
    Comment,
    FunctionBegin,
    FunctionEnd,
}

impl LineKind {
    pub fn is_code(self) -> bool {
        matches!(
            self,
            LineKind::Code
                | LineKind::CodeCall
                | LineKind::CodeBranch
                | LineKind::CodeJump
                | LineKind::CodeReturn
        )
    }
}

/// One logical line: a contiguous run of tokens ending with its line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub token_index: usize,
    pub length: usize,
}

impl Line {
    pub fn tokens(&self) -> Range<usize> {
        self.token_index..self.token_index + self.length
    }
}

/// Dominant content of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    None,
    /// Leading block of the listing with no code, data or directives
    Block,
    Directive,
    Code,
    Data,
}

/// Position of a line as `(block index, line index within the block)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRef {
    pub block: usize,
    pub line: usize,
}

impl LineRef {
    pub const fn new(block: usize, line: usize) -> Self {
        Self { block, line }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeDirection {
    Inbound,
    Outbound,
}

/// A label reference between two lines, stored on both endpoints.
///
/// `origin` is always the line in the block holding the edge, `target` the
/// line at the other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub direction: EdgeDirection,
    pub origin: LineRef,
    pub target: LineRef,
}

impl Edge {
    pub const fn new(direction: EdgeDirection, origin: LineRef, target: LineRef) -> Self {
        Self {
            direction,
            origin,
            target,
        }
    }

    fn sort_key(&self) -> (EdgeDirection, usize, usize) {
        (self.direction, self.target.block, self.target.line)
    }
}

/// A run of lines between label boundaries and after conditional branches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub line_index: usize,
    pub length: usize,
    pub edges: Vec<Edge>,
}

impl Block {
    pub(crate) fn new(kind: BlockKind, line_index: usize) -> Self {
        Self {
            kind,
            line_index,
            length: 0,
            edges: Vec::new(),
        }
    }

    pub fn lines(&self) -> Range<usize> {
        self.line_index..self.line_index + self.length
    }

    pub fn outbound(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| e.direction == EdgeDirection::Outbound)
    }

    pub fn inbound(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| e.direction == EdgeDirection::Inbound)
    }

    /// Inbound edges first, then by target block and line.
    pub(crate) fn sort_edges(&mut self) {
        self.edges.sort_by_key(Edge::sort_key);
    }
}

/// Half-open range `[start, end)` of the full rendered text covered by a
/// block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

impl BlockSpan {
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_order() {
        let origin = LineRef::new(1, 0);
        let mut block = Block::new(BlockKind::Code, 0);
        block.edges = vec![
            Edge::new(EdgeDirection::Outbound, origin, LineRef::new(2, 0)),
            Edge::new(EdgeDirection::Outbound, origin, LineRef::new(0, 3)),
            Edge::new(EdgeDirection::Inbound, origin, LineRef::new(5, 1)),
            Edge::new(EdgeDirection::Outbound, origin, LineRef::new(0, 1)),
        ];
        block.sort_edges();
        let order: Vec<_> = block
            .edges
            .iter()
            .map(|e| (e.direction, e.target.block, e.target.line))
            .collect();
        assert_eq!(
            order,
            vec![
                (EdgeDirection::Inbound, 5, 1),
                (EdgeDirection::Outbound, 0, 1),
                (EdgeDirection::Outbound, 0, 3),
                (EdgeDirection::Outbound, 2, 0),
            ]
        );
        assert_eq!(block.outbound().count(), 3);
        assert_eq!(block.inbound().count(), 1);
    }

    #[test]
    fn test_span_contains() {
        let span = BlockSpan { start: 4, end: 9 };
        assert!(!span.contains(3));
        assert!(span.contains(4));
        assert!(span.contains(8));
        assert!(!span.contains(9));
        assert_eq!(span.len(), 5);
    }
}

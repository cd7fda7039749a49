// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Block graph export

use std::fmt;

use petgraph::{
    dot::{Config, Dot},
    graph::{DiGraph, NodeIndex},
    Direction,
};

use crate::{
    analyzer::Analyzer,
    model::{BlockKind, LineKind},
};

pub type BlockIndex = NodeIndex;

/// Data stored in each block node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// Index into [`Analyzer::blocks`]
    pub index: usize,
    pub kind: BlockKind,
    /// Label declared by the block's first line, if any
    pub label: Option<String>,
}

impl fmt::Display for BlockNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "#{} {label}", self.index),
            None => write!(f, "#{}", self.index),
        }
    }
}

/// Line numbers, relative to their blocks, of a branch and its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchLines {
    pub origin: usize,
    pub target: usize,
}

impl fmt::Display for BranchLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.origin, self.target)
    }
}

/// Directed graph with one node per block and one edge per outbound block
/// edge. Inbound edges are the same edges seen from the other end.
pub struct BlockGraph {
    graph: DiGraph<BlockNode, BranchLines>,
}

impl BlockGraph {
    pub fn from_analyzer(analyzer: &Analyzer) -> Self {
        let mut graph = DiGraph::with_capacity(analyzer.blocks().len(), 0);
        let nodes: Vec<_> = analyzer
            .blocks()
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let label = analyzer
                    .lines()
                    .get(block.line_index)
                    .filter(|line| line.kind == LineKind::LabelDeclaration)
                    .and_then(|line| analyzer.token_text(line.token_index))
                    .map(|text| text.trim_end_matches(':').to_string());
                graph.add_node(BlockNode {
                    index,
                    kind: block.kind,
                    label,
                })
            })
            .collect();

        for (block, edge) in analyzer
            .blocks()
            .iter()
            .flat_map(|block| block.outbound())
            .map(|edge| (edge.origin.block, edge))
        {
            if let (Some(&from), Some(&to)) = (nodes.get(block), nodes.get(edge.target.block)) {
                graph.add_edge(
                    from,
                    to,
                    BranchLines {
                        origin: edge.origin.line,
                        target: edge.target.line,
                    },
                );
            }
        }
        Self { graph }
    }

    /// Get the number of blocks
    pub fn block_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of branch edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, block: usize) -> Option<&BlockNode> {
        self.graph.node_weight(NodeIndex::new(block))
    }

    /// Blocks branched to from `block`, each listed once
    pub fn successors(&self, block: usize) -> Vec<usize> {
        self.neighbors(block, Direction::Outgoing)
    }

    /// Blocks branching to `block`, each listed once
    pub fn predecessors(&self, block: usize) -> Vec<usize> {
        self.neighbors(block, Direction::Incoming)
    }

    fn neighbors(&self, block: usize, direction: Direction) -> Vec<usize> {
        if block >= self.block_count() {
            return Vec::new();
        }
        let mut blocks: Vec<usize> = self
            .graph
            .neighbors_directed(NodeIndex::new(block), direction)
            .map(NodeIndex::index)
            .collect();
        blocks.sort_unstable();
        blocks.dedup();
        blocks
    }

    /// Graphviz rendering of the graph
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::GraphContentOnly]))
            .lines()
            .fold(String::from("digraph {\n    node [shape=box]\n"), |mut out, line| {
                out.push_str(line);
                out.push('\n');
                out
            })
            + "}\n"
    }
}

#[cfg(test)]
mod tests {
    use asm_lexer::Architecture;

    use super::*;
    use crate::options::AnalyzerOptions;

    const LISTING: &str = "\
f:
\ttest\tedi, edi
\tje\t.LBB0_2
\tcall\tg
.LBB0_2:
\tjmp\tf
\tret
";

    fn graph() -> BlockGraph {
        let mut analyzer = Analyzer::new();
        analyzer
            .initialize(
                LISTING,
                Architecture::Intel,
                AnalyzerOptions::default().with_load_source_files(false),
            )
            .unwrap();
        BlockGraph::from_analyzer(&analyzer)
    }

    #[test]
    fn test_nodes_and_edges() {
        let graph = graph();
        assert_eq!(graph.block_count(), 3);
        // je: target and fallthrough, jmp: back to f. The call is unresolved.
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node(0).unwrap().label.as_deref(), Some("f"));
        assert_eq!(graph.node(1).unwrap().label, None);
        assert_eq!(graph.node(2).unwrap().label.as_deref(), Some(".LBB0_2"));
        assert!(graph.node(3).is_none());
    }

    #[test]
    fn test_neighbors() {
        let graph = graph();
        assert_eq!(graph.successors(0), vec![1, 2]);
        assert_eq!(graph.successors(2), vec![0]);
        assert_eq!(graph.predecessors(0), vec![2]);
        assert_eq!(graph.predecessors(2), vec![0]);
        assert!(graph.successors(1).is_empty());
        assert!(graph.successors(7).is_empty());
    }

    #[test]
    fn test_dot() {
        let dot = graph().to_dot();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("#0 f"));
        assert!(dot.contains("#2 .LBB0_2"));
        assert_eq!(dot.matches(" -> ").count(), 3);
    }
}

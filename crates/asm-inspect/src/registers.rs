// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Registers referenced by each line

use std::collections::HashMap;

use asm_lexer::Classifier;

/// Register spellings per line index, in order of appearance.
///
/// Lines without registers have no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterIndex {
    lines: HashMap<usize, Vec<String>>,
}

impl RegisterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line_index: usize, registers: Vec<String>) {
        if !registers.is_empty() {
            self.lines.insert(line_index, registers);
        }
    }

    pub fn registers_on_line(&self, line_index: usize) -> Option<&[String]> {
        self.lines.get(&line_index).map(Vec::as_slice)
    }

    /// Number of registers on the line that name the same register as
    /// `register`.
    pub fn count_matches(&self, classifier: Classifier, line_index: usize, register: &str) -> usize {
        self.registers_on_line(line_index)
            .map(|regs| {
                regs.iter()
                    .filter(|r| classifier.register_equal(register, r))
                    .count()
            })
            .unwrap_or(0)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Keep the first spelling of each distinct register.
pub fn dedup_registers(classifier: Classifier, registers: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(registers.len());
    for reg in registers {
        let seen = unique
            .iter()
            .any(|u| u == reg || classifier.register_equal(u, reg));
        if !seen {
            unique.push(reg.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lines_without_registers() {
        let mut index = RegisterIndex::new();
        index.push_line(0, Vec::new());
        index.push_line(1, regs(&["rax", "eax"]));
        assert_eq!(index.registers_on_line(0), None);
        assert_eq!(index.registers_on_line(1).unwrap().len(), 2);
        assert_eq!(index.line_count(), 1);
    }

    #[test]
    fn test_count_matches_with_aliasing() {
        let mut index = RegisterIndex::new();
        index.push_line(3, regs(&["eax", "al", "rbx"]));
        assert_eq!(index.count_matches(Classifier::X86, 3, "rax"), 2);
        assert_eq!(index.count_matches(Classifier::X86, 3, "bl"), 1);
        assert_eq!(index.count_matches(Classifier::X86, 3, "rcx"), 0);
        assert_eq!(index.count_matches(Classifier::X86, 4, "rax"), 0);

        index.push_line(0, regs(&["x0", "w0"]));
        assert_eq!(index.count_matches(Classifier::Arm64, 0, "x0"), 1);
    }

    #[test]
    fn test_dedup() {
        assert_eq!(
            dedup_registers(Classifier::X86, &regs(&["rcx", "ecx", "rax"])),
            regs(&["rcx", "rax"])
        );
        assert_eq!(
            dedup_registers(Classifier::Arm64, &regs(&["x0", "w0", "x0"])),
            regs(&["x0", "w0"])
        );
    }
}

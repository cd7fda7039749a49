// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Supported assembly dialects

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Width, in display columns, that short Intel mnemonics are padded to.
pub const INSTRUCTION_ALIGNMENT: usize = 10;

/// Assembly dialect of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// x86-64, Intel syntax
    Intel,
    Arm64,
    Wasm,
    LlvmIr,
}

impl Architecture {
    pub const ALL: [Architecture; 4] = [
        Architecture::Intel,
        Architecture::Arm64,
        Architecture::Wasm,
        Architecture::LlvmIr,
    ];

    /// Character that starts a comment running to end of line.
    pub const fn comment_start(self) -> char {
        match self {
            Architecture::Intel | Architecture::Wasm => '#',
            Architecture::Arm64 | Architecture::LlvmIr => ';',
        }
    }

    /// Whether short instructions get their operands aligned to
    /// [`INSTRUCTION_ALIGNMENT`].
    pub const fn aligns_instructions(self) -> bool {
        matches!(self, Architecture::Intel)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Architecture::Intel => "intel",
            Architecture::Arm64 => "arm64",
            Architecture::Wasm => "wasm",
            Architecture::LlvmIr => "llvm-ir",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested architecture name is not one we can classify.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown architecture '{name}' (expected one of: intel, arm64, wasm, llvm-ir)")]
pub struct ParseArchitectureError {
    pub name: String,
}

impl FromStr for Architecture {
    type Err = ParseArchitectureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "intel" | "x86" | "x86-64" | "x86_64" | "x64" => Ok(Architecture::Intel),
            "arm64" | "aarch64" | "arm" => Ok(Architecture::Arm64),
            "wasm" | "wasm32" | "wasm64" => Ok(Architecture::Wasm),
            "llvm-ir" | "llvmir" | "llvm" | "ir" => Ok(Architecture::LlvmIr),
            _ => Err(ParseArchitectureError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_start() {
        assert_eq!(Architecture::Intel.comment_start(), '#');
        assert_eq!(Architecture::Wasm.comment_start(), '#');
        assert_eq!(Architecture::Arm64.comment_start(), ';');
        assert_eq!(Architecture::LlvmIr.comment_start(), ';');
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("x86_64".parse::<Architecture>(), Ok(Architecture::Intel));
        assert_eq!("AArch64".parse::<Architecture>(), Ok(Architecture::Arm64));
        assert_eq!("wasm".parse::<Architecture>(), Ok(Architecture::Wasm));
        assert_eq!("llvm-ir".parse::<Architecture>(), Ok(Architecture::LlvmIr));
        for arch in Architecture::ALL {
            assert_eq!(arch.name().parse::<Architecture>(), Ok(arch));
        }
    }

    #[test]
    fn test_unknown_architecture() {
        let err = "mips".parse::<Architecture>().unwrap_err();
        assert_eq!(err.name, "mips");
        assert!(err.to_string().contains("unknown architecture 'mips'"));
    }
}

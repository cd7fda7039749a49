// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! LLVM IR classification
//!
//! Covers the instruction set of the language reference, type and predicate
//! keywords as qualifiers, and the vector element instructions as SIMD.
//! Intrinsics are plain identifiers. Terminators are not split into
//! branch/jump categories, so IR listings produce no control-flow edges.

use lazy_static::lazy_static;

use crate::{
    arch::Architecture,
    classifier::{KeywordTable, TokenClassifier},
    token::TokenKind,
};

const QUALIFIERS: &[&str] = &[
    "to", "new", "float", "double", "i1", "i32", "i16", "i64", "eq", "ne", "ugt", "uge", "ult",
    "ule", "sgt", "sge", "slt", "sle", "false", "true", "oeq", "ogt", "oge", "olt", "ole", "one",
    "ord", "ueq", "une", "uno",
];

const INSTRUCTIONS: &[&str] = &[
    "ret", "br", "switch", "indirectbr", "invoke", "callbr", "resume", "catchswitch", "catchret",
    "cleanupret", "unreachable", "add", "sub", "mul", "udiv", "sdiv", "urem", "srem", "shl", "lshr",
    "ashr", "and", "or", "xor", "extractvalue", "insertvalue", "alloca", "load", "store", "fence",
    "cmpxchg", "atomicrmw", "getelementptr", "trunc", "zext", "sext", "ptrtoint", "inttoptr",
    "bitcast", "addrspacecast", "icmp", "phi", "select", "freeze", "call", "va_arg", "landingpad",
    "catchpad", "cleanuppad",
];

const FPU_INSTRUCTIONS: &[&str] = &[
    "fneg", "fadd", "fsub", "fmul", "fdiv", "frem", "fptrunc", "fpext", "fptoui", "fptosi",
    "uitofp", "sitofp", "fcmp",
];

const SIMD_INSTRUCTIONS: &[&str] = &[
    "extractelement", "insertelement", "shufflevector",
];

/// LLVM IR classifier
pub struct LlvmIrClassifier {
    table: KeywordTable,
}

impl LlvmIrClassifier {
    fn new() -> Self {
        let table = KeywordTable::builder()
            .with(QUALIFIERS, TokenKind::Qualifier)
            .with(INSTRUCTIONS, TokenKind::Instruction)
            .with(FPU_INSTRUCTIONS, TokenKind::Instruction)
            .with(SIMD_INSTRUCTIONS, TokenKind::SimdInstruction)
            .build();
        Self { table }
    }
}

impl TokenClassifier for LlvmIrClassifier {
    fn architecture(&self) -> Architecture {
        Architecture::LlvmIr
    }

    fn table(&self) -> &KeywordTable {
        &self.table
    }
}

lazy_static! {
    /// Shared LLVM IR classifier
    pub static ref LLVM_IR: LlvmIrClassifier = LlvmIrClassifier::new();
}

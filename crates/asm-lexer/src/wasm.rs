// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly text classification
//!
//! Namespaced operators such as `local.get` or `i32.add` are split in two:
//! the namespace including its trailing `.` classifies as a register and the
//! operator as an instruction.

use lazy_static::lazy_static;

use crate::{
    arch::Architecture,
    classifier::{KeywordTable, TokenClassifier},
    token::TokenKind,
};

const REGISTERS: &[&str] = &[
    "memory.", "local.", "global.", "i32.", "i64.", "f32.", "f64.",
];

const QUALIFIERS: &[&str] = &[
    "offset", "align", "eqz", "eq", "ne", "lt_s", "lt_u", "gt_s", "gt_u", "le_s", "le_u", "ge_s",
    "ge_u", "lt", "gt", "le", "ge",
];

const INSTRUCTIONS: &[&str] = &[
    "if", "end", "block", "end_block", "end_loop", "end_function", "loop", "unreachable", "nop",
    "call", "call_indirect", "drop", "select", "get", "set", "tee", "load", "load8_s", "load8_u",
    "load16_s", "load16_u", "load32_s", "load32_u", "store", "store8", "store16", "store32", "size",
    "grow", "const", "clz", "ctz", "popcnt", "add", "sub", "mul", "div_s", "div_u", "rem_s",
    "rem_u", "and", "or", "xor", "shl", "shr_s", "shr_u", "rotl", "rotr", "abs", "neg", "ceil",
    "floor", "trunc", "sqrt", "div", "min", "max", "copysign", "wrap_i64", "trunc_f32_s",
    "trunc_f32_u", "trunc_f64_s", "trunc_f64_u", "extend_i32_s", "extend_i32_u", "convert_i32_s",
    "convert_i32_u", "convert_i64_s", "convert_i64_u", "demote_f64", "promote_f32",
    "reinterpret_f32", "reinterpret_f64", "reinterpret_i32", "reinterpret_i64",
];

const BRANCH_INSTRUCTIONS: &[&str] = &[
    "br_if",
];

const JUMP_INSTRUCTIONS: &[&str] = &[
    "br", "br_table",
];

const RETURN_INSTRUCTIONS: &[&str] = &[
    "return",
];

/// WebAssembly classifier
pub struct WasmClassifier {
    table: KeywordTable,
}

impl WasmClassifier {
    fn new() -> Self {
        let table = KeywordTable::builder()
            .with(REGISTERS, TokenKind::Register)
            .with(QUALIFIERS, TokenKind::Qualifier)
            .with(INSTRUCTIONS, TokenKind::Instruction)
            .with(BRANCH_INSTRUCTIONS, TokenKind::BranchInstruction)
            .with(JUMP_INSTRUCTIONS, TokenKind::JumpInstruction)
            .with(RETURN_INSTRUCTIONS, TokenKind::ReturnInstruction)
            .build();
        Self { table }
    }
}

impl TokenClassifier for WasmClassifier {
    fn architecture(&self) -> Architecture {
        Architecture::Wasm
    }

    fn table(&self) -> &KeywordTable {
        &self.table
    }

    fn is_identifier_or_register_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '@'
    }

    fn accepts_as_identifier_end(&self, c: char) -> bool {
        c == '.'
    }
}

lazy_static! {
    /// Shared WebAssembly classifier
    pub static ref WASM: WasmClassifier = WasmClassifier::new();
}

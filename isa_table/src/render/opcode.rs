// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opcode-enumeration renderer.

use crate::resolve::ResolvedInstruction;

use super::push_generated_header;

/// Renders the opcode enumeration.
///
/// One `SYMBOL = opcode` entry per instruction in table order. The derives
/// are the hook that lets `OpCode` key the dispatch and counter maps; the
/// `from_u32` arms cover exactly the same entries.
#[must_use]
pub fn render_opcode_enum(instrs: &[ResolvedInstruction]) -> String {
    let mut out = String::new();
    push_generated_header(&mut out);

    out.push_str("/// Numeric opcode of every instruction.\n");
    out.push_str("#[allow(non_camel_case_types, reason = \"variants mirror table symbols\")]\n");
    out.push_str("#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]\n");
    out.push_str("#[repr(u32)]\n");
    out.push_str("pub enum OpCode {\n");
    for inst in instrs {
        out.push_str(&format!("    {} = {},\n", inst.symbol, inst.opcode));
    }
    out.push_str("}\n\n");

    out.push_str("impl OpCode {\n");
    out.push_str("    /// Decodes an opcode number.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn from_u32(n: u32) -> Option<Self> {\n");
    out.push_str("        Some(match n {\n");
    for inst in instrs {
        out.push_str(&format!(
            "            {} => Self::{},\n",
            inst.opcode, inst.symbol
        ));
    }
    out.push_str("            _ => return None,\n");
    out.push_str("        })\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    out
}

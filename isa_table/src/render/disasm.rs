// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disassembler-metadata renderer.

use crate::resolve::ResolvedInstruction;

use super::push_generated_header;

/// Renders the disassembler-metadata registrations.
///
/// Per instruction, in table order: map the opcode to its mnemonic, its
/// encoding format, and the full four-slot operand-field layout.
#[must_use]
pub fn render_disasm(instrs: &[ResolvedInstruction]) -> String {
    let mut out = String::new();
    push_generated_header(&mut out);

    out.push_str("/// Registers disassembler metadata for every instruction.\n");
    out.push_str("pub fn init_disassembler(table: &mut MnemonicMap) {\n");
    out.push_str("    use OperandField as Field;\n\n");
    for inst in instrs {
        let fields = inst
            .fields
            .iter()
            .map(|f| format!("Field::{}", f.variant()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    table.insert(\n        OpCode::{},\n        Mnemonic {{\n            text: \"{}\",\n            format: EncodingFormat::{},\n            fields: [{}],\n        }},\n    );\n",
            inst.symbol,
            inst.mnemonic,
            inst.format.tag(),
            fields
        ));
    }
    out.push_str("}\n");

    out
}

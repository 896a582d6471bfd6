// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field-layout resolution.
//!
//! Widens each validated row's operand-field list to the fixed
//! [`OPERAND_SLOTS`]-slot layout of the instruction word and attaches the
//! derived mnemonic. Renderers only ever see resolved rows.

use crate::mangle::mnemonic;
use crate::table::{EncodingFormat, Instruction, InstructionTable, OPERAND_SLOTS, OperandField};

/// An instruction after mnemonic derivation and field-layout normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedInstruction {
    /// Opcode number.
    pub opcode: u32,
    /// Canonical symbol, e.g. `ADD_S`.
    pub symbol: String,
    /// Disassembly mnemonic, e.g. `add.s`.
    pub mnemonic: String,
    /// Instruction-word layout class.
    pub format: EncodingFormat,
    /// Exactly one entry per slot; trailing slots the row left out are
    /// [`OperandField::Omitted`], interior omissions keep their position.
    pub fields: [OperandField; OPERAND_SLOTS],
}

/// Resolves every row of a validated table, preserving declaration order.
#[must_use]
pub fn resolve(table: &InstructionTable) -> Vec<ResolvedInstruction> {
    table.instructions().iter().map(resolve_row).collect()
}

fn resolve_row(inst: &Instruction) -> ResolvedInstruction {
    let mut fields = [OperandField::Omitted; OPERAND_SLOTS];
    for (slot, field) in inst.fields.iter().enumerate() {
        fields[slot] = *field;
    }
    ResolvedInstruction {
        opcode: inst.opcode,
        symbol: inst.symbol.clone(),
        mnemonic: mnemonic(&inst.symbol),
        format: inst.format,
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::table::{OperandField, TableDef, validate};

    use OperandField::{FloatRegister, Immediate, Omitted, Register};

    fn resolve_fields(fields_json: &str) -> [OperandField; 4] {
        let def = TableDef::from_json(&format!(
            r#"{{ "version": 1, "instructions": [
                {{ "opcode": 1, "symbol": "T", "format": "R", "fields": {fields_json} }}
            ] }}"#
        ))
        .unwrap();
        resolve(&validate(&def).unwrap())[0].fields
    }

    #[test]
    fn trailing_slots_default_to_omitted() {
        assert_eq!(
            resolve_fields(r#"["I"]"#),
            [Immediate, Omitted, Omitted, Omitted]
        );
        assert_eq!(resolve_fields("[]"), [Omitted, Omitted, Omitted, Omitted]);
    }

    #[test]
    fn interior_omissions_keep_their_slot() {
        assert_eq!(
            resolve_fields(r#"["R", "N", "R", "I"]"#),
            [Register, Omitted, Register, Immediate]
        );
        assert_eq!(
            resolve_fields(r#"["N", "R", "I"]"#),
            [Omitted, Register, Immediate, Omitted]
        );
    }

    #[test]
    fn float_registers_survive_resolution() {
        assert_eq!(
            resolve_fields(r#"["F", "F"]"#),
            [FloatRegister, FloatRegister, Omitted, Omitted]
        );
    }

    #[test]
    fn mnemonic_and_order_are_attached() {
        let def = TableDef::from_json(
            r#"{ "version": 1, "instructions": [
                { "opcode": 56, "symbol": "ADD_S", "format": "I", "fields": ["F", "F", "F"] },
                { "opcode": 4, "symbol": "NOP", "format": "N", "fields": [] }
            ] }"#,
        )
        .unwrap();
        let resolved = resolve(&validate(&def).unwrap());
        assert_eq!(resolved[0].mnemonic, "add.s");
        assert_eq!(resolved[1].mnemonic, "nop");
        let opcodes: Vec<u32> = resolved.iter().map(|r| r.opcode).collect();
        assert_eq!(opcodes, [56, 4]);
    }
}

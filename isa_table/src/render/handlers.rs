// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler-declaration renderer.

use crate::resolve::ResolvedInstruction;

use super::push_generated_header;

/// Renders the handler-declaration trait.
///
/// One required method per instruction, named from the lower-cased symbol.
/// The simulator core implements `Handlers`; the dispatch artifact binds
/// each opcode to the matching method.
#[must_use]
pub fn render_handlers(instrs: &[ResolvedInstruction]) -> String {
    let mut out = String::new();
    push_generated_header(&mut out);

    out.push_str("/// One handler per instruction, implemented by the simulator core.\n");
    out.push_str("pub trait Handlers {\n");
    for inst in instrs {
        out.push_str(&format!(
            "    /// Handler for `{}` (opcode {}).\n",
            inst.symbol, inst.opcode
        ));
        out.push_str(&format!(
            "    fn {}(&mut self, inst: Instruction) -> State;\n",
            inst.symbol.to_ascii_lowercase()
        ));
    }
    out.push_str("}\n");

    out
}

#[cfg(test)]
mod tests {
    use super::render_handlers;
    use crate::resolve::resolve;
    use crate::table::{TableDef, validate};

    #[test]
    fn methods_are_lower_cased_symbols() {
        let def = TableDef::from_json(
            r#"{ "version": 1, "instructions": [
                { "opcode": 20, "symbol": "AND_", "format": "R", "fields": ["R", "R", "R"] },
                { "opcode": 56, "symbol": "ADD_S", "format": "I", "fields": ["F", "F", "F"] }
            ] }"#,
        )
        .unwrap();
        let text = render_handlers(&resolve(&validate(&def).unwrap()));

        assert!(text.contains("pub trait Handlers {"));
        assert!(text.contains("    fn and_(&mut self, inst: Instruction) -> State;\n"));
        assert!(text.contains("    fn add_s(&mut self, inst: Instruction) -> State;\n"));
        // The method name is the lower-cased symbol, not the mnemonic.
        assert!(!text.contains("add.s"));
    }
}

// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatch-registration renderer.

use crate::resolve::ResolvedInstruction;

use super::push_generated_header;

/// Renders the dispatch-table and execution-counter registrations.
///
/// Per instruction, in table order: bind the opcode to an invocation of its
/// handler, then seed the execution counter for the same opcode with zero.
/// The counters feed the simulator's per-instruction profiling.
#[must_use]
pub fn render_dispatch(instrs: &[ResolvedInstruction]) -> String {
    let mut out = String::new();
    push_generated_header(&mut out);

    out.push_str("/// Binds every opcode to its handler and seeds its execution counter.\n");
    out.push_str(
        "pub fn init_instructions<S: Handlers>(funcs: &mut HandlerMap<S>, counters: &mut CounterMap) {\n",
    );
    for inst in instrs {
        let handler = inst.symbol.to_ascii_lowercase();
        out.push_str(&format!(
            "    funcs.insert(OpCode::{}, |sim: &mut S, inst: Instruction| sim.{}(inst));\n",
            inst.symbol, handler
        ));
        out.push_str(&format!("    counters.insert(OpCode::{}, 0);\n", inst.symbol));
    }
    out.push_str("}\n");

    out
}

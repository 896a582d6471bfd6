// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Artifact renderers.
//!
//! Each renderer is a pure function from the resolved table to the full text
//! of one artifact: fixed header, one entry per instruction in table order,
//! fixed footer. Renderers are independent of each other and of the
//! file system; committing lives in [`crate::commit`].

mod disasm;
mod dispatch;
mod handlers;
mod harness;
mod opcode;

pub use disasm::render_disasm;
pub use dispatch::render_dispatch;
pub use handlers::render_handlers;
pub use harness::render_harness;
pub use opcode::render_opcode_enum;

use crate::resolve::ResolvedInstruction;

/// File name of the opcode-enumeration artifact.
pub const OPCODE_FILE: &str = "opcode_gen.rs";
/// File name of the handler-declaration artifact.
pub const HANDLERS_FILE: &str = "handlers_gen.rs";
/// File name of the dispatch-registration artifact.
pub const DISPATCH_FILE: &str = "dispatch_gen.rs";
/// File name of the disassembler-metadata artifact.
pub const DISASM_FILE: &str = "disasm_gen.rs";
/// File name of the regression-test driver.
pub const HARNESS_FILE: &str = "run.sh";

/// A named rendered output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// File name, relative to the output (or test) directory.
    pub file_name: &'static str,
    /// Rendered text.
    pub text: String,
}

/// The rendered artifact set: the atomic group plus the test driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Enumeration, handlers, dispatch, and disassembler metadata, in that
    /// order. Committed all-or-nothing so they can never drift apart.
    pub group: [Artifact; 4],
    /// The test driver; always rewritten, never diffed.
    pub harness: Artifact,
}

/// Renders all five artifacts from the resolved table.
#[must_use]
pub fn render_all(instrs: &[ResolvedInstruction]) -> ArtifactSet {
    ArtifactSet {
        group: [
            Artifact {
                file_name: OPCODE_FILE,
                text: render_opcode_enum(instrs),
            },
            Artifact {
                file_name: HANDLERS_FILE,
                text: render_handlers(instrs),
            },
            Artifact {
                file_name: DISPATCH_FILE,
                text: render_dispatch(instrs),
            },
            Artifact {
                file_name: DISASM_FILE,
                text: render_disasm(instrs),
            },
        ],
        harness: Artifact {
            file_name: HARNESS_FILE,
            text: render_harness(instrs),
        },
    }
}

/// License header plus the `@generated` marker every Rust artifact opens with.
pub(crate) fn push_generated_header(out: &mut String) {
    out.push_str("// Copyright 2026 the ISA Table Authors\n");
    out.push_str("// SPDX-License-Identifier: Apache-2.0 OR MIT\n\n");
    out.push_str("// @generated by isa_tablegen. Do not edit by hand.\n\n");
}

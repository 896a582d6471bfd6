// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `isa_table`: an instruction-table compiler for the simulator toolchain.
//!
//! One declarative table (`instructions.json`) describes every machine
//! instruction of the emulated processor: opcode number, canonical symbol,
//! encoding format, and operand-field layout. This crate derives the source
//! artifacts the simulator build consumes and keeps them mutually consistent:
//!
//! - the opcode enumeration (`opcode_gen.rs`)
//! - the instruction-handler declarations (`handlers_gen.rs`)
//! - the dispatch-table and execution-counter registrations (`dispatch_gen.rs`)
//! - the disassembler metadata registrations (`disasm_gen.rs`)
//! - the regression-test driver (`run.sh`)
//!
//! Rendering is pure: every renderer maps the resolved table to text, and all
//! file-system effects live in [`commit`]. The first four artifacts form an
//! atomic group that is replaced all-or-nothing, and only when at least one
//! of them actually changed; the test driver is rewritten on every run.
//!
//! ## Example
//!
//! ```
//! use isa_table::table::TableDef;
//!
//! let def = TableDef::from_json(
//!     r#"{
//!         "version": 1,
//!         "instructions": [
//!             { "opcode": 20, "symbol": "AND_", "format": "R", "fields": ["R", "R", "R"] },
//!             { "opcode": 11, "symbol": "LUI", "format": "I", "fields": ["N", "R", "I"] }
//!         ]
//!     }"#,
//! )?;
//!
//! let artifacts = isa_table::render_table(&def)?;
//! assert!(artifacts.group[0].text.contains("AND_ = 20"));
//! assert!(artifacts.group[3].text.contains("\"lui\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commit;
pub mod mangle;
pub mod render;
pub mod resolve;
pub mod table;

use crate::render::ArtifactSet;
use crate::table::{SchemaError, TableDef};

/// Validates `def`, resolves every row, and renders all five artifacts.
///
/// This is the whole pure half of the pipeline; pair it with
/// [`commit::commit_group`] and [`commit::install_harness`] to update the
/// files on disk.
///
/// # Errors
///
/// Returns the first [`SchemaError`] the validator finds. Nothing is rendered
/// for an invalid table.
pub fn render_table(def: &TableDef) -> Result<ArtifactSet, SchemaError> {
    let table = table::validate(def)?;
    let resolved = resolve::resolve(&table);
    Ok(render::render_all(&resolved))
}

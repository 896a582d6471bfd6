// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mnemonic derivation from canonical instruction symbols.

/// Derives the disassembly mnemonic for a canonical symbol.
///
/// Lower-cases the symbol, strips exactly one trailing underscore, then
/// turns every remaining underscore into a period. The trailing underscore
/// is the table's convention for symbols that would otherwise collide with
/// reserved words (`AND_` disassembles as `and`); only a single one is ever
/// stripped.
///
/// Total over valid identifiers; the validator guarantees the shape.
#[must_use]
pub fn mnemonic(symbol: &str) -> String {
    let lower = symbol.to_ascii_lowercase();
    let stem = lower.strip_suffix('_').unwrap_or(&lower);
    stem.replace('_', ".")
}

// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regression-test driver renderer.

use crate::resolve::ResolvedInstruction;

const HEADER: &str = "#!/bin/sh

set -e

testdir=$PWD
cd ..
root=$PWD

";

const FOOTER: &str = "
for inst in $insts; do
    cd \"$testdir\"
    if [ -e \"$inst\" ]; then
        cd \"$inst\"
        python \"$root\"/tools/ascii2bin.py \"$inst\".txt \"$inst\".bin
        echo \"testing $inst ...\"
        \"$root\"/build/simulator -f \"$inst\".bin -i \"$testdir\"/input.txt -r
        echo \"passed\"
    fi
done
";

/// Renders the test driver script.
///
/// The script iterates the lower-cased symbols; for each one with a fixture
/// directory it encodes the text fixture with the external converter, runs
/// the simulator against the binary, and stops on the first failure
/// (`set -e`). Symbols without a fixture directory are skipped.
#[must_use]
pub fn render_harness(instrs: &[ResolvedInstruction]) -> String {
    let names = instrs
        .iter()
        .map(|inst| inst.symbol.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::with_capacity(HEADER.len() + FOOTER.len() + names.len() + 16);
    out.push_str(HEADER);
    out.push_str(&format!("insts=\"{names}\"\n"));
    out.push_str(FOOTER);
    out
}

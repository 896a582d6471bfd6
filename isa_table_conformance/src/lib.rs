// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end conformance tests for the instruction-table compiler.
//!
//! The tests live in `tests/conformance.rs`; this library target is empty.

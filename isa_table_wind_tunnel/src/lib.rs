// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the instruction-table compiler.
//!
//! The benches live in `benches/render.rs`; this library target is empty.

// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line driver for the instruction-table compiler.
//!
//! Reads the instruction table, renders every artifact, and updates the
//! generated sources only when their content actually changed. The
//! regression-test driver is reinstalled on every run.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use isa_table::commit::{self, CommitOutcome};
use isa_table::table::TableDef;

#[derive(Parser, Debug)]
#[command(
    name = "isa_tablegen",
    version,
    about = "Derives simulator opcode, dispatch, and disassembler sources plus the regression-test driver from the instruction table"
)]
struct Cli {
    /// Instruction table definition file.
    #[arg(long, default_value = "instructions.json")]
    table: PathBuf,

    /// Directory receiving the four generated source artifacts.
    #[arg(long, default_value = "generated")]
    out_dir: PathBuf,

    /// Directory receiving the regression-test driver script.
    #[arg(long, default_value = "test")]
    test_dir: PathBuf,

    /// Compare against the committed artifacts and exit non-zero on drift,
    /// without writing anything.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<ExitCode> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("isa_tablegen=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.table)
        .with_context(|| format!("read {}", cli.table.display()))?;
    let def =
        TableDef::from_json(&json).with_context(|| format!("parse {}", cli.table.display()))?;
    let artifacts = isa_table::render_table(&def)
        .with_context(|| format!("validate {}", cli.table.display()))?;

    if cli.check {
        let drifted = commit::check_group(&cli.out_dir, &artifacts.group)
            .with_context(|| format!("check {}", cli.out_dir.display()))?;
        if drifted.is_empty() {
            tracing::info!("generated sources are up to date");
            return Ok(ExitCode::SUCCESS);
        }
        for name in &drifted {
            tracing::warn!(artifact = %name, "out of date");
        }
        return Ok(ExitCode::FAILURE);
    }

    match commit::commit_group(&cli.out_dir, &artifacts.group)
        .with_context(|| format!("commit {}", cli.out_dir.display()))?
    {
        CommitOutcome::Committed => {
            tracing::info!(
                dir = %cli.out_dir.display(),
                instructions = def.instructions.len(),
                "generated sources updated"
            );
        }
        CommitOutcome::Unchanged => {
            tracing::info!("generated sources unchanged; committed files left untouched");
        }
    }

    let harness = commit::install_harness(&cli.test_dir, &artifacts.harness)
        .with_context(|| format!("install {}", cli.test_dir.display()))?;
    tracing::debug!(path = %harness.display(), "test driver installed");

    Ok(ExitCode::SUCCESS)
}

// Copyright 2026 the ISA Table Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instruction table definition and validation.
//!
//! [`TableDef`] is the deserialized form of the definition file, exactly as
//! written. [`validate`] is the single enforcement point for every structural
//! invariant; downstream components consume the typed [`InstructionTable`] it
//! produces and never re-check.

use core::fmt;
use std::collections::{HashMap, HashSet};

use serde::Deserialize;

/// Definition-file format version this crate understands.
pub const TABLE_VERSION: u32 = 1;

/// Number of operand slots in an encoded instruction word.
pub const OPERAND_SLOTS: usize = 4;

/// Deserialized form of an `instructions.json` definition file.
#[derive(Clone, Debug, Deserialize)]
pub struct TableDef {
    /// Definition-file format version; must equal [`TABLE_VERSION`].
    pub version: u32,
    /// Instruction rows, in declaration order.
    pub instructions: Vec<InstructionDef>,
}

/// One raw instruction row as written in the definition file.
#[derive(Clone, Debug, Deserialize)]
pub struct InstructionDef {
    /// Opcode number; the identity of the instruction.
    pub opcode: u32,
    /// Canonical symbol, e.g. `ADD_S`.
    pub symbol: String,
    /// Encoding-format tag: `R`, `I`, `J`, or `N`.
    pub format: String,
    /// Operand-field tags: `R`, `F`, `I`, or `N` per slot.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl TableDef {
    /// Parses a definition file from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error for malformed JSON or rows that do
    /// not match the definition-file shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Instruction-word layout class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodingFormat {
    /// Register format.
    R,
    /// Immediate format.
    I,
    /// Jump format.
    J,
    /// No-operand format.
    N,
}

impl EncodingFormat {
    /// Tag as written in the definition file and in generated metadata.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::I => "I",
            Self::J => "J",
            Self::N => "N",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "R" => Self::R,
            "I" => Self::I,
            "J" => Self::J,
            "N" => Self::N,
            _ => return None,
        })
    }
}

/// One operand slot of an instruction word.
///
/// A slot the instruction ignores is the first-class [`OperandField::Omitted`]
/// variant, never an absence: slot 1 can be omitted while slot 3 carries a
/// register, mirroring encodings where a field position exists in the word
/// but the instruction does not use it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandField {
    /// General-purpose register.
    Register,
    /// Floating-point register.
    FloatRegister,
    /// Immediate constant.
    Immediate,
    /// No field at this slot.
    Omitted,
}

impl OperandField {
    /// Variant name emitted into generated disassembler metadata.
    #[must_use]
    pub const fn variant(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::FloatRegister => "FloatRegister",
            Self::Immediate => "Immediate",
            Self::Omitted => "Omitted",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "R" => Self::Register,
            "F" => Self::FloatRegister,
            "I" => Self::Immediate,
            "N" => Self::Omitted,
            _ => return None,
        })
    }
}

/// A validated instruction row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Opcode number, unique within the table.
    pub opcode: u32,
    /// Canonical symbol, unique within the table and a valid identifier.
    pub symbol: String,
    /// Instruction-word layout class.
    pub format: EncodingFormat,
    /// Declared operand slots; at most [`OPERAND_SLOTS`] entries.
    pub fields: Vec<OperandField>,
}

/// A validated instruction table, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionTable {
    instructions: Vec<Instruction>,
}

impl InstructionTable {
    /// Returns the validated rows in declaration order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// A table validation error.
///
/// Every variant names the offending opcode so a bad row can be found in the
/// definition file without a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// The definition-file version is not supported.
    UnsupportedVersion {
        /// Version found in the file.
        version: u32,
    },
    /// Two rows share an opcode.
    DuplicateOpcode {
        /// The repeated opcode.
        opcode: u32,
        /// Symbol of the later row.
        symbol: String,
        /// Symbol of the earlier row with the same opcode.
        previous: String,
    },
    /// Two rows share a symbol.
    DuplicateSymbol {
        /// Opcode of the later row.
        opcode: u32,
        /// The repeated symbol.
        symbol: String,
    },
    /// A symbol is not a valid identifier.
    InvalidSymbol {
        /// Opcode of the offending row.
        opcode: u32,
        /// The rejected symbol.
        symbol: String,
    },
    /// A format tag is not one of `R`, `I`, `J`, `N`.
    UnknownFormat {
        /// Opcode of the offending row.
        opcode: u32,
        /// The rejected tag.
        tag: String,
    },
    /// An operand-field tag is not one of `R`, `F`, `I`, `N`.
    UnknownField {
        /// Opcode of the offending row.
        opcode: u32,
        /// The rejected tag.
        tag: String,
    },
    /// A row declares more than [`OPERAND_SLOTS`] operand fields.
    TooManyFields {
        /// Opcode of the offending row.
        opcode: u32,
        /// Number of fields declared.
        count: usize,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported definition-file version {version}")
            }
            Self::DuplicateOpcode {
                opcode,
                symbol,
                previous,
            } => write!(f, "duplicate opcode {opcode}: {previous} and {symbol}"),
            Self::DuplicateSymbol { opcode, symbol } => {
                write!(f, "duplicate symbol '{symbol}' at opcode {opcode}")
            }
            Self::InvalidSymbol { opcode, symbol } => {
                write!(f, "invalid symbol '{symbol}' at opcode {opcode}")
            }
            Self::UnknownFormat { opcode, tag } => {
                write!(f, "unknown format tag '{tag}' at opcode {opcode}")
            }
            Self::UnknownField { opcode, tag } => {
                write!(f, "unknown operand-field tag '{tag}' at opcode {opcode}")
            }
            Self::TooManyFields { opcode, count } => {
                write!(
                    f,
                    "{count} operand fields at opcode {opcode} (at most {OPERAND_SLOTS})"
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Checks every structural invariant of `def` and produces the typed table.
///
/// Rows come out in declaration order. This is the only place invariants are
/// enforced; everything downstream assumes them.
///
/// # Errors
///
/// Returns the first violation found: unsupported version, duplicate
/// opcode/symbol, invalid symbol, unknown format or field tag, or more than
/// [`OPERAND_SLOTS`] operand fields.
pub fn validate(def: &TableDef) -> Result<InstructionTable, SchemaError> {
    if def.version != TABLE_VERSION {
        return Err(SchemaError::UnsupportedVersion {
            version: def.version,
        });
    }

    let mut by_opcode: HashMap<u32, &str> = HashMap::with_capacity(def.instructions.len());
    let mut symbols: HashSet<&str> = HashSet::with_capacity(def.instructions.len());
    let mut instructions = Vec::with_capacity(def.instructions.len());

    for row in &def.instructions {
        if !is_identifier(&row.symbol) {
            return Err(SchemaError::InvalidSymbol {
                opcode: row.opcode,
                symbol: row.symbol.clone(),
            });
        }
        if let Some(previous) = by_opcode.insert(row.opcode, &row.symbol) {
            return Err(SchemaError::DuplicateOpcode {
                opcode: row.opcode,
                symbol: row.symbol.clone(),
                previous: previous.to_owned(),
            });
        }
        if !symbols.insert(&row.symbol) {
            return Err(SchemaError::DuplicateSymbol {
                opcode: row.opcode,
                symbol: row.symbol.clone(),
            });
        }

        let format =
            EncodingFormat::from_tag(&row.format).ok_or_else(|| SchemaError::UnknownFormat {
                opcode: row.opcode,
                tag: row.format.clone(),
            })?;

        if row.fields.len() > OPERAND_SLOTS {
            return Err(SchemaError::TooManyFields {
                opcode: row.opcode,
                count: row.fields.len(),
            });
        }
        let mut fields = Vec::with_capacity(row.fields.len());
        for tag in &row.fields {
            fields.push(OperandField::from_tag(tag).ok_or_else(|| {
                SchemaError::UnknownField {
                    opcode: row.opcode,
                    tag: tag.clone(),
                }
            })?);
        }

        instructions.push(Instruction {
            opcode: row.opcode,
            symbol: row.symbol.clone(),
            format,
            fields,
        });
    }

    Ok(InstructionTable { instructions })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return false;
    }
    chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Error and diagnostic types.
//!
//! Malformed text input is never fatal in this crate. Those cases are
//! described by the diagnostic enums, which are returned alongside a
//! best-effort result. The error types are reserved for operations that
//! genuinely cannot produce a value, such as compiling a pattern or touching
//! the configuration file.

use thiserror::Error;

/// A non-fatal finding recorded while approximating a pattern.
///
/// Positions are character offsets into the pattern passed to the top-level
/// call, including for findings made inside groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A `[` with no closing `]` before the end of the pattern.
    #[error("unterminated character class starting at offset {position}")]
    UnterminatedCharacterClass { position: usize },

    /// A `\` as the final character of the pattern.
    #[error("unterminated escape at offset {position}")]
    UnterminatedEscape { position: usize },
}

/// A non-fatal finding recorded while decoding HTML entities.
///
/// Positions are byte offsets into the decoded input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityDiagnostic {
    #[error("unterminated entity {entity:?} at byte {position}")]
    Unterminated { position: usize, entity: String },

    #[error("unknown entity {name:?} at byte {position}")]
    Unknown { position: usize, name: String },
}

/// A pattern could not be compiled for verification.
#[derive(Debug, Error)]
#[error("pattern {pattern:?} does not compile")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),

    #[error("failed to store configuration")]
    Store(#[source] confy::ConfyError),
}

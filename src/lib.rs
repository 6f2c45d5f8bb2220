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

//! # Stream viewer utilities.
//!
//! Presentation helpers for a chat and stream viewer frontend.
//!
//! * [`pattern`] builds representative literals from regular expressions,
//!   for placeholder and preview text.
//! * [`util`] formats durations, escapes HTML and auto-links URLs.
//! * [`theme`] generates readable colours for user names.
//! * [`config`] loads and stores the settings the helpers share.
//!
//! ## Diagnostics
//!
//! None of the text transforms fail on malformed input. They return a
//! best-effort result together with a list of diagnostics, and report the
//! same findings through `tracing`. Installing a subscriber is left to the
//! application.

pub mod config;
pub mod error;
pub mod pattern;
pub mod theme;
pub mod util;

pub use config::UtilConfig;
pub use error::{ConfigError, Diagnostic, EntityDiagnostic, PatternError};
pub use pattern::{Approximation, Approximator, approximate};

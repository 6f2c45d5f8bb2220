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

//! Checking literals against the patterns they were generated from.

use regex::Regex;

use crate::error::PatternError;

/// Returns `true` if the leftmost match of `regex` in `text` covers all of
/// `text`.
///
/// This differs from anchoring the pattern: a match that starts at zero but
/// stops early is not retried with a longer alternative.
pub fn regex_exact_match(regex: &Regex, text: &str) -> bool {
    regex
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

/// Compiles `pattern` and checks whether `literal` is an exact match for it.
///
/// # Errors
///
/// Returns [`PatternError`] if `pattern` is not a valid regular expression.
pub fn verify(pattern: &str, literal: &str) -> Result<bool, PatternError> {
    let regex = Regex::new(pattern).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(regex_exact_match(&regex, literal))
}

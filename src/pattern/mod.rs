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

//! Representative literals for regular expressions.
//!
//! [`approximate`] turns a pattern into a single literal string that is very
//! likely to match it, for use as placeholder or preview text. It understands
//! a small subset of regex syntax:
//!
//! * **Escapes** (`\x`) produce `x` literally.
//! * **Optional markers** (`?`) drop the token before them.
//! * **Character classes** (`[...]`) produce their first member.
//! * **Groups** (`(a|b)`) produce the approximation of their first
//!   alternative.
//!
//! Everything else, including `+`, `*` and `.`, is copied through as a
//! literal. The result is best-effort: it is never checked against the
//! pattern unless [`Approximator`] is configured to do so.
//!
//! # Examples
//!
//! ```
//! use streamview_util::pattern::approximate;
//!
//! assert_eq!(approximate("colou?r").literal, "color");
//! assert_eq!(approximate("(foo|bar)baz").literal, "foobaz");
//! ```

mod verify;

pub use verify::{regex_exact_match, verify};

use crate::{config::ApproximatorConfig, error::Diagnostic};

/// The outcome of approximating a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approximation {
    pub literal: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Approximation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_literal(self) -> String {
        self.literal
    }
}

/// Scan state for one nesting level.
///
/// The most recent token is held back in `pending` until the next token
/// arrives, since a following `?` retracts it.
#[derive(Debug, Default)]
struct ScanState {
    result: String,
    pending: Option<String>,
}

impl ScanState {
    /// Commits the pending token and holds `token` back in its place.
    fn shift(&mut self, token: impl Into<String>) {
        self.flush();
        self.pending = Some(token.into());
    }

    fn flush(&mut self) {
        if let Some(token) = self.pending.take() {
            self.result.push_str(&token);
        }
    }

    fn retract(&mut self) {
        self.pending = None;
    }

    fn finish(mut self) -> String {
        self.flush();
        self.result
    }
}

/// Produces a literal string that plausibly matches `pattern`.
///
/// Never fails. Malformed input (an unterminated `[` or a trailing `\`)
/// yields a truncated literal plus a [`Diagnostic`], which is also logged
/// at `warn` level.
pub fn approximate(pattern: &str) -> Approximation {
    let chars: Vec<char> = pattern.chars().collect();
    let mut diagnostics = Vec::new();
    let literal = approximate_chars(&chars, 0, pattern, &mut diagnostics);

    Approximation {
        literal,
        diagnostics,
    }
}

/// Approximates one nesting level. `offset` locates `chars` within the
/// top-level pattern so diagnostics carry absolute positions.
fn approximate_chars(
    chars: &[char],
    offset: usize,
    pattern: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let mut state = ScanState::default();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&escaped) => {
                    state.shift(escaped);
                    i += 1;
                }
                None => {
                    report(
                        pattern,
                        diagnostics,
                        Diagnostic::UnterminatedEscape {
                            position: offset + i,
                        },
                    );
                    state.flush();
                }
            },
            '?' => state.retract(),
            '(' => {
                let group = scan_group(chars, i);
                let alternative = &chars[group.start..group.first_end];
                let literal =
                    approximate_chars(alternative, offset + group.start, pattern, diagnostics);
                state.shift(literal);
                i = group.close;
            }
            '[' => {
                let mut first = i + 1;
                if chars.get(first) == Some(&'\\') {
                    first += 1;
                }
                let representative = chars.get(first).copied();

                match chars.iter().skip(first + 1).position(|&c| c == ']') {
                    Some(distance) => i = first + 1 + distance,
                    None => {
                        report(
                            pattern,
                            diagnostics,
                            Diagnostic::UnterminatedCharacterClass {
                                position: offset + i,
                            },
                        );
                        i = chars.len();
                    }
                }

                match representative {
                    Some(c) => state.shift(c),
                    None => state.flush(),
                }
            }
            c => state.shift(c),
        }
        i += 1;
    }

    state.finish()
}

/// Bounds of a group opened at some `(`.
struct GroupBounds {
    /// First character inside the group.
    start: usize,
    /// End (exclusive) of the first top-level alternative.
    first_end: usize,
    /// Index of the closing `)`, or the pattern length if there is none.
    close: usize,
}

fn scan_group(chars: &[char], open: usize) -> GroupBounds {
    let start = open + 1;
    let mut first_end = None;
    let mut depth = 0usize;
    let mut j = start;

    let close = loop {
        match chars.get(j) {
            None => break chars.len(),
            Some('\\') => j += 1,
            Some('(') => depth += 1,
            Some(')') if depth == 0 => break j,
            Some(')') => depth -= 1,
            Some('|') if depth == 0 => {
                first_end.get_or_insert(j);
            }
            Some(_) => {}
        }
        j += 1;
    };

    GroupBounds {
        start,
        first_end: first_end.unwrap_or(close),
        close,
    }
}

fn report(pattern: &str, diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    tracing::warn!(pattern, "{diagnostic}");
    diagnostics.push(diagnostic);
}

/// Approximates patterns according to an [`ApproximatorConfig`].
///
/// With `verify` enabled every literal is re-matched against its pattern and
/// mismatches are logged at `debug` level. The literal itself is returned
/// unchanged either way.
#[derive(Debug, Clone, Default)]
pub struct Approximator {
    config: ApproximatorConfig,
}

impl Approximator {
    pub fn new(config: ApproximatorConfig) -> Self {
        Self { config }
    }

    pub fn approximate(&self, pattern: &str) -> Approximation {
        let approximation = approximate(pattern);

        if self.config.verify {
            match verify(pattern, &approximation.literal) {
                Ok(true) => {}
                Ok(false) => tracing::debug!(
                    pattern,
                    literal = %approximation.literal,
                    "approximation doesn't match its pattern"
                ),
                Err(e) => tracing::debug!(
                    literal = %approximation.literal,
                    error = %e,
                    "approximation could not be verified"
                ),
            }
        }

        approximation
    }
}

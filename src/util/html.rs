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

//! HTML entity encoding and decoding for rich text labels.
//!
//! Decoding understands the named entities produced by chat services
//! (`&amp;`, `&lt;`, `&gt;`, `&quot;`) and numeric character references.
//! Anything else is left as written.

use crate::error::EntityDiagnostic;

/// Escapes the characters that are significant in HTML markup.
pub fn encode_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// The outcome of decoding HTML entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub diagnostics: Vec<EntityDiagnostic>,
}

/// Replaces HTML entities in `html` with the characters they stand for.
///
/// Unknown entities are copied through verbatim. An `&` with no following
/// `;` stops decoding and the rest of the input is copied through as is.
/// Each of these cases is recorded in [`Decoded::diagnostics`] and logged.
pub fn decode_html(html: &str) -> Decoded {
    let mut text = String::with_capacity(html.len());
    let mut diagnostics = Vec::new();
    let mut rest = html;

    while let Some(amp) = rest.find('&') {
        text.push_str(&rest[..amp]);
        let position = html.len() - rest.len() + amp;
        let entity = &rest[amp..];

        let Some(semi) = entity.find(';') else {
            report(
                &mut diagnostics,
                EntityDiagnostic::Unterminated {
                    position,
                    entity: entity.to_string(),
                },
            );
            rest = entity;
            break;
        };

        let name = &entity[1..semi];
        match lookup_entity(name) {
            Some(c) => text.push(c),
            None => {
                report(
                    &mut diagnostics,
                    EntityDiagnostic::Unknown {
                        position,
                        name: name.to_string(),
                    },
                );
                text.push_str(&entity[..=semi]);
            }
        }
        rest = &entity[semi + 1..];
    }
    text.push_str(rest);

    Decoded { text, diagnostics }
}

fn lookup_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        _ => {
            let number = name.strip_prefix('#')?;
            let (digits, radix) = match number.strip_prefix(['x', 'X']) {
                Some(hex) => (hex, 16),
                None => (number, 10),
            };
            // `from_str_radix` alone would also take a leading sign.
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            char::from_u32(u32::from_str_radix(digits, radix).ok()?)
        }
    }
}

fn report(diagnostics: &mut Vec<EntityDiagnostic>, diagnostic: EntityDiagnostic) {
    tracing::warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}

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

//! Emoji detection in chat messages.
//!
//! Only the pictograph blocks that chat emotes commonly come from are
//! recognised:
//!
//! * U+1F300 to U+1F3FF (miscellaneous symbols and pictographs, first half)
//! * U+1F400 to U+1F64F (pictographs and emoticons)
//! * U+1F680 to U+1F6FF (transport and map symbols)
//!
//! Dingbats, flags and skin tone modifiers are not covered.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\x{1F300}-\x{1F3FF}]",
        r"|[\x{1F400}-\x{1F64F}]",
        r"|[\x{1F680}-\x{1F6FF}]",
    ))
    .expect("emoji pattern is valid")
});

/// Returns `true` if `text` contains at least one recognised emoji.
pub fn contains_emoji(text: &str) -> bool {
    EMOJI_PATTERN.is_match(text)
}

/// Returns the byte ranges of every recognised emoji in `text`.
///
/// Each emoji is a single code point, so adjacent emoji produce adjacent
/// ranges rather than one merged range.
///
/// # Examples
///
/// ```
/// use streamview_util::util::emoji::emoji_spans;
///
/// assert_eq!(emoji_spans("gg \u{1F680}"), vec![3..7]);
/// ```
pub fn emoji_spans(text: &str) -> Vec<Range<usize>> {
    EMOJI_PATTERN.find_iter(text).map(|m| m.range()).collect()
}

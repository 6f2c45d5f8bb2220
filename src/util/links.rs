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

//! Auto-linking of URLs in chat messages.
//!
//! The URL pattern is deliberately loose so that it catches things like
//! `twitch.tv/channel` or `(imgur.com/abc)` in casual writing. Bare host names
//! are only linked when they end in one of the configured suffixes, which
//! keeps sentences such as `this.is.not.a.url` from turning into links.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::LinkConfig;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b(https?://)?(www\.)?",
        r"([A-Za-z0-9_+@:%~#=-]{1,256}\.){1,3}[a-z]{2,63}",
        r"(:[0-9]{1,5}\b)?",
        r"(/([A-Za-z0-9_+@:%~#=?&-]+|\.+\b|\.+/)*)*",
    ))
    .expect("URL pattern is valid")
});

/// Wraps every URL in `text` in an HTML anchor.
///
/// A single leading space is replaced with `&nbsp;` so it survives rich text
/// rendering.
///
/// # Arguments
///
/// * `text` - A plain chat message. It is not HTML-escaped here.
/// * `config` - Supplies the suffixes that let a bare host name such as
///   `twitch.tv` be linked without a scheme, `www.` or a path.
///
/// # Examples
///
/// ```
/// use streamview_util::{config::LinkConfig, util::links::make_links};
///
/// assert_eq!(
///     make_links("watch twitch.tv/foo", &LinkConfig::default()),
///     r#"watch <a href="http://twitch.tv/foo">twitch.tv/foo</a>"#
/// );
/// ```
pub fn make_links(text: &str, config: &LinkConfig) -> String {
    let (prefix, text) = match text.strip_prefix(' ') {
        Some(rest) => ("&nbsp;", rest),
        None => ("", text),
    };

    let linked = URL_PATTERN.replace_all(text, |caps: &Captures| {
        let found = &caps[0];
        let has_scheme = found.starts_with("https://") || found.starts_with("http://");

        if !has_scheme
            && !found.starts_with("www.")
            && !found.contains('/')
            && !config
                .bare_suffixes
                .iter()
                .any(|suffix| found.ends_with(suffix.as_str()))
        {
            return found.to_string();
        }

        if has_scheme {
            format!(r#"<a href="{found}">{found}</a>"#)
        } else {
            format!(r#"<a href="http://{found}">{found}</a>"#)
        }
    });

    format!("{prefix}{linked}")
}

/// Returns `true` if `text` contains something that looks like a URL.
pub fn is_url(text: &str) -> bool {
    text.len() > 5 && text.contains('.') && URL_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(text: &str) -> String {
        make_links(text, &LinkConfig::default())
    }

    #[test]
    fn test_bare_host_with_known_suffix() {
        assert_eq!(
            link("go to twitch.tv now"),
            r#"go to <a href="http://twitch.tv">twitch.tv</a> now"#
        );
    }

    #[test]
    fn test_leading_space_becomes_nbsp() {
        assert_eq!(
            link(" google.com"),
            r#"&nbsp;<a href="http://google.com">google.com</a>"#
        );
    }

    #[test]
    fn test_scheme_is_preserved() {
        assert_eq!(
            link("see https://i.imgur.com/jfhaAPP.jpg"),
            r#"see <a href="https://i.imgur.com/jfhaAPP.jpg">https://i.imgur.com/jfhaAPP.jpg</a>"#
        );
    }

    #[test]
    fn test_www_prefix_links_any_suffix() {
        assert_eq!(
            link("www.example.net"),
            r#"<a href="http://www.example.net">www.example.net</a>"#
        );
    }

    #[test]
    fn test_dotted_prose_is_left_alone() {
        assert_eq!(link("this.is.not.a.url"), "this.is.not.a.url");
        assert_eq!(link("hey.you"), "hey.you");
    }

    #[test]
    fn test_custom_suffixes() {
        let config = LinkConfig {
            bare_suffixes: vec![".gg".into()],
        };
        assert_eq!(
            make_links("discord.gg", &config),
            r#"<a href="http://discord.gg">discord.gg</a>"#
        );
        assert_eq!(make_links("google.com", &config), "google.com");
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("twitch.tv"));
        assert!(is_url("https://example.org/path"));
        assert!(!is_url("a.tv"));
        assert!(!is_url("hello world"));
    }
}

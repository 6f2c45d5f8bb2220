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

use streamview_util::{
    Approximator, Diagnostic, UtilConfig, approximate,
    pattern::verify,
    util::links::is_url,
};

#[test]
fn test_documented_examples() {
    let cases = [
        ("", ""),
        ("abc", "abc"),
        ("colou?r", "color"),
        ("[a-z]+", "a+"),
        ("(foo|bar)", "foo"),
        ("a\\?b", "a?b"),
        ("(a(b|c)|d)", "ab"),
    ];

    for (pattern, expected) in cases {
        let approximation = approximate(pattern);
        assert_eq!(approximation.literal, expected, "pattern {pattern:?}");
        assert!(approximation.is_clean(), "pattern {pattern:?}");
    }
}

#[test]
fn test_malformed_class_degrades_without_panicking() {
    let approximation = approximate("id-[abc");
    assert_eq!(approximation.literal, "id-a");
    assert_eq!(
        approximation.diagnostics,
        vec![Diagnostic::UnterminatedCharacterClass { position: 3 }]
    );
}

#[test]
fn test_url_placeholder_is_a_url() {
    let pattern = r"https?://(www\.)?[a-z]+\.tv/[a-z]+";
    let literal = approximate(pattern).into_literal();

    assert_eq!(literal, "http://a+.tv/a+");
    assert!(is_url(&literal));
}

#[test]
fn test_channel_name_placeholder_verifies() {
    let pattern = r"#[a-z]_?chat(room|channel)";
    let literal = approximate(pattern).into_literal();

    assert_eq!(literal, "#achatroom");
    assert!(verify(pattern, &literal).unwrap());
}

#[test]
fn test_configured_approximator() {
    let mut config = UtilConfig::default();
    config.approximator.verify = true;

    let approximator = Approximator::new(config.approximator);
    assert_eq!(approximator.approximate("colou?r").literal, "color");
}

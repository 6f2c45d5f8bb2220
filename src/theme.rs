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

//! Colour generation for chat user names.
//!
//! Names without a colour of their own get a random one. Each channel is kept
//! inside a brightness band so that the result stays readable on both dark
//! and light backgrounds.

use crate::config::ColourConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Converts the colour into a CSS-style hexadecimal string, e.g.
    /// `"#55F0A0"`.
    pub fn to_hex(self) -> String {
        let Rgb(r, g, b) = self;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// Generates a random colour within the configured brightness band.
pub fn random_colour(config: &ColourConfig) -> Rgb {
    random_colour_with(config, rand::random::<f64>)
}

/// Generates a colour from a caller-supplied source of randomness.
///
/// Each channel is `min + floor(sample * (max - min + 1))`. The bounds are
/// swapped if they are given the wrong way round.
///
/// # Arguments
///
/// * `config` - The brightness band every channel is kept inside.
/// * `sample` - Called once per channel, red first. Should yield values in
///   `[0, 1)`; anything outside is clamped, so `1.0` maps to the maximum.
pub fn random_colour_with(config: &ColourConfig, mut sample: impl FnMut() -> f64) -> Rgb {
    let (min, max) = if config.min_brightness <= config.max_brightness {
        (config.min_brightness, config.max_brightness)
    } else {
        (config.max_brightness, config.min_brightness)
    };
    let range = f64::from(max - min) + 1.0;

    let mut channel = || {
        let offset = (range * sample().clamp(0.0, 1.0)).floor() as u16;
        (u16::from(min) + offset).min(u16::from(max)) as u8
    };

    Rgb(channel(), channel(), channel())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb(85, 240, 160).to_hex(), "#55F0A0");
    }

    #[test]
    fn test_sample_bounds_map_to_brightness_band() {
        let config = ColourConfig::default();
        assert_eq!(random_colour_with(&config, || 0.0), Rgb(85, 85, 85));
        assert_eq!(random_colour_with(&config, || 0.999_999), Rgb(240, 240, 240));
        assert_eq!(random_colour_with(&config, || 1.0), Rgb(240, 240, 240));
    }

    #[test]
    fn test_channels_draw_separate_samples() {
        let mut samples = [0.0, 0.5, 0.999].into_iter();
        let colour = random_colour_with(&ColourConfig::default(), || samples.next().unwrap());
        assert_eq!(colour, Rgb(85, 163, 240));
    }

    #[test]
    fn test_inverted_band_is_normalised() {
        let config = ColourConfig {
            min_brightness: 200,
            max_brightness: 100,
        };
        assert_eq!(random_colour_with(&config, || 0.0), Rgb(100, 100, 100));
    }

    #[test]
    fn test_random_colour_stays_in_band() {
        let config = ColourConfig::default();
        for _ in 0..100 {
            let Rgb(r, g, b) = random_colour(&config);
            for channel in [r, g, b] {
                assert!((85..=240).contains(&channel));
            }
        }
    }
}

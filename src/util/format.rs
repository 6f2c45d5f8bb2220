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

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Formats an elapsed duration compactly, e.g. for stream uptime.
///
/// Leading days and hours are only shown when non-zero, and are not padded.
/// Minutes and seconds are always shown with two digits. A duration of zero
/// is treated as unknown.
///
/// # Arguments
///
/// * `total_seconds` - The elapsed time, for example since a stream went live.
///
/// # Examples
///
/// ```
/// use streamview_util::util::format::format_elapsed;
///
/// assert_eq!(format_elapsed(65).as_deref(), Some("01:05"));
/// assert_eq!(format_elapsed(3_725).as_deref(), Some("1:02:05"));
/// assert_eq!(format_elapsed(90_061).as_deref(), Some("1:1:01:01"));
/// assert_eq!(format_elapsed(0), None);
/// ```
pub fn format_elapsed(total_seconds: u64) -> Option<String> {
    if total_seconds == 0 {
        return None;
    }

    let days = total_seconds / SECS_PER_DAY;
    let hours = total_seconds / SECS_PER_HOUR % 24;
    let mins = total_seconds / SECS_PER_MINUTE % 60;
    let secs = total_seconds % 60;

    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{}:", days));
    }
    if days > 0 || hours > 0 {
        out.push_str(&format!("{}:", hours));
    }
    out.push_str(&format!("{:02}:{:02}", mins, secs));

    Some(out)
}

/// Formats a duration in seconds as `HH:MM:SS`.
///
/// This is used for playback positions and total durations in the player
/// interface. Hours are not wrapped into days.
///
/// # Examples
///
/// ```
/// use streamview_util::util::format::format_time;
///
/// assert_eq!(format_time(65), "00:01:05");
/// assert_eq!(format_time(360_000), "100:00:00");
/// ```
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / SECS_PER_HOUR;
    let mins = total_seconds / SECS_PER_MINUTE % 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_seconds_only() {
        assert_eq!(format_elapsed(7).as_deref(), Some("00:07"));
        assert_eq!(format_elapsed(59).as_deref(), Some("00:59"));
    }

    #[test]
    fn test_format_elapsed_shows_zero_hours_under_days() {
        assert_eq!(format_elapsed(SECS_PER_DAY + 5).as_deref(), Some("1:0:00:05"));
    }

    #[test]
    fn test_format_elapsed_zero_is_unknown() {
        assert_eq!(format_elapsed(0), None);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00:00");
        assert_eq!(format_time(59), "00:00:59");
        assert_eq!(format_time(3_600), "01:00:00");
        assert_eq!(format_time(SECS_PER_DAY + 61), "24:01:01");
    }
}

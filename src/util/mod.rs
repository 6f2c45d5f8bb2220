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

//! Text helpers for chat and stream views.
//!
//! # Sub-modules
//!
//! * [`emoji`]: Finding pictograph emoji so they can be rendered separately.
//! * [`format`]: Converting durations into human-readable strings for the UI.
//! * [`html`]: Escaping and unescaping HTML entities in rich text.
//! * [`links`]: Turning URLs in chat messages into anchors.

pub mod emoji;
pub mod format;
pub mod html;
pub mod links;

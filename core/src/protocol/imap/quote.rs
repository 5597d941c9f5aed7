/*
 * quote.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Sigillo, a cross-platform email client.
 *
 * Sigillo is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Sigillo is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Sigillo.  If not, see <http://www.gnu.org/licenses/>.
 */

//! IMAP quoted-string escaping for LOGIN arguments.

/// Escape `\` as `\\` and `"` as `\"` in a single left-to-right pass.
///
/// A single pass guarantees a literal backslash yields exactly two
/// backslashes in the output; sequential whole-string replaces can
/// double-escape when the characters are adjacent.
pub fn add_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wrap `s` in double quotes as an IMAP quoted string, escaping as needed.
pub fn quote_string(s: &str) -> String {
    format!("\"{}\"", add_slashes(s))
}

/*
 * xoauth2.rs
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

//! XOAUTH2 SASL mechanism for Gmail and Outlook IMAP.
//!
//! The initial client response is:
//!
//! ```text
//! base64("user=" {user} "\x01" "auth=Bearer " {access_token} "\x01\x01")
//! ```
//!
//! See <https://developers.google.com/gmail/imap/xoauth2-protocol>

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Build the raw XOAUTH2 initial response (before base64 encoding).
///
/// Format: `user={user}\x01auth=Bearer {access_token}\x01\x01`. The inputs
/// are opaque; embedded 0x01 bytes are not rejected here.
pub fn xoauth2_initial_response(user: &str, access_token: &str) -> String {
    format!("user={}\x01auth=Bearer {}\x01\x01", user, access_token)
}

/// Build the base64-encoded XOAUTH2 initial response, ready to append to an
/// AUTHENTICATE command line. Standard alphabet, padded, no line wrapping.
pub fn xoauth2_encoded_response(user: &str, access_token: &str) -> String {
    BASE64.encode(xoauth2_initial_response(user, access_token))
}

/*
 * lib.rs
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

//! IMAP authentication core: SASL XOAUTH2 credential encoding and dispatch
//! of AUTHENTICATE/LOGIN over an already-established session.
//!
//! Connection setup, TLS, response parsing and command tagging live behind
//! the [`protocol::imap::CommandExecutor`] boundary; this crate only builds
//! credential payloads and hands complete command lines to an executor with
//! retry disabled.

pub mod protocol;
pub mod sasl;

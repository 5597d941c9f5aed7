/*
 * mod.rs
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

//! IMAP client authentication. The session itself (transport, TLS, tagging,
//! response correlation) sits behind [`CommandExecutor`]; this module builds
//! AUTHENTICATE/LOGIN command lines and dispatches them with retry disabled.

mod auth;
mod executor;
mod quote;

pub use auth::{authenticate_xoauth2, login};
pub use executor::{CommandExecutor, RetryPolicy};
pub use quote::{add_slashes, quote_string};

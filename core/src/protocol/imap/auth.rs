/*
 * auth.rs
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

//! AUTHENTICATE and LOGIN dispatch.
//!
//! Authentication is exempt from the executor's normal retry policy: a
//! failed attempt must not be re-presented over a reconnected session, and
//! the server's original rejection must reach the caller unchanged. Both
//! entry points therefore pass [`RetryPolicy::none`] and no response
//! processor, and propagate the executor's error verbatim.

use crate::sasl::xoauth2_encoded_response;

use super::executor::{CommandExecutor, RetryPolicy};
use super::quote::quote_string;

/// Authenticate with SASL XOAUTH2 using an OAuth2 access token.
///
/// The token is sent base64-encoded inside the command line and is never
/// logged or retained. One attempt only; the caller decides whether to
/// re-establish a session and try again.
pub async fn authenticate_xoauth2<E: CommandExecutor>(
    session: &mut E,
    user: &str,
    access_token: &str,
) -> Result<(), E::Error> {
    let response = xoauth2_encoded_response(user, access_token);
    session
        .execute(
            &format!("AUTHENTICATE XOAUTH2 {}", response),
            RetryPolicy::none(),
            None,
        )
        .await
}

/// Authenticate with the LOGIN command using username and password.
///
/// Both arguments are sent as IMAP quoted strings. One attempt only, same
/// policy as [`authenticate_xoauth2`].
pub async fn login<E: CommandExecutor>(
    session: &mut E,
    username: &str,
    password: &str,
) -> Result<(), E::Error> {
    let command = format!(
        "LOGIN {} {}",
        quote_string(username),
        quote_string(password)
    );
    session.execute(&command, RetryPolicy::none(), None).await
}

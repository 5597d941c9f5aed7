/*
 * executor.rs
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

//! Command dispatch boundary between authentication and the IMAP session.
//! The session owner implements [`CommandExecutor`]; tests use a recording
//! double.

/// Retry behavior for a single command dispatch.
///
/// `allow_retry = false, max_retries = 0` means exactly one attempt with no
/// reconnection. The executor must honor these values even when its global
/// policy would retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub allow_retry: bool,
    pub max_retries: u32,
}

impl RetryPolicy {
    /// One attempt, no reconnection. Required for authentication commands.
    pub fn none() -> Self {
        Self { allow_retry: false, max_retries: 0 }
    }

    /// Up to `max_retries` additional attempts after the first.
    pub fn limit(max_retries: u32) -> Self {
        Self { allow_retry: max_retries > 0, max_retries }
    }
}

/// An established IMAP session that can send one command and resolve its
/// tagged response.
///
/// `execute` sends `command` (a single fully-formatted, newline-free line)
/// and resolves only once a definitive tagged response or transport failure
/// is observed: `Ok(())` for tagged OK, `Err` for NO/BAD or a connection
/// error. When `processor` is present the executor feeds it each response
/// line; `None` means the caller needs only the terminal result. Timeouts
/// and cancellation belong to the implementor, and the resulting errors are
/// surfaced unchanged.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(
        &mut self,
        command: &str,
        retry: RetryPolicy,
        processor: Option<&mut dyn FnMut(&str)>,
    ) -> Result<(), Self::Error>;
}

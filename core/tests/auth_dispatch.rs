/*
 * auth_dispatch.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * Tests for AUTHENTICATE/LOGIN dispatch against a recording executor
 * double: command line formatting, the no-retry directive, and verbatim
 * error propagation.
 *
 * Run with:
 *   cargo test -p sigillo_core --test auth_dispatch
 */

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use sigillo_core::protocol::imap::{authenticate_xoauth2, login, CommandExecutor, RetryPolicy};

/// Error double: PartialEq so tests can assert the exact value came back.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExecError {
    line: String,
}

impl ExecError {
    fn tagged_no(line: &str) -> Self {
        Self { line: line.to_string() }
    }
}

impl std::fmt::Display for ExecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.line)
    }
}

impl std::error::Error for ExecError {}

/// Executor double that records every dispatch and returns a canned result.
#[derive(Default)]
struct RecordingExecutor {
    commands: Vec<String>,
    policies: Vec<RetryPolicy>,
    processor_present: Vec<bool>,
    fail_with: Option<ExecError>,
}

impl CommandExecutor for RecordingExecutor {
    type Error = ExecError;

    async fn execute(
        &mut self,
        command: &str,
        retry: RetryPolicy,
        processor: Option<&mut dyn FnMut(&str)>,
    ) -> Result<(), ExecError> {
        self.commands.push(command.to_string());
        self.policies.push(retry);
        self.processor_present.push(processor.is_some());
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[tokio::test]
async fn authenticate_sends_encoded_xoauth2_command() {
    let mut exec = RecordingExecutor::default();
    let user = "someuser@gmail.com";
    let token = "ya29.vF9dft4qmTc2Nvb3RlckBhdHRhdmlzdGEuY29tCg";

    authenticate_xoauth2(&mut exec, user, token).await.unwrap();

    assert_eq!(exec.commands.len(), 1);
    let expected_payload =
        BASE64.encode(format!("user={}\x01auth=Bearer {}\x01\x01", user, token));
    assert_eq!(exec.commands[0], format!("AUTHENTICATE XOAUTH2 {}", expected_payload));
    assert!(!exec.commands[0].contains('\n'));
}

#[tokio::test]
async fn authenticate_disables_retry_and_passes_no_processor() {
    let mut exec = RecordingExecutor::default();

    authenticate_xoauth2(&mut exec, "u@example.com", "tok").await.unwrap();

    assert_eq!(exec.policies, vec![RetryPolicy::none()]);
    assert!(!exec.policies[0].allow_retry);
    assert_eq!(exec.policies[0].max_retries, 0);
    assert_eq!(exec.processor_present, vec![false]);
}

#[tokio::test]
async fn authenticate_returns_executor_error_unchanged() {
    let err = ExecError::tagged_no("A001 NO [AUTHENTICATIONFAILED] Invalid credentials");
    let mut exec = RecordingExecutor {
        fail_with: Some(err.clone()),
        ..Default::default()
    };

    let got = authenticate_xoauth2(&mut exec, "u@example.com", "tok").await;
    assert_eq!(got, Err(err));
    // One attempt, no reconnect-and-resend.
    assert_eq!(exec.commands.len(), 1);
}

#[tokio::test]
async fn login_sends_escaped_quoted_credentials() {
    let mut exec = RecordingExecutor::default();

    login(&mut exec, r#"ali"ce"#, r#"p\"ss"#).await.unwrap();

    assert_eq!(exec.commands.len(), 1);
    assert_eq!(exec.commands[0], r#"LOGIN "ali\"ce" "p\\\"ss""#);
}

#[tokio::test]
async fn login_disables_retry_and_propagates_error() {
    let err = ExecError::tagged_no("A002 NO LOGIN failed");
    let mut exec = RecordingExecutor {
        fail_with: Some(err.clone()),
        ..Default::default()
    };

    let got = login(&mut exec, "user", "password").await;
    assert_eq!(got, Err(err));
    assert_eq!(exec.policies, vec![RetryPolicy::none()]);
    assert_eq!(exec.processor_present, vec![false]);
}

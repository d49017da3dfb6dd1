//! Terminal rendering of the login form: prompts stand in for the inputs,
//! stderr for the inline error element, stdout for alerts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_core::{FormView, MemoryForm};
use tracing::debug;

#[derive(Default)]
pub struct TerminalForm {
    state: MemoryForm,
}

impl TerminalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_input(&self, username: String, password: String) {
        self.state.set_input(username, password).await;
    }
}

#[async_trait]
impl FormView for TerminalForm {
    async fn username(&self) -> String {
        self.state.username().await
    }

    async fn password(&self) -> String {
        self.state.password().await
    }

    async fn show_error(&self, message: &str) {
        self.state.show_error(message).await;
        eprintln!("error: {message}");
    }

    async fn hide_error(&self) {
        if self.state.error().await.visible {
            debug!("clearing inline error");
        }
        self.state.hide_error().await;
    }

    async fn alert(&self, message: &str) {
        self.state.alert(message).await;
        println!("{message}");
    }
}

/// Where typed input comes from. Reads block, so callers run them off the
/// async workers. `None` means the input is exhausted.
pub trait InputSource: Send + 'static {
    fn username(&mut self) -> Result<Option<String>>;
    fn password(&mut self) -> Result<Option<String>>;
}

/// Username from stdin, password from the terminal with echo disabled.
pub struct StdinSource;

impl InputSource for StdinSource {
    fn username(&mut self) -> Result<Option<String>> {
        let stdin = io::stdin();
        prompt_line(&mut stdin.lock(), &mut io::stderr(), "Username")
    }

    fn password(&mut self) -> Result<Option<String>> {
        match rpassword::prompt_password("Password: ") {
            Ok(password) => Ok(Some(password)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(err).context("failed to read password"),
        }
    }
}

/// Values given on the command line, used for the first attempt only.
#[derive(Debug, Default)]
pub struct Prefill {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Collects both inputs, asking the source for whatever the prefill lacks.
pub fn read_inputs<S: InputSource>(
    prefill: &mut Prefill,
    source: &mut S,
) -> Result<Option<(String, String)>> {
    let username = match prefill.username.take() {
        Some(v) => v,
        None => match source.username()? {
            Some(v) => v,
            None => return Ok(None),
        },
    };
    let password = match prefill.password.take() {
        Some(v) => v,
        None => match source.password()? {
            Some(v) => v,
            None => return Ok(None),
        },
    };
    Ok(Some((username, password)))
}

pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}: ").context("failed to write prompt")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).context("failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(Some(line.to_string()))
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;

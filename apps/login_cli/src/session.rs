use anyhow::{Context, Result};
use client_core::{LoginClient, LoginForm};

use crate::terminal::{read_inputs, InputSource, Prefill, TerminalForm};

/// Drives the form until a login is accepted. Each failure prompts again
/// unless `once` is set; exhausted input ends the session. Returns whether a
/// login was accepted.
pub async fn run<C, S>(
    form: &LoginForm<TerminalForm, C>,
    view: &TerminalForm,
    mut prefill: Prefill,
    mut source: S,
    once: bool,
) -> Result<bool>
where
    C: LoginClient + 'static,
    S: InputSource,
{
    loop {
        let (returned_source, returned_prefill, inputs) = tokio::task::spawn_blocking(move || {
            let inputs = read_inputs(&mut prefill, &mut source);
            (source, prefill, inputs)
        })
        .await
        .context("input reader aborted")?;
        source = returned_source;
        prefill = returned_prefill;

        let Some((username, password)) = inputs? else {
            return Ok(false);
        };
        view.set_input(username, password).await;

        let outcome = form.click().await.context("login attempt aborted")?;
        if outcome.is_accepted() {
            return Ok(true);
        }
        if once {
            return Ok(false);
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

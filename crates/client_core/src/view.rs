//! The form surface the controller reads from and renders into.

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Two text inputs, an inline error element, and a way to raise a blocking
/// alert. Inputs are returned raw; trimming is the controller's job.
#[async_trait]
pub trait FormView: Send + Sync {
    async fn username(&self) -> String;
    async fn password(&self) -> String;
    /// Sets the error element's text and reveals it.
    async fn show_error(&self, message: &str);
    /// Hides the error element. Its text is left as is.
    async fn hide_error(&self);
    async fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorElement {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub username: String,
    pub password: String,
    pub error: ErrorElement,
    pub alerts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryForm {
    inner: Mutex<FormSnapshot>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(FormSnapshot {
                username: username.into(),
                password: password.into(),
                ..FormSnapshot::default()
            }),
        }
    }

    pub async fn set_input(&self, username: impl Into<String>, password: impl Into<String>) {
        let mut guard = self.inner.lock().await;
        guard.username = username.into();
        guard.password = password.into();
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        self.inner.lock().await.clone()
    }

    pub async fn error(&self) -> ErrorElement {
        self.inner.lock().await.error.clone()
    }

    pub async fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.inner.lock().await.alerts)
    }
}

#[async_trait]
impl FormView for MemoryForm {
    async fn username(&self) -> String {
        self.inner.lock().await.username.clone()
    }

    async fn password(&self) -> String {
        self.inner.lock().await.password.clone()
    }

    async fn show_error(&self, message: &str) {
        let mut guard = self.inner.lock().await;
        guard.error.text = message.to_string();
        guard.error.visible = true;
    }

    async fn hide_error(&self) {
        self.inner.lock().await.error.visible = false;
    }

    async fn alert(&self, message: &str) {
        self.inner.lock().await.alerts.push(message.to_string());
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;

//! In-memory choice source.
//!
//! Serves fixture candidate lists from memory. Useful for tests and for
//! single-process deployments where the lists are loaded at startup.
//! Supports error injection to exercise the unavailable-source paths.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{ChoiceSource, ChoiceSourceError};

/// In-memory implementation of the `ChoiceSource` port.
#[derive(Debug, Default)]
pub struct InMemoryChoiceSource {
    models: Vec<String>,
    surveys: Vec<(String, String)>,
    operators: Vec<String>,
    fail_with: Mutex<Option<String>>,
}

impl InMemoryChoiceSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw model list.
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the raw (model, survey) pairs.
    pub fn with_surveys<I, S>(mut self, surveys: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.surveys = surveys
            .into_iter()
            .map(|(m, s)| (m.into(), s.into()))
            .collect();
        self
    }

    /// Sets the raw operator list.
    pub fn with_operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = operators.into_iter().map(Into::into).collect();
        self
    }

    /// Makes every subsequent call fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Clears a previously injected failure.
    pub fn recover(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    fn check_available(&self) -> Result<(), ChoiceSourceError> {
        match self.fail_with.lock().unwrap().clone() {
            Some(message) => Err(ChoiceSourceError::Unavailable(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChoiceSource for InMemoryChoiceSource {
    async fn list_models(&self) -> Result<Vec<String>, ChoiceSourceError> {
        self.check_available()?;
        Ok(self.models.clone())
    }

    async fn list_surveys(&self) -> Result<Vec<(String, String)>, ChoiceSourceError> {
        self.check_available()?;
        Ok(self.surveys.clone())
    }

    async fn list_operators(&self) -> Result<Vec<String>, ChoiceSourceError> {
        self.check_available()?;
        Ok(self.operators.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_configured_lists_verbatim() {
        let source = InMemoryChoiceSource::new()
            .with_models(["b", "a", "b"])
            .with_surveys([("a", "s1")])
            .with_operators(["  Ann "]);

        // Raw order and duplicates are preserved; normalization is the
        // domain's job.
        assert_eq!(source.list_models().await.unwrap(), vec!["b", "a", "b"]);
        assert_eq!(
            source.list_surveys().await.unwrap(),
            vec![("a".to_string(), "s1".to_string())]
        );
        assert_eq!(source.list_operators().await.unwrap(), vec!["  Ann "]);
    }

    #[tokio::test]
    async fn injected_failure_hits_every_call_until_recovery() {
        let source = InMemoryChoiceSource::new().with_models(["a"]);
        source.fail_with("sheet offline");

        assert!(source.list_models().await.is_err());
        assert!(source.list_operators().await.is_err());

        source.recover();
        assert_eq!(source.list_models().await.unwrap(), vec!["a"]);
    }
}

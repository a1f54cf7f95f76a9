//! Choice source port.
//!
//! Supplies the raw candidate lists offered during collection. The source
//! performs no sorting, filtering, or deduplication; the domain's
//! `Catalog` owns every normalization rule so candidate sets stay
//! deterministic regardless of the backing store.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a choice source can surface.
#[derive(Debug, Clone, Error)]
pub enum ChoiceSourceError {
    #[error("Choice source unavailable: {0}")]
    Unavailable(String),
}

/// Port for the external store of models, surveys, and operators.
#[async_trait]
pub trait ChoiceSource: Send + Sync {
    /// Raw model list, in source order, possibly with duplicates.
    async fn list_models(&self) -> Result<Vec<String>, ChoiceSourceError>;

    /// Raw (model, survey) association pairs, in source order.
    async fn list_surveys(&self) -> Result<Vec<(String, String)>, ChoiceSourceError>;

    /// Raw operator names, in source order, possibly with blanks.
    async fn list_operators(&self) -> Result<Vec<String>, ChoiceSourceError>;
}

//! Candidate lists offered during collection.
//!
//! The choice source hands over raw ordered lists; every normalization rule
//! lives here so candidate sets are deterministic and reproducible:
//! models are sorted and deduplicated, surveys keep their source order per
//! model, operator names are trimmed with blanks dropped.

/// Normalized candidate lists for one engine invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    models: Vec<String>,
    surveys: Vec<(String, String)>,
    operators: Vec<String>,
}

impl Catalog {
    /// Builds a catalog from raw choice-source output.
    pub fn new(
        models: Vec<String>,
        surveys: Vec<(String, String)>,
        operators: Vec<String>,
    ) -> Self {
        let mut models = models;
        models.sort();
        models.dedup();

        let operators = operators
            .into_iter()
            .map(|op| op.trim().to_string())
            .filter(|op| !op.is_empty())
            .collect();

        Self {
            models,
            surveys,
            operators,
        }
    }

    /// Distinct models, lexicographically sorted.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Surveys associated with `model`, in source order.
    pub fn surveys_for(&self, model: &str) -> Vec<&str> {
        self.surveys
            .iter()
            .filter(|(m, _)| m == model)
            .map(|(_, s)| s.as_str())
            .collect()
    }

    /// Returns true if `survey` belongs to `model`'s subset.
    pub fn survey_belongs_to(&self, model: &str, survey: &str) -> bool {
        self.surveys.iter().any(|(m, s)| m == model && s == survey)
    }

    /// Returns true if `model` is a valid candidate.
    pub fn has_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    /// The full operator list, trimmed and blank-free.
    pub fn operators(&self) -> &[String] {
        &self.operators
    }
}

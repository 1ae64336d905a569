use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    suggestions::{
        entities::{PairingSuggestion, SubstitutionSuggestion},
        value_objects::{GetPairingsInput, GetSubstitutionsInput},
    },
};

/// LLM client trait for schema-constrained text generation
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for LLM-assisted suggestions
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService: Send + Sync {
    fn suggest_substitutions(
        &self,
        input: GetSubstitutionsInput,
    ) -> impl Future<Output = Result<Vec<SubstitutionSuggestion>, CoreError>> + Send;

    fn suggest_pairings(
        &self,
        input: GetPairingsInput,
    ) -> impl Future<Output = Result<Vec<PairingSuggestion>, CoreError>> + Send;
}

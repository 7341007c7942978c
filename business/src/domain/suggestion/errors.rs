#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.invalid_lift")]
    InvalidLift,
    #[error("suggestion.invalid_support")]
    InvalidSupport,
}

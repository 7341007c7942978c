#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session.suggestion_not_found")]
    SuggestionNotFound,
    #[error(transparent)]
    Basket(#[from] crate::domain::basket::errors::BasketError),
}

#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("basket.name_empty")]
    NameEmpty,
}

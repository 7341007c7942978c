/// Failures reported by the recommendation gateway.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// `Network` covers transport failures and timeouts. `Server` and
/// `InvalidResponse` are both server-side failures. Synchronization treats
/// all of them the same way.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.server")]
    Server { status: u16 },
    #[error("gateway.invalid_response")]
    InvalidResponse,
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn server(status: u16) -> Self {
        GatewayError::Server { status }
    }
    pub fn invalid_response() -> Self {
        GatewayError::InvalidResponse
    }
}

use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the recommendation service.
pub struct RecommendationClient {
    pub client: Client,
    pub base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the suggestion endpoint URL.
    pub fn suggestion_url(&self) -> String {
        format!("{}/api/suggestion", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_suggestion_url_without_double_slash() {
        let client = RecommendationClient::new(
            "http://localhost:5000/".to_string(),
            Duration::from_secs(1),
        );

        assert_eq!(client.suggestion_url(), "http://localhost:5000/api/suggestion");
    }
}

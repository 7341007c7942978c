use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the recommendation service.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub base_url: String,
    /// Bound on one suggestion fetch, both for the HTTP client and the synchronizer
    pub timeout: Duration,
}

impl RecommendationConfig {
    /// Environment variables:
    /// - RECOMMENDATION_BASE_URL: service root (default: "http://127.0.0.1:5000")
    /// - RECOMMENDATION_TIMEOUT_SECS: fetch timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let base_url =
            env::var("RECOMMENDATION_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("RECOMMENDATION_TIMEOUT_SECS").ok());

        Self { base_url, timeout }
    }
}

fn parse_timeout(raw: Option<String>) -> Duration {
    let seconds = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|seconds| *seconds > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_timeout_seconds() {
        assert_eq!(parse_timeout(Some("3".to_string())), Duration::from_secs(3));
    }

    #[test]
    fn should_fall_back_to_default_timeout() {
        let default = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

        assert_eq!(parse_timeout(None), default);
        assert_eq!(parse_timeout(Some("soon".to_string())), default);
        assert_eq!(parse_timeout(Some("0".to_string())), default);
    }
}

//! Client configuration: endpoint, outlier threshold, timeouts.

use std::time::Duration;

use url::Url;

/// Environment variable overriding the analyzer endpoint.
pub const API_URL_ENV: &str = "CONVODASH_API_URL";

/// Environment variable overriding the outlier threshold, in seconds.
pub const MAX_REASONABLE_TIME_ENV: &str = "CONVODASH_MAX_REASONABLE_TIME";

/// The analyzer service's local development address.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default outlier threshold: timing values above five minutes are
/// treated as parsing artifacts rather than real waits.
pub const DEFAULT_MAX_REASONABLE_TIME: f64 = 300.0;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the dashboard's analyzer client.
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    /// Base URL of the analyzer service.
    pub api_url: Url,
    /// Timing values above this many seconds are excluded from the
    /// aggregate statistics.
    pub max_reasonable_time: f64,
    /// End-to-end timeout for the upload request. Uploads carry whole
    /// chat exports, so this is deliberately generous.
    pub request_timeout: Duration,
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,
}

impl DashboardConfig {
    /// Configuration targeting `api_url` with default knobs.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            max_reasonable_time: DEFAULT_MAX_REASONABLE_TIME,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Configuration from environment overrides, falling back to the
    /// local development endpoint.
    ///
    /// A non-numeric threshold override is ignored with a warning; a
    /// malformed endpoint URL is an error because every later request
    /// would fail anyway.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured URL is invalid.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let raw_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut config = Self::new(Url::parse(&raw_url)?);

        if let Ok(raw_threshold) = std::env::var(MAX_REASONABLE_TIME_ENV) {
            match raw_threshold.parse::<f64>() {
                Ok(threshold) => config.max_reasonable_time = threshold,
                Err(_) => {
                    tracing::warn!(
                        "Ignoring non-numeric {MAX_REASONABLE_TIME_ENV}={raw_threshold}"
                    );
                }
            }
        }
        Ok(config)
    }

    /// Set the outlier threshold in seconds.
    #[must_use]
    pub fn with_max_reasonable_time(mut self, seconds: f64) -> Self {
        self.max_reasonable_time = seconds;
        self
    }

    /// Set the end-to-end request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// URL of the upload operation under the configured base.
    #[must_use]
    pub fn upload_url(&self) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("upload");
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Result<DashboardConfig, url::ParseError> {
        Ok(DashboardConfig::new(Url::parse(url)?))
    }

    #[test]
    fn test_default_knobs() -> Result<(), url::ParseError> {
        let config = base(DEFAULT_API_URL)?;
        assert_eq!(config.max_reasonable_time, DEFAULT_MAX_REASONABLE_TIME);
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn test_builders_override_knobs() -> Result<(), url::ParseError> {
        let config = base(DEFAULT_API_URL)?
            .with_max_reasonable_time(60.0)
            .with_request_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(1));

        assert_eq!(config.max_reasonable_time, 60.0);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        Ok(())
    }

    #[test]
    fn test_upload_url_joins_cleanly() -> Result<(), url::ParseError> {
        assert_eq!(
            base("http://localhost:5000")?.upload_url().as_str(),
            "http://localhost:5000/upload"
        );
        assert_eq!(
            base("http://analyzer.internal/api/")?.upload_url().as_str(),
            "http://analyzer.internal/api/upload"
        );
        assert_eq!(
            base("https://analyzer.internal/api")?.upload_url().as_str(),
            "https://analyzer.internal/api/upload"
        );
        Ok(())
    }
}

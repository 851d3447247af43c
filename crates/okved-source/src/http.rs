use crate::source::ReferenceSource;
use crate::{Result, SourceError};
use std::time::Duration;

#[cfg(feature = "http-fetch")]
mod imp {
    use super::{Duration, ReferenceSource, Result, SourceError};
    use crate::source::read_limited;
    use reqwest::blocking::Client;
    use tracing::debug;
    use url::Url;

    const USER_AGENT: &str = "okved";
    const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        timeout: Duration,
        max_bytes: u64,
    }

    impl HttpSource {
        pub fn new(url: String, timeout: Duration, max_bytes: u64) -> Self {
            Self {
                url,
                timeout,
                max_bytes,
            }
        }
    }

    impl ReferenceSource for HttpSource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn fetch_json(&self) -> Result<String> {
            fetch_reference(&self.url, self.timeout, self.max_bytes)
        }
    }

    pub fn fetch_reference(url: &str, timeout: Duration, max_bytes: u64) -> Result<String> {
        let url = Url::parse(url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceError::UnsupportedScheme(url.scheme().to_string()));
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout.min(MAX_CONNECT_TIMEOUT))
            .build()?;

        debug!(url = %url, "fetching reference list");
        let response = client.get(url).send()?.error_for_status()?;

        if let Some(length) = response.content_length() {
            if length > max_bytes {
                return Err(SourceError::TooLarge { limit: max_bytes });
            }
        }

        read_limited(response, max_bytes)
    }
}

#[cfg(not(feature = "http-fetch"))]
mod imp {
    use super::{Duration, ReferenceSource, Result, SourceError};

    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        timeout: Duration,
        max_bytes: u64,
    }

    impl HttpSource {
        pub fn new(url: String, timeout: Duration, max_bytes: u64) -> Self {
            Self {
                url,
                timeout,
                max_bytes,
            }
        }
    }

    impl ReferenceSource for HttpSource {
        fn source_name(&self) -> &'static str {
            "http"
        }

        fn fetch_json(&self) -> Result<String> {
            fetch_reference(&self.url, self.timeout, self.max_bytes)
        }
    }

    pub fn fetch_reference(_url: &str, _timeout: Duration, _max_bytes: u64) -> Result<String> {
        Err(SourceError::Unavailable(
            "HTTP reference download requires the http-fetch feature".to_string(),
        ))
    }
}

pub use imp::{fetch_reference, HttpSource};

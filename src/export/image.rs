//! Vehicle image embedding for exported documents.
//!
//! Fetchers answer with a `data:` URI or a string starting with `Error:`.
//! An error answer never fails an export; the document is produced without
//! the image.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{bail, Context};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::blocking::Client;
use tracing::{debug, warn};

/// Prefix marking a failed fetch.
pub const ERROR_PREFIX: &str = "Error:";

/// Turns an image URL into an embeddable data URI.
pub trait ImageFetcher: Send + Sync {
    /// A `data:` URI, or a message starting with [`ERROR_PREFIX`].
    fn fetch_data_uri(&self, url: &str) -> String;
}

/// Interpret a fetcher answer: error answers mean no image.
pub fn embeddable(answer: String) -> Option<String> {
    if answer.starts_with(ERROR_PREFIX) {
        warn!("Vehicle image unavailable: {}", answer);
        None
    } else {
        Some(answer)
    }
}

/// Fetches images over HTTP and base64-encodes them.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    fn try_fetch(&self, url: &str) -> anyhow::Result<String> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .filter(|v| v.starts_with("image/"))
            .unwrap_or_else(|| "image/jpeg".to_string());

        let bytes = response.bytes()?;
        Ok(format!("data:{};base64,{}", mime, BASE64.encode(&bytes)))
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch_data_uri(&self, url: &str) -> String {
        match self.try_fetch(url) {
            Ok(uri) => uri,
            Err(e) => format!("{} {}", ERROR_PREFIX, e),
        }
    }
}

/// An image fetch running in the background while the buyer fills the form.
pub struct ImagePrefetch {
    handle: Option<JoinHandle<String>>,
}

impl ImagePrefetch {
    /// Start fetching `url`, if there is one.
    pub fn start(fetcher: Arc<dyn ImageFetcher>, url: Option<&str>) -> Self {
        let handle = url.map(|url| {
            let url = url.to_string();
            debug!("Prefetching vehicle image {}", url);
            thread::spawn(move || fetcher.fetch_data_uri(&url))
        });
        Self { handle }
    }

    /// A prefetch that yields no image.
    pub fn none() -> Self {
        Self { handle: None }
    }

    /// Wait for the fetch and return the data URI, if one was obtained.
    pub fn join(self) -> Option<String> {
        let handle = self.handle?;
        match handle.join() {
            Ok(answer) => embeddable(answer),
            Err(_) => {
                warn!("Vehicle image fetch thread panicked");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct Fixed(&'static str);

    impl ImageFetcher for Fixed {
        fn fetch_data_uri(&self, _url: &str) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn error_answer_means_no_image() {
        assert_eq!(embeddable("Error: 404".to_string()), None);
        assert_eq!(
            embeddable("data:image/png;base64,AAAA".to_string()).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn prefetch_yields_fetcher_answer() {
        let prefetch = ImagePrefetch::start(
            Arc::new(Fixed("data:image/png;base64,iVBO")),
            Some("https://cdn.example.com/a.png"),
        );
        assert_eq!(prefetch.join().as_deref(), Some("data:image/png;base64,iVBO"));
    }

    #[test]
    fn prefetch_without_url_yields_nothing() {
        assert!(ImagePrefetch::start(Arc::new(Fixed("data:x")), None)
            .join()
            .is_none());
        assert!(ImagePrefetch::none().join().is_none());
    }

    #[test]
    fn prefetch_error_yields_nothing() {
        let prefetch = ImagePrefetch::start(Arc::new(Fixed("Error: timed out")), Some("u"));
        assert!(prefetch.join().is_none());
    }

    #[test]
    fn http_fetcher_encodes_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/car.png");
            then.status(200)
                .header("content-type", "image/png")
                .body([1u8, 2, 3]);
        });

        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();
        let uri = fetcher.fetch_data_uri(&server.url("/car.png"));
        assert_eq!(uri, format!("data:image/png;base64,{}", BASE64.encode([1u8, 2, 3])));
    }

    #[test]
    fn http_fetcher_reports_failure_with_prefix() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.png");
            then.status(404);
        });

        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();
        let answer = fetcher.fetch_data_uri(&server.url("/missing.png"));
        assert!(answer.starts_with(ERROR_PREFIX), "{}", answer);
        assert!(answer.contains("404"));
    }

    #[test]
    fn http_fetcher_defaults_mime_type() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/car");
            then.status(200).body("abc");
        });

        let fetcher = HttpImageFetcher::new(Duration::from_secs(5)).unwrap();
        let uri = fetcher.fetch_data_uri(&server.url("/car"));
        assert!(uri.starts_with("data:image/jpeg;base64,"), "{}", uri);
    }
}

//! HTTP page fetcher.
//!
//! Issues blocking GET requests against a DummyJSON-compatible provider.
//! Runs on fetch worker threads, never on the UI thread.

use super::{parse_page, PageFetcher};
use crate::model::{FetchError, Page, RequestDescriptor};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Blocking HTTP implementation of [`PageFetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Build a fetcher for the provider at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidBaseUrl` if `base_url` does not parse or
    /// cannot carry a path, and `FetchError::Transport` if the HTTP client
    /// cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tabview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Parsed base URL every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, request: &RequestDescriptor) -> Result<Page, FetchError> {
        let url = request.to_url(&self.base_url)?;
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Provider returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        parse_page(request.resource, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Endpoint, ResourceKind};
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve exactly one HTTP response on a loopback port.
    ///
    /// Returns the base URL and a receiver yielding the request line.
    fn serve_once(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }
            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            tx.send(request_line.trim_end().to_string()).unwrap();
        });

        (format!("http://{addr}"), rx)
    }

    fn list_request(resource: ResourceKind) -> RequestDescriptor {
        RequestDescriptor {
            resource,
            endpoint: Endpoint::List,
            params: vec![
                ("limit".to_string(), "5".to_string()),
                ("skip".to_string(), "10".to_string()),
            ],
        }
    }

    // ===== Construction =====

    #[test]
    fn new_rejects_unparseable_base_url() {
        let err = HttpFetcher::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }

    #[test]
    fn new_rejects_base_without_path() {
        let err = HttpFetcher::new("mailto:someone@example.com", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }

    #[test]
    fn new_keeps_base_url() {
        let fetcher = HttpFetcher::new("https://dummyjson.com", Duration::from_secs(1)).unwrap();
        assert_eq!(fetcher.base_url().as_str(), "https://dummyjson.com/");
    }

    // ===== Fetching =====

    #[test]
    fn fetch_page_requests_path_and_parses_body() {
        let (base, requests) = serve_once(
            "200 OK",
            r#"{"users":[{"firstName":"Emily"}],"total":208,"skip":10,"limit":5}"#,
        );
        let fetcher = HttpFetcher::new(&base, Duration::from_secs(5)).unwrap();

        let page = fetcher.fetch_page(&list_request(ResourceKind::Users)).unwrap();

        assert_eq!(page.total, 208);
        assert_eq!(page.items[0].display("firstName").as_deref(), Some("Emily"));
        assert_eq!(
            requests.recv().unwrap(),
            "GET /users?limit=5&skip=10 HTTP/1.1"
        );
    }

    #[test]
    fn fetch_page_maps_error_status() {
        let (base, _requests) = serve_once("404 Not Found", r#"{"message":"not found"}"#);
        let fetcher = HttpFetcher::new(&base, Duration::from_secs(5)).unwrap();

        let err = fetcher
            .fetch_page(&list_request(ResourceKind::Products))
            .unwrap_err();

        match err {
            FetchError::Status { status, url } => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/products?limit=5&skip=10"), "url was {url}");
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_page_maps_bad_json_to_decode_error() {
        let (base, _requests) = serve_once("200 OK", "not json");
        let fetcher = HttpFetcher::new(&base, Duration::from_secs(5)).unwrap();

        let err = fetcher
            .fetch_page(&list_request(ResourceKind::Users))
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn fetch_page_maps_refused_connection_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let fetcher = HttpFetcher::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();

        let err = fetcher
            .fetch_page(&list_request(ResourceKind::Users))
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}

/// Image detail fetching
///
/// Resolves the content ID of a selected image and asks the metadata
/// endpoint for its author and dimensions. Every failure ends here: it is
/// logged and reported back as [`Action::MetadataFailed`].
use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{GalleryError, Result};
use crate::state::{Action, FetchTicket, ImageMetadata, ImageReference};

/// Anything that can answer `/id/{id}/info` style queries
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn image_info(&self, base_url: &str, content_id: &str) -> Result<ImageMetadata>;
}

/// Metadata endpoint for a content ID
pub fn info_url(base_url: &str, content_id: &str) -> String {
    format!("{}/id/{}/info", base_url.trim_end_matches('/'), content_id)
}

/// [`MetadataSource`] backed by the Picsum HTTP API
#[derive(Debug, Clone)]
pub struct PicsumClient {
    http: reqwest::Client,
}

impl PicsumClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MetadataSource for PicsumClient {
    async fn image_info(&self, base_url: &str, content_id: &str) -> Result<ImageMetadata> {
        let url = info_url(base_url, content_id);
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GalleryError::Status {
                status: response.status(),
                url,
            });
        }
        Ok(response.json::<ImageMetadata>().await?)
    }
}

/// Look up the details for `reference`
pub async fn lookup(source: &dyn MetadataSource, reference: &ImageReference) -> Result<ImageMetadata> {
    let content_id = reference.content_id()?;
    let base_url = reference.base_url()?;
    source.image_info(base_url, content_id).await
}

/// Run the fetch for a selection and turn the outcome into an action
pub async fn fetch_metadata(source: Arc<dyn MetadataSource>, ticket: FetchTicket) -> Action {
    match lookup(source.as_ref(), &ticket.reference).await {
        Ok(metadata) => {
            log::info!(
                "Loaded details for {} (id {:?}): {} ({:?}x{:?})",
                ticket.reference,
                metadata.id,
                metadata.author,
                metadata.width,
                metadata.height
            );
            Action::MetadataLoaded {
                token: ticket.token,
                metadata,
            }
        }
        Err(err) => {
            log::error!("Failed to fetch image details for {}: {}", ticket.reference, err);
            Action::MetadataFailed { token: ticket.token }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picsum::test_server;
    use std::sync::Mutex;

    /// Records every query and answers from a fixed result
    struct FakeSource {
        calls: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl FakeSource {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MetadataSource for FakeSource {
        async fn image_info(&self, base_url: &str, content_id: &str) -> Result<ImageMetadata> {
            self.calls
                .lock()
                .unwrap()
                .push((base_url.to_string(), content_id.to_string()));
            if self.fail {
                return Err(GalleryError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                    url: info_url(base_url, content_id),
                });
            }
            Ok(ImageMetadata {
                author: "Alice".to_string(),
                width: Some(5000),
                height: Some(3333),
                ..ImageMetadata::default()
            })
        }
    }

    fn ticket(url: &str) -> FetchTicket {
        FetchTicket {
            token: 3,
            reference: ImageReference::from_url(url),
        }
    }

    #[test]
    fn test_info_url() {
        assert_eq!(
            info_url("https://picsum.photos", "499"),
            "https://picsum.photos/id/499/info"
        );
        assert_eq!(
            info_url("https://picsum.photos/", "7"),
            "https://picsum.photos/id/7/info"
        );
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let source = FakeSource::new(false);
        let action = fetch_metadata(source.clone(), ticket("https://picsum.photos/id/499/120/127")).await;

        match action {
            Action::MetadataLoaded { token, metadata } => {
                assert_eq!(token, 3);
                assert_eq!(metadata.author, "Alice");
                assert_eq!(metadata.width, Some(5000));
                assert_eq!(metadata.height, Some(3333));
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert_eq!(
            source.calls(),
            vec![("https://picsum.photos".to_string(), "499".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_is_swallowed() {
        let source = FakeSource::new(true);
        let action = fetch_metadata(source, ticket("https://picsum.photos/id/12/120/127")).await;
        assert_eq!(action, Action::MetadataFailed { token: 3 });
    }

    #[tokio::test]
    async fn test_malformed_reference_skips_request() {
        let source = FakeSource::new(false);
        let action = fetch_metadata(source.clone(), ticket("https://picsum.photos/200/300")).await;
        assert_eq!(action, Action::MetadataFailed { token: 3 });
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_client_reads_info_endpoint() {
        let body = br#"{"id":"499","author":"Alice","width":5000,"height":3333,"url":"https://unsplash.com/photos/x","download_url":"https://picsum.photos/id/499/5000/3333"}"#;
        let (base, request) = test_server::serve_once("200 OK", "application/json", body).await;
        let client = Arc::new(PicsumClient::new(test_server::client()));

        let action = fetch_metadata(client, ticket(&format!("{base}/id/499/120/127"))).await;

        match action {
            Action::MetadataLoaded { token, metadata } => {
                assert_eq!(token, 3);
                assert_eq!(metadata.author, "Alice");
                assert_eq!(metadata.width, Some(5000));
                assert_eq!(metadata.height, Some(3333));
                assert_eq!(metadata.id.as_deref(), Some("499"));
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert!(request.await.unwrap().starts_with("GET /id/499/info "));
    }

    #[tokio::test]
    async fn test_client_invalid_json_fails() {
        let (base, _request) = test_server::serve_once("200 OK", "application/json", b"nope!").await;
        let client = Arc::new(PicsumClient::new(test_server::client()));

        let action = fetch_metadata(client, ticket(&format!("{base}/id/12/120/127"))).await;
        assert_eq!(action, Action::MetadataFailed { token: 3 });
    }

    #[tokio::test]
    async fn test_client_error_status_fails() {
        let (base, _request) = test_server::serve_once("404 Not Found", "text/plain", b"Image does not exist").await;
        let client = PicsumClient::new(test_server::client());

        match client.image_info(&base, "12").await {
            Err(GalleryError::Status { status, url }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(url, format!("{base}/id/12/info"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_error_status_becomes_failed_action() {
        let (base, _request) = test_server::serve_once("404 Not Found", "text/plain", b"").await;
        let client = Arc::new(PicsumClient::new(test_server::client()));

        let action = fetch_metadata(client, ticket(&format!("{base}/id/12/120/127"))).await;
        assert_eq!(action, Action::MetadataFailed { token: 3 });
    }
}

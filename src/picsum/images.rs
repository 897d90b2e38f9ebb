/// Thumbnail downloads
///
/// The gallery only builds image URLs; this module fetches the bytes
/// behind them so iced can decode and draw them.
use crate::error::{GalleryError, Result};
use crate::state::ImageReference;

/// Download the image behind `reference`
pub async fn download(http: reqwest::Client, reference: ImageReference) -> Result<Vec<u8>> {
    let response = http.get(reference.url()).send().await?;
    if !response.status().is_success() {
        return Err(GalleryError::Status {
            status: response.status(),
            url: reference.url().to_string(),
        });
    }
    let bytes = response.bytes().await?;
    log::debug!("Downloaded {} ({} KB)", reference, bytes.len() / 1024);
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picsum::test_server;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[tokio::test]
    async fn test_download_returns_bytes() {
        let (base, request) = test_server::serve_once("200 OK", "image/png", PNG_SIGNATURE).await;
        let reference = ImageReference::new(&base, 7, 120, 127);

        let bytes = download(test_server::client(), reference).await.unwrap();
        assert_eq!(bytes, PNG_SIGNATURE);
        assert!(request.await.unwrap().starts_with("GET /id/7/120/127 "));
    }

    #[tokio::test]
    async fn test_download_error_status() {
        let (base, _request) = test_server::serve_once("500 Internal Server Error", "text/plain", b"").await;
        let reference = ImageReference::new(&base, 7, 120, 127);

        let result = download(test_server::client(), reference).await;
        assert!(matches!(
            result,
            Err(GalleryError::Status { status, .. }) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }
}

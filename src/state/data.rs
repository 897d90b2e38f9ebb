/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the Picsum client and the UI layer.
use serde::Deserialize;
use std::fmt;

use crate::error::{GalleryError, Result};

/// A generated image URL of the form `{base}/id/{content_id}/{width}/{height}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference(String);

impl ImageReference {
    /// Build a reference for the given catalog entry and tile size
    pub fn new(base_url: &str, content_id: u16, width: u32, height: u32) -> Self {
        let base = base_url.trim_end_matches('/');
        ImageReference(format!("{base}/id/{content_id}/{width}/{height}"))
    }

    /// Wrap an existing URL without validating it
    pub fn from_url(url: impl Into<String>) -> Self {
        ImageReference(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }

    /// The text between `/id/` and the next `/`
    pub fn content_id(&self) -> Result<&str> {
        let (_, rest) = self
            .0
            .split_once("/id/")
            .ok_or_else(|| GalleryError::MalformedReference(self.0.clone()))?;
        let id = rest.split('/').next().unwrap_or_default();
        if id.is_empty() {
            return Err(GalleryError::MalformedReference(self.0.clone()));
        }
        Ok(id)
    }

    /// Everything before `/id/`, used to derive the metadata endpoint
    pub fn base_url(&self) -> Result<&str> {
        self.0
            .split_once("/id/")
            .map(|(base, _)| base)
            .ok_or_else(|| GalleryError::MalformedReference(self.0.clone()))
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author and dimensions of a photo, as returned by `/id/{id}/info`
///
/// Unknown fields are ignored. Missing fields stay empty and are
/// rendered as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Page of the original photo on its source site
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Identifies the metadata request issued for one selection
pub type RequestToken = u64;

/// What the UI needs to start a metadata fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub reference: ImageReference,
}

/// Picsum photo API
///
/// This module handles:
/// - Generating random image URLs (generator.rs)
/// - Fetching image details from the info endpoint (fetcher.rs)
/// - Downloading the image bytes for display (images.rs)

pub mod fetcher;
pub mod generator;
pub mod images;

#[cfg(test)]
mod test_server;

pub use fetcher::{MetadataSource, PicsumClient};
pub use generator::ImageUrlGenerator;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://picsum.photos";

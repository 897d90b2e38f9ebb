/// State management module
///
/// This module holds all application state:
/// - Shared data structures (data.rs)
/// - The gallery state record and its reducer (gallery.rs)

pub mod data;
pub mod gallery;

pub use data::{FetchTicket, ImageMetadata, ImageReference};
pub use gallery::{Action, Effect, GalleryState};

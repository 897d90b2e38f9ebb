/// Random image URL generation
///
/// Content IDs are drawn uniformly from the first 500 entries of the
/// Picsum catalog. Tile dimensions are derived from the viewport width
/// so that two tiles plus margins fit side by side.
use std::num::NonZeroUsize;

use crate::state::ImageReference;

/// Size of the catalog range we draw from
const CATALOG_SIZE: u16 = 500;

/// Horizontal margin subtracted from half the viewport for the tile width
const WIDTH_MARGIN: f32 = 67.5;

/// Vertical margin subtracted from half the viewport for the tile height
const HEIGHT_MARGIN: f32 = 60.0;

/// Produces batches of [`ImageReference`]s
pub struct ImageUrlGenerator {
    base_url: String,
    rng: fastrand::Rng,
}

impl ImageUrlGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Same as [`ImageUrlGenerator::new`] but with a reproducible sequence
    pub fn with_seed(base_url: impl Into<String>, seed: u64) -> Self {
        Self {
            base_url: base_url.into(),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Generate `count` references sized for `viewport_width`
    pub fn generate_batch(&mut self, count: NonZeroUsize, viewport_width: f32) -> Vec<ImageReference> {
        let (width, height) = tile_size(viewport_width);

        (0..count.get())
            .map(|_| {
                let content_id = content_id_from_draw(self.rng.f64());
                ImageReference::new(&self.base_url, content_id, width, height)
            })
            .collect()
    }
}

/// Map a uniform draw in [0, 1) to a content ID in [0, 499]
pub fn content_id_from_draw(draw: f64) -> u16 {
    let id = (draw * f64::from(CATALOG_SIZE)).floor();
    id.clamp(0.0, f64::from(CATALOG_SIZE - 1)) as u16
}

/// Tile width and height for a viewport, never below 1
pub fn tile_size(viewport_width: f32) -> (u32, u32) {
    let half = viewport_width / 2.0;
    let width = (half - WIDTH_MARGIN).floor().max(1.0) as u32;
    let height = (half - HEIGHT_MARGIN).floor().max(1.0) as u32;
    (width, height)
}

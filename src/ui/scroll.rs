/// Infinite scroll trigger
///
/// Requests another batch when the bottom of the viewport comes within
/// [`NEAR_BOTTOM_MARGIN`] of the end of the content. Only one batch may
/// be outstanding at a time.
use std::num::NonZeroUsize;

/// Distance from the end of the content that counts as "near the bottom"
pub const NEAR_BOTTOM_MARGIN: f32 = 200.0;

/// Number of images appended per pagination step
pub const BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Scroll position as reported by the scrollable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    pub fn from_viewport(viewport: &iced::widget::scrollable::Viewport) -> Self {
        Self {
            offset_y: viewport.absolute_offset().y,
            content_height: viewport.content_bounds().height,
            viewport_height: viewport.bounds().height,
        }
    }

    pub fn is_near_bottom(&self) -> bool {
        self.offset_y + self.viewport_height >= self.content_height - NEAR_BOTTOM_MARGIN
    }
}

#[derive(Debug, Default)]
pub struct ScrollMonitor {
    in_flight: bool,
}

impl ScrollMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the batch size to load, or `None` if nothing should happen
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<NonZeroUsize> {
        self.request_if(metrics.is_near_bottom())
    }

    /// Ask for a batch regardless of scroll position (initial fill)
    pub fn request(&mut self) -> Option<NonZeroUsize> {
        self.request_if(true)
    }

    /// The requested batch has been appended
    pub fn batch_completed(&mut self) {
        self.in_flight = false;
    }

    fn request_if(&mut self, wanted: bool) -> Option<NonZeroUsize> {
        if !wanted || self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(BATCH_SIZE)
    }
}

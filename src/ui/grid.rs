/// Two-column image grid
///
/// Even indices go in the left column, odd ones in the right, so the
/// visual order runs down each column rather than across rows.
use iced::widget::{button, container, image, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};
use std::collections::HashMap;

use crate::state::{GalleryState, ImageReference};
use crate::ui::scroll::ScrollMetrics;
use crate::Message;

/// Vertical gap between tiles
const TILE_SPACING: f32 = 30.0;

/// Padding around each column
const COLUMN_PADDING: f32 = 5.0;

/// Height of the taller (left) column holding `image_count` tiles
pub fn content_height(image_count: usize, tile_height: f32) -> f32 {
    let rows = image_count.div_ceil(2);
    let gaps = rows.saturating_sub(1);
    rows as f32 * tile_height + gaps as f32 * TILE_SPACING + 2.0 * COLUMN_PADDING
}

/// Scroll metrics derived from the layout rather than from a scroll event
///
/// The scrollable reports nothing while its content fits inside it, so
/// this is what tells the monitor that a short grid needs more images.
pub fn estimated_metrics(image_count: usize, tile_height: f32, offset_y: f32, viewport_height: f32) -> ScrollMetrics {
    ScrollMetrics {
        offset_y,
        content_height: content_height(image_count, tile_height),
        viewport_height,
    }
}

/// Build the scrollable grid
///
/// `tile` is the on-screen tile size; tiles whose bytes have not arrived
/// yet show a loading label instead.
pub fn view<'a>(
    state: &'a GalleryState,
    thumbnails: &'a HashMap<ImageReference, image::Handle>,
    tile: (f32, f32),
) -> Element<'a, Message> {
    let left = column_of(state.left_column(), thumbnails, tile, Alignment::End);
    let right = column_of(state.right_column(), thumbnails, tile, Alignment::Start);

    scrollable(row![left, right].width(Length::Fill))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn column_of<'a>(
    references: impl Iterator<Item = &'a ImageReference>,
    thumbnails: &'a HashMap<ImageReference, image::Handle>,
    tile: (f32, f32),
    align: Alignment,
) -> Element<'a, Message> {
    Column::with_children(references.map(|reference| tile_view(reference, thumbnails.get(reference), tile)))
        .spacing(TILE_SPACING)
        .padding(COLUMN_PADDING)
        .align_x(align)
        .width(Length::Fill)
        .into()
}

fn tile_view<'a>(
    reference: &'a ImageReference,
    handle: Option<&'a image::Handle>,
    (width, height): (f32, f32),
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone()).width(width).height(height).into(),
        None => container(text("Loading...").size(14))
            .center_x(Length::Fixed(width))
            .center_y(Length::Fixed(height))
            .into(),
    };

    button(content)
        .on_press(Message::ImageClicked(reference.clone()))
        .padding(0)
        .style(button::text)
        .into()
}

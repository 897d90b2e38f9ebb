/// Detail overlay for the selected image
use iced::widget::{button, center, column, container, image, mouse_area, opaque, stack, text, Column};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::{GalleryState, ImageMetadata};
use crate::Message;

/// Lay `content` over `base`, dimming the base and closing on outside click
pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(Color { a: 0.8, ..Color::BLACK }.into()),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Contents of the modal for the current selection
pub fn view<'a>(state: &'a GalleryState, handle: Option<&'a image::Handle>, max_width: f32) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(max_width))
            .into(),
        None => text("Loading...").into(),
    };

    // Details only appear once loading is over and something arrived
    let details: Element<'a, Message> = if state.is_loading() {
        text("Loading details...").into()
    } else if let Some(metadata) = state.metadata() {
        details_view(metadata)
    } else {
        Column::new().into()
    };

    let content = column![
        button("Close").on_press(Message::CloseModal),
        picture,
        details,
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .padding(20)
        .style(container::rounded_box)
        .into()
}

fn details_view(metadata: &ImageMetadata) -> Element<'_, Message> {
    let mut lines: Column<'_, Message> = column![
        text(format!("Author: {}", metadata.author)).size(16),
        text(format!("Width: {}", dimension(metadata.width))).size(16),
        text(format!("Height: {}", dimension(metadata.height))).size(16),
    ]
    .spacing(4)
    .align_x(Alignment::End);

    if let Some(url) = &metadata.url {
        lines = lines.push(text(format!("Source: {url}")).size(12));
    }
    if let Some(download_url) = &metadata.download_url {
        lines = lines.push(text(format!("Full size: {download_url}")).size(12));
    }

    lines.into()
}

/// Missing values render as empty text
fn dimension(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

use clap::Parser;
use iced::keyboard::{self, key};
use iced::widget::{image, scrollable};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

mod config;
mod error;
mod logging;
mod picsum;
mod state;
mod ui;

use config::{Args, Config};
use picsum::{fetcher, generator, images, ImageUrlGenerator, MetadataSource, PicsumClient};
use state::{Action, Effect, GalleryState, ImageReference};
use ui::scroll::{ScrollMetrics, ScrollMonitor};

/// Main application state
struct Gallery {
    /// Image list, selection and details
    state: GalleryState,
    /// Infinite scroll trigger
    monitor: ScrollMonitor,
    generator: ImageUrlGenerator,
    /// Shared HTTP client for thumbnails
    http: reqwest::Client,
    /// Where image details come from
    details: Arc<dyn MetadataSource>,
    /// Decoded thumbnails keyed by URL
    thumbnails: HashMap<ImageReference, image::Handle>,
    /// Viewport width measured for the most recent batch
    viewport_width: f32,
    /// Current window height
    window_height: f32,
    /// Last scroll offset reported by the grid
    scroll_offset: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The grid was scrolled
    Scrolled(scrollable::Viewport),
    /// Window size was measured for a pending batch
    ViewportMeasured(NonZeroUsize, Size),
    /// The window was resized
    WindowResized(Size),
    /// An image tile was clicked
    ImageClicked(ImageReference),
    /// Close button, outside click or Escape
    CloseModal,
    /// A state transition coming back from a background task
    Gallery(Action),
    /// Image bytes arrived for a tile
    ThumbnailLoaded(ImageReference, Vec<u8>),
    /// A thumbnail download failed (already logged)
    ThumbnailFailed,
}

impl Gallery {
    /// Create a new instance of the application and request the first batch
    fn new(config: Config) -> (Self, Task<Message>) {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("random-gallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("Falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });

        let generator = match config.seed {
            Some(seed) => ImageUrlGenerator::with_seed(&config.api_base, seed),
            None => ImageUrlGenerator::new(&config.api_base),
        };

        log::info!("Gallery initialized against {}", config.api_base);

        let mut gallery = Gallery {
            state: GalleryState::new(),
            monitor: ScrollMonitor::new(),
            generator,
            details: Arc::new(PicsumClient::new(http.clone())),
            http,
            thumbnails: HashMap::new(),
            viewport_width: config.window_width,
            window_height: config.window_height,
            scroll_offset: 0.0,
        };

        let initial = match gallery.monitor.request() {
            Some(count) => gallery.measure_viewport(count),
            None => Task::none(),
        };

        (gallery, initial)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled(viewport) => {
                let metrics = ScrollMetrics::from_viewport(&viewport);
                self.scroll_offset = metrics.offset_y;
                match self.monitor.on_scroll(metrics) {
                    Some(count) => self.measure_viewport(count),
                    None => Task::none(),
                }
            }
            Message::WindowResized(size) => {
                self.window_height = size.height;
                self.fill_viewport()
            }
            Message::ViewportMeasured(count, size) => {
                self.viewport_width = size.width;
                self.window_height = size.height;
                let batch = self.generator.generate_batch(count, size.width);
                log::debug!("Generated {} images for width {}", batch.len(), size.width);

                let downloads = self.download_thumbnails(&batch);
                let task = self.apply(Action::BatchLoaded(batch));
                self.monitor.batch_completed();
                log::debug!("Gallery now holds {} images", self.state.images().len());
                Task::batch([task, downloads, self.fill_viewport()])
            }
            Message::ImageClicked(reference) => self.apply(Action::Select(reference)),
            Message::CloseModal => {
                if self.state.selected().is_none() {
                    return Task::none();
                }
                self.apply(Action::Close)
            }
            Message::Gallery(action) => self.apply(action),
            Message::ThumbnailLoaded(reference, bytes) => {
                self.thumbnails.insert(reference, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::ThumbnailFailed => Task::none(),
        }
    }

    /// Run the reducer and start whatever work it asks for
    fn apply(&mut self, action: Action) -> Task<Message> {
        let (next, effect) = std::mem::take(&mut self.state).reduce(action);
        self.state = next;

        match effect {
            Some(Effect::FetchMetadata(ticket)) => {
                log::info!("Fetching details for {}", ticket.reference);
                Task::perform(
                    fetcher::fetch_metadata(Arc::clone(&self.details), ticket),
                    Message::Gallery,
                )
            }
            None => Task::none(),
        }
    }

    /// Request another batch if the grid does not reach past the window yet
    ///
    /// The grid only reports scroll events once its content overflows, so
    /// a short grid is checked against its estimated height instead.
    fn fill_viewport(&mut self) -> Task<Message> {
        let (_, tile_height) = generator::tile_size(self.viewport_width);
        let metrics = ui::grid::estimated_metrics(
            self.state.images().len(),
            tile_height as f32,
            self.scroll_offset,
            self.window_height,
        );
        match self.monitor.on_scroll(metrics) {
            Some(count) => {
                log::debug!("Grid is {} px in a {} px window, loading more", metrics.content_height, metrics.viewport_height);
                self.measure_viewport(count)
            }
            None => Task::none(),
        }
    }

    /// Query the window size, then generate `count` images for it
    fn measure_viewport(&self, count: NonZeroUsize) -> Task<Message> {
        let fallback = Size::new(self.viewport_width, self.window_height);
        window::get_latest().then(move |id| match id {
            Some(id) => window::get_size(id).map(move |size| Message::ViewportMeasured(count, size)),
            None => Task::done(Message::ViewportMeasured(count, fallback)),
        })
    }

    fn download_thumbnails(&self, batch: &[ImageReference]) -> Task<Message> {
        let tasks = batch
            .iter()
            .filter(|reference| !self.thumbnails.contains_key(*reference))
            .map(|reference| {
                let key = reference.clone();
                Task::perform(images::download(self.http.clone(), reference.clone()), move |result| {
                    match result {
                        Ok(bytes) => Message::ThumbnailLoaded(key.clone(), bytes),
                        Err(err) => {
                            log::warn!("Failed to load {}: {}", key, err);
                            Message::ThumbnailFailed
                        }
                    }
                })
            });
        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let tile = generator::tile_size(self.viewport_width);
        let grid = ui::grid::view(&self.state, &self.thumbnails, (tile.0 as f32, tile.1 as f32));

        match self.state.selected() {
            Some(selection) => {
                let handle = self.thumbnails.get(&selection.reference);
                let details = ui::modal::view(&self.state, handle, (self.viewport_width - 90.0).max(100.0));
                ui::modal::overlay(grid, details, Message::CloseModal)
            }
            None => grid,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseModal),
                _ => None,
            }),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::default_path);
    let loaded = match &config_path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let config = config.with_args(&args);

    let _logger = logging::init(config.log_spec());
    if let Some(err) = load_error {
        log::warn!("Using default settings: {err}");
    }
    log::info!("Starting Random Gallery {}", env!("CARGO_PKG_VERSION"));

    let window_size = config.window_size();
    iced::application("Random Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Gallery::new(config))
}

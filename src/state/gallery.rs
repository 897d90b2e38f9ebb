use super::data::{FetchTicket, ImageMetadata, ImageReference, RequestToken};

/// The currently open image and the token of the fetch issued for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub reference: ImageReference,
    pub token: RequestToken,
}

/// One event from the user or the network
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A generated batch is ready to be appended
    BatchLoaded(Vec<ImageReference>),
    /// The user clicked an image
    Select(ImageReference),
    MetadataLoaded {
        token: RequestToken,
        metadata: ImageMetadata,
    },
    MetadataFailed {
        token: RequestToken,
    },
    /// The user dismissed the modal
    Close,
}

/// Work the caller must start after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchMetadata(FetchTicket),
}

/// Complete gallery state
///
/// Transitions go through [`GalleryState::reduce`], which consumes the
/// old state and returns the new one together with any effect to run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    images: Vec<ImageReference>,
    selected: Option<Selection>,
    metadata: Option<ImageMetadata>,
    loading: bool,
    /// Token of the most recent selection, kept after close so a late
    /// completion for it still lands
    current_token: Option<RequestToken>,
    next_token: RequestToken,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All generated references in insertion order
    pub fn images(&self) -> &[ImageReference] {
        &self.images
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    pub fn metadata(&self) -> Option<&ImageMetadata> {
        self.metadata.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Left column: even indices
    pub fn left_column(&self) -> impl Iterator<Item = &ImageReference> {
        self.images.iter().step_by(2)
    }

    /// Right column: odd indices
    pub fn right_column(&self) -> impl Iterator<Item = &ImageReference> {
        self.images.iter().skip(1).step_by(2)
    }

    pub fn reduce(mut self, action: Action) -> (Self, Option<Effect>) {
        match action {
            Action::BatchLoaded(batch) => {
                self.images.extend(batch);
                (self, None)
            }
            Action::Select(reference) => {
                let token = self.next_token;
                self.next_token += 1;
                self.current_token = Some(token);
                self.selected = Some(Selection {
                    reference: reference.clone(),
                    token,
                });
                // Cleared up front so the previous image's details never
                // show next to the new one
                self.metadata = None;
                self.loading = true;
                (
                    self,
                    Some(Effect::FetchMetadata(FetchTicket { token, reference })),
                )
            }
            Action::MetadataLoaded { token, metadata } => {
                if self.is_current(token) {
                    self.metadata = Some(metadata);
                    self.loading = false;
                } else {
                    log::debug!("Dropping metadata for superseded request {token}");
                }
                (self, None)
            }
            Action::MetadataFailed { token } => {
                if self.is_current(token) {
                    self.loading = false;
                }
                (self, None)
            }
            Action::Close => {
                self.selected = None;
                (self, None)
            }
        }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        self.current_token == Some(token)
    }
}

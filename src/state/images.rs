//! Projections from stored image records to the logo slot and gallery grid.
//!
//! DESIGN
//! ======
//! Views are plain data describing the `<img>` elements to emit, so the
//! components stay thin and every rendering rule is testable without a DOM.
//! Loaders read their collection once and drop the store borrow afterwards.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::config::GALLERY_LIMIT;
use crate::store::{Collection, ImageRecord, ImageStore, LOGO_KEY, StoreError};

/// Alt text of the header logo.
pub const LOGO_ALT: &str = "Royal Photowaala Logo";

/// Display height of the header logo.
pub const LOGO_HEIGHT_PX: u32 = 80;

/// Right margin separating the logo from the site title.
pub const LOGO_MARGIN_RIGHT_PX: u32 = 10;

/// Shown in the gallery when the collection is empty.
pub const GALLERY_PLACEHOLDER: &str = "No images available. Admin can add images in dashboard.";

/// `loading` attribute of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

/// `decoding` attribute of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoding {
    Auto,
    Async,
}

impl Decoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Async => "async",
        }
    }
}

/// One `<img>` element to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageElement {
    pub src: String,
    pub alt: String,
    pub loading: Loading,
    pub decoding: Decoding,
}

/// Contents of the logo slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LogoView {
    /// Nothing to show (no record, empty payload, or store not read yet).
    #[default]
    Empty,
    Image(ImageElement),
}

impl LogoView {
    pub fn from_record(record: Option<&ImageRecord>) -> Self {
        match record {
            Some(record) if record.has_data() => Self::Image(ImageElement {
                src: record.data.clone(),
                alt: LOGO_ALT.to_owned(),
                loading: Loading::Eager,
                decoding: Decoding::Auto,
            }),
            _ => Self::Empty,
        }
    }

    /// Inline style fixing the logo's display size.
    pub fn style() -> String {
        format!("height: {LOGO_HEIGHT_PX}px; margin-right: {LOGO_MARGIN_RIGHT_PX}px;")
    }
}

/// Contents of the gallery grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GalleryView {
    /// The store has not been read; the page's static markup stays visible.
    #[default]
    Pending,
    /// The collection is empty.
    Placeholder,
    Images(Vec<ImageElement>),
}

impl GalleryView {
    /// Project records in store order, keeping only the first [`GALLERY_LIMIT`].
    pub fn from_records(records: &[ImageRecord]) -> Self {
        if records.is_empty() {
            return Self::Placeholder;
        }
        let images = records
            .iter()
            .take(GALLERY_LIMIT)
            .enumerate()
            .map(|(i, record)| ImageElement {
                src: record.data.clone(),
                alt: format!("Gallery Image {}", i + 1),
                loading: Loading::Lazy,
                decoding: Decoding::Async,
            })
            .collect();
        Self::Images(images)
    }

    pub fn image_count(&self) -> usize {
        match self {
            Self::Images(images) => images.len(),
            Self::Pending | Self::Placeholder => 0,
        }
    }
}

/// Read the logo slot record and project it.
///
/// # Errors
///
/// Propagates store read failures.
pub async fn load_logo<S: ImageStore>(store: &S) -> Result<LogoView, StoreError> {
    let record = store.get(Collection::Logo, LOGO_KEY).await?;
    Ok(LogoView::from_record(record.as_ref()))
}

/// Read the gallery collection and project it.
///
/// # Errors
///
/// Propagates store read failures.
pub async fn load_gallery<S: ImageStore>(store: &S) -> Result<GalleryView, StoreError> {
    let records = store.get_all(Collection::Gallery).await?;
    Ok(GalleryView::from_records(&records))
}

//! Hero slideshow model: initial plan, circular rotation, and the handle that
//! keeps the rotation timer cancellable.
//!
//! TRADE-OFFS
//! ==========
//! The rotation works on the sources captured when the home collection was
//! read. Images added by the admin dashboard afterwards only appear on the
//! next page load.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::FALLBACK_HERO_URL;
use crate::store::{Collection, ImageRecord, ImageStore, StoreError};

/// CSS `background-image` value for `url`.
pub fn background_css(url: &str) -> String {
    format!("url('{url}')")
}

/// What the hero should do once the home collection has been read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlideshowPlan {
    /// No home images: show the fallback and never rotate.
    Fallback,
    /// Show the first source, then rotate through all of them.
    Rotate(Rotation),
}

impl SlideshowPlan {
    pub fn from_records(records: &[ImageRecord]) -> Self {
        match Rotation::new(records.iter().map(|r| r.data.clone()).collect()) {
            Some(rotation) => Self::Rotate(rotation),
            None => Self::Fallback,
        }
    }

    pub fn needs_timer(&self) -> bool {
        matches!(self, Self::Rotate(_))
    }
}

/// Circular cursor over a non-empty list of background sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    frames: Vec<String>,
    current: usize,
}

impl Rotation {
    /// Start at the first frame. Returns `None` for an empty list.
    pub fn new(frames: Vec<String>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self { frames, current: 0 })
    }

    pub fn current(&self) -> &str {
        &self.frames[self.current]
    }

    /// Move to `(current + 1) mod len`.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.frames.len();
    }
}

/// Current state of the hero background.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HeroBackground {
    /// Not yet read from the store; stylesheet background applies.
    #[default]
    Static,
    Fallback,
    Rotating(Rotation),
}

impl HeroBackground {
    /// Inline `background-image` for the hero, if the store set one.
    pub fn css(&self) -> Option<String> {
        match self {
            Self::Static => None,
            Self::Fallback => Some(background_css(FALLBACK_HERO_URL)),
            Self::Rotating(rotation) => Some(background_css(rotation.current())),
        }
    }

    /// Timer tick: advance the rotation if there is one.
    pub fn advance(&mut self) {
        if let Self::Rotating(rotation) = self {
            rotation.advance();
        }
    }
}

impl From<SlideshowPlan> for HeroBackground {
    fn from(plan: SlideshowPlan) -> Self {
        match plan {
            SlideshowPlan::Fallback => Self::Fallback,
            SlideshowPlan::Rotate(rotation) => Self::Rotating(rotation),
        }
    }
}

/// Cancellation handle for a running rotation timer.
///
/// The timer task and the page share one thread, so clones share a plain
/// `Cell`. Dropping the handle does not stop the timer; only
/// [`SlideshowHandle::cancel`] does.
#[derive(Clone, Debug)]
pub struct SlideshowHandle {
    alive: Rc<Cell<bool>>,
}

impl SlideshowHandle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.alive.get()
    }

    /// Stop the timer before its next tick.
    pub fn cancel(&self) {
        self.alive.set(false);
    }
}

impl Default for SlideshowHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the home collection and build the slideshow plan.
///
/// # Errors
///
/// Propagates store read failures.
pub async fn load_slideshow<S: ImageStore>(store: &S) -> Result<SlideshowPlan, StoreError> {
    let records = store.get_all(Collection::Home).await?;
    Ok(SlideshowPlan::from_records(&records))
}

//! Page-wide context owned by the home page controller.
//!
//! DESIGN
//! ======
//! Every surface the store loaders and widgets write to is a signal held here,
//! and the slideshow's cancellation handle is retained alongside them. The
//! controller passes this context to render functions explicitly instead of
//! keeping module-level handles.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::SiteConfig;
use crate::state::booking::BookingState;
use crate::state::images::{GalleryView, LogoView};
use crate::state::reviews::ReviewsView;
use crate::state::slideshow::{HeroBackground, SlideshowHandle};
use crate::state::theme::Theme;

/// Reactive surfaces of the single site page.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: StoredValue<SiteConfig>,
    pub logo: RwSignal<LogoView>,
    pub gallery: RwSignal<GalleryView>,
    pub hero: RwSignal<HeroBackground>,
    pub slideshow: StoredValue<Option<SlideshowHandle>, LocalStorage>,
    pub theme: RwSignal<Theme>,
    pub menu_open: RwSignal<bool>,
    pub booking: RwSignal<BookingState>,
    pub reviews: RwSignal<ReviewsView>,
}

impl PageContext {
    pub fn new(config: SiteConfig, theme: Theme) -> Self {
        Self {
            config: StoredValue::new(config),
            logo: RwSignal::new(LogoView::default()),
            gallery: RwSignal::new(GalleryView::default()),
            hero: RwSignal::new(HeroBackground::default()),
            slideshow: StoredValue::new_local(None),
            theme: RwSignal::new(theme),
            menu_open: RwSignal::new(false),
            booking: RwSignal::new(BookingState::default()),
            reviews: RwSignal::new(ReviewsView::default()),
        }
    }

    /// Retain the handle of a newly started rotation, cancelling any earlier one.
    pub fn retain_slideshow(&self, handle: SlideshowHandle) {
        self.slideshow.update_value(|slot| {
            if let Some(previous) = slot.replace(handle) {
                previous.cancel();
            }
        });
    }

    /// Stop the rotation timer, if one is running.
    pub fn stop_slideshow(&self) {
        self.slideshow.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.cancel();
            }
        });
    }

    #[cfg(test)]
    pub(crate) fn slideshow_running(&self) -> bool {
        self.slideshow
            .with_value(|slot| slot.as_ref().is_some_and(SlideshowHandle::is_running))
    }
}

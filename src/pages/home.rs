//! Home page controller: the single route of the site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opens the local image store once per page load and fans the handle out to
//! three independent render passes (logo, gallery, slideshow). Each pass reads
//! its collection, writes one surface of the `PageContext`, and drops its read.
//! A store that cannot be opened is logged and leaves the static page as is.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::gallery_grid::GalleryGrid;
use crate::components::hero::Hero;
use crate::components::logo_slot::LogoSlot;
use crate::components::nav_menu::NavMenu;
use crate::components::reviews::ReviewsSection;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::ApiError;
use crate::net::types::Review;
use crate::state::images::{load_gallery, load_logo};
use crate::state::page::PageContext;
use crate::state::reviews::ReviewsView;
use crate::state::slideshow::{SlideshowHandle, load_slideshow};
use crate::store::ImageStore;

/// Landing page with every section of the site.
#[component]
pub fn HomePage() -> impl IntoView {
    let page = expect_context::<PageContext>();

    load_images(page);
    load_reviews(page);
    on_cleanup(move || page.stop_slideshow());

    view! {
        <header class="site-header">
            <LogoSlot/>
            <span class="site-title">"Royal Photowaala"</span>
            <NavMenu/>
            <ThemeToggle/>
        </header>
        <main>
            <Hero/>
            <GalleryGrid/>
            <BookingForm/>
            <ReviewsSection/>
        </main>
        <footer class="site-footer">
            <p>"© Royal Photowaala"</p>
        </footer>
    }
}

/// Open the image store and start the three render passes.
pub fn load_images(page: PageContext) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use std::rc::Rc;

        use crate::config::{SCHEMA_VERSION, STORE_NAME};
        use crate::store::idb::IdbImageStore;

        let store = match IdbImageStore::open(STORE_NAME, SCHEMA_VERSION).await {
            Ok(store) => Rc::new(store),
            Err(err) => {
                log::error!("IndexedDB open error: {err}");
                return;
            }
        };

        let logo_store = Rc::clone(&store);
        leptos::task::spawn_local(async move { render_logo(page, logo_store.as_ref()).await });
        let gallery_store = Rc::clone(&store);
        leptos::task::spawn_local(async move { render_gallery(page, gallery_store.as_ref()).await });
        leptos::task::spawn_local(async move { render_slideshow(page, store.as_ref()).await });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = page;
    }
}

/// Fill the logo slot from the logo collection.
pub async fn render_logo<S: ImageStore>(page: PageContext, store: &S) {
    match load_logo(store).await {
        Ok(view) => page.logo.set(view),
        Err(err) => log::error!("logo render failed: {err}"),
    }
}

/// Fill the gallery grid from the gallery collection.
pub async fn render_gallery<S: ImageStore>(page: PageContext, store: &S) {
    match load_gallery(store).await {
        Ok(view) => {
            log::debug!("gallery rendering {} images", view.image_count());
            page.gallery.set(view);
        }
        Err(err) => log::error!("gallery render failed: {err}"),
    }
}

/// Set the hero background from the home collection and start the rotation
/// timer when there is at least one image.
pub async fn render_slideshow<S: ImageStore>(page: PageContext, store: &S) {
    let plan = match load_slideshow(store).await {
        Ok(plan) => plan,
        Err(err) => {
            log::error!("slideshow render failed: {err}");
            return;
        }
    };
    let needs_timer = plan.needs_timer();
    page.hero.set(plan.into());
    if needs_timer {
        page.retain_slideshow(start_rotation(page));
    }
}

/// Advance the hero every slideshow period until the handle is cancelled.
fn start_rotation(page: PageContext) -> SlideshowHandle {
    let handle = SlideshowHandle::new();
    #[cfg(feature = "csr")]
    {
        use crate::config::SLIDESHOW_PERIOD_MS;
        use crate::state::slideshow::HeroBackground;

        let ticker = handle.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(SLIDESHOW_PERIOD_MS))).await;
                if !ticker.is_running() {
                    break;
                }
                page.hero.update(HeroBackground::advance);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = page;
    }
    handle
}

/// Fetch the review list and publish it to the page.
pub fn load_reviews(page: PageContext) {
    #[cfg(feature = "csr")]
    {
        let config = page.config.get_value();
        leptos::task::spawn_local(async move {
            apply_reviews(page, crate::net::api::fetch_reviews(&config).await);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = page;
    }
}

/// Publish a review fetch outcome.
pub fn apply_reviews(page: PageContext, outcome: Result<Vec<Review>, ApiError>) {
    match outcome {
        Ok(reviews) => page.reviews.set(ReviewsView::from_reviews(reviews)),
        Err(err) => {
            log::error!("error loading reviews: {err}");
            page.reviews.set(ReviewsView::Failed);
        }
    }
}

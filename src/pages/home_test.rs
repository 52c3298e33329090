use futures::executor::block_on;

use super::*;
use crate::config::SiteConfig;
use crate::state::images::{GalleryView, LogoView};
use crate::state::slideshow::HeroBackground;
use crate::state::theme::Theme;
use crate::store::memory::MemoryImageStore;
use crate::store::{Collection, ImageRecord, LOGO_KEY};

fn with_page(test: impl FnOnce(PageContext)) {
    let owner = Owner::new();
    owner.with(|| test(PageContext::new(SiteConfig::default(), Theme::Dark)));
}

fn opened() -> MemoryImageStore {
    let mut store = MemoryImageStore::new();
    store.open(1).unwrap();
    store
}

fn review(name: &str) -> Review {
    Review {
        name: name.to_owned(),
        rating: 5,
        comment: "Lovely shots".to_owned(),
    }
}

// =============================================================
// Store-backed surfaces
// =============================================================

#[test]
fn logo_record_fills_the_slot() {
    let mut store = opened();
    store
        .put(Collection::Logo, ImageRecord::new(LOGO_KEY, "data:image/png;base64,AAA"))
        .unwrap();

    with_page(|page| {
        block_on(render_logo(page, &store));
        match page.logo.get_untracked() {
            LogoView::Image(image) => assert_eq!(image.src, "data:image/png;base64,AAA"),
            LogoView::Empty => panic!("logo should render"),
        }
    });
}

#[test]
fn gallery_is_capped() {
    let mut store = opened();
    for i in 0..75 {
        store.add(Collection::Gallery, format!("img-{i}")).unwrap();
    }

    with_page(|page| {
        block_on(render_gallery(page, &store));
        assert_eq!(page.gallery.get_untracked().image_count(), 50);
    });
}

#[test]
fn empty_gallery_shows_placeholder() {
    let store = opened();
    with_page(|page| {
        block_on(render_gallery(page, &store));
        assert_eq!(page.gallery.get_untracked(), GalleryView::Placeholder);
    });
}

#[test]
fn empty_home_collection_uses_fallback_without_timer() {
    let store = opened();
    with_page(|page| {
        block_on(render_slideshow(page, &store));
        assert_eq!(page.hero.get_untracked(), HeroBackground::Fallback);
        assert!(!page.slideshow_running());
    });
}

#[test]
fn home_images_start_rotation() {
    let mut store = opened();
    store.add(Collection::Home, "a.jpg").unwrap();
    store.add(Collection::Home, "b.jpg").unwrap();

    with_page(|page| {
        block_on(render_slideshow(page, &store));
        assert_eq!(page.hero.get_untracked().css().as_deref(), Some("url('a.jpg')"));
        assert!(page.slideshow_running());

        page.hero.update(HeroBackground::advance);
        assert_eq!(page.hero.get_untracked().css().as_deref(), Some("url('b.jpg')"));

        page.stop_slideshow();
        assert!(!page.slideshow_running());
    });
}

#[test]
fn unopened_store_leaves_surfaces_untouched() {
    let store = MemoryImageStore::new();
    with_page(|page| {
        block_on(render_logo(page, &store));
        block_on(render_gallery(page, &store));
        block_on(render_slideshow(page, &store));
        assert_eq!(page.logo.get_untracked(), LogoView::Empty);
        assert_eq!(page.gallery.get_untracked(), GalleryView::Pending);
        assert_eq!(page.hero.get_untracked(), HeroBackground::Static);
        assert!(!page.slideshow_running());
    });
}

// =============================================================
// Reviews
// =============================================================

#[test]
fn fetched_reviews_are_published() {
    with_page(|page| {
        apply_reviews(page, Ok(vec![review("Asha")]));
        assert_eq!(page.reviews.get_untracked(), ReviewsView::Loaded(vec![review("Asha")]));
    });
}

#[test]
fn no_reviews_shows_empty_message() {
    with_page(|page| {
        apply_reviews(page, Ok(Vec::new()));
        assert_eq!(page.reviews.get_untracked(), ReviewsView::Empty);
    });
}

#[test]
fn failed_fetch_marks_reviews_failed() {
    with_page(|page| {
        apply_reviews(page, Err(ApiError::Transport("offline".into())));
        assert_eq!(page.reviews.get_untracked(), ReviewsView::Failed);
    });
}

//! Gallery grid filled from the local image store.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::images::{GALLERY_PLACEHOLDER, GalleryView};
use crate::state::page::PageContext;

/// `#gallery`: placeholder text when empty, otherwise up to 50 lazy images.
#[component]
pub fn GalleryGrid() -> impl IntoView {
    let page = expect_context::<PageContext>();

    view! {
        <section id="portfolio" class="gallery-section">
            <h2>"Our Work"</h2>
            <div id="gallery" class="gallery">
                {move || match page.gallery.get() {
                    GalleryView::Pending => ().into_any(),
                    GalleryView::Placeholder => view! { <p>{GALLERY_PLACEHOLDER}</p> }.into_any(),
                    GalleryView::Images(images) => {
                        images
                            .into_iter()
                            .map(|image| {
                                view! {
                                    <img
                                        src=image.src
                                        alt=image.alt
                                        loading=image.loading.as_str()
                                        decoding=image.decoding.as_str()
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

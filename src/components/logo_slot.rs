//! Header logo slot filled from the local image store.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::images::LogoView;
use crate::state::page::PageContext;

/// `#logo-container`: empty until a logo record with data is read.
#[component]
pub fn LogoSlot() -> impl IntoView {
    let page = expect_context::<PageContext>();

    view! {
        <div id="logo-container" class="logo-container">
            {move || match page.logo.get() {
                LogoView::Empty => ().into_any(),
                LogoView::Image(image) => {
                    view! {
                        <img
                            src=image.src
                            alt=image.alt
                            style=LogoView::style()
                            loading=image.loading.as_str()
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

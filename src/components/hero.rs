//! Full-bleed landing section whose background the slideshow drives.

use leptos::prelude::*;

use crate::state::page::PageContext;
use crate::util::dom::scroll_to_id;

/// `.home` hero section.
#[component]
pub fn Hero() -> impl IntoView {
    let page = expect_context::<PageContext>();

    let background = move || {
        page.hero
            .with(|hero| hero.css())
            .map(|css| format!("background-image: {css};"))
            .unwrap_or_default()
    };

    view! {
        <section id="home" class="home" style=background>
            <div class="home__content">
                <h1>"Royal Photowaala"</h1>
                <p>"Capturing your moments, royally."</p>
                <a
                    href="#booking"
                    class="btn"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_id("booking");
                    }
                >
                    "Book a Shoot"
                </a>
            </div>
        </section>
    }
}

//! Primary navigation with the mobile menu toggle and smooth in-page scrolling.

use leptos::prelude::*;

use crate::state::page::PageContext;
use crate::util::dom::{anchor_target, scroll_to_id};

const LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#portfolio", "Portfolio"),
    ("#booking", "Book"),
    ("#reviews", "Reviews"),
];

/// `.menu-toggle` button plus the `#primary-nav` list it shows on mobile.
#[component]
pub fn NavMenu() -> impl IntoView {
    let page = expect_context::<PageContext>();

    let on_toggle = move |_| page.menu_open.update(|open| *open = !*open);

    view! {
        <button
            class="menu-toggle"
            aria-controls="primary-nav"
            aria-expanded=move || page.menu_open.get().to_string()
            aria-label="Toggle navigation"
            on:click=on_toggle
        >
            "☰"
        </button>
        <ul id="primary-nav" class="nav-links" class:show=move || page.menu_open.get()>
            {LINKS
                .into_iter()
                .map(|(href, label)| {
                    view! {
                        <li>
                            <a
                                href=href
                                on:click=move |ev| {
                                    if let Some(id) = anchor_target(href) {
                                        ev.prevent_default();
                                        scroll_to_id(id);
                                    }
                                }
                            >
                                {label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::page::PageContext;

/// `#theme-toggle`: shows the current theme's icon and flips it on click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let page = expect_context::<PageContext>();

    view! {
        <button
            id="theme-toggle"
            class="btn theme-toggle"
            title="Toggle theme"
            on:click=move |_| {
                let next = crate::util::theme_persistence::toggle(page.theme.get_untracked());
                page.theme.set(next);
            }
        >
            {move || page.theme.get().icon()}
        </button>
    }
}

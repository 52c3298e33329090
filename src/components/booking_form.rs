//! Booking form: local validation, submission, and the WhatsApp hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! A valid booking is posted to the backend, which answers with a WhatsApp
//! link. The link opens in a new tab; when the browser blocks the popup a
//! manual link with the decoded message preview is shown instead.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::net::api::submit_booking;
use crate::state::booking::{BookingField, BookingState, FormMessage};
use crate::state::page::PageContext;
use crate::util::dom::{scroll_to_id_centered, today};
use crate::util::whatsapp::open_in_new_tab;

const PACKAGES: [(&str, &str); 4] = [
    ("wedding", "Wedding"),
    ("pre-wedding", "Pre-Wedding"),
    ("portrait", "Portrait"),
    ("event", "Event"),
];

/// One labelled input bound to a draft field, with its validation message.
#[component]
fn BookingInput(field: BookingField, label: &'static str, kind: &'static str) -> impl IntoView {
    let page = expect_context::<PageContext>();

    view! {
        <div class="form-group">
            <label for=field.id()>{label}</label>
            <input
                id=field.id()
                name=field.id()
                type=kind
                required=field.is_required()
                class:error=move || page.booking.with(|s| s.error_for(field).is_some())
                prop:value=move || page.booking.with(|s| s.draft.value(field).to_owned())
                on:input=move |ev| page.booking.update(|s| s.draft.set(field, event_target_value(&ev)))
            />
            {move || {
                page.booking
                    .with(|s| s.error_for(field))
                    .map(|message| view! { <div class="error-message">{message}</div> })
            }}
        </div>
    }
}

/// `#bookingForm`.
#[component]
pub fn BookingForm() -> impl IntoView {
    let page = expect_context::<PageContext>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        page.booking.update(|state| request = state.begin_submit(today()));
        let Some(request) = request else {
            if let Some(field) = page.booking.with_untracked(BookingState::first_error_field) {
                scroll_to_id_centered(field.id());
            }
            return;
        };

        let config = page.config.get_value();
        leptos::task::spawn_local(async move {
            let outcome = submit_booking(&config, &request).await;
            match &outcome {
                Ok(link) => log::info!("booking accepted, handing off to {link}"),
                Err(err) => log::error!("booking error: {err}"),
            }
            page.booking.update(|state| state.finish(&outcome));
            if let Ok(link) = &outcome {
                if !open_in_new_tab(link) {
                    page.booking.update(|state| state.popup_blocked(link));
                }
            }
        });
    };

    let package_field = BookingField::Package;
    let details_field = BookingField::Details;

    view! {
        <section id="booking" class="booking-section">
            <h2>"Book Your Shoot"</h2>
            <form id="bookingForm" class="booking-form" novalidate=true on:submit=on_submit>
                <BookingInput field=BookingField::Name label="Full Name" kind="text"/>
                <BookingInput field=BookingField::Email label="Email" kind="email"/>
                <BookingInput field=BookingField::Phone label="Phone" kind="tel"/>
                <div class="form-group">
                    <label for=package_field.id()>"Package"</label>
                    <select
                        id=package_field.id()
                        name=package_field.id()
                        required=true
                        class:error=move || page.booking.with(|s| s.error_for(package_field).is_some())
                        prop:value=move || page.booking.with(|s| s.draft.package.clone())
                        on:change=move |ev| page.booking.update(|s| s.draft.set(package_field, event_target_value(&ev)))
                    >
                        <option value="">"Select a package"</option>
                        {PACKAGES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                    {move || {
                        page.booking
                            .with(|s| s.error_for(package_field))
                            .map(|message| view! { <div class="error-message">{message}</div> })
                    }}
                </div>
                <BookingInput field=BookingField::Date label="Preferred Date" kind="date"/>
                <div class="form-group">
                    <label for=details_field.id()>"Details"</label>
                    <textarea
                        id=details_field.id()
                        name=details_field.id()
                        prop:value=move || page.booking.with(|s| s.draft.details.clone())
                        on:input=move |ev| page.booking.update(|s| s.draft.set(details_field, event_target_value(&ev)))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="btn"
                    class:loading=move || page.booking.with(|s| s.submitting)
                    disabled=move || page.booking.with(|s| s.submitting)
                >
                    <Show when=move || page.booking.with(|s| s.submitting)>
                        <span class="spinner"></span>
                        " "
                    </Show>
                    {move || page.booking.with(BookingState::submit_label)}
                </button>
                {move || {
                    page.booking
                        .with(|s| s.messages.clone())
                        .into_iter()
                        .map(render_message)
                        .collect_view()
                }}
            </form>
        </section>
    }
}

fn render_message(message: FormMessage) -> AnyView {
    match message {
        FormMessage::Success(text) => view! { <div class="form-message success">{text}</div> }.into_any(),
        FormMessage::Error(text) => view! { <div class="form-message error">{text}</div> }.into_any(),
        FormMessage::WhatsAppFallback { link, preview } => {
            view! {
                <div class="form-message info">
                    <p>"Could not open WhatsApp automatically. Please click the button below:"</p>
                    <div class="whatsapp-fallback">
                        <a href=link class="btn btn-whatsapp" target="_blank" rel="noopener">
                            "💬 Open in WhatsApp"
                        </a>
                        <div class="message-preview">
                            <p>
                                <strong>"Message to send:"</strong>
                            </p>
                            <pre>{preview}</pre>
                        </div>
                    </div>
                </div>
            }
                .into_any()
        }
    }
}

//! Reviews section: approved review list and the submission form.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::api::submit_review;
use crate::state::page::PageContext;
use crate::state::reviews::{ReviewDraft, ReviewsView, stars, submission_message};
use crate::util::dom::alert;

/// `#reviewList`: cards for each review, or a status message.
#[component]
pub fn ReviewList() -> impl IntoView {
    let page = expect_context::<PageContext>();

    view! {
        <div id="reviewList" class="review-list">
            {move || match page.reviews.get() {
                ReviewsView::Loaded(reviews) => {
                    reviews
                        .into_iter()
                        .map(|review| {
                            view! {
                                <div class="review-card">
                                    <strong>{review.name}</strong>
                                    " – "
                                    {stars(review.rating)}
                                    <p>{review.comment}</p>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
                state => state.message().map(|message| view! { <p>{message}</p> }).into_any(),
            }}
        </div>
    }
}

/// `#reviewForm`: submits a review for moderation and reports via alert.
#[component]
pub fn ReviewForm() -> impl IntoView {
    let page = expect_context::<PageContext>();
    let draft = RwSignal::new(ReviewDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(review) = draft.with_untracked(ReviewDraft::to_review) else {
            alert(submission_message(false));
            return;
        };
        let config = page.config.get_value();
        leptos::task::spawn_local(async move {
            let success = match submit_review(&config, &review).await {
                Ok(success) => success,
                Err(err) => {
                    log::error!("error submitting review: {err}");
                    false
                }
            };
            alert(submission_message(success));
            if success {
                draft.set(ReviewDraft::default());
            }
        });
    };

    view! {
        <form id="reviewForm" class="review-form" on:submit=on_submit>
            <input
                id="reviewName"
                type="text"
                placeholder="Your name"
                required=true
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <select
                id="reviewRating"
                required=true
                prop:value=move || draft.with(|d| d.rating.clone())
                on:change=move |ev| draft.update(|d| d.rating = event_target_value(&ev))
            >
                <option value="">"Rating"</option>
                {(1..=5)
                    .rev()
                    .map(|rating: i32| view! { <option value=rating.to_string()>{stars(rating)}</option> })
                    .collect_view()}
            </select>
            <textarea
                id="reviewComment"
                placeholder="Share your experience"
                required=true
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |ev| draft.update(|d| d.comment = event_target_value(&ev))
            ></textarea>
            <button type="submit" class="btn">
                "Submit Review"
            </button>
        </form>
    }
}

/// Reviews section wrapper.
#[component]
pub fn ReviewsSection() -> impl IntoView {
    view! {
        <section id="reviews" class="reviews-section">
            <h2>"What Our Clients Say"</h2>
            <ReviewList/>
            <ReviewForm/>
        </section>
    }
}

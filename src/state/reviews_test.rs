use super::*;

fn review(name: &str, rating: i32) -> Review {
    Review {
        name: name.into(),
        rating,
        comment: "Lovely".into(),
    }
}

#[test]
fn stars_repeat_per_rating_point() {
    assert_eq!(stars(3), "⭐⭐⭐");
    assert_eq!(stars(0), "");
}

#[test]
fn stars_are_clamped() {
    assert_eq!(stars(9), "⭐⭐⭐⭐⭐");
    assert_eq!(stars(-2), "");
}

#[test]
fn empty_review_list_shows_invitation() {
    let view = ReviewsView::from_reviews(Vec::new());
    assert_eq!(view, ReviewsView::Empty);
    assert_eq!(view.message(), Some("No reviews yet. Be the first to review!"));
}

#[test]
fn loaded_reviews_show_no_message() {
    let view = ReviewsView::from_reviews(vec![review("Ravi", 5)]);
    assert_eq!(view.message(), None);
    assert!(matches!(view, ReviewsView::Loaded(ref r) if r.len() == 1));
}

#[test]
fn failed_load_shows_retry_hint() {
    assert_eq!(
        ReviewsView::Failed.message(),
        Some("Unable to load reviews. Please try again later.")
    );
    assert_eq!(ReviewsView::default().message(), None);
}

#[test]
fn draft_trims_and_parses_rating() {
    let draft = ReviewDraft {
        name: " Meera ".into(),
        rating: "4".into(),
        comment: " Great work \n".into(),
    };
    assert_eq!(
        draft.to_review(),
        Some(Review {
            name: "Meera".into(),
            rating: 4,
            comment: "Great work".into(),
        })
    );
}

#[test]
fn draft_with_non_numeric_rating_is_rejected() {
    let draft = ReviewDraft {
        name: "Meera".into(),
        rating: String::new(),
        comment: "ok".into(),
    };
    assert_eq!(draft.to_review(), None);
}

#[test]
fn submission_message_matches_outcome() {
    assert_eq!(submission_message(true), "Review submitted for approval!");
    assert_eq!(submission_message(false), "Error submitting review. Please try again.");
}

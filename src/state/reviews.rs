//! Review list projection and the review submission draft.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use crate::net::types::Review;

pub const NO_REVIEWS_MESSAGE: &str = "No reviews yet. Be the first to review!";
pub const REVIEWS_FAILED_MESSAGE: &str = "Unable to load reviews. Please try again later.";
pub const REVIEW_SUBMITTED_MESSAGE: &str = "Review submitted for approval!";
pub const REVIEW_FAILED_MESSAGE: &str = "Error submitting review. Please try again.";

/// Highest rating shown as stars.
pub const MAX_STARS: i32 = 5;

/// One star per rating point, clamped to `0..=MAX_STARS`.
pub fn stars(rating: i32) -> String {
    let count = usize::try_from(rating.clamp(0, MAX_STARS)).unwrap_or_default();
    "⭐".repeat(count)
}

/// Contents of the review list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReviewsView {
    #[default]
    Loading,
    Empty,
    Failed,
    Loaded(Vec<Review>),
}

impl ReviewsView {
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        if reviews.is_empty() { Self::Empty } else { Self::Loaded(reviews) }
    }

    /// Message shown instead of cards, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(NO_REVIEWS_MESSAGE),
            Self::Failed => Some(REVIEWS_FAILED_MESSAGE),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

/// Inputs of the review form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: String,
    pub comment: String,
}

impl ReviewDraft {
    /// Build the submission body. Returns `None` when the rating is not a number.
    pub fn to_review(&self) -> Option<Review> {
        let rating = self.rating.trim().parse::<i32>();
        match rating {
            Ok(rating) => Some(Review {
                name: self.name.trim().to_owned(),
                rating,
                comment: self.comment.trim().to_owned(),
            }),
            Err(err) => {
                log::warn!("review rating {:?} is not a number: {err}", self.rating);
                None
            }
        }
    }
}

/// Alert text for a finished submission.
pub fn submission_message(success: bool) -> &'static str {
    if success { REVIEW_SUBMITTED_MESSAGE } else { REVIEW_FAILED_MESSAGE }
}

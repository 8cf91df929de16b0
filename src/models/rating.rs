use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted rating value.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating value.
pub const MAX_RATING: u8 = 5;

/// A user's rating of one lesson.
///
/// There is at most one rating per lesson and user. Rating a lesson again
/// replaces the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub lesson: String,
    pub user_id: String,
    pub value: u8,
    pub updated_at: DateTime<Utc>,
}

/// Input for rating a lesson.
///
/// `value` is wider than a stored rating so that any integer reaches
/// [`validate_rating`] and is rejected as out of range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRatingInput {
    pub value: i64,
}

/// One entry of a user's ratings across the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRating {
    pub lesson: String,
    /// `None` if the user has not rated this lesson.
    pub value: Option<u8>,
}

/// Aggregate ratings for a lesson across all users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub lesson: String,
    pub count: u32,
    pub average: Option<f64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Lesson not found: {0}")]
    UnknownLesson(String),
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(i64),
}

/// Check that a value is an acceptable rating.
pub fn validate_rating(value: i64) -> Result<u8, RatingError> {
    match u8::try_from(value) {
        Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => Ok(rating),
        _ => Err(RatingError::OutOfRange(value)),
    }
}

//! Domain models for lesson ratings.
//!
//! - [`Rating`]: one user's 1–5 score for one lesson.
//! - [`LessonRating`]: a user's rating (or lack of one) for a lesson, used when
//!   listing ratings across the whole curriculum.
//! - [`RatingSummary`]: count and average over all users.

mod rating;

pub use rating::*;

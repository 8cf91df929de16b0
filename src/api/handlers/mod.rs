use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use super::error::ApiError;
use super::user::CurrentUser;
use crate::curriculum::{self, NavigationContext, CURRICULUM};
use crate::db::Database;
use crate::models::*;
use crate::pages::{self, PageContext};

// ============================================================
// Pages
// ============================================================

pub async fn index() -> Html<String> {
    Html(pages::index().into_string())
}

pub async fn load_page(
    State(db): State<Database>,
    Path(page_name): Path<String>,
    user: Option<CurrentUser>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let navigation = curriculum::navigate(&page_name);

    // Only lessons carry ratings.
    let rating = match (&user, navigation.is_known()) {
        (Some(user), true) => db
            .get_rating(&page_name, user.id())
            .map_err(ApiError::from_storage)?
            .map(|r| r.value),
        _ => None,
    };

    let context = PageContext {
        navigation: navigation.context(),
        rating,
    };

    match pages::render(&page_name, &context) {
        Some(markup) => Ok((StatusCode::OK, Html(markup.into_string()))),
        None => {
            tracing::debug!("No template for page {:?}", page_name);
            Ok((
                StatusCode::NOT_FOUND,
                Html(pages::not_found(&page_name).into_string()),
            ))
        }
    }
}

// ============================================================
// Curriculum
// ============================================================

pub async fn list_lessons() -> Json<&'static [&'static str]> {
    Json(CURRICULUM)
}

pub async fn get_navigation(Path(name): Path<String>) -> Json<NavigationContext> {
    Json(curriculum::navigate(&name).context())
}

// ============================================================
// Ratings
// ============================================================

fn ensure_lesson(name: &str) -> Result<(), ApiError> {
    if curriculum::is_lesson(name) {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("Lesson not found: {}", name)))
    }
}

pub async fn get_rating(
    State(db): State<Database>,
    Path(name): Path<String>,
    user: CurrentUser,
) -> Result<Json<Rating>, ApiError> {
    ensure_lesson(&name)?;
    db.get_rating(&name, user.id())
        .map_err(ApiError::from_storage)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Rating not found".to_string()))
}

pub async fn set_rating(
    State(db): State<Database>,
    Path(name): Path<String>,
    user: CurrentUser,
    input: Result<Json<SetRatingInput>, JsonRejection>,
) -> Result<Json<Rating>, ApiError> {
    let Json(input) = input.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    db.set_rating(&name, user.id(), input.value)
        .map(Json)
        .map_err(ApiError::from_storage)
}

pub async fn delete_rating(
    State(db): State<Database>,
    Path(name): Path<String>,
    user: CurrentUser,
) -> Result<StatusCode, ApiError> {
    ensure_lesson(&name)?;
    if db
        .delete_rating(&name, user.id())
        .map_err(ApiError::from_storage)?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("Rating not found".to_string()))
    }
}

pub async fn get_rating_summary(
    State(db): State<Database>,
    Path(name): Path<String>,
) -> Result<Json<RatingSummary>, ApiError> {
    db.get_rating_summary(&name)
        .map(Json)
        .map_err(ApiError::from_storage)
}

pub async fn list_user_ratings(
    State(db): State<Database>,
    user: CurrentUser,
) -> Result<Json<Vec<LessonRating>>, ApiError> {
    db.get_user_ratings(user.id())
        .map(Json)
        .map_err(ApiError::from_storage)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

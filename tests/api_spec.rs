use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use physics_lessons::api::create_router;
use physics_lessons::config::ServerConfig;
use physics_lessons::db::Database;
use physics_lessons::models::*;

fn setup() -> TestServer {
    let db = Database::open_memory().expect("Failed to create database");
    db.migrate().expect("Failed to migrate");
    let app = create_router(db, &ServerConfig::local());
    TestServer::new(app).expect("Failed to create test server")
}

fn user_header() -> HeaderName {
    HeaderName::from_static("x-user-id")
}

fn user(id: &'static str) -> HeaderValue {
    HeaderValue::from_static(id)
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn renders_landing_page() {
        let server = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains("href=\"/gravity\""));
    }

    #[tokio::test]
    async fn renders_first_lesson_with_next_link_only() {
        let server = setup();

        let response = server.get("/gravity").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Lesson 1 of 5"));
        assert!(html.contains("rel=\"next\" href=\"/newtons-law\""));
        assert!(!html.contains("rel=\"prev\""));
    }

    #[tokio::test]
    async fn renders_last_lesson_with_prev_link_only() {
        let server = setup();

        let response = server.get("/buoyancy").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Lesson 5 of 5"));
        assert!(html.contains("rel=\"prev\" href=\"/conservation\""));
        assert!(!html.contains("rel=\"next\""));
    }

    #[tokio::test]
    async fn renders_simulator_without_navigation() {
        let server = setup();

        let response = server.get("/simulator").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("simulator-canvas"));
        assert!(!html.contains("Lesson "));
    }

    #[tokio::test]
    async fn renders_blackhole_without_navigation() {
        let server = setup();

        let response = server.get("/blackhole").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<canvas id=\"canvas\">"));
        assert!(html.contains("src=\"/static/physics/scripts/blackhole.js\""));
        assert!(!html.contains("Lesson "));
    }

    #[tokio::test]
    async fn returns_not_found_for_page_without_template() {
        let server = setup();

        let response = server.get("/levers").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("levers"));
    }

    #[tokio::test]
    async fn shows_the_users_rating_on_the_lesson() {
        let server = setup();
        server
            .put("/api/v1/lessons/conservation/rating")
            .add_header(user_header(), user("alice"))
            .json(&SetRatingInput { value: 4 })
            .await
            .assert_status_ok();

        let response = server
            .get("/conservation")
            .add_header(user_header(), user("alice"))
            .await;
        assert!(response.text().contains("Your rating: 4 / 5"));

        let anonymous = server.get("/conservation").await;
        assert!(!anonymous.text().contains("Your rating"));
    }
}

mod lessons {
    use super::*;

    #[tokio::test]
    async fn lists_the_curriculum_in_order() {
        let server = setup();

        let response = server.get("/api/v1/lessons").await;

        response.assert_status_ok();
        let lessons: Vec<String> = response.json();
        assert_eq!(
            lessons,
            vec!["gravity", "newtons-law", "drag-and-friction", "conservation", "buoyancy"]
        );
    }

    #[tokio::test]
    async fn returns_navigation_for_interior_lesson() {
        let server = setup();

        let response = server.get("/api/v1/lessons/newtons-law").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "lessons": ["gravity", "newtons-law", "drag-and-friction", "conservation", "buoyancy"],
            "page_index": 2,
            "next": "drag-and-friction",
            "prev": "gravity",
        }));
    }

    #[tokio::test]
    async fn returns_empty_navigation_for_unknown_lesson() {
        let server = setup();

        let response = server.get("/api/v1/lessons/levers").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({}));
    }
}

mod ratings {
    use super::*;

    #[tokio::test]
    async fn requires_a_user() {
        let server = setup();

        let response = server
            .put("/api/v1/lessons/gravity/rating")
            .json(&SetRatingInput { value: 3 })
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sets_and_reads_back_a_rating() {
        let server = setup();

        let created = server
            .put("/api/v1/lessons/gravity/rating")
            .add_header(user_header(), user("alice"))
            .json(&SetRatingInput { value: 3 })
            .await
            .json::<Rating>();
        assert_eq!(created.value, 3);

        let response = server
            .get("/api/v1/lessons/gravity/rating")
            .add_header(user_header(), user("alice"))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Rating>().value, 3);
    }

    #[tokio::test]
    async fn returns_not_found_when_unrated() {
        let server = setup();

        let response = server
            .get("/api/v1/lessons/gravity/rating")
            .add_header(user_header(), user("bob"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_unknown_lesson() {
        let server = setup();

        let response = server
            .put("/api/v1/lessons/levers/rating")
            .add_header(user_header(), user("alice"))
            .json(&SetRatingInput { value: 3 })
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_out_of_range_value() {
        let server = setup();

        let response = server
            .put("/api/v1/lessons/gravity/rating")
            .add_header(user_header(), user("alice"))
            .json(&SetRatingInput { value: 9 })
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_values_outside_a_byte_as_bad_request() {
        let server = setup();

        for value in [300, -1] {
            let response = server
                .put("/api/v1/lessons/gravity/rating")
                .add_header(user_header(), user("alice"))
                .json(&serde_json::json!({ "value": value }))
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            assert!(response.text().contains("between 1 and 5"));
        }
    }

    #[tokio::test]
    async fn rejects_malformed_body_as_bad_request() {
        let server = setup();

        let response = server
            .put("/api/v1/lessons/gravity/rating")
            .add_header(user_header(), user("alice"))
            .json(&serde_json::json!({ "value": "five" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listing_ratings_requires_a_user() {
        let server = setup();

        let response = server.get("/api/v1/ratings").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn deleting_a_rating_requires_a_user() {
        let server = setup();

        let response = server.delete("/api/v1/lessons/gravity/rating").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn summary_of_unknown_lesson_is_not_found() {
        let server = setup();

        let response = server.get("/api/v1/lessons/levers/ratings/summary").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deletes_a_rating() {
        let server = setup();
        server
            .put("/api/v1/lessons/buoyancy/rating")
            .add_header(user_header(), user("alice"))
            .json(&SetRatingInput { value: 5 })
            .await;

        server
            .delete("/api/v1/lessons/buoyancy/rating")
            .add_header(user_header(), user("alice"))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server
            .delete("/api/v1/lessons/buoyancy/rating")
            .add_header(user_header(), user("alice"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn summarizes_ratings_across_users() {
        let server = setup();
        for (id, value) in [("alice", 4), ("bob", 2)] {
            server
                .put("/api/v1/lessons/conservation/rating")
                .add_header(user_header(), user(id))
                .json(&SetRatingInput { value })
                .await;
        }

        let summary = server
            .get("/api/v1/lessons/conservation/ratings/summary")
            .await
            .json::<RatingSummary>();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, Some(3.0));
    }

    #[tokio::test]
    async fn lists_the_users_ratings() {
        let server = setup();
        server
            .put("/api/v1/lessons/drag-and-friction/rating")
            .add_header(user_header(), user("alice"))
            .json(&SetRatingInput { value: 1 })
            .await;

        let ratings = server
            .get("/api/v1/ratings")
            .add_header(user_header(), user("alice"))
            .await
            .json::<Vec<LessonRating>>();

        assert_eq!(ratings.len(), 5);
        assert_eq!(ratings[2].lesson, "drag-and-friction");
        assert_eq!(ratings[2].value, Some(1));
        assert!(ratings.iter().filter(|r| r.value.is_some()).count() == 1);
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}

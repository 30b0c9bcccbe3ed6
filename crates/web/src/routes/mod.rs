use axum::Router;
use tkr::Store;

use crate::features::{fees, leaderboard, registrations, submissions, tournaments};

pub fn create_router(store: Store) -> Router {
    let api = Router::new()
        .nest(
            "/tournaments",
            tournaments::routes::routes()
                .merge(registrations::routes::tournament_routes())
                .merge(leaderboard::routes::routes()),
        )
        .nest(
            "/registrations",
            registrations::routes::routes().merge(submissions::routes::registration_routes()),
        )
        .nest("/submissions", submissions::routes::routes())
        .merge(fees::routes::routes());

    Router::new().nest("/api", api).with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use chrono::{Duration, FixedOffset, Utc};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tkr::models::FeeBreakdown;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Store::new(FixedOffset::east_opt(0).unwrap()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn tournament(show_prize_pool: bool) -> Value {
        json!({
            "name": "Weekend Kill Race",
            "map_id": "verdansk",
            "team_size": 2,
            "consecutive_hours": 3,
            "days": 2,
            "best_games_count": 2,
            "placement_multipliers": [
                { "placement": 1, "multiplier": "2.5" },
                { "placement": 2, "multiplier": "2.0" }
            ],
            "entry_fee": { "kind": "paid", "amount": "20" },
            "host_percentage": "0.1",
            "show_prize_pool": show_prize_pool
        })
    }

    fn duo(start_time: chrono::NaiveDateTime) -> Value {
        json!({
            "team_name": "Night Owls",
            "team_rank": 25,
            "players": [
                { "name": "ace", "rank": 15 },
                { "name": "bolt", "rank": 10 }
            ],
            "start_time": start_time
        })
    }

    async fn create_tournament(app: &Router, show_prize_pool: bool) -> String {
        let response = send(app, "POST", "/api/tournaments", Some(tournament(show_prize_pool))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["tournament_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn register(app: &Router, tournament_id: &str, start_time: chrono::NaiveDateTime) -> String {
        let response = send(
            app,
            "POST",
            &format!("/api/tournaments/{tournament_id}/registrations"),
            Some(duo(start_time)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["registration_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn submit_and_verify_through_the_api() {
        let app = app();
        let tournament_id = create_tournament(&app, true).await;
        let registration_id =
            register(&app, &tournament_id, Utc::now().naive_utc() - Duration::hours(1)).await;

        let response = send(
            &app,
            "POST",
            &format!("/api/registrations/{registration_id}/submissions"),
            Some(json!({
                "game_number": 1,
                "kills": 10,
                "placement": 1,
                "vod_url": "https://twitch.tv/videos/1",
                "timestamp": "0:45:00"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let submission = json_body(response).await;
        let submission_id = submission["submission_id"].as_str().unwrap().to_string();

        let response = send(
            &app,
            "PUT",
            &format!("/api/submissions/{submission_id}/verification"),
            Some(json!({ "status": "verified", "verified_by": "host" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            &app,
            "GET",
            &format!("/api/tournaments/{tournament_id}/leaderboard"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let board = json_body(response).await;
        assert_eq!(board[0]["team_name"], "Night Owls");
        assert_eq!(board[0]["rank"], 1);
        assert_eq!(board[0]["total_kills"], 10);
    }

    #[tokio::test]
    async fn expired_window_is_forbidden() {
        let app = app();
        let tournament_id = create_tournament(&app, true).await;
        let registration_id =
            register(&app, &tournament_id, Utc::now().naive_utc() - Duration::days(3)).await;

        let response = send(
            &app,
            "POST",
            &format!("/api/registrations/{registration_id}/submissions"),
            Some(json!({
                "game_number": 1,
                "kills": 4,
                "placement": 2,
                "vod_url": "https://twitch.tv/videos/2",
                "timestamp": "1:00:00"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(json_body(response).await["deadline"].is_string());
    }

    #[tokio::test]
    async fn entry_fee_preview_applies_discounts() {
        let app = app();
        let response = send(
            &app,
            "GET",
            "/api/entry-fee?base_fee=40&is_rerunning=true&free_entry_count=1&team_size=4",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let fee: FeeBreakdown = serde_json::from_value(json_body(response).await).unwrap();
        assert_eq!(fee.original, Decimal::from(40));
        assert_eq!(fee.final_fee, Decimal::from(10));
    }

    #[tokio::test]
    async fn oversized_base_fee_is_a_bad_request() {
        let app = app();
        let response = send(
            &app,
            "GET",
            "/api/entry-fee?base_fee=79228162514264337593543950335&free_entry_count=4&team_size=1",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let app = app();
        let unknown = uuid::Uuid::new_v4();

        for uri in [
            format!("/api/tournaments/{unknown}"),
            format!("/api/tournaments/{unknown}/leaderboard"),
            format!("/api/registrations/{unknown}"),
            format!("/api/submissions/{unknown}"),
        ] {
            let response = send(&app, "GET", &uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn hidden_prize_pool_is_not_found() {
        let app = app();
        let hidden = create_tournament(&app, false).await;
        let shown = create_tournament(&app, true).await;

        let response = send(&app, "GET", &format!("/api/tournaments/{hidden}/prize-pool"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "GET", &format!("/api/tournaments/{shown}/prize-pool"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let app = app();
        let mut body = tournament(true);
        body["placement_multipliers"] = json!([]);

        let response = send(&app, "POST", "/api/tournaments", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

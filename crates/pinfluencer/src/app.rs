use std::time::Duration;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{on, MethodFilter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use pinfluencer_core::api::ApiResponse;

use crate::{
    context::{ApiReply, GatewayEvent},
    processors::{dispatch, Route},
    state::AppState,
};

fn method_filter(method: &Method) -> MethodFilter {
    match *method {
        Method::POST => MethodFilter::POST,
        Method::PUT => MethodFilter::PUT,
        Method::PATCH => MethodFilter::PATCH,
        Method::DELETE => MethodFilter::DELETE,
        _ => MethodFilter::GET,
    }
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes sharing a path merge into one method router.
    let routes = Route::ALL.into_iter().fold(Router::new(), |router, route| {
        router.route(
            route.path(),
            on(
                method_filter(&route.method()),
                move |State(state): State<AppState>, GatewayEvent(event): GatewayEvent| async move {
                    ApiReply(dispatch(&state, route, &event).await)
                },
            ),
        )
    });

    routes
        .fallback(|| async { ApiReply(ApiResponse::not_found()) })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::context::AUTH_USER_HEADER;

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(auth) = auth {
            builder = builder.header(AUTH_USER_HEADER, auth);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn send_json(method: &str, uri: &str, auth: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .header(AUTH_USER_HEADER, auth)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn brand(name: &str) -> Value {
        json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com",
            "name": name,
            "description": "Compilers",
            "website": "https://example.com",
            "instahandle": "@grace",
            "values": ["Vegan"],
            "categories": ["Fitness"]
        })
    }

    fn campaign(title: &str) -> Value {
        json!({
            "objective": "Awareness",
            "success_description": "Reach",
            "campaign_title": title,
            "campaign_description": "Launch",
            "campaign_categories": ["Fashion"],
            "campaign_values": ["Organic"],
            "campaign_product_link": "https://example.com/p",
            "campaign_hashtag": "#launch",
            "campaign_discount_code": "LAUNCH10",
            "product_title": "Widget",
            "product_description": "A widget"
        })
    }

    async fn app() -> Router {
        create_app(AppState::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn test_list_brands_empty() {
        let app = app().await;

        let (status, body) = send(&app, get("/brands", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_response_carries_cors_headers() {
        let app = app().await;

        let response = app.oneshot(get("/products", None)).await.unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_create_and_get_brand_me() {
        let app = app().await;

        let (status, created) = send(&app, send_json("POST", "/brands/me", "auth-1", brand("Acme"))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Acme");
        assert_eq!(created["auth_user_id"], "auth-1");

        let (status, me) = send(&app, get("/brands/me", Some("auth-1"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me, created);

        let uri = format!("/brands/{}", created["id"].as_str().unwrap());
        let (status, by_id) = send(&app, get(&uri, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(by_id, created);
    }

    #[tokio::test]
    async fn test_brand_me_without_identity_is_401() {
        let app = app().await;

        let (status, body) = send(&app, get("/brands/me", None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"message": "Not authorised"}));
    }

    #[tokio::test]
    async fn test_unknown_brand_is_404() {
        let app = app().await;

        let (status, body) = send(&app, get("/brands/does-not-exist", None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Brand not found: does-not-exist"}));
    }

    #[tokio::test]
    async fn test_duplicate_brand_is_409() {
        let app = app().await;
        send(&app, send_json("POST", "/brands/me", "auth-1", brand("Acme"))).await;

        let (status, _) = send(&app, send_json("POST", "/brands/me", "auth-1", brand("Again"))).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_invalid_brand_is_400() {
        let app = app().await;
        let mut body = brand("Acme");
        body["name"] = json!("");

        let (status, _) = send(&app, send_json("POST", "/brands/me", "auth-1", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_brand_me() {
        let app = app().await;
        send(&app, send_json("POST", "/brands/me", "auth-1", brand("Acme"))).await;

        let (status, updated) = send(&app, send_json("PUT", "/brands/me", "auth-1", brand("Renamed"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Renamed");
    }

    #[tokio::test]
    async fn test_influencer_lifecycle() {
        let app = app().await;
        let influencer = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "website": "https://ada.example.com",
            "bio": "Numbers",
            "audience_male_split": 40.0,
            "audience_female_split": 60.0,
            "values": [],
            "categories": []
        });

        let (status, created) =
            send(&app, send_json("POST", "/influencers/me", "auth-9", influencer)).await;
        assert_eq!(status, StatusCode::CREATED);

        let image = json!({ "image_bytes": STANDARD.encode(b"GIF89a....") });
        let (status, updated) =
            send(&app, send_json("POST", "/influencers/me/image", "auth-9", image)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(updated["image"].as_str().unwrap().ends_with(".gif"));

        let (_, listed) = send(&app, get("/influencers", None)).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_campaign_state_and_delete() {
        let app = app().await;
        send(&app, send_json("POST", "/brands/me", "auth-1", brand("Acme"))).await;

        let (status, created) = send(
            &app,
            send_json("POST", "/brands/me/campaigns", "auth-1", campaign("Spring")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let uri = format!("/brands/me/campaigns/{}", created["id"].as_str().unwrap());

        let (status, moved) = send(
            &app,
            send_json("PATCH", &format!("{uri}/state"), "auth-1", json!({"state": "ACTIVE"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["state"], "ACTIVE");

        let delete = Request::builder()
            .method("DELETE")
            .uri(&uri)
            .header(AUTH_USER_HEADER, "auth-1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, delete).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": created["id"] }));

        let (_, listed) = send(&app, get("/campaigns", None)).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = app().await;

        let (status, body) = send(&app, get("/nowhere", None)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Not found");
    }
}

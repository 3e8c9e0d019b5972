//! HTTP routes for coupon endpoints.

use axum::{routing::post, Router};

use super::handlers::{issue_coupon, redeem_coupon, validate_coupon, CouponHandlers};

/// Creates the coupon router, mounted at `/api/coupons`.
pub fn coupon_routes(handlers: CouponHandlers) -> Router {
    Router::new()
        .route("/", post(issue_coupon))
        .route("/validate", post(validate_coupon))
        .route("/redeem", post(redeem_coupon))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockAuthProvider;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::adapters::memory::{InMemoryCouponLedger, InMemoryStoreDirectory};
    use crate::application::handlers::coupon::{
        IssueCouponHandler, RedeemCouponHandler, ValidateCouponHandler,
    };
    use crate::domain::coupon::{messages, Coupon, CouponCode};
    use crate::domain::directory::{Location, Store};
    use crate::domain::foundation::{LocationId, StoreId, Timestamp};
    use crate::ports::CouponLedger;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Fixture {
        handlers: CouponHandlers,
        ledger: Arc<InMemoryCouponLedger>,
        location_id: LocationId,
    }

    impl Fixture {
        fn app(&self) -> Router {
            coupon_routes(self.handlers.clone())
        }

        fn authed_app(&self, provider: AuthState) -> Router {
            coupon_routes(self.handlers.clone()).layer(axum::middleware::from_fn_with_state(
                provider,
                auth_middleware,
            ))
        }

        async fn seed_coupon(&self) -> Coupon {
            let coupon = Coupon::issue(CouponCode::generate(), self.location_id, Timestamp::now());
            self.ledger.insert(&coupon).await.unwrap();
            coupon
        }
    }

    async fn fixture() -> Fixture {
        let ledger = Arc::new(InMemoryCouponLedger::new());
        let directory = Arc::new(InMemoryStoreDirectory::new());

        let location = Location {
            id: LocationId::new(),
            slug: "shop1".to_string(),
            name: "Shop1".to_string(),
            coupon_expiry_days: None,
            is_active: true,
            created_at: Timestamp::now(),
        };
        let location_id = location.id;
        directory.add_location(location).await;
        directory
            .add_store(Store {
                id: StoreId::new(),
                location_id,
                slug: "shop1-counter".to_string(),
                name: "Shop1 Counter".to_string(),
                description: None,
                is_active: true,
                created_at: Timestamp::now(),
            })
            .await;

        let ledger_port: Arc<dyn CouponLedger> = ledger.clone();
        let handlers = CouponHandlers::new(
            Arc::new(IssueCouponHandler::new(
                ledger_port.clone(),
                directory.clone(),
            )),
            Arc::new(ValidateCouponHandler::new(
                ledger_port.clone(),
                directory.clone(),
            )),
            Arc::new(RedeemCouponHandler::new(ledger_port, directory)),
        );

        Fixture {
            handlers,
            ledger,
            location_id,
        }
    }

    fn scan_request(uri: &str, code: &str, store: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "code": code, "store": store }).to_string(),
            ))
            .unwrap()
    }

    fn issue_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
            .body(Body::from(
                serde_json::json!({ "location": "shop1" }).to_string(),
            ))
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validate_answers_the_valid_envelope() {
        let fx = fixture().await;
        let coupon = fx.seed_coupon().await;

        let response = fx
            .app()
            .oneshot(scan_request("/validate", coupon.code.as_str(), "shop1-counter"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["is_valid"], true);
        assert_eq!(body["is_used"], false);
        assert_eq!(body["message"], messages::VALID_COUPON);
    }

    #[tokio::test]
    async fn business_rejection_stays_http_200() {
        let fx = fixture().await;

        let response = fx
            .app()
            .oneshot(scan_request("/validate", "ZZZZ9999", "shop1-counter"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["is_valid"], false);
        assert_eq!(body["message"], messages::INVALID_COUPON);
    }

    #[tokio::test]
    async fn unknown_store_is_a_hard_404() {
        let fx = fixture().await;
        let coupon = fx.seed_coupon().await;

        let response = fx
            .app()
            .oneshot(scan_request("/validate", coupon.code.as_str(), "ghost-counter"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn second_redeem_reports_already_used_with_the_store_name() {
        let fx = fixture().await;
        let coupon = fx.seed_coupon().await;
        let app = fx.app();

        let first = app
            .clone()
            .oneshot(scan_request("/redeem", coupon.code.as_str(), "shop1-counter"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let body = json_body(first).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["is_used"], true);
        assert_eq!(body["message"], messages::COUPON_REDEEMED);
        assert_eq!(body["used_at_store"], "Shop1 Counter");

        let second = app
            .oneshot(scan_request("/redeem", coupon.code.as_str(), "shop1-counter"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::OK);
        let body = json_body(second).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["is_valid"], true);
        assert_eq!(body["is_used"], true);
        assert_eq!(body["used_at_store"], "Shop1 Counter");
    }

    #[tokio::test]
    async fn issue_requires_a_bearer_token() {
        let fx = fixture().await;
        let (mock, _account) = MockAuthProvider::new().with_test_account("pos-token");
        let app = fx.authed_app(Arc::new(mock));

        let anonymous = app.clone().oneshot(issue_request(None)).await.unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

        let authed = app.oneshot(issue_request(Some("pos-token"))).await.unwrap();
        assert_eq!(authed.status(), StatusCode::CREATED);
        let body = json_body(authed).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["coupon"]["code"].as_str().unwrap().len(), 8);
    }
}

//! App Router

use std::path::Path;

use salvo::{
    Router,
    cors::{Any, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName},
    },
};

use crate::{
    auth::{self, AUTH_TOKEN_HEADER},
    carts, healthcheck, products, root, subscriptions, uploads, users,
};

pub(crate) fn app_router(upload_dir: &Path) -> Router {
    Router::new()
        .get(root::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("upload").post(uploads::upload::handler))
        .push(uploads::images::router(upload_dir))
        .push(Router::with_path("addproduct").post(products::create::handler))
        .push(Router::with_path("allproducts").get(products::index::handler))
        .push(Router::with_path("removeproduct").post(products::delete::handler))
        .push(Router::with_path("subscribe").post(subscriptions::subscribe::handler))
        .push(Router::with_path("signup").post(users::signup::handler))
        .push(Router::with_path("login").post(users::login::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("addtocart").post(carts::add::handler))
                .push(Router::with_path("removefromcart").post(carts::remove::handler))
                .push(Router::with_path("getcart").post(carts::get::handler)),
        )
}

/// Any origin may call the API, including with an identity token.
pub(crate) fn cors() -> CorsHandler {
    Cors::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(AUTH_TOKEN_HEADER),
        ])
        .into_handler()
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::StatusCode,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use shopfront_app::{auth::MockAuthService, domain::products::MockProductsService};

    use crate::{root::RUNNING_MESSAGE, test_helpers::Mocks};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        let router = Router::new()
            .hoop(inject(mocks.into_state()))
            .push(app_router(Path::new("upload/images")));

        Service::new(router).hoop(cors())
    }

    #[tokio::test]
    async fn test_root_is_served() -> TestResult {
        let body = TestClient::get("http://example.com/")
            .send(&make_service(Mocks::default()))
            .await
            .take_string()
            .await?;

        assert_eq!(body, RUNNING_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn test_product_routes_need_no_token() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        let res = TestClient::get("http://example.com/allproducts")
            .send(&make_service(Mocks {
                products,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_routes_require_a_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate().never();

        let service = make_service(Mocks {
            auth,
            ..Mocks::default()
        });

        for path in ["addtocart", "removefromcart", "getcart"] {
            let mut res = TestClient::post(format!("http://example.com/{path}"))
                .json(&json!({ "itemId": 1 }))
                .send(&service)
                .await;

            let body: Value = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED), "{path}");
            assert_eq!(
                body,
                json!({ "errors": "Please authenticate using a valid token" }),
                "{path}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_cors_allows_the_auth_token_header() -> TestResult {
        let res = TestClient::options("http://example.com/addtocart")
            .add_header("origin", "http://shop.example", true)
            .add_header("access-control-request-method", "POST", true)
            .add_header("access-control-request-headers", "auth-token", true)
            .send(&make_service(Mocks::default()))
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-headers")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        assert!(allowed.contains("auth-token"), "allowed headers: {allowed}");

        Ok(())
    }
}

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    get,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{
    api::health::routes::welcome, config::app_config::AppConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build(container, config.cors, format!("http://{}/api", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Assembles the routed endpoint; every API route lives under `/api`.
    pub fn build(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.cart_api,
            ),
            "Inventory API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .at("/", get(welcome))
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use persistence::storage::StorageConfig;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};
    use serde_json::{Value, json};

    fn temp_storage() -> StorageConfig {
        let dir: PathBuf =
            std::env::temp_dir().join(format!("inventory_api_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        StorageConfig::new(dir)
    }

    fn client(storage: &StorageConfig) -> TestClient<impl Endpoint> {
        let container = DependencyContainer::new(storage);
        TestClient::new(Server::build(
            container,
            Cors::new(),
            "http://localhost/api".to_string(),
        ))
    }

    async fn body(response: TestResponse) -> Value {
        response.0.into_body().into_json().await.unwrap()
    }

    fn pen() -> Value {
        json!({
            "title": "Pen",
            "description": "Blue pen",
            "code": "PN1",
            "price": 1.5,
            "stock": 100,
            "category": "office"
        })
    }

    async fn create_product(cli: &TestClient<impl Endpoint>, payload: &Value) -> Value {
        let response = cli.post("/api/products").body_json(payload).send().await;
        assert_eq!(response.0.status(), StatusCode::CREATED);
        body(response).await
    }

    async fn create_cart(cli: &TestClient<impl Endpoint>) -> Value {
        let response = cli.post("/api/carts").send().await;
        assert_eq!(response.0.status(), StatusCode::CREATED);
        body(response).await
    }

    fn id_of(value: &Value) -> String {
        value["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn should_aggregate_quantity_when_attaching_twice() {
        let storage = temp_storage();
        let cli = client(&storage);
        let product_id = id_of(&create_product(&cli, &pen()).await);
        let cart_id = id_of(&create_cart(&cli).await);

        for _ in 0..2 {
            let response = cli
                .post(format!("/api/carts/{}/product/{}", cart_id, product_id))
                .send()
                .await;
            assert_eq!(response.0.status(), StatusCode::OK);
        }

        let response = cli.get(format!("/api/carts/{}", cart_id)).send().await;
        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(
            body(response).await,
            json!({
                "id": cart_id,
                "products": [{ "product": product_id, "quantity": 2 }]
            })
        );
    }

    #[tokio::test]
    async fn should_return_created_product_with_defaults() {
        let storage = temp_storage();
        let cli = client(&storage);

        let created = create_product(&cli, &pen()).await;
        let response = cli
            .get(format!("/api/products/{}", id_of(&created)))
            .send()
            .await;

        assert_eq!(response.0.status(), StatusCode::OK);
        let fetched = body(response).await;
        assert_eq!(fetched, created);
        assert_eq!(fetched["status"], json!(true));
        assert_eq!(fetched["thumbnails"], json!([]));
        assert_eq!(fetched["price"].as_f64(), Some(1.5));
    }

    #[tokio::test]
    async fn should_reject_product_with_missing_fields() {
        let storage = temp_storage();
        let cli = client(&storage);

        let response = cli
            .post("/api/products")
            .body_json(&json!({ "title": "x" }))
            .send()
            .await;

        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        let error = body(response).await;
        assert_eq!(error["name"], json!("ValidationError"));
        assert!(error["message"].as_str().unwrap().contains("category"));
    }

    #[tokio::test]
    async fn should_limit_listing_only_for_positive_numbers() {
        let storage = temp_storage();
        let cli = client(&storage);
        let mut ids = Vec::new();
        for i in 0..5 {
            let mut payload = pen();
            payload["code"] = json!(format!("PN{}", i));
            ids.push(id_of(&create_product(&cli, &payload).await));
        }

        for query in ["limit=2", "limit=2.5"] {
            let limited = body(cli.get(format!("/api/products?{}", query)).send().await).await;
            let limited_ids: Vec<String> =
                limited.as_array().unwrap().iter().map(id_of).collect();
            assert_eq!(limited_ids, ids[..2].to_vec());
        }

        for query in ["limit=-1", "limit=abc", "limit=0"] {
            let all = body(cli.get(format!("/api/products?{}", query)).send().await).await;
            assert_eq!(all.as_array().unwrap().len(), 5);
        }
    }

    #[tokio::test]
    async fn should_merge_update_and_keep_id() {
        let storage = temp_storage();
        let cli = client(&storage);
        let created = create_product(&cli, &pen()).await;
        let product_id = id_of(&created);

        let response = cli
            .put(format!("/api/products/{}", product_id))
            .body_json(&json!({ "id": "other", "price": 50 }))
            .send()
            .await;

        assert_eq!(response.0.status(), StatusCode::OK);
        let updated = body(response).await;
        assert_eq!(updated["id"], json!(product_id));
        assert_eq!(updated["price"].as_f64(), Some(50.0));
        for field in ["title", "description", "code", "stock", "category", "status"] {
            assert_eq!(updated[field], created[field]);
        }
        let missing = cli.get("/api/products/other").send().await;
        assert_eq!(missing.0.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_unknown_update_fields() {
        let storage = temp_storage();
        let cli = client(&storage);
        let product_id = id_of(&create_product(&cli, &pen()).await);

        let response = cli
            .put(format!("/api/products/{}", product_id))
            .body_json(&json!({ "colour": "red" }))
            .send()
            .await;

        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body(response).await["name"], json!("ValidationError"));
    }

    #[tokio::test]
    async fn should_accept_fractional_stock() {
        let storage = temp_storage();
        let cli = client(&storage);
        let mut payload = pen();
        payload["stock"] = json!(2.5);

        let created = create_product(&cli, &payload).await;

        assert_eq!(created["stock"].as_f64(), Some(2.5));
    }

    #[tokio::test]
    async fn should_answer_unparsable_body_with_validation_error() {
        let storage = temp_storage();
        let cli = client(&storage);
        let mut payload = pen();
        payload["price"] = json!("cheap");

        let response = cli.post("/api/products").body_json(&payload).send().await;

        assert_eq!(response.0.status(), StatusCode::BAD_REQUEST);
        let error = body(response).await;
        assert_eq!(error["name"], json!("ValidationError"));
        assert!(
            error["message"]
                .as_str()
                .unwrap()
                .starts_with("request.invalid_body")
        );
    }

    #[tokio::test]
    async fn should_point_to_collections_from_root() {
        let storage = temp_storage();
        let cli = client(&storage);

        let response = cli.get("/").send().await;

        assert_eq!(response.0.status(), StatusCode::OK);
        let text = response.0.into_body().into_string().await.unwrap();
        assert!(text.contains("/api/products"));
        assert!(text.contains("/api/carts"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_product() {
        let storage = temp_storage();
        let cli = client(&storage);

        let response = cli
            .put("/api/products/missing")
            .body_json(&json!({ "price": 2 }))
            .send()
            .await;

        assert_eq!(response.0.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_delete_product_and_then_report_not_found() {
        let storage = temp_storage();
        let cli = client(&storage);
        let product_id = id_of(&create_product(&cli, &pen()).await);

        let deleted = cli
            .delete(format!("/api/products/{}", product_id))
            .send()
            .await;
        assert_eq!(deleted.0.status(), StatusCode::NO_CONTENT);

        let fetched = cli
            .get(format!("/api/products/{}", product_id))
            .send()
            .await;
        assert_eq!(fetched.0.status(), StatusCode::NOT_FOUND);

        let deleted_again = cli
            .delete(format!("/api/products/{}", product_id))
            .send()
            .await;
        assert_eq!(deleted_again.0.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_cart_or_product() {
        let storage = temp_storage();
        let cli = client(&storage);
        let product_id = id_of(&create_product(&cli, &pen()).await);
        let cart_id = id_of(&create_cart(&cli).await);

        let unknown_cart = cli
            .post(format!("/api/carts/nope/product/{}", product_id))
            .send()
            .await;
        assert_eq!(unknown_cart.0.status(), StatusCode::NOT_FOUND);

        let unknown_product = cli
            .post(format!("/api/carts/{}/product/nope", cart_id))
            .send()
            .await;
        assert_eq!(unknown_product.0.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body(unknown_product).await["message"],
            json!("cart.product_not_found")
        );

        let cart = body(cli.get(format!("/api/carts/{}", cart_id)).send().await).await;
        assert_eq!(cart["products"], json!([]));

        let missing = cli.get("/api/carts/nope").send().await;
        assert_eq!(missing.0.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_keep_cart_lines_after_product_deletion() {
        let storage = temp_storage();
        let cli = client(&storage);
        let product_id = id_of(&create_product(&cli, &pen()).await);
        let cart_id = id_of(&create_cart(&cli).await);
        cli.post(format!("/api/carts/{}/product/{}", cart_id, product_id))
            .send()
            .await;

        cli.delete(format!("/api/products/{}", product_id))
            .send()
            .await;

        let cart = body(cli.get(format!("/api/carts/{}", cart_id)).send().await).await;
        assert_eq!(cart["products"][0]["product"], json!(product_id));
        assert_eq!(cart["products"][0]["quantity"], json!(1));
    }

    #[tokio::test]
    async fn should_write_collections_as_pretty_json() {
        let storage = temp_storage();
        let cli = client(&storage);
        let product_id = id_of(&create_product(&cli, &pen()).await);
        create_cart(&cli).await;

        let products = std::fs::read_to_string(storage.products_path()).unwrap();
        assert!(products.starts_with("[\n  {\n    \"id\": "));
        assert!(products.contains(&product_id));
        let carts: Value =
            serde_json::from_str(&std::fs::read_to_string(storage.carts_path()).unwrap()).unwrap();
        assert_eq!(carts.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let storage = temp_storage();
        let cli = client(&storage);

        let response = cli.get("/api/health").send().await;

        assert_eq!(response.0.status(), StatusCode::OK);
        assert_eq!(body(response).await["status"], json!("healthy"));
    }
}

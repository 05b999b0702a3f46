use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::routes::{self, AppState};
use service::tender::repository::mock::MockTenderRepository;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = AppState::new(Arc::new(MockTenderRepository::new()));
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

#[tokio::test]
async fn tender_lifecycle_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;

    let resp = app.client.get(app.url("/health")).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);

    let resp = app
        .client
        .post(app.url("/api/tenders"))
        .json(&json!({
            "procurementNumber": "PN-1",
            "procuringEntity": "Ministry of Works",
            "subjectOfProcurement": "Road resurfacing",
            "tenderDeadline": "2025-03-31",
            "status": "Open",
            "budgetAmount": 1000.0
        }))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let created: Value = resp.json().await?;
    let id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["tenderDeadline"], "2025-03-31T00:00:00Z");

    let listed: Value = app.client.get(app.url("/api/tenders")).send().await?.json().await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["procurementNumber"], "PN-1");

    let resp = app
        .client
        .put(app.url(&format!("/api/tenders/{id}")))
        .json(&json!({"procurementNumber": "PN-1", "status": "Awarded", "budgetAmount": 1500.0}))
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    let updated: Value = resp.json().await?;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["status"], "Awarded");
    assert_eq!(updated["procuringEntity"], Value::Null);
    assert_eq!(updated["tenderDeadline"], Value::Null);

    let stats: Value = app.client.get(app.url("/api/tenders/stats")).send().await?.json().await?;
    assert_eq!(stats["awardedTenders"], 1);
    assert_eq!(stats["highestBudget"], 1500.0);

    let resp = app.client.delete(app.url(&format!("/api/tenders/{id}"))).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NO_CONTENT);

    let resp = app.client.get(app.url(&format!("/api/tenders/{id}"))).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NOT_FOUND);
    assert!(resp.bytes().await?.is_empty());

    let resp = app.client.delete(app.url(&format!("/api/tenders/{id}"))).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn cross_origin_requests_are_allowed_by_default() -> anyhow::Result<()> {
    let app = start_server().await?;
    let resp = app
        .client
        .get(app.url("/api/tenders"))
        .header("Origin", "http://localhost:3000")
        .send()
        .await?;
    assert_eq!(resp.status(), HttpStatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    Ok(())
}

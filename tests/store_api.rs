//! 端到端测试
//!
//! 在随机端口启动真实服务器，通过 HTTP 调用接口

use std::sync::Arc;

use projectstore::infrastructure::http::{AppState, HttpServer};
use projectstore::infrastructure::memory::InMemoryStoreRepository;
use reqwest::StatusCode;
use tokio::net::TcpListener;

/// 已启动的测试服务器
struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = AppState::from_repository(Arc::new(InMemoryStoreRepository::new()));
    let server = HttpServer::with_default_config(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = server.serve(listener, std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
    })
}

async fn post_store(app: &TestApp, body: &'static str) -> anyhow::Result<(StatusCode, String)> {
    let res = reqwest::Client::new()
        .post(format!("{}/stores", app.base_url))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    Ok((res.status(), res.text().await?))
}

async fn get_store(app: &TestApp, id: i64) -> anyhow::Result<(StatusCode, String)> {
    let res = reqwest::get(format!("{}/stores/{}", app.base_url, id)).await?;
    Ok((res.status(), res.text().await?))
}

#[tokio::test]
async fn e2e_create_then_fetch() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = post_store(&app, r#"{"name":"Boulangerie"}"#).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":1,"name":"Boulangerie"}"#);

    let (status, body) = get_store(&app, 1).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":1,"name":"Boulangerie"}"#);

    Ok(())
}

#[tokio::test]
async fn e2e_empty_name_is_rejected_and_not_stored() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = post_store(&app, r#"{"name":""}"#).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"msg":"name cannot be empty"}"#);

    let (status, body) = post_store(&app, "{}").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"msg":"name cannot be empty"}"#);

    let (status, body) = get_store(&app, 1).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"message":"Unknown store id"}"#);

    Ok(())
}

#[tokio::test]
async fn e2e_caller_supplied_id_is_ignored() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = post_store(&app, r#"{"id":77,"name":"FNAC"}"#).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"id":1,"name":"FNAC"}"#);

    let (status, _) = get_store(&app, 77).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn e2e_ping() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = reqwest::get(format!("{}/ping", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let json: serde_json::Value = res.json().await?;
    assert_eq!(json["status"], "ok");

    Ok(())
}

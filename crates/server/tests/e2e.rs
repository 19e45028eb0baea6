use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use reqwest::StatusCode;
use uuid::Uuid;

use server::startup::build_app;

struct TestApp {
    base_url: String,
}

/// Full stack over PostgreSQL; `None` when no database is configured.
async fn start_server() -> anyhow::Result<Option<TestApp>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Ok(None);
    }

    let cfg = AppConfig { database: DatabaseConfig::from_env(), ..AppConfig::default() };
    let app: Router = build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(Some(TestApp { base_url }))
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_teacher_lifecycle_over_postgres() -> anyhow::Result<()> {
    let Some(app) = start_server().await? else { return Ok(()) };
    let c = client();

    let last = format!("Lovelace_{}", &Uuid::new_v4().simple().to_string()[..8]);
    let res = c.post(format!("{}/teachers", app.base_url))
        .json(&json!({"firstName": "Ada", "lastName": last}))
        .send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers().get("location").and_then(|v| v.to_str().ok()).map(str::to_string);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(location, Some(format!("/teachers/{id}")));

    let res = c.get(format!("{}/teachers", app.base_url)).query(&[("lastName", &last)]).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let list = res.json::<Value>().await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let res = c.get(format!("{}/teachers/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["lastName"], Value::String(last.clone()));

    let res = c.put(format!("{}/teachers/{id}", app.base_url))
        .json(&json!({"firstName": "Augusta", "middleInitial": "A", "lastName": last, "email": "ada@example.com"}))
        .send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = c.delete(format!("{}/teachers/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = c.get(format!("{}/teachers/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({}));

    let res = c.delete(format!("{}/teachers/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

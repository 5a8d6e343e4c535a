//! End-to-end: the demo router served over TCP.

use std::time::Duration;

use resource_router::config::{RouterOptions, ServerConfig};
use resource_router::demo;
use resource_router::http::HttpServer;
use resource_router::lifecycle::Shutdown;
use serde_json::Value;
use tokio::net::TcpListener;

async fn spawn_demo(options: RouterOptions) -> (String, Shutdown, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let router = demo::build_router(options);
    let server = HttpServer::new(ServerConfig::default(), router.middleware());
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        server.run(listener, rx).await.unwrap();
    });
    (base_url, shutdown, handle)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn test_demo_nested_show() {
    let (base_url, shutdown, handle) = spawn_demo(RouterOptions::default()).await;

    let res = client()
        .get(format!("{base_url}/companies/acme/departments/sales"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["resource"], "departments");
    assert_eq!(body["action"], "show");
    assert_eq!(body["method"], "GET");
    assert_eq!(body["params"]["company"], "acme");
    assert_eq!(body["params"]["department"], "sales");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_demo_root_and_unimplemented() {
    let (base_url, shutdown, handle) = spawn_demo(RouterOptions::default()).await;
    let client = client();

    let info: Value = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(info["service"], "resource-router");

    let res = client
        .delete(format!("{base_url}/companies/acme"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 501);

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_demo_with_prefix_and_overrides() {
    let mut options = RouterOptions {
        prefix: "/v1".into(),
        ..Default::default()
    };
    options.methods.put = Some(resource_router::Verb::Post);
    options.map.show = Some("details".into());

    let (base_url, shutdown, handle) = spawn_demo(options).await;
    let client = client();

    let res = client
        .post(format!("{base_url}/v1/companies/acme"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["action"], "update");
    assert_eq!(body["path"], "/v1/companies/acme");

    // demo controllers follow the action map, so the renamed key still serves show
    let body: Value = client
        .get(format!("{base_url}/v1/companies/acme"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["action"], "show");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
}

//! End-to-end tests against a real listener.
//!
//! Each test binds its own server on an OS-chosen port and drives it over TCP.

use std::net::SocketAddr;

use chrono::{DateTime, Local};
use futures::future::join_all;
use kube_status::routes::status::StatusRecord;
use kube_status::{create_router, http, AppConfig, AppState, PodIdentity};

async fn start_server(identity: PodIdentity) -> SocketAddr {
    let listener = http::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(identity));

    tokio::spawn(async move {
        http::serve(listener, app).await.unwrap();
    });

    addr
}

fn web_identity() -> PodIdentity {
    PodIdentity {
        pod: "web-7f9".to_string(),
        node: "ip-10-0-1-5".to_string(),
        namespace: "prod".to_string(),
    }
}

#[tokio::test]
async fn test_status_echoes_identity_from_environment() {
    let config = AppConfig::from_lookup(|key| match key {
        "HOSTNAME" => Some("web-7f9".to_string()),
        "NODE_NAME" => Some("ip-10-0-1-5".to_string()),
        "POD_NAMESPACE" => Some("prod".to_string()),
        _ => None,
    })
    .unwrap();
    let addr = start_server(config.identity).await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(
        body.contains(r#""pod":"web-7f9","node":"ip-10-0-1-5","namespace":"prod""#),
        "{body}"
    );
    assert!(body.starts_with(r#"{"level":3,"type":"Kubernetes","#), "{body}");
}

#[tokio::test]
async fn test_health_over_tcp() {
    let addr = start_server(PodIdentity::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{addr}/health"))
        .header("x-probe", "liveness")
        .body("payload is ignored")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_timestamps_parse_and_do_not_go_backwards() {
    let addr = start_server(PodIdentity::default()).await;
    let url = format!("http://{addr}/");

    let mut previous: Option<DateTime<Local>> = None;
    for _ in 0..5 {
        let value: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
        let raw = value["timestamp"].as_str().unwrap();
        let timestamp = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local);

        if let Some(previous) = previous {
            assert!(timestamp >= previous);
        }
        previous = Some(timestamp);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    let addr = start_server(web_identity()).await;
    let client = reqwest::Client::new();

    let requests = (0..100).map(|i| {
        let client = client.clone();
        let path = if i % 2 == 0 { "/" } else { "/health" };
        async move {
            let response = client
                .get(format!("http://{addr}{path}"))
                .send()
                .await
                .unwrap();
            (path, response.status(), response.text().await.unwrap())
        }
    });

    for (path, status, body) in join_all(requests).await {
        assert_eq!(status, 200);
        if path == "/health" {
            assert_eq!(body, "OK");
        } else {
            let record: StatusRecord = serde_json::from_str(&body).unwrap();
            assert_eq!(record.pod, "web-7f9");
            assert_eq!(record.node, "ip-10-0-1-5");
            assert_eq!(record.namespace, "prod");
            assert_eq!(record.level, 3);
        }
    }
}

#[tokio::test]
async fn test_server_binds_configured_port() {
    // Reserve a free port, release it, then start on it through the config path
    let port = {
        let probe = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        probe.local_addr().unwrap().port()
    };
    let config = AppConfig::from_lookup(|key| match key {
        "PORT" => Some(port.to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.http.port, port);

    let app = create_router(AppState::new(config.identity.clone()));
    tokio::spawn(async move {
        http::start_server(app, &config).await.unwrap();
    });

    let mut last_err = None;
    for _ in 0..50 {
        match reqwest::get(format!("http://127.0.0.1:{port}/health")).await {
            Ok(response) => {
                assert_eq!(response.status(), 200);
                return;
            }
            Err(e) => {
                last_err = Some(e);
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            }
        }
    }
    panic!("server did not come up on port {port}: {last_err:?}");
}

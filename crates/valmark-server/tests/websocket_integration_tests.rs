//! WebSocket integration tests for the Valmark server.
//!
//! These tests verify the full streaming flow: connection establishment,
//! batch-in/batch-out cardinality, per-item error isolation, and stream
//! survival across failed items.

use std::net::SocketAddr;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use valmark_engine::MtmResult;

/// Starts a test server on a random port and returns the address.
async fn start_test_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, valmark_server::router()).await.unwrap();
    });

    // Give the server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    addr
}

/// A well-formed request bundle in the feed's nested-string format.
fn bundle() -> String {
    let calcdate = json!({ "calc_date": "2016-01-07" });
    let curve = json!({
        "curvename": "USD-3M",
        "index_frequency": 3,
        "index_frequency_type": 2,
        "calendar": "UnitedStates",
        "bussiness_convention": 1,
        "dcc": "Actual360",
        "end_of_month_flag": false,
        "settlement_days": 0,
        "maturity_period_value": [3],
        "maturity_period_type": [2],
        "rates": [0.02]
    });
    let trade = json!({
        "tradeid": "SWP-00001",
        "notional": 1_000_000.0,
        "payer_receiver_flag": 1,
        "fixed_rate": 0.025,
        "fixed_leg_dcc": "Actual360",
        "float_leg_dcc": "Actual360",
        "ibor_index": "USDLibor",
        "fixed_leg_start_date": 1452124800_i64,
        "fixed_leg_end_date": 1483747200_i64,
        "fixed_leg_tenor_frequency": 3,
        "fixed_leg_tenor_period_enum": 2,
        "fixed_leg_biz_day_conv": 1,
        "fixed_leg_termination_day_conv": 1,
        "fixed_leg_date_gen_rule": 0,
        "float_leg_start_date": 1452124800_i64,
        "float_leg_end_date": 1483747200_i64,
        "float_leg_tenor_frequency": 3,
        "float_leg_tenor_period_enum": 2,
        "float_leg_biz_day_conv": 1,
        "float_leg_termination_day_conv": 1,
        "float_leg_date_gen_rule": 0
    });
    let fixing = json!({ "curvename": "USD-3M", "fixing_dates": [], "fixing_rates": [] });

    json!({
        "calcdate": calcdate.to_string(),
        "trade": trade.to_string(),
        "curve": curve.to_string(),
        "fixing": fixing.to_string(),
        "debug": "it-client"
    })
    .to_string()
}

async fn send_batch_and_receive(
    addr: SocketAddr,
    batches: Vec<Vec<String>>,
) -> Vec<Vec<MtmResult>> {
    let (mut ws, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();

    let mut responses = Vec::new();
    for batch in batches {
        let frame = serde_json::to_string(&batch).unwrap();
        ws.send(Message::Text(frame.into())).await.unwrap();

        let reply = timeout(Duration::from_secs(10), ws.next())
            .await
            .expect("timed out waiting for response")
            .expect("stream ended unexpectedly")
            .expect("websocket error");
        let text = reply.into_text().unwrap();
        let items: Vec<String> = serde_json::from_str(&text).unwrap();
        responses.push(
            items
                .iter()
                .map(|item| serde_json::from_str(item).unwrap())
                .collect(),
        );
    }

    ws.close(None).await.unwrap();
    responses
}

#[tokio::test]
async fn test_single_item_batch_values() {
    let addr = start_test_server().await;
    let responses = send_batch_and_receive(addr, vec![vec![bundle()]]).await;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].len(), 1);
    let mtm = &responses[0][0];
    assert!(!mtm.is_failed(), "failure: {}", mtm.error);
    assert_eq!(mtm.tradeid, "SWP-00001");
    assert_eq!(mtm.fix_leg_dates.len(), 4);
}

#[tokio::test]
async fn test_batch_cardinality_with_malformed_item() {
    let addr = start_test_server().await;
    let batch = vec![bundle(), "not json at all".to_string(), bundle()];
    let responses = send_batch_and_receive(addr, vec![batch]).await;

    let results = &responses[0];
    assert_eq!(results.len(), 3);
    assert!(!results[0].is_failed());
    assert!(results[1].is_failed());
    assert!(!results[1].error.is_empty());
    assert!(!results[2].is_failed());
}

#[tokio::test]
async fn test_stream_survives_failed_batches() {
    let addr = start_test_server().await;
    let responses = send_batch_and_receive(
        addr,
        vec![
            vec!["garbage".to_string()],
            vec![],
            vec![bundle()],
        ],
    )
    .await;

    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0].len(), 1);
    assert!(responses[0][0].is_failed());
    assert!(responses[1].is_empty());
    assert!(!responses[2][0].is_failed());
}

#[tokio::test]
async fn test_health_endpoint() {
    let addr = start_test_server().await;
    let body = reqwest_lite(addr, "/health").await;
    assert_eq!(body, "OK");
}

/// Minimal HTTP GET over a raw TCP stream, avoiding an HTTP client
/// dependency for one probe.
async fn reqwest_lite(addr: SocketAddr, path: &str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
        .split("\r\n\r\n")
        .nth(1)
        .unwrap_or_default()
        .to_string()
}

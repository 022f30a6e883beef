//! Integration tests for the Mouser API client against a loopback
//! upstream.
//!
//! A local TCP listener plays the part of the Mouser API, serving canned
//! HTTP responses and capturing the raw requests so the tests can assert
//! on paths, query strings, and request bodies exactly as they hit the
//! wire.

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use mouser_mcp::config::Settings;
use mouser_mcp::mouser::{ApiClient, ApiError};

/// A canned HTTP response for the mock upstream.
struct CannedResponse {
    status_line: &'static str,
    body: String,
}

impl CannedResponse {
    fn ok(body: &Value) -> Self {
        Self {
            status_line: "HTTP/1.1 200 OK",
            body: body.to_string(),
        }
    }

    fn server_error() -> Self {
        Self {
            status_line: "HTTP/1.1 500 Internal Server Error",
            body: String::new(),
        }
    }
}

/// Serves one canned response per connection and returns the raw
/// requests (head and body) that were received.
fn spawn_upstream(responses: Vec<CannedResponse>) -> (SocketAddr, JoinHandle<Vec<String>>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    listener.set_nonblocking(true).expect("set nonblocking");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let listener = TcpListener::from_std(listener).expect("tokio listener");
        let mut captured = Vec::with_capacity(responses.len());

        for response in responses {
            let (mut stream, _) = listener.accept().await.expect("accept connection");
            let request = read_request(&mut stream).await;
            captured.push(request);

            let reply = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                response.status_line,
                response.body.len(),
                response.body,
            );
            stream.write_all(reply.as_bytes()).await.expect("write response");
            stream.shutdown().await.ok();
        }

        captured
    });

    (addr, handle)
}

/// Reads a full HTTP request (headers plus Content-Length body).
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut buf).await.expect("read request");
        assert!(n > 0, "connection closed before request completed");
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&data) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let body_start = header_end + 4;
    while data.len() < body_start + content_length {
        let n = stream.read(&mut buf).await.expect("read body");
        assert!(n > 0, "connection closed before body completed");
        data.extend_from_slice(&buf[..n]);
    }

    String::from_utf8_lossy(&data[..body_start + content_length]).to_string()
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&Settings {
        part_api_key: "part-key-value".to_string(),
        order_api_key: "order-key-value".to_string(),
        base_url: Url::parse(&format!("http://{addr}/api/v1")).expect("base url"),
        timeout: Duration::from_secs(5),
        debug: false,
    })
    .expect("build client")
}

fn search_results(count: usize) -> Value {
    let parts: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "MouserPartNumber": format!("123-PART-{i}"),
                "ManufacturerPartNumber": format!("PART-{i}"),
                "Description": "Arduino-compatible module",
            })
        })
        .collect();

    json!({
        "Errors": [],
        "SearchResults": {
            "NumberOfResult": count,
            "Parts": parts,
        },
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn keyword_search_returns_payload_unchanged() {
    let expected = search_results(10);
    let (addr, upstream) = spawn_upstream(vec![CannedResponse::ok(&expected)]);

    let client = client_for(addr);
    let payload = client
        .search_by_keyword("Arduino", 10, 0)
        .await
        .expect("search succeeds");

    assert_eq!(payload, expected);
    assert_eq!(
        payload["SearchResults"]["Parts"]
            .as_array()
            .expect("parts array")
            .len(),
        10
    );

    let requests = upstream.await.expect("upstream task");
    let request = &requests[0];
    assert!(request.starts_with("POST /api/v1/search/keyword?"));
    assert!(request.contains("apiKey=part-key-value"));
    assert!(request.contains("\"SearchByKeywordRequest\""));
    assert!(request.contains("\"keyword\":\"Arduino\""));
    assert!(request.contains("\"records\":10"));
    assert!(request.contains("\"startingRecord\":0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn part_number_search_uses_part_key() {
    let (addr, upstream) = spawn_upstream(vec![CannedResponse::ok(&search_results(1))]);

    let client = client_for(addr);
    client
        .search_by_part_number("595-TPS54360DDAR")
        .await
        .expect("search succeeds");

    let requests = upstream.await.expect("upstream task");
    let request = &requests[0];
    assert!(request.starts_with("POST /api/v1/search/partnumber?"));
    assert!(request.contains("apiKey=part-key-value"));
    assert!(request.contains("\"SearchByPartRequest\""));
    assert!(request.contains("\"mouserPartNumber\":\"595-TPS54360DDAR\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_cart_uses_order_key_and_query_parameter() {
    let body = json!({"Errors": [], "CartKey": "abc-123", "CartItems": []});
    let (addr, upstream) = spawn_upstream(vec![CannedResponse::ok(&body)]);

    let client = client_for(addr);
    let payload = client.get_cart("abc-123").await.expect("get cart");
    assert_eq!(payload["CartKey"], "abc-123");

    let requests = upstream.await.expect("upstream task");
    let request = &requests[0];
    assert!(request.starts_with("GET /api/v1/cart?"));
    assert!(request.contains("apiKey=order-key-value"));
    assert!(request.contains("cartKey=abc-123"));
    assert!(!request.contains("part-key-value"));
}

#[tokio::test(flavor = "multi_thread")]
async fn add_to_cart_sends_items_envelope() {
    let body = json!({"Errors": [], "CartKey": "abc-123"});
    let (addr, upstream) = spawn_upstream(vec![CannedResponse::ok(&body)]);

    let client = client_for(addr);
    client
        .add_to_cart("abc-123", "123-PART-0", 25, None)
        .await
        .expect("add to cart");

    let requests = upstream.await.expect("upstream task");
    let request = &requests[0];
    assert!(request.starts_with("POST /api/v1/cart/items/insert?"));
    assert!(request.contains("apiKey=order-key-value"));
    assert!(request.contains("\"CartKey\":\"abc-123\""));
    assert!(request.contains("\"MouserPartNumber\":\"123-PART-0\""));
    assert!(request.contains("\"Quantity\":25"));
    // Insert always carries the customer reference, defaulting to empty
    assert!(request.contains("\"CustomerPartNumber\":\"\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_cart_item_omits_customer_reference() {
    let body = json!({"Errors": [], "CartKey": "abc-123"});
    let (addr, upstream) = spawn_upstream(vec![CannedResponse::ok(&body)]);

    let client = client_for(addr);
    client
        .update_cart_item("abc-123", "123-PART-0", 0)
        .await
        .expect("update cart item");

    let requests = upstream.await.expect("upstream task");
    let request = &requests[0];
    assert!(request.starts_with("POST /api/v1/cart/items/update?"));
    assert!(request.contains("\"Quantity\":0"));
    assert!(!request.contains("CustomerPartNumber"));
}

#[tokio::test(flavor = "multi_thread")]
async fn interleaved_calls_never_leak_keys_across_categories() {
    let (addr, upstream) = spawn_upstream(vec![
        CannedResponse::ok(&search_results(1)),
        CannedResponse::ok(&json!({"Errors": [], "CartItems": []})),
        CannedResponse::ok(&search_results(1)),
    ]);

    let client = client_for(addr);
    client.search_by_keyword("resistor", 1, 0).await.expect("search");
    client.get_cart("abc-123").await.expect("get cart");
    client.search_by_part_number("123-PART-0").await.expect("search");

    let requests = upstream.await.expect("upstream task");
    assert!(requests[0].contains("apiKey=part-key-value"));
    assert!(!requests[0].contains("order-key-value"));
    assert!(requests[1].contains("apiKey=order-key-value"));
    assert!(!requests[1].contains("part-key-value"));
    assert!(requests[2].contains("apiKey=part-key-value"));
    assert!(!requests[2].contains("order-key-value"));
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_errors_array_becomes_upstream_error() {
    let body = json!({
        "Errors": [{
            "Code": "InvalidCharacters",
            "Message": "Invalid unique identifier.",
            "PropertyName": "API Key",
        }],
        "SearchResults": null,
    });
    let (addr, _upstream) = spawn_upstream(vec![CannedResponse::ok(&body)]);

    let client = client_for(addr);
    let err = client
        .search_by_keyword("Arduino", 10, 0)
        .await
        .expect_err("errors array should fail the call");

    let ApiError::Upstream { errors } = err else {
        panic!("expected Upstream error, got: {err}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "InvalidCharacters");
    assert_eq!(errors[0].message, "Invalid unique identifier.");
    assert_eq!(errors[0].property_name, "API Key");
}

#[tokio::test(flavor = "multi_thread")]
async fn non_200_status_becomes_status_error() {
    let (addr, _upstream) = spawn_upstream(vec![CannedResponse::server_error()]);

    let client = client_for(addr);
    let err = client.get_order("987654321").await.expect_err("500 should fail");

    assert!(matches!(err, ApiError::Status { status: 500 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn order_history_sends_days_envelope() {
    let body = json!({"Errors": [], "OrderHistoryItems": []});
    let (addr, upstream) = spawn_upstream(vec![CannedResponse::ok(&body)]);

    let client = client_for(addr);
    client.list_order_history(30).await.expect("order history");

    let requests = upstream.await.expect("upstream task");
    let request = &requests[0];
    assert!(request.starts_with("POST /api/v1/orderhistory/query?"));
    assert!(request.contains("apiKey=order-key-value"));
    assert!(request.contains("\"Days\":30"));
}

#[tokio::test(flavor = "multi_thread")]
async fn validation_failure_never_reaches_the_network() {
    // The upstream expects zero connections; reaching it would hang the
    // accept loop and the captured-request count would be wrong.
    let (addr, upstream) = spawn_upstream(vec![]);

    let client = client_for(addr);
    let err = client.search_by_keyword("", 10, 0).await.expect_err("blank keyword");
    assert!(matches!(err, ApiError::InvalidParameter { name: "keyword", .. }));

    let err = client.search_by_keyword("Arduino", 51, 0).await.expect_err("too many records");
    assert!(matches!(err, ApiError::InvalidParameter { name: "records", .. }));

    let requests = upstream.await.expect("upstream task");
    assert!(requests.is_empty());
}

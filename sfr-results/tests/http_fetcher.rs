//! Drives `HttpResultsFetcher` against a local server with canned responses.

use sfr_results::{
    EndpointConfig, FetchError, HttpResultsFetcher, ResultsController, ResultsSource,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one request and return its request line.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

fn fetcher(base_url: &str) -> HttpResultsFetcher {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpResultsFetcher::with_client(client, EndpointConfig::new(base_url).unwrap())
}

#[tokio::test]
async fn test_fetch_results_success() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"rmse": 12.345, "mape": 3.4, "plot": "", "provinces": ["ON", "QC"], "selected_province": "ON"}"#,
    )
    .await;

    let payload = fetcher(&base_url).fetch_results("ON").await.unwrap();
    assert_eq!(payload.provinces, vec!["ON", "QC"]);
    assert_eq!(payload.selected_province.as_deref(), Some("ON"));

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /results/?province=ON HTTP/1.1");
}

#[tokio::test]
async fn test_fetch_results_error_status() {
    let (base_url, server) = serve_once("404 Not Found", r#"{"error": "no model"}"#).await;

    let err = fetcher(&base_url).fetch_results("All").await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(err.user_message(), "no model");

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /results/?province=All HTTP/1.1");
}

#[tokio::test]
async fn test_fetch_table_without_province() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"forecast_table": "<table></table>"}"#).await;

    let table = fetcher(&base_url).fetch_table("").await.unwrap();
    assert_eq!(table.forecast_table, "<table></table>");

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /results/table/ HTTP/1.1");
}

#[tokio::test]
async fn test_controller_renders_server_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", "oops").await;

    let mut controller = ResultsController::new();
    controller.load(&fetcher(&base_url)).await;
    server.await.unwrap();

    let text = sfr_results::render(&controller).to_string();
    assert!(text.contains("Failed to load results."));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = fetcher(&base_url).fetch_results("All").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use graphql_dashboard::api::{
    DashboardConfig, DashboardWidget, FetchOutcome, HostContext, RecordingErrorSink, WidgetState,
};
use graphql_dashboard::core::{ContinentRecord, QueryResult, to_series};
use graphql_dashboard::fetch::{CONTINENTS_QUERY, ContinentSource, HttpContinentFetcher};
use graphql_dashboard::render::NullRenderer;
use graphql_dashboard::{DashboardError, FetchError};
use serde_json::{Value, json};

/// Mimics the countries endpoint: only the fixed continents query is accepted.
async fn continents_handler(Json(body): Json<Value>) -> axum::response::Response {
    if body.get("query").and_then(Value::as_str) != Some(CONTINENTS_QUERY) {
        return (StatusCode::BAD_REQUEST, "unexpected query").into_response();
    }
    let result = QueryResult::from_continents(&[
        ContinentRecord::new("Africa", &["NG", "EG"]),
        ContinentRecord::new("Europe", &["FR"]),
    ]);
    Json(result.into_value()).into_response()
}

async fn broken_handler() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn not_json_handler() -> impl IntoResponse {
    (StatusCode::OK, "<html>maintenance</html>")
}

async fn graphql_error_handler() -> Json<Value> {
    Json(json!({ "data": null, "errors": [{ "message": "rate limited" }] }))
}

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

fn fetcher_for(addr: SocketAddr, path: &str) -> HttpContinentFetcher {
    HttpContinentFetcher::new(&format!("http://{addr}{path}"), None).expect("valid endpoint")
}

#[tokio::test]
async fn posts_fixed_query_and_returns_raw_body() {
    let addr = serve(Router::new().route("/", post(continents_handler))).await;
    let fetcher = fetcher_for(addr, "/");

    let result = fetcher.fetch_continents().await.expect("fetch succeeds");
    let series = to_series(&result).expect("well-formed payload");

    assert_eq!(series.labels(), &["Africa".to_owned(), "Europe".to_owned()]);
    assert_eq!(series.values(), &[2, 1]);
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let addr = serve(Router::new().route("/", post(broken_handler))).await;
    let fetcher = fetcher_for(addr, "/");

    let err = fetcher.fetch_continents().await.expect_err("500 must fail");
    assert_eq!(
        err,
        FetchError::Status {
            status: 500,
            body: "upstream exploded".to_owned(),
        }
    );
}

#[tokio::test]
async fn unknown_route_is_a_fetch_error() {
    let addr = serve(Router::new().route("/", post(continents_handler))).await;
    let fetcher = fetcher_for(addr, "/graphql");

    let err = fetcher.fetch_continents().await.expect_err("404 must fail");
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let addr = serve(Router::new().route("/", post(not_json_handler))).await;
    let fetcher = fetcher_for(addr, "/");

    let err = fetcher.fetch_continents().await.expect_err("html must fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn graphql_errors_pass_through_fetcher_unvalidated() {
    let addr = serve(Router::new().route("/", post(graphql_error_handler))).await;
    let fetcher = fetcher_for(addr, "/");

    let result = fetcher
        .fetch_continents()
        .await
        .expect("fetcher does not validate shape");
    assert_eq!(result.as_value()["errors"][0]["message"], "rate limited");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = fetcher_for(addr, "/")
        .fetch_continents()
        .await
        .expect_err("closed port must fail");
    assert!(matches!(err, FetchError::Transport(_)));
}

#[test]
fn rejects_unparseable_endpoint() {
    let err = HttpContinentFetcher::new("not a url", None).expect_err("must reject");
    assert!(matches!(err, FetchError::InvalidEndpoint(_)));
}

#[test]
fn rejects_non_http_scheme() {
    let err = HttpContinentFetcher::new("ftp://example.com/", None).expect_err("must reject");
    assert!(matches!(err, FetchError::InvalidEndpoint(_)));
}

#[test]
fn from_config_validates_before_building() {
    let config = DashboardConfig::default().with_request_timeout_ms(Some(0));
    let err = HttpContinentFetcher::from_config(&config).expect_err("zero timeout rejected");
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
}

#[test]
fn default_config_targets_countries_endpoint() {
    let fetcher =
        HttpContinentFetcher::from_config(&DashboardConfig::default()).expect("default config");
    assert_eq!(fetcher.endpoint().as_str(), "https://countries.trevorblades.com/");
}

#[tokio::test]
async fn widget_reaches_ready_through_http() {
    let addr = serve(Router::new().route("/", post(continents_handler))).await;
    let config = DashboardConfig::default()
        .with_endpoint(format!("http://{addr}/"))
        .with_request_timeout_ms(Some(5_000));
    let widget = DashboardWidget::new(
        HttpContinentFetcher::from_config(&config).expect("fetcher"),
        NullRenderer::default(),
        RecordingErrorSink::default(),
        &config,
        HostContext::new("Ada"),
    )
    .expect("widget init");

    let outcome = widget.start().expect("mount").await;

    assert_eq!(outcome, FetchOutcome::Ready { entries: 2 });
    assert_eq!(widget.state(), WidgetState::Ready);
    assert_eq!(widget.with_renderer(|r| r.render_count), 2);
}

#[tokio::test]
async fn widget_degrades_to_empty_chart_on_http_failure() {
    let addr = serve(Router::new().route("/", post(broken_handler))).await;
    let config = DashboardConfig::default().with_endpoint(format!("http://{addr}/"));
    let widget = DashboardWidget::new(
        HttpContinentFetcher::from_config(&config).expect("fetcher"),
        NullRenderer::default(),
        RecordingErrorSink::default(),
        &config,
        HostContext::new("Ada"),
    )
    .expect("widget init");

    let outcome = widget.start().expect("mount").await;

    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(widget.series().is_empty());
    let errors = widget.with_sink(|s| s.errors.clone());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("500"));
}

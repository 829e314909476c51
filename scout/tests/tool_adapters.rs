//! HTTP adapters against a local mock server: request shape, payload, and error mapping.


use std::time::Duration;

use scout::tools::{
    NovadaSearchTool, RapidApiTool, TavilySearchTool, Tool, ToolError, TOOL_FACEBOOK_PAGE_VIDEOS,
    TOOL_LINKEDIN_LOOKUP, TOOL_NOVADA_GOOGLE_SEARCH, TOOL_TAVILY_SEARCH, TOOL_TWITTER_LOOKUP,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **Scenario**: NovaDA sends a GET with engine, q, no_cache and api_key query parameters.
#[tokio::test]
async fn novada_search_sends_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "Acme Corp"))
        .and(query_param("no_cache", "false"))
        .and(query_param("api_key", "nv-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [{"title": "Acme Corp", "link": "https://acme.example"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = NovadaSearchTool::new("nv-key").with_base_url(server.uri());
    assert_eq!(tool.name(), TOOL_NOVADA_GOOGLE_SEARCH);
    let out = tool.call(json!({"query": "Acme Corp"})).await.unwrap();
    assert_eq!(out["organic_results"][0]["title"], "Acme Corp");
}

/// **Scenario**: Tavily posts api_key, query and max_results=4 as JSON.
#[tokio::test]
async fn tavily_search_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "api_key": "tv-key",
            "query": "Acme Corp news",
            "max_results": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"url": "https://news.example/acme", "content": "Acme expands"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = TavilySearchTool::new("tv-key").with_base_url(server.uri());
    assert_eq!(tool.name(), TOOL_TAVILY_SEARCH);
    let out = tool.call(json!({"query": "Acme Corp news"})).await.unwrap();
    assert_eq!(out["results"][0]["content"], "Acme expands");
}

/// **Scenario**: Each RapidAPI lookup sends the key and its own host header.
#[tokio::test]
async fn rapidapi_lookups_send_key_and_host_headers() {
    let server = MockServer::start().await;
    let cases = [
        (
            RapidApiTool::linkedin_lookup("ra-key"),
            TOOL_LINKEDIN_LOOKUP,
            "/get-company-by-domain",
            "domain",
            "acme.com",
        ),
        (
            RapidApiTool::twitter_lookup("ra-key"),
            TOOL_TWITTER_LOOKUP,
            "/tweet",
            "pid",
            "1631781099415257088",
        ),
        (
            RapidApiTool::facebook_page_videos("ra-key"),
            TOOL_FACEBOOK_PAGE_VIDEOS,
            "/page/videos",
            "delegate_page_id",
            "100064",
        ),
    ];

    for (tool, name, route, param, value) in cases {
        Mock::given(method("GET"))
            .and(path(route))
            .and(query_param(param, value))
            .and(header("x-rapidapi-key", "ra-key"))
            .and(header("x-rapidapi-host", tool.host()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": value}})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = tool.with_base_url(server.uri());
        assert_eq!(tool.name(), name);
        assert_eq!(tool.spec().input_schema["required"], json!([param]));
        let out = tool.call(json!({ param: value })).await.unwrap();
        assert_eq!(out["data"]["id"], value);
    }
}

/// **Scenario**: Non-2xx responses map to ToolError::Status with the body.
#[tokio::test]
async fn upstream_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let tool = TavilySearchTool::new("wrong").with_base_url(server.uri());
    let err = tool.call(json!({"query": "Acme"})).await.unwrap_err();
    assert_eq!(
        err,
        ToolError::Status {
            status: 401,
            body: "bad key".into()
        }
    );
}

/// **Scenario**: Missing or blank arguments are rejected without a request.
#[tokio::test]
async fn missing_argument_is_invalid_input() {
    let server = MockServer::start().await;
    let tool = NovadaSearchTool::new("k").with_base_url(server.uri());
    assert!(matches!(
        tool.call(json!({})).await,
        Err(ToolError::InvalidInput(_))
    ));
    let tool = RapidApiTool::linkedin_lookup("k").with_base_url(server.uri());
    assert!(matches!(
        tool.call(json!({"domain": " "})).await,
        Err(ToolError::InvalidInput(_))
    ));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

/// **Scenario**: Unreachable host maps to a transport error.
#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let tool = NovadaSearchTool::new("k").with_base_url("http://127.0.0.1:9");
    assert!(matches!(
        tool.call(json!({"query": "Acme"})).await,
        Err(ToolError::Transport(_))
    ));
}

/// **Scenario**: A slow upstream is cut off by the adapter's own HTTP timeout.
#[tokio::test]
async fn slow_upstream_hits_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"organic_results": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let tool = NovadaSearchTool::with_timeout("nv-key", Duration::from_millis(100))
        .with_base_url(server.uri());
    let started = std::time::Instant::now();
    let err = tool.call(json!({"query": "Acme Corp"})).await.unwrap_err();
    assert!(matches!(err, ToolError::Transport(_)), "{:?}", err);
    assert!(started.elapsed() < Duration::from_secs(4));
}

//! OpenAiReasoner against a mock chat-completions endpoint.


use scout::tools::ToolSpec;
use scout::{AgentError, ConversationState, OpenAiReasoner, Reasoner};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(message: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": message,
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
    })
}

fn tavily_spec() -> ToolSpec {
    ToolSpec {
        name: "tavily_search".into(),
        description: Some("search".into()),
        input_schema: json!({"type": "object", "properties": {"query": {"type": "string"}}}),
    }
}

/// **Scenario**: Tool calls in the response become ToolRequests with parsed arguments and ids.
#[tokio::test]
async fn parses_tool_calls_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_abc",
                "type": "function",
                "function": {"name": "tavily_search", "arguments": "{\"query\":\"Acme Corp\"}"}
            }]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v1", server.uri());
    let reasoner = OpenAiReasoner::from_credentials("sk-test", Some(&base), "gpt-4o-mini")
        .with_system_prompt("research");
    let state = ConversationState::seeded("Research Acme Corp");

    let response = reasoner.invoke(&state, &[tavily_spec()]).await.unwrap();
    assert_eq!(response.content, "");
    assert_eq!(response.tool_requests.len(), 1);
    let req = &response.tool_requests[0];
    assert_eq!(req.tool_name, "tavily_search");
    assert_eq!(req.id.as_deref(), Some("call_abc"));
    assert_eq!(req.arguments.get("query"), Some(&json!("Acme Corp")));
    assert_eq!(response.usage.map(|u| u.total_tokens), Some(17));
}

/// **Scenario**: A text-only answer has no tool requests.
#[tokio::test]
async fn parses_text_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": "FINAL ANSWER: Acme Corp report"
        }))))
        .mount(&server)
        .await;

    let base = format!("{}/v1", server.uri());
    let reasoner = OpenAiReasoner::from_credentials("sk-test", Some(&base), "gpt-4o-mini");
    let response = reasoner
        .invoke(&ConversationState::seeded("q"), &[])
        .await
        .unwrap();
    assert_eq!(response.content, "FINAL ANSWER: Acme Corp report");
    assert!(!response.has_tool_requests());
}

/// **Scenario**: An API error surfaces as ReasoningFailed.
#[tokio::test]
async fn api_error_is_reasoning_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "model not found",
                "type": "invalid_request_error",
                "param": null,
                "code": "model_not_found"
            }
        })))
        .mount(&server)
        .await;

    let base = format!("{}/v1", server.uri());
    let reasoner = OpenAiReasoner::from_credentials("sk-test", Some(&base), "nope");
    let err = reasoner
        .invoke(&ConversationState::seeded("q"), &[])
        .await
        .unwrap_err();
    assert!(matches!(err, AgentError::ReasoningFailed(_)), "{:?}", err);
}

/// **Scenario**: Model, temperature and auto tool choice are sent with the request.
#[tokio::test]
async fn sends_temperature_model_and_tool_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.0,
            "tool_choice": "auto"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!({
            "role": "assistant",
            "content": "FINAL ANSWER"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/v1", server.uri());
    let reasoner = OpenAiReasoner::from_credentials("sk-test", Some(&base), "gpt-4o-mini")
        .with_temperature(0.0);
    let state = ConversationState::seeded("Research Acme Corp");

    let response = reasoner.invoke(&state, &[tavily_spec()]).await.unwrap();
    assert_eq!(response.content, "FINAL ANSWER");
}

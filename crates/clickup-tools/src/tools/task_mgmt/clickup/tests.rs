//! HTTP round-trip tests for the ClickUp tools

use std::collections::HashMap;

use clickup_core::tools::base::Tool;
use clickup_core::tools::types::ToolCall;
use clickup_core::ClickUpError;
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::ClickUpClient;
use super::comment_tool::AddCommentTool;
use super::create_tool::CreateTaskTool;
use super::list_tool::ListTasksTool;
use super::types::{CommentInput, CreateOrUpdateInput};

fn client_for(server: &MockServer) -> ClickUpClient {
    ClickUpClient::with_base_url("test-token", &server.uri()).unwrap()
}

fn tool_call(id: &str, name: &str, args: serde_json::Value) -> ToolCall {
    let arguments = match args {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    };
    ToolCall::new(id.to_string(), name.to_string(), arguments)
}

#[test]
#[serial]
fn missing_token_fails_construction_for_every_tool() {
    unsafe {
        std::env::remove_var(super::config::ENV_API_TOKEN);
        std::env::remove_var(super::config::ENV_LIST_ID);
    }

    assert!(matches!(
        CreateTaskTool::new(None, Some("list-1".into())).unwrap_err(),
        ClickUpError::Config { .. }
    ));
    assert!(matches!(
        AddCommentTool::new(None).unwrap_err(),
        ClickUpError::Config { .. }
    ));
    assert!(matches!(
        ListTasksTool::new(None, Some("list-1".into())).unwrap_err(),
        ClickUpError::Config { .. }
    ));

    // The list-bound tools also fail fast without a default list.
    assert!(matches!(
        CreateTaskTool::new(Some("tok".into()), None).unwrap_err(),
        ClickUpError::Config { .. }
    ));
    // The comment tool needs only the token.
    assert!(AddCommentTool::new(Some("tok".into())).is_ok());
}

#[tokio::test]
async fn create_posts_to_the_list_endpoint() {
    let server = MockServer::start().await;
    let created = json!({"id": "abc123", "name": "Fix bug"});

    Mock::given(method("POST"))
        .and(path("/list/list-1/task"))
        .and(header("Authorization", "test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "Fix bug",
            "priority": 2,
            "due_date": 1_710_460_800_000_i64
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let tool = CreateTaskTool::with_client(client_for(&server), "list-1");
    let input = CreateOrUpdateInput {
        title: Some("Fix bug".to_string()),
        priority: Some(json!("high")),
        due_date: Some("2024-03-15".to_string()),
        ..Default::default()
    };

    let response = tool.run(&input).await.unwrap();
    assert_eq!(response, created);
}

#[tokio::test]
async fn update_puts_to_the_task_endpoint_without_name() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/task/123"))
        .and(header("Authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "123"})))
        .expect(1)
        .mount(&server)
        .await;

    let tool = CreateTaskTool::with_client(client_for(&server), "list-1");
    let input = CreateOrUpdateInput {
        title: Some("Ignored title".to_string()),
        status: Some("Complete".to_string()),
        parent_id: Some("parent-1".to_string()),
        task_id: Some("123".to_string()),
        ..Default::default()
    };

    tool.run(&input).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["status"], "complete");
    assert_eq!(body["priority"], 3);
    assert!(body.get("name").is_none());
    assert!(body.get("parent").is_none());
}

#[tokio::test]
async fn create_with_empty_title_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let tool = CreateTaskTool::with_client(client_for(&server), "list-1");
    let err = tool
        .run(&CreateOrUpdateInput {
            title: Some(String::new()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClickUpError::Validation { .. }));
}

#[tokio::test]
async fn remote_errors_carry_status_and_truncated_body() {
    let server = MockServer::start().await;
    let long_body = "task not found ".repeat(100);

    Mock::given(method("GET"))
        .and(path("/list/list-1/task"))
        .respond_with(ResponseTemplate::new(404).set_body_string(long_body))
        .mount(&server)
        .await;

    let tool = ListTasksTool::with_client(client_for(&server), "list-1");
    let err = tool.run().await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    let message = err.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("task not found"));
    // 400-byte excerpt plus the short error prefix
    assert!(message.len() < 500, "message too long: {} bytes", message.len());
}

#[tokio::test]
async fn list_returns_the_response_unmodified() {
    let server = MockServer::start().await;
    let tasks = json!({
        "tasks": [
            {"id": "t-1", "name": "First"},
            {"id": "t-2", "name": "Second"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/list/list-7/task"))
        .and(query_param("archived", "false"))
        .and(header("Authorization", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let tool = ListTasksTool::with_client(client_for(&server), "list-7");
    let response = tool.run().await.unwrap();
    assert_eq!(response, tasks);
}

#[tokio::test]
async fn comment_posts_the_exact_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/task/t-9/comment"))
        .and(body_json(json!({"comment_text": "Looks good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let tool = AddCommentTool::with_client(client_for(&server));
    let response = tool
        .run(&CommentInput {
            task_id: "t-9".to_string(),
            comment_text: "Looks good".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response["id"], "c-1");
}

#[tokio::test]
async fn execute_tolerates_framework_injected_arguments() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/list/list-1/task"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let tool = CreateTaskTool::with_client(client_for(&server), "list-1");
    let call = tool_call(
        "call-1",
        tool.name(),
        json!({
            "title": "Fix bug",
            "priority": "urgent",
            "security_context": {"injected": true},
            "run_id": 42
        }),
    );

    let result = tool.execute(&call).await.unwrap();
    assert!(result.success);
    assert_eq!(result.metadata["mode"], "create");
    let output: serde_json::Value = serde_json::from_str(result.output.as_deref().unwrap()).unwrap();
    assert_eq!(output["id"], "abc");
}

#[tokio::test]
async fn execute_with_timing_surfaces_remote_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/task/t-1/comment"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let tool = AddCommentTool::with_client(client_for(&server));
    let call = tool_call(
        "call-2",
        tool.name(),
        json!({"task_id": "t-1", "comment_text": "hi"}),
    );

    let result = tool.execute_with_timing(&call).await;
    assert!(!result.success);
    let error = result.error.as_deref().unwrap();
    assert!(error.contains("500"));
    assert!(error.contains("internal error"));
}

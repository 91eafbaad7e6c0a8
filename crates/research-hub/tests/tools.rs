//! Tool and protocol tests against an in-memory session.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_hub::catalog::Catalog;
use research_hub::client::SummaryClient;
use research_hub::config::Config;
use research_hub::error::ToolError;
use research_hub::models::FALLBACK_SUMMARY;
use research_hub::server::protocol::JsonRpcResponse;
use research_hub::server::stdio;
use research_hub::state::{MemoryStore, PreferenceStore};
use research_hub::tools::{McpTool, ToolContext, register_all_tools};

fn context_with(config: Config) -> ToolContext {
    let client = SummaryClient::new(config).unwrap();
    let preferences = PreferenceStore::new(Box::new(MemoryStore::new()));
    ToolContext::new(Arc::new(client), Arc::new(Catalog::mock()), preferences)
}

fn offline_context() -> ToolContext {
    context_with(Config::for_testing("http://127.0.0.1:9"))
}

async fn call(ctx: &ToolContext, name: &str, args: Value) -> Result<String, ToolError> {
    let tools = register_all_tools();
    let tool = tools.iter().find(|t| t.name() == name).unwrap();
    tool.execute(ctx, args).await
}

async fn call_json(ctx: &ToolContext, name: &str, mut args: Value) -> Value {
    args["responseFormat"] = json!("json");
    let text = call(ctx, name, args).await.unwrap();
    serde_json::from_str(&text).unwrap()
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_registry_names_are_unique() {
    let tools = register_all_tools();
    let mut names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), 19);

    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 19);

    for tool in &tools {
        assert_eq!(tool.input_schema()["type"], "object", "{}", tool.name());
        assert!(!tool.description().is_empty());
    }
}

// =============================================================================
// Search tools
// =============================================================================

#[tokio::test]
async fn test_advanced_search_edit_and_save() {
    let ctx = offline_context();

    let body = call_json(
        &ctx,
        "advanced_search",
        json!({
            "categories": ["Quantum Computing"],
            "citationRange": {"min": "100", "max": ""}
        }),
    )
    .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["papers"][0]["citations"], 189);
    assert_eq!(body["activeFilters"].as_array().map(Vec::len), Some(2));

    let body = call_json(
        &ctx,
        "remove_filter",
        json!({"kind": "categories", "value": "Quantum Computing"}),
    )
    .await;
    assert_eq!(body["total"], 3);

    let saved = call(&ctx, "save_search", json!({"name": "Highly cited"})).await.unwrap();
    assert!(saved.contains("3 results"));

    let listed = call_json(&ctx, "list_saved_searches", json!({})).await;
    assert_eq!(listed["total"], 3);
    assert_eq!(listed["searches"][0]["name"], "Highly cited");

    let csv = call(&ctx, "export_search_results", json!({})).await.unwrap();
    assert_eq!(csv.lines().count(), 3);

    let cleared = call_json(&ctx, "clear_filters", json!({})).await;
    assert_eq!(cleared["activeFilters"], json!([]));
}

#[tokio::test]
async fn test_facet_removal_requires_value() {
    let ctx = offline_context();
    let err = call(&ctx, "remove_filter", json!({"kind": "authors"})).await.unwrap_err();
    assert!(matches!(err, ToolError::Validation { .. }));
}

#[tokio::test]
async fn test_load_saved_search() {
    let ctx = offline_context();

    let body = call_json(&ctx, "load_saved_search", json!({"id": "1"})).await;
    assert!(body["total"].as_u64().is_some());

    let err = call(&ctx, "load_saved_search", json!({"id": "missing"})).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn test_discover_records_history() {
    let ctx = offline_context();

    let body = call_json(&ctx, "discover_papers", json!({"query": "Blockchain"})).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["papers"][0]["id"], "disc_4");

    let prefs = call_json(&ctx, "navigation_preferences", json!({})).await;
    assert_eq!(prefs["searchHistory"], json!(["Blockchain"]));
    assert_eq!(prefs["recentRoutes"], json!(["/research-paper-discovery-dashboard"]));
}

// =============================================================================
// Detail and preference tools
// =============================================================================

#[tokio::test]
async fn test_bookmark_shows_in_details() {
    let ctx = offline_context();

    let first = call(&ctx, "toggle_bookmark", json!({"paperId": "disc_2"})).await.unwrap();
    assert!(first.starts_with("Bookmarked"));

    let detail = call_json(&ctx, "paper_details", json!({"paperId": "disc_2"})).await;
    assert_eq!(detail["bookmarked"], true);

    let second = call(&ctx, "toggle_bookmark", json!({"paperId": "disc_2"})).await.unwrap();
    assert!(second.starts_with("Removed"));

    let err = call(&ctx, "paper_details", json!({"paperId": "nope"})).await.unwrap_err();
    assert!(err.to_user_message().contains("check the ID"));
}

#[tokio::test]
async fn test_showcase_details_include_diagrams() {
    let ctx = offline_context();

    let detail = call_json(&ctx, "paper_details", json!({})).await;
    assert_eq!(detail["id"], "1");
    assert_eq!(detail["diagrams"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_route_visit_closes_sidebar() {
    let ctx = offline_context();

    let prefs = call_json(&ctx, "navigation_preferences", json!({"toggleSidebar": true})).await;
    assert_eq!(prefs["sidebarOpen"], true);

    call(&ctx, "compare_papers", json!({})).await.unwrap();

    let prefs = call_json(
        &ctx,
        "navigation_preferences",
        json!({"sidebarCollapsed": true, "clearSearchHistory": true}),
    )
    .await;
    assert_eq!(prefs["sidebarOpen"], false);
    assert_eq!(prefs["sidebarCollapsed"], true);
    assert_eq!(prefs["recentRoutes"][0], "/paper-comparison-and-analysis-tools");
}

// =============================================================================
// Comparison tools
// =============================================================================

#[tokio::test]
async fn test_comparison_flow() {
    let ctx = offline_context();

    for id in ["paper_1", "paper_2", "paper_3", "1"] {
        let text = call(&ctx, "add_to_comparison", json!({"paperId": id})).await.unwrap();
        assert!(text.starts_with("Added"), "{text}");
    }
    let full = call(&ctx, "add_to_comparison", json!({"paperId": "disc_1"})).await.unwrap();
    assert!(full.contains("full"));

    call(
        &ctx,
        "annotate_comparison",
        json!({"paperId": "paper_1", "section": "results", "note": "best F1"}),
    )
    .await
    .unwrap();
    let err = call(
        &ctx,
        "annotate_comparison",
        json!({"paperId": "disc_1", "section": "results", "note": "x"}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ToolError::Validation { .. }));

    call(&ctx, "highlight_difference", json!({"label": "Sample size"})).await.unwrap();

    let body = call_json(&ctx, "compare_papers", json!({"focus": "metrics"})).await;
    assert_eq!(body["papers"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["highlights"], json!(["Sample size"]));
    assert_eq!(body["metrics"]["rows"].as_array().map(Vec::len), Some(4));

    let markdown = call(&ctx, "compare_papers", json!({"mode": "results"})).await.unwrap();
    assert!(markdown.contains("Paper Comparison (4 papers)"));

    let csv = call(&ctx, "export_comparison", json!({"format": "csv"})).await.unwrap();
    assert_eq!(csv.lines().count(), 5);

    call(&ctx, "remove_from_comparison", json!({"paperId": "1"})).await.unwrap();
    let err = call(&ctx, "remove_from_comparison", json!({"paperId": "1"})).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

// =============================================================================
// Summary tools
// =============================================================================

#[tokio::test]
async fn test_generate_summary_success() {
    let server = MockServer::start().await;
    let content = json!({
        "summary": "Attention is all you need.",
        "key_points": ["No recurrence"],
        "important_diagram_descriptions": [
            {"title": "Transformer Architecture", "description": "Stacks", "importance": "Overview"},
            {"title": "Performance", "description": "BLEU", "importance": "Results"}
        ]
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })))
        .mount(&server)
        .await;

    let ctx = context_with(Config::for_testing(&server.uri()));
    let body = call_json(&ctx, "generate_summary", json!({"selectedImage": 7})).await;

    assert_eq!(body["summary"], "Attention is all you need.");
    assert_eq!(body["diagrams"][0]["type"], "Architecture");
    assert_eq!(body["diagrams"][1]["type"], "Results");
    assert_eq!(body["selectedImage"], 1);
    assert_eq!(body["shownInPanel"], true);

    let workspace = ctx.workspace.lock().await;
    assert!(workspace.summary_panel.result().is_some());
}

#[tokio::test]
async fn test_generate_summary_failure_renders_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let ctx = context_with(Config::for_testing(&server.uri()));
    let markdown = call(&ctx, "generate_summary", json!({"paperId": "paper_2"})).await.unwrap();

    assert!(markdown.contains(FALLBACK_SUMMARY));
    assert!(markdown.contains("Error generating summary"));

    let closed = call(&ctx, "close_summary", json!({})).await.unwrap();
    assert_eq!(closed, "Summary panel closed.");
}

#[tokio::test]
async fn test_generate_summary_without_key() {
    let ctx = context_with(Config::new(None));
    let markdown = call(&ctx, "generate_summary", json!({})).await.unwrap();
    assert!(markdown.contains(FALLBACK_SUMMARY));
}

// =============================================================================
// Protocol
// =============================================================================

async fn serve_lines(ctx: &ToolContext, lines: &[Value]) -> Vec<JsonRpcResponse> {
    let mut input = String::new();
    for line in lines {
        input.push_str(&line.to_string());
        input.push('\n');
    }
    input.push_str("{broken\n\n");

    let mut output = Vec::new();
    stdio::serve(input.as_bytes(), &mut output, &register_all_tools(), ctx).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[tokio::test]
async fn test_stdio_session() {
    let ctx = offline_context();
    let responses = serve_lines(
        &ctx,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                   "params": {"protocolVersion": "2025-03-26"}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "paper_details", "arguments": {"paperId": "disc_5"}}}),
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
                   "params": {"name": "no_such_tool"}}),
            json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call",
                   "params": {"name": "paper_details", "arguments": {"paperId": "missing"}}}),
            json!({"jsonrpc": "2.0", "id": 6, "method": "resources/list"}),
            json!({"jsonrpc": "2.0", "id": 7, "method": "ping"}),
        ],
    )
    .await;

    // The notification gets no response; the broken line gets a parse error.
    assert_eq!(responses.len(), 8);

    let init = responses[0].result.as_ref().unwrap();
    assert_eq!(init["protocolVersion"], "2025-03-26");
    assert_eq!(init["serverInfo"]["name"], "research-hub");

    let tools = responses[1].result.as_ref().unwrap()["tools"].as_array().unwrap().len();
    assert_eq!(tools, 19);

    let text = &responses[2].result.as_ref().unwrap()["content"][0]["text"];
    assert!(text.as_str().unwrap().starts_with("# "));

    assert_eq!(responses[3].error.as_ref().unwrap().code, -32602);
    assert_eq!(responses[4].error.as_ref().unwrap().code, -32000);
    assert_eq!(responses[5].error.as_ref().unwrap().code, -32601);
    assert!(responses[6].result.is_some());

    let parse = &responses[7];
    assert_eq!(parse.error.as_ref().unwrap().code, -32700);
    assert!(parse.id.is_none());
}

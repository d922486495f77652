use anyhow::Result;
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ClientInfo, LoggingLevel, SetLevelRequestParam,
    },
    serve_client,
    service::{RoleClient, RunningService},
    ServiceExt,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::common::{first_lines, scenario_server, text_items};

type Client = RunningService<RoleClient, ClientInfo>;

async fn connect() -> Result<(Client, JoinHandle<Result<()>>)> {
    let server = scenario_server()?;
    let (server_transport, client_transport) = tokio::io::duplex(4096);
    let server_task = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        Result::<_, anyhow::Error>::Ok(())
    });
    let client = serve_client(ClientInfo::default(), client_transport).await?;
    Ok((client, server_task))
}

async fn call(client: &Client, name: &'static str, arguments: Value) -> Result<CallToolResult> {
    let result = client
        .call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: arguments.as_object().cloned(),
        })
        .await?;
    Ok(result)
}

#[tokio::test]
async fn list_tools_advertises_the_catalog() -> Result<()> {
    let (client, server_task) = connect().await?;
    let list = client.list_tools(None).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let names: Vec<_> = list.tools.iter().map(|tool| tool.name.to_string()).collect();
    assert_eq!(
        names,
        [
            "get_presentations",
            "search_presentations_by_title",
            "search_presentations_by_year"
        ]
    );
    let year_tool = &list.tools[2];
    assert_eq!(
        year_tool.input_schema.get("required"),
        Some(&json!(["year"]))
    );
    Ok(())
}

#[tokio::test]
async fn scenario_queries_round_trip_through_the_protocol() -> Result<()> {
    let (client, server_task) = connect().await?;

    let all = call(&client, "get_presentations", json!({})).await?;
    let loom = call(
        &client,
        "search_presentations_by_title",
        json!({ "query": "loom" }),
    )
    .await?;
    let year_2023 = call(
        &client,
        "search_presentations_by_year",
        json!({ "year": 2023 }),
    )
    .await?;
    let year_1999 = call(
        &client,
        "search_presentations_by_year",
        json!({ "year": 1999 }),
    )
    .await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(all.is_error, Some(false));
    assert_eq!(all.structured_content, Some(json!({ "count": 3 })));
    assert_eq!(
        first_lines(&all),
        [
            "[1] Intro to Virtual Threads",
            "[2] Project Loom Deep Dive",
            "[3] GraalVM Basics"
        ]
    );
    assert_eq!(first_lines(&loom), ["[2] Project Loom Deep Dive"]);
    assert_eq!(
        first_lines(&year_2023),
        ["[1] Intro to Virtual Threads", "[2] Project Loom Deep Dive"]
    );
    assert_eq!(year_1999.is_error, Some(false));
    assert!(year_1999.content.is_empty());
    assert_eq!(year_1999.structured_content, Some(json!({ "count": 0 })));
    Ok(())
}

#[tokio::test]
async fn empty_matches_reach_the_client_as_successes() -> Result<()> {
    let (client, server_task) = connect().await?;

    let blank = call(
        &client,
        "search_presentations_by_title",
        json!({ "query": "" }),
    )
    .await?;
    let no_match = call(
        &client,
        "search_presentations_by_title",
        json!({ "query": "kotlin" }),
    )
    .await?;
    let year_1999 = call(
        &client,
        "search_presentations_by_year",
        json!({ "year": 1999 }),
    )
    .await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    for result in [&blank, &no_match, &year_1999] {
        assert_eq!(result.is_error, Some(false));
        assert!(result.content.is_empty(), "{result:?}");
        assert_eq!(result.structured_content, Some(json!({ "count": 0 })));
    }
    Ok(())
}

#[tokio::test]
async fn failures_are_returned_as_error_results() -> Result<()> {
    let (client, server_task) = connect().await?;

    let unknown = call(&client, "drop_presentations", json!({})).await?;
    let bad_year = call(
        &client,
        "search_presentations_by_year",
        json!({ "year": "next year" }),
    )
    .await?;
    // The session stays usable after failed invocations.
    let after = call(&client, "get_presentations", json!({})).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(unknown.is_error, Some(true));
    let unknown_text = text_items(&unknown);
    assert_eq!(unknown_text.len(), 1);
    assert!(unknown_text[0].starts_with("unknown_tool: "), "{unknown_text:?}");

    assert_eq!(bad_year.is_error, Some(true));
    let bad_year_text = text_items(&bad_year);
    assert!(
        bad_year_text[0].starts_with("invalid_arguments: ") && bad_year_text[0].contains("`year`"),
        "{bad_year_text:?}"
    );

    assert_eq!(after.is_error, Some(false));
    assert_eq!(after.content.len(), 3);
    Ok(())
}

#[tokio::test]
async fn server_advertises_tools_and_logging() -> Result<()> {
    let (client, server_task) = connect().await?;
    let info = client.peer_info().cloned();
    let set_level = client
        .set_level(SetLevelRequestParam {
            level: LoggingLevel::Debug,
        })
        .await;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let info = info.expect("server info is available after initialization");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.logging.is_some());
    assert_eq!(info.server_info.name, "javaone-mcp-test");
    assert!(set_level.is_ok(), "{set_level:?}");
    Ok(())
}

#[tokio::test]
async fn repeated_listing_is_identical() -> Result<()> {
    let (client, server_task) = connect().await?;
    let first = call(&client, "get_presentations", json!({})).await?;
    let second = call(&client, "get_presentations", json!({})).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(text_items(&first), text_items(&second));
    Ok(())
}

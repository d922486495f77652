use std::{io::Write, process::Stdio, time::Duration};

use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
};
use serde_json::json;
use tempfile::NamedTempFile;
use tokio::{
    net::TcpStream,
    process::{Child, Command},
    time::{sleep, timeout},
};

use crate::common::{first_lines, fixture, BINARY_PATH};

fn free_port() -> Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

fn tcp_config(port: u16) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "[server]")?;
    writeln!(file, "host = \"127.0.0.1\"")?;
    writeln!(file, "port = {port}")?;
    writeln!(file, "[catalog]")?;
    writeln!(
        file,
        "dataset_path = {:?}",
        fixture("tests/fixtures/presentations_scenario.json")
    )?;
    Ok(file)
}

fn spawn_tcp_server(config: &NamedTempFile) -> Result<Child> {
    Command::new(BINARY_PATH)
        .arg("--transport")
        .arg("tcp")
        .arg("--config")
        .arg(config.path())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .context("failed to spawn TCP server process")
}

async fn connect(addr: &str) -> Result<TcpStream> {
    for _ in 0..50 {
        if let Ok(stream) = TcpStream::connect(addr).await {
            return Ok(stream);
        }
        sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("server never accepted connections on {addr}")
}

#[tokio::test]
async fn tcp_mode_serves_concurrent_sessions() -> Result<()> {
    let port = free_port()?;
    let config = tcp_config(port)?;
    let mut child = spawn_tcp_server(&config)?;
    let addr = format!("127.0.0.1:{port}");

    let first_stream = connect(&addr).await?;
    let second_stream = connect(&addr).await?;
    let (first, second) = tokio::try_join!(
        serve_client(ClientInfo::default(), first_stream),
        serve_client(ClientInfo::default(), second_stream),
    )?;

    let (by_title, by_year) = timeout(Duration::from_secs(10), async {
        tokio::try_join!(
            first.call_tool(CallToolRequestParam {
                name: "search_presentations_by_title".into(),
                arguments: json!({ "query": "graal" }).as_object().cloned(),
            }),
            second.call_tool(CallToolRequestParam {
                name: "search_presentations_by_year".into(),
                arguments: json!({ "year": 2023 }).as_object().cloned(),
            }),
        )
    })
    .await??;

    assert_eq!(first_lines(&by_title), ["[3] GraalVM Basics"]);
    assert_eq!(
        first_lines(&by_year),
        ["[1] Intro to Virtual Threads", "[2] Project Loom Deep Dive"]
    );

    // Closing one session leaves the other usable.
    first.cancel().await?;
    let listing = second.list_tools(None).await?;
    assert_eq!(listing.tools.len(), 3);
    second.cancel().await?;

    child.kill().await?;
    Ok(())
}

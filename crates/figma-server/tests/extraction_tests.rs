//! End-to-end wiring of configuration, client, scanner, and store.
//!
//! Mirrors what the server does for a tool call, with the Figma API replaced
//! by a local responder.

#![recursion_limit = "256"]

use figma_components_client::{DocumentSource, FigmaClient};
use figma_components_core::FigmaConfig;
use figma_components_extract::{ComponentStore, ScanOptions, scan};
use figma_components_server::ExtractionResult;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers every connection with the same JSON body.
async fn serve_document(document: Value) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = json!({ "name": "Kit", "version": "7", "document": document }).to_string();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.ok();
            stream.shutdown().await.ok();
        }
    });

    format!("http://{addr}")
}

fn config_for(api_base: &str, project_dir: &TempDir) -> FigmaConfig {
    let project_dir = project_dir.path().display().to_string();
    FigmaConfig::from_lookup(|key| match key {
        "FIGMA_TOKEN" => Some("figd_e2e".to_string()),
        "FIGMA_FILE" => Some("Kit42".to_string()),
        "FIGMA_API_BASE" => Some(api_base.to_string()),
        "PROJECT_DIR" => Some(project_dir.clone()),
        _ => None,
    })
    .unwrap()
}

fn kit_document() -> Value {
    json!({
        "id": "0:0",
        "type": "DOCUMENT",
        "children": [{
            "id": "0:1",
            "name": "Components",
            "type": "CANVAS",
            "children": [
                { "id": "1:0", "name": "Feedback", "type": "SECTION", "children": [
                    { "id": "1:1", "name": "Alert", "type": "COMPONENT_SET", "children": [
                        { "id": "1:2", "name": "Tone=Info, Dismissible=True", "type": "COMPONENT",
                          "fills": [{ "type": "SOLID" }] },
                        { "id": "1:3", "name": "Tone=Danger, Dismissible=False", "type": "COMPONENT" }
                    ]}
                ]},
                { "id": "2:0", "name": "Icons", "type": "SECTION", "children": [
                    { "id": "2:1", "name": "Icon", "type": "FRAME", "children": [] }
                ]}
            ]
        }]
    })
}

#[tokio::test]
async fn test_extract_into_project_components_dir() {
    let project = TempDir::new().unwrap();
    let base = serve_document(kit_document()).await;
    let config = config_for(&base, &project);
    assert_eq!(config.output_dir(), project.path().join("components"));

    let client = FigmaClient::new(&config).unwrap();
    let store = ComponentStore::new(config.output_dir());

    let file = client.fetch_document().await.unwrap();
    let outcome = scan(&file.document, &ScanOptions::all(), &store).unwrap();
    assert_eq!(outcome.processed_count, 1);

    let report = store.write_all(&outcome.components).unwrap();
    let result = ExtractionResult::new(outcome, report, store.dir());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["written"][0]["name"], json!("Alert"));
    assert_eq!(value["written"][0]["slug"], json!("alert"));
    assert_eq!(value["icon_set"]["id"], json!("2:1"));

    let written: Value = serde_json::from_str(
        &std::fs::read_to_string(project.path().join("components").join("Alert.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        written["props"],
        json!([
            { "name": "tone", "type": "Info | Danger" },
            { "name": "dismissible", "type": "boolean" }
        ])
    );
    assert_eq!(written["children"][0]["fills"], json!([{ "type": "SOLID" }]));
    assert!(written["children"][1].get("fills").is_none());
}

#[tokio::test]
async fn test_second_run_extracts_nothing_missing() {
    let project = TempDir::new().unwrap();
    let base = serve_document(kit_document()).await;
    let config = config_for(&base, &project);
    let client = FigmaClient::new(&config).unwrap();
    let store = ComponentStore::new(config.output_dir());

    let first = client.fetch_document().await.unwrap();
    let outcome = scan(&first.document, &ScanOptions::all(), &store).unwrap();
    store.write_all(&outcome.components).unwrap();

    let second = client.fetch_document().await.unwrap();
    let missing = scan(&second.document, &ScanOptions::missing(), &store).unwrap();

    assert_eq!(missing.processed_count, 0);
    assert_eq!(
        missing.report(),
        "Successfully processed 0 components.\n\nComponent sets: 0\nIcon set: Found\n\nComponent paths:\n\n- Icon set: Icon"
    );
}

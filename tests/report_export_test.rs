use anyhow::Result;
use httpmock::prelude::*;
use hubspot_reporter::{HubSpotClient, LocalStorage, ReportEngine, ReportExporter, ReporterConfig};
use std::io::Read;
use tempfile::TempDir;

fn mock_config(server: &MockServer, output_dir: &str) -> ReporterConfig {
    ReporterConfig {
        api_key: "test-token".to_string(),
        base_url: server.base_url(),
        output_dir: output_dir.to_string(),
    }
}

fn engine_for(
    server: &MockServer,
    output_dir: &str,
) -> ReportEngine<HubSpotClient, LocalStorage> {
    let config = mock_config(server, output_dir);
    let storage = LocalStorage::new(config.output_dir.clone());
    let exporter = ReportExporter::new(storage, config.output_dir.clone());
    ReportEngine::new(HubSpotClient::new(&config), exporter)
}

/// Concatenated text of every XML part in the workbook, for content asserts.
fn workbook_text(path: &str) -> Result<String> {
    let data = std::fs::read(path)?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data))?;

    let mut text = String::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.name().ends_with(".xml") {
            file.read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

/// The timestamp suffix is `_YYYYMMDD_HHMMSS.xlsx`.
fn assert_timestamped(file_name: &str, prefix: &str) {
    let rest = file_name
        .strip_prefix(prefix)
        .unwrap_or_else(|| panic!("unexpected file name: {}", file_name));
    let rest = rest.strip_suffix(".xlsx").expect("xlsx extension");

    let (date, time) = rest.split_once('_').expect("date_time separator");
    assert_eq!(date.len(), 8);
    assert_eq!(time.len(), 6);
    assert!(date.chars().all(|c| c.is_ascii_digit()));
    assert!(time.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_end_to_end_report_from_mock_api() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("reports");
    let output_dir = output_dir.to_str().unwrap().to_string();

    let server = MockServer::start();

    let pipelines_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/crm/v3/pipelines/deals")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [{"id": "default", "label": "Sales Pipeline"}]
            }));
    });

    let deals_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/crm/v3/objects/deals")
            .query_param(
                "properties",
                "dealname,amount,dealstage,closedate,pipeline,createdate",
            )
            .query_param("limit", "100");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [{
                    "properties": {
                        "dealname": "Acme - Q1 Deal",
                        "amount": "$10,000",
                        "dealstage": "Closed Won",
                        "closedate": "2024-03-01",
                        "createdate": "2024-01-01",
                        "pipeline": "default"
                    }
                }]
            }));
    });

    let engine = engine_for(&server, &output_dir);
    let path = engine.run().await?.expect("a report file");

    pipelines_mock.assert();
    deals_mock.assert();

    assert!(std::path::Path::new(&path).exists());

    let file_name = path.rsplit('/').next().unwrap();
    assert_timestamped(file_name, "Sales_Pipeline_");

    let text = workbook_text(&path)?;
    // Sheet named after the pipeline.
    assert!(text.contains("\"Sales Pipeline\""));
    // Header row.
    for header in ["Deal Name", "Amount", "Stage", "Close Date", "Created Date"] {
        assert!(text.contains(header), "missing header {}", header);
    }
    // The single data row, exactly as returned by the API.
    for value in ["Acme - Q1 Deal", "$10,000", "Closed Won", "2024-03-01", "2024-01-01"] {
        assert!(text.contains(value), "missing cell value {}", value);
    }

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_render_as_na_and_order_is_preserved() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/crm/v3/pipelines/deals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [{"id": "default", "label": "Sales Pipeline"}]
            }));
    });

    server.mock(|when, then| {
        when.method(GET).path("/crm/v3/objects/deals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [
                    {"properties": {"dealname": "First listed deal", "pipeline": "default"}},
                    {"properties": {"dealname": "Second listed deal", "pipeline": "default"}}
                ]
            }));
    });

    let engine = engine_for(&server, &output_dir);
    let path = engine.run().await?.expect("a report file");

    let text = workbook_text(&path)?;
    assert!(text.contains("N/A"));

    // The shared string table is built in write order, so the first deal's
    // name must appear before the second's.
    let first = text.find("First listed deal").expect("first deal present");
    let second = text.find("Second listed deal").expect("second deal present");
    assert!(first < second);

    Ok(())
}

#[tokio::test]
async fn test_long_pipeline_name_is_truncated_in_sheet_but_not_in_file_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let long_label = "Enterprise Partner Channel Expansion Pipeline";

    server.mock(|when, then| {
        when.method(GET).path("/crm/v3/pipelines/deals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [{"id": "p1", "label": long_label}]
            }));
    });

    server.mock(|when, then| {
        when.method(GET).path("/crm/v3/objects/deals");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [{"properties": {"dealname": "Any deal", "pipeline": "p1"}}]
            }));
    });

    let engine = engine_for(&server, &output_dir);
    let path = engine.run().await?.expect("a report file");

    let file_name = path.rsplit('/').next().unwrap();
    assert_timestamped(
        file_name,
        "Enterprise_Partner_Channel_Expansion_Pipeline_",
    );

    let text = workbook_text(&path)?;
    let truncated: String = long_label.chars().take(31).collect();
    assert!(text.contains(&format!("\"{}\"", truncated)));
    assert!(!text.contains(&format!("\"{}\"", long_label)));

    Ok(())
}

#[tokio::test]
async fn test_fatal_pipeline_listing_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/crm/v3/pipelines/deals");
        then.status(500);
    });

    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().to_str().unwrap().to_string();

    let engine = engine_for(&server, &output_dir);
    assert!(engine.run().await.is_err());
}

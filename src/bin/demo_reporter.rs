use hubspot_reporter::utils::logger;
use hubspot_reporter::{DemoDealSource, LocalStorage, ReportEngine, ReportExporter};

const DEMO_OUTPUT_DIR: &str = "demo_reports";

#[tokio::main]
async fn main() {
    logger::init_cli_logger(false);

    println!("HubSpot Pipeline Reporter - DEMO MODE");
    println!("Generating sample report with dummy data...");

    let storage = LocalStorage::new(DEMO_OUTPUT_DIR.to_string());
    let exporter = ReportExporter::new(storage, DEMO_OUTPUT_DIR.to_string());
    let engine = ReportEngine::new(DemoDealSource::default(), exporter);

    match engine.run().await {
        Ok(Some(path)) => {
            println!("✅ Demo report generated: {}", path);
            println!("Open the file to see the formatted Excel output.");
            println!("The real reporter fetches live data from your HubSpot account.");
        }
        Ok(None) => {
            println!("Nothing to export");
        }
        Err(e) => {
            tracing::error!("❌ Demo report generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

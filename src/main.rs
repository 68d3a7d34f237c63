use hubspot_reporter::utils::{logger, validation::Validate};
use hubspot_reporter::{
    HubSpotClient, LocalStorage, ReportEngine, ReportExporter, ReporterConfig,
};

#[tokio::main]
async fn main() {
    logger::init_cli_logger(false);

    tracing::info!("Starting HubSpot pipeline reporter");

    let config = match ReporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Set HUBSPOT_API_KEY in the environment");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_dir.clone());
    let exporter = ReportExporter::new(storage, config.output_dir.clone());
    let client = HubSpotClient::new(&config);
    let engine = ReportEngine::new(client, exporter);

    match engine.run().await {
        Ok(Some(path)) => {
            tracing::info!("✅ Report generation completed");
            println!("✅ Report saved: {}", path);
        }
        Ok(None) => {
            println!("Nothing to export");
        }
        Err(e) => {
            tracing::error!("❌ Report generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

use hubspot_reporter::core::scheduler;
use hubspot_reporter::utils::{logger, validation::Validate};
use hubspot_reporter::{
    HubSpotClient, LocalStorage, ReportEngine, ReportExporter, ReporterConfig, WeeklySchedule,
};

#[tokio::main]
async fn main() {
    logger::init_cli_logger(false);

    // Configuration problems surface here, before the first tick.
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

    println!("HubSpot Pipeline Reporter Scheduler Started");
    println!("Report will be generated every Monday at 9:00 AM");
    println!("Press Ctrl+C to stop");

    scheduler::run_forever(WeeklySchedule::monday_morning(), engine).await;
}

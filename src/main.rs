use clap::Parser;
use catalog_lens::utils::{logger, validation::Validate};
use catalog_lens::{ApiPipeline, CliConfig, LocalStorage, ReportEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting catalog-lens");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ApiPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("Reports written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Report run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

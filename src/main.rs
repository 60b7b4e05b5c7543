use clap::Parser;
use road_neighborhoods::utils::{error::RoadError, logger, validation::Validate};
use road_neighborhoods::{
    CliConfig, FileSource, NeighborhoodEngine, Query, QueryMode, RoadLoader, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting road-neighborhoods");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<String, RoadError> {
    config.validate()?;

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path);
            let settings = TomlConfig::from_file(path)?;
            settings.validate()?;
            settings
        }
        None => TomlConfig::default(),
    };

    let query = match config.query {
        QueryMode::All => Query::Report(config.output_format(settings.output_format())?),
        QueryMode::Span => Query::SmallestSpan,
        QueryMode::City => Query::OwnerName,
    };

    let loader = RoadLoader::new(settings.load_limits());
    let engine = NeighborhoodEngine::with_loader(FileSource::new(&config.input), loader);
    engine.run(query)
}

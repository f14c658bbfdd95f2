use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faculty_directory::config::Config;
use faculty_directory::domain::DomainError;
use faculty_directory::infrastructure::{AppState, SeaOrmFacultyRepository};
use faculty_directory::modules::ingestion::HttpFetcher;
use faculty_directory::{db, server, services};

const USAGE: &str = "\
Usage: faculty_directory <command>

Commands:
  scrape   Crawl the listing pages and write the raw profiles
  clean    Normalize the raw profiles
  load     Replace the SQLite store with the cleaned profiles
  stats    Write exploration statistics over the cleaned profiles
  serve    Serve the read API
  run      scrape, clean, load and stats, then serve";

async fn scrape(config: &Config) -> Result<(), DomainError> {
    let fetcher = HttpFetcher::new(config.fetch_timeout).map_err(|e| DomainError::External(e.to_string()))?;
    services::scrape(&fetcher, &config.listing_sources(), &config.raw_profiles_path()).await?;
    Ok(())
}

async fn clean(config: &Config) -> Result<(), DomainError> {
    services::clean(&config.raw_profiles_path(), &config.cleaned_profiles_path()).await?;
    Ok(())
}

async fn load(config: &Config) -> Result<(), DomainError> {
    let db = db::init_db(&config.database_url).await?;
    let repo = SeaOrmFacultyRepository::new(db);
    services::load(&repo, &config.cleaned_profiles_path()).await?;
    Ok(())
}

async fn stats(config: &Config) -> Result<(), DomainError> {
    services::stats(&config.cleaned_profiles_path(), &config.stats_path()).await?;
    Ok(())
}

async fn serve(config: &Config) -> Result<(), DomainError> {
    let db = db::init_db(&config.database_url).await?;
    let state = AppState::new(db, config.api_mirror_path());
    server::serve(state, config)
        .await
        .map_err(DomainError::Internal)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faculty_directory=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        println!("{}", USAGE);
        return;
    };

    let result = match command.as_str() {
        "scrape" => scrape(&config).await,
        "clean" => clean(&config).await,
        "load" => load(&config).await,
        "stats" => stats(&config).await,
        "serve" => serve(&config).await,
        "run" => async {
            scrape(&config).await?;
            clean(&config).await?;
            load(&config).await?;
            stats(&config).await?;
            serve(&config).await
        }
        .await,
        "-h" | "--help" | "help" => {
            println!("{}", USAGE);
            return;
        }
        other => {
            eprintln!("Unknown command: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        tracing::error!("{} failed: {}", command, e);
        std::process::exit(1);
    }
}
